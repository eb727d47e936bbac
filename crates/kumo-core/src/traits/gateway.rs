//! Quote gateway trait definition.

use crate::error::GatewayError;
use crate::types::Quote;
use async_trait::async_trait;

/// Trait for brokerage quote gateways.
///
/// Gateways own the authenticated session against a remote market data
/// API and hand back normalized quote records.
#[async_trait]
pub trait QuoteGateway: Send + Sync {
    /// Fetch the latest quote for a symbol.
    ///
    /// # Arguments
    /// * `symbol` - The symbol to look up
    ///
    /// # Returns
    /// One normalized quote record
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, GatewayError>;

    /// Get the gateway name.
    fn name(&self) -> &str;
}
