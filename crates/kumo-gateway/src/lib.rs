//! E*TRADE sandbox session gateway.
//!
//! Implements the three-leg OAuth 1.0a flow against the E*TRADE
//! sandbox and fetches single-quote snapshots once authorized. Tokens
//! live only in memory; every run of the process authenticates afresh.

mod etrade;
mod oauth;

pub use etrade::{EtradeConfig, EtradeSession, TokenPair};
pub use oauth::{OauthSigner, SigningParams};
