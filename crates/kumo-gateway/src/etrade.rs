//! E*TRADE session gateway.

use crate::oauth::{OauthSigner, SigningParams};
use async_trait::async_trait;
use kumo_core::error::GatewayError;
use kumo_core::traits::QuoteGateway;
use kumo_core::types::Quote;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// E*TRADE API configuration.
#[derive(Debug, Clone)]
pub struct EtradeConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub sandbox: bool,
}

impl EtradeConfig {
    /// Create config directly with key and secret.
    pub fn new(consumer_key: String, consumer_secret: String, sandbox: bool) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            sandbox,
        }
    }

    /// Load from the named environment variables.
    pub fn from_named_env(
        key_var: &str,
        secret_var: &str,
        sandbox: bool,
    ) -> Result<Self, GatewayError> {
        let consumer_key = std::env::var(key_var)
            .map_err(|_| GatewayError::Configuration(format!("{} not set", key_var)))?;
        let consumer_secret = std::env::var(secret_var)
            .map_err(|_| GatewayError::Configuration(format!("{} not set", secret_var)))?;

        Ok(Self {
            consumer_key,
            consumer_secret,
            sandbox,
        })
    }

    /// Load from the default sandbox environment variables.
    pub fn from_env() -> Result<Self, GatewayError> {
        let sandbox = std::env::var("ETRADE_SANDBOX")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self::from_named_env("CONSUMER_SANDBOX_KEY", "CONSUMER_SANDBOX_SECRET", sandbox)
    }

    pub fn oauth_url(&self) -> &str {
        if self.sandbox {
            "https://apisb.etrade.com/oauth"
        } else {
            "https://api.etrade.com/oauth"
        }
    }

    pub fn market_url(&self) -> &str {
        if self.sandbox {
            "https://apisb.etrade.com/v1/market"
        } else {
            "https://api.etrade.com/v1/market"
        }
    }
}

/// An OAuth token with its secret.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub token: String,
    pub secret: String,
}

/// E*TRADE quote response types
#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "QuoteResponse")]
    quote_response: QuoteResponseBody,
}

#[derive(Debug, Deserialize)]
struct QuoteResponseBody {
    #[serde(rename = "QuoteData", default)]
    quote_data: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(rename = "All")]
    all: Option<AllQuoteDetails>,
}

#[derive(Debug, Deserialize)]
struct AllQuoteDetails {
    open: f64,
    high: f64,
    low: f64,
    #[serde(rename = "lastTrade")]
    last_trade: f64,
}

/// E*TRADE session gateway.
///
/// Holds the OAuth state for one process run: the request token while
/// the user approves the session, then the access token used to sign
/// quote requests. Neither token is persisted anywhere.
pub struct EtradeSession {
    config: EtradeConfig,
    client: Client,
    signer: OauthSigner,
    request: Option<TokenPair>,
    access: Option<TokenPair>,
}

impl EtradeSession {
    /// Create a new unauthenticated session.
    pub fn new(config: EtradeConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let signer = OauthSigner::new(config.consumer_key.clone(), config.consumer_secret.clone());

        Ok(Self {
            config,
            client,
            signer,
            request: None,
            access: None,
        })
    }

    /// Create from the default environment variables.
    pub fn from_env() -> Result<Self, GatewayError> {
        let config = EtradeConfig::from_env()?;
        Self::new(config)
    }

    /// Fetch the request token (first OAuth leg).
    pub async fn request_token(&mut self) -> Result<(), GatewayError> {
        let url = format!("{}/request_token", self.config.oauth_url());
        let params = SigningParams {
            callback: Some("oob"),
            ..Default::default()
        };

        let pair = self.fetch_token(&url, params).await?;
        info!("Obtained request token");
        self.request = Some(pair);
        Ok(())
    }

    /// URL the user must visit to approve the session.
    pub fn authorize_url(&self) -> Result<String, GatewayError> {
        let request = self
            .request
            .as_ref()
            .ok_or_else(|| GatewayError::Auth("No request token; fetch one first".into()))?;

        Ok(format!(
            "{}/authorize?oauth_token={}",
            self.config.oauth_url(),
            urlencoding::encode(&request.token)
        ))
    }

    /// Trade the verifier code for an access token (third OAuth leg).
    ///
    /// The request token is kept on failure so the exchange can be
    /// retried with a fresh verifier.
    pub async fn exchange_verifier(&mut self, verifier: &str) -> Result<(), GatewayError> {
        let request = self
            .request
            .as_ref()
            .ok_or_else(|| GatewayError::Auth("No request token; fetch one first".into()))?;

        let url = format!("{}/access_token", self.config.oauth_url());
        let params = SigningParams {
            token: Some(&request.token),
            token_secret: Some(&request.secret),
            verifier: Some(verifier),
            ..Default::default()
        };

        let pair = self.fetch_token(&url, params).await?;
        info!("Access token granted");
        self.request = None;
        self.access = Some(pair);
        Ok(())
    }

    /// Whether the session holds an access token.
    pub fn is_authorized(&self) -> bool {
        self.access.is_some()
    }

    async fn fetch_token(
        &self,
        url: &str,
        params: SigningParams<'_>,
    ) -> Result<TokenPair, GatewayError> {
        let auth = self.signer.authorization_header("POST", url, &[], &params)?;

        let resp = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Api(format!("{}: {}", status, text)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        parse_token_response(&body)
    }
}

#[async_trait]
impl QuoteGateway for EtradeSession {
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, GatewayError> {
        let access = self.access.as_ref().ok_or_else(|| {
            GatewayError::Auth("Not authorized; complete the verification flow first".into())
        })?;

        let url = format!("{}/quote/{}.json", self.config.market_url(), symbol);
        let params = SigningParams {
            token: Some(&access.token),
            token_secret: Some(&access.secret),
            ..Default::default()
        };
        let auth = self.signer.authorization_header("GET", &url, &[], &params)?;

        debug!("Fetching quote for {}", symbol);

        let resp = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Api(format!("{}: {}", status, text)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        parse_quote_payload(symbol, &body)
    }

    fn name(&self) -> &str {
        "E*TRADE"
    }
}

/// Parse a form-encoded token response body.
fn parse_token_response(body: &str) -> Result<TokenPair, GatewayError> {
    let mut token = None;
    let mut secret = None;

    for pair in body.split('&') {
        let mut parts = pair.splitn(2, '=');
        let (key, value) = match (parts.next(), parts.next()) {
            (Some(k), Some(v)) => (k, v),
            _ => continue,
        };
        let value = urlencoding::decode(value)
            .map_err(|e| GatewayError::Auth(e.to_string()))?
            .into_owned();

        match key {
            "oauth_token" => token = Some(value),
            "oauth_token_secret" => secret = Some(value),
            _ => {}
        }
    }

    match (token, secret) {
        (Some(token), Some(secret)) => Ok(TokenPair { token, secret }),
        _ => Err(GatewayError::Auth(format!(
            "Malformed token response: {}",
            body
        ))),
    }
}

/// Map one quote payload to a normalized record.
///
/// The response never names the symbol at the top level, so the record
/// is stamped with the symbol that was requested.
fn parse_quote_payload(symbol: &str, body: &str) -> Result<Quote, GatewayError> {
    let envelope: QuoteEnvelope =
        serde_json::from_str(body).map_err(|e| GatewayError::MalformedQuote(e.to_string()))?;

    let data = envelope
        .quote_response
        .quote_data
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::EmptyQuote(symbol.to_string()))?;

    let all = data
        .all
        .ok_or_else(|| GatewayError::MalformedQuote("missing All block".into()))?;

    Ok(Quote::new(symbol, all.open, all.high, all.low, all.last_trade))
}
