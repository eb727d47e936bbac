//! OAuth 1.0a request signing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use kumo_core::error::GatewayError;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Per-request signing inputs.
///
/// Which fields are set depends on the leg: the request-token leg
/// carries a callback, the access-token leg a token and verifier, and
/// resource requests just the token.
#[derive(Debug, Clone, Default)]
pub struct SigningParams<'a> {
    pub token: Option<&'a str>,
    pub token_secret: Option<&'a str>,
    pub verifier: Option<&'a str>,
    pub callback: Option<&'a str>,
}

/// HMAC-SHA1 signer for OAuth 1.0a requests.
pub struct OauthSigner {
    consumer_key: String,
    consumer_secret: String,
}

impl OauthSigner {
    /// Create a signer for a consumer key pair.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Build the `Authorization` header value for one request.
    ///
    /// `query` must list every query parameter the request URL carries;
    /// they take part in the signature but stay out of the header.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        query: &[(String, String)],
        params: &SigningParams<'_>,
    ) -> Result<String, GatewayError> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let timestamp = Utc::now().timestamp().to_string();

        self.header_with(method, url, query, params, &nonce, &timestamp)
    }

    fn header_with(
        &self,
        method: &str,
        url: &str,
        query: &[(String, String)],
        params: &SigningParams<'_>,
        nonce: &str,
        timestamp: &str,
    ) -> Result<String, GatewayError> {
        let mut oauth_params: Vec<(String, String)> = vec![
            ("oauth_consumer_key".into(), self.consumer_key.clone()),
            ("oauth_nonce".into(), nonce.to_string()),
            ("oauth_signature_method".into(), "HMAC-SHA1".into()),
            ("oauth_timestamp".into(), timestamp.to_string()),
            ("oauth_version".into(), "1.0".into()),
        ];
        if let Some(callback) = params.callback {
            oauth_params.push(("oauth_callback".into(), callback.to_string()));
        }
        if let Some(token) = params.token {
            oauth_params.push(("oauth_token".into(), token.to_string()));
        }
        if let Some(verifier) = params.verifier {
            oauth_params.push(("oauth_verifier".into(), verifier.to_string()));
        }

        let mut signed = oauth_params.clone();
        signed.extend(query.iter().cloned());

        let base = signature_base(method, url, &signed);
        let signature = self.sign(&base, params.token_secret)?;
        oauth_params.push(("oauth_signature".into(), signature));

        let fields: Vec<String> = oauth_params
            .iter()
            .map(|(k, v)| format!(r#"{}="{}""#, k, percent_encode(v)))
            .collect();

        Ok(format!("OAuth {}", fields.join(", ")))
    }

    fn sign(&self, base: &str, token_secret: Option<&str>) -> Result<String, GatewayError> {
        let key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(token_secret.unwrap_or_default())
        );

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        mac.update(base.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// Signature base string: method, URL, and the sorted parameter set,
/// each percent-encoded and joined with `&`.
fn signature_base(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();

    let param_string: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string.join("&"))
    )
}

/// Percent-encode with the RFC 3986 unreserved set.
fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encoding_unreserved_set() {
        assert_eq!(percent_encode("abc123-._~"), "abc123-._~");
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a+b&c=d"), "a%2Bb%26c%3Dd");
        assert_eq!(percent_encode("https://x.com/y"), "https%3A%2F%2Fx.com%2Fy");
    }

    #[test]
    fn test_signature_base_sorts_parameters() {
        let params = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];

        let base = signature_base("get", "https://example.com/path", &params);
        assert_eq!(
            base,
            "GET&https%3A%2F%2Fexample.com%2Fpath&a%3D1%26b%3D2"
        );
    }

    #[test]
    fn test_header_shape() {
        let signer = OauthSigner::new("key", "secret");
        let params = SigningParams {
            callback: Some("oob"),
            ..Default::default()
        };

        let header = signer
            .header_with(
                "GET",
                "https://apisb.etrade.com/oauth/request_token",
                &[],
                &params,
                "fixednonce",
                "1700000000",
            )
            .unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_consumer_key="key""#));
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
        assert!(header.contains(r#"oauth_callback="oob""#));
        assert!(header.contains(r#"oauth_timestamp="1700000000""#));
        assert!(header.contains("oauth_signature="));
    }

    #[test]
    fn test_signature_is_deterministic_for_fixed_inputs() {
        let signer = OauthSigner::new("key", "secret");
        let params = SigningParams::default();

        let first = signer
            .header_with("GET", "https://example.com", &[], &params, "n1", "100")
            .unwrap();
        let second = signer
            .header_with("GET", "https://example.com", &[], &params, "n1", "100")
            .unwrap();
        let other_nonce = signer
            .header_with("GET", "https://example.com", &[], &params, "n2", "100")
            .unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other_nonce);
    }

    #[test]
    fn test_token_secret_changes_signature() {
        let signer = OauthSigner::new("key", "secret");
        let bare = SigningParams::default();
        let with_token = SigningParams {
            token: Some("tok"),
            token_secret: Some("tok-secret"),
            ..Default::default()
        };

        let first = signer
            .header_with("GET", "https://example.com", &[], &bare, "n", "100")
            .unwrap();
        let second = signer
            .header_with("GET", "https://example.com", &[], &with_token, "n", "100")
            .unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_query_parameters_take_part_in_signature() {
        let signer = OauthSigner::new("key", "secret");
        let params = SigningParams::default();
        let query = vec![("detailFlag".to_string(), "ALL".to_string())];

        let without = signer
            .header_with("GET", "https://example.com", &[], &params, "n", "100")
            .unwrap();
        let with = signer
            .header_with("GET", "https://example.com", &query, &params, "n", "100")
            .unwrap();

        assert_ne!(without, with);
        // Query parameters stay out of the header itself
        assert!(!with.contains("detailFlag"));
    }
}
