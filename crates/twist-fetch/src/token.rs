//! Token decoding and the fetcher.

use crate::{FetchConfig, FetchError, url};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use twist_eval::{EvalError, ExternalToken};

/// Wire shape of a token: `{"number": 5, "word": "Foo"}`.
///
/// Keys are matched case-insensitively; the number is kept as raw JSON so
/// out-of-range values are reported as overflow instead of a type error.
#[derive(Debug, Deserialize)]
struct RawToken {
    number: Number,
    word: String,
}

impl TryFrom<RawToken> for ExternalToken {
    type Error = FetchError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        Ok(ExternalToken::new(to_i64(&raw.number)?, raw.word))
    }
}

/// 2^63, the first value above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn to_i64(number: &Number) -> Result<i64, FetchError> {
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    // What remains is a u64 above i64::MAX or a float.
    let f = match number.as_f64() {
        Some(f) if f.fract() == 0.0 => f,
        _ => {
            return Err(FetchError::Malformed(format!(
                "token number {number} is not an integer"
            )));
        }
    };
    if f >= I64_BOUND || f < -I64_BOUND {
        return Err(EvalError::Overflow(format!(
            "{number} does not fit in a 64-bit signed integer"
        ))
        .into());
    }
    Ok(f as i64)
}

/// Decode one token from a JSON body.
pub fn parse_token(body: &[u8]) -> Result<ExternalToken, FetchError> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(fields) = value else {
        return Err(FetchError::Malformed("expected a JSON object".to_string()));
    };

    let fields: Map<String, Value> = fields
        .into_iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v))
        .collect();
    let raw: RawToken = serde_json::from_value(Value::Object(fields))?;
    ExternalToken::try_from(raw)
}

/// Fetches external tokens from the configured word service.
pub struct TokenFetcher {
    config: FetchConfig,
    client: Client,
}

impl TokenFetcher {
    /// Create a fetcher for the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = url::client(&config)?;
        Ok(Self { config, client })
    }

    /// Create a fetcher configured from the environment.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::new(FetchConfig::from_env()?)
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch one token.
    pub fn fetch(&self) -> Result<ExternalToken, FetchError> {
        let body = url::fetch_url(&self.client, &self.config.url())?;
        let token = parse_token(&body)?;
        tracing::debug!(number = token.number, word = %token.word, "received external token");
        Ok(token)
    }
}
