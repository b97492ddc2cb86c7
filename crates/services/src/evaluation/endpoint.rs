use std::fmt;

use url::Url;

use crate::error::EndpointError;

/// Where the desktop app reaches the evaluation functions by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8888/.netlify/functions";

/// Validated base URL the evaluation functions hang off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationEndpoint {
    base: String,
}

impl Default for EvaluationEndpoint {
    fn default() -> Self {
        Self {
            base: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl EvaluationEndpoint {
    /// # Errors
    ///
    /// Returns `EndpointError` if `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(raw.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Full URL of one function, e.g. `{base}/evaluate-answer`.
    #[must_use]
    pub fn url_for(&self, function: &str) -> String {
        format!("{}/{}", self.base, function.trim_start_matches('/'))
    }
}

impl fmt::Display for EvaluationEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
