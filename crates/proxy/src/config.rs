use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8888";
pub const DEFAULT_PREFIX: &str = "/.netlify/functions";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBind { raw: String },
    HelpRequested,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBind { raw } => write!(f, "invalid --bind value: {raw}"),
            ArgsError::HelpRequested => f.write_str("help requested"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Listener settings for the evaluation proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub bind: SocketAddr,
    /// Path prefix the functions are mounted under, without a trailing slash.
    pub prefix: String,
}

impl ProxyConfig {
    /// Parses flags, falling back to `QUIZ_PROXY_BIND` / `QUIZ_PROXY_PREFIX`, then defaults.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values or an unparsable address.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse(args, |key| std::env::var(key).ok())
    }

    /// Like [`ProxyConfig::from_args`] with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// See [`ProxyConfig::from_args`].
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut bind = env("QUIZ_PROXY_BIND").unwrap_or_else(|| DEFAULT_BIND.into());
        let mut prefix = env("QUIZ_PROXY_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.into());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bind" => bind = require_value(&mut args, "--bind")?,
                "--prefix" => prefix = require_value(&mut args, "--prefix")?,
                "--help" | "-h" => return Err(ArgsError::HelpRequested),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let bind = bind
            .trim()
            .parse()
            .map_err(|_| ArgsError::InvalidBind { raw: bind.clone() })?;

        Ok(Self {
            bind,
            prefix: normalize_prefix(&prefix),
        })
    }

    /// Full route path of one function.
    #[must_use]
    pub fn route(&self, function: &str) -> String {
        format!("{}/{function}", self.prefix)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

/// `functions/` → `/functions`, `/` → `` (routes then sit at the root).
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p proxy -- [--bind <addr>] [--prefix <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bind {DEFAULT_BIND}");
    eprintln!("  --prefix {DEFAULT_PREFIX}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_PROXY_BIND, QUIZ_PROXY_PREFIX");
    eprintln!("  CLAUDE_API_KEY (required per request), QUIZ_AI_BASE_URL, QUIZ_AI_MODEL");
    eprintln!("  RUST_LOG, LOG_FORMAT=json|pretty");
}
