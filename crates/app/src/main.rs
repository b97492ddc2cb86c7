use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::Catalog;
use services::{
    Clock, DEFAULT_ENDPOINT, EvaluationClient, EvaluationEndpoint, HttpEvaluationClient,
    init_tracing,
};
use tracing::info;
use ui::{App, UiApp, build_app_context};

const DEFAULT_WIDTH: f64 = 1280.0;
const DEFAULT_HEIGHT: f64 = 800.0;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidEndpoint { raw: String, reason: String },
    InvalidSize { flag: &'static str, raw: String },
    HelpRequested,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidEndpoint { raw, reason } => {
                write!(f, "invalid --endpoint value: {raw} ({reason})")
            }
            ArgsError::InvalidSize { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::HelpRequested => f.write_str("help requested"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    client: Arc<HttpEvaluationClient>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn evaluation_client(&self) -> Arc<dyn EvaluationClient> {
        self.client.clone()
    }

    fn catalog(&self) -> &'static Catalog {
        Catalog::builtin()
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Debug)]
struct Args {
    endpoint: EvaluationEndpoint,
    width: f64,
    height: f64,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--endpoint <url>] [--width <px>] [--height <px>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --endpoint {DEFAULT_ENDPOINT}");
    eprintln!("  --width {DEFAULT_WIDTH} --height {DEFAULT_HEIGHT}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_EVAL_URL, RUST_LOG, LOG_FORMAT=json|pretty");
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut endpoint = env("QUIZ_EVAL_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let mut width = DEFAULT_WIDTH;
        let mut height = DEFAULT_HEIGHT;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--endpoint" => endpoint = require_value(&mut args, "--endpoint")?,
                "--width" => width = parse_size(&require_value(&mut args, "--width")?, "--width")?,
                "--height" => {
                    height = parse_size(&require_value(&mut args, "--height")?, "--height")?;
                }
                "--help" | "-h" => return Err(ArgsError::HelpRequested),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let endpoint =
            EvaluationEndpoint::parse(&endpoint).map_err(|err| ArgsError::InvalidEndpoint {
                raw: endpoint.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            endpoint,
            width,
            height,
        })
    }
}

fn parse_size(raw: &str, flag: &'static str) -> Result<f64, ArgsError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or_else(|| ArgsError::InvalidSize {
            flag,
            raw: raw.to_string(),
        })
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let parsed = match Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(parsed) => parsed,
        Err(ArgsError::HelpRequested) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing()?;
    info!(endpoint = %parsed.endpoint, "starting desktop app");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        client: Arc::new(HttpEvaluationClient::new(parsed.endpoint)),
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("UX Designer Assessment")
            .with_inner_size(LogicalSize::new(parsed.width, parsed.height))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
