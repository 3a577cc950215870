mod cli;
mod repl;

use emomate_ai::{GeminiClient, GeminiConfig};
use emomate_config::EmomateConfig;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try the workspace root and the current directory
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        manifest_dir.join("..").join("..").join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn load_config(args: &cli::Args) -> (EmomateConfig, Option<String>) {
    let result = match args.config.as_deref() {
        Some(path) => emomate_config::load_from_path(std::path::Path::new(path)),
        None => emomate_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (EmomateConfig::default(), Some(e.to_string())),
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Config is loaded before logging so its log level can apply;
    // any load failure is reported right after the subscriber is up.
    let (config, config_err) = load_config(&args);

    // Initialize logging: --log-level beats config, RUST_LOG beats both
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "emomate=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("EmoMate v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("config load failed, using defaults: {e}");
    }
    tracing::info!("using model {}", config.model.name);

    // The key comes from the environment only. A missing key must not
    // crash: it is reported once here, and every send afterwards takes
    // the fallback path with a configuration error.
    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.trim().is_empty() {
        tracing::error!("GEMINI_API_KEY is not set; chat requests will fail until it is provided");
    }

    let client = GeminiClient::new(
        GeminiConfig::new(api_key)
            .with_model(&config.model.name)
            .with_max_output_tokens(config.model.max_output_tokens)
            .with_temperature(config.model.temperature),
    );

    if let Err(e) = repl::run(&client).await {
        tracing::error!("chat loop error: {e}");
    }
    tracing::info!("shutdown complete");
}
