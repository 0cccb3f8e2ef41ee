use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Wires the use cases around an already connected repository.
pub fn init_app_state(config: AppConfig, repo: Arc<dyn WaitlistRepo>) -> AppState {
    let waitlist_use_cases = WaitlistUseCases::new(repo, config.store_timeout);

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped when the file cannot be created
    let log_path = std::env::var("LOG_FILE").unwrap_or_else(|_| "app.log".to_string());
    let json_layer = File::create(&log_path).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
