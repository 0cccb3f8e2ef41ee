use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use waitlist::{
    infra::{
        InfraError,
        app::create_app,
        config::AppConfig,
        postgres_persistence,
        setup::{init_app_state, init_tracing},
        shutdown::shutdown_signal,
    },
    use_cases::waitlist::WaitlistRepo,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr;
    info!(origins = ?config.cors_origins, "Allowed CORS origins");

    let persistence = postgres_persistence(&config).await?;
    let repo = Arc::new(persistence.clone()) as Arc<dyn WaitlistRepo>;
    let app_state = init_app_state(config, repo);

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!("Backend listening at {}", &listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InfraError::Server)?;

    persistence.close().await;
    info!("Database pool closed, bye");

    Ok(())
}
