use anyhow::Context;

use spm_consult::config::AppConfig;
use spm_consult::llm::create_provider;
use spm_consult::server::app_router;
use spm_consult::wizard::{SessionStore, spawn_expiry_task};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    eprintln!("SPM Consult v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.llm.model);
    eprintln!("   API base: {}", config.llm.api_base);
    eprintln!("   Wizard API: http://0.0.0.0:{}/api/wizard/sessions", config.port);
    eprintln!(
        "   Session idle timeout: {} min\n",
        config.session_idle_timeout.as_secs() / 60
    );

    let llm = create_provider(&config.llm);

    // Sessions live in memory only and are swept every minute.
    let sessions = SessionStore::new(config.session_idle_timeout);
    let _expiry_handle = spawn_expiry_task(sessions.clone());

    let app = app_router(llm, sessions);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!(port = config.port, "HTTP server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}
