use anyhow::{Context, Result};
use article_board::application::{
    ports::{flash::FlashStore, time::Clock, view::ViewRenderer},
    services::ApplicationServices,
};
use article_board::config::AppConfig;
use article_board::domain::article::ArticleRepository;
use article_board::infrastructure::{
    database, flash_store::InMemoryFlashStore, repositories::SqliteArticleRepository,
    time::SystemClock, views::HtmlViewRenderer,
};
use article_board::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        database_url = config.database_url(),
        update_mode = %config.update_mode(),
        "configuration loaded"
    );

    let pool = database::init_pool(config.database_url())
        .await
        .context("failed to open database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    let pool = Arc::new(pool);

    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(SqliteArticleRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let flash_ttl = chrono::Duration::from_std(config.flash_ttl())
        .context("flash TTL out of range")?;
    let flash_store: Arc<dyn FlashStore> =
        Arc::new(InMemoryFlashStore::new(flash_ttl, Arc::clone(&clock)));
    let renderer: Arc<dyn ViewRenderer> = Arc::new(HtmlViewRenderer);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_repo),
        Arc::clone(&flash_store),
        config.update_mode(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        renderer,
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
