use anyhow::Result;
use good_news::application::{
    queries::articles::{ListArticlesQuery, PublishWindow},
    services::ApplicationServices,
};
use good_news::config::AppConfig;
use good_news::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresAttachmentStore,
        PostgresCategoryRepository,
    },
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let services = ApplicationServices::new(
        Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        Arc::new(PostgresCategoryRepository::new(pool.clone())),
        Arc::new(PostgresAttachmentStore::new(pool.clone())),
        Arc::new(SystemClock),
    );

    let live = services
        .article_queries
        .list_articles(ListArticlesQuery {
            window: PublishWindow::Live,
            ..ListArticlesQuery::default()
        })
        .await?;
    let scheduled = services
        .article_queries
        .list_articles(ListArticlesQuery {
            window: PublishWindow::Scheduled,
            ..ListArticlesQuery::default()
        })
        .await?;
    tracing::info!(live = live.len(), scheduled = scheduled.len(), "article store ready");

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
