use anyhow::Result;
use article_portal::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use article_portal::config::AppConfig;
use article_portal::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use article_portal::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use article_portal::presentation::http::{
    routes::build_router_with_rate_limiter, session::SessionSettings, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

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
    article_portal::init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        password_hasher,
        token_manager,
        clock,
    ));

    let state = HttpState {
        services,
        session: Arc::new(SessionSettings {
            cookie_secure: config.session_cookie_secure(),
            gated_prefixes: config.session_gated_prefixes().to_vec(),
            ttl: config.token_ttl(),
        }),
        allowed_origins: config.allowed_origins().into(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, rate_limit = config.rate_limit_enabled(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
