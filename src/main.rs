use anyhow::Result;
use cookbook_cms::application::{
    ports::{
        security::{CookieSigner, PasswordHasher},
        sessions::SessionStore,
        util::{Clock, SlugGenerator},
    },
    services::ApplicationServices,
};
use cookbook_cms::config::AppConfig;
use cookbook_cms::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    recipe::{IngredientRepository, RecipeReadRepository, RecipeWriteRepository, TagRepository},
    user::UserRepository,
};
use cookbook_cms::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresIngredientRepository, PostgresRecipeReadRepository, PostgresRecipeWriteRepository,
        PostgresTagRepository, PostgresUserRepository,
    },
    security::{
        cookie::HmacCookieSigner, password::Argon2PasswordHasher,
        redis_session_store::RedisSessionStore, session_store::InMemorySessionStore,
    },
    util::{DefaultSlugGenerator, SystemClock},
};
use cookbook_cms::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let recipe_write_repo: Arc<dyn RecipeWriteRepository> =
        Arc::new(PostgresRecipeWriteRepository::new(pool.clone()));
    let recipe_read_repo: Arc<dyn RecipeReadRepository> =
        Arc::new(PostgresRecipeReadRepository::new(pool.clone()));
    let ingredient_repo: Arc<dyn IngredientRepository> =
        Arc::new(PostgresIngredientRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool));

    let session_store: Arc<dyn SessionStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session store");
            Arc::new(RedisSessionStore::from_url(url, config.session_ttl().as_secs())?)
        }
        None => {
            tracing::info!("using in-memory session store");
            Arc::new(InMemorySessionStore::new(config.session_ttl()))
        }
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let cookie_signer: Arc<dyn CookieSigner> = Arc::new(
        HmacCookieSigner::new(config.session_secret())
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET is not a usable HMAC key"))?,
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        recipe_write_repo,
        recipe_read_repo,
        ingredient_repo,
        tag_repo,
        session_store,
        password_hasher,
        clock,
        slugger,
        config.page_size(),
    ));

    let state = HttpState {
        services,
        cookie_signer,
        session_ttl: config.session_ttl(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
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
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
