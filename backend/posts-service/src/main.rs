use actix_web::{middleware::Logger, web, App, HttpServer};
use posts_service::{configure_routes, Config, PostStore};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Posts Service
///
/// Serves the social feed over HTTP.
///
/// # Routes
///
/// - `GET  /api/posts` - List every post
/// - `POST /api/posts` - Create a post
/// - `GET  /api/health` - Liveness check
/// - `GET  /api/openapi.json` - OpenAPI document
///
/// Posts are kept in memory only; the store starts with three seeded posts
/// and resets on every restart.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting posts-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = web::Data::new(PostStore::seeded());
    match store.len() {
        Ok(count) => tracing::info!(posts = count, "Post store seeded"),
        Err(e) => tracing::warn!("Post store unavailable at startup: {}", e),
    }

    let http_bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        let cors_config = cors_config.clone();
        App::new()
            .app_data(store.clone())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(move |cfg| configure_routes(cfg, &cors_config))
    })
    .bind(&http_bind_address)?
    .workers(config.app.workers)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let joined = tokio::select! {
        joined = &mut server_task => joined,
        _ = &mut shutdown => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task.await
        }
    };

    tracing::info!("Posts-service shutting down");

    match joined {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Server task join error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, e.to_string()))
        }
    }
}
