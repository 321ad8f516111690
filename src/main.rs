use dotenvy::dotenv;
use tracing::{error, info, warn};

use snipstash::logging::init_tracing;
use snipstash::router::init_router;
use snipstash::snipstash_config::AppConfig;
use snipstash::snipstash_db::{check_connection, init_db_pool, run_migrations};
use snipstash::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    if config.jwt.uses_insecure_default() {
        warn!("JWT_SECRET is not set; tokens are signed with the built-in default secret");
    }

    let pool = init_db_pool(&config.database);
    if check_connection(&pool).await && config.database.run_migrations {
        run_migrations(&pool).await;
    }

    let state = AppState::with_pool(pool, config.jwt.clone());
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, address = %address, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(address = %address, "Server running");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
