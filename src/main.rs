use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use carehome_server::api::{api_router, ApiContext};
use carehome_server::{config, db};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            tracing::error!(%err, path = %parent.display(), "cannot create data directory");
            std::process::exit(1);
        }
    }

    let conn = match db::open_database(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            tracing::error!(%err, path = %db_path.display(), "cannot open database");
            std::process::exit(1);
        }
    };
    tracing::info!(path = %db_path.display(), "database ready");

    let ctx = ApiContext::new(conn, config::bcrypt_cost());
    let app = api_router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::port()));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%err, %addr, "cannot bind server address");
            std::process::exit(1);
        }
    };
    tracing::info!("server running on http://{addr}");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(%err, "server error");
        std::process::exit(1);
    }
}
