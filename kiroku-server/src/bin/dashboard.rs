//! Reporting process binary. Runs alongside the CRUD application and
//! serves the chart over the same store file.

use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use kiroku_server::routes::create_dashboard_router;
use kiroku_server::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "workout_tracking.db".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5001".to_string())
        .parse()?;

    info!("Connecting to database: {}", database_url);
    let pool = kiroku::db::connect(&database_url).await?;
    kiroku::db::init_database(&pool).await?;

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, create_dashboard_router(pool))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
