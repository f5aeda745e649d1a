//! People API server entry point.
//!
//! # Responsibility
//! - Load configuration, start logging and open the database.
//! - Serve the route table until Ctrl-C, then release the connection.
//!
//! Any startup failure exits the process with a non-zero status before the
//! listener is bound.

use log::{error, info};
use people_core::db::open_db;
use people_core::{core_version, init_logging, AppConfig};
use people_server::{build_router, AppState};
use std::error::Error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=main status=error error={err}");
            eprintln!("people_server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;
    info!(
        "event=server_init module=main status=start version={} listen_addr={}",
        core_version(),
        config.listen_addr
    );

    let conn = open_db(&config.database)?;
    let state = AppState::new(conn);
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        "event=server_start module=main status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let closed = state.close()?;
    info!("event=server_stop module=main status=ok db_closed={closed}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=signal_listen module=main status=error error={err}");
        std::future::pending::<()>().await;
    }
    info!("event=shutdown_requested module=main status=ok");
}
