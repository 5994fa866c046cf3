use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::routing::{any, get, MethodRouter};
use axum::Router;
use clap::Parser;
use tower_http::services::ServeDir;

mod error;
mod routes;

use crate::error::ServerError;
use crate::routes::{shell_handler, unmatched_handler, AppState, SHELL_ROUTES};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding index.html, the stylesheet and the wasm `pkg/`.
    #[arg(long)]
    public_dir: Option<PathBuf>,
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

fn build_router(public_dir: PathBuf) -> Router {
    let state = AppState {
        index_file: public_dir.join("index.html"),
    };
    let unmatched: MethodRouter = any(unmatched_handler).with_state(state.clone());
    let mut router = Router::new();
    for route in SHELL_ROUTES {
        router = router.route(route, get(shell_handler));
    }
    router
        .fallback_service(ServeDir::new(public_dir).fallback(unmatched))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let public_dir = args
        .public_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);
    let ip: IpAddr = args
        .host
        .parse()
        .map_err(|source| ServerError::InvalidAddress {
            host: args.host.clone(),
            port,
            source,
        })?;
    let addr = SocketAddr::new(ip, port);

    let app = build_router(public_dir.clone());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    log::info!(
        "Garden running at http://localhost:{port} (serving {})",
        public_dir.display()
    );
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
