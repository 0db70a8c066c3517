use std::{fs::OpenOptions, net::SocketAddr, path::PathBuf, process::ExitCode, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use money_note::{
    AppState, CATEGORY_DATABASE_ID_VAR, DATABASE_ID_VAR, DEFAULT_TIMEZONE, NOTION_TOKEN_VAR,
    NotionClient, NotionConfig, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for money_note.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// File path to a directory containing an SSL certificate `cert.pem` and
    /// key `key.pem`. The server uses plain HTTP if this is not set.
    #[arg(long)]
    cert_path: Option<String>,

    /// The Notion integration token.
    #[arg(long, env = NOTION_TOKEN_VAR, hide_env_values = true)]
    notion_token: Option<String>,

    /// The ID of the Notion database holding transactions.
    #[arg(long, env = DATABASE_ID_VAR)]
    database_id: Option<String>,

    /// The ID of the Notion database holding categories.
    #[arg(long, env = CATEGORY_DATABASE_ID_VAR)]
    category_database_id: Option<String>,

    /// The canonical name of the timezone used for "today", e.g. "Asia/Tokyo".
    #[arg(long, env = "LOCAL_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Log every request and response body.
    #[arg(long)]
    log_bodies: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let config = match NotionConfig::new(
        args.notion_token,
        args.database_id,
        args.category_database_id,
    ) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            return ExitCode::FAILURE;
        }
    };

    let store = Arc::new(NotionClient::new(&config.token));
    let state = match AppState::new(
        store,
        &config.database_id,
        &config.category_database_id,
        &args.timezone,
    ) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Starting with {state:?}");

    let mut router = add_tracing_layer(build_router(state));

    if args.log_bodies {
        router = router.layer(middleware::from_fn(logging_middleware));
    }

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let result = match args.cert_path {
        Some(cert_path) => {
            let tls_config = match RustlsConfig::from_pem_file(
                PathBuf::from(&cert_path).join("cert.pem"),
                PathBuf::from(&cert_path).join("key.pem"),
            )
            .await
            {
                Ok(tls_config) => tls_config,
                Err(error) => {
                    tracing::error!("Could not open TLS certificates in {cert_path}: {error}");
                    return ExitCode::FAILURE;
                }
            };

            tracing::info!("HTTPS server listening on {}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .handle(handle)
                .serve(router.into_make_service())
                .await
        }
        None => {
            tracing::info!("HTTP server listening on {}", addr);
            axum_server::bind(addr)
                .handle(handle)
                .serve(router.into_make_service())
                .await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Server error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Handlers log their own errors.
        .on_failure(());

    router.layer(tracing_layer)
}
