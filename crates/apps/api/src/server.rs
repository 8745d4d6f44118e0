use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use http::{HeaderValue, Method, header};
use sqlx::PgPool;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{Level, error, info, warn};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Serves the API until SIGINT or SIGTERM.
pub async fn serve(pool: PgPool, settings: AppSettings) -> Result<()> {
    serve_with_shutdown(pool, settings, shutdown_signal()).await
}

/// Serves the API until `shutdown` completes, then gives in-flight requests
/// `server.shutdown_grace_secs` to finish.
pub async fn serve_with_shutdown<F>(pool: PgPool, settings: AppSettings, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let app = build_app(pool, &settings);

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;
    let listener = TcpListener::bind(addr).await?;
    info!("💌 Server listening on http://{}", listener.local_addr()?);

    let stop = CancellationToken::new();
    let server =
        axum::serve(listener, app).with_graceful_shutdown(stop.clone().cancelled_owned());
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server_task => {
            result??;
            return Ok(());
        }
        () = shutdown => {}
    }

    let grace = settings.server.shutdown_grace();
    info!("Shutting down server, waiting up to {:?} for in-flight requests", grace);
    stop.cancel();

    if let Ok(result) = tokio::time::timeout(grace, &mut server_task).await {
        result??;
    } else {
        warn!("Grace period of {:?} elapsed, dropping remaining connections", grace);
        server_task.abort();
    }

    info!("Server exiting");
    Ok(())
}

/// The router with every middleware layer applied.
pub fn build_app(pool: PgPool, settings: &AppSettings) -> Router {
    with_middleware(create_router(ApiContext { pool }), settings)
}

fn with_middleware(router: Router, settings: &AppSettings) -> Router {
    router
        .layer(
            TraceLayer::new_for_http().on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
        )
        .layer(TimeoutLayer::new(settings.server.request_timeout()))
        // Over-limit bodies fail `Json` extraction and get the 400 envelope.
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(settings))
        .layer(CatchPanicLayer::new())
}

// --- CORS Configuration ---
fn cors_layer(settings: &AppSettings) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
            header::PRAGMA,
        ]);

    if settings.allows_any_origin() {
        return cors.allow_origin(cors::Any);
    }

    let allowed_origins: Vec<HeaderValue> = settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    cors.allow_origin(allowed_origins)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
