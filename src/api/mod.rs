use crate::api::handlers::{
    health,
    signup::{
        self, BcryptHasher, HttpOtpDispatcher, LogOtpDispatcher, OtpDispatcher, PgUserStore,
        SignupConfig, SignupState,
    },
};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Method, Request},
    routing::{get, post},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
    sync::mpsc,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, warn, Span};
use ulid::Ulid;

pub(crate) mod handlers;
// OpenAPI document assembly lives in openapi.rs, shared with the `openapi` binary.
mod openapi;

pub use openapi::openapi;

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, dsn: String, base_url: Option<String>) -> Result<()> {
    // Shutdown gracefully on SIGINT or SIGTERM
    let (tx, mut rx) = mpsc::unbounded_channel();

    shutdown_watcher(tx)?;

    // Connect to database
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .max_lifetime(Duration::from_secs(60 * 2))
        .test_before_acquire(true)
        .connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    let otp: Arc<dyn OtpDispatcher> = match base_url {
        Some(base_url) => Arc::new(HttpOtpDispatcher::new(&base_url)?),
        None => {
            warn!("No base URL configured, OTP dispatch will only be logged");
            Arc::new(LogOtpDispatcher)
        }
    };

    let signup_state = Arc::new(SignupState::new(
        SignupConfig::new(),
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(BcryptHasher),
        otp,
    ));

    let cors = CorsLayer::new()
        // allow `GET` and `POST` when accessing the resource
        .allow_methods([Method::GET, Method::POST])
        // allow requests from any origin
        .allow_origin(Any);

    let app = Router::new()
        .route("/api/auth/signup", post(signup::signup))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(signup_state)),
        )
        .route(
            "/health",
            get(health::health).options(health::health),
        )
        .layer(Extension(pool));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            rx.recv().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

// Signal the graceful-shutdown channel once SIGINT or SIGTERM arrives
fn shutdown_watcher(tx: mpsc::UnboundedSender<()>) -> Result<()> {
    let mut interrupt =
        signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;
    let mut terminate =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;

    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("Received SIGINT"),
            _ = terminate.recv() => info!("Received SIGTERM"),
        }

        let _ = tx.send(());
    });

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
