pub mod config;
pub mod proxy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::Request;
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{routing::any, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gateway.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Per-request line: timestamp, duration, status, method, path
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = next.run(req).await;

        tracing::info!(
            "{} | {:>4}ms | {} {:>6} {}",
            chrono::Utc::now().format("%H:%M:%S"),
            start.elapsed().as_millis(),
            response.status().as_u16(),
            method,
            path,
        );
        response
    }

    let config = config::load_config()?;

    // No redirect following: Location headers belong to the browser.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let state = proxy::GatewayState {
        client,
        upstream_url: config.upstream.url.clone(),
        refresh_path: config.upstream.refresh_path.clone(),
    };

    let app = Router::new()
        .route("/api/*path", any(proxy::forward))
        .fallback_service(
            ServeDir::new(&config.server.static_dir).append_index_html_on_directories(true),
        )
        .layer(middleware::from_fn(request_logger))
        .with_state(state);

    let addr: SocketAddr = config.server.listen.parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("gateway listening on {}", addr);
    tracing::info!("proxying /api to {}", config.upstream.url);

    axum::serve(listener, app).await?;
    Ok(())
}
