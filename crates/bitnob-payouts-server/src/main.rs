use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payouts_server::{
    config::ServerConfig, cors, error::json_error_handler, metrics::register_metrics, routes,
    AppState,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ServerConfig::from_env().expect("Failed to load configuration");
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();
    let rate_limit_rpm = config.rate_limit_rpm;
    let static_dir = config.static_dir.clone();

    tracing::info!("Starting payouts-server on port {}", port);
    tracing::info!(
        "Provider: {}",
        config.provider.api_url.as_deref().unwrap_or("(not configured)")
    );
    tracing::info!("Serving landing page from: {}", static_dir);
    tracing::info!("Rate limit: {} req/min per IP", rate_limit_rpm);

    // Register Prometheus metrics
    register_metrics();

    // Create shared state
    let state_data = web::Data::new(AppState::new(config));

    // Configure rate limiter
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_minute(rate_limit_rpm as u64)
        .finish()
        .expect("Failed to create rate limiter config");

    // Start HTTP server
    HttpServer::new(move || {
        let cors = cors::build_cors(&allowed_origins);
        let index_path = format!("{}/index.html", static_dir);

        App::new()
            .app_data(state_data.clone())
            .app_data(
                web::JsonConfig::default()
                    .limit(65_536)
                    .error_handler(json_error_handler),
            )
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(Governor::new(&governor_conf))
            .configure(routes::health::configure)
            .configure(routes::payouts::configure)
            // Landing page last (catch-all)
            .service(
                actix_files::Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(web::to(move || {
                        let path = index_path.clone();
                        async move { actix_files::NamedFile::open_async(path).await }
                    })),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
