use rescat::{
    api::{start_api_server, ApiState},
    config::AppConfig,
    observability::init_tracing,
    services::ResourceService,
    storage::{create_pool, ResourceRepository},
    Result, APP_NAME, VERSION,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; must happen before any config is read.
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let config = AppConfig::from_env()?;
    init_tracing(&config.log);

    info!(app_name = APP_NAME, version = VERSION, "Starting rescat resource service");
    info!(
        host = %config.server.host,
        port = config.server.port,
        request_timeout_s = config.server.request_timeout_seconds,
        cors_enabled = config.server.enable_cors,
        "Loaded configuration from environment"
    );

    info!(url = %config.database.url, "Creating database connection pool");
    let pool = create_pool(&config.database).await?;

    let repository = ResourceRepository::new(pool);
    let state = ApiState::new(ResourceService::new(repository));

    start_api_server(config.server, state).await
}
