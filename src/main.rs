use benefits_buddy::{
    api::{self, AppState, server},
    config::{self, database},
    core::benefit_plan,
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load .env file first so RUST_LOG and friends can come from it
    dotenv().ok(); // Non-fatal, env vars can be set externally

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("benefits_buddy=info,tower_http=info")),
        )
        .init();

    // 3. Load configuration (file + environment overrides)
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Open the store and make sure every collection exists
    let db = database::create_connection(&app_config.database.url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the default plan catalog (no-op when plans exist)
    benefit_plan::seed_default_plans(&db)
        .await
        .inspect_err(|e| error!("Failed to seed benefit plans: {}", e))?;

    // 6. Serve until Ctrl+C or SIGTERM
    let app = api::create_router(AppState::new(db.clone()), &app_config.server);
    let server_config = &app_config.server;
    let listener = server::bind_listener(server_config)
        .await
        .inspect_err(|e| {
            error!(
                "Failed to bind {}:{}: {}",
                server_config.host, server_config.port, e
            );
        })?;
    info!("Benefits API listening on http://{}/api", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    // 7. Close the store once in-flight requests have drained
    database::close_connection(db).await?;
    info!("Shutdown complete.");
    Ok(())
}
