use foodex::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), foodex::server::error::Error> {
    let detection_client = startup::build_detection_client(&config);
    let db = startup::connect_to_database(&config).await?;

    let state = AppState {
        db,
        detection_client,
        bucket_prefix: config.bucket_prefix.clone(),
        relabel_policy: config.overlay_relabel_policy,
    };

    let router = router::routes().with_state(state);

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
