use inkwell::{make_router, run_app, Config};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            error!("Error: {:#}", error);
            std::process::exit(1);
        }
    };
    let router = make_router();
    if let Err(error) = run_app(router, &config).await {
        error!("Error: {:#}", error);
        std::process::exit(1);
    }
}
