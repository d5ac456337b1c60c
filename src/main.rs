use snip::{config, server, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_tracing(&config.log_level, &config.log_format) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }

    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("server terminated: {e:#}");
        std::process::exit(1);
    }
}
