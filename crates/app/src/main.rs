use clap::Parser;

mod settings;

/// In-memory users & ledger HTTP API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file, with or without the `.toml` extension.
    #[arg(short, long, env = "TALLY_CONFIG", default_value = "settings")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    tracing::info!("Serving users under {}", settings.server.base_path);
    server::run_with_listener(engine::Engine::new(), &settings.server.base_path, listener).await?;

    Ok(())
}
