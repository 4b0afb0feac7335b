use cvms_io::{Device, DeviceConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvms_io=info")))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.len() {
        2 => DeviceConfig::from_file(&args[1])?,
        4 => DeviceConfig::new(&args[1], &args[2], &args[3]),
        _ => {
            println!("Usage: {} <config.json> | <IP> <Username> <Password>", args[0]);
            println!("Example: cargo run --example poll_status -- 192.168.1.10 admin pass123");
            return Ok(());
        }
    };

    println!("Checking {}...", config.host);
    let hub = config.connect_checked().await?;

    let mut interval = tokio::time::interval(config.scan_interval());
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = hub.refresh().await;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("Stopped.");
    Ok(())
}
