use cvms_io::{Device, DeviceConfig, Entity};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <IP> <Username> <Password>", args[0]);
        return Ok(());
    }

    let hub = DeviceConfig::new(&args[1], &args[2], &args[3]).build_hub();
    let name = hub.entity_name(Entity::Output);

    let before = hub.refresh().await;
    println!("{}: {:?}", name, before.output_active());

    println!("Switching output on...");
    if !hub.set_output(true).await {
        println!("Camera rejected the write.");
        return Ok(());
    }
    println!("{}: {:?}", name, hub.refresh().await.output_active());

    println!("Waiting 5 seconds before switching off...");
    tokio::time::sleep(Duration::from_secs(5)).await;

    let _ = hub.set_output(false).await;
    println!("{}: {:?}", name, hub.refresh().await.output_active());

    Ok(())
}
