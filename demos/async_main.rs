use std::env;
use std::error::Error;
use std::process;

use asc_converter::{run_async, Config};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        return Err("Usage: cargo run --example async_main -- input.csv out_dir".into());
    }

    let output = run_async(&args[1], &args[2], &Config::default()).await?;
    let result = output.result;
    println!(
        "{} records: {} dare, {} avere",
        result.total_records, result.dare_count, result.avere_count
    );
    Ok(())
}
