use std::error::Error;
use std::process;

use asc_converter::{run, RunOutput};

mod args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let args = args::parse();
    let RunOutput { result, files } = run(&args.input, &args.out_dir, &args.config())?;

    println!("Total records: {}", result.total_records);
    println!("Dare records (amount >= 0): {}", result.dare_count);
    println!("Avere records (amount < 0): {}", result.avere_count);
    for file in &files {
        println!("Wrote {}", file.display());
    }
    Ok(())
}
