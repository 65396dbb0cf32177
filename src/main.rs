use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use serde_json::json;

use rust_passgen::core::Config;
use rust_passgen::logging;

mod cli;

use crate::cli::Args;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    let level = if args.verbose { LevelFilter::Debug } else { config.log_level };
    if let Err(e) = logging::init(level, config.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    log::debug!("Loaded config: {:?}", config);

    let json = args.json;
    match cli::handlers::run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Command failed: {}", e);
            if json {
                println!("{}", json!({ "success": false, "error": e.to_string() }));
            } else {
                eprintln!("❌ {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
