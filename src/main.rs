//! Command-line access to saved graphic object scenes.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{LevelFilter, error, info};

use graphic_objects::{CodecError, Scene};

#[derive(Debug, Parser)]
#[command(version, about = "Inspect and rewrite saved graphic object scenes")]
struct Args {
    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Print the object tree stored in a scene file
    Inspect { path: PathBuf },
    /// Load a scene file and save it again in canonical form
    Resave { input: PathBuf, output: PathBuf },
}

fn run(args: &Args) -> Result<(), CodecError> {
    match &args.action {
        Action::Inspect { path } => {
            let mut scene = Scene::new();
            let count = scene.load(path)?;
            println!("{} top-level objects", count);
            print!("{}", scene.outline());
        }
        Action::Resave { input, output } => {
            let mut scene = Scene::new();
            scene.load(input)?;
            scene.save(output)?;
            info!("Wrote {} objects to {}", scene.len(), output.display());
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}
