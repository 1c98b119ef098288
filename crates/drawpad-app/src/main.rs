//! drawpad entry point.

use clap::Parser;
use drawpad_app::{AppConfig, AppError, AppResult, CliArgs, load_script, render_svg, replay};

fn run(args: CliArgs) -> AppResult<()> {

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let events = load_script(&args.script)?;
    let canvas = replay(&config, &events);
    let svg = render_svg(&config, &canvas)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, svg).map_err(|source| AppError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("Wrote SVG to {:?}", path);
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    log::info!("Starting drawpad");

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}
