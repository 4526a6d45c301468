mod config;
mod engine;
mod error;
mod ticker;
mod types;
mod ui;
mod utils;

use std::env;
use std::process;

use config::{AppConfig, USAGE};
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Clinic Desk",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)?))),
    )
}
