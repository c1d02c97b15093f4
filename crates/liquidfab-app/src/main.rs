//! Demo entry point.
//!
//! Usage: `liquidfab [config.json]`. Verbosity follows `RUST_LOG`.

mod app;

use app::{App, AppConfig};
use std::path::Path;

fn main() {
    env_logger::init();
    log::info!("Starting liquidfab demo");

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    if let Err(e) = App::new(config).run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
