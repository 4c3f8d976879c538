// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripclip::{app::App, cli, settings, shell, trip::Trip};

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripclip={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init logging: {e}"))?;
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli::build_app().get_matches();
    let settings = settings::load(&matches)?;
    init_logging(&settings.log_level)?;

    let trip = if settings.demo {
        Trip::demo()
    } else {
        Trip::default()
    };
    tracing::debug!(demo = settings.demo, "starting shell");
    let mut app = App::new(settings, trip);
    shell::run(&mut app)
}
