//! Headless facade daylight demo.
//!
//! Runs the simulation against a recording render target and prints the
//! overlay line at regular intervals:
//!
//! ```text
//! facade [FRAMES] [DATE]
//! ```
//!
//! `FRAMES` defaults to 600. `DATE` (YYYY-MM-DD) pins the simulated day;
//! without it the scene animates through today.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use lightwell::clock::DateMode;
use lightwell::config::{builtin_locations, SceneConfig};
use lightwell::display::DisplaySink;
use lightwell::render::RecordingRenderer;
use lightwell::Scene;

/// How often the overlay is printed, in frames.
const OVERLAY_INTERVAL: u64 = 60;

struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn render(&mut self, text: &str) {
        println!("{text}");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(raw) => raw.parse().context("FRAMES must be a positive integer")?,
        None => 600,
    };
    let date_mode = match args.next() {
        Some(raw) => {
            let date = raw
                .parse::<NaiveDate>()
                .context("DATE must be YYYY-MM-DD")?;
            DateMode::Fixed(date)
        }
        None => DateMode::Today,
    };

    let config = SceneConfig {
        date_mode,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(config, builtin_locations()?, None)?;
    let mut target = RecordingRenderer::new();
    let mut sink = StdoutSink;

    log::info!("running {frames} frames");

    let mut drawn = 0;
    for frame in 0..frames {
        target.reset();
        let report = scene.tick(&mut target)?;
        drawn += report.total_panes;
        if frame % OVERLAY_INTERVAL == 0 {
            sink.render(&report.overlay);
        }
    }

    log::info!("done: {frames} frames, {drawn} panes drawn");
    Ok(())
}
