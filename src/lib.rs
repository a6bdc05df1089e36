//! # Lightwell
//!
//! Generative facade daylight simulation: a solar ephemeris drives patches
//! of window light projected onto a building wall, accumulated into slow
//! motion trails and post-shaded once per frame.
//!
//! The crate is the simulation core only. It computes geometry and color
//! and hands them to two thin collaborator interfaces: a
//! [`render::RenderTarget`] that rasterizes pane quadrilaterals into frame
//! buffers, and a [`display::DisplaySink`] that shows the status overlay.
//! Windowing, GPU work and input stay in the host process, which keeps the
//! core deterministic and testable.
//!
//! ## Features
//!
//! - Low-precision solar ephemeris (azimuth/elevation from latitude,
//!   longitude and a UTC instant)
//! - Minute-scan sunrise/sunset finder with polar day and night handling
//! - Looping animation clock mapping progress in [0,1) onto one simulated
//!   day
//! - Perspective projection of sunlight through a window grid onto flat or
//!   three-segment walls
//! - Multi-location composition with dimmer ramps and queued toggle
//!   commands
//! - Trail-pipeline frame sequencing: fade, draw, composite, post shader
//!
//! ## Quick Start
//!
//! ```rust
//! use lightwell::config::{builtin_locations, SceneConfig};
//! use lightwell::render::RecordingRenderer;
//! use lightwell::Scene;
//!
//! # fn main() -> lightwell::Result<()> {
//! let mut scene = Scene::new(SceneConfig::default(), builtin_locations()?, None)?;
//! let mut target = RecordingRenderer::new();
//!
//! let report = scene.tick(&mut target)?;
//! println!("{}", report.overlay);
//! assert_eq!(report.locations.len(), 1); // Marrakesh starts enabled
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate Systems
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Wall bearing**: compass direction the facade faces, in degrees
//! - **Screen space**: pixels, origin top-left, y growing downward

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::compositor::{FrameReport, Scene, SceneCommand};
pub use crate::error::{Error, Result};
pub use crate::types::{GeoLocation, SolarAngles, SunEvents};

// Solar model modules
pub mod almanac;
pub mod events;

// Scene modules
pub mod clock;
pub mod compositor;
pub mod config;
pub mod projection;

// Collaborator edges
pub mod display;
pub mod render;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
