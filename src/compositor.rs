//! Scene state and per-frame composition across locations.
//!
//! The [`Scene`] owns everything that persists between frames: the clock,
//! the locations with their enabled flags, the sun-event cache and the
//! pending toggle commands. One [`Scene::tick`] runs a whole frame: drain
//! commands, advance the clock, compute each enabled location's solar
//! angles once, derive its dimmer color, project its panes through every
//! window group (plus the echo pass), and hand the draw stream to the
//! render target in trail-pipeline order.

use crate::almanac;
use crate::clock::AnimationClock;
use crate::config::{GroupAnchor, SceneConfig};
use crate::display::{self, OverlayEntry};
use crate::events::SunEventCache;
use crate::math::{constrain, remap};
use crate::projection;
use crate::render::{FrameBuffer, FramePipeline, PostShader, RenderTarget};
use crate::types::{
    Facade, GeoLocation, Hsba, Rect, SolarAngles, SunEvents, WallGeometry, WindowGrid,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Pane fill alpha before the brightness fade is applied.
const BASE_WINDOW_ALPHA: f64 = 70.0;

/// A command applied between frames.
///
/// Input arrives from outside the library (key presses); commands queue up
/// and are drained at the start of the next tick, so a frame always sees
/// the fully-updated or the fully-prior enabled set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Toggle the location bound to this digit key (1-9)
    ToggleLocation(u8),
}

/// Per-location results of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFrame {
    /// Location name
    pub name: String,
    /// Solar angles at the frame's instant
    pub angles: SolarAngles,
    /// Light angle against the wall plane, in degrees
    pub light_angle: f64,
    /// Dimmer color the panes were drawn with
    pub color: Hsba,
    /// Number of pane quads drawn for this location
    pub pane_count: usize,
    /// Cached sunrise/sunset for the frame's date
    pub events: SunEvents,
}

/// Summary of one completed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// The simulated instant the frame rendered
    pub instant: DateTime<Utc>,
    /// One entry per enabled location, in location order
    pub locations: Vec<LocationFrame>,
    /// Formatted overlay line for the display collaborator
    pub overlay: String,
    /// Total pane quads drawn this frame
    pub total_panes: usize,
}

/// Dimmer color for one location.
///
/// Two independent ramps gate the pane brightness: an appearing ramp fades
/// in over the first twelve degrees of elevation, and a disappearing ramp
/// fades out as the light angle against the wall drops below twelve
/// degrees. The lower ramp wins. Hue drifts warm-to-amber as the azimuth
/// sweeps 180° to 240°, and the final alpha scales the base pane alpha by
/// the brightness.
#[must_use]
pub fn dimmer_color(angles: SolarAngles, light_angle: f64) -> Hsba {
    let appearing_alpha = constrain(remap(angles.elevation(), 0.0, 12.0, 0.0, 70.0), 0.0, 70.0);
    let appearing_hue = constrain(remap(angles.azimuth(), 180.0, 240.0, 35.0, 25.0), 25.0, 35.0);
    let disappearing_alpha = constrain(remap(light_angle, 12.0, 0.0, 70.0, 0.0), 0.0, 70.0);

    let brightness = appearing_alpha.min(disappearing_alpha);
    let alpha_fade = remap(brightness, 0.0, 80.0, 0.0, 1.0);

    Hsba::new(appearing_hue, 100.0, brightness, BASE_WINDOW_ALPHA * alpha_fade)
}

/// The simulation state driving one facade.
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    wall: WallGeometry,
    grid: WindowGrid,
    clock: AnimationClock,
    locations: Vec<GeoLocation>,
    events: SunEventCache,
    pipeline: FramePipeline,
    commands: Vec<SceneCommand>,
    frames: u64,
}

impl Scene {
    /// Builds a scene from configuration and locations.
    ///
    /// # Errors
    /// Returns an error for invalid configuration values or locations
    /// sharing a toggle key.
    pub fn new(
        config: SceneConfig,
        locations: Vec<GeoLocation>,
        shader: Option<PostShader>,
    ) -> Result<Self> {
        let wall = match config.main_wall_width {
            None => {
                WallGeometry::flat(config.wall_bearing, config.canvas_width, config.canvas_height)?
            }
            Some(main_width) => WallGeometry::three_segment(
                config.wall_bearing,
                config.canvas_width,
                config.canvas_height,
                main_width,
            )?,
        };
        let grid = WindowGrid::from_canvas_height(config.canvas_height)?;
        let clock = AnimationClock::new(config.time_speed, config.grain_speed, config.date_mode)?;

        let mut seen_keys = [false; 10];
        for location in &locations {
            let key = location.key_binding() as usize;
            if seen_keys[key] {
                return Err(Error::duplicate_key_binding(location.key_binding()));
            }
            seen_keys[key] = true;
        }

        for anchor in &config.group_anchors {
            if !anchor.corner_offset.is_finite() || !anchor.top_offset.is_finite() {
                return Err(Error::invalid_configuration(
                    "group anchor offsets must be finite",
                ));
            }
        }
        if !config.echo_offset.is_finite() {
            return Err(Error::invalid_configuration("echo offset must be finite"));
        }

        let pipeline = FramePipeline::new(
            config.canvas_width,
            config.canvas_height,
            config.trail_fade,
            shader,
        );

        Ok(Self {
            config,
            wall,
            grid,
            clock,
            locations,
            events: SunEventCache::new(),
            pipeline,
            commands: Vec::new(),
            frames: 0,
        })
    }

    /// Queues a command for the next tick.
    pub fn queue(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }

    /// Gets the animation clock.
    #[must_use]
    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Gets the animation clock for adjustment between frames.
    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    /// Gets the locations, enabled or not.
    #[must_use]
    pub fn locations(&self) -> &[GeoLocation] {
        &self.locations
    }

    /// Gets the wall geometry.
    #[must_use]
    pub const fn wall(&self) -> &WallGeometry {
        &self.wall
    }

    /// Gets the window grid.
    #[must_use]
    pub const fn grid(&self) -> &WindowGrid {
        &self.grid
    }

    /// Gets the number of frames rendered so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Runs one frame against a render target.
    ///
    /// # Errors
    /// Returns an error if a location's solar computation fails; the
    /// render target itself is infallible.
    pub fn tick(&mut self, target: &mut dyn RenderTarget) -> Result<FrameReport> {
        self.apply_commands();
        self.clock.advance();

        let instant = self.clock.instant();
        let date = instant.date_naive();

        self.pipeline.begin_frame(target);

        let mut frames: Vec<LocationFrame> = Vec::new();
        let mut total_panes = 0;
        let mut current_clip: Option<Rect> = None;

        for location in &self.locations {
            if !location.is_enabled() {
                continue;
            }

            let angles =
                almanac::solar_angles(instant, location.latitude(), location.longitude())?;
            let events = self.events.events_for(location, date)?;
            let orient =
                projection::orientation(angles.azimuth(), self.wall.bearing(), self.config.facade);

            if !angles.is_above_horizon() {
                frames.push(LocationFrame {
                    name: location.name().to_owned(),
                    angles,
                    light_angle: orient.light_angle,
                    color: dimmer_color(angles, orient.light_angle),
                    pane_count: 0,
                    events,
                });
                continue;
            }

            let color = dimmer_color(angles, orient.light_angle);
            let mut pane_count = 0;

            for anchor in &self.config.group_anchors {
                for pass in [*anchor, anchor.offset_by(self.config.echo_offset)] {
                    pane_count += draw_group(
                        target,
                        &self.wall,
                        &self.grid,
                        angles,
                        pass,
                        self.config.facade,
                        color,
                        &mut current_clip,
                    );
                }
            }

            total_panes += pane_count;
            frames.push(LocationFrame {
                name: location.name().to_owned(),
                angles,
                light_angle: orient.light_angle,
                color,
                pane_count,
                events,
            });
        }

        if current_clip.is_some() {
            target.clip_to_region(FrameBuffer::Temp, None);
        }

        self.pipeline.finish_frame(target, self.clock.grain_time());
        self.frames += 1;

        let entries: Vec<OverlayEntry<'_>> = frames
            .iter()
            .map(|frame| OverlayEntry {
                name: &frame.name,
                angles: frame.angles,
                events: frame.events,
            })
            .collect();
        let overlay = display::format_overlay(instant, self.wall.bearing(), &entries);

        Ok(FrameReport {
            instant,
            locations: frames,
            overlay,
            total_panes,
        })
    }

    fn apply_commands(&mut self) {
        for command in self.commands.drain(..) {
            match command {
                SceneCommand::ToggleLocation(key) => {
                    match self
                        .locations
                        .iter_mut()
                        .find(|l| l.key_binding() == key)
                    {
                        Some(location) => {
                            location.toggle();
                            log::debug!(
                                "location {} now {}",
                                location.name(),
                                if location.is_enabled() {
                                    "enabled"
                                } else {
                                    "disabled"
                                }
                            );
                        }
                        None => log::debug!("toggle for unbound key {key} ignored"),
                    }
                }
            }
        }
    }
}

/// Draws one window group pass; returns the pane count.
#[allow(clippy::too_many_arguments)]
fn draw_group(
    target: &mut dyn RenderTarget,
    wall: &WallGeometry,
    grid: &WindowGrid,
    angles: SolarAngles,
    anchor: GroupAnchor,
    facade: Facade,
    color: Hsba,
    current_clip: &mut Option<Rect>,
) -> usize {
    let panes = projection::project_panes(
        angles,
        wall,
        grid,
        anchor.corner_offset,
        anchor.top_offset,
        facade,
    );

    for pane in &panes {
        let clip = wall.clip_rect(pane.segment);
        if clip != *current_clip {
            target.clip_to_region(FrameBuffer::Temp, clip);
            *current_clip = clip;
        }
        target.draw_polygon(FrameBuffer::Temp, pane.vertices, color);
    }

    panes.len()
}
