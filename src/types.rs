//! Core data types for the facade daylight simulation.

use crate::error::{
    check_azimuth, check_bearing, check_coordinates, check_elevation_angle, check_key_binding,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Ratio of pane height to canvas height.
const PANE_HEIGHT_DIVISOR: f64 = 14.0;
/// Ratio of pane width to pane height.
const PANE_ASPECT: f64 = 0.6;
/// Ratio of inter-pane gap to pane height.
const PANE_GAP_RATIO: f64 = 0.12;

/// Solar position in horizontal coordinates as seen from a point on Earth.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Elevation angle: 90° = directly overhead, 0° = horizon, -90° = nadir
///
/// # Example
/// ```
/// # use lightwell::types::SolarAngles;
/// let angles = SolarAngles::new(180.0, 45.0).unwrap();
/// assert_eq!(angles.azimuth(), 180.0);
/// assert_eq!(angles.elevation(), 45.0);
/// assert!(angles.is_above_horizon());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Elevation angle in degrees (-90° to +90°, 0° = horizon)
    elevation: f64,
}

impl SolarAngles {
    /// Creates a new solar position from azimuth and elevation angle.
    ///
    /// The azimuth is normalized to [0°, 360°).
    ///
    /// # Errors
    /// Returns an error if the azimuth is not finite or the elevation is
    /// outside -90° to +90°.
    pub fn new(azimuth: f64, elevation: f64) -> Result<Self> {
        let normalized_azimuth = check_azimuth(azimuth)?;
        let validated_elevation = check_elevation_angle(elevation)?;

        Ok(Self {
            azimuth: normalized_azimuth,
            elevation: validated_elevation,
        })
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle in degrees (0° = horizon, positive above).
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_below_horizon(&self) -> bool {
        self.elevation <= 0.0
    }
}

/// A named observer location participating in the simulation.
///
/// Coordinates are immutable after construction; only the enabled flag
/// changes, toggled by the numeric key the location is bound to.
///
/// # Example
/// ```
/// # use lightwell::types::GeoLocation;
/// let mut marrakesh = GeoLocation::new("marrakesh", 31.6295, -7.9811, 2).unwrap();
/// assert!(!marrakesh.is_enabled());
/// marrakesh.toggle();
/// assert!(marrakesh.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Display name of the location
    name: String,
    /// Latitude in degrees (-90° to +90°)
    latitude: f64,
    /// Longitude in degrees (-180° to +180°)
    longitude: f64,
    /// Whether the location currently contributes to the frame
    enabled: bool,
    /// Digit key (1-9) that toggles this location
    key_binding: u8,
}

impl GeoLocation {
    /// Creates a new, initially disabled location.
    ///
    /// # Errors
    /// Returns an error for out-of-range coordinates or a key outside 1-9.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, key: u8) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_key_binding(key)?;
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            enabled: false,
            key_binding: key,
        })
    }

    /// Gets the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the digit key (1-9) bound to this location.
    #[must_use]
    pub const fn key_binding(&self) -> u8 {
        self.key_binding
    }

    /// Checks whether this location currently contributes to the frame.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flips the enabled flag.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// Sunrise and sunset instants found by scanning one calendar day.
///
/// Either event can be absent: during polar night neither occurs, and at
/// high latitudes around midsummer a day can open with the sun already up
/// and never set again before midnight. An `Option` pair expresses every
/// combination the day scan can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvents {
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
}

impl SunEvents {
    /// Creates a new event pair.
    #[must_use]
    pub const fn new(sunrise: Option<DateTime<Utc>>, sunset: Option<DateTime<Utc>>) -> Self {
        Self { sunrise, sunset }
    }

    /// Gets the sunrise instant, if one occurred within the scanned day.
    #[must_use]
    pub const fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.sunrise
    }

    /// Gets the sunset instant, if one occurred within the scanned day.
    #[must_use]
    pub const fn sunset(&self) -> Option<DateTime<Utc>> {
        self.sunset
    }

    /// Checks if the scan saw the sun stay below the horizon all day.
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        self.sunrise.is_none() && self.sunset.is_none()
    }

    /// Checks if the scan saw continuous daylight: up from midnight, no
    /// sunset before the day ends.
    #[must_use]
    pub fn is_polar_day(&self) -> bool {
        match (self.sunrise, self.sunset) {
            (Some(rise), None) => {
                use chrono::Timelike;
                rise.num_seconds_from_midnight() == 0
            }
            _ => false,
        }
    }
}

/// A point in screen space (pixels, origin top-left, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    /// Horizontal coordinate in pixels
    pub x: f64,
    /// Vertical coordinate in pixels
    pub y: f64,
}

impl Point2 {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Checks that both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Gets the right edge coordinate.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Gets the bottom edge coordinate.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Checks whether a point lies inside the rectangle (edges inclusive on
    /// the left/top, exclusive on the right/bottom).
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Checks whether this rectangle overlaps another.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A color in HSB space with alpha, matching the renderer's color mode.
///
/// Hue is 0-360, saturation and brightness 0-100, alpha 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsba {
    /// Hue in degrees (0-360)
    pub hue: f64,
    /// Saturation (0-100)
    pub saturation: f64,
    /// Brightness (0-100)
    pub brightness: f64,
    /// Alpha (0-100, 0 = transparent)
    pub alpha: f64,
}

impl Hsba {
    /// Creates a new color.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }
}

/// The window pane layout projected onto the facade.
///
/// All dimensions are in pixels. The grid is fixed for a session; the
/// standard derivation ties pane size to canvas height so the facade keeps
/// its proportions at any resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGrid {
    cols: u32,
    rows: u32,
    pane_width: f64,
    pane_height: f64,
    gap_x: f64,
    gap_y: f64,
}

impl WindowGrid {
    /// Creates a grid with explicit dimensions.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for zero counts, non-positive pane sizes
    /// or negative gaps.
    pub fn new(
        cols: u32,
        rows: u32,
        pane_width: f64,
        pane_height: f64,
        gap_x: f64,
        gap_y: f64,
    ) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(Error::invalid_configuration(
                "window grid needs at least one column and one row",
            ));
        }
        if !(pane_width > 0.0 && pane_height > 0.0) || !pane_width.is_finite()
            || !pane_height.is_finite()
        {
            return Err(Error::invalid_configuration("pane size must be positive"));
        }
        if !(gap_x >= 0.0 && gap_y >= 0.0) || !gap_x.is_finite() || !gap_y.is_finite() {
            return Err(Error::invalid_configuration("pane gaps must be non-negative"));
        }
        Ok(Self {
            cols,
            rows,
            pane_width,
            pane_height,
            gap_x,
            gap_y,
        })
    }

    /// Derives the standard 4x8 grid from the canvas height: pane height is
    /// 1/14 of the canvas, pane width 0.6 of that, gaps 0.12 of that.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for a non-positive canvas height.
    pub fn from_canvas_height(canvas_height: f64) -> Result<Self> {
        if !(canvas_height > 0.0) || !canvas_height.is_finite() {
            return Err(Error::invalid_configuration("canvas height must be positive"));
        }
        let pane_height = canvas_height / PANE_HEIGHT_DIVISOR;
        let pane_width = pane_height * PANE_ASPECT;
        let gap = pane_height * PANE_GAP_RATIO;
        Self::new(4, 8, pane_width, pane_height, gap, gap)
    }

    /// Gets the number of pane columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Gets the number of pane rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Gets the unprojected pane width in pixels.
    #[must_use]
    pub const fn pane_width(&self) -> f64 {
        self.pane_width
    }

    /// Gets the pane height in pixels.
    #[must_use]
    pub const fn pane_height(&self) -> f64 {
        self.pane_height
    }

    /// Gets the horizontal gap between panes in pixels.
    #[must_use]
    pub const fn gap_x(&self) -> f64 {
        self.gap_x
    }

    /// Gets the vertical gap between panes in pixels.
    #[must_use]
    pub const fn gap_y(&self) -> f64 {
        self.gap_y
    }

    /// Gets the unprojected width of the whole group of columns.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        f64::from(self.cols) * self.pane_width + f64::from(self.cols - 1) * self.gap_x
    }
}

/// Identifies which face of the wall a projected shape belongs to.
///
/// The renderer clips each shape to its segment's band before drawing, so
/// light never bleeds across the bend of a three-segment facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSegment {
    /// The central, viewer-facing wall
    Main,
    /// The angled wall on the left of the canvas
    SideLeft,
    /// The angled wall on the right of the canvas
    SideRight,
}

/// Wall topology: one flat face, or a main face flanked by two angled sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallMode {
    /// A single flat wall spanning the whole canvas
    Flat,
    /// A main wall of the given width centered between two equal side walls
    ThreeSegment {
        /// Width of the central wall in pixels
        main_width: f64,
    },
}

/// The simulated wall: compass bearing, canvas extent and topology.
///
/// Fixed configuration, set once at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallGeometry {
    bearing: f64,
    canvas_width: f64,
    canvas_height: f64,
    mode: WallMode,
}

impl WallGeometry {
    /// Creates a flat wall covering the whole canvas.
    ///
    /// # Errors
    /// Returns an error for a non-finite bearing or non-positive canvas size.
    pub fn flat(bearing: f64, canvas_width: f64, canvas_height: f64) -> Result<Self> {
        let bearing = check_bearing(bearing)?;
        check_canvas(canvas_width, canvas_height)?;
        Ok(Self {
            bearing,
            canvas_width,
            canvas_height,
            mode: WallMode::Flat,
        })
    }

    /// Creates a three-segment wall with a centered main face of the given
    /// width; the two side bands split the remaining canvas evenly.
    ///
    /// # Errors
    /// Returns an error for invalid bearing/canvas values, or a main width
    /// that is not strictly between zero and the canvas width.
    pub fn three_segment(
        bearing: f64,
        canvas_width: f64,
        canvas_height: f64,
        main_width: f64,
    ) -> Result<Self> {
        let bearing = check_bearing(bearing)?;
        check_canvas(canvas_width, canvas_height)?;
        if !main_width.is_finite() || main_width <= 0.0 || main_width >= canvas_width {
            return Err(Error::invalid_configuration(
                "main wall width must be between zero and the canvas width",
            ));
        }
        Ok(Self {
            bearing,
            canvas_width,
            canvas_height,
            mode: WallMode::ThreeSegment { main_width },
        })
    }

    /// Gets the compass bearing the wall faces, in degrees [0°, 360°).
    #[must_use]
    pub const fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Gets the canvas width in pixels.
    #[must_use]
    pub const fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height in pixels.
    #[must_use]
    pub const fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Gets the wall topology.
    #[must_use]
    pub const fn mode(&self) -> WallMode {
        self.mode
    }

    /// Gets the width of the main face (the full canvas for a flat wall).
    #[must_use]
    pub fn main_width(&self) -> f64 {
        match self.mode {
            WallMode::Flat => self.canvas_width,
            WallMode::ThreeSegment { main_width } => main_width,
        }
    }

    /// Gets the width of each side band (zero for a flat wall).
    #[must_use]
    pub fn side_width(&self) -> f64 {
        match self.mode {
            WallMode::Flat => 0.0,
            WallMode::ThreeSegment { main_width } => (self.canvas_width - main_width) / 2.0,
        }
    }

    /// Gets the clip band for a wall segment, or `None` when the segment
    /// needs no clipping (flat walls draw unclipped).
    ///
    /// Three-segment bands are pairwise disjoint by construction.
    #[must_use]
    pub fn clip_rect(&self, segment: WallSegment) -> Option<Rect> {
        match self.mode {
            WallMode::Flat => None,
            WallMode::ThreeSegment { main_width } => {
                let side = self.side_width();
                let rect = match segment {
                    WallSegment::SideLeft => Rect::new(0.0, 0.0, side, self.canvas_height),
                    WallSegment::Main => Rect::new(side, 0.0, main_width, self.canvas_height),
                    WallSegment::SideRight => {
                        Rect::new(side + main_width, 0.0, side, self.canvas_height)
                    }
                };
                Some(rect)
            }
        }
    }
}

fn check_canvas(width: f64, height: f64) -> Result<()> {
    if !(width > 0.0) || !width.is_finite() || !(height > 0.0) || !height.is_finite() {
        return Err(Error::invalid_configuration("canvas size must be positive"));
    }
    Ok(())
}

/// Selects which projection branch the engine uses.
///
/// `Auto` classifies from the sun azimuth against the wall bearing; the
/// explicit variants force a branch regardless of the sun's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facade {
    /// Classify from azimuth vs. bearing each call
    #[default]
    Auto,
    /// Force the west-facing projection branch
    West,
    /// Force the east-facing projection branch
    East,
}

/// One projected pane of light: four screen-space vertices, tagged with the
/// wall segment whose clip band applies.
///
/// Ephemeral: produced fresh each frame and discarded after drawing. The
/// fill color is supplied per location by the compositor at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPane {
    /// Vertices in draw order (top-left, top-right, bottom-right, bottom-left)
    pub vertices: [Point2; 4],
    /// Wall segment this pane lies on
    pub segment: WallSegment,
}

impl ProjectedPane {
    /// Creates a new pane.
    #[must_use]
    pub const fn new(vertices: [Point2; 4], segment: WallSegment) -> Self {
        Self { vertices, segment }
    }

    /// Checks that every vertex coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(Point2::is_finite)
    }
}
