//! Scene configuration.
//!
//! Plain value structs with defaults reproducing the reference scene: a
//! south-west wall (bearing 245°), three window groups spaced across the
//! facade, the Marrakesh location enabled, and the day looping at five
//! hundredths of a percent per tick.

use crate::clock::DateMode;
use crate::types::{Facade, GeoLocation, Hsba};
use crate::Result;

/// Anchor of one window group on the facade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupAnchor {
    /// Horizontal distance from the near wall edge, in pixels
    pub corner_offset: f64,
    /// Vertical distance from the canvas top, in pixels
    pub top_offset: f64,
}

impl GroupAnchor {
    /// Creates an anchor.
    #[must_use]
    pub const fn new(corner_offset: f64, top_offset: f64) -> Self {
        Self {
            corner_offset,
            top_offset,
        }
    }

    /// Shifts the anchor by the same amount on both axes (the echo pass).
    #[must_use]
    pub fn offset_by(&self, delta: f64) -> Self {
        Self {
            corner_offset: self.corner_offset + delta,
            top_offset: self.top_offset + delta,
        }
    }
}

/// Configuration for a facade scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
    /// Compass bearing the wall faces, in degrees
    pub wall_bearing: f64,
    /// Main-wall width for the three-segment topology; `None` keeps the
    /// wall flat
    pub main_wall_width: Option<f64>,
    /// Day progress added per tick (fraction of a whole day)
    pub time_speed: f64,
    /// Grain phase added per tick, independent of the day cycle
    pub grain_speed: f64,
    /// Translucent fade blended over the accumulation buffer each frame
    /// (lower alpha = longer trails)
    pub trail_fade: Hsba,
    /// Window group anchors across the facade
    pub group_anchors: Vec<GroupAnchor>,
    /// Shift of the second, depth-effect pass drawn behind each group
    pub echo_offset: f64,
    /// Calendar date the simulated times fall on
    pub date_mode: DateMode,
    /// Projection branch selection
    pub facade: Facade,
}

impl SceneConfig {
    /// Creates the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            canvas_width: 1280.0,
            canvas_height: 896.0,
            wall_bearing: 245.0,
            main_wall_width: None,
            time_speed: 0.0005,
            grain_speed: 0.1,
            trail_fade: Hsba::new(0.0, 0.0, 0.0, 20.0),
            group_anchors: vec![
                GroupAnchor::new(10.0, 30.0),
                GroupAnchor::new(310.0, 30.0),
                GroupAnchor::new(610.0, 30.0),
            ],
            echo_offset: 2.0,
            date_mode: DateMode::Today,
            facade: Facade::Auto,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The five built-in locations, bound to keys 1 through 5, with Marrakesh
/// enabled as the starting contributor.
///
/// # Errors
/// Never fails for the built-in table; the `Result` mirrors
/// [`GeoLocation::new`].
pub fn builtin_locations() -> Result<Vec<GeoLocation>> {
    let london = GeoLocation::new("London", 51.5074, -0.1278, 1)?;
    let mut marrakesh = GeoLocation::new("Marrakesh", 31.6295, -7.9811, 2)?;
    marrakesh.set_enabled(true);
    let reykjavik = GeoLocation::new("Reykjavik", 64.1355, -21.8954, 3)?;
    let barcelona = GeoLocation::new("Barcelona", 41.3851, 2.1734, 4)?;
    let eritrea = GeoLocation::new("Eritrea", 15.3229, 38.9251, 5)?;

    Ok(vec![london, marrakesh, reykjavik, barcelona, eritrea])
}
