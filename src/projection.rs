//! Light projection: from solar angles to pane quadrilaterals.
//!
//! The engine maps one window group (a grid of panes anchored at a corner
//! offset) to the patch of light it throws on the wall. Horizontal extents
//! are foreshortened by the tangent of the light angle between sun and wall
//! plane; vertical skew follows the tangent of the elevation. On a
//! three-segment wall each pane additionally throws a parallel-light patch
//! onto the far side band, where the angled wall cancels the perspective
//! foreshortening.
//!
//! Everything here is pure geometry: the caller computes the solar angles
//! once per frame and passes them in.

use crate::math::tan_deg;
use crate::types::{
    Facade, Point2, ProjectedPane, SolarAngles, WallGeometry, WallMode, WallSegment, WindowGrid,
};

/// Which projection branch is active and at what angle light meets the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacadeOrientation {
    /// True when the west-facing branch is active
    pub is_west: bool,
    /// Angle between incoming light and the wall plane, in degrees
    pub light_angle: f64,
}

/// Classifies the active facade and derives the light angle.
///
/// With [`Facade::Auto`] the branch follows the sun: azimuths beyond
/// `bearing - 90°` light the west-facing branch. The boundary itself (an
/// azimuth exactly 90° before the bearing) classifies east. The explicit
/// variants force a branch regardless of azimuth.
#[must_use]
pub fn orientation(azimuth: f64, bearing: f64, facade: Facade) -> FacadeOrientation {
    let is_west = match facade {
        Facade::West => true,
        Facade::East => false,
        Facade::Auto => azimuth > bearing - 90.0,
    };
    let light_angle = if is_west {
        bearing - azimuth
    } else {
        azimuth - (bearing - 180.0)
    };
    FacadeOrientation {
        is_west,
        light_angle,
    }
}

/// Projects one window group onto the wall.
///
/// `corner_offset` is the group's horizontal distance from the near edge of
/// the main wall (the canvas edge for a flat wall); `top_offset` is its
/// distance from the top. Returns one quad per pane on a flat wall, two per
/// pane (main + far side band) on a three-segment wall, each tagged with
/// the [`WallSegment`] whose clip band applies.
///
/// Returns an empty vector when the sun is below the horizon or the light
/// angle is degenerate (grazing the wall plane exactly), so no NaN or
/// infinite coordinate ever reaches the renderer.
#[must_use]
pub fn project_panes(
    angles: SolarAngles,
    wall: &WallGeometry,
    grid: &WindowGrid,
    corner_offset: f64,
    top_offset: f64,
    facade: Facade,
) -> Vec<ProjectedPane> {
    if angles.elevation() < 0.0 {
        return Vec::new();
    }

    let orient = orientation(angles.azimuth(), wall.bearing(), facade);
    let tan_light = tan_deg(orient.light_angle);
    if tan_light == 0.0 {
        return Vec::new();
    }

    let dir: f64 = if orient.is_west { 1.0 } else { -1.0 };
    let tan_elevation = tan_deg(angles.elevation());

    let side_width = wall.side_width();
    let main_width = wall.main_width();

    // Perspective geometry on the main face
    let h_off = corner_offset / tan_light;
    let origin_x = if orient.is_west {
        side_width + h_off
    } else {
        side_width + main_width - h_off
    };
    let origin_y = top_offset + tan_elevation * h_off;

    let proj_pane_w = dir * grid.pane_width() / tan_light;
    let proj_gap_x = dir * grid.gap_x() / tan_light;
    let tan_elev = dir * tan_elevation;
    let v_pane_offset = tan_elev * proj_pane_w;
    let v_gap_offset = tan_elev * proj_gap_x;
    let col_x_step = proj_pane_w + proj_gap_x;
    let col_y_step = v_gap_offset + v_pane_offset;
    let row_y_step = grid.pane_height() + grid.gap_y();
    let v_pane_height = v_pane_offset + grid.pane_height();

    let panes_per_pane = match wall.mode() {
        WallMode::Flat => 1,
        WallMode::ThreeSegment { .. } => 2,
    };
    let mut panes =
        Vec::with_capacity((grid.cols() * grid.rows()) as usize * panes_per_pane);

    for col in 0..grid.cols() {
        let base_x = origin_x + f64::from(col) * col_x_step;
        let base_y = origin_y + f64::from(col) * col_y_step;
        let right_x = base_x + proj_pane_w;

        for row in 0..grid.rows() {
            let y = base_y + f64::from(row) * row_y_step;
            panes.push(ProjectedPane::new(
                [
                    Point2::new(base_x, y),
                    Point2::new(right_x, y + v_pane_offset),
                    Point2::new(right_x, y + v_pane_height),
                    Point2::new(base_x, y + grid.pane_height()),
                ],
                WallSegment::Main,
            ));
        }
    }

    if let WallMode::ThreeSegment { .. } = wall.mode() {
        project_side_panes(
            grid,
            corner_offset,
            top_offset,
            orient.is_west,
            tan_elevation,
            side_width,
            main_width,
            &mut panes,
        );
    }

    panes
}

/// Parallel-light patches on the far side band of a three-segment wall.
///
/// Light crossing the facade bend keeps its direction, and the angled side
/// wall cancels the perspective foreshortening: pane footprints keep their
/// unprojected width and only the elevation skews them vertically.
#[allow(clippy::too_many_arguments)]
fn project_side_panes(
    grid: &WindowGrid,
    corner_offset: f64,
    top_offset: f64,
    is_west: bool,
    tan_elevation: f64,
    side_width: f64,
    main_width: f64,
    panes: &mut Vec<ProjectedPane>,
) {
    let dir: f64 = if is_west { 1.0 } else { -1.0 };
    let total_width = grid.total_width();

    let (origin_x, segment) = if is_west {
        (side_width + main_width + corner_offset, WallSegment::SideRight)
    } else {
        (side_width - corner_offset - total_width, WallSegment::SideLeft)
    };
    let origin_y = top_offset + tan_elevation * corner_offset;

    let v_side = dir * tan_elevation * grid.pane_width();
    let col_x_step = grid.pane_width() + grid.gap_x();
    let col_y_step = dir * tan_elevation * col_x_step;
    let row_y_step = grid.pane_height() + grid.gap_y();

    for col in 0..grid.cols() {
        let x0 = origin_x + f64::from(col) * col_x_step;
        let x1 = x0 + grid.pane_width();
        let base_y = origin_y + f64::from(col) * col_y_step;

        for row in 0..grid.rows() {
            let y = base_y + f64::from(row) * row_y_step;
            panes.push(ProjectedPane::new(
                [
                    Point2::new(x0, y),
                    Point2::new(x1, y + v_side),
                    Point2::new(x1, y + v_side + grid.pane_height()),
                    Point2::new(x0, y + grid.pane_height()),
                ],
                segment,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn angles(azimuth: f64, elevation: f64) -> SolarAngles {
        SolarAngles::new(azimuth, elevation).unwrap()
    }

    #[test]
    fn test_orientation_branches() {
        // Bearing 245: azimuths above 155 light the west branch
        let west = orientation(233.8, 245.0, Facade::Auto);
        assert!(west.is_west);
        assert!((west.light_angle - 11.2).abs() < EPSILON);

        let east = orientation(100.0, 245.0, Facade::Auto);
        assert!(!east.is_west);
        assert!((east.light_angle - 35.0).abs() < EPSILON);
    }

    #[test]
    fn test_orientation_boundary_classifies_east() {
        // Azimuth exactly 90° before the bearing is not "beyond" it
        let boundary = orientation(155.0, 245.0, Facade::Auto);
        assert!(!boundary.is_west);
        assert!((boundary.light_angle - 90.0).abs() < EPSILON);

        let just_past = orientation(155.0 + 1e-9, 245.0, Facade::Auto);
        assert!(just_past.is_west);
    }

    #[test]
    fn test_orientation_forced_branches() {
        let forced_west = orientation(100.0, 245.0, Facade::West);
        assert!(forced_west.is_west);
        assert!((forced_west.light_angle - 145.0).abs() < EPSILON);

        let forced_east = orientation(233.8, 245.0, Facade::East);
        assert!(!forced_east.is_west);
    }

    #[test]
    fn test_below_horizon_projects_nothing() {
        let wall = WallGeometry::flat(245.0, 1280.0, 896.0).unwrap();
        let grid = WindowGrid::from_canvas_height(896.0).unwrap();

        let panes = project_panes(angles(300.0, -5.0), &wall, &grid, 10.0, 30.0, Facade::Auto);
        assert!(panes.is_empty());
    }

    #[test]
    fn test_degenerate_light_angle_projects_nothing() {
        let wall = WallGeometry::flat(245.0, 1280.0, 896.0).unwrap();
        let grid = WindowGrid::from_canvas_height(896.0).unwrap();

        // Azimuth equal to the bearing makes the west light angle exactly zero
        let panes = project_panes(angles(245.0, 30.0), &wall, &grid, 10.0, 30.0, Facade::Auto);
        assert!(panes.is_empty());
    }

    #[test]
    fn test_flat_wall_pane_count_and_finiteness() {
        let wall = WallGeometry::flat(245.0, 1280.0, 896.0).unwrap();
        let grid = WindowGrid::from_canvas_height(896.0).unwrap();

        let panes = project_panes(angles(233.8, 44.4), &wall, &grid, 10.0, 30.0, Facade::Auto);
        assert_eq!(panes.len(), 32);
        assert!(panes.iter().all(ProjectedPane::is_finite));
        assert!(panes.iter().all(|p| p.segment == WallSegment::Main));
    }

    #[test]
    fn test_three_segment_tags_both_bands() {
        let wall = WallGeometry::three_segment(245.0, 1280.0, 896.0, 680.0).unwrap();
        let grid = WindowGrid::from_canvas_height(896.0).unwrap();

        let panes = project_panes(angles(233.8, 44.4), &wall, &grid, 10.0, 30.0, Facade::Auto);
        assert_eq!(panes.len(), 64);

        let main = panes.iter().filter(|p| p.segment == WallSegment::Main).count();
        let side = panes
            .iter()
            .filter(|p| p.segment == WallSegment::SideRight)
            .count();
        assert_eq!(main, 32);
        assert_eq!(side, 32);

        // West branch: the parallel patch lands on the right side band
        assert!(!panes.iter().any(|p| p.segment == WallSegment::SideLeft));
    }

    #[test]
    fn test_side_panes_keep_unprojected_width() {
        let wall = WallGeometry::three_segment(245.0, 1280.0, 896.0, 680.0).unwrap();
        let grid = WindowGrid::from_canvas_height(896.0).unwrap();

        let panes = project_panes(angles(233.8, 44.4), &wall, &grid, 10.0, 30.0, Facade::Auto);
        let side = panes
            .iter()
            .find(|p| p.segment == WallSegment::SideRight)
            .unwrap();

        let width = side.vertices[1].x - side.vertices[0].x;
        assert!((width - grid.pane_width()).abs() < EPSILON);

        // First side pane starts just past the main band's far edge
        assert!((side.vertices[0].x - (300.0 + 680.0 + 10.0)).abs() < EPSILON);
    }
}
