//! End-to-end frames: scene state, dimmer, projection and pipeline order.

use chrono::NaiveDate;
use lightwell::clock::DateMode;
use lightwell::config::{builtin_locations, SceneConfig};
use lightwell::render::{
    FrameBuffer, PostShader, RecordingRenderer, RenderOp, BLUR_AMOUNT, GRAIN_AMOUNT,
};
use lightwell::types::{Hsba, Rect};
use lightwell::{Scene, SceneCommand};

const EPSILON: f64 = 1e-9;

fn fixed_config() -> SceneConfig {
    SceneConfig {
        time_speed: 0.0,
        date_mode: DateMode::Fixed(NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()),
        ..SceneConfig::default()
    }
}

fn scene_at(progress: f64, config: SceneConfig) -> Scene {
    let mut scene = Scene::new(config, builtin_locations().unwrap(), None).unwrap();
    scene.clock_mut().set_progress(progress).unwrap();
    scene
}

#[test]
fn noon_frame_draws_every_pass_in_full_daylight() {
    let mut scene = scene_at(0.5, fixed_config());
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();

    // Marrakesh alone: 3 groups x 2 passes x 32 panes
    assert_eq!(report.total_panes, 192);
    assert_eq!(target.polygon_count(), 192);

    // Noon sits on both ramp plateaus; the fill color is fully bright
    let expected = Hsba::new(35.0, 100.0, 70.0, 61.25);
    for op in target.ops() {
        if let RenderOp::Polygon { buffer, color, .. } = op {
            assert_eq!(*buffer, FrameBuffer::Temp);
            assert_eq!(*color, expected);
        }
    }
}

#[test]
fn toggling_locations_changes_the_draw_load() {
    let mut scene = scene_at(0.5, fixed_config());
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();
    assert_eq!(report.total_panes, 192);

    scene.queue(SceneCommand::ToggleLocation(4));
    target.reset();
    let report = scene.tick(&mut target).unwrap();

    let names: Vec<&str> = report.locations.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Marrakesh", "Barcelona"]);
    assert_eq!(report.total_panes, 384);
    assert_eq!(target.polygon_count(), 384);

    scene.queue(SceneCommand::ToggleLocation(2));
    target.reset();
    let report = scene.tick(&mut target).unwrap();

    assert_eq!(report.locations.len(), 1);
    assert_eq!(report.locations[0].name, "Barcelona");
    assert_eq!(report.total_panes, 192);
}

#[test]
fn dawn_brightness_follows_the_appearing_ramp() {
    // progress 0.3125 -> 07:30 UTC, shortly after the Marrakesh sunrise
    let mut scene = scene_at(0.3125, fixed_config());
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();
    let frame = &report.locations[0];

    assert!((frame.light_angle - 31.50825292866145).abs() < EPSILON);
    assert!((frame.color.brightness - 63.86363739921095).abs() < EPSILON);
    assert!((frame.color.alpha - 55.88068272430959).abs() < EPSILON);
    assert_eq!(frame.color.hue, 35.0);
    assert_eq!(frame.pane_count, 192);
}

#[test]
fn dusk_past_the_wall_goes_dark_before_the_horizon_does() {
    // progress 0.78125 -> 18:45 UTC, sun just set and well past the wall
    let mut scene = scene_at(0.78125, fixed_config());
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();
    let frame = &report.locations[0];

    assert!(frame.angles.is_below_horizon());
    assert!(frame.light_angle < 0.0);
    assert_eq!(frame.color.brightness, 0.0);
    assert_eq!(frame.color.alpha, 0.0);
    assert_eq!(frame.pane_count, 0);
    assert_eq!(target.polygon_count(), 0);
}

#[test]
fn overlay_line_matches_the_reference_format() {
    let mut scene = scene_at(0.5, fixed_config());
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();

    assert_eq!(
        report.overlay,
        "Mar 21, 2026 | Marrakesh | South-West Wall (245°) | GMT 12:00:00 \
         | Elevation: 57.4° | Azimuth: 161.6° | Sunrise: 06:39 | Sunset: 18:40"
    );
}

#[test]
fn unshaded_pipeline_brackets_the_polygons() {
    let mut scene = scene_at(0.5, fixed_config());
    let mut target = RecordingRenderer::new();

    scene.tick(&mut target).unwrap();
    let ops = target.ops();

    // fade + clear, 192 fills, composite + composite
    assert_eq!(ops.len(), 196);
    assert_eq!(
        ops[0],
        RenderOp::Fade {
            buffer: FrameBuffer::Accumulation,
            color: Hsba::new(0.0, 0.0, 0.0, 20.0),
        }
    );
    assert_eq!(
        ops[1],
        RenderOp::Clear {
            buffer: FrameBuffer::Temp
        }
    );
    assert_eq!(
        ops[ops.len() - 2],
        RenderOp::Composite {
            src: FrameBuffer::Temp,
            dst: FrameBuffer::Accumulation,
        }
    );
    assert_eq!(
        ops[ops.len() - 1],
        RenderOp::Composite {
            src: FrameBuffer::Accumulation,
            dst: FrameBuffer::Screen,
        }
    );

    // Flat walls draw unclipped and the fallback path never shades
    assert!(!ops.iter().any(|op| matches!(op, RenderOp::Clip { .. })));
    assert!(!ops.iter().any(|op| matches!(op, RenderOp::Shader { .. })));
}

#[test]
fn shader_pipeline_ends_with_the_post_pass() {
    let shader = PostShader::from_sources("void main() {}".into(), "void main() {}".into());
    let mut scene = Scene::new(fixed_config(), builtin_locations().unwrap(), Some(shader)).unwrap();
    scene.clock_mut().set_progress(0.5).unwrap();

    let mut target = RecordingRenderer::new();
    scene.tick(&mut target).unwrap();
    let ops = target.ops();

    match ops.last() {
        Some(RenderOp::Shader { params }) => {
            assert_eq!(params.blur_amount, BLUR_AMOUNT);
            assert_eq!(params.grain_amount, GRAIN_AMOUNT);
            assert!((params.texel_size[0] - 1.0 / 1280.0).abs() < EPSILON);
            assert!((params.texel_size[1] - 1.0 / 896.0).abs() < EPSILON);
            // Grain phase after the first tick
            assert!((params.time - 0.1).abs() < EPSILON);
        }
        other => panic!("expected a trailing shader op, got {other:?}"),
    }
    assert!(!ops.iter().any(|op| matches!(
        op,
        RenderOp::Composite {
            dst: FrameBuffer::Screen,
            ..
        }
    )));
}

#[test]
fn three_segment_wall_clips_each_band() {
    let config = SceneConfig {
        main_wall_width: Some(680.0),
        ..fixed_config()
    };
    // progress 0.625 -> 15:00 UTC, west branch
    let mut scene = scene_at(0.625, config);
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();

    // Two quads per pane: main face plus the far side band
    assert_eq!(report.total_panes, 384);
    assert_eq!(target.polygon_count(), 384);

    let main_band = Rect::new(300.0, 0.0, 680.0, 896.0);
    let right_band = Rect::new(980.0, 0.0, 300.0, 896.0);

    let clip_regions: Vec<Option<Rect>> = target
        .ops()
        .iter()
        .filter_map(|op| match op {
            RenderOp::Clip { region, .. } => Some(*region),
            _ => None,
        })
        .collect();

    // Each of the six passes re-clips main and side band once, then the
    // frame lifts the clip before compositing
    assert_eq!(clip_regions.len(), 13);
    assert_eq!(
        clip_regions.iter().filter(|r| **r == Some(main_band)).count(),
        6
    );
    assert_eq!(
        clip_regions
            .iter()
            .filter(|r| **r == Some(right_band))
            .count(),
        6
    );
    assert_eq!(clip_regions.last(), Some(&None));

    let ops = target.ops();
    assert_eq!(
        ops[ops.len() - 3],
        RenderOp::Clip {
            buffer: FrameBuffer::Temp,
            region: None,
        }
    );
}

#[test]
fn night_frame_runs_the_pipeline_only() {
    let mut scene = scene_at(0.0, fixed_config());
    let mut target = RecordingRenderer::new();

    let report = scene.tick(&mut target).unwrap();

    assert_eq!(report.total_panes, 0);
    assert_eq!(report.locations.len(), 1);
    assert_eq!(report.locations[0].pane_count, 0);

    assert_eq!(
        target.ops(),
        &[
            RenderOp::Fade {
                buffer: FrameBuffer::Accumulation,
                color: Hsba::new(0.0, 0.0, 0.0, 20.0),
            },
            RenderOp::Clear {
                buffer: FrameBuffer::Temp
            },
            RenderOp::Composite {
                src: FrameBuffer::Temp,
                dst: FrameBuffer::Accumulation,
            },
            RenderOp::Composite {
                src: FrameBuffer::Accumulation,
                dst: FrameBuffer::Screen,
            },
        ]
    );
}
