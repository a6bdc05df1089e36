//! Render collaborator interface and frame pipeline.
//!
//! The core never draws pixels itself; it issues buffer-addressed commands
//! to a [`RenderTarget`]. Three logical buffers mirror the trail pipeline:
//! pane shapes are drawn at full opacity into `Temp`, composited onto
//! `Accumulation` (which is faded a little each frame, leaving trails), and
//! the result reaches `Screen` through a blur/grain post shader. When no
//! shader could be loaded the pipeline composites the accumulation buffer
//! to the screen directly.
//!
//! [`RecordingRenderer`] captures the command stream for tests and the
//! headless demo.

use crate::types::{Hsba, Point2, Rect};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Blur kernel radius passed to the post shader.
pub const BLUR_AMOUNT: f64 = 3.0;

/// Grain intensity passed to the post shader (0.0 - 1.0).
pub const GRAIN_AMOUNT: f64 = 0.0;

/// Logical frame buffers addressed by render commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameBuffer {
    /// Per-frame scratch buffer the pane shapes are drawn into
    Temp,
    /// Persistent buffer carrying the light trails across frames
    Accumulation,
    /// The visible canvas
    Screen,
}

/// Uniforms for the blur/grain post shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderParams {
    /// Size of one texel: `[1/width, 1/height]`
    pub texel_size: [f64; 2],
    /// Blur kernel radius
    pub blur_amount: f64,
    /// Grain intensity (0.0 - 1.0)
    pub grain_amount: f64,
    /// Grain animation phase
    pub time: f64,
}

/// Drawing surface the simulation core writes into.
///
/// Implementations may rasterize, record, or forward to a GPU; the core
/// only guarantees the command order documented on [`FramePipeline`].
pub trait RenderTarget {
    /// Clears a buffer to fully transparent.
    fn clear_buffer(&mut self, buffer: FrameBuffer);

    /// Blends a translucent color over the whole buffer (the trail fade).
    fn fade_buffer(&mut self, buffer: FrameBuffer, color: Hsba);

    /// Restricts subsequent drawing on a buffer to a region; `None` lifts
    /// the restriction.
    fn clip_to_region(&mut self, buffer: FrameBuffer, region: Option<Rect>);

    /// Fills a quadrilateral with a color.
    fn draw_polygon(&mut self, buffer: FrameBuffer, vertices: [Point2; 4], color: Hsba);

    /// Draws the full contents of `src` over `dst`.
    fn composite_buffer(&mut self, src: FrameBuffer, dst: FrameBuffer);

    /// Runs the post shader, sampling the accumulation buffer onto the
    /// screen.
    fn apply_post_shader(&mut self, params: &ShaderParams);
}

/// Blur/grain shader sources, loaded from disk once at startup.
#[derive(Debug, Clone)]
pub struct PostShader {
    vertex_source: String,
    fragment_source: String,
}

impl PostShader {
    /// Reads the vertex and fragment sources.
    ///
    /// # Errors
    /// Returns an error when either file cannot be read; callers typically
    /// degrade to unshaded compositing instead of aborting.
    pub fn load(vertex: &Path, fragment: &Path) -> anyhow::Result<Self> {
        let vertex_source = fs::read_to_string(vertex)
            .with_context(|| format!("reading vertex shader {}", vertex.display()))?;
        let fragment_source = fs::read_to_string(fragment)
            .with_context(|| format!("reading fragment shader {}", fragment.display()))?;
        Ok(Self {
            vertex_source,
            fragment_source,
        })
    }

    /// Builds a shader from in-memory sources.
    #[must_use]
    pub fn from_sources(vertex_source: String, fragment_source: String) -> Self {
        Self {
            vertex_source,
            fragment_source,
        }
    }

    /// Gets the vertex shader source.
    #[must_use]
    pub fn vertex_source(&self) -> &str {
        &self.vertex_source
    }

    /// Gets the fragment shader source.
    #[must_use]
    pub fn fragment_source(&self) -> &str {
        &self.fragment_source
    }
}

/// Sequences one frame of the trail pipeline.
///
/// Per frame: `begin_frame` fades the accumulation buffer and clears the
/// scratch buffer, the compositor draws pane shapes into `Temp`, then
/// `finish_frame` composites `Temp` onto `Accumulation` and runs the post
/// shader (or composites straight to the screen without one).
#[derive(Debug)]
pub struct FramePipeline {
    canvas_width: f64,
    canvas_height: f64,
    trail_fade: Hsba,
    shader: Option<PostShader>,
}

impl FramePipeline {
    /// Creates a pipeline; `shader: None` selects the unshaded fallback
    /// and logs a warning once.
    #[must_use]
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        trail_fade: Hsba,
        shader: Option<PostShader>,
    ) -> Self {
        if shader.is_none() {
            log::warn!("no post shader loaded; compositing without blur/grain");
        }
        Self {
            canvas_width,
            canvas_height,
            trail_fade,
            shader,
        }
    }

    /// Checks whether the post shader is available.
    #[must_use]
    pub const fn has_shader(&self) -> bool {
        self.shader.is_some()
    }

    /// Gets the loaded shader sources, if any.
    #[must_use]
    pub const fn shader(&self) -> Option<&PostShader> {
        self.shader.as_ref()
    }

    /// Builds the shader uniforms for the current grain phase.
    #[must_use]
    pub fn shader_params(&self, grain_time: f64) -> ShaderParams {
        ShaderParams {
            texel_size: [1.0 / self.canvas_width, 1.0 / self.canvas_height],
            blur_amount: BLUR_AMOUNT,
            grain_amount: GRAIN_AMOUNT,
            time: grain_time,
        }
    }

    /// Opens a frame: fades the trails and clears the scratch buffer.
    pub fn begin_frame(&self, target: &mut dyn RenderTarget) {
        target.fade_buffer(FrameBuffer::Accumulation, self.trail_fade);
        target.clear_buffer(FrameBuffer::Temp);
    }

    /// Closes a frame: composites the scratch buffer onto the trails, then
    /// shades (or plainly composites) onto the screen.
    pub fn finish_frame(&self, target: &mut dyn RenderTarget, grain_time: f64) {
        target.composite_buffer(FrameBuffer::Temp, FrameBuffer::Accumulation);
        if self.shader.is_some() {
            target.apply_post_shader(&self.shader_params(grain_time));
        } else {
            target.composite_buffer(FrameBuffer::Accumulation, FrameBuffer::Screen);
        }
    }
}

/// One recorded render command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    /// Buffer cleared
    Clear {
        /// Cleared buffer
        buffer: FrameBuffer,
    },
    /// Buffer faded with a translucent color
    Fade {
        /// Faded buffer
        buffer: FrameBuffer,
        /// Fade color, alpha included
        color: Hsba,
    },
    /// Clip region set or lifted
    Clip {
        /// Affected buffer
        buffer: FrameBuffer,
        /// New clip region, `None` lifts it
        region: Option<Rect>,
    },
    /// Quadrilateral filled
    Polygon {
        /// Target buffer
        buffer: FrameBuffer,
        /// Vertices in draw order
        vertices: [Point2; 4],
        /// Fill color
        color: Hsba,
    },
    /// Buffer composited over another
    Composite {
        /// Source buffer
        src: FrameBuffer,
        /// Destination buffer
        dst: FrameBuffer,
    },
    /// Post shader applied
    Shader {
        /// Uniforms the shader ran with
        params: ShaderParams,
    },
}

/// A [`RenderTarget`] that records the command stream instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    ops: Vec<RenderOp>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the recorded commands in issue order.
    #[must_use]
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    /// Counts recorded polygon fills.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RenderOp::Polygon { .. }))
            .count()
    }

    /// Drops all recorded commands.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl RenderTarget for RecordingRenderer {
    fn clear_buffer(&mut self, buffer: FrameBuffer) {
        self.ops.push(RenderOp::Clear { buffer });
    }

    fn fade_buffer(&mut self, buffer: FrameBuffer, color: Hsba) {
        self.ops.push(RenderOp::Fade { buffer, color });
    }

    fn clip_to_region(&mut self, buffer: FrameBuffer, region: Option<Rect>) {
        self.ops.push(RenderOp::Clip { buffer, region });
    }

    fn draw_polygon(&mut self, buffer: FrameBuffer, vertices: [Point2; 4], color: Hsba) {
        self.ops.push(RenderOp::Polygon {
            buffer,
            vertices,
            color,
        });
    }

    fn composite_buffer(&mut self, src: FrameBuffer, dst: FrameBuffer) {
        self.ops.push(RenderOp::Composite { src, dst });
    }

    fn apply_post_shader(&mut self, params: &ShaderParams) {
        self.ops.push(RenderOp::Shader { params: *params });
    }
}
