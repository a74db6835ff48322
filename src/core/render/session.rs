use std::time::Instant;

use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::core::animation::controller::{
    AnimationController, ZoomDirection, pan_viewport, zoom_viewport,
};
use crate::core::colour::colourize::{ColourSource, ColourizeSettings, colourize};
use crate::core::colour::palette::PALETTE_COUNT;
use crate::core::data::complex::Complex;
use crate::core::data::edge_grid::EdgeGrid;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::effects::params::EffectParams;
use crate::core::effects::state::EffectState;
use crate::core::filters::convolution::{apply_edge_filter, select_edge_filter};
use crate::core::fractals::escape_time::compute_escape_grid;
use crate::core::fractals::family::{FractalFamily, FractalKind};
use crate::core::intent::generator::{DEFAULT_MAX_ITER_BASE, generate_view_params};
use crate::core::mapping::viewport_mapper::PlaneBounds;

pub const DEFAULT_RENDER_SCALE: f64 = 1.5;
pub const MIN_RENDER_SCALE: f64 = 0.5;
pub const MAX_RENDER_SCALE: f64 = 10.0;
pub const MIN_ITERATION_BASE: u32 = 10;
pub const MAX_ITERATION_BASE: u32 = 1000;

const EXPORT_WIDTH: u32 = 1920;
const EXPORT_HEIGHT: u32 = 1080;
const EXPORT_ITERATION_MULTIPLIER: u32 = 2;

/// The whole rendering state machine: base view, derived parameters, effect
/// state, animation clock, and the reusable buffers every frame writes into.
///
/// All randomness flows through the single owned RNG, so a session seeded
/// for tests replays its glitches and parameter rolls exactly.
pub struct RenderSession {
    display_width: i32,
    display_height: i32,
    render_scale: f64,
    kind: FractalKind,
    base_iterations: u32,
    base_viewport: Viewport,
    max_iterations: u32,
    julia_c: Complex,
    julia_override: Option<Complex>,
    effects: EffectState,
    params: EffectParams,
    palette_counter: u32,
    animating: bool,
    animation: AnimationController,
    rng: StdRng,
    iterations: IterationGrid,
    edges: EdgeGrid,
    frame: PixelBuffer,
}

impl RenderSession {
    /// Starts a session on the default Mandelbrot view, derived from the
    /// empty intent exactly as [`regenerate_from_intent`] would derive it.
    ///
    /// [`regenerate_from_intent`]: Self::regenerate_from_intent
    #[must_use]
    pub fn new(display_width: i32, display_height: i32, now: Instant, rng: StdRng) -> Self {
        let mut session = Self {
            display_width,
            display_height,
            render_scale: DEFAULT_RENDER_SCALE,
            kind: FractalKind::Mandelbrot,
            base_iterations: DEFAULT_MAX_ITER_BASE,
            base_viewport: Viewport::default(),
            max_iterations: DEFAULT_MAX_ITER_BASE,
            julia_c: Complex::ZERO,
            julia_override: None,
            effects: EffectState::default(),
            params: EffectParams::default(),
            palette_counter: 0,
            animating: false,
            animation: AnimationController::new(now),
            rng,
            iterations: IterationGrid::new(GridSize::new(0, 0)),
            edges: EdgeGrid::new(GridSize::new(0, 0)),
            frame: PixelBuffer::new(GridSize::new(0, 0)),
        };
        session.regenerate_from_intent("", FractalKind::Mandelbrot, now);
        session
    }

    /// The compute grid currently in use: display size divided by the
    /// render scale, floored at the minimum dimension.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize::from_display(self.display_width, self.display_height, self.render_scale)
    }

    /// Derives a fresh base view from `intent` and restarts the animation
    /// clock. The previous view is discarded entirely.
    pub fn regenerate_from_intent(&mut self, intent: &str, kind: FractalKind, now: Instant) {
        let aspect_ratio = self.grid_size().aspect_ratio();
        let derived = generate_view_params(intent, aspect_ratio, kind, self.base_iterations);

        self.kind = kind;
        self.base_viewport = derived.viewport;
        self.max_iterations = derived.max_iterations;
        if let Some(derived_c) = derived.julia_c {
            self.julia_c = self.julia_override.unwrap_or(derived_c);
        }
        if kind != FractalKind::Julia {
            self.julia_override = None;
            self.effects.julia_morph = false;
        }
        self.animation.reset(now);

        info!(
            "new {} base view: span {:.6}, center ({:.6}, {:.6}), {} iterations",
            kind.display_name(),
            self.base_viewport.re_span,
            self.base_viewport.re_center,
            self.base_viewport.im_center,
            self.max_iterations,
        );
    }

    /// Renders one frame into the session's pixel buffer and returns it.
    ///
    /// When animating, this first advances the phase from `now` and renders
    /// the oscillated viewport; otherwise it renders the base viewport at
    /// the last phase. Strobe advances the palette once per rendered frame.
    pub fn render_frame(&mut self, now: Instant) -> &PixelBuffer {
        let started = Instant::now();
        let size = self.grid_size();

        let time_phase = if self.animating {
            self.animation.tick(now)
        } else {
            self.animation.time_phase()
        };

        let viewport = if self.animating {
            self.animation
                .displayed_viewport(self.base_viewport, size.aspect_ratio())
        } else {
            self.base_viewport
        };

        let bounds = PlaneBounds::new(viewport, size);
        let family = self.effective_family(time_phase);
        self.iterations.resize_if_needed(size);
        compute_escape_grid(&mut self.iterations, bounds, family, self.max_iterations);

        let source = match select_edge_filter(self.effects.neon_edges, self.effects.emboss) {
            Some(filter) => {
                self.edges.resize_if_needed(size);
                apply_edge_filter(&self.iterations, &mut self.edges, filter);
                ColourSource::Edges(&self.edges)
            }
            None => ColourSource::Iterations(&self.iterations),
        };

        if self.effects.strobe && !self.effects.psychedelic {
            self.palette_counter = self.palette_counter.wrapping_add(1);
        }

        let settings = ColourizeSettings {
            max_iterations: self.max_iterations,
            palette_id: self.palette_counter,
            time_phase,
            effects: &self.effects,
            params: &self.params,
        };
        colourize(source, settings, &mut self.rng, &mut self.frame);

        debug!(
            "frame {}x{} rendered in {:.1}ms",
            size.width(),
            size.height(),
            started.elapsed().as_secs_f64() * 1000.0,
        );
        &self.frame
    }

    /// Drags the base center by a pixel delta, converted through the span
    /// currently on screen so a drag tracks the cursor even mid-animation.
    pub fn pan(&mut self, pixel_delta: (f64, f64)) {
        let size = self.grid_size();
        let displayed_span = if self.animating {
            self.animation
                .displayed_viewport(self.base_viewport, size.aspect_ratio())
                .re_span
        } else {
            self.base_viewport.re_span
        };
        pan_viewport(&mut self.base_viewport, displayed_span, pixel_delta, size);
    }

    /// Zoom-to-cursor against the base viewport; the animation wave keeps
    /// oscillating around the new base.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: (f64, f64)) {
        let size = self.grid_size();
        zoom_viewport(&mut self.base_viewport, direction, anchor, size);
    }

    pub fn set_display_size(&mut self, width: i32, height: i32) {
        self.display_width = width;
        self.display_height = height;
    }

    /// Clamps to `[MIN_RENDER_SCALE, MAX_RENDER_SCALE]` and returns the
    /// value actually applied.
    pub fn set_render_scale(&mut self, scale: f64) -> f64 {
        self.render_scale = scale.clamp(MIN_RENDER_SCALE, MAX_RENDER_SCALE);
        self.render_scale
    }

    /// Clamps to `[MIN_ITERATION_BASE, MAX_ITERATION_BASE]` and returns the
    /// value actually applied. Takes effect on the next regeneration.
    pub fn set_iteration_base(&mut self, base: u32) -> u32 {
        self.base_iterations = base.clamp(MIN_ITERATION_BASE, MAX_ITERATION_BASE);
        self.base_iterations
    }

    /// Replaces the effect toggles, rolling fresh parameters for every
    /// effect that just switched on. Julia morph is refused outside Julia,
    /// and psychedelic coloring silently drops strobe.
    pub fn apply_toggles(&mut self, requested: EffectState) {
        let mut next = requested;
        if self.kind != FractalKind::Julia {
            next.julia_morph = false;
        }
        next.resolve_conflicts();

        self.params
            .randomize_rising_edges(self.effects, next, &mut self.rng);
        self.effects = next;
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Pins the Julia constant. The pinned value survives later Julia
    /// regenerations (only the viewport re-derives) and is dropped when the
    /// session switches to another family.
    pub fn set_julia_c(&mut self, c: Complex) {
        self.julia_c = c;
        self.julia_override = Some(c);
    }

    /// Renders the base view at export resolution with a doubled iteration
    /// budget, a freshly rolled palette, and every effect off.
    ///
    /// The session's own buffers and state are untouched; exporting
    /// mid-animation still captures the un-oscillated base view.
    #[must_use]
    pub fn export_snapshot(&mut self) -> PixelBuffer {
        let size = GridSize::new(EXPORT_WIDTH, EXPORT_HEIGHT);
        let max_iterations = self.max_iterations * EXPORT_ITERATION_MULTIPLIER;
        info!(
            "exporting {} snapshot at {}x{}, {} iterations",
            self.kind.display_name(),
            size.width(),
            size.height(),
            max_iterations,
        );

        let bounds = PlaneBounds::new(self.base_viewport, size);
        let mut iterations = IterationGrid::new(size);
        compute_escape_grid(&mut iterations, bounds, self.base_family(), max_iterations);

        let mut params = EffectParams::default();
        params.palette = params.random_palette(&mut self.rng);
        let effects = EffectState::default();
        let settings = ColourizeSettings {
            max_iterations,
            palette_id: self.rng.gen_range(0..PALETTE_COUNT),
            time_phase: 0.0,
            effects: &effects,
            params: &params,
        };

        let mut buffer = PixelBuffer::new(size);
        colourize(
            ColourSource::Iterations(&iterations),
            settings,
            &mut self.rng,
            &mut buffer,
        );
        buffer
    }

    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    #[must_use]
    pub fn iteration_grid(&self) -> &IterationGrid {
        &self.iterations
    }

    #[must_use]
    pub fn base_viewport(&self) -> Viewport {
        self.base_viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn julia_c(&self) -> Complex {
        self.julia_c
    }

    #[must_use]
    pub fn effects(&self) -> EffectState {
        self.effects
    }

    #[must_use]
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    #[must_use]
    pub fn palette_counter(&self) -> u32 {
        self.palette_counter
    }

    /// The family actually iterated this frame; Julia morph displaces the
    /// constant along a small circle driven by the animation phase.
    fn effective_family(&self, time_phase: f64) -> FractalFamily {
        match self.kind {
            FractalKind::Mandelbrot => FractalFamily::Mandelbrot,
            FractalKind::BurningShip => FractalFamily::BurningShip,
            FractalKind::Julia => {
                let mut c = self.julia_c;
                if self.effects.julia_morph {
                    let angle = time_phase * 2.0 * std::f64::consts::PI * 0.5;
                    c = Complex {
                        real: c.real + self.params.julia_morph_radius * angle.cos(),
                        imag: c.imag + self.params.julia_morph_radius * angle.sin(),
                    };
                }
                FractalFamily::Julia { c }
            }
        }
    }

    fn base_family(&self) -> FractalFamily {
        match self.kind {
            FractalKind::Mandelbrot => FractalFamily::Mandelbrot,
            FractalKind::BurningShip => FractalFamily::BurningShip,
            FractalKind::Julia => FractalFamily::Julia { c: self.julia_c },
        }
    }
}
