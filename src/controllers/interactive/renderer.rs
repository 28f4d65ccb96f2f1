use crate::controllers::interactive::data::{InteractionState, RendererConfig};
use crate::controllers::interactive::errors::RendererError;
use crate::controllers::interactive::events::{
    EventResponse, InputEvent, PointerButton, PointerButtons, WheelDirection,
};
use crate::controllers::interactive::ports::FramePresenterPort;
use crate::controllers::interactive::settle_timer::SettleTimer;
use crate::core::actions::draw_fractal::draw_fractal;
use crate::core::actions::draw_fractal::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::draw_fractal::resolution::Resolution;
use crate::core::colour_mapping::grayscale::GrayscaleColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::view_state::{ViewState, ZoomDirection};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassReport {
    pub resolution: Resolution,
    pub duration: Duration,
}

/// Read-only view of the renderer for status displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererSnapshot {
    pub view: ViewState,
    pub interaction: InteractionState,
    pub last_pass: Option<PassReport>,
    pub full_pass_pending: bool,
}

/// Owns the view, the pixel buffer and the deferred full-resolution pass for
/// a single fractal view.
///
/// Interaction redraws immediately at low resolution; once input settles
/// for `settle_delay`, [`poll_deferred`](Self::poll_deferred) runs exactly
/// one full-resolution pass. Everything runs on the caller's thread and every
/// pass completes before the next event is handled.
pub struct InteractiveRenderer<P: FramePresenterPort> {
    config: RendererConfig,
    view: ViewState,
    interaction: InteractionState,
    settle_timer: SettleTimer,
    pixel_buffer: PixelBuffer,
    julia: JuliaAlgorithm,
    mandelbrot: MandelbrotAlgorithm,
    colour_map: GrayscaleColourMap,
    presenter: P,
    last_pass: Option<PassReport>,
}

impl<P: FramePresenterPort> InteractiveRenderer<P> {
    pub fn new(
        width: u32,
        height: u32,
        config: RendererConfig,
        presenter: P,
    ) -> Result<Self, RendererError> {
        let surface = SurfaceSize::new(width, height)?;

        if config.low_res_step == 0 {
            return Err(RendererError::ZeroLowResStep);
        }

        if !config.zoom_factor.is_finite() || config.zoom_factor <= 1.0 {
            return Err(RendererError::InvalidZoomFactor(config.zoom_factor));
        }

        let view = ViewState::default();
        let julia = JuliaAlgorithm::new(view.parameter, config.max_iterations)?;
        let mandelbrot = MandelbrotAlgorithm::new(config.max_iterations)?;
        let colour_map = GrayscaleColourMap::new(julia.max_iterations());

        Ok(Self {
            config,
            view,
            interaction: InteractionState::default(),
            settle_timer: SettleTimer::new(),
            pixel_buffer: PixelBuffer::new(surface),
            julia,
            mandelbrot,
            colour_map,
            presenter,
            last_pass: None,
        })
    }

    #[must_use]
    fn surface(&self) -> SurfaceSize {
        self.pixel_buffer.surface()
    }

    #[must_use]
    pub fn snapshot(&self) -> RendererSnapshot {
        RendererSnapshot {
            view: self.view,
            interaction: self.interaction,
            last_pass: self.last_pass,
            full_pass_pending: self.settle_timer.is_pending(),
        }
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// When the pending full-resolution pass is due, if one is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.settle_timer.deadline()
    }

    /// Runs one pass over the whole surface and presents it. Returns `true`
    /// if a frame was presented.
    pub fn draw_fractal(&mut self, resolution: Resolution) -> bool {
        let step = resolution.step(self.config.low_res_step);
        let start = Instant::now();

        let result = match self.view.fractal_kind {
            FractalKind::Julia => {
                let algorithm = self.julia.with_parameter(self.view.parameter);
                draw_fractal::draw_fractal(
                    &mut self.pixel_buffer,
                    &self.view,
                    &algorithm,
                    &self.colour_map,
                    step,
                )
            }
            FractalKind::Mandelbrot => draw_fractal::draw_fractal(
                &mut self.pixel_buffer,
                &self.view,
                &self.mandelbrot,
                &self.colour_map,
                step,
            ),
        };

        if let Err(err) = result {
            error!(%err, ?resolution, "draw pass failed");
            return false;
        }

        let duration = start.elapsed();
        debug!(
            ?resolution,
            ?duration,
            fractal = self.view.fractal_kind.display_name(),
            "draw pass complete"
        );

        self.presenter.present(&self.pixel_buffer, resolution);
        self.last_pass = Some(PassReport {
            resolution,
            duration,
        });

        true
    }

    /// Marks the view as being manipulated and issues a preview pass. A
    /// deferred full pass armed by an earlier interaction is dropped.
    pub fn start_interaction(&mut self) -> bool {
        self.interaction.is_interacting = true;

        if self.settle_timer.cancel() {
            debug!("deferred full-resolution pass invalidated");
        }

        self.draw_fractal(Resolution::Low)
    }

    /// Arms the deferred full pass, replacing any pending one.
    pub fn end_interaction(&mut self, now: Instant) {
        self.interaction.is_interacting = false;

        let replaced = self.settle_timer.schedule(now, self.config.settle_delay);
        debug!(
            replaced,
            delay = ?self.config.settle_delay,
            "deferred full-resolution pass scheduled"
        );
    }

    /// Runs the deferred full pass if its deadline has passed.
    pub fn poll_deferred(&mut self, now: Instant) -> bool {
        if !self.settle_timer.fire_if_due(now) {
            return false;
        }

        debug!("settle delay elapsed");
        self.draw_fractal(Resolution::Full)
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> EventResponse {
        match event {
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            } => {
                self.interaction.begin_drag(position);
                EventResponse::redrawn(self.start_interaction())
            }
            InputEvent::PointerDown { .. } => EventResponse::IGNORED,
            InputEvent::PointerMove { position, buttons } => self.pointer_moved(position, buttons),
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.interaction.end_drag();
                self.end_interaction(now);
                EventResponse::IGNORED
            }
            InputEvent::Wheel {
                position,
                direction,
            } => self.wheel(position, direction, now),
            InputEvent::ContextMenu => EventResponse {
                suppress_default: true,
                presented: false,
            },
            InputEvent::FractalKindChanged(fractal_kind) => {
                EventResponse::redrawn(self.select_fractal(fractal_kind))
            }
            InputEvent::ResetView => EventResponse::redrawn(self.reset_view()),
        }
    }

    /// Switches fractal, restores its default view and redraws at full
    /// resolution straight away.
    pub fn select_fractal(&mut self, fractal_kind: FractalKind) -> bool {
        self.view.switch_to(fractal_kind);
        info!(fractal = fractal_kind.display_name(), "fractal selected");

        self.draw_fractal(Resolution::Full)
    }

    /// Restores zoom and center for the current fractal, keeping the Julia
    /// parameter.
    pub fn reset_view(&mut self) -> bool {
        self.view.reset_view();

        let (span_real, span_imag) = self.view.visible_span(self.surface());
        info!(span_real, span_imag, "view reset");

        self.draw_fractal(Resolution::Full)
    }

    fn pointer_moved(&mut self, position: Point, buttons: PointerButtons) -> EventResponse {
        let surface = self.surface();

        if self.interaction.is_dragging {
            let (dx, dy) = self.interaction.drag_to(position);
            self.view.pan(dx, dy, surface);

            return EventResponse::redrawn(self.start_interaction());
        }

        if buttons.secondary_only() && self.view.fractal_kind.uses_parameter() {
            self.view.parameter = pixel_to_complex_coords(position, &self.view, surface);

            return EventResponse::redrawn(self.start_interaction());
        }

        EventResponse::IGNORED
    }

    fn wheel(&mut self, position: Point, direction: WheelDirection, now: Instant) -> EventResponse {
        let surface = self.surface();
        let anchor = pixel_to_complex_coords(position, &self.view, surface);
        let zoom_direction = match direction {
            WheelDirection::Away => ZoomDirection::In,
            WheelDirection::Toward => ZoomDirection::Out,
        };

        self.view
            .zoom_about(anchor, zoom_direction, self.config.zoom_factor);

        let (span_real, span_imag) = self.view.visible_span(surface);
        let anchor_pixel = complex_to_pixel_coords(anchor, &self.view, surface);
        debug!(
            zoom = self.view.zoom(),
            span_real,
            span_imag,
            anchor_x = anchor_pixel.x,
            anchor_y = anchor_pixel.y,
            "wheel zoom"
        );

        let presented = self.start_interaction();
        self.end_interaction(now);

        EventResponse {
            suppress_default: true,
            presented,
        }
    }
}
