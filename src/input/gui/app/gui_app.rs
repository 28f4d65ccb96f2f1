use crate::controllers::interactive::InteractiveRenderer;
use crate::controllers::interactive::events::InputEvent;
use crate::core::actions::draw_fractal::resolution::Resolution;
use crate::input::gui::app::control_panel::show_control_panel;
use crate::input::gui::app::pointer_input::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::{Duration, Instant};
use tracing::{debug, error};
use winit::{
    error::EventLoopError,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    renderer: InteractiveRenderer<T>,
    pointer: PointerInput,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    redraw_pending: bool,
    ui_repaint_at: Option<Instant>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<()>, renderer: InteractiveRenderer<T>) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            renderer,
            pointer: PointerInput::default(),
            egui_ctx,
            egui_state,
            redraw_pending: true,
            ui_repaint_at: None,
        }
    }

    /// Runs the event loop until the window is closed. Input, draw passes
    /// and the deferred full-resolution pass all run on this thread.
    pub fn run(mut self, event_loop: EventLoop<()>, window: &'static Window) -> Result<(), EventLoopError> {
        self.renderer.draw_fractal(Resolution::Full);

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    self.redraw_pending = false;

                    if let Err(err) = self.render(window) {
                        error!(%err, "failed to present frame");
                        elwt.exit();
                    }
                }
                _ => self.handle_window_event(window, event),
            },
            Event::AboutToWait => {
                let now = Instant::now();

                if self.renderer.poll_deferred(now) {
                    self.redraw_pending = true;
                }

                if self.ui_repaint_at.is_some_and(|at| now >= at) {
                    self.ui_repaint_at = None;
                    self.redraw_pending = true;
                }

                if self.redraw_pending {
                    window.request_redraw();
                }

                match next_wake(self.renderer.next_deadline(), self.ui_repaint_at) {
                    Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })
    }

    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let response = self.egui_state.on_window_event(window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        let Some(input) = self.pointer.translate(event) else {
            return;
        };

        // Releases always reach the renderer so a drag never outlives its button.
        let always_forward = matches!(input, InputEvent::PointerUp | InputEvent::PointerLeave);
        if response.consumed && !always_forward {
            return;
        }

        self.dispatch(input);
    }

    fn dispatch(&mut self, input: InputEvent) {
        let response = self.renderer.handle_event(input, Instant::now());

        if response.suppress_default {
            debug!(?input, "default action suppressed");
        }

        if response.presented {
            self.redraw_pending = true;
        }
    }

    fn render(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let raw_input = self.egui_state.take_egui_input(window);
        let snapshot = self.renderer.snapshot();

        let mut panel_events = Vec::new();
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            panel_events = show_control_panel(ctx, &snapshot);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(window, platform_output);

        let repaint_delay = egui_output
            .viewport_output
            .values()
            .map(|viewport| viewport.repaint_delay)
            .min()
            .unwrap_or(Duration::MAX);

        if repaint_delay.is_zero() {
            self.ui_repaint_at = None;
            self.redraw_pending = true;
        } else {
            self.ui_repaint_at = Instant::now().checked_add(repaint_delay);
        }

        let presented = self
            .renderer
            .presenter_mut()
            .render(egui_output, &self.egui_ctx);

        for input in panel_events {
            self.dispatch(input);
        }

        presented
    }
}

/// Earliest of the deferred full pass and the next egui repaint.
fn next_wake(full_pass: Option<Instant>, ui_repaint: Option<Instant>) -> Option<Instant> {
    match (full_pass, ui_repaint) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wakes_for_whichever_deadline_comes_first() {
        let now = Instant::now();
        let soon = now + Duration::from_millis(50);
        let later = now + Duration::from_millis(200);

        assert_eq!(next_wake(Some(later), Some(soon)), Some(soon));
        assert_eq!(next_wake(Some(soon), Some(later)), Some(soon));
    }

    #[test]
    fn delayed_ui_repaint_wakes_an_idle_loop() {
        let soon = Instant::now() + Duration::from_millis(500);

        assert_eq!(next_wake(None, Some(soon)), Some(soon));
        assert_eq!(next_wake(Some(soon), None), Some(soon));
        assert_eq!(next_wake(None, None), None);
    }
}
