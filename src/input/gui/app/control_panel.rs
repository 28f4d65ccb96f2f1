use crate::controllers::interactive::events::InputEvent;
use crate::controllers::interactive::RendererSnapshot;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Draws the overlay panel and returns the input it produced this frame.
pub fn show_control_panel(ctx: &egui::Context, snapshot: &RendererSnapshot) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut selected = snapshot.view.fractal_kind;

    egui::Window::new("Fractal")
        .default_pos([10.0, 10.0])
        .default_size([240.0, 200.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Fractal:");
                egui::ComboBox::from_id_source("fractal_kind")
                    .selected_text(selected.display_name())
                    .show_ui(ui, |ui| {
                        for &kind in FractalKind::ALL {
                            ui.selectable_value(&mut selected, kind, kind.display_name());
                        }
                    });
            });

            ui.separator();
            ui.label(format!(
                "Center: {:.6} {:+.6}i",
                snapshot.view.center.real, snapshot.view.center.imag
            ));
            ui.label(format!("Zoom: {:.4}", snapshot.view.zoom()));

            if snapshot.view.fractal_kind.uses_parameter() {
                ui.label(format!(
                    "c = {:.4} {:+.4}i",
                    snapshot.view.parameter.real, snapshot.view.parameter.imag
                ));
                ui.small("Hold the right button and move to change c");
            }

            if ui.button("Reset view").clicked() {
                events.push(InputEvent::ResetView);
            }

            ui.separator();
            ui.label(if snapshot.interaction.is_dragging {
                "Dragging"
            } else if snapshot.interaction.is_interacting {
                "Interacting"
            } else if snapshot.full_pass_pending {
                "Settling"
            } else {
                "Idle"
            });
            if let Some(pass) = snapshot.last_pass {
                ui.label(format!(
                    "Last pass: {:?} in {} ms",
                    pass.resolution,
                    pass.duration.as_millis()
                ));
            }
        });

    if selected != snapshot.view.fractal_kind {
        events.insert(0, InputEvent::FractalKindChanged(selected));
    }

    events
}
