use crate::controllers::interactive::ports::FramePresenterPort;
use egui::Context as EguiContext;

/// A frame presenter that can also draw the egui overlay and push the
/// result to the window.
pub trait GuiPresenterPort: FramePresenterPort {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
}
