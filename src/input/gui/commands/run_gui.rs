use std::error::Error;
use std::marker::PhantomData;

use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{InteractiveRenderer, RendererConfig};
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

const WINDOW_TITLE: &str = "Fractal Viewer";
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: RendererConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self::with_config(presenter_factory, RendererConfig::default())
    }

    pub fn with_config(presenter_factory: F, config: RendererConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let presenter = self.presenter_factory.build(window)?;
        let renderer = InteractiveRenderer::new(size.width, size.height, self.config, presenter)?;

        info!(
            width = size.width,
            height = size.height,
            max_iterations = self.config.max_iterations,
            "window opened"
        );

        let app = GuiApp::new(window, &event_loop, renderer);
        app.run(event_loop, window)?;

        info!("window closed");
        Ok(())
    }
}
