use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let presenter_factory = fractal_viewer::PixelsPresenterFactory::new();
    let command = fractal_viewer::RunGuiCommand::new(presenter_factory);

    if let Err(err) = command.execute() {
        error!(%err, "fractal viewer exited with an error");
        std::process::exit(1);
    }
}
