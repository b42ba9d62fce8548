use anyhow::Result;
use gallery_term::application::cli;
use gallery_term::application::logging;
use gallery_term::application::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if !cli::parse().await? {
        return Ok(());
    }

    let _guard = logging::init()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting gallery");

    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let result = ui::start().await;
    if let Err(err) = &result {
        tracing::error!(error = ?err, "gallery exited with an error");
    }

    return result;
}
