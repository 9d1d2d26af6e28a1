use anyhow::Context;

fn main() -> anyhow::Result<()> {
    gallery_observability::init();

    let config = gallery_app::AppConfig::from_env();
    tracing::info!(path = %config.inventory_file.display(), "starting gallery run");

    let stdout = std::io::stdout();
    gallery_app::run(&config, &mut stdout.lock()).context("gallery run failed")?;
    Ok(())
}
