use anyhow::Context;
use boxkit::{init_logging, render_output, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

fn load_config() -> anyhow::Result<Config> {
    if let Some(arg) = std::env::args().nth(1) {
        let path = PathBuf::from(arg);
        return Config::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()));
    }

    match Config::default_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display())),
        _ => Ok(Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "boxkit starting");

    let config = load_config()?;
    let design = config.resolved_design();
    let drawing = design
        .render()
        .with_context(|| format!("rendering {}", design.name()))?;

    let bounds = drawing.bounds();
    info!(
        design = design.name(),
        paths = drawing.paths.len(),
        parts = drawing.parts.len(),
        cut_length = drawing.total_cut_length(),
        width = bounds.map(|b| b.width()),
        height = bounds.map(|b| b.height()),
        "render complete"
    );

    let text = render_output(&drawing, &config.output)?;
    match &config.output.file {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote cut paths");
        }
        None => println!("{text}"),
    }
    Ok(())
}
