use anyhow::{Context, Result};
use clap::Parser;

use tern::cli::{CliArgs, OutputFormat};
use tern::config::EditorConfig;
use tern::keymap::{load_default_keymap, Keymap};
use tern::model::{AppModel, Document};
use tern::runtime::{parse_key_script, App};

fn main() -> Result<()> {
    tern::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = EditorConfig::load();
    let (width, height) = startup.viewport;
    if let Some(width) = width {
        config.viewport_width = width;
    }
    if let Some(height) = height {
        config.viewport_height = height;
    }

    let document = match &startup.path {
        Some(path) if path.exists() => Document::from_file(path.clone())
            .map_err(|e| anyhow::anyhow!(e.user_message(&path.display().to_string())))?,
        Some(path) => Document::new_with_path(path.clone()),
        None => Document::new(),
    };

    let mut model = AppModel::new(document, config);
    if let Some((line, column)) = startup.initial_position {
        model.document_mut().move_to(line, column);
    }

    let keys = parse_key_script(&startup.keys)
        .map_err(anyhow::Error::msg)
        .context("Invalid --keys script")?;

    let mut app = App::new(model, Keymap::with_bindings(load_default_keymap()));
    app.run_keys(keys);

    let frame = app.frame();
    match startup.output {
        OutputFormat::Text => print!("{}", frame.to_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&frame).context("Failed to encode frame")?;
            println!("{}", json);
        }
    }

    Ok(())
}
