use super::load_settings;
use crate::io::template::{write_template, write_template_to_path, TemplateOptions};
use anyhow::{Context, Result};
use std::path::Path;

pub fn write_template_file(
    output: Option<&Path>,
    config: Option<&Path>,
    options: TemplateOptions,
) -> Result<()> {
    let registry = load_settings(config)?.build_registry()?;
    match output {
        Some(path) => {
            write_template_to_path(path, &registry, options)
                .with_context(|| format!("Failed to write template {}", path.display()))?;
            println!("Created sample template {}", path.display());
        }
        None => write_template(std::io::stdout().lock(), &registry, options)?,
    }
    Ok(())
}
