//! CLI command implementations for wqindex.
//!
//! Available commands:
//! - **calculate**: Evaluate every index for each station in a sample table
//! - **classify**: Classify a single index value
//! - **standards**: List the loaded standards table
//! - **template**: Write a blank sample table
//! - **init**: Initialize a new `.wqindex.toml`

pub mod calculate;
pub mod classify;
pub mod init;
pub mod standards;
pub mod template;

pub use calculate::{calculate, CalculateConfig};
pub use classify::classify_value;
pub use init::init_config;
pub use standards::list_standards;
pub use template::write_template_file;

use crate::config::{self, WqConfig};
use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Explicit config file, or the nearest `.wqindex.toml`
pub(crate) fn load_settings(path: Option<&Path>) -> Result<WqConfig> {
    match path {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Run `write` against a writer for `format`, on `output` or stdout
pub(crate) fn with_writer<F>(format: OutputFormat, output: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn OutputWriter) -> Result<()>,
{
    match output {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            {
                let mut writer = create_writer(format, &mut out);
                write(writer.as_mut())?;
            }
            out.flush()?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let mut writer = create_writer(format, &mut out);
            write(writer.as_mut())?;
        }
    }
    Ok(())
}
