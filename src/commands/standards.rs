use super::{load_settings, with_writer};
use crate::io::output::OutputFormat;
use anyhow::Result;
use std::path::Path;

/// Print the registry built from defaults and configured overrides
pub fn list_standards(format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let registry = load_settings(config)?.build_registry()?;
    with_writer(format, None, |writer| writer.write_standards(&registry))
}
