pub mod input;
pub mod output;
pub mod template;
pub mod writers;

pub use input::{
    read_samples, read_samples_from_path, read_spreadsheet, validate_columns, InputFormat,
    METADATA_COLUMNS,
};
pub use output::{create_writer, AssessmentReport, OutputFormat, OutputWriter};
pub use template::{write_template, write_template_to_path, TemplateOptions};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
