use crate::io::output::{AssessmentReport, OutputWriter};
use crate::standards::StandardsRegistry;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_standards(&mut self, registry: &StandardsRegistry) -> anyhow::Result<()> {
        let entries: Vec<_> = registry.entries().collect();
        let json = serde_json::to_string_pretty(&entries)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
