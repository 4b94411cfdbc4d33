use crate::engine::{IndexOutcome, SampleAssessment};
use crate::indices::{IndexDetail, IndexKind};
use crate::io::output::{format_optional, format_value, AssessmentReport, OutputWriter};
use crate::standards::StandardsRegistry;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_stations(&report.assessments)?;
        self.write_summary(report)?;
        if !report.details.is_empty() {
            self.write_details(report)?;
        }
        Ok(())
    }

    fn write_standards(&mut self, registry: &StandardsRegistry) -> anyhow::Result<()> {
        writeln!(self.writer, "# Water Quality Standards")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "All limits in µg/L (ppb).")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Symbol | Name | Category | Ideal (Ii) | Permissible (Si) | MAC |"
        )?;
        writeln!(self.writer, "|---|---|---|---:|---:|---:|")?;
        for entry in registry.entries() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                entry.symbol,
                entry.name,
                entry.category,
                entry.ideal_value,
                entry.permissible_limit,
                entry.max_allowable_concentration
            )?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Water Quality Index Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Input unit: {}", report.unit)?;
        writeln!(self.writer, "Stations: {}", report.summary.station_count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_stations(&mut self, assessments: &[SampleAssessment]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Stations")?;
        writeln!(self.writer)?;

        let columns: Vec<&str> = IndexKind::ALL.iter().map(IndexKind::as_str).collect();
        writeln!(self.writer, "| Station | {} |", columns.join(" | "))?;
        writeln!(self.writer, "|---|{}", "---|".repeat(columns.len()))?;

        for assessment in assessments {
            let cells: Vec<String> = IndexKind::ALL
                .iter()
                .map(|&kind| match assessment.get(kind) {
                    Some(IndexOutcome::Computed(result)) => format!(
                        "{} ({})",
                        format_value(result),
                        result.classification.label
                    ),
                    Some(IndexOutcome::Failed { .. }) => "error".to_string(),
                    None => "-".to_string(),
                })
                .collect();
            writeln!(
                self.writer,
                "| {} | {} |",
                assessment.station,
                cells.join(" | ")
            )?;
        }
        writeln!(self.writer)?;

        let failures: Vec<(&str, &str)> = assessments
            .iter()
            .flat_map(|assessment| {
                assessment.indices.iter().filter_map(move |outcome| match outcome {
                    IndexOutcome::Failed { error, .. } => {
                        Some((assessment.station.as_str(), error.as_str()))
                    }
                    IndexOutcome::Computed(_) => None,
                })
            })
            .collect();
        if !failures.is_empty() {
            writeln!(self.writer, "### Errors")?;
            writeln!(self.writer)?;
            for (station, error) in failures {
                writeln!(self.writer, "- **{}**: {}", station, error)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Index | Stations | Min | Mean | Max | Worst station | Distribution |"
        )?;
        writeln!(self.writer, "|---|---:|---:|---:|---:|---|---|")?;
        for stats in &report.summary.indices {
            let distribution: Vec<String> = stats
                .distribution
                .iter()
                .map(|(label, count)| format!("{}: {}", label, count))
                .collect();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                stats.index,
                stats.count,
                format_optional(stats.min),
                format_optional(stats.mean),
                format_optional(stats.max),
                stats.worst_station.as_deref().unwrap_or("-"),
                distribution.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_details(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Calculation Details")?;
        writeln!(self.writer)?;
        for station in &report.details {
            writeln!(self.writer, "### {}", station.station)?;
            writeln!(self.writer)?;
            for detail in &station.details {
                self.write_detail(detail)?;
            }
        }
        Ok(())
    }

    fn write_detail(&mut self, detail: &IndexDetail) -> anyhow::Result<()> {
        writeln!(self.writer, "#### {} ({})", detail.name, detail.index)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "`{}`", detail.formula)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Parameter | Concentration | Ii | Si | MAC | Weight | Contribution |"
        )?;
        writeln!(self.writer, "|---|---:|---:|---:|---:|---:|---:|")?;
        for row in &detail.rows {
            writeln!(
                self.writer,
                "| {} | {:.3} | {} | {} | {} | {} | {:.4} |",
                row.symbol,
                row.concentration,
                format_optional(row.ideal_value),
                format_optional(row.permissible_limit),
                format_optional(row.max_allowable_concentration),
                row.weight.map_or_else(|| "-".to_string(), |w| format!("{:.6}", w)),
                row.contribution
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Result: **{:.4}** ({})",
            detail.result.value, detail.result.classification.label
        )?;
        for exclusion in &detail.result.excluded {
            writeln!(
                self.writer,
                "- excluded {}: {}",
                exclusion.symbol, exclusion.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
