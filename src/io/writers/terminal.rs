use crate::engine::IndexOutcome;
use crate::indices::{IndexDetail, IndexKind, IndexResult};
use crate::io::output::{format_optional, format_value, AssessmentReport, OutputWriter};
use crate::standards::StandardsRegistry;
use crate::units::conversion_info;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn risk_color(risk_level: u8) -> Color {
    match risk_level {
        0..=2 => Color::Green,
        3..=4 => Color::Yellow,
        _ => Color::Red,
    }
}

fn result_cell(result: &IndexResult) -> Cell {
    Cell::new(format!(
        "{} {}",
        format_value(result),
        result.classification.label
    ))
    .fg(risk_color(result.classification.risk_level))
}

fn new_table(header: Vec<String>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.print_header(report)?;
        self.print_stations(report)?;
        self.print_summary(report)?;
        for station in &report.details {
            writeln!(self.writer, "{}", station.station.as_str().bold())?;
            for detail in &station.details {
                self.print_detail(detail)?;
            }
        }
        Ok(())
    }

    fn write_standards(&mut self, registry: &StandardsRegistry) -> anyhow::Result<()> {
        let mut table = new_table(
            ["Symbol", "Name", "Category", "Ideal", "Permissible", "MAC"]
                .map(String::from)
                .to_vec(),
        );
        for entry in registry.entries() {
            table.add_row(vec![
                Cell::new(&entry.symbol),
                Cell::new(&entry.name),
                Cell::new(entry.category),
                Cell::new(entry.ideal_value).set_alignment(CellAlignment::Right),
                Cell::new(entry.permissible_limit).set_alignment(CellAlignment::Right),
                Cell::new(entry.max_allowable_concentration).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{}", "Water quality standards (µg/L)".bold().cyan())?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        write!(self.writer, "{}", conversion_info())?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let divider = "═══════════════════════════════════════════";
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", divider.cyan())?;
        writeln!(self.writer, "{}", "       WATER QUALITY INDEX REPORT".bold().cyan())?;
        writeln!(self.writer, "{}", divider.cyan())?;
        writeln!(
            self.writer,
            "Stations: {}   Input unit: {}   Generated: {}",
            report.summary.station_count,
            report.unit,
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_stations(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let header = std::iter::once("Station".to_string())
            .chain(IndexKind::ALL.iter().map(|kind| kind.as_str().to_string()))
            .collect();
        let mut table = new_table(header);

        for assessment in &report.assessments {
            let mut row = vec![Cell::new(&assessment.station)];
            row.extend(IndexKind::ALL.iter().map(|&kind| match assessment.get(kind) {
                Some(IndexOutcome::Computed(result)) => result_cell(result),
                Some(IndexOutcome::Failed { .. }) => Cell::new("error").fg(Color::Red),
                None => Cell::new("-"),
            }));
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;

        for assessment in &report.assessments {
            for outcome in &assessment.indices {
                if let IndexOutcome::Failed { index, error } = outcome {
                    writeln!(
                        self.writer,
                        "{} {} {}: {}",
                        "✗".red(),
                        assessment.station,
                        index.as_str(),
                        error
                    )?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Summary".bold())?;
        let mut table = new_table(
            ["Index", "Stations", "Min", "Mean", "Max", "Worst station"]
                .map(String::from)
                .to_vec(),
        );
        for stats in &report.summary.indices {
            table.add_row(vec![
                Cell::new(stats.index.as_str()),
                Cell::new(stats.count).set_alignment(CellAlignment::Right),
                Cell::new(format_optional(stats.min)).set_alignment(CellAlignment::Right),
                Cell::new(format_optional(stats.mean)).set_alignment(CellAlignment::Right),
                Cell::new(format_optional(stats.max)).set_alignment(CellAlignment::Right),
                Cell::new(stats.worst_station.as_deref().unwrap_or("-")),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_detail(&mut self, detail: &IndexDetail) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {} {}",
            detail.index.as_str().bold(),
            detail.formula.as_str().dimmed()
        )?;
        for row in &detail.rows {
            writeln!(
                self.writer,
                "    {:<5} C={:<10.3} contribution={:.4}",
                row.symbol, row.concentration, row.contribution
            )?;
        }
        writeln!(
            self.writer,
            "    = {:.4} ({})",
            detail.result.value, detail.result.classification.label
        )?;
        Ok(())
    }
}
