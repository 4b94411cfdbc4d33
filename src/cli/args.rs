use crate::indices::IndexKind;
use crate::io::output::OutputFormat;
use crate::units::Unit;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wqindex")]
#[command(about = "Heavy-metal and water quality index calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate every index for each station in a CSV or spreadsheet table
    Calculate {
        /// Sample table (.csv, .xlsx, .xls or .ods; one row per station)
        input: PathBuf,

        /// Unit of the concentrations in the table (mg/L, ppm, µg/L, ug/L, ppb)
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .wqindex.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Worker threads (0 = all cores)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Include formulas and per-parameter rows
        #[arg(long)]
        detailed: bool,
    },

    /// Classify a single index value
    Classify {
        /// Index name (hpi, mi, wqi, hei, cdeg, pig)
        index: IndexKind,

        /// Index value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Configuration file with custom classification ranges
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the loaded standards table
    Standards {
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a blank sample table
    Template {
        /// Output file, CSV or .xlsx (defaults to CSV on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Add a row describing each column and its unit
        #[arg(long)]
        with_info: bool,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_calculate_command() {
        let cli = Cli::try_parse_from([
            "wqindex",
            "calculate",
            "samples.csv",
            "--unit",
            "mg/L",
            "--format",
            "json",
            "--jobs",
            "2",
            "--detailed",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Calculate {
                input,
                unit,
                format,
                jobs,
                detailed,
                output,
                config,
            } => {
                assert_eq!(input, PathBuf::from("samples.csv"));
                assert_eq!(unit, Some(Unit::MgPerL));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(jobs, Some(2));
                assert!(detailed);
                assert!(output.is_none());
                assert!(config.is_none());
            }
            _ => panic!("Expected Calculate command"),
        }
    }

    #[test]
    fn test_cli_parsing_classify_command() {
        let cli = Cli::try_parse_from(["wqindex", "classify", "HPI", "42.5"]).unwrap();
        match cli.command {
            Commands::Classify { index, value, .. } => {
                assert_eq!(index, IndexKind::Hpi);
                assert_eq!(value, 42.5);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["wqindex", "calculate", "x.csv", "--unit", "grains"]).is_err());
    }

    #[test]
    fn test_cli_parsing_template_command() {
        let cli =
            Cli::try_parse_from(["wqindex", "template", "-o", "blank.xlsx", "--with-info"]).unwrap();
        match cli.command {
            Commands::Template {
                output, with_info, ..
            } => {
                assert_eq!(output, Some(PathBuf::from("blank.xlsx")));
                assert!(with_info);
            }
            _ => panic!("Expected Template command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::try_parse_from(["wqindex", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
