use anyhow::Result;
use std::process::ExitCode;
use wqindex::cli::{self, Cli, Commands};
use wqindex::commands::{self, classify::print_classification, CalculateConfig};
use wqindex::io::TemplateOptions;

/// Exit status for problems the user can fix in their input or configuration
const EXIT_USER_ERROR: u8 = 2;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calculate {
            input,
            unit,
            format,
            output,
            config,
            jobs,
            detailed,
        } => commands::calculate(CalculateConfig {
            input,
            unit,
            format,
            output,
            config,
            jobs,
            detailed,
        }),
        Commands::Classify {
            index,
            value,
            config,
        } => {
            let class = commands::classify_value(index, value, config.as_deref())?;
            print_classification(index, value, &class);
            Ok(())
        }
        Commands::Standards { format, config } => {
            commands::list_standards(format, config.as_deref())
        }
        Commands::Template {
            output,
            with_info,
            config,
        } => commands::write_template_file(
            output.as_deref(),
            config.as_deref(),
            TemplateOptions { with_info },
        ),
        Commands::Init { force } => commands::init_config(force),
    }
}

/// True when any error in the chain is one the user can fix
fn is_user_fixable(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<wqindex::Error>())
        .any(wqindex::Error::is_user_fixable)
}

fn main() -> ExitCode {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            if is_user_fixable(&error) {
                eprintln!("Check the input table and configuration, then run again.");
                ExitCode::from(EXIT_USER_ERROR)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
