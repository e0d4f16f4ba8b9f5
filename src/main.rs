use clap::Parser;

mod cli;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::models::{CharCategory, CompareReport, ValidateReport};
use services::comparator;
use services::output::{print_invalid, print_one};

/// Exit code for pairs that fail validation, so scripts can tell bad input
/// from usage errors and successful runs.
const EXIT_INVALID_PAIR: i32 = 2;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { first, second } => match comparator::compare(first, second) {
            Ok(ordering) => {
                let report = CompareReport::new(first, second, ordering);
                print_one(cli.json, report, |r| {
                    format!(
                        "=== {} Comparer ===\n\nComparing '{}' and '{}':\n\nResult: {} - {}",
                        r.category.plural_label(),
                        r.first,
                        r.second,
                        r.result,
                        r.verdict
                    )
                })?;
            }
            Err(err) => {
                print_invalid(cli.json, &err.to_string())?;
                std::process::exit(EXIT_INVALID_PAIR);
            }
        },
        Commands::Validate { first, second } => match comparator::validate(first, second) {
            Ok(()) => {
                let report = ValidateReport {
                    first,
                    second,
                    first_category: CharCategory::of(first),
                    second_category: CharCategory::of(second),
                };
                print_one(cli.json, report, |r| {
                    format!(
                        "ok: '{}' and '{}' are both {}s",
                        r.first, r.second, r.first_category
                    )
                })?;
            }
            Err(err) => {
                print_invalid(cli.json, &err.to_string())?;
                std::process::exit(EXIT_INVALID_PAIR);
            }
        },
    }

    Ok(())
}
