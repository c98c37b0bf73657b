use clap::Parser;
use store_credit::batch::{self, BatchOutcome};
use store_credit::error::CreditError;
use store_credit::template::{self, InitOutcome};
use store_credit::{application, assess, cli, logging, report, validate};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, CreditError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = application::load_application(&cmd.files)?;
            let credit_report = assess::assess(&loaded)?;

            if credit_report.has_blocking() {
                for finding in credit_report.findings.iter().filter(|f| f.blocking) {
                    eprintln!("[BLOCKING] {}: {}", finding.id, finding.body);
                }
                eprintln!("score: application has blocking findings; not scored");
                return Ok(exit_code::BLOCKING);
            }

            let rendered = report::render(&credit_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if credit_report.findings.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let loaded = application::load_application(&cmd.files)?;
            let findings = validate::validate_application(&loaded);

            if findings.is_empty() {
                println!("validate: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Init(cmd) => {
            match template::write_template(&cmd.path, cmd.dry_run, cmd.no_overwrite)? {
                InitOutcome::Written => println!("init: wrote {}", cmd.path.display()),
                InitOutcome::Overwritten => println!("init: overwrote {}", cmd.path.display()),
                InitOutcome::DryRun => {
                    println!("init: would write {}", cmd.path.display());
                    print!("{}", template::TEMPLATE);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let entries = batch::score_directory(&cmd.dir)?;
            match cmd.format {
                cli::ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                cli::ReportFormat::Md => {
                    if entries.is_empty() {
                        println!("batch: no application files in {}", cmd.dir.display());
                    } else {
                        print!("{}", batch::to_lines(&entries));
                    }
                }
            }

            let blocked = entries.iter().any(|entry| {
                matches!(
                    entry.outcome,
                    BatchOutcome::Blocked { .. } | BatchOutcome::Failed { .. }
                )
            });
            let warned = entries.iter().any(|entry| {
                matches!(entry.outcome, BatchOutcome::Scored { warnings, .. } if warnings > 0)
            });
            if blocked {
                Ok(exit_code::BLOCKING)
            } else if warned {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init_cli_logger(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
