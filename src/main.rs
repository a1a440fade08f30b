mod args;
mod check;
mod config;
mod domain;
mod report;

use anyhow::Context;
use args::Args;
use args::{ConfigCommand, PerfgateCommand, ReportCommand};
use check::{CheckOutcome, RunBehaviours, run_checks};
use clap::Parser;
use config::get_config;
use report::generate_report;

use crate::domain::ReportConfig;

const SAMPLE_CONFIG: &str = include_str!("./assets/sample-config.toml");

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        print!("DEBUG INFO\n{args}");
        return Ok(());
    }

    match args.command {
        PerfgateCommand::Run {
            config_file,
            iterations,
            output_to_file,
            output_path,
            plain_stdout,
        } => {
            let config = get_config(config_file)?;

            let output_path_to_use = if output_to_file {
                Some(output_path)
            } else {
                None
            };

            let behaviours = RunBehaviours {
                output_path: output_path_to_use,
                iterations_override: iterations,
                plain_stdout,
            };

            let mut stdout = std::io::stdout();
            let outcome = run_checks(&mut stdout, config, &behaviours)?;

            if let CheckOutcome::Degraded = outcome {
                std::process::exit(1);
            }
        }
        PerfgateCommand::Config { config_command } => match config_command {
            ConfigCommand::Validate { config_file } => {
                get_config(config_file)?;
                println!("config looks good ✅");
            }
            ConfigCommand::Sample => print!("{SAMPLE_CONFIG}"),
        },
        PerfgateCommand::Report { report_command } => match report_command {
            ReportCommand::Generate {
                output_path,
                open_report,
                num_runs,
                title,
                template_path,
            } => {
                let custom_template = if let Some(ref template_path) = template_path {
                    Some(std::fs::read_to_string(template_path).with_context(|| {
                        format!("failed to read HTML template from {:?}", template_path)
                    })?)
                } else {
                    None
                };

                let config = ReportConfig {
                    output_path,
                    custom_template,
                    title,
                    num_runs,
                    open_report,
                };
                generate_report(&config)?;
            }
        },
    }

    Ok(())
}
