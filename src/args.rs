use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// perfgate guards your binaries against timing regressions
#[derive(Parser, Debug)]
pub struct Args {
    #[command(subcommand)]
    pub command: PerfgateCommand,
    /// Output debug information without doing anything
    #[arg(long = "debug", global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum PerfgateCommand {
    /// Run the timing gate
    #[command(name = "run")]
    Run {
        /// Path to perfgate's config file
        #[arg(
            long = "config",
            short = 'c',
            value_name = "PATH",
            default_value = "perfgate.toml"
        )]
        config_file: PathBuf,
        /// Number of times to invoke the program (overrides the value in config)
        #[arg(
            long = "iterations",
            short = 'n',
            value_name = "NUMBER",
            value_parser = clap::value_parser!(u16).range(1..=1000),
            )]
        iterations: Option<u16>,
        /// Whether to write perfgate's log of events to a file
        #[arg(long = "output-to-file", short = 'o')]
        output_to_file: bool,
        /// File to write the run log to
        #[arg(
            long = "output-path",
            value_name = "FILE",
            default_value = "output.txt",
            value_parser = validate_txt_path,
        )]
        output_path: PathBuf,
        /// Whether to output text to stdout without color
        #[arg(long = "plain", short = 'p')]
        plain_stdout: bool,
    },
    /// Interact with perfgate's config
    Config {
        #[command(subcommand)]
        config_command: ConfigCommand,
    },
    /// Generate report from perfgate runs
    Report {
        #[command(subcommand)]
        report_command: ReportCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate perfgate's config
    Validate {
        /// Path to perfgate's config file
        #[arg(
            long = "path",
            short = 'p',
            value_name = "PATH",
            default_value = "perfgate.toml"
        )]
        config_file: PathBuf,
    },
    /// Print out a sample config
    Sample,
}

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// Generate a report
    Generate {
        /// File containing the output of "perfgate run"
        #[arg(
            long = "output-path",
            short = 'p',
            value_name = "PATH",
            default_value = "output.txt"
        )]
        output_path: PathBuf,
        /// Whether to open report in the browser
        #[arg(long = "open", short = 'o')]
        open_report: bool,
        /// Maximum number of runs to keep in the report (allowed range: [1, 100])
        #[arg(
            long = "num-runs",
            short = 'n',
            value_name="NUMBER",
            default_value_t=10,
            value_parser = clap::value_parser!(u8).range(1..=100),
            )]
        num_runs: u8,
        /// Title of the report
        #[arg(long = "title", value_name = "STRING", default_value = "perfgate runs")]
        title: String,
        /// Path to a custom HTML template for the report
        #[arg(long = "template", value_name = "PATH")]
        template_path: Option<PathBuf>,
    },
}

fn validate_txt_path(s: &str) -> Result<PathBuf, String> {
    if s.ends_with(".txt") {
        Ok(PathBuf::from(s))
    } else {
        Err(String::from("file must have a .txt extension"))
    }
}

impl std::fmt::Display for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<(&str, String)> = match &self.command {
            PerfgateCommand::Run {
                config_file,
                iterations,
                output_to_file,
                output_path,
                plain_stdout,
            } => vec![
                ("command", "Run".to_string()),
                ("config file", config_file.to_string_lossy().to_string()),
                (
                    "iterations (override)",
                    iterations.map_or("not set".to_string(), |n| n.to_string()),
                ),
                ("output to file", output_to_file.to_string()),
                ("output file", output_path.to_string_lossy().to_string()),
                ("plain stdout", plain_stdout.to_string()),
            ],
            PerfgateCommand::Config { config_command } => match config_command {
                ConfigCommand::Validate { config_file } => vec![
                    ("command", "Validate config".to_string()),
                    ("config file", config_file.to_string_lossy().to_string()),
                ],
                ConfigCommand::Sample => vec![("command", "Show sample config".to_string())],
            },
            PerfgateCommand::Report { report_command } => match report_command {
                ReportCommand::Generate {
                    output_path,
                    open_report,
                    num_runs,
                    title,
                    template_path,
                } => vec![
                    ("command", "Generate report".to_string()),
                    ("output file", output_path.to_string_lossy().to_string()),
                    ("open report", open_report.to_string()),
                    ("num runs", num_runs.to_string()),
                    ("title", title.to_string()),
                    (
                        "template file",
                        template_path
                            .as_ref()
                            .map_or("not set".to_string(), |p| p.to_string_lossy().to_string()),
                    ),
                ],
            },
        };

        writeln!(f)?;
        for (label, value) in lines {
            writeln!(f, "{label:<25}: {value}")?;
        }

        Ok(())
    }
}
