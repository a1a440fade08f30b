use super::html::render_report;
use super::io::{
    gather_run_data, get_last_run_number, keep_last_n_outputs, update_run_number, write_report,
};
use crate::domain::ReportConfig;
use anyhow::Context;
use chrono::Utc;
use regex::Regex;
use std::fs;
use std::path::PathBuf;

const PERFGATE_DIR: &str = ".perfgate";
const RUNS_DIR: &str = "runs";
const DIST_DIR: &str = "dist";
const RUN_NUMBER_FILE: &str = "last-run.txt";

pub fn generate_report(config: &ReportConfig) -> anyhow::Result<()> {
    let perfgate_dir = PathBuf::from(PERFGATE_DIR);
    let runs_dir = perfgate_dir.join(RUNS_DIR);
    if !runs_dir.exists() {
        fs::create_dir_all(&runs_dir).context("couldn't create runs directory")?;
    }

    let dist_dir = PathBuf::from(DIST_DIR);
    let run_number_file_path = perfgate_dir.join(RUN_NUMBER_FILE);
    let last_run_number =
        get_last_run_number(&run_number_file_path).context("couldn't get last run number")?;
    let run_number = last_run_number + 1;
    let now = Utc::now();
    let date = now.format("%a-%b-%d").to_string().to_lowercase();
    let new_run_file = runs_dir.join(format!("run-{run_number}--{date}.txt"));

    fs::copy(&config.output_path, new_run_file)
        .context("couldn't copy latest run to perfgate's \"runs\" directory")?;

    #[allow(clippy::unwrap_used)]
    let file_regex = Regex::new(r"^run-(\d+)[^\.]*\.txt$").unwrap();

    keep_last_n_outputs(&runs_dir, config.num_runs, &file_regex)?;

    if dist_dir.is_dir() {
        fs::remove_dir_all(&dist_dir).context("couldn't delete the existing \"dist\" dir")?;
    }

    fs::create_dir(&dist_dir).context("couldn't create \"dist\" dir")?;

    update_run_number(run_number, &run_number_file_path).with_context(|| {
        format!(
            "couldn't update run number in {}",
            run_number_file_path.to_string_lossy()
        )
    })?;

    let runs = gather_run_data(&runs_dir, &file_regex).context("couldn't read saved runs")?;
    let page = render_report(
        runs.as_slice(),
        now,
        config.custom_template.as_deref(),
        &config.title,
    )
    .context("couldn't render the report")?;
    write_report(page, &dist_dir).context("couldn't write the report")?;

    if config.open_report {
        let index_path = dist_dir.join("index.html");
        if open::that(index_path).is_err() {
            eprintln!(
                "couldn't open report in your browser, report is available in the \"{DIST_DIR}\" directory"
            );
        }
    } else {
        println!("report is available in the \"{DIST_DIR}\" directory 🚀");
    }

    Ok(())
}
