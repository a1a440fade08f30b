mod behaviours;
mod execute;
mod log;

pub use behaviours::RunBehaviours;

use crate::config::Config;
use crate::domain::TimingRun;
use anyhow::Context;
use chrono::Utc;
use execute::{compile_program, invoke_program, remove_artifact};
use log::RunLog;
use std::io::Write;

#[derive(Debug)]
pub enum CheckOutcome {
    Passed,
    Degraded,
}

pub fn run_checks<W>(
    out: &mut W,
    config: Config,
    behaviours: &RunBehaviours,
) -> anyhow::Result<CheckOutcome>
where
    W: Write,
{
    let mut l = RunLog::new(out, behaviours);

    l.banner();

    let start = Utc::now();
    l.info(&format!("The time right now is {}", start));

    let iterations = behaviours.iterations_override.unwrap_or(config.iterations);
    l.info(&format!(
        "I'll invoke \"{}\" up to {} times",
        config.program.to_string_lossy(),
        iterations
    ));

    if let Some(compile) = &config.compile {
        l.info(&format!("Compiling the program first: {}", compile.command));
        compile_program(compile).context("couldn't compile the program under test")?;
    }

    l.empty_line();

    let mut outcome = CheckOutcome::Passed;

    for i in 1..=iterations {
        let stdout = invoke_program(&config.program)
            .with_context(|| format!("test {i}: couldn't run the program under test"))?;
        let run = TimingRun::from_stdout(&stdout)
            .with_context(|| format!("test {i}: couldn't make sense of the program's output"))?;

        match run.degradation() {
            Some(degradation) => {
                l.degradation(i, &run, &degradation);
                outcome = CheckOutcome::Degraded;
                break;
            }
            None => l.passed(i),
        }
    }

    // the artifact is only cleaned up after a fully passing run; a degraded
    // run leaves it in place for inspection
    if let (CheckOutcome::Passed, Some(compile)) = (&outcome, &config.compile)
        && !compile.keep_artifact
    {
        remove_artifact(&compile.artifact)?;
        l.empty_line();
        l.info(&format!(
            "Deleted the compiled artifact at \"{}\"",
            compile.artifact.to_string_lossy()
        ));
    }

    let end_ts = Utc::now();
    let num_seconds = (end_ts - start).num_seconds();

    l.empty_line();
    l.info(&format!(
        "This run ended at {}; took {} seconds",
        end_ts, num_seconds
    ));

    l.write_output().context("couldn't write output to file")?;

    Ok(outcome)
}
