use super::behaviours::RunBehaviours;
use crate::domain::{Degradation, RunStats, TimingRun};
use anyhow::Context;
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::Write;

const BANNER: &str = include_str!("assets/banner.txt");

pub(super) struct RunLog<'a, W: Write> {
    out: &'a mut W,
    behaviours: &'a RunBehaviours,
    lines: Vec<String>,
    stats: RunStats,
}

impl<'a, W: Write> RunLog<'a, W> {
    pub(super) fn new(out: &'a mut W, behaviours: &'a RunBehaviours) -> Self {
        if behaviours.plain_stdout {
            colored::control::set_override(false);
        }

        RunLog {
            out,
            behaviours,
            lines: vec![],
            stats: RunStats::default(),
        }
    }

    fn record(&mut self, line: String) {
        if self.behaviours.output_path.is_some() {
            self.lines.push(line);
        }
    }

    pub fn banner(&mut self) {
        let _ = writeln!(self.out, "{}", BANNER.green().bold());
        self.record(BANNER.to_string());
    }

    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.out, "[INFO] {}", message);
        self.record(format!("[INFO] {}", message));
    }

    pub fn empty_line(&mut self) {
        let _ = writeln!(self.out);
        self.record("".to_string());
    }

    pub fn passed(&mut self, test_number: u16) {
        let msg = format!("test {} passed", test_number);
        let _ = writeln!(self.out, "{}", msg.green());
        self.record(msg);

        self.stats.record_pass();
    }

    pub fn degradation(&mut self, test_number: u16, run: &TimingRun, degradation: &Degradation) {
        let msg = format!(
            "test {} failed: sample {} ({:?}) is at or below the allowed floor ({:?} = 25% of the baseline {:?})",
            test_number,
            degradation.sample_number,
            degradation.sample,
            degradation.floor,
            degradation.baseline,
        );
        let _ = writeln!(self.out, "{}", msg.red());
        self.record(msg);

        let evidence = format!("timings: {:?}", run.timings());
        let _ = writeln!(self.out, "{}", evidence.red());
        self.record(evidence);

        self.stats.record_failure();
    }

    pub fn write_output(&mut self) -> anyhow::Result<()> {
        let stats = format!(
            r#"
===========================

  Stats

  #tests passed    : {}
  #tests failed    : {}

==========================="#,
            self.stats.num_passed, self.stats.num_failed
        );

        let _ = writeln!(self.out, "{}", stats.green());

        let Some(output_path) = &self.behaviours.output_path else {
            return Ok(());
        };

        self.lines.push(stats);

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(output_path)
            .context("couldn't open a handle to the output file")?;

        file.write_all(self.lines.join("\n").as_bytes())
            .context("couldn't write output to file")?;

        Ok(())
    }
}
