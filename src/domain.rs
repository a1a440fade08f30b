use anyhow::Context;
use std::path::PathBuf;

/// A sample at or below this fraction of the baseline fails the run.
pub const DEGRADATION_RATIO: f64 = 0.25;

/// The timings printed by one invocation of the program under test, in
/// order. The first value is the baseline; the rest are samples.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRun {
    timings: Vec<f64>,
}

impl TimingRun {
    pub fn from_stdout(stdout: &str) -> anyhow::Result<Self> {
        let mut timings = Vec::new();
        for (i, line) in stdout.lines().enumerate() {
            let trimmed = line.trim();
            let timing = trimmed.parse::<f64>().with_context(|| {
                format!(
                    "line {} of the program's output is not a number: \"{}\"",
                    i + 1,
                    trimmed
                )
            })?;
            timings.push(timing);
        }

        if timings.is_empty() {
            anyhow::bail!(
                "the program printed no timings, so there's no baseline to compare against"
            );
        }

        Ok(Self { timings })
    }

    pub fn timings(&self) -> &[f64] {
        &self.timings
    }

    pub fn degradation(&self) -> Option<Degradation> {
        let baseline = *self.timings.first()?;
        let floor = baseline * DEGRADATION_RATIO;

        for (i, &sample) in self.timings.iter().enumerate().skip(1) {
            if sample <= floor {
                return Some(Degradation {
                    sample_number: i,
                    sample,
                    baseline,
                    floor,
                });
            }
        }

        None
    }
}

/// Evidence for a failed run: the first sample that dropped to or below the
/// allowed floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Degradation {
    pub sample_number: usize,
    pub sample: f64,
    pub baseline: f64,
    pub floor: f64,
}

#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub num_passed: u16,
    pub num_failed: u16,
}

impl RunStats {
    pub fn record_pass(&mut self) {
        self.num_passed += 1;
    }

    pub fn record_failure(&mut self) {
        self.num_failed += 1;
    }
}

#[derive(Debug)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub custom_template: Option<String>,
    pub title: String,
    pub num_runs: u8,
    pub open_report: bool,
}
