use crate::config::CompileStep;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

pub(super) fn compile_program(step: &CompileStep) -> anyhow::Result<()> {
    let status = Command::new(step.command.program())
        .args(step.command.args())
        .status()
        .with_context(|| format!("couldn't start the compile command \"{}\"", step.command))?;

    if !status.success() {
        anyhow::bail!("compile command \"{}\" failed with {}", step.command, status);
    }

    Ok(())
}

// the exit status of the program under test is ignored; only its stdout
// matters
pub(super) fn invoke_program(program: &Path) -> anyhow::Result<String> {
    let output = Command::new(program)
        .output()
        .with_context(|| format!("couldn't invoke \"{}\"", program.to_string_lossy()))?;

    String::from_utf8(output.stdout).context("the program printed output that is not valid UTF-8")
}

pub(super) fn remove_artifact(artifact: &Path) -> anyhow::Result<()> {
    std::fs::remove_file(artifact).with_context(|| {
        format!(
            "couldn't delete the compiled artifact at \"{}\"",
            artifact.to_string_lossy()
        )
    })
}
