use std::path::PathBuf;

#[derive(Clone)]
pub struct RunBehaviours {
    pub output_path: Option<PathBuf>,
    pub iterations_override: Option<u16>,
    pub plain_stdout: bool,
}

#[cfg(test)]
impl RunBehaviours {
    pub(super) fn default() -> Self {
        Self {
            output_path: None,
            iterations_override: None,
            plain_stdout: true,
        }
    }

    pub(super) fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = Some(output_path);
        self
    }
}
