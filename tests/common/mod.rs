use insta_cmd::get_cargo_bin;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

#[allow(dead_code)]
pub fn base_command() -> Command {
    Command::new(get_cargo_bin(env!("CARGO_PKG_NAME")))
}

pub struct Fixture {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir should've been created"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("file should've been written");
        path
    }

    #[cfg(unix)]
    pub fn write_script(&self, name: &str, contents: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_file(name, contents);
        let mut perms = std::fs::metadata(&path)
            .expect("script metadata should've been readable")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("script should've been made executable");
        path
    }

    pub fn cmd<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = base_command();
        cmd.current_dir(self.dir.path());
        cmd.args(args);
        cmd
    }
}
