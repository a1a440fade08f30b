use anyhow::Context;
use serde::{
    Deserialize, Deserializer,
    de::{self, SeqAccess, Visitor},
};
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

const MIN_ITERATIONS: u16 = 1;
const MAX_ITERATIONS: u16 = 1000;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub program: PathBuf,
    #[serde(default = "default_iterations")]
    pub iterations: u16,
    pub compile: Option<CompileStep>,
}

fn default_iterations() -> u16 {
    MAX_ITERATIONS
}

#[derive(Debug, Deserialize)]
pub struct CompileStep {
    pub command: CommandLine,
    pub artifact: PathBuf,
    #[serde(default)]
    pub keep_artifact: bool,
}

#[derive(Debug)]
pub struct CommandLine {
    argv: Vec<String>,
}

impl CommandLine {
    // argv is non-empty, the deserializer rejects empty arrays
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

impl Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}

impl<'de> Deserialize<'de> for CommandLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CommandLineVisitor;

        impl<'de> Visitor<'de> for CommandLineVisitor {
            type Value = CommandLine;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-empty array of command arguments")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut argv: Vec<String> = Vec::new();
                while let Some(arg) = seq.next_element::<String>()? {
                    argv.push(arg);
                }

                if argv.is_empty() {
                    return Err(de::Error::invalid_length(0, &self));
                }

                Ok(CommandLine { argv })
            }
        }

        deserializer.deserialize_seq(CommandLineVisitor)
    }
}

pub fn get_config<P>(config_file: P) -> anyhow::Result<Config>
where
    P: AsRef<Path>,
{
    let path = config_file.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("couldn't read config file {}", path.to_string_lossy()))?;

    let config: Config = toml::from_str(&contents).context("config file is invalid")?;

    if config.program.as_os_str().is_empty() {
        anyhow::bail!("\"program\" cannot be empty");
    }

    if config.iterations < MIN_ITERATIONS || config.iterations > MAX_ITERATIONS {
        anyhow::bail!(
            "\"iterations\" needs to be in the range [{}, {}]",
            MIN_ITERATIONS,
            MAX_ITERATIONS
        );
    }

    Ok(config)
}
