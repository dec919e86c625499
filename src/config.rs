use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::io::OutputFormat;
use crate::options::Options;
use crate::repair::RepairOptions;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RepairConfig {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub dot: Option<String>,
    #[serde(default)]
    pub exclude_removed_edge: bool,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            format: OutputFormat::default(),
            dot: None,
            exclude_removed_edge: false,
        }
    }
}

impl RepairConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: RepairConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Command line values win over the file.
    pub fn merge_options(mut self, options: &Options) -> Self {
        if let Some(input) = &options.input {
            self.input = input.clone();
        }
        if let Some(output) = &options.output {
            self.output = output.clone();
        }
        if let Some(format) = options.format {
            self.format = format;
        }
        if options.dot.is_some() {
            self.dot = options.dot.clone();
        }
        self.exclude_removed_edge |= options.exclude_removed_edge;
        self
    }

    pub fn repair_options(&self) -> RepairOptions {
        RepairOptions {
            exclude_removed_edge: self.exclude_removed_edge,
        }
    }
}

fn default_input() -> String {
    "inputs.json".to_string()
}

fn default_output() -> String {
    "output.json".to_string()
}
