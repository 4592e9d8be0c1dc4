use anyhow::{Context, Result, anyhow};
use clap::Parser;
use depclean_core::{CollectorConfig, DEFAULT_DIRECTORIES, DEFAULT_EXTENSIONS, split_list};
use log::{debug, info};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "scan-deps")]
#[command(about = "Find missing and unused dependencies in JavaScript/TypeScript projects")]
pub struct Config {
    /// Root directory of the project (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Comma-separated sub-directories to scan recursively
    #[arg(long, default_value = DEFAULT_DIRECTORIES)]
    pub directory: String,

    /// Comma-separated file extensions to scan
    #[arg(long, default_value = DEFAULT_EXTENSIONS)]
    pub extension: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also list the detected dependencies
    #[arg(long)]
    pub all: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            directory: DEFAULT_DIRECTORIES.to_string(),
            extension: DEFAULT_EXTENSIONS.to_string(),
            json: false,
            all: false,
        }
    }
}

impl Config {
    /// Initialize the config by resolving the root directory
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, using current directory");
            env::current_dir().context("Failed to read current directory")?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn collector_config(&self) -> Result<CollectorConfig> {
        Ok(CollectorConfig {
            root: self.root()?.clone(),
            directories: split_list(&self.directory),
            extensions: split_list(&self.extension),
        })
    }
}
