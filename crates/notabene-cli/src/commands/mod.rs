//! Command handlers.
//!
//! Handlers write their output to the given writer so they can be driven
//! from tests; [`run`] wires them to stdout.

pub mod init;
pub mod list;
pub mod show;

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use notabene_core::{Error, NotebookResolver, Result};

use crate::cli::{Cli, Command};
use crate::config::{NotebookConfig, CONFIG_FILE};

/// Name used for the marker directory and environment variables.
pub const PROJECT_NAME: &str = "notabene";

/// Resolver for notebooks of this tool.
pub fn resolver() -> NotebookResolver {
    NotebookResolver::new(PROJECT_NAME)
}

/// A resolved notebook and its configuration.
#[derive(Debug, Clone)]
pub struct Notebook {
    /// Notebook root directory
    pub root: PathBuf,
    /// Loaded configuration
    pub config: NotebookConfig,
}

impl Notebook {
    /// Locate the notebook for `cwd` and load its configuration.
    ///
    /// `explicit` and `config_path` come from `--notebook` and `--config`.
    pub fn open(explicit: Option<&Path>, config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let resolver = resolver();
        let root = resolver.notebook_root(explicit, cwd).ok_or_else(|| {
            Error::not_found(format!(
                "no {} directory in {} or its parents (run `nb init` or set {})",
                resolver.marker(),
                cwd.display(),
                resolver.env_var("DIR")
            ))
        })?;
        debug!("Notebook root: {}", root.display());

        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => resolver.marker_dir(&root).join(CONFIG_FILE),
        };
        let config = NotebookConfig::load(&config_path)?;
        Ok(Self { root, config })
    }
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| Error::io_with_path(e, "."))?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::List(args) => {
            let notebook = Notebook::open(cli.notebook.as_deref(), cli.config.as_deref(), &cwd)?;
            list::cmd_list(&notebook, &args, &cwd, Utc::now(), &mut out).await?;
        }
        Command::Show { file } => show::cmd_show(&cwd.join(file), &mut out)?,
        Command::Init { dir, force } => {
            let dir = dir.map_or_else(|| cwd.clone(), |d| cwd.join(d));
            init::cmd_init(&dir, force, &mut out)?;
        }
    }

    out.flush().map_err(Error::from)
}
