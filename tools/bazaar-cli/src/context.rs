//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bazaar_session::{FileStore, SessionContext, SimulatedBackend};

use crate::config::BazaarConfig;
use crate::output::Output;

/// Execution context for CLI commands.
///
/// Created once in `main` and passed down; it owns the session context so
/// markers are read at most once per invocation.
pub struct Context {
    /// CLI configuration.
    pub config: BazaarConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Login markers.
    pub session: SessionContext<FileStore>,
    /// Delayed login and order submission.
    pub backend: SimulatedBackend,
}

impl Context {
    /// Load configuration and open the marker store.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => BazaarConfig::discover(&cwd),
        };
        let config = match &config_path {
            Some(path) => BazaarConfig::load(path)?,
            None => BazaarConfig::default(),
        };

        let store_path = config.session.resolved_store_path();
        let store = FileStore::open(&store_path)
            .with_context(|| format!("Failed to open session store: {}", store_path.display()))?;
        let backend = SimulatedBackend::new(config.session.delays());

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            session: SessionContext::new(store),
            backend,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
