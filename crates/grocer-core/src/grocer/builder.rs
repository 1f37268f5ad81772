//! Builder for creating and configuring Grocer instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::info;

use super::Grocer;
use crate::{
    config::GrocerConfig,
    error::{GroceryError, Result},
    models::MissedItemPolicy,
    store::{RemoteEndpoint, RemoteStore, Session, SqliteStore, Store},
};

/// Builder for creating and configuring Grocer instances.
///
/// The backend is decided once, in [`GrocerBuilder::build`]:
///
/// | Session | Remote configured | Backend |
/// |---|---|---|
/// | guest | either | embedded SQLite |
/// | authenticated | yes | remote |
/// | authenticated | no | configuration error |
#[derive(Clone, Default)]
pub struct GrocerBuilder {
    database_path: Option<PathBuf>,
    session: Session,
    remote: Option<RemoteEndpoint>,
    missed_policy: MissedItemPolicy,
    store: Option<Arc<dyn Store>>,
}

impl GrocerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from loaded configuration.
    pub fn from_config(config: &GrocerConfig) -> Self {
        Self::new()
            .with_database_path(config.database_file.as_ref())
            .with_session(config.remote.session())
            .with_remote(config.remote.endpoint())
            .with_missed_policy(config.missed_items)
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/grocer/grocer.db` or `~/.local/share/grocer/grocer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Sets the remote endpoint used by authenticated sessions.
    pub fn with_remote(mut self, remote: Option<RemoteEndpoint>) -> Self {
        if remote.is_some() {
            self.remote = remote;
        }
        self
    }

    pub fn with_missed_policy(mut self, policy: MissedItemPolicy) -> Self {
        self.missed_policy = policy;
        self
    }

    /// Uses a caller-provided store, bypassing backend selection.
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured grocer instance.
    ///
    /// # Errors
    ///
    /// Returns `GroceryError::Configuration` if the session is authenticated
    /// but no remote endpoint is configured
    /// Returns `GroceryError::FileSystem` if the database path is invalid
    /// Returns `GroceryError::Database` if database initialization fails
    pub async fn build(self) -> Result<Grocer> {
        let store: Arc<dyn Store> = match (self.store, self.session) {
            (Some(store), _) => store,
            (None, Session::Guest) => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                let store = SqliteStore::open(&db_path).await?;
                info!("Using local database {}", store.path().display());
                Arc::new(store)
            }
            (None, Session::Authenticated { access_token }) => {
                let endpoint = self.remote.ok_or_else(|| GroceryError::Configuration {
                    message: "Signed in but no remote url/api_key is configured".to_string(),
                })?;
                Arc::new(RemoteStore::new(endpoint, access_token))
            }
        };

        info!(
            "Using {} backend (missed items: {})",
            store.backend(),
            self.missed_policy
        );
        Ok(Grocer::new(store, self.missed_policy))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("grocer")
            .place_data_file("grocer.db")
            .map_err(|e| GroceryError::XdgDirectory(e.to_string()))
    }
}
