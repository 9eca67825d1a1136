use std::path::PathBuf;

use lf_config::LfConfig;
use lf_query::QueryEngine;
use lf_store::{CsvRecordStore, ImageStore, Registry};

use super::session::{Action, Session};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LfConfig,
    pub project_root: PathBuf,
    pub session: Session,
    pub store: CsvRecordStore,
    pub images: ImageStore,
}

impl AppContext {
    /// Open the record table and image directory the configuration names.
    ///
    /// Nothing is created on disk here; writers call [`Registry::initialize`].
    #[must_use]
    pub fn init(project_root: PathBuf, config: LfConfig, session: Session) -> Self {
        let store = CsvRecordStore::new(config.storage.table_path_in(&project_root));
        let images = ImageStore::new(config.storage.images_dir_in(&project_root));

        tracing::debug!(
            table = %store.path().display(),
            images = %images.dir().display(),
            role = session.role.as_str(),
            user = session.user.as_deref().unwrap_or("-"),
            "opened registry"
        );

        Self {
            config,
            project_root,
            session,
            store,
            images,
        }
    }

    /// Ingestion entry point, after checking the session may report.
    pub fn registry(&self) -> anyhow::Result<Registry<&CsvRecordStore>> {
        self.session.authorize(Action::Report)?;
        Ok(Registry::new(&self.store, self.images.clone()))
    }

    /// Query engine, after checking the session may run `action`.
    pub fn engine(&self, action: Action) -> anyhow::Result<QueryEngine<&CsvRecordStore>> {
        self.session.authorize(action)?;
        Ok(QueryEngine::new(&self.store))
    }

    /// Result cap for list-style commands.
    #[must_use]
    pub fn limit(&self, flag: Option<u32>) -> usize {
        let limit = flag.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
