use lexica_client::DictionaryClient;
use lexica_config::Config;
use lexica_core::LookupController;
use lexica_store::{FileStorage, HistoryStore, PreferenceStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub controller: LookupController<DictionaryClient, FileStorage>,
    pub prefs: RwLock<PreferenceStore<FileStorage>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = DictionaryClient::new(&config.network)?;
        let history = HistoryStore::load(FileStorage::new(config.storage.data_dir.clone())?);
        let prefs = PreferenceStore::load(FileStorage::new(config.storage.data_dir)?);

        Ok(Self {
            controller: LookupController::new(client, history),
            prefs: RwLock::new(prefs),
        })
    }
}
