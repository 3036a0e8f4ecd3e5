use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::storage::StorageConfig;

pub mod network;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
