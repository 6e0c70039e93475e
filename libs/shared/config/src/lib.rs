use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("SWASTHYA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                warn!("SWASTHYA_DATA_DIR not set, using ./data");
                PathBuf::from("./data")
            });

        let port = match env::var("SWASTHYA_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("SWASTHYA_PORT is not a valid port number, using 3000");
                3000
            }),
            Err(_) => 3000,
        };

        Self { data_dir, port }
    }
}
