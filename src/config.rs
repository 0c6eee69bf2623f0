use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

const DEFAULT_NAMESPACE: &str = "default";
const DEFAULT_KEY_FIELD: &str = "email";

/// Runtime configuration, read from environment variables with defaults.
/// A `.env` file next to the working directory is honored.
///
/// - `REKORD_DATA_DIR`: where store files and the vault live
/// - `REKORD_NAMESPACE`: subdirectory, so several stores can share a data dir
/// - `REKORD_KEY_FIELD`: uniqueness/lookup field (default `email`)
/// - `REKORD_SPOOL`: path of the forwarding spool file; unset disables
///   forwarding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RekordConfig {
    pub data_dir: PathBuf,
    pub namespace: String,
    pub key_field: String,
    pub spool: Option<PathBuf>,
}

impl RekordConfig {
    pub fn from_env() -> Self {
        // Load .env if present
        let _ = dotenvy::dotenv();

        let data_dir = env::var("REKORD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        let namespace =
            env::var("REKORD_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());
        let key_field =
            env::var("REKORD_KEY_FIELD").unwrap_or_else(|_| DEFAULT_KEY_FIELD.to_string());
        let spool = env::var("REKORD_SPOOL").ok().map(PathBuf::from);

        Self {
            data_dir,
            namespace,
            key_field,
            spool,
        }
    }

    /// The directory holding this namespace's store files.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join(&self.namespace)
    }

    /// The directory holding this namespace's stored file bytes.
    pub fn vault_dir(&self) -> PathBuf {
        self.store_dir().join("vault")
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "rekord", "rekord")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".rekord"))
}
