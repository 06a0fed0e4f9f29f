use std::env;
use std::path::PathBuf;

use jirabt_common::error::{JiraBtError, JiraBtResult};
use jirabt_widgets::import::{ImportRequest, UploadMode};

/// What to import, read from `IMPORT_*` variables.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub subscription: u32,
    pub file: PathBuf,
    pub mode: UploadMode,
    pub encoding: String,
}

impl ImportSettings {
    pub fn from_env() -> JiraBtResult<Self> {
        let subscription = required("IMPORT_SUBSCRIPTION")?
            .parse()
            .map_err(|e| JiraBtError::Config(format!("invalid IMPORT_SUBSCRIPTION: {e}")))?;
        let mode = env::var("IMPORT_MODE")
            .ok()
            .map(|raw| raw.parse::<UploadMode>())
            .transpose()
            .map_err(JiraBtError::Config)?
            .unwrap_or_default();

        Ok(Self {
            subscription,
            file: PathBuf::from(required("IMPORT_FILE")?),
            mode,
            encoding: env::var("IMPORT_ENCODING").unwrap_or_else(|_| "UTF-8".to_owned()),
        })
    }

    pub fn request(&self) -> ImportRequest {
        ImportRequest {
            subscription: self.subscription,
            mode: self.mode,
            encoding: self.encoding.clone(),
            file: self.file.clone(),
        }
    }
}

fn required(key: &str) -> JiraBtResult<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| JiraBtError::Config(format!("{key} is required but not set")))
}
