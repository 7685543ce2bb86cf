use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::models::CrsId;
use crate::utils::constants::SETTINGS_ENV_PREFIX;

/// The source/target reference systems a transformer is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerSettings {
    pub source_crs: CrsId,
    pub target_crs: CrsId,
}

impl TransformerSettings {
    pub fn new(source_crs: CrsId, target_crs: CrsId) -> Self {
        Self {
            source_crs,
            target_crs,
        }
    }

    /// Load settings from an optional file, overridden by `COORDCONV_*`
    /// environment variables (`COORDCONV_SOURCE_CRS`, `COORDCONV_TARGET_CRS`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "reading transformer settings");
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix(SETTINGS_ENV_PREFIX))
            .build()?
            .try_deserialize::<Self>()?;

        debug!(
            source = %settings.source_crs,
            target = %settings.target_crs,
            "transformer settings loaded"
        );

        Ok(settings)
    }
}
