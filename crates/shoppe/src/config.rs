//! Shoppe configuration, loaded from an optional JSON file.
//!
//! ```json
//! {
//!   "script": { "greeting": "Hi {customer}!", "closing": "Enjoy!" },
//!   "builtin_ingredients": true,
//!   "ingredients": [
//!     { "id": "ScoopOfVanilla", "kind": "scoop", "message": "I've added a scoop of vanilla ice cream." }
//!   ]
//! }
//! ```
//!
//! Every field is optional, an empty object is the built-in shoppe.

use micro_cone::CatalogError;
use micro_cone::ingredient::{Catalog, IngredientSpec};
use micro_cone::serving::Script;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShoppeConfig {
    script: Script,
    builtin_ingredients: bool,
    ingredients: Vec<IngredientSpec>,
}

impl Default for ShoppeConfig {
    fn default() -> Self {
        Self { script: Script::default(), builtin_ingredients: true, ingredients: vec![] }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {source}")]
    Catalog {
        #[from]
        source: CatalogError,
    },
}

impl ShoppeConfig {
    /// Loads the config at `path`.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file can't be read, [`ConfigError::Json`] if it is not a valid
    /// config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json(&content)?;
        info!(path = %path.display(), ingredients = config.ingredients.len(), "loaded shoppe config");
        Ok(config)
    }

    /// Loads the config at `path`, or the default config when no path is given.
    ///
    /// # Errors
    /// See [`ShoppeConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config given, using the built-in shoppe");
                Ok(Self::default())
            }
        }
    }

    /// # Errors
    /// [`ConfigError::Json`] on malformed JSON, an unknown field or an unknown ingredient kind.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn ingredients(&self) -> &[IngredientSpec] {
        &self.ingredients
    }

    /// Builds the catalog this config describes.
    ///
    /// # Errors
    /// [`ConfigError::Catalog`] if an ingredient is registered twice, including one shadowing a
    /// built-in ingredient, or has a blank identifier.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let mut builder = Catalog::builder();
        if self.builtin_ingredients {
            builder = builder.with_builtin();
        }
        Ok(builder.register_all(self.ingredients.iter().cloned()).build()?)
    }
}
