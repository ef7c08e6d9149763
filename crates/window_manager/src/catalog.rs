//! Built-in application catalog validated at build time from `apps.catalog.toml`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::WindowRegistration;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));
}

#[derive(Debug, Error)]
/// Errors produced while decoding an application catalog.
pub enum CatalogError {
    /// The catalog JSON did not match [`AppCatalogEntry`].
    #[error("failed to parse app catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One application the shell knows how to launch.
pub struct AppCatalogEntry {
    pub id: String,
    pub title: String,
    pub component: String,
    pub icon: String,
}

impl AppCatalogEntry {
    pub fn registration(&self) -> WindowRegistration {
        WindowRegistration::new(
            self.id.as_str(),
            self.title.as_str(),
            self.component.as_str(),
            self.icon.as_str(),
        )
    }
}

/// Returns the built-in catalog in dock order.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the generated catalog cannot be decoded.
pub fn builtin_catalog() -> Result<Vec<AppCatalogEntry>, CatalogError> {
    parse_catalog(generated::APP_CATALOG_JSON)
}

/// Decodes a catalog serialized as a JSON array of entries.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed input.
pub fn parse_catalog(raw: &str) -> Result<Vec<AppCatalogEntry>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{manager::WindowManager, model::WindowId};

    #[test]
    fn builtin_catalog_has_unique_non_empty_ids() {
        let catalog = builtin_catalog().expect("builtin catalog");
        assert!(!catalog.is_empty());

        let ids: BTreeSet<&str> = catalog.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn registering_catalog_twice_is_idempotent() {
        let catalog = builtin_catalog().expect("builtin catalog");
        let mut manager = WindowManager::<()>::default();

        manager.register_catalog(&catalog);
        let before = manager.state().clone();
        manager.register_catalog(&catalog);

        assert_eq!(manager.state(), &before);
        assert_eq!(manager.state().windows().len(), catalog.len());
        let first = &catalog[0];
        let record = manager
            .state()
            .window(&WindowId::from(first.id.as_str()))
            .expect("catalog window");
        assert_eq!(record.title, first.title);
        assert_eq!(record.component.as_str(), first.component);
    }

    #[test]
    fn malformed_catalog_reports_parse_error() {
        let err = parse_catalog(r#"[{"id": "files"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
