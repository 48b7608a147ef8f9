//! TOML catalog file source
//!
//! Lets the service list and contact info live in a `catalog.toml` instead
//! of code:
//!
//! ```toml
//! [contact]
//! telegram = "@ivanov"
//! email = "dev@example.com"
//!
//! [[services]]
//! id = "sheets-automation"
//! title = "Spreadsheet automation"
//! short = "..."
//! price = "from $120"
//! delivery = "2-4 days"
//! support = "14 days of fixes"
//! includes = ["..."]
//! ```

use async_trait::async_trait;
use folio_application::{CatalogSourceError, CatalogSourcePort};
use folio_domain::{Catalog, ContactInfo, ServiceRecord};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    contact: ContactInfo,
    services: Vec<ServiceRecord>,
}

/// Catalog loaded from a TOML file on disk
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSourcePort for FileCatalog {
    async fn load(&self) -> Result<Catalog, CatalogSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogSourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        let file: CatalogFile =
            toml::from_str(&raw).map_err(|e| CatalogSourceError::Parse(e.to_string()))?;
        Ok(Catalog::new(file.services, file.contact)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[contact]
telegram = "@ivanov"
email = "dev@example.com"

[[services]]
id = "one"
title = "First"
short = "short one"
price = "from $50"
delivery = "1-2 days"
support = "7 days"
highlights = ["a", "b", "c"]
includes = ["x"]
good_for = ["y"]
stack = ["Rust"]

[[services]]
id = "two"
title = "Second"
short = "short two"
price = "from $90"
delivery = "2-3 days"
support = "7 days"
"#;

    fn write_sample(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[tokio::test]
    async fn test_load_catalog_file() {
        let f = write_sample(SAMPLE);
        let catalog = FileCatalog::new(f.path()).load().await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.services()[0].title, "First");
        // Optional list fields default to empty
        assert!(catalog.services()[1].includes.is_empty());
        assert_eq!(catalog.contact().telegram, "@ivanov");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileCatalog::new("/nonexistent/catalog.toml")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogSourceError::Io(_)));
    }

    #[tokio::test]
    async fn test_garbage_is_parse_error() {
        let f = write_sample("not = [valid");
        let err = FileCatalog::new(f.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let doubled = SAMPLE.replace("id = \"two\"", "id = \"one\"");
        let f = write_sample(&doubled);
        let err = FileCatalog::new(f.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Invalid(_)));
    }
}
