//! Catalog source port — supplies the service records and contact info

use async_trait::async_trait;
use folio_domain::{Catalog, DomainError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Supplies the ordered list of services plus contact info.
///
/// Consumed exactly once at startup; the resulting [`Catalog`] is read-only
/// for the rest of the process.
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn load(&self) -> Result<Catalog, CatalogSourceError>;
}
