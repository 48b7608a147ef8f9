//! Catalog entities — service records and the catalog aggregate

use super::contact::ContactInfo;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier of one service in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Icon shown next to a service, both on the card and in the modal header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIcon {
    #[default]
    Spreadsheet,
    Bot,
    Brain,
    Workflow,
    Report,
    Shield,
}

impl ServiceIcon {
    /// Glyph used by the terminal renderer
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Spreadsheet => "▦",
            Self::Bot => "🤖",
            Self::Brain => "✦",
            Self::Workflow => "⇶",
            Self::Report => "▤",
            Self::Shield => "◈",
        }
    }
}

/// One catalog entry describing an offered service.
///
/// Immutable once the catalog is built; every field is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    #[serde(default)]
    pub icon: ServiceIcon,
    pub title: String,
    /// Short description shown on the card and under the modal title
    pub short: String,
    pub price: String,
    /// Delivery estimate, e.g. "3-5 days"
    pub delivery: String,
    /// Support terms shown as the card footer blurb
    pub support: String,
    /// Highlight tags; cards show only the first two
    #[serde(default)]
    pub highlights: Vec<String>,
    /// "What's included" items, in listed order
    #[serde(default)]
    pub includes: Vec<String>,
    /// "Good for" items, in listed order
    #[serde(default)]
    pub good_for: Vec<String>,
    /// Technology tags, in listed order
    #[serde(default)]
    pub stack: Vec<String>,
}

impl ServiceRecord {
    /// Highlight tags shown on the card (first two, in order)
    pub fn card_highlights(&self) -> &[String] {
        let n = self.highlights.len().min(2);
        &self.highlights[..n]
    }
}

/// Fixed "how we work" steps shown in every service detail view
pub const HOW_WE_WORK: [&str; 3] = [
    "You send a sample sheet, message, or scenario and what the result should look like.",
    "I build an MVP and show a demo (screenshot, video, or live access).",
    "I polish it to the final result and hand over a short usage guide.",
];

/// Pricing footnote shown under the contact panel
pub const PRICE_NOTE: &str = "* Listed prices cover a typical scope. Several sheets, \
systems, or heavier integrations are quoted separately - no surprises.";

/// The complete service catalog: ordered records plus contact info.
///
/// Built once at startup from a catalog source and treated as read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
    contact: ContactInfo,
}

impl Catalog {
    /// Build a catalog, validating that it is non-empty and ids are unique.
    pub fn new(services: Vec<ServiceRecord>, contact: ContactInfo) -> Result<Self, DomainError> {
        if services.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id.as_str()) {
                return Err(DomainError::DuplicateServiceId(service.id.to_string()));
            }
        }
        Ok(Self { services, contact })
    }

    /// Services in listed order
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Replace the contact info (startup-time config override)
    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Look up a service by id
    pub fn get(&self, id: &ServiceId) -> Result<&ServiceRecord, DomainError> {
        self.services
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| DomainError::UnknownService(id.to_string()))
    }

    /// Position of a service in listed order
    pub fn index_of(&self, id: &ServiceId) -> Option<usize> {
        self.services.iter().position(|s| &s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ServiceRecord {
        ServiceRecord {
            id: ServiceId::from(id),
            icon: ServiceIcon::Bot,
            title: format!("Service {}", id),
            short: "short".into(),
            price: "from $100".into(),
            delivery: "2-4 days".into(),
            support: "14 days of support".into(),
            highlights: vec!["one".into(), "two".into(), "three".into()],
            includes: vec!["a".into()],
            good_for: vec!["b".into()],
            stack: vec!["Rust".into()],
        }
    }

    fn contact() -> ContactInfo {
        ContactInfo::new("@ivanov", "dev@example.com")
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![record("a"), record("b"), record("c")], contact()).unwrap();
        let ids: Vec<_> = catalog.services().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(catalog.index_of(&ServiceId::from("b")), Some(1));
    }

    #[test]
    fn test_catalog_rejects_empty() {
        let err = Catalog::new(vec![], contact()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyCatalog));
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![record("a"), record("a")], contact()).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateServiceId(_)));
    }

    #[test]
    fn test_get_unknown_service() {
        let catalog = Catalog::new(vec![record("a")], contact()).unwrap();
        assert!(catalog.get(&ServiceId::from("zzz")).is_err());
        assert!(catalog.get(&ServiceId::from("a")).is_ok());
    }

    #[test]
    fn test_card_highlights_caps_at_two() {
        let r = record("a");
        assert_eq!(r.card_highlights(), &["one".to_string(), "two".to_string()]);

        let mut single = record("b");
        single.highlights = vec!["only".into()];
        assert_eq!(single.card_highlights().len(), 1);

        let mut none = record("c");
        none.highlights.clear();
        assert!(none.card_highlights().is_empty());
    }
}
