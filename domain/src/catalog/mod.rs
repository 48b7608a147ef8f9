//! Service catalog — records, contact info, and the catalog aggregate

pub mod contact;
pub mod entities;

pub use contact::ContactInfo;
pub use entities::{Catalog, ServiceIcon, ServiceId, ServiceRecord};
