//! Link navigation adapters

pub mod opener;
