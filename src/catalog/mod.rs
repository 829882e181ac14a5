/// Catalog access module
///
/// This module handles:
/// - Database queries and updates (library.rs)
/// - Shared row structures (data.rs)

pub mod data;
pub mod library;
