// src/application/commands/catalog_commands.rs

use crate::application::{Catalog, CatalogStats};
use crate::error::AppResult;

/// Replace all data with the demo data set
pub fn seed(catalog: &mut Catalog) -> AppResult<CatalogStats> {
    catalog.generate_test_data()
}

/// Delete all data, in memory and in storage
pub fn clear(catalog: &mut Catalog) -> AppResult<CatalogStats> {
    catalog.clear_data()?;
    Ok(catalog.stats())
}

pub fn stats(catalog: &Catalog) -> CatalogStats {
    catalog.stats()
}
