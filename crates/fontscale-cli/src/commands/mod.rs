pub mod convert;
pub mod table;

use std::path::Path;

use fontscale_core::{FontScaleLookup, TableConfig};

/// Load the lookup from a table file, or the built-in tables.
pub fn load_lookup(table: Option<&str>) -> anyhow::Result<FontScaleLookup> {
    let lookup = match table {
        Some(path) => {
            tracing::info!(path, "Loading curve table");
            TableConfig::from_file(Path::new(path))?.into_lookup()?
        }
        None => FontScaleLookup::builtin()?,
    };
    Ok(lookup)
}
