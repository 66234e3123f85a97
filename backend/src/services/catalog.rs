//! Loading the crop reference dataset

use std::path::Path;

use shared::CropCatalog;

use crate::error::{AppError, AppResult};

/// Read and validate `crop_data.json`. Any bad entry aborts the load.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<CropCatalog> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!("Cannot read crop dataset {}: {}", path.display(), e))
    })?;

    let catalog = CropCatalog::from_json_str(&json)?;
    tracing::info!(
        "Loaded {} crop/soil profiles from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_catalog("does/not/exist.json").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/crop_data.json");
        let catalog = load_catalog(path).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("Wheat", "Black").is_some());
    }
}
