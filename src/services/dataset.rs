use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::DataSettings;
use crate::core::merge::merge_dataset;
use crate::models::{Cuisine, Restaurant, RestaurantRecord};

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Read every row of a headed CSV file
fn read_csv<T, P>(path: P) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load `name,customer_rating,distance,price,cuisine_id` rows
pub fn load_restaurants<P: AsRef<Path>>(path: P) -> Result<Vec<Restaurant>, DatasetError> {
    read_csv(path)
}

/// Load `id,name` rows
pub fn load_cuisines<P: AsRef<Path>>(path: P) -> Result<Vec<Cuisine>, DatasetError> {
    read_csv(path)
}

/// Load both relations and merge them
pub fn load_dataset(settings: &DataSettings) -> Result<Vec<RestaurantRecord>, DatasetError> {
    let restaurants = load_restaurants(&settings.restaurants_path)?;
    let cuisines = load_cuisines(&settings.cuisines_path)?;

    let merged = merge_dataset(&restaurants, &cuisines);

    tracing::info!(
        "Loaded {} searchable restaurants from {}",
        merged.len(),
        settings.restaurants_path.display()
    );

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_restaurants_with_missing_cuisine_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "restaurants.csv",
            "name,customer_rating,distance,price,cuisine_id\nDeliciousgenix,4,1,10,11\nHomeless Diner,2,3,15,\n",
        );

        let rows = load_restaurants(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cuisine_id, Some(11));
        assert_eq!(rows[1].cuisine_id, None);
    }

    #[test]
    fn test_missing_file() {
        let err = load_cuisines("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_malformed_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "cuisines.csv", "id,name\none,Italian\n");

        let err = load_cuisines(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Csv { .. }));
        assert!(err.to_string().contains("cuisines.csv"));
    }

    #[test]
    fn test_load_dataset_merges() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DataSettings {
            restaurants_path: write_file(
                &dir,
                "restaurants.csv",
                "name,customer_rating,distance,price,cuisine_id\nHearty ChowClick,3,2,25,1\nOrphan,5,1,10,7\n",
            ),
            cuisines_path: write_file(&dir, "cuisines.csv", "id,name\n1,Italian\n2,Thai\n"),
        };

        let merged = load_dataset(&settings).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Hearty Chow Click");
        assert_eq!(merged[0].cuisine, "Italian");
    }
}
