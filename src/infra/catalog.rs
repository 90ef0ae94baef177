//! Catalog snapshots: embedded JSON by default, or files from a configured directory.

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    domain::{Catalog, Influencer, Venue},
    util::assets,
};

pub const INFLUENCERS_FILE: &str = "influencers.json";
pub const VENUES_FILE: &str = "venues.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("embedded catalog file {0} is missing")]
    MissingEmbedded(&'static str),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the two catalog files are read from.
#[derive(Clone, Copy, Debug)]
pub enum CatalogSource<'a> {
    Embedded,
    Dir(&'a Path),
}

impl CatalogSource<'_> {
    fn read(&self, file: &'static str) -> Result<Vec<u8>, CatalogError> {
        match self {
            CatalogSource::Embedded => assets::embedded_file(&format!("catalog/{file}"))
                .map(|data| data.into_owned())
                .ok_or(CatalogError::MissingEmbedded(file)),
            CatalogSource::Dir(dir) => {
                let path = dir.join(file);
                fs::read(&path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
}

/// Loads both catalogs from the configured source, or the embedded one.
///
/// Each file loads on its own: a file that cannot be read or is not a JSON
/// array leaves only its own kind empty and is reported in the returned
/// errors. Rows that fail to deserialize are skipped with a warning.
pub fn load_catalog(dir: Option<&Path>) -> (Catalog, Vec<CatalogError>) {
    let source = dir.map_or(CatalogSource::Embedded, CatalogSource::Dir);
    let mut errors = Vec::new();

    let influencers = load_rows::<Influencer>(source, INFLUENCERS_FILE).unwrap_or_else(|err| {
        warn!("Influencer catalog unavailable: {err}");
        errors.push(err);
        Vec::new()
    });
    let venues = load_rows::<Venue>(source, VENUES_FILE).unwrap_or_else(|err| {
        warn!("Venue catalog unavailable: {err}");
        errors.push(err);
        Vec::new()
    });

    info!(
        influencers = influencers.len(),
        venues = venues.len(),
        source = ?source,
        "Loaded catalog"
    );
    (Catalog::new(influencers, venues), errors)
}

fn load_rows<T: DeserializeOwned>(source: CatalogSource<'_>, file: &'static str) -> Result<Vec<T>, CatalogError> {
    let data = source.read(file)?;
    parse_rows(file, &data)
}

fn parse_rows<T: DeserializeOwned>(file: &'static str, data: &[u8]) -> Result<Vec<T>, CatalogError> {
    let rows: Vec<Value> =
        serde_json::from_slice(data).map_err(|source| CatalogError::Parse { file, source })?;

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(file, index, "Skipping malformed catalog row: {err}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use super::*;
    use crate::domain::{EntityKind, SelectionStore};

    const GOOD_INFLUENCERS: &str = r#"[
        {"id": 1, "name": "Lee", "handle": "@lee", "followerCount": 20000},
        {"id": 2, "name": "Park", "handle": "@park", "followerCount": 1500}
    ]"#;

    fn scratch_dir(name: &str, influencers: &str, venues: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("booking-board-{name}-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(INFLUENCERS_FILE), influencers).unwrap();
        fs::write(dir.join(VENUES_FILE), venues).unwrap();
        dir
    }

    #[test]
    fn embedded_catalog_parses() {
        let (catalog, errors) = load_catalog(None);
        assert!(errors.is_empty());
        assert!(!catalog.influencers().is_empty());
        assert!(!catalog.venues().is_empty());
        let first = &catalog.venues()[0];
        assert_eq!(catalog.venue(first.id), Some(first));
    }

    #[test]
    fn directory_catalog_tolerates_malformed_types() {
        let dir = scratch_dir(
            "malformed-types",
            GOOD_INFLUENCERS,
            r#"[
                {"id": 5, "name": "Loft", "price": 500000, "types": "club"},
                {"id": 6, "name": "Hall", "price": 900000}
            ]"#,
        );

        let (catalog, errors) = load_catalog(Some(&dir));
        assert!(errors.is_empty());
        assert_eq!(catalog.venues().len(), 2);
        assert!(catalog.venues().iter().all(|venue| venue.types.is_empty()));

        let mut store = SelectionStore::new();
        store.toggle_venue_selection(5);
        store.toggle_venue_selection(77);
        assert_eq!(store.aggregate_cost(EntityKind::Venue, &catalog), 500_000);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn bad_rows_are_skipped_and_good_rows_kept() {
        let dir = scratch_dir(
            "bad-row",
            GOOD_INFLUENCERS,
            r#"[
                {"id": 5, "name": "Loft", "price": 500000},
                {"id": 6, "name": "Hall", "price": null},
                "not a venue",
                {"id": 7, "name": "Roof", "price": 700000}
            ]"#,
        );

        let (catalog, errors) = load_catalog(Some(&dir));
        assert!(errors.is_empty());
        assert_eq!(catalog.influencers().len(), 2);
        let ids: Vec<_> = catalog.venues().iter().map(|venue| venue.id).collect();
        assert_eq!(ids, vec![5, 7]);
        assert!(catalog.venue(6).is_none());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn broken_venue_file_keeps_influencers() {
        let dir = scratch_dir("invalid", GOOD_INFLUENCERS, "{ not json");

        let (catalog, errors) = load_catalog(Some(&dir));
        assert_eq!(catalog.influencers().len(), 2);
        assert!(catalog.venues().is_empty());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CatalogError::Parse { file: VENUES_FILE, .. }));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_directory_degrades_to_empty_catalog() {
        let dir = env::temp_dir().join("booking-board-does-not-exist");
        let (catalog, errors) = load_catalog(Some(&dir));
        assert!(catalog.is_empty());
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|err| matches!(err, CatalogError::Io { .. })));
    }
}
