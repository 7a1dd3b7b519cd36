use std::path::Path;

use bevy::log::{error, info};
use bevy::prelude::{Reflect, ReflectResource, Resource};
use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// One entry of the carousel: the poster image and the lines shown beside it.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PosterRecord {
    pub image: String,
    #[serde(default)]
    pub description: Vec<String>,
}

impl PosterRecord {
    pub fn new(image: impl Into<String>, description: &[&str]) -> Self {
        Self {
            image: image.into(),
            description: description.iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// Ordered, read-only list of posters. Never empty.
#[derive(Resource, Reflect, Clone, Debug)]
#[reflect(Resource)]
pub struct Catalog {
    records: Vec<PosterRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            records: vec![
                PosterRecord::new(
                    "poster1.png",
                    &["This is movie 1, line 1", "Line 2", "Line 3"],
                ),
                PosterRecord::new(
                    "poster2.png",
                    &["This is movie 2, line A", "Line B", "Line C"],
                ),
            ],
        }
    }
}

impl Catalog {
    pub fn new(records: Vec<PosterRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(Report::new(CatalogError).attach("catalog has no posters"));
        }
        if let Some(index) = records.iter().position(|r| r.image.trim().is_empty()) {
            return Err(Report::new(CatalogError)
                .attach(format!("poster {index} has an empty image path")));
        }
        Ok(Self { records })
    }

    /// Parses `[{ "image": ..., "description": [...] }, ...]`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PosterRecord> =
            serde_json::from_str(json).change_context(CatalogError)?;
        Self::new(records)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            Report::new(err)
                .change_context(CatalogError)
                .attach(format!("reading {}", path.display()))
        })?;
        Self::from_json(&json).map_err(|report| report.attach(format!("parsing {}", path.display())))
    }

    /// Reads `path` when it exists, falling back to the built-in catalog.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|path| path.exists()) else {
            info!("Using built-in poster catalog");
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(catalog) => {
                info!("Loaded {} posters from {}", catalog.len(), path.display());
                catalog
            }
            Err(report) => {
                error!("{report:?}");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PosterRecord> {
        self.records.get(index)
    }

    /// Indexes derive from `CarouselState`, so out of range is a bug.
    pub fn record(&self, index: usize) -> &PosterRecord {
        &self.records[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PosterRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_two_posters() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.record(1).description[0], "This is movie 2, line A");
    }

    #[test]
    fn default_images_sit_at_the_asset_root() {
        let catalog = Catalog::default();
        let images: Vec<&str> = catalog
            .iter()
            .map(|record| record.image.as_str())
            .collect();
        assert_eq!(images, vec!["poster1.png", "poster2.png"]);
    }

    #[test]
    fn parses_json_catalog() {
        let json = r#"[
            { "image": "a.png", "description": ["one", "two"] },
            { "image": "b.png" }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.record(0).description, vec!["one", "two"]);
        assert!(catalog.record(1).description.is_empty());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(Catalog::from_json("[]").is_err());
        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn rejects_blank_image_path() {
        let json = r#"[{ "image": "  ", "description": [] }]"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Catalog::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let catalog = Catalog::load_or_default(Some(Path::new("does/not/exist.json")));
        assert_eq!(catalog.len(), Catalog::default().len());
        assert_eq!(Catalog::load_or_default(None).len(), 2);
    }

    #[test]
    fn get_is_checked() {
        assert!(Catalog::default().get(2).is_none());
    }
}
