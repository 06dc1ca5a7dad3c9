//! The fixed list of listings shipped with the application.
//!
//! The records live in `data/properties.json` and are compiled into the
//! binary. Decoding checks that ids are unique and that every record has at
//! least one gallery image, since cards and favourites use the first image as
//! their thumbnail.

use std::collections::HashSet;

use crate::error::CatalogueError;
use crate::model::property::Property;

const EMBEDDED: &str = include_str!("../data/properties.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    properties: Vec<Property>,
}

impl Catalogue {
    /// Decodes the catalogue compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogueError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let properties: Vec<Property> = serde_json::from_str(json)?;
        Self::new(properties)
    }

    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for property in &properties {
            if !seen.insert(property.id) {
                return Err(CatalogueError::DuplicateId(property.id));
            }
            if property.images.is_empty() {
                return Err(CatalogueError::MissingImages(property.id));
            }
        }
        Ok(Self { properties })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::PropertyType;
    use crate::model::property::fixtures::property;

    #[test]
    fn embedded_catalogue_decodes() {
        let catalogue = Catalogue::embedded().unwrap();
        assert_eq!(catalogue.len(), 7);

        let first = catalogue.get(1).unwrap();
        assert_eq!(first.property_type, PropertyType::House);
        assert_eq!(first.price, 85_000_000);
        assert_eq!(first.images.len(), 8);
        assert!(catalogue.get(99).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let p = property(5, PropertyType::Flat, 1);
        let err = Catalogue::new(vec![p.clone(), p]).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateId(5)));
    }

    #[test]
    fn rejects_records_without_images() {
        let mut p = property(6, PropertyType::House, 1);
        p.images.clear();
        let err = Catalogue::new(vec![p]).unwrap_err();
        assert!(matches!(err, CatalogueError::MissingImages(6)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalogue::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogueError::Decode(_)));
    }
}
