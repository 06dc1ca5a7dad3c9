use crate::model::property::Property;

/// Session-scoped favourites, unique by property id and kept in insertion
/// order for display.
///
/// Records are stored as copies so the panel can render them without going
/// back to the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favourites {
    items: Vec<Property>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Removes `property` if present, otherwise appends it.
    /// Returns `true` when the property is a favourite afterwards.
    pub fn toggle(&mut self, property: &Property) -> bool {
        if self.remove(property.id) {
            false
        } else {
            self.items.push(property.clone());
            true
        }
    }

    /// Appends `property` unless it is already present. Returns `true` if it was added.
    pub fn add(&mut self, property: &Property) -> bool {
        if self.contains(property.id) {
            return false;
        }
        self.items.push(property.clone());
        true
    }

    /// Returns `true` if something was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.items.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::PropertyType;
    use crate::model::property::fixtures::property;

    #[test]
    fn toggle_adds_then_removes() {
        let house = property(1, PropertyType::House, 85_000_000);
        let mut favourites = Favourites::new();

        assert!(favourites.toggle(&house));
        assert!(favourites.contains(1));
        assert!(!favourites.toggle(&house));
        assert!(favourites.is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let flat = property(2, PropertyType::Flat, 55_000_000);
        let mut favourites = Favourites::new();

        assert!(favourites.add(&flat));
        assert!(!favourites.add(&flat));
        assert_eq!(favourites.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut favourites = Favourites::new();
        for id in [3, 1, 2] {
            favourites.add(&property(id, PropertyType::House, 1));
        }
        favourites.remove(1);
        favourites.add(&property(1, PropertyType::House, 1));
        assert_eq!(favourites.ids(), vec![3, 2, 1]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut favourites = Favourites::new();
        favourites.add(&property(1, PropertyType::House, 1));
        assert!(!favourites.remove(9));
        assert_eq!(favourites.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut favourites = Favourites::new();
        favourites.add(&property(1, PropertyType::House, 1));
        favourites.add(&property(2, PropertyType::Flat, 1));
        favourites.clear();
        assert!(favourites.is_empty());
        assert_eq!(favourites.iter().count(), 0);
    }
}
