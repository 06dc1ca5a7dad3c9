use crate::model::property::Property;

/// Which page is on screen. The details page carries the selected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Search,
    Details(Property),
}

impl View {
    /// Opens the details page for `property`, replacing any previous selection.
    pub fn select(&mut self, property: Property) {
        *self = View::Details(property);
    }

    /// Returns to the search page and drops the selection.
    pub fn back(&mut self) {
        *self = View::Search;
    }

    pub fn selected(&self) -> Option<&Property> {
        match self {
            View::Search => None,
            View::Details(property) => Some(property),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, View::Search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::PropertyType;
    use crate::model::property::fixtures::property;

    #[test]
    fn starts_on_search() {
        let view = View::default();
        assert!(view.is_search());
        assert!(view.selected().is_none());
    }

    #[test]
    fn select_then_back_clears_selection() {
        let mut view = View::default();
        view.select(property(4, PropertyType::Flat, 38_000_000));
        assert_eq!(view.selected().map(|p| p.id), Some(4));

        view.back();
        assert_eq!(view, View::Search);
        assert!(view.selected().is_none());
    }

    #[test]
    fn selecting_again_replaces() {
        let mut view = View::default();
        view.select(property(1, PropertyType::House, 1));
        view.select(property(2, PropertyType::House, 1));
        assert_eq!(view.selected().map(|p| p.id), Some(2));
    }
}
