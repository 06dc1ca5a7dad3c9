use common::catalogue::Catalogue;
use common::model::property::Property;
use common::search::ResultsSummary;

/// Runtime state of the search page.
pub struct SearchPage {
    /// Matches from the last search. Ignored until `has_searched` is set.
    pub results: Vec<Property>,

    /// Before the first search the whole catalogue is listed.
    pub has_searched: bool,

    /// Id of the card currently being dragged, if any.
    pub dragged: Option<u32>,
}

impl SearchPage {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            has_searched: false,
            dragged: None,
        }
    }

    /// The records to list: search results once a search has run, otherwise `all`.
    pub fn displayed<'a>(&'a self, all: &'a [Property]) -> &'a [Property] {
        if self.has_searched {
            &self.results
        } else {
            all
        }
    }

    pub fn summary(&self, all: &[Property]) -> ResultsSummary {
        ResultsSummary::new(self.has_searched, self.displayed(all).len())
    }

    /// Forgets the remembered drag id. Called on `dragend`, which also fires
    /// when the user cancels the drag.
    pub fn end_drag(&mut self) {
        self.dragged = None;
    }

    /// Resolves the record a drop refers to: the id carried by the drag
    /// payload if present, else the one remembered at drag start.
    pub fn take_dropped<'a>(
        &mut self,
        payload: Option<u32>,
        catalogue: &'a Catalogue,
    ) -> Option<&'a Property> {
        let remembered = self.dragged.take();
        catalogue.get(payload.or(remembered)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::embedded().unwrap()
    }

    #[test]
    fn lists_whole_catalogue_before_first_search() {
        let catalogue = catalogue();
        let page = SearchPage::new();
        assert_eq!(page.displayed(catalogue.properties()).len(), catalogue.len());
        assert!(!page.summary(catalogue.properties()).has_searched);
    }

    #[test]
    fn payload_id_wins_over_remembered_id() {
        let catalogue = catalogue();
        let mut page = SearchPage::new();
        page.dragged = Some(3);
        let dropped = page.take_dropped(Some(5), &catalogue).map(|p| p.id);
        assert_eq!(dropped, Some(5));
        assert_eq!(page.dragged, None);
    }

    #[test]
    fn remembered_id_used_when_payload_missing() {
        let catalogue = catalogue();
        let mut page = SearchPage::new();
        page.dragged = Some(3);
        let dropped = page.take_dropped(None, &catalogue).map(|p| p.id);
        assert_eq!(dropped, Some(3));
    }

    #[test]
    fn cancelled_drag_does_not_leak_into_later_drop() {
        let catalogue = catalogue();
        let mut page = SearchPage::new();
        page.dragged = Some(3);
        page.end_drag();
        assert!(page.take_dropped(None, &catalogue).is_none());
    }

    #[test]
    fn unknown_id_is_ignored() {
        let catalogue = catalogue();
        let mut page = SearchPage::new();
        assert!(page.take_dropped(Some(999), &catalogue).is_none());
    }
}
