//! Running a search and describing its outcome.

use crate::model::criteria::SearchCriteria;
use crate::model::property::Property;

/// Records from `properties` that satisfy `criteria`, in source order.
pub fn filter(properties: &[Property], criteria: &SearchCriteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Heading and footer text for the results list.
///
/// Before the first search the whole catalogue is shown as "All Properties";
/// afterwards the count of matches drives the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    pub has_searched: bool,
    pub count: usize,
}

impl ResultsSummary {
    pub fn new(has_searched: bool, count: usize) -> Self {
        Self {
            has_searched,
            count,
        }
    }

    pub fn heading(&self) -> String {
        match (self.has_searched, self.count) {
            (false, _) => "All Properties".to_string(),
            (true, 0) => "No Properties Found".to_string(),
            (true, 1) => "1 Property Found".to_string(),
            (true, n) => format!("{n} Properties Found"),
        }
    }

    /// Whether to show the "no results" tips.
    pub fn is_empty_search(&self) -> bool {
        self.has_searched && self.count == 0
    }

    /// Footer line, `None` when there is nothing listed.
    pub fn footer(&self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        let noun = if self.count == 1 { "property" } else { "properties" };
        let suffix = if self.has_searched {
            " matching your search criteria"
        } else {
            ""
        };
        Some(format!("Showing {} {noun}{suffix}", self.count))
    }
}
