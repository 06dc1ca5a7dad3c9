//! Search criteria and the raw form they are built from.
//!
//! `SearchForm` mirrors the inputs on the search page one-to-one, as text.
//! `SearchCriteria` is the typed, optional-per-dimension filter the search
//! actually runs with. Converting one into the other is lossy by default: a
//! blank field means "no constraint" and a field that does not parse is
//! dropped and reported, so the rest of the form still applies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;
use crate::model::property::{Property, PropertyType};

/// Longest postcode fragment the form accepts.
pub const POSTCODE_MAX_LEN: usize = 10;

/// Typed filter. Every `None` imposes no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub property_type: Option<PropertyType>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    pub date_after: Option<NaiveDate>,
    pub date_before: Option<NaiveDate>,
    pub postcode: Option<String>,
}

impl SearchCriteria {
    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        *self == SearchCriteria::default()
    }

    /// True iff every present criterion holds for `property`.
    ///
    /// Ranges are inclusive at both ends. The postcode criterion is a
    /// case-insensitive substring match.
    pub fn matches(&self, property: &Property) -> bool {
        if self
            .property_type
            .is_some_and(|wanted| wanted != property.property_type)
        {
            return false;
        }
        if !within(property.price, self.min_price, self.max_price) {
            return false;
        }
        if !within(property.bedrooms, self.min_bedrooms, self.max_bedrooms) {
            return false;
        }
        if !within(property.date_added, self.date_after, self.date_before) {
            return false;
        }
        if let Some(fragment) = &self.postcode {
            let haystack = property.postcode.to_lowercase();
            if !haystack.contains(&fragment.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Which input on the search form a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PropertyType,
    MinPrice,
    MaxPrice,
    MinBedrooms,
    MaxBedrooms,
    DateAfter,
    DateBefore,
    Postcode,
}

impl FormField {
    /// The `name`/`id` attribute used by the form input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::PropertyType => "type",
            FormField::MinPrice => "minPrice",
            FormField::MaxPrice => "maxPrice",
            FormField::MinBedrooms => "minBedrooms",
            FormField::MaxBedrooms => "maxBedrooms",
            FormField::DateAfter => "dateAfter",
            FormField::DateBefore => "dateBefore",
            FormField::Postcode => "postcode",
        }
    }
}

/// Raw text of every search input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub min_bedrooms: String,
    pub max_bedrooms: String,
    pub date_after: String,
    pub date_before: String,
    pub postcode: String,
}

impl SearchForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::PropertyType => &self.property_type,
            FormField::MinPrice => &self.min_price,
            FormField::MaxPrice => &self.max_price,
            FormField::MinBedrooms => &self.min_bedrooms,
            FormField::MaxBedrooms => &self.max_bedrooms,
            FormField::DateAfter => &self.date_after,
            FormField::DateBefore => &self.date_before,
            FormField::Postcode => &self.postcode,
        }
    }

    /// Stores `value` for `field`. Postcodes are cut to `POSTCODE_MAX_LEN` characters.
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::PropertyType => &mut self.property_type,
            FormField::MinPrice => &mut self.min_price,
            FormField::MaxPrice => &mut self.max_price,
            FormField::MinBedrooms => &mut self.min_bedrooms,
            FormField::MaxBedrooms => &mut self.max_bedrooms,
            FormField::DateAfter => &mut self.date_after,
            FormField::DateBefore => &mut self.date_before,
            FormField::Postcode => {
                self.postcode = value.chars().take(POSTCODE_MAX_LEN).collect();
                return;
            }
        };
        *slot = value;
    }

    /// Builds criteria from whatever parses, collecting an error for each
    /// field that was filled in but rejected.
    pub fn to_criteria_lossy(&self) -> (SearchCriteria, Vec<CriteriaError>) {
        let mut errors = Vec::new();
        let criteria = SearchCriteria {
            property_type: keep(&mut errors, parse_property_type(&self.property_type)),
            min_price: keep(&mut errors, parse_number(FormField::MinPrice, &self.min_price)),
            max_price: keep(&mut errors, parse_number(FormField::MaxPrice, &self.max_price)),
            min_bedrooms: keep(
                &mut errors,
                parse_number(FormField::MinBedrooms, &self.min_bedrooms),
            ),
            max_bedrooms: keep(
                &mut errors,
                parse_number(FormField::MaxBedrooms, &self.max_bedrooms),
            ),
            date_after: keep(&mut errors, parse_date(FormField::DateAfter, &self.date_after)),
            date_before: keep(&mut errors, parse_date(FormField::DateBefore, &self.date_before)),
            postcode: non_blank(&self.postcode).map(str::to_string),
        };
        (criteria, errors)
    }
}

impl TryFrom<&SearchForm> for SearchCriteria {
    type Error = CriteriaError;

    /// Strict conversion: fails on the first rejected field.
    fn try_from(form: &SearchForm) -> Result<Self, Self::Error> {
        let (criteria, errors) = form.to_criteria_lossy();
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(criteria),
        }
    }
}

fn keep<T>(
    errors: &mut Vec<CriteriaError>,
    result: Result<Option<T>, CriteriaError>,
) -> Option<T> {
    result.unwrap_or_else(|err| {
        errors.push(err);
        None
    })
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_property_type(raw: &str) -> Result<Option<PropertyType>, CriteriaError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("any") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

fn parse_number<T: std::str::FromStr>(
    field: FormField,
    raw: &str,
) -> Result<Option<T>, CriteriaError> {
    non_blank(raw)
        .map(|value| {
            value.parse().map_err(|_| CriteriaError::InvalidNumber {
                field: field.name(),
                value: value.to_string(),
            })
        })
        .transpose()
}

fn parse_date(field: FormField, raw: &str) -> Result<Option<NaiveDate>, CriteriaError> {
    non_blank(raw)
        .map(|value| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CriteriaError::InvalidDate {
                field: field.name(),
                value: value.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::fixtures::property;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = SearchCriteria::default();
        assert!(criteria.is_unconstrained());
        assert!(criteria.matches(&property(1, PropertyType::House, 1)));
        assert!(criteria.matches(&property(2, PropertyType::Flat, 0)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let p = property(1, PropertyType::House, 85_000_000);
        let exact = SearchCriteria {
            min_price: Some(85_000_000),
            max_price: Some(85_000_000),
            ..Default::default()
        };
        assert!(exact.matches(&p));

        let above = SearchCriteria {
            min_price: Some(85_000_001),
            ..Default::default()
        };
        assert!(!above.matches(&p));
    }

    #[test]
    fn bedrooms_and_dates_are_inclusive() {
        let mut p = property(1, PropertyType::Flat, 1);
        p.bedrooms = 3;
        p.date_added = date(2024, 11, 15);

        let criteria = SearchCriteria {
            min_bedrooms: Some(3),
            max_bedrooms: Some(3),
            date_after: Some(date(2024, 11, 15)),
            date_before: Some(date(2024, 11, 15)),
            ..Default::default()
        };
        assert!(criteria.matches(&p));

        let later = SearchCriteria {
            date_after: Some(date(2024, 11, 16)),
            ..Default::default()
        };
        assert!(!later.matches(&p));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let criteria = SearchCriteria {
            min_price: Some(10),
            max_price: Some(5),
            ..Default::default()
        };
        assert!(!criteria.matches(&property(1, PropertyType::House, 7)));
    }

    #[test]
    fn postcode_is_case_insensitive_substring() {
        let mut p = property(1, PropertyType::House, 1);
        p.postcode = "SW1A".to_string();
        let criteria = SearchCriteria {
            postcode: Some("w1a".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&p));

        let other = SearchCriteria {
            postcode: Some("NW1".to_string()),
            ..Default::default()
        };
        assert!(!other.matches(&p));
    }

    #[test]
    fn category_must_match_exactly() {
        let criteria = SearchCriteria {
            property_type: Some(PropertyType::Flat),
            ..Default::default()
        };
        assert!(!criteria.matches(&property(1, PropertyType::House, 1)));
        assert!(criteria.matches(&property(2, PropertyType::Flat, 1)));
    }

    #[test]
    fn blank_form_yields_no_constraints() {
        let form = SearchForm {
            property_type: "any".to_string(),
            postcode: "   ".to_string(),
            ..Default::default()
        };
        let (criteria, errors) = form.to_criteria_lossy();
        assert!(criteria.is_unconstrained());
        assert!(errors.is_empty());
    }

    #[test]
    fn lossy_conversion_drops_only_bad_fields() {
        let form = SearchForm {
            property_type: "house".to_string(),
            min_price: "lots".to_string(),
            max_price: "90000000".to_string(),
            date_after: "15/11/2024".to_string(),
            postcode: " 112 ".to_string(),
            ..Default::default()
        };
        let (criteria, errors) = form.to_criteria_lossy();

        assert_eq!(criteria.property_type, Some(PropertyType::House));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, Some(90_000_000));
        assert_eq!(criteria.date_after, None);
        assert_eq!(criteria.postcode.as_deref(), Some("112"));
        assert_eq!(
            errors,
            vec![
                CriteriaError::InvalidNumber {
                    field: "minPrice",
                    value: "lots".to_string()
                },
                CriteriaError::InvalidDate {
                    field: "dateAfter",
                    value: "15/11/2024".to_string()
                },
            ]
        );
    }

    #[test]
    fn strict_conversion_reports_first_error() {
        let form = SearchForm {
            min_bedrooms: "-1".to_string(),
            ..Default::default()
        };
        let err = SearchCriteria::try_from(&form).unwrap_err();
        assert!(matches!(
            err,
            CriteriaError::InvalidNumber {
                field: "minBedrooms",
                ..
            }
        ));

        let ok = SearchForm {
            min_bedrooms: "2".to_string(),
            date_before: "2024-12-31".to_string(),
            ..Default::default()
        };
        let criteria = SearchCriteria::try_from(&ok).unwrap();
        assert_eq!(criteria.min_bedrooms, Some(2));
        assert_eq!(criteria.date_before, Some(date(2024, 12, 31)));
    }

    #[test]
    fn postcode_input_is_truncated() {
        let mut form = SearchForm::default();
        form.set(FormField::Postcode, "ABCDEFGHIJKLMNOP".to_string());
        assert_eq!(form.value(FormField::Postcode), "ABCDEFGHIJ");

        form.set(FormField::MinPrice, "100".to_string());
        assert_eq!(form.min_price, "100");
    }
}
