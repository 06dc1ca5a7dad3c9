use chrono::NaiveDate;
use common::catalogue::Catalogue;
use common::model::criteria::{SearchCriteria, SearchForm};
use common::model::favourites::Favourites;
use common::model::property::{Property, PropertyType};
use common::model::view::View;
use common::search::filter;
use proptest::prelude::*;

fn listing(id: u32, property_type: PropertyType, price: u64) -> Property {
    Property {
        id,
        property_type,
        price,
        bedrooms: 3,
        date_added: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        postcode: "00300".to_string(),
        location: "Colombo".to_string(),
        short_desc: format!("Listing {id}"),
        long_desc: String::new(),
        images: vec![format!("images/image{id}.jpg")],
        floor_plan: "images/plan.jpg".to_string(),
    }
}

fn arb_property_type() -> impl Strategy<Value = PropertyType> {
    prop_oneof![Just(PropertyType::House), Just(PropertyType::Flat)]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|days| {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Duration::days(days)
    })
}

fn arb_properties() -> impl Strategy<Value = Vec<Property>> {
    prop::collection::vec(
        (
            arb_property_type(),
            0u64..300_000_000,
            0u32..8,
            arb_date(),
            "[0-9A-Za-z]{3,5}",
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (property_type, price, bedrooms, date_added, postcode))| {
                let mut p = listing(i as u32 + 1, property_type, price);
                p.bedrooms = bedrooms;
                p.date_added = date_added;
                p.postcode = postcode;
                p
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = SearchCriteria> {
    (
        prop::option::of(arb_property_type()),
        prop::option::of(0u64..300_000_000),
        prop::option::of(0u64..300_000_000),
        prop::option::of(0u32..8),
        prop::option::of(0u32..8),
        prop::option::of(arb_date()),
        prop::option::of(arb_date()),
        prop::option::of("[0-9a-z]{1,2}"),
    )
        .prop_map(
            |(
                property_type,
                min_price,
                max_price,
                min_bedrooms,
                max_bedrooms,
                date_after,
                date_before,
                postcode,
            )| SearchCriteria {
                property_type,
                min_price,
                max_price,
                min_bedrooms,
                max_bedrooms,
                date_after,
                date_before,
                postcode,
            },
        )
}

proptest! {
    #[test]
    fn unconstrained_search_returns_everything(properties in arb_properties()) {
        let results = filter(&properties, &SearchCriteria::default());
        prop_assert_eq!(results, properties);
    }

    #[test]
    fn filtering_is_idempotent(properties in arb_properties(), criteria in arb_criteria()) {
        let once = filter(&properties, &criteria);
        let twice = filter(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn results_are_an_ordered_subset(properties in arb_properties(), criteria in arb_criteria()) {
        let results = filter(&properties, &criteria);
        let mut source = properties.iter();
        for found in &results {
            prop_assert!(criteria.matches(found));
            prop_assert!(source.any(|p| p == found));
        }
    }

    #[test]
    fn double_toggle_restores_the_set(
        properties in arb_properties(),
        preselected in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!properties.is_empty());
        let mut favourites = Favourites::new();
        for index in &preselected {
            favourites.add(index.get(&properties));
        }
        let mut before = favourites.ids();
        before.sort_unstable();

        let target = pick.get(&properties);
        favourites.toggle(target);
        favourites.toggle(target);

        let mut after = favourites.ids();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn clear_always_empties(
        properties in arb_properties(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut favourites = Favourites::new();
        if !properties.is_empty() {
            for index in &picks {
                favourites.toggle(index.get(&properties));
            }
        }
        favourites.clear();
        prop_assert!(favourites.is_empty());
    }
}

#[test]
fn house_above_eighty_million() {
    let sample = vec![
        listing(1, PropertyType::House, 85_000_000),
        listing(2, PropertyType::Flat, 55_000_000),
    ];
    let criteria = SearchCriteria {
        property_type: Some(PropertyType::House),
        min_price: Some(80_000_000),
        ..Default::default()
    };
    let results = filter(&sample, &criteria);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
}

#[test]
fn select_then_back_returns_to_search() {
    let mut view = View::default();
    view.select(listing(1, PropertyType::House, 85_000_000));
    assert!(!view.is_search());
    view.back();
    assert!(view.is_search());
    assert_eq!(view.selected(), None);
}

#[test]
fn form_search_over_embedded_catalogue() {
    let catalogue = Catalogue::embedded().unwrap();
    let form = SearchForm {
        property_type: "flat".to_string(),
        min_bedrooms: "2".to_string(),
        ..Default::default()
    };
    let criteria = SearchCriteria::try_from(&form).unwrap();
    let ids: Vec<u32> = filter(catalogue.properties(), &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![2, 6]);
}

#[test]
fn postcode_search_over_embedded_catalogue() {
    let catalogue = Catalogue::embedded().unwrap();
    let criteria = SearchCriteria {
        postcode: Some("11222".to_string()),
        ..Default::default()
    };
    let ids: Vec<u32> = filter(catalogue.properties(), &criteria)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 7]);
}
