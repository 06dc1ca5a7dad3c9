use common::model::favourites::Favourites;
use common::model::property::Property;
use common::search::ResultsSummary;
use yew::prelude::*;

use crate::components::property_card::PropertyCard;

#[derive(Properties, PartialEq)]
pub struct PropertyListProps {
    pub properties: Vec<Property>,
    pub summary: ResultsSummary,
    pub favourites: Favourites,
    pub on_toggle_favourite: Callback<Property>,
    pub on_view_property: Callback<Property>,
    pub on_drag_start: Callback<u32>,
    pub on_drag_end: Callback<()>,
}

/// Results grid with a count heading, empty-result tips and a summary footer.
pub struct PropertyList;

impl Component for PropertyList {
    type Message = ();
    type Properties = PropertyListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PropertyList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let summary = props.summary;

        let cards = props
            .properties
            .iter()
            .map(|property| {
                html! {
                    <PropertyCard
                        key={property.id}
                        property={property.clone()}
                        is_favourite={props.favourites.contains(property.id)}
                        on_toggle_favourite={props.on_toggle_favourite.clone()}
                        on_view_property={props.on_view_property.clone()}
                        on_drag_start={props.on_drag_start.clone()}
                        on_drag_end={props.on_drag_end.clone()}
                    />
                }
            })
            .collect::<Html>();

        html! {
            <div class="property-list-container">
                <div class="results-header">
                    <h2 class="results-title">{summary.heading()}</h2>
                    if summary.is_empty_search() {
                        { no_results() }
                    }
                </div>

                if !props.properties.is_empty() {
                    <div class="property-grid">{ cards }</div>
                }

                if let Some(footer) = summary.footer() {
                    <div class="results-footer">
                        <p class="results-summary">{footer}</p>
                    </div>
                }
            </div>
        }
    }
}

fn no_results() -> Html {
    html! {
        <div class="no-results-container">
            <p class="no-results-message">
                {"We couldn't find any properties matching your search criteria."}
            </p>
            <p class="no-results-suggestion">{"Try adjusting your filters to see more results:"}</p>
            <ul class="no-results-tips">
                <li>{"Increase your price range"}</li>
                <li>{"Expand the number of bedrooms"}</li>
                <li>{"Try a different postcode area"}</li>
                <li>{"Adjust the date range"}</li>
            </ul>
        </div>
    }
}
