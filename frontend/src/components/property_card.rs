use common::model::property::Property;
use yew::prelude::*;

use crate::helpers::{asset_url, format_price, image_fallback};

#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub property: Property,
    pub is_favourite: bool,
    pub on_toggle_favourite: Callback<Property>,
    pub on_view_property: Callback<Property>,
    pub on_drag_start: Callback<u32>,
    pub on_drag_end: Callback<()>,
}

/// Result card with thumbnail, price, features and a heart toggle.
pub struct PropertyCard;

impl Component for PropertyCard {
    type Message = ();
    type Properties = PropertyCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PropertyCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let property = &props.property;
        let favourite_label = if props.is_favourite {
            "Already in favourites"
        } else {
            "Add to favourites"
        };

        let on_favourite = {
            let property = property.clone();
            props
                .on_toggle_favourite
                .reform(move |_: MouseEvent| property.clone())
        };
        let on_view = {
            let property = property.clone();
            props
                .on_view_property
                .reform(move |_: MouseEvent| property.clone())
        };

        html! {
            <div
                class="property-card"
                draggable="true"
                ondragstart={drag_start(property.id, props.on_drag_start.clone())}
                ondragend={drag_end(props.on_drag_end.clone())}
            >
                <div class="property-card-image-container">
                    <img
                        src={asset_url(property.thumbnail().unwrap_or_default())}
                        alt={property.short_desc.clone()}
                        class="property-card-image"
                        loading="lazy"
                        onerror={image_fallback()}
                    />
                    <div class="property-type-badge">{property.property_type.label()}</div>
                    <button
                        class="favourite-button"
                        title={favourite_label}
                        aria-label={favourite_label}
                        onclick={on_favourite}
                    >
                        <span class={classes!("heart-icon", props.is_favourite.then_some("heart-icon-filled"))}>
                            {"♥"}
                        </span>
                    </button>
                </div>

                <div class="property-card-content">
                    <h3 class="property-price">{format_price(property.price)}</h3>
                    <p class="property-description">{property.short_desc.clone()}</p>

                    <div class="property-features">
                        <span class="property-feature" title="Property Type">
                            {property.property_type.label()}
                        </span>
                        <span class="property-feature" title="Bedrooms">
                            {property.bedrooms_label()}
                        </span>
                        <span class="property-feature" title="Postcode">
                            {property.postcode.clone()}
                        </span>
                    </div>

                    <button
                        class="view-details-button"
                        aria-label={format!("View details for {}", property.short_desc)}
                        onclick={on_view}
                    >
                        {"View Details"}
                    </button>
                </div>
            </div>
        }
    }
}

/// `ondragstart` handler that puts the property id in the drag payload and
/// reports it to the page.
pub fn drag_start(id: u32, on_drag_start: Callback<u32>) -> Callback<DragEvent> {
    Callback::from(move |e: DragEvent| {
        if let Some(transfer) = e.data_transfer() {
            transfer.set_effect_allowed("move");
            transfer.set_data("text/plain", &id.to_string()).ok();
        }
        on_drag_start.emit(id);
    })
}

/// `ondragend` handler. Fires after a drop and also when the drag is cancelled,
/// so the page can forget the id it remembered at drag start.
pub fn drag_end(on_drag_end: Callback<()>) -> Callback<DragEvent> {
    on_drag_end.reform(|_: DragEvent| ())
}
