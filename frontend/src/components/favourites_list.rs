//! Favourites sidebar. Accepts dropped cards, lists the saved records and
//! offers a drop zone for removing them.

use common::model::favourites::Favourites;
use common::model::property::Property;
use yew::prelude::*;

use crate::components::property_card::{drag_end, drag_start};
use crate::helpers::{asset_url, format_price, image_fallback};

#[derive(Properties, PartialEq)]
pub struct FavouritesListProps {
    pub favourites: Favourites,
    pub on_view_property: Callback<Property>,
    pub on_remove: Callback<u32>,
    pub on_clear: Callback<()>,
    pub on_drop_to_favourites: Callback<Option<u32>>,
    pub on_drop_to_remove: Callback<Option<u32>>,
    pub on_drag_start: Callback<u32>,
    pub on_drag_end: Callback<()>,
}

pub struct FavouritesList;

impl Component for FavouritesList {
    type Message = ();
    type Properties = FavouritesListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FavouritesList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let favourites = &props.favourites;

        html! {
            <div
                id="favourites"
                class="favourites-container"
                ondragover={Callback::from(allow_drop)}
                ondrop={drop_handler(props.on_drop_to_favourites.clone())}
            >
                <div class="favourites-header">
                    <h3 class="favourites-title">{format!("Favourites ({})", favourites.len())}</h3>
                    if !favourites.is_empty() {
                        <button
                            class="clear-button"
                            title="Clear all favourites"
                            aria-label="Clear all favourites"
                            onclick={props.on_clear.reform(|_: MouseEvent| ())}
                        >
                            {"🗑"}
                        </button>
                    }
                </div>

                <div class="drop-instructions">{"Drag properties here or click the heart icon"}</div>

                <div class="favourites-list">
                    if favourites.is_empty() {
                        <p class="no-favourites-message">{"No favourites yet"}</p>
                    } else {
                        { for favourites.iter().map(|property| favourite_item(property, props)) }
                    }
                </div>

                if !favourites.is_empty() {
                    <div
                        class="remove-drop-zone"
                        ondragover={Callback::from(allow_drop)}
                        ondrop={drop_handler(props.on_drop_to_remove.clone())}
                    >
                        {"Drag here to remove"}
                    </div>
                }
            </div>
        }
    }
}

fn favourite_item(property: &Property, props: &FavouritesListProps) -> Html {
    let on_view = {
        let property = property.clone();
        props
            .on_view_property
            .reform(move |_: MouseEvent| property.clone())
    };
    let id = property.id;

    html! {
        <div
            key={id}
            class="favourite-item"
            draggable="true"
            ondragstart={drag_start(id, props.on_drag_start.clone())}
            ondragend={drag_end(props.on_drag_end.clone())}
        >
            <img
                src={asset_url(property.thumbnail().unwrap_or_default())}
                alt={property.short_desc.clone()}
                class="favourite-image"
                onerror={image_fallback()}
            />
            <div class="favourite-content">
                <p class="favourite-price">{format_price(property.price)}</p>
                <p class="favourite-desc">{property.short_desc.clone()}</p>
                <div class="favourite-actions">
                    <button class="favourite-view-button" onclick={on_view}>{"View"}</button>
                    <button
                        class="favourite-remove-button"
                        title="Remove from favourites"
                        aria-label="Remove from favourites"
                        onclick={props.on_remove.reform(move |_: MouseEvent| id)}
                    >
                        {"✕"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn allow_drop(e: DragEvent) {
    e.prevent_default();
    if let Some(transfer) = e.data_transfer() {
        transfer.set_drop_effect("move");
    }
}

/// Reads the dragged id from the payload and stops the event so a drop on the
/// remove zone never reaches the surrounding panel.
fn drop_handler(target: Callback<Option<u32>>) -> Callback<DragEvent> {
    Callback::from(move |e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        let payload = e
            .data_transfer()
            .and_then(|t| t.get_data("text/plain").ok())
            .and_then(|raw| raw.trim().parse::<u32>().ok());
        target.emit(payload);
    })
}
