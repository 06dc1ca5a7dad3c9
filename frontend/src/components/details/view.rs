//! View rendering for the details page.
//!
//! Layout: a header with the back button, then a two-column grid. The main
//! column holds the gallery and the info card (price, favourite toggle,
//! feature row, tabs); the sidebar holds the contact card.

use common::model::property::Property;
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{asset_url, format_date, format_price, image_fallback};

use super::messages::{ContactAction, DetailsTab, Msg};
use super::state::PropertyDetails;

pub fn view(details: &PropertyDetails, ctx: &Context<PropertyDetails>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let property = &props.property;

    html! {
        <div class="property-details-page">
            <header class="property-details-header">
                <div class="header-content">
                    <button class="back-button" onclick={props.on_back.reform(|_: MouseEvent| ())}>
                        {"← Back to Search"}
                    </button>
                    <h1 class="property-title">{property.short_desc.clone()}</h1>
                    <p class="property-location">{property.location.clone()}</p>
                </div>
            </header>

            <div class="property-details-container">
                <div class="property-details-main">
                    { build_gallery(details, property, link) }
                    { build_info_card(details, ctx) }
                </div>
                { build_contact_sidebar(property, link) }
            </div>
        </div>
    }
}

/// Main image with wrap-around navigation, counter and thumbnail strip.
fn build_gallery(
    details: &PropertyDetails,
    property: &Property,
    link: &Scope<PropertyDetails>,
) -> Html {
    let current = details.gallery.index();
    let main_src = property
        .images
        .get(current)
        .map(|path| asset_url(path))
        .unwrap_or_default();

    let thumbnails = property
        .images
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            html! {
                <img
                    key={idx}
                    src={asset_url(path)}
                    alt={format!("Thumbnail {}", idx + 1)}
                    class={classes!("thumbnail", (idx == current).then_some("thumbnail-active"))}
                    onclick={link.callback(move |_| Msg::SelectImage(idx))}
                    onerror={image_fallback()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="image-gallery">
            <div class="main-image-container">
                <img
                    src={main_src}
                    alt={format!("Property {}", current + 1)}
                    class="main-image"
                    onerror={image_fallback()}
                />
                <button
                    class="gallery-nav-button gallery-nav-prev"
                    aria-label="Previous image"
                    onclick={link.callback(|_| Msg::PrevImage)}
                >
                    {"‹"}
                </button>
                <button
                    class="gallery-nav-button gallery-nav-next"
                    aria-label="Next image"
                    onclick={link.callback(|_| Msg::NextImage)}
                >
                    {"›"}
                </button>
                <div class="image-counter">{details.gallery.counter()}</div>
            </div>
            <div class="thumbnail-gallery">{ thumbnails }</div>
        </div>
    }
}

fn build_info_card(details: &PropertyDetails, ctx: &Context<PropertyDetails>) -> Html {
    let link = ctx.link();
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

    let tab_buttons = DetailsTab::ALL
        .into_iter()
        .map(|tab| {
            html! {
                <button
                    class={classes!("tab-button", (tab == details.active_tab).then_some("tab-active"))}
                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="property-info-card">
            <div class="property-info-header">
                <h2 class="property-price-large">{format_price(property.price)}</h2>
                <button
                    class="favourite-button-large"
                    title={favourite_label}
                    aria-label={favourite_label}
                    onclick={on_favourite}
                >
                    <span class={classes!("heart-icon-large", props.is_favourite.then_some("heart-icon-filled"))}>
                        {"♥"}
                    </span>
                </button>
            </div>

            <div class="property-features-large">
                <span class="feature-item">{property.property_type.label()}</span>
                <span class="feature-item">{format!("{} Bedrooms", property.bedrooms)}</span>
                <span class="feature-item">{property.postcode.clone()}</span>
                <span class="feature-item">{format!("Added {}", format_date(property.date_added))}</span>
            </div>

            <div class="tabs-container">
                <div class="tabs-header">{ tab_buttons }</div>
                <div class="tabs-content">{ build_tab_panel(details.active_tab, property) }</div>
            </div>
        </div>
    }
}

fn build_tab_panel(tab: DetailsTab, property: &Property) -> Html {
    match tab {
        DetailsTab::Description => html! {
            <div class="tab-panel">
                <h3 class="tab-heading">{"Property Description"}</h3>
                <p class="property-description-full">{property.long_desc.clone()}</p>
            </div>
        },
        DetailsTab::FloorPlan => html! {
            <div class="tab-panel">
                <h3 class="tab-heading">{"Floor Plan"}</h3>
                <img
                    src={asset_url(&property.floor_plan)}
                    alt="Floor plan"
                    class="floor-plan-image"
                    onerror={image_fallback()}
                />
            </div>
        },
        DetailsTab::Map => html! {
            <div class="tab-panel">
                <h3 class="tab-heading">{"Location Map"}</h3>
                <div class="map-placeholder">
                    <p class="map-location">{property.location.clone()}</p>
                    <p class="map-postcode">{format!("Postcode: {}", property.postcode)}</p>
                    <p class="map-note">{"Interactive map coming soon"}</p>
                </div>
            </div>
        },
    }
}

fn build_contact_sidebar(property: &Property, link: &Scope<PropertyDetails>) -> Html {
    let contact = |action: ContactAction, class: &'static str, label: &'static str| {
        html! {
            <button class={class} onclick={link.callback(move |_| Msg::Contact(action))}>
                {label}
            </button>
        }
    };

    html! {
        <aside class="property-details-sidebar">
            <div class="contact-card">
                <h3 class="contact-heading">{"Contact Agent"}</h3>
                <div class="contact-buttons">
                    { contact(ContactAction::RequestViewing, "contact-button contact-button-primary", "Request Viewing") }
                    { contact(ContactAction::CallAgent, "contact-button contact-button-secondary", "Call Agent") }
                    { contact(ContactAction::EmailAgent, "contact-button contact-button-tertiary", "Email Agent") }
                </div>

                <div class="property-reference">
                    <h4 class="reference-label">{"Property Reference"}</h4>
                    <p class="reference-value">{property.reference()}</p>

                    <h4 class="reference-label">{"Share Property"}</h4>
                    <div class="share-buttons">
                        { contact(ContactAction::ShareFacebook, "share-button share-facebook", "Facebook") }
                        { contact(ContactAction::ShareTwitter, "share-button share-twitter", "Twitter") }
                    </div>
                </div>
            </div>
        </aside>
    }
}
