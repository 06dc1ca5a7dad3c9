use yew::prelude::*;

use crate::components::favourites_list::FavouritesList;
use crate::components::property_list::PropertyList;
use crate::components::search_form::SearchFormComponent;
use crate::helpers::{asset_url, image_fallback};

use super::messages::Msg;
use super::state::SearchPage;

pub fn view(page: &SearchPage, ctx: &Context<SearchPage>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let displayed = page.displayed(props.catalogue.properties()).to_vec();

    html! {
        <div class="search-page">
            { header() }

            <div class="search-container">
                <div class="search-main" id="search">
                    <SearchFormComponent on_search={link.callback(Msg::Search)} />

                    <PropertyList
                        properties={displayed}
                        summary={page.summary(props.catalogue.properties())}
                        favourites={props.favourites.clone()}
                        on_toggle_favourite={props.on_toggle_favourite.clone()}
                        on_view_property={props.on_view_property.clone()}
                        on_drag_start={link.callback(Msg::DragStart)}
                        on_drag_end={link.callback(|_| Msg::DragEnd)}
                    />
                </div>

                <aside class="search-sidebar">
                    <FavouritesList
                        favourites={props.favourites.clone()}
                        on_view_property={props.on_view_property.clone()}
                        on_remove={props.on_remove_favourite.clone()}
                        on_clear={props.on_clear_favourites.clone()}
                        on_drop_to_favourites={link.callback(Msg::DropToFavourites)}
                        on_drop_to_remove={link.callback(Msg::DropToRemove)}
                        on_drag_start={link.callback(Msg::DragStart)}
                        on_drag_end={link.callback(|_| Msg::DragEnd)}
                    />
                </aside>
            </div>
        </div>
    }
}

fn header() -> Html {
    html! {
        <header class="search-header">
            <div class="header-content">
                <div class="logo-container">
                    <img
                        src={asset_url("images/logoImage.png")}
                        alt="PrimeHomes Logo"
                        class="site-logo"
                        onerror={image_fallback()}
                    />
                    <div>
                        <h1 class="site-title">{"PrimeHomes"}</h1>
                        <p class="site-tagline">{"Find Your Perfect Property"}</p>
                    </div>
                </div>
            </div>
        </header>
    }
}
