use common::model::view::View;
use yew::prelude::*;

use crate::components::details::PropertyDetails;
use crate::components::footer::Footer;
use crate::components::search::SearchPage;

use super::messages::Msg;
use super::state::App;

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();

    let page = match &app.catalogue {
        Err(reason) => html! {
            <div class="load-error" role="alert">
                <h2>{"Listings are unavailable"}</h2>
                <p>{reason.clone()}</p>
            </div>
        },
        Ok(catalogue) => match &app.view {
            View::Search => html! {
                <SearchPage
                    catalogue={catalogue.clone()}
                    favourites={app.favourites.clone()}
                    on_toggle_favourite={link.callback(Msg::ToggleFavourite)}
                    on_add_favourite={link.callback(Msg::AddFavourite)}
                    on_remove_favourite={link.callback(Msg::RemoveFavourite)}
                    on_clear_favourites={link.callback(|_| Msg::ClearFavourites)}
                    on_view_property={link.callback(Msg::ViewProperty)}
                />
            },
            View::Details(property) => html! {
                <PropertyDetails
                    property={property.clone()}
                    is_favourite={app.favourites.contains(property.id)}
                    on_toggle_favourite={link.callback(Msg::ToggleFavourite)}
                    on_back={link.callback(|_| Msg::BackToSearch)}
                />
            },
        },
    };

    html! {
        <div class="app">
            { page }
            <Footer />
        </div>
    }
}
