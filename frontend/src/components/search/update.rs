use common::search::filter;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SearchPage;

pub fn update(page: &mut SearchPage, ctx: &Context<SearchPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Search(criteria) => {
            page.results = filter(props.catalogue.properties(), &criteria);
            page.has_searched = true;
            true
        }
        Msg::DragStart(id) => {
            page.dragged = Some(id);
            false
        }
        Msg::DragEnd => {
            page.end_drag();
            false
        }
        Msg::DropToFavourites(payload) => {
            if let Some(property) = page.take_dropped(payload, &props.catalogue) {
                props.on_add_favourite.emit(property.clone());
            }
            false
        }
        Msg::DropToRemove(payload) => {
            if let Some(property) = page.take_dropped(payload, &props.catalogue) {
                props.on_remove_favourite.emit(property.id);
            }
            false
        }
    }
}
