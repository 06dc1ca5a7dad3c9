//! Search page: header, search form, results grid and the favourites sidebar.
//!
//! The page owns the current results and the drag-and-drop bookkeeping. The
//! favourites themselves belong to the application root and are changed only
//! through the callbacks in `SearchPageProps`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SearchPageProps;
pub use state::SearchPage;

impl Component for SearchPage {
    type Message = Msg;
    type Properties = SearchPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SearchPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
