//! Details page for a single listing: gallery, info card with tabs and the
//! contact sidebar.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{ContactAction, DetailsTab, Msg};
pub use props::PropertyDetailsProps;
pub use state::PropertyDetails;

impl Component for PropertyDetails {
    type Message = Msg;
    type Properties = PropertyDetailsProps;

    fn create(ctx: &Context<Self>) -> Self {
        PropertyDetails::new(&ctx.props().property)
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().property.id != old_props.property.id {
            *self = PropertyDetails::new(&ctx.props().property);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
