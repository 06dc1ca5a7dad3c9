use crate::helpers::show_toast;

use super::messages::{ContactAction, Msg};
use super::state::PropertyDetails;

pub fn update(details: &mut PropertyDetails, msg: Msg) -> bool {
    match msg {
        Msg::NextImage => details.gallery.next(),
        Msg::PrevImage => details.gallery.prev(),
        Msg::SelectImage(index) => details.gallery.select(index),
        Msg::SetTab(tab) => details.active_tab = tab,
        Msg::Contact(action) => {
            show_toast(contact_message(action));
            return false;
        }
    }
    true
}

fn contact_message(action: ContactAction) -> &'static str {
    match action {
        ContactAction::RequestViewing => "Viewing request sent. An agent will be in touch shortly.",
        ContactAction::CallAgent => "An agent will call you back shortly.",
        ContactAction::EmailAgent => "Email our agents at info@primehomes.lk.",
        ContactAction::ShareFacebook => "Sharing to Facebook is not available yet.",
        ContactAction::ShareTwitter => "Sharing to Twitter is not available yet.",
    }
}
