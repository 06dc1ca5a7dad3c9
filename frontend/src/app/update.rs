use super::messages::Msg;
use super::state::App;

/// Applies `msg` to the root state. Every message changes what is rendered.
pub fn update(app: &mut App, msg: Msg) -> bool {
    match msg {
        Msg::ToggleFavourite(property) => {
            app.favourites.toggle(&property);
        }
        Msg::AddFavourite(property) => {
            app.favourites.add(&property);
        }
        Msg::RemoveFavourite(id) => {
            app.favourites.remove(id);
        }
        Msg::ClearFavourites => {
            app.favourites.clear();
        }
        Msg::ViewProperty(property) => {
            app.view.select(property);
        }
        Msg::BackToSearch => {
            app.view.back();
        }
    }
    true
}
