use std::rc::Rc;

use common::catalogue::Catalogue;
use common::model::favourites::Favourites;
use common::model::property::Property;
use yew::prelude::*;

/// Properties for the `SearchPage`.
#[derive(Properties, PartialEq, Clone)]
pub struct SearchPageProps {
    /// The full catalogue; searches run over it and drops are resolved against it.
    pub catalogue: Rc<Catalogue>,

    pub favourites: Favourites,

    /// Heart buttons on the result cards.
    pub on_toggle_favourite: Callback<Property>,

    /// A card was dropped on the favourites panel.
    pub on_add_favourite: Callback<Property>,

    /// Remove button or the remove drop zone.
    pub on_remove_favourite: Callback<u32>,

    pub on_clear_favourites: Callback<()>,

    /// Opens the details page.
    pub on_view_property: Callback<Property>,
}
