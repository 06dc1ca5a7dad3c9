use common::model::property::Property;
use yew::prelude::*;

/// Properties for `PropertyDetails`.
#[derive(Properties, PartialEq, Clone)]
pub struct PropertyDetailsProps {
    /// The selected listing.
    pub property: Property,

    /// Drives the heart button state.
    pub is_favourite: bool,

    pub on_toggle_favourite: Callback<Property>,

    /// `← Back to Search`.
    pub on_back: Callback<()>,
}
