use common::model::gallery::Gallery;
use common::model::property::Property;

use super::messages::DetailsTab;

pub struct PropertyDetails {
    /// Position in the image gallery.
    pub gallery: Gallery,

    pub active_tab: DetailsTab,
}

impl PropertyDetails {
    /// Fresh page state for `property`: first image, description tab.
    pub fn new(property: &Property) -> Self {
        Self {
            gallery: Gallery::new(property.images.len()),
            active_tab: DetailsTab::default(),
        }
    }
}
