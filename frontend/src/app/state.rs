use std::rc::Rc;

use common::catalogue::Catalogue;
use common::model::favourites::Favourites;
use common::model::view::View;

/// Root state shared by every page.
pub struct App {
    /// Embedded listings, or the reason they could not be decoded.
    pub catalogue: Result<Rc<Catalogue>, String>,

    /// Page currently on screen.
    pub view: View,

    pub favourites: Favourites,
}

impl App {
    pub fn new() -> Self {
        let catalogue = Catalogue::embedded()
            .map(Rc::new)
            .map_err(|err| {
                gloo_console::error!(format!("failed to load listings: {err}"));
                err.to_string()
            });

        Self {
            catalogue,
            view: View::default(),
            favourites: Favourites::new(),
        }
    }
}
