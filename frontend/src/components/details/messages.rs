#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DetailsTab {
    #[default]
    Description,
    FloorPlan,
    Map,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 3] = [DetailsTab::Description, DetailsTab::FloorPlan, DetailsTab::Map];

    pub fn label(self) -> &'static str {
        match self {
            DetailsTab::Description => "Description",
            DetailsTab::FloorPlan => "Floor Plan",
            DetailsTab::Map => "Map",
        }
    }
}

/// Buttons in the contact sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactAction {
    RequestViewing,
    CallAgent,
    EmailAgent,
    ShareFacebook,
    ShareTwitter,
}

#[derive(Clone)]
pub enum Msg {
    NextImage,
    PrevImage,
    SelectImage(usize),
    SetTab(DetailsTab),
    Contact(ContactAction),
}
