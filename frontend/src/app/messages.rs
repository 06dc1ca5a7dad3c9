use common::model::property::Property;

#[derive(Clone)]
pub enum Msg {
    ToggleFavourite(Property),
    AddFavourite(Property),
    RemoveFavourite(u32),
    ClearFavourites,
    ViewProperty(Property),
    BackToSearch,
}
