use common::model::criteria::SearchCriteria;

#[derive(Clone)]
pub enum Msg {
    Search(SearchCriteria),
    DragStart(u32),
    /// The drag finished, whether or not it landed on a drop zone.
    DragEnd,
    /// Dropped on the favourites panel. Carries the id read from the drag payload, if any.
    DropToFavourites(Option<u32>),
    /// Dropped on the "drag here to remove" zone.
    DropToRemove(Option<u32>),
}
