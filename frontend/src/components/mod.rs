pub mod details;
pub mod favourites_list;
pub mod footer;
pub mod property_card;
pub mod property_list;
pub mod search;
pub mod search_form;
