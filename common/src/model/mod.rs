pub mod criteria;
pub mod favourites;
pub mod gallery;
pub mod property;
pub mod view;
