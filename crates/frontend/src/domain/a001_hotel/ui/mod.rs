pub mod details;
pub mod filters;
pub mod hotel_box;
pub mod search_page;
pub mod stars;
