pub mod aggregate;
pub mod catalog;
pub mod filter;
pub mod hotel_box;
pub mod search_page;

pub use aggregate::{Hotel, Price, Rate};
pub use catalog::{CatalogError, HotelCatalog};
pub use filter::{FilterUpdate, HotelFilter};
pub use hotel_box::DetailsState;
pub use search_page::SearchPageController;
