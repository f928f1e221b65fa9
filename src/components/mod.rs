//! UI Components
//!
//! Leptos components for the listing and detail pages.

mod career_card;
mod detail_page;
mod error_alert;
mod filter_bar;
mod listing_page;
mod pagination_nav;
mod search_bar;

pub use career_card::CareerCard;
pub use detail_page::DetailPage;
pub use error_alert::ErrorAlert;
pub use filter_bar::FilterBar;
pub use listing_page::ListingPage;
pub use pagination_nav::PaginationNav;
pub use search_bar::SearchBar;
