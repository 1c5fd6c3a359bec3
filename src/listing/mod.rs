pub mod filter;
pub mod storage;
pub mod types;

pub use filter::active_listings;
pub use storage::load_listings;
pub use types::Listing;
