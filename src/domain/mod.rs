pub mod listing;
pub mod search_request;

pub use listing::*;
pub use search_request::*;
