pub mod csv_export;
pub mod extractor;
pub mod fetcher;

pub use csv_export::*;
pub use extractor::*;
pub use fetcher::*;
