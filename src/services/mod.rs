pub mod detail_scraper;
pub mod filmography_writer;
pub mod listing_resolver;

pub use detail_scraper::DetailScraper;
pub use filmography_writer::FilmographyWriter;
pub use listing_resolver::{ListingResolver, ScrollPolicy};
