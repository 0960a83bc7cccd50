pub mod scraper;
pub mod wordpress;
