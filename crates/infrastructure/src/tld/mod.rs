pub mod iana_fetcher;
pub mod json_cache;

pub use iana_fetcher::IanaTldFetcher;
pub use json_cache::JsonTldCacheStore;
