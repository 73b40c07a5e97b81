pub mod nameserver_cache;
pub mod nameserver_resolver;
pub mod tld_source;

pub use nameserver_cache::NameserverCache;
pub use nameserver_resolver::NameserverResolver;
pub use tld_source::TldSource;
