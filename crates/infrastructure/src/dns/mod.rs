pub mod forwarding;
pub mod ns_lookup;
pub mod transport;

pub use ns_lookup::HickoryNameserverLookup;
