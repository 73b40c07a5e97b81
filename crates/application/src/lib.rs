//! zonewatch application layer: capability ports, the nameserver
//! resolver/cache, the TLD source and the sweep use cases.
pub mod ports;
pub mod services;
pub mod use_cases;
