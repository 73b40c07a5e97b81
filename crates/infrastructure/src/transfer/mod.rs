pub mod dig;

pub use dig::DigZoneTransferClient;
