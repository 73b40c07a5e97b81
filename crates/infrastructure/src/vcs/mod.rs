pub mod git_publisher;

pub use git_publisher::GitPublisher;
