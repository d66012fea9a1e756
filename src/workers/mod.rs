//! Background fetch workers feeding the dashboard view

pub mod core;
pub mod fetcher;

pub use self::core::EventSender;
pub use fetcher::spawn_fetchers;
