pub mod catalog;
pub mod event_source;
