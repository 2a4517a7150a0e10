pub mod aws;
pub mod catalogs;
pub mod event_sources;
