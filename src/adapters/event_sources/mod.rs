pub mod cloudtrail_source;
pub mod json_file_source;
