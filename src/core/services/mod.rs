pub mod history_correlator;
pub mod name_matcher;
pub mod payload_decoder;
