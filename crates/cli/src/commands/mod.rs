pub mod config_cmd;
pub mod join;
pub mod selectors;
