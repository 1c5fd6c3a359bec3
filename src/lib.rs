pub mod config;
pub mod listing;
pub mod output;
pub mod scoring;
