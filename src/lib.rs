pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod lemmatizer;
pub mod report;
