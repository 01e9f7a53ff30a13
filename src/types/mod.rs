pub mod config;
pub mod crop;
pub mod report;
pub mod soil;
pub mod weather;
