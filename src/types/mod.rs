pub mod config;
pub mod criterion;
pub mod evaluation;
pub mod report;
pub mod semester;
