pub mod ranking;
pub mod report;
