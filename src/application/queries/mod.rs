pub mod articles;
pub mod report;
