pub mod commands;
pub mod dto;
pub mod error;
pub mod import;
pub mod normalize;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
