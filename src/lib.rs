//! In-memory article catalogue with derived slugs.
//!
//! Validated article entities, a slug-unique repository, and the report and
//! import helpers driven by the `article_desk` command line.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
