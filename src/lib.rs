//! MOI Analyzer - batch parsing of JVC camcorder .MOI metadata files
//!
//! The parsing itself lives in the `moi-core` crate; this crate adds the
//! batch worker pool, configuration, and result rendering around it.

pub mod config;
pub mod processing;
pub mod report;

// Re-export main types for easy access
pub use crate::config::Config;
pub use crate::processing::{BatchOutcome, BatchParser, BatchStats};
pub use crate::report::{render_failure_table, render_moi_table, BatchReport};
pub use moi_core::{
    AspectRatio, MoiFile, MoiParser, ParseError, ParseFailure, PathError, TvSystem,
};
