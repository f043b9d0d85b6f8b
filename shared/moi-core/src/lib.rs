//! MOI Core - parsing of JVC camcorder .MOI metadata files
//!
//! MOI files are fixed-layout binary sidecars written next to MOD/TOD video
//! content. This crate reads them: field extraction, record decoding, and
//! resolution of a user path into the files to decode. Rendering and batch
//! orchestration live in the application crate.

mod fields;
pub mod moi_file;
pub mod parser;
pub mod paths;

pub use moi_file::{AspectRatio, MoiFile, TvSystem};
pub use parser::{MoiParser, MIN_MOI_LEN};
pub use paths::resolve_moi_paths;

use std::path::PathBuf;

/// Result type for parsing a single MOI buffer
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error raised while parsing a single MOI buffer or reading its file
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error(
        "file does not contain enough data: needed {needed} byte(s) at offset {offset:#04x}, file is {available} bytes"
    )]
    Bounds {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error(
        "could not parse the creation date: {day:02}/{month:02}/{year:04} {hour:02}:{minute:02} is not a valid date and time"
    )]
    CreationDate {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    },

    #[error("could not parse the video length: {0} ms could not be converted to a length of time")]
    VideoLength(u32),

    #[error("could not read the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected error during parsing: {0}")]
    Unknown(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ParseError {
    /// Stable identifier for diagnostics tables, one per error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Bounds { .. } => "Bounds",
            ParseError::CreationDate { .. } => "CreationDate",
            ParseError::VideoLength(_) => "VideoLength",
            ParseError::Io(_) => "Io",
            ParseError::Unknown(_) => "Unknown",
        }
    }
}

/// A parse error tied to the file that produced it.
///
/// The parser itself never sees a path; the batch layer attaches one to
/// every error so diagnostics can name the offending file.
#[derive(thiserror::Error, Debug)]
#[error("{}: {error}", .file_path.display())]
pub struct ParseFailure {
    pub file_path: PathBuf,
    #[source]
    pub error: ParseError,
}

/// Error raised while resolving the input path, before any file is read.
///
/// Unlike a [`ParseFailure`] this is fatal to a whole batch run: a bad root
/// path is a precondition violation, not a per-file failure.
#[derive(thiserror::Error, Debug)]
pub enum PathError {
    #[error("cannot find a file or directory at \"{}\"", .0.display())]
    NotFound(PathBuf),

    #[error("the file \"{}\" does not have an .MOI extension", .0.display())]
    InvalidExtension(PathBuf),

    #[error("could not list the directory \"{}\": {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
