//! Parsed MOI file representation

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;
use std::fmt;
use std::time::Duration;

/// Metadata parsed from a single .MOI file
///
/// An MOI file is a small binary sidecar written by JVC camcorders next to
/// the MOD or TOD video file whose content it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoiFile {
    /// Base name of the source file, set by the batch layer (the parser
    /// itself only sees a byte buffer)
    pub file_name: Option<String>,

    /// Two-character format version, e.g. "V6"
    pub version: String,

    /// Size of the MOI file in bytes, as recorded inside the file
    pub file_size: u32,

    /// Recording timestamp (camcorder local time, no timezone)
    pub creation_date: NaiveDateTime,

    /// Length of the associated video
    pub video_length: Duration,

    /// Display geometry of the associated video
    pub aspect_ratio: AspectRatio,

    /// Broadcast standard of the associated video
    pub tv_system: TvSystem,
}

impl MoiFile {
    /// Get formatted video length string (mm:ss or hh:mm:ss)
    pub fn video_length_formatted(&self) -> String {
        let total_seconds = self.video_length.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{:02}:{:02}", minutes, seconds)
        }
    }

    /// Get formatted file size string
    pub fn file_size_formatted(&self) -> String {
        let size = self.file_size as u64;
        if size >= 1_073_741_824 {
            format!("{:.1} GB", size as f64 / 1_073_741_824.0)
        } else if size >= 1_048_576 {
            format!("{:.1} MB", size as f64 / 1_048_576.0)
        } else if size >= 1024 {
            format!("{:.1} KB", size as f64 / 1024.0)
        } else {
            format!("{} B", size)
        }
    }
}

/// Aspect ratio of the associated video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Unrecognised aspect ratio
    Unknown,
    /// 4:3 aspect ratio
    Standard,
    /// 16:9 aspect ratio
    Widescreen,
}

impl AspectRatio {
    /// Derive the aspect ratio from the video format byte.
    ///
    /// The low nibble carries the aspect ratio: 0 and 1 mean 4:3, 4 and 5
    /// mean 16:9. The byte's semantics were reverse-engineered, so
    /// unrecognised values map to `Unknown` rather than failing.
    pub fn from_format_byte(video_fmt: u8) -> Self {
        match video_fmt & 0x0F {
            0 | 1 => AspectRatio::Standard,
            4 | 5 => AspectRatio::Widescreen,
            _ => AspectRatio::Unknown,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Unknown => write!(f, "Unknown"),
            AspectRatio::Standard => write!(f, "4:3"),
            AspectRatio::Widescreen => write!(f, "16:9"),
        }
    }
}

/// TV broadcast standard of the associated video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TvSystem {
    /// Unrecognised TV system
    Unknown,
    /// NTSC TV system
    Ntsc,
    /// PAL TV system
    Pal,
}

impl TvSystem {
    /// Derive the TV system from the high nibble of the video format byte:
    /// 4 means NTSC, 5 means PAL, anything else is `Unknown`.
    pub fn from_format_byte(video_fmt: u8) -> Self {
        match video_fmt >> 4 {
            4 => TvSystem::Ntsc,
            5 => TvSystem::Pal,
            _ => TvSystem::Unknown,
        }
    }
}

impl fmt::Display for TvSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TvSystem::Unknown => write!(f, "Unknown"),
            TvSystem::Ntsc => write!(f, "NTSC"),
            TvSystem::Pal => write!(f, "PAL"),
        }
    }
}
