//! Parses a single .MOI buffer into a [`MoiFile`]

use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

use crate::fields::FieldReader;
use crate::{AspectRatio, MoiFile, ParseError, Result, TvSystem};

/* Byte layout, from the Wikipedia article on the MOI format (there is no
 * official documentation):
 * 00-01  Version            56 36 (V6)
 * 02-05  MOI filesize       00 00 01 C3 (451 bytes)
 * 06-07  Year               07 D8 (2008)
 * 08     Month              07 (July)
 * 09     Day                04 (4th)
 * 0A     Hour               0B (11)
 * 0B     Minutes            16 (22)
 * 0E-11  Video length (ms)  00 08 9D 00 (564480 ms)
 * 80     Video format       low nibble: 0/1 = 4:3, 4/5 = 16:9
 *                           high nibble: 4 = NTSC, 5 = PAL
 */
const VERSION_POS: usize = 0x00;
const FILE_SIZE_POS: usize = 0x02;
const YEAR_POS: usize = 0x06;
const MONTH_POS: usize = 0x08;
const DAY_POS: usize = 0x09;
const HOUR_POS: usize = 0x0A;
const MIN_POS: usize = 0x0B;
const VIDEO_LENGTH_POS: usize = 0x0E;
const VIDEO_FMT_POS: usize = 0x80;

/// Smallest buffer that satisfies every offset the parser reads.
pub const MIN_MOI_LEN: usize = VIDEO_FMT_POS + 1;

/// Parses a byte buffer loaded from an .MOI file.
///
/// Parsing yields exactly one of a [`MoiFile`] or a [`ParseError`]; a
/// partially populated record is never produced.
pub struct MoiParser<'a> {
    data: &'a [u8],
}

impl<'a> MoiParser<'a> {
    /// Create a parser over raw MOI file data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Parse the buffer into a [`MoiFile`].
    ///
    /// Raw fields are read in offset order, so the first missing byte
    /// decides which bounds error is reported. Date validation runs before
    /// video length validation. The returned record has `file_name` unset;
    /// only the batch layer knows the source path.
    pub fn parse(&self) -> Result<MoiFile> {
        let reader = FieldReader::new(self.data);

        let version = reader.ascii(VERSION_POS, 2)?;
        let file_size = reader.u32_be(FILE_SIZE_POS)?;
        let year = reader.u16_be(YEAR_POS)?;
        let month = reader.byte(MONTH_POS)?;
        let day = reader.byte(DAY_POS)?;
        let hour = reader.byte(HOUR_POS)?;
        let minute = reader.byte(MIN_POS)?;
        let video_length_ms = reader.u32_be(VIDEO_LENGTH_POS)?;
        let video_fmt = reader.byte(VIDEO_FMT_POS)?;

        let creation_date = parse_creation_date(year, month, day, hour, minute)?;
        let video_length = parse_video_length(video_length_ms)?;

        Ok(MoiFile {
            file_name: None,
            version,
            file_size,
            creation_date,
            video_length,
            aspect_ratio: AspectRatio::from_format_byte(video_fmt),
            tv_system: TvSystem::from_format_byte(video_fmt),
        })
    }
}

/// Build the recording timestamp, rejecting raw fields that do not form a
/// valid calendar moment (seconds are not stored and default to zero).
fn parse_creation_date(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .and_then(|date| date.and_hms_opt(u32::from(hour), u32::from(minute), 0))
        .ok_or(ParseError::CreationDate {
            year,
            month,
            day,
            hour,
            minute,
        })
}

/// Build the video length from the raw millisecond count.
fn parse_video_length(video_length_ms: u32) -> Result<Duration> {
    chrono::Duration::try_milliseconds(i64::from(video_length_ms))
        .ok_or(ParseError::VideoLength(video_length_ms))?
        .to_std()
        .map_err(|_| ParseError::VideoLength(video_length_ms))
}
