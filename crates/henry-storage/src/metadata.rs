//! Front matter metadata types.
//!
//! Provides the [`Metadata`] struct deserialized from the TOML block at the
//! top of a markdown file.
//!
//! # Metadata Fields
//!
//! - `title`: Custom document title (overrides the file name)
//! - `date`: Publication date (overrides the file modification time)
//! - `draft`: Draft flag
//! - `summary`: Markdown summary (overrides the first paragraph)

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use toml::value::{Datetime, Offset};

/// Document metadata parsed from front matter.
///
/// Optional fields are `None` when the key is absent from the block, so an
/// explicitly empty value can be told apart from a missing one.
/// Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    /// Custom document title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication date.
    ///
    /// Accepts TOML offset datetimes, local datetimes and local dates. Values
    /// without an offset are taken as UTC.
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<DateTime<Utc>>,

    /// Whether the document is a draft.
    #[serde(default)]
    pub draft: bool,

    /// Summary in markdown.
    #[serde(default)]
    pub summary: Option<String>,
}

impl Metadata {
    /// Title if set to a non-empty value.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Summary if set to a non-empty value.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Front matter block could not be parsed.
    #[error("error parsing metadata in '{file}': {message}")]
    Parse {
        /// Name of the file being parsed.
        file: String,
        /// Underlying parse failure.
        message: String,
    },
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(datetime) = Option::<Datetime>::deserialize(deserializer)? else {
        return Ok(None);
    };
    toml_datetime_to_utc(&datetime)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("unsupported date value: {datetime}")))
}

/// Convert a TOML datetime to UTC.
///
/// Missing seconds count as zero and a missing offset as UTC. Time-only
/// values have no date and are rejected.
fn toml_datetime_to_utc(datetime: &Datetime) -> Option<DateTime<Utc>> {
    let date = datetime.date?;
    let date = NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )?;

    let time = match datetime.time {
        Some(time) => NaiveTime::from_hms_nano_opt(
            u32::from(time.hour),
            u32::from(time.minute),
            u32::from(time.second.unwrap_or(0)),
            time.nanosecond.unwrap_or(0),
        )?,
        None => NaiveTime::MIN,
    };

    let offset_minutes = match datetime.offset {
        None | Some(Offset::Z) => 0,
        Some(Offset::Custom { minutes }) => i32::from(minutes),
    };
    let offset = FixedOffset::east_opt(offset_minutes * 60)?;

    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
