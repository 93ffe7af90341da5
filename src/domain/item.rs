use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::format::{format_compact_count, format_duration, format_elapsed_time};

/// One practice-log entry as served by the backend.
///
/// Exactly one of `phrase_title`, `book_title` and `music_title` is normally
/// set; the subheading/artist fields pair with the phrase and music titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: i64,
    #[serde(default)]
    pub player_name: String,
    pub phrase_title: Option<String>,
    pub phrase_subheading: Option<String>,
    pub book_title: Option<String>,
    pub music_title: Option<String>,
    pub music_artist: Option<String>,
    #[serde(default, deserialize_with = "deserialize_view_count")]
    pub view: u64,
    /// Playback length in seconds, possibly fractional.
    #[serde(default)]
    pub playback_time: f64,
    pub thumbnail_url: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl FeedItem {
    pub fn display_title(&self) -> &str {
        self.phrase_title
            .as_deref()
            .or(self.music_title.as_deref())
            .or(self.book_title.as_deref())
            .unwrap_or("(Untitled)")
    }

    pub fn display_subtitle(&self) -> Option<&str> {
        self.phrase_subheading
            .as_deref()
            .or(self.music_artist.as_deref())
    }

    /// Playback length rounded up to whole seconds, `None` when unknown.
    pub fn duration_label(&self) -> Option<String> {
        if self.playback_time > 0.0 && self.playback_time.is_finite() {
            Some(format_duration(self.playback_time.ceil() as u64))
        } else {
            None
        }
    }

    pub fn views_label(&self) -> String {
        format!("{} views", format_compact_count(self.view))
    }

    pub fn elapsed_label(&self) -> String {
        format_elapsed_time(self.created_at.timestamp_millis())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(u64),
    Float(f64),
    Text(String),
}

/// The backend sends `view` either as a JSON number or as a numeric string.
fn deserialize_view_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawCount>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawCount::Integer(n)) => Ok(n),
        Some(RawCount::Float(f)) if f >= 0.0 && f.is_finite() => Ok(f.trunc() as u64),
        Some(RawCount::Float(f)) => Err(de::Error::custom(format!("invalid view count: {}", f))),
        Some(RawCount::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| de::Error::custom(format!("invalid view count {:?}: {}", s, e))),
    }
}

/// Accepts RFC 3339 timestamps; offset-less timestamps are taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
}
