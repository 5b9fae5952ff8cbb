use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named block of a school day's bell schedule.
///
/// `start`/`end` are opaque display strings; the client never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// A day's bell schedule. Block order is chronological display order and
/// must never be re-sorted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellScheduleDay {
    pub day: String,
    pub blocks: Vec<Block>,
}

/// An announcement as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub notify_at: Option<DateTime<Utc>>,
    pub priority: u8,
    pub active: bool,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Response body of a successful announcement creation. The server may
/// return the full record; only the id matters to the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedAnnouncement {
    pub id: i64,
}

/// A draft rejected before it could become a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("field '{field}' is not a valid date/time: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("priority must be between 1 and 100, got {0}")]
    PriorityRange(u8),
}

/// The announcement being composed, before submission.
///
/// Date fields hold the raw `YYYY-MM-DDTHH:MM` strings of a
/// datetime-local input until [`AnnouncementDraft::to_payload`] resolves
/// them against a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub message: String,
    pub start_date: String,
    pub end_date: String,
    pub notify_at: String,
    pub priority: u8,
    pub active: bool,
    pub created_by: String,
}

impl Default for AnnouncementDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            notify_at: String::new(),
            priority: 10,
            active: true,
            created_by: String::new(),
        }
    }
}

/// Submission body for `POST /announcements`. Dates are absolute UTC
/// timestamps; `null` means "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementPayload {
    pub title: String,
    pub message: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notify_at: Option<DateTime<Utc>>,
    pub priority: u8,
    pub active: bool,
    pub created_by: Option<String>,
}

impl AnnouncementDraft {
    /// Names of the required fields that are still empty.
    ///
    /// The submit path refuses to touch the network while this is
    /// non-empty, mirroring the original form's required-field gate.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        if self.start_date.trim().is_empty() {
            missing.push("startDate");
        }
        if self.end_date.trim().is_empty() {
            missing.push("endDate");
        }
        missing
    }

    /// Converts the draft into a submission payload, resolving the
    /// local-naive date strings in `tz` and normalizing them to UTC.
    ///
    /// An empty `notify_at` or `created_by` becomes `null`; empty
    /// `start_date`/`end_date` is an error (the required-field gate runs
    /// first, so hitting it here means a caller skipped the gate).
    pub fn to_payload<Tz: TimeZone>(&self, tz: &Tz) -> Result<AnnouncementPayload, DraftError> {
        if !(1..=100).contains(&self.priority) {
            return Err(DraftError::PriorityRange(self.priority));
        }

        let start_date = resolve_datetime("startDate", &self.start_date, tz)?
            .ok_or(DraftError::MissingField("startDate"))?;
        let end_date = resolve_datetime("endDate", &self.end_date, tz)?
            .ok_or(DraftError::MissingField("endDate"))?;
        let notify_at = resolve_datetime("notifyAt", &self.notify_at, tz)?;

        let created_by = if self.created_by.is_empty() {
            None
        } else {
            Some(self.created_by.clone())
        };

        Ok(AnnouncementPayload {
            title: self.title.clone(),
            message: self.message.clone(),
            start_date,
            end_date,
            notify_at,
            priority: self.priority,
            active: self.active,
            created_by,
        })
    }
}

/// Parses a datetime-local input string and anchors it in `tz`.
/// Empty input is a valid "not set".
fn resolve_datetime<Tz: TimeZone>(
    field: &'static str,
    raw: &str,
    tz: &Tz,
) -> Result<Option<DateTime<Utc>>, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    // datetime-local values come with or without a seconds component.
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| DraftError::InvalidDate {
            field,
            value: raw.to_string(),
        })?;

    // Ambiguous or skipped local times (DST transitions) resolve to the
    // earliest valid instant.
    let anchored = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DraftError::InvalidDate {
            field,
            value: raw.to_string(),
        })?;

    Ok(Some(anchored.with_timezone(&Utc)))
}
