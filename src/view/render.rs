//! Plain-text rendering. Every renderer is a pure function of one
//! machine's state.

use std::fmt::Write;

use crate::api::{Announcement, BellScheduleDay};
use crate::view::admin::SubmitStatus;
use crate::view::fetch::FetchState;

pub fn render_schedule(state: &FetchState<Vec<BellScheduleDay>>) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => "Loading bell schedule…".to_string(),
        FetchState::Failure(message) => format!("Error: {message}"),
        FetchState::Success(days) => {
            let mut out = String::new();
            for day in days {
                let _ = writeln!(out, "{}", day.day);
                // Block order is the server's chronological order; render
                // it as-is.
                for block in &day.blocks {
                    let _ = writeln!(out, "  {:<20} {} – {}", block.name, block.start, block.end);
                }
            }
            out
        }
    }
}

pub fn render_announcements(state: &FetchState<Vec<Announcement>>) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => "Loading announcements…".to_string(),
        FetchState::Failure(message) => format!("Error: {message}"),
        FetchState::Success(items) if items.is_empty() => "No active announcements.".to_string(),
        FetchState::Success(items) => {
            let mut out = String::new();
            for item in items {
                let _ = writeln!(out, "{} [priority {}]", item.title, item.priority);
                let _ = writeln!(out, "  {}", item.message);
                let _ = writeln!(
                    out,
                    "  From {} to {}",
                    item.start_date.format("%Y-%m-%d %H:%M UTC"),
                    item.end_date.format("%Y-%m-%d %H:%M UTC")
                );
                if let Some(author) = &item.created_by {
                    let _ = writeln!(out, "  By {author}");
                }
            }
            out
        }
    }
}

/// The form's status line; `None` until a submission settles.
pub fn render_submit_status(status: &Option<SubmitStatus>) -> Option<String> {
    status.as_ref().map(|status| match status {
        SubmitStatus::Created(id) => format!("✅ Created announcement #{id}"),
        SubmitStatus::Failed(message) => format!("❌ {message}"),
    })
}
