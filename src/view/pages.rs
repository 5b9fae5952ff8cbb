//! The two read-only pages, as [`ReadView`] markers.

use crate::api::{Announcement, BellScheduleDay};
use crate::view::fetch::ReadView;

/// `/` — the bell schedule.
pub struct SchedulePage;

impl ReadView for SchedulePage {
    type Data = Vec<BellScheduleDay>;
    const LOAD_ERROR: &'static str = "Failed to load schedule";
}

/// `/announcements` — currently-active announcements.
pub struct AnnouncementsPage;

impl ReadView for AnnouncementsPage {
    type Data = Vec<Announcement>;
    const LOAD_ERROR: &'static str = "Failed to load announcements";
}
