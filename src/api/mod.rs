//! Typed client for the school information REST API.

mod client;
mod error;
mod types;

pub use client::{ApiClient, ResponseBody};
pub use error::ApiError;
pub use types::{
    Announcement, AnnouncementDraft, AnnouncementPayload, BellScheduleDay, Block,
    CreatedAnnouncement, DraftError,
};
