//! Navigable paths of the site, mapped to pages. Pure view selection;
//! nothing here implies server-side routing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` — bell schedule.
    Schedule,
    /// `/announcements`
    Announcements,
    /// `/admin`
    Admin,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Schedule),
            "/announcements" => Some(Self::Announcements),
            "/admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Schedule => "/",
            Self::Announcements => "/announcements",
            Self::Admin => "/admin",
        }
    }
}
