// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A post on the community feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    /// Numeric identifier.
    pub id: u32,
    /// Author display name.
    pub author: String,
    /// Author's role badge, e.g. "Regular Donor" or "Hospital Partner".
    pub author_role: String,
    /// When the post was made.
    pub posted_at: NaiveDateTime,
    /// Post body.
    pub content: String,
    /// Like count.
    pub likes: u32,
    /// Comment count.
    pub comments: u32,
    /// Share count.
    pub shares: u32,
    /// Hashtags without the leading `#`.
    pub tags: Vec<String>,
}

/// An upcoming community event (blood drives and the like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    /// Numeric identifier.
    pub id: u32,
    /// Event title.
    pub title: String,
    /// Event date.
    pub date: NaiveDate,
    /// Time window, free text (e.g. "9:00 AM - 4:00 PM").
    pub time_window: String,
    /// Venue, free text.
    pub location: String,
    /// Event description.
    pub description: String,
    /// Registered attendee count.
    pub attendees: u32,
}

/// A donor's story on the stories tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorStory {
    /// Numeric identifier.
    pub id: u32,
    /// Donor display name.
    pub name: String,
    /// Lifetime donation count.
    pub donation_count: u32,
    /// The story text.
    pub story: String,
}
