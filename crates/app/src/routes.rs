// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The route table: one variant per page.

use serde::{Deserialize, Serialize};

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// Landing page.
    Home,
    /// Donor registration wizard.
    Donate,
    /// Donor search with request listing.
    FindBlood,
    /// Blood bank directory.
    BloodBanks,
    /// Public blood request listing.
    Requests,
    /// Community feed, events, and stories.
    Community,
    /// Contact form.
    Contact,
    /// Hospital dashboard.
    Dashboard,
    /// Login form.
    Login,
    /// Donor or hospital registration wizard.
    Register,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Donate,
        Self::FindBlood,
        Self::BloodBanks,
        Self::Requests,
        Self::Community,
        Self::Contact,
        Self::Dashboard,
        Self::Login,
        Self::Register,
    ];

    /// The canonical path for this page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Donate => "/donate",
            Self::FindBlood => "/find-blood",
            Self::BloodBanks => "/blood-banks",
            Self::Requests => "/requests",
            Self::Community => "/community",
            Self::Contact => "/contact",
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    /// Resolves a path to its page, `None` for unknown paths.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
