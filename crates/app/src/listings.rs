// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Listing search: one entry point per searchable page.
//!
//! These are thin wrappers over the filter engine that add logging.
//! Results borrow from the input slice and preserve its order.

use lifeflow_core::filter;
use lifeflow_domain::{
    BankQuery, BloodBank, BloodRequest, CommunityEvent, CommunityPost, CommunityQuery, DonorProfile,
    DonorQuery, DonorStory, RequestQuery,
};

/// Filters the blood bank directory.
#[must_use]
pub fn search_blood_banks<'a>(banks: &'a [BloodBank], query: &BankQuery) -> Vec<&'a BloodBank> {
    let matched: Vec<&BloodBank> = filter(banks, query);
    tracing::debug!(
        total = banks.len(),
        matched = matched.len(),
        location = %query.location,
        "Filtered blood bank directory"
    );
    matched
}

/// Filters the public request listing.
#[must_use]
pub fn search_requests<'a>(
    requests: &'a [BloodRequest],
    query: &RequestQuery,
) -> Vec<&'a BloodRequest> {
    let matched: Vec<&BloodRequest> = filter(requests, query);
    tracing::debug!(
        total = requests.len(),
        matched = matched.len(),
        location = %query.location,
        "Filtered request listing"
    );
    matched
}

/// Filters the donor listing on the find-blood page.
#[must_use]
pub fn search_donors<'a>(donors: &'a [DonorProfile], query: &DonorQuery) -> Vec<&'a DonorProfile> {
    let matched: Vec<&DonorProfile> = filter(donors, query);
    tracing::debug!(
        total = donors.len(),
        matched = matched.len(),
        location = %query.location,
        "Filtered donor listing"
    );
    matched
}

/// Matches from all three community tabs for one text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityResults<'a> {
    /// Matching feed posts.
    pub posts: Vec<&'a CommunityPost>,
    /// Matching upcoming events.
    pub events: Vec<&'a CommunityEvent>,
    /// Matching donor stories.
    pub stories: Vec<&'a DonorStory>,
}

/// Filters all three community tabs with the page's single text query.
#[must_use]
pub fn search_community<'a>(
    posts: &'a [CommunityPost],
    events: &'a [CommunityEvent],
    stories: &'a [DonorStory],
    query: &CommunityQuery,
) -> CommunityResults<'a> {
    let results = CommunityResults {
        posts: filter(posts, query),
        events: filter(events, query),
        stories: filter(stories, query),
    };
    tracing::debug!(
        posts = results.posts.len(),
        events = results.events.len(),
        stories = results.stories.len(),
        text = %query.text,
        "Filtered community tabs"
    );
    results
}
