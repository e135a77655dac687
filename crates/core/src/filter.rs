// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The filter/search predicate engine behind the listing pages.
//!
//! Matching is pure and synchronous over small in-memory collections:
//! text dimensions use case-insensitive substring containment (possibly
//! against several fields), categorical dimensions use exact equality,
//! the empty sentinel matches everything, and dimensions combine with
//! logical AND. There is no ranking, pagination, or caching; input order
//! is preserved.

use lifeflow_domain::{
    BankQuery, BloodBank, BloodRequest, CommunityEvent, CommunityPost, CommunityQuery,
    DonorProfile, DonorQuery, DonorStory, RequestQuery,
};

/// A record that can be matched against a page's query shape.
pub trait Filterable {
    /// The query this record type is filtered by.
    type Query;

    /// Whether the record matches every dimension of the query.
    fn matches(&self, query: &Self::Query) -> bool;
}

/// Returns the matching subset of `records`, preserving input order.
#[must_use]
pub fn filter<'a, R: Filterable>(records: &'a [R], query: &R::Query) -> Vec<&'a R> {
    records.iter().filter(|record| record.matches(query)).collect()
}

/// Case-insensitive substring containment; an empty needle matches.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Filterable for BloodBank {
    type Query = BankQuery;

    fn matches(&self, query: &Self::Query) -> bool {
        let location_match: bool = contains_ci(&self.city, &query.location)
            || contains_ci(&self.address, &query.location)
            || contains_ci(&self.name, &query.location);

        // A blood type filter also requires stock on hand.
        let blood_type_match: bool = query
            .blood_type
            .is_none_or(|blood_type| self.has_stock(blood_type));

        location_match && blood_type_match
    }
}

impl Filterable for BloodRequest {
    type Query = RequestQuery;

    fn matches(&self, query: &Self::Query) -> bool {
        query
            .blood_type
            .is_none_or(|blood_type| self.blood_type == blood_type)
            && contains_ci(&self.location, &query.location)
            && query.urgency.is_none_or(|urgency| self.urgency == urgency)
            && query.status.is_none_or(|status| self.status == status)
    }
}

impl Filterable for DonorProfile {
    type Query = DonorQuery;

    fn matches(&self, query: &Self::Query) -> bool {
        query
            .blood_type
            .is_none_or(|blood_type| self.blood_type == blood_type)
            && contains_ci(&self.location, &query.location)
    }
}

impl Filterable for CommunityPost {
    type Query = CommunityQuery;

    fn matches(&self, query: &Self::Query) -> bool {
        contains_ci(&self.content, &query.text)
            || contains_ci(&self.author, &query.text)
            || self.tags.iter().any(|tag| contains_ci(tag, &query.text))
    }
}

impl Filterable for CommunityEvent {
    type Query = CommunityQuery;

    fn matches(&self, query: &Self::Query) -> bool {
        contains_ci(&self.title, &query.text)
            || contains_ci(&self.description, &query.text)
            || contains_ci(&self.location, &query.text)
    }
}

impl Filterable for DonorStory {
    type Query = CommunityQuery;

    fn matches(&self, query: &Self::Query) -> bool {
        contains_ci(&self.name, &query.text) || contains_ci(&self.story, &query.text)
    }
}
