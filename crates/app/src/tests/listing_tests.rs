// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog;
use crate::listings::{
    CommunityResults, search_blood_banks, search_community, search_donors, search_requests,
};
use lifeflow_domain::{
    BankQuery, BloodBank, BloodRequest, BloodType, CommunityEvent, CommunityPost, CommunityQuery,
    DonorProfile, DonorQuery, DonorStory, RequestQuery, RequestStatus, Urgency,
};

#[test]
fn test_default_queries_return_every_seeded_record_in_order() {
    let banks: Vec<BloodBank> = catalog::blood_banks().expect("seed data parses");
    let requests: Vec<BloodRequest> = catalog::blood_requests().expect("seed data parses");
    let donors: Vec<DonorProfile> = catalog::donors().expect("seed data parses");

    let bank_ids: Vec<&str> = search_blood_banks(&banks, &BankQuery::default())
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(bank_ids, ["BB-001", "BB-002", "BB-003"]);

    assert_eq!(search_requests(&requests, &RequestQuery::default()).len(), 5);
    assert_eq!(search_donors(&donors, &DonorQuery::default()).len(), 3);
}

#[test]
fn test_bank_blood_type_filter_requires_units_on_hand() {
    let banks: Vec<BloodBank> = catalog::blood_banks().expect("seed data parses");
    let query = BankQuery {
        location: String::new(),
        blood_type: Some(BloodType::AbNegative),
    };

    // Every seeded bank stocks at least one AB- unit.
    let matched: Vec<&BloodBank> = search_blood_banks(&banks, &query);
    assert_eq!(matched.len(), 3);
}

#[test]
fn test_bank_location_matches_name_case_insensitively() {
    let banks: Vec<BloodBank> = catalog::blood_banks().expect("seed data parses");
    let query = BankQuery {
        location: String::from("memorial"),
        blood_type: None,
    };

    let matched: Vec<&BloodBank> = search_blood_banks(&banks, &query);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "BB-002");
}

#[test]
fn test_request_dimensions_combine_with_and() {
    let requests: Vec<BloodRequest> = catalog::blood_requests().expect("seed data parses");
    let query = RequestQuery {
        blood_type: None,
        location: String::from("healthcare city"),
        urgency: Some(Urgency::Urgent),
        status: Some(RequestStatus::Open),
    };

    let matched: Vec<&BloodRequest> = search_requests(&requests, &query);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "REQ-003");
}

#[test]
fn test_donor_search_by_type_and_district() {
    let donors: Vec<DonorProfile> = catalog::donors().expect("seed data parses");
    let query = DonorQuery {
        blood_type: Some(BloodType::ONegative),
        location: String::from("west end"),
    };

    let matched: Vec<&DonorProfile> = search_donors(&donors, &query);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Sarah Wilson");
}

#[test]
fn test_community_query_spans_all_three_tabs() {
    let posts: Vec<CommunityPost> = catalog::community_posts().expect("seed data parses");
    let events: Vec<CommunityEvent> = catalog::community_events().expect("seed data parses");
    let stories: Vec<DonorStory> = catalog::donor_stories();

    let query = CommunityQuery {
        text: String::from("blood drive"),
    };
    let results: CommunityResults = search_community(&posts, &events, &stories, &query);

    assert!(results.posts.is_empty());
    assert_eq!(results.events.len(), 2);
    assert!(results.stories.is_empty());
}

#[test]
fn test_empty_community_query_matches_everything() {
    let posts: Vec<CommunityPost> = catalog::community_posts().expect("seed data parses");
    let events: Vec<CommunityEvent> = catalog::community_events().expect("seed data parses");
    let stories: Vec<DonorStory> = catalog::donor_stories();

    let results: CommunityResults =
        search_community(&posts, &events, &stories, &CommunityQuery::default());

    assert_eq!(results.posts.len(), 3);
    assert_eq!(results.events.len(), 3);
    assert_eq!(results.stories.len(), 3);
}
