// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The seeded record catalog.
//!
//! Every listing page renders from these fixed records. There is no
//! persistence behind them; each builder returns a fresh copy, and dates
//! are parsed from the seed literals so a bad literal fails loudly
//! instead of rendering garbage.

use lifeflow_domain::{
    BloodBank, BloodRequest, BloodType, CommunityEvent, CommunityPost, DomainError, DonorAvailability,
    DonorProfile, DonorStory, FulfillmentStatus, QueuedRequest, RequestStatus, StockLevel,
    TypeAvailability, Urgency, parse_date, parse_datetime,
};

/// The blood bank directory.
///
/// # Errors
///
/// Returns an error if a seed literal fails to parse.
pub fn blood_banks() -> Result<Vec<BloodBank>, DomainError> {
    Ok(vec![
        BloodBank {
            id: "BB-001".to_owned(),
            name: "Central Blood Bank".to_owned(),
            address: "123 Medical Center Dr".to_owned(),
            city: "Healthcare City".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            hours: "Mon-Fri: 8AM-6PM, Sat: 9AM-2PM".to_owned(),
            distance_km: 1.2,
            availability: vec![
                TypeAvailability::new(BloodType::APositive, 45, StockLevel::High),
                TypeAvailability::new(BloodType::ANegative, 12, StockLevel::Medium),
                TypeAvailability::new(BloodType::BPositive, 25, StockLevel::Medium),
                TypeAvailability::new(BloodType::BNegative, 8, StockLevel::Low),
                TypeAvailability::new(BloodType::AbPositive, 15, StockLevel::Medium),
                TypeAvailability::new(BloodType::AbNegative, 3, StockLevel::Critical),
                TypeAvailability::new(BloodType::OPositive, 30, StockLevel::High),
                TypeAvailability::new(BloodType::ONegative, 5, StockLevel::Critical),
            ],
        },
        BloodBank {
            id: "BB-002".to_owned(),
            name: "Memorial Blood Center".to_owned(),
            address: "456 Hospital Ave".to_owned(),
            city: "Healthcare City".to_owned(),
            phone: "(555) 987-6543".to_owned(),
            hours: "Mon-Fri: 9AM-5PM, Sat-Sun: 10AM-2PM".to_owned(),
            distance_km: 3.5,
            availability: vec![
                TypeAvailability::new(BloodType::APositive, 35, StockLevel::High),
                TypeAvailability::new(BloodType::ANegative, 18, StockLevel::Medium),
                TypeAvailability::new(BloodType::BPositive, 15, StockLevel::Medium),
                TypeAvailability::new(BloodType::BNegative, 12, StockLevel::Medium),
                TypeAvailability::new(BloodType::AbPositive, 10, StockLevel::Low),
                TypeAvailability::new(BloodType::AbNegative, 6, StockLevel::Low),
                TypeAvailability::new(BloodType::OPositive, 25, StockLevel::Medium),
                TypeAvailability::new(BloodType::ONegative, 8, StockLevel::Low),
            ],
        },
        BloodBank {
            id: "BB-003".to_owned(),
            name: "University Blood Donation Center".to_owned(),
            address: "789 Campus Blvd".to_owned(),
            city: "Healthcare City".to_owned(),
            phone: "(555) 456-7890".to_owned(),
            hours: "Mon-Fri: 10AM-7PM".to_owned(),
            distance_km: 5.8,
            availability: vec![
                TypeAvailability::new(BloodType::APositive, 50, StockLevel::High),
                TypeAvailability::new(BloodType::ANegative, 20, StockLevel::Medium),
                TypeAvailability::new(BloodType::BPositive, 30, StockLevel::High),
                TypeAvailability::new(BloodType::BNegative, 15, StockLevel::Medium),
                TypeAvailability::new(BloodType::AbPositive, 12, StockLevel::Medium),
                TypeAvailability::new(BloodType::AbNegative, 5, StockLevel::Low),
                TypeAvailability::new(BloodType::OPositive, 40, StockLevel::High),
                TypeAvailability::new(BloodType::ONegative, 10, StockLevel::Low),
            ],
        },
    ])
}

/// The public blood request listing.
///
/// # Errors
///
/// Returns an error if a seed literal fails to parse.
pub fn blood_requests() -> Result<Vec<BloodRequest>, DomainError> {
    Ok(vec![
        BloodRequest {
            id: "REQ-001".to_owned(),
            patient_name: "John Doe".to_owned(),
            blood_type: BloodType::ONegative,
            units: 3,
            hospital: "Central Hospital".to_owned(),
            location: "Downtown, Healthcare City".to_owned(),
            urgency: Urgency::Critical,
            requested_at: parse_datetime("2025-04-10T09:30:00")?,
            status: RequestStatus::Open,
            contact_phone: "(555) 123-4567".to_owned(),
            notes: Some("Emergency surgery scheduled for tomorrow morning".to_owned()),
        },
        BloodRequest {
            id: "REQ-002".to_owned(),
            patient_name: "Jane Smith".to_owned(),
            blood_type: BloodType::AbPositive,
            units: 2,
            hospital: "Memorial Medical Center".to_owned(),
            location: "North District, Healthcare City".to_owned(),
            urgency: Urgency::Normal,
            requested_at: parse_datetime("2025-04-09T14:15:00")?,
            status: RequestStatus::InProgress,
            contact_phone: "(555) 987-6543".to_owned(),
            notes: None,
        },
        BloodRequest {
            id: "REQ-003".to_owned(),
            patient_name: "Robert Johnson".to_owned(),
            blood_type: BloodType::BPositive,
            units: 4,
            hospital: "University Hospital".to_owned(),
            location: "East Side, Healthcare City".to_owned(),
            urgency: Urgency::Urgent,
            requested_at: parse_datetime("2025-04-08T11:45:00")?,
            status: RequestStatus::Open,
            contact_phone: "(555) 456-7890".to_owned(),
            notes: Some("Patient requires multiple transfusions".to_owned()),
        },
        BloodRequest {
            id: "REQ-004".to_owned(),
            patient_name: "Maria Garcia".to_owned(),
            blood_type: BloodType::ANegative,
            units: 2,
            hospital: "Community Medical Center".to_owned(),
            location: "West End, Healthcare City".to_owned(),
            urgency: Urgency::Normal,
            requested_at: parse_datetime("2025-04-07T10:00:00")?,
            status: RequestStatus::Fulfilled,
            contact_phone: "(555) 789-0123".to_owned(),
            notes: None,
        },
        BloodRequest {
            id: "REQ-005".to_owned(),
            patient_name: "David Wilson".to_owned(),
            blood_type: BloodType::OPositive,
            units: 3,
            hospital: "St. Mary Hospital".to_owned(),
            location: "South District, Healthcare City".to_owned(),
            urgency: Urgency::Urgent,
            requested_at: parse_datetime("2025-04-06T16:30:00")?,
            status: RequestStatus::Expired,
            contact_phone: "(555) 234-5678".to_owned(),
            notes: Some("Request expired due to fulfillment from another source".to_owned()),
        },
    ])
}

/// The donor listing on the find-blood page.
///
/// # Errors
///
/// Returns an error if a seed literal fails to parse.
pub fn donors() -> Result<Vec<DonorProfile>, DomainError> {
    Ok(vec![
        DonorProfile {
            id: "D-001".to_owned(),
            name: "Michael Brown".to_owned(),
            blood_type: BloodType::ONegative,
            location: "Downtown, Healthcare City".to_owned(),
            distance_km: 1.2,
            last_donation: parse_date("2025-01-15")?,
            availability: DonorAvailability::Available,
            match_score: 98,
            donation_count: 12,
        },
        DonorProfile {
            id: "D-002".to_owned(),
            name: "Sarah Wilson".to_owned(),
            blood_type: BloodType::ONegative,
            location: "West End, Healthcare City".to_owned(),
            distance_km: 3.5,
            last_donation: parse_date("2025-02-20")?,
            availability: DonorAvailability::Available,
            match_score: 95,
            donation_count: 8,
        },
        DonorProfile {
            id: "D-003".to_owned(),
            name: "David Miller".to_owned(),
            blood_type: BloodType::OPositive,
            location: "North District, Healthcare City".to_owned(),
            distance_km: 2.8,
            last_donation: parse_date("2025-03-05")?,
            availability: DonorAvailability::Available,
            match_score: 85,
            donation_count: 15,
        },
    ])
}

/// The community feed.
///
/// # Errors
///
/// Returns an error if a seed literal fails to parse.
pub fn community_posts() -> Result<Vec<CommunityPost>, DomainError> {
    Ok(vec![
        CommunityPost {
            id: 1,
            author: "Sarah Johnson".to_owned(),
            author_role: "Regular Donor".to_owned(),
            posted_at: parse_datetime("2025-04-10T14:30:00")?,
            content: "Just completed my 12th blood donation today! The staff at Central \
                      Blood Bank were amazing as always. Remember, each donation can save \
                      up to 3 lives. Who's donating next?"
                .to_owned(),
            likes: 48,
            comments: 15,
            shares: 7,
            tags: vec![
                "BloodDonation".to_owned(),
                "LifeSaver".to_owned(),
                "DonateBlood".to_owned(),
            ],
        },
        CommunityPost {
            id: 2,
            author: "Memorial Hospital".to_owned(),
            author_role: "Hospital Partner".to_owned(),
            posted_at: parse_datetime("2025-04-09T10:15:00")?,
            content: "URGENT: We're experiencing a critical shortage of O- blood type. If \
                      you're an O- donor, please consider donating as soon as possible. \
                      Your donation could save lives in emergency situations."
                .to_owned(),
            likes: 112,
            comments: 32,
            shares: 86,
            tags: vec![
                "UrgentNeed".to_owned(),
                "ONegative".to_owned(),
                "BloodShortage".to_owned(),
                "EmergencyAppeal".to_owned(),
            ],
        },
        CommunityPost {
            id: 3,
            author: "Dr. Michael Chen".to_owned(),
            author_role: "Medical Professional".to_owned(),
            posted_at: parse_datetime("2025-04-08T16:45:00")?,
            content: "Blood fact of the day: Did you know that red blood cells live for \
                      about 120 days in the bloodstream? Your body continuously replaces \
                      them, which is why it's safe to donate blood every 56 days. \
                      #BloodFacts"
                .to_owned(),
            likes: 76,
            comments: 8,
            shares: 23,
            tags: vec![
                "BloodFacts".to_owned(),
                "MedicalInfo".to_owned(),
                "HealthEducation".to_owned(),
            ],
        },
    ])
}

/// Upcoming community events.
///
/// # Errors
///
/// Returns an error if a seed literal fails to parse.
pub fn community_events() -> Result<Vec<CommunityEvent>, DomainError> {
    Ok(vec![
        CommunityEvent {
            id: 1,
            title: "Community Blood Drive".to_owned(),
            date: parse_date("2025-04-20")?,
            time_window: "9:00 AM - 4:00 PM".to_owned(),
            location: "Central Community Center, Downtown".to_owned(),
            description: "Join our biggest blood drive of the year! We aim to collect 200 \
                          units of blood in a single day. Refreshments provided for all \
                          donors."
                .to_owned(),
            attendees: 87,
        },
        CommunityEvent {
            id: 2,
            title: "University Campus Blood Drive".to_owned(),
            date: parse_date("2025-04-25")?,
            time_window: "10:00 AM - 3:00 PM".to_owned(),
            location: "University Student Center, Campus Blvd".to_owned(),
            description: "Calling all students and faculty! Donate blood between classes \
                          and help save lives. Student donors will receive volunteer hour \
                          credits."
                .to_owned(),
            attendees: 42,
        },
        CommunityEvent {
            id: 3,
            title: "Corporate Blood Donation Day".to_owned(),
            date: parse_date("2025-05-05")?,
            time_window: "8:00 AM - 5:00 PM".to_owned(),
            location: "Business District, Multiple Office Buildings".to_owned(),
            description: "Our mobile blood donation units will visit major corporate \
                          offices. Pre-register to donate during your lunch break!"
                .to_owned(),
            attendees: 63,
        },
    ])
}

/// Donor stories on the stories tab.
#[must_use]
pub fn donor_stories() -> Vec<DonorStory> {
    vec![
        DonorStory {
            id: 1,
            name: "James Wilson".to_owned(),
            donation_count: 25,
            story: "I started donating blood after my sister needed multiple transfusions \
                    following a car accident. She received 4 units of blood that saved \
                    her life. Since then, I've been a regular donor for over 5 years. \
                    It's such a simple way to make a huge difference."
                .to_owned(),
        },
        DonorStory {
            id: 2,
            name: "Emily Rodriguez".to_owned(),
            donation_count: 8,
            story: "After my accident, I needed multiple transfusions. Thanks to \
                    LifeFlow's efficient donor matching, the hospital had exactly what I \
                    needed. I'm forever grateful to the donors who saved my life. Now I \
                    donate regularly to pay it forward."
                .to_owned(),
        },
        DonorStory {
            id: 3,
            name: "David Thompson".to_owned(),
            donation_count: 42,
            story: "I've been donating blood for over 15 years now. What keeps me coming \
                    back is knowing that my rare blood type (AB-) can help patients in \
                    critical situations. The LifeFlow app makes it so easy to schedule \
                    donations and track my impact."
                .to_owned(),
        },
    ]
}

/// The hospital's own stock table, one row per blood type.
#[must_use]
pub fn hospital_stock() -> Vec<TypeAvailability> {
    vec![
        TypeAvailability::new(BloodType::APositive, 45, StockLevel::High),
        TypeAvailability::new(BloodType::ANegative, 12, StockLevel::Medium),
        TypeAvailability::new(BloodType::BPositive, 25, StockLevel::Medium),
        TypeAvailability::new(BloodType::BNegative, 8, StockLevel::Low),
        TypeAvailability::new(BloodType::AbPositive, 15, StockLevel::Medium),
        TypeAvailability::new(BloodType::AbNegative, 3, StockLevel::Critical),
        TypeAvailability::new(BloodType::OPositive, 30, StockLevel::High),
        TypeAvailability::new(BloodType::ONegative, 5, StockLevel::Critical),
    ]
}

/// The hospital dashboard's starting request queue.
///
/// # Errors
///
/// Returns an error if a seed literal fails to parse.
pub fn hospital_queue() -> Result<Vec<QueuedRequest>, DomainError> {
    Ok(vec![
        QueuedRequest {
            id: "REQ-001".to_owned(),
            blood_type: BloodType::ONegative,
            units: 3,
            urgency: Urgency::Critical,
            status: FulfillmentStatus::Processing,
            requested_at: parse_datetime("2025-04-10T09:30:00")?,
            hospital: None,
        },
        QueuedRequest {
            id: "REQ-002".to_owned(),
            blood_type: BloodType::AbPositive,
            units: 2,
            urgency: Urgency::Normal,
            status: FulfillmentStatus::Fulfilled,
            requested_at: parse_datetime("2025-04-09T14:15:00")?,
            hospital: None,
        },
        QueuedRequest {
            id: "REQ-003".to_owned(),
            blood_type: BloodType::BPositive,
            units: 4,
            urgency: Urgency::Urgent,
            status: FulfillmentStatus::Pending,
            requested_at: parse_datetime("2025-04-10T11:45:00")?,
            hospital: Some("Central Hospital".to_owned()),
        },
    ])
}
