// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Page boundary layer for LifeFlow.
//!
//! Everything a page touches lives here: the form definition it binds
//! its wizard to, the seeded records it lists, the search entry points,
//! the chart dataset, the hospital dashboard, and the route table. The
//! wizard semantics themselves live in `lifeflow-core`; this crate only
//! arranges them per page.

pub mod catalog;
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod listings;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use chart::{ChartDatum, availability_dataset};
pub use dashboard::HospitalDashboard;
pub use error::AppError;
pub use listings::{
    CommunityResults, search_blood_banks, search_community, search_donors, search_requests,
};
pub use routes::Page;
pub use session::FormSession;
