// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary-layer errors.

use lifeflow_core::CoreError;
use lifeflow_domain::{DomainError, ViolationSet};
use thiserror::Error;

/// Errors surfaced to pages by the boundary layer.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    /// A dashboard request draft failed validation.
    #[error("Request draft rejected: {violations}")]
    InvalidDraft { violations: ViolationSet },

    /// A wizard command was refused.
    #[error(transparent)]
    Form(#[from] CoreError),

    /// Seeded catalog data failed to parse.
    #[error(transparent)]
    Catalog(#[from] DomainError),
}
