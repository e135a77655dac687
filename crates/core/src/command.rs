// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeflow_domain::FieldValue;

/// A wizard transition request, expressed as data only.
///
/// Commands are the only way to move a wizard between steps or touch its
/// fields. Submission is not a command: it needs the gateway and lives in
/// [`crate::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move to the next step. Gated by the current step's validation;
    /// a no-op at the final step.
    Advance,
    /// Move to the previous step. Never gated by validation; a no-op at
    /// step 1.
    Retreat,
    /// Overwrite one field in place. Validation is not re-run until the
    /// next `Advance` or submission.
    UpdateField {
        /// The field name.
        name: String,
        /// The new value.
        value: FieldValue,
    },
    /// Return to the initial state: step 1, empty fields, idle.
    Reset,
}
