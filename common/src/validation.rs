//! Pre-submission checks on the field types and analytics linkage.
//!
//! Every rule is evaluated and all violations are reported together; nothing
//! is sent to the model service while the list is non-empty.

use crate::model::analytics::{AnalyticsSession, ProfileSelection};
use crate::model::field::{Field, MERGE_KEY_CODE, RESPONSE_CODE, UNSET_CODE};

pub const MISSING_RESPONSE: &str = "There must be at least one response variable tagged.";
pub const MISSING_PROFILE: &str =
    "You must select a google analytics profile or select Exclude to omit this data.";
pub const MISSING_MERGE_KEY: &str =
    "You must have a Google Analytics merge variable or Exclude the GA data.";

/// Returns every rule violation, in the order they were found.
pub fn validate(fields: &[Field], session: &AnalyticsSession) -> Vec<String> {
    let mut errors = Vec::new();
    let mut responses = 0usize;
    let mut merge_keys = 0usize;

    for field in fields {
        match field.type_code {
            MERGE_KEY_CODE => {
                merge_keys += 1;
                if merge_keys > 1 {
                    errors.push(format!(
                        "Only one Google Analytics merge variable allowed: Duplicate found at {}",
                        field.name
                    ));
                }
            }
            RESPONSE_CODE => {
                responses += 1;
                if responses > 1 {
                    errors.push(format!(
                        "Only one response variable allowed: Duplicate found at {}",
                        field.name
                    ));
                }
            }
            UNSET_CODE => errors.push(format!(
                "Data type must be provided for all fields: Missing at {}",
                field.name
            )),
            _ => {}
        }
    }

    if responses == 0 {
        errors.push(MISSING_RESPONSE.to_string());
    }

    if session.credentials_present {
        match session.selected_profile {
            ProfileSelection::Unselected => errors.push(MISSING_PROFILE.to_string()),
            ProfileSelection::Profile(_) if merge_keys == 0 => {
                errors.push(MISSING_MERGE_KEY.to_string())
            }
            _ => {}
        }
    }

    errors
}

/// Outcome of [`validate`] as shown under the Build button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn run(fields: &[Field], session: &AnalyticsSession) -> Self {
        Self {
            errors: validate(fields, session),
        }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}
