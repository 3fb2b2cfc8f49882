//! Google Analytics linkage state held by the dashboard page.
//!
//! The credential flow is a small state machine driven by three server round
//! trips: check that a credential file exists, list the profiles it grants
//! access to, and let the user pick one (or Exclude). Every transition takes
//! the current state and session by value and returns the next pair, so the
//! owning component never mutates either directly.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Id of the synthetic profile that opts out of the analytics merge.
pub const EXCLUDE_ID: &str = "0";
/// Display name of the synthetic opt-out profile.
pub const EXCLUDE_NAME: &str = "Exclude";
/// Id used while no profile has been picked.
pub const UNSELECTED_ID: &str = "-1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
}

impl Profile {
    pub fn exclude() -> Self {
        Self {
            id: EXCLUDE_ID.to_string(),
            name: EXCLUDE_NAME.to_string(),
        }
    }
}

/// The profile dropdown value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileSelection {
    #[default]
    Unselected,
    Exclude,
    Profile(String),
}

impl ProfileSelection {
    pub fn from_id(id: &str) -> Self {
        match id {
            UNSELECTED_ID => ProfileSelection::Unselected,
            EXCLUDE_ID => ProfileSelection::Exclude,
            other => ProfileSelection::Profile(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ProfileSelection::Unselected => UNSELECTED_ID,
            ProfileSelection::Exclude => EXCLUDE_ID,
            ProfileSelection::Profile(id) => id,
        }
    }

    pub fn is_real_profile(&self) -> bool {
        matches!(self, ProfileSelection::Profile(_))
    }
}

/// What the validator and request builder need to know about the analytics
/// linkage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsSession {
    pub credentials_present: bool,
    pub selected_profile: ProfileSelection,
}

impl AnalyticsSession {
    /// Token sent with the build request: the profile id when a real profile
    /// is linked, `"Exclude"` otherwise.
    pub fn link_token(&self) -> String {
        match &self.selected_profile {
            ProfileSelection::Profile(id) if self.credentials_present => id.clone(),
            _ => EXCLUDE_NAME.to_string(),
        }
    }
}

/// Visible stage of the credential panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CredentialState {
    #[default]
    NotConfigured,
    Checking,
    FetchingProfiles,
    /// Profiles available for selection, `Exclude` first.
    Connected { profiles: Vec<Profile> },
}

pub type Transition = (CredentialState, AnalyticsSession);

impl CredentialState {
    /// Page load, or the server acknowledged a new credential file.
    pub fn begin_check(self, session: AnalyticsSession) -> Transition {
        (CredentialState::Checking, session)
    }

    /// Outcome of the "do credentials exist" query.
    pub fn on_check(self, session: AnalyticsSession, outcome: Result<bool, ApiError>) -> Transition {
        match outcome {
            Ok(true) => (
                CredentialState::FetchingProfiles,
                AnalyticsSession {
                    credentials_present: true,
                    ..session
                },
            ),
            Ok(false) | Err(_) => (
                CredentialState::NotConfigured,
                AnalyticsSession {
                    credentials_present: false,
                    ..session
                },
            ),
        }
    }

    /// Outcome of the profile listing. A failure returns to `NotConfigured`
    /// but keeps the credential flag set by the preceding check.
    pub fn on_profiles(
        self,
        session: AnalyticsSession,
        outcome: Result<Vec<Profile>, ApiError>,
    ) -> Transition {
        match outcome {
            Ok(listed) => {
                let mut profiles = Vec::with_capacity(listed.len() + 1);
                profiles.push(Profile::exclude());
                profiles.extend(listed);
                (
                    CredentialState::Connected { profiles },
                    AnalyticsSession {
                        selected_profile: ProfileSelection::Unselected,
                        ..session
                    },
                )
            }
            Err(_) => (CredentialState::NotConfigured, session),
        }
    }

    /// The server acknowledged removal of the credential file.
    pub fn on_removed(self, _session: AnalyticsSession) -> Transition {
        (CredentialState::NotConfigured, AnalyticsSession::default())
    }

    /// User picked an entry from the profile dropdown.
    pub fn select_profile(self, session: AnalyticsSession, id: &str) -> Transition {
        (
            self,
            AnalyticsSession {
                selected_profile: ProfileSelection::from_id(id),
                ..session
            },
        )
    }

    pub fn profiles(&self) -> &[Profile] {
        match self {
            CredentialState::Connected { profiles } => profiles,
            _ => &[],
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            CredentialState::Checking | CredentialState::FetchingProfiles
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn full_happy_path_reaches_connected() {
        let (state, session) = CredentialState::default().begin_check(AnalyticsSession::default());
        assert_eq!(state, CredentialState::Checking);
        assert!(state.is_busy());

        let (state, session) = state.on_check(session, Ok(true));
        assert_eq!(state, CredentialState::FetchingProfiles);
        assert!(session.credentials_present);

        let (state, session) = state.on_profiles(session, Ok(vec![profile("5", "Shop")]));
        assert_eq!(
            state.profiles(),
            &[Profile::exclude(), profile("5", "Shop")]
        );
        assert_eq!(session.selected_profile, ProfileSelection::Unselected);

        let (_, session) = state.select_profile(session, "5");
        assert_eq!(session.selected_profile, ProfileSelection::Profile("5".into()));
        assert_eq!(session.link_token(), "5");
    }

    #[test]
    fn failed_or_negative_check_is_not_configured() {
        for outcome in [Ok(false), Err(ApiError::Malformed)] {
            let session = AnalyticsSession {
                credentials_present: true,
                selected_profile: ProfileSelection::Exclude,
            };
            let (state, session) = CredentialState::Checking.on_check(session, outcome);
            assert_eq!(state, CredentialState::NotConfigured);
            assert!(!session.credentials_present);
        }
    }

    #[test]
    fn profile_failure_keeps_credential_flag() {
        let session = AnalyticsSession {
            credentials_present: true,
            selected_profile: ProfileSelection::Unselected,
        };
        let (state, session) = CredentialState::FetchingProfiles
            .on_profiles(session, Err(ApiError::Rejected(Some("quota".into()))));
        assert_eq!(state, CredentialState::NotConfigured);
        assert!(session.credentials_present);
    }

    #[test]
    fn removal_resets_session() {
        let session = AnalyticsSession {
            credentials_present: true,
            selected_profile: ProfileSelection::Profile("12".into()),
        };
        let state = CredentialState::Connected {
            profiles: vec![Profile::exclude()],
        };
        let (state, session) = state.on_removed(session);
        assert_eq!(state, CredentialState::NotConfigured);
        assert_eq!(session, AnalyticsSession::default());
    }

    #[test]
    fn selection_ids_map_to_variants() {
        assert_eq!(ProfileSelection::from_id("-1"), ProfileSelection::Unselected);
        assert_eq!(ProfileSelection::from_id("0"), ProfileSelection::Exclude);
        assert_eq!(ProfileSelection::from_id("77").id(), "77");
        assert!(!ProfileSelection::Exclude.is_real_profile());
    }

    #[test]
    fn link_token_excludes_without_credentials() {
        let session = AnalyticsSession {
            credentials_present: false,
            selected_profile: ProfileSelection::Profile("5".into()),
        };
        assert_eq!(session.link_token(), "Exclude");

        let session = AnalyticsSession {
            credentials_present: true,
            selected_profile: ProfileSelection::Exclude,
        };
        assert_eq!(session.link_token(), "Exclude");
    }
}
