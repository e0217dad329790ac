//! Immutable per-user preference store.

use crate::AnalysisError;
use cadence_types::UserPreference;
use std::collections::HashMap;

/// In-memory mapping from user identifier to speaking preferences.
///
/// Populated once at startup from configuration and never mutated at
/// request time, so it can be shared across connections without locking.
/// If runtime preference updates are ever added, they must swap in a whole
/// new snapshot so concurrent readers never see a partial record.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    users: HashMap<String, UserPreference>,
}

impl PreferenceStore {
    /// Builds a store from preference records.
    ///
    /// A later record with the same `user_id` replaces an earlier one.
    pub fn new(prefs: impl IntoIterator<Item = UserPreference>) -> Self {
        let users = prefs
            .into_iter()
            .map(|pref| (pref.user_id.clone(), pref))
            .collect();
        Self { users }
    }

    /// Looks up the preference record for a user.
    ///
    /// Unknown users are an explicit error rather than an empty default:
    /// silently defaulting would mask a configuration mismatch between the
    /// caller and the deployed user table.
    pub fn get(&self, user_id: &str) -> Result<&UserPreference, AnalysisError> {
        self.users
            .get(user_id)
            .ok_or_else(|| AnalysisError::UnknownUser(user_id.to_string()))
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_types::Pace;
    use std::collections::HashSet;

    fn pref(user_id: &str, pace: Pace) -> UserPreference {
        UserPreference {
            user_id: user_id.to_string(),
            preferred_pace: pace,
            allowed_fillers: HashSet::new(),
        }
    }

    #[test]
    fn get_returns_registered_preference() {
        let store = PreferenceStore::new([pref("User1", Pace::Normal)]);
        let found = store.get("User1").unwrap();
        assert_eq!(found.preferred_pace, Pace::Normal);
    }

    #[test]
    fn get_unknown_user_is_an_explicit_error() {
        let store = PreferenceStore::new([pref("User1", Pace::Normal)]);
        let err = store.get("nobody").unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownUser(ref id) if id == "nobody"));
    }

    #[test]
    fn later_duplicate_replaces_earlier_record() {
        let store = PreferenceStore::new([pref("User1", Pace::Slow), pref("User1", Pace::Fast)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("User1").unwrap().preferred_pace, Pace::Fast);
    }
}
