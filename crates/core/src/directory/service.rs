//! Activity directory service - core business logic
//!
//! The set of activities is fixed at construction, so the outer map is never
//! mutated and needs no lock. Each activity sits behind its own mutex which is
//! held for the whole check-then-mutate sequence of a signup or withdrawal.

use std::collections::BTreeMap;

use mergington_common::StringValidator;
use mergington_domain::constants::EMAIL_FIELD;
use mergington_domain::{
    Activity, ActivityDetails, CapacityPolicy, MergingtonError, Result, SignupConfirmation,
};
use parking_lot::Mutex;
use tracing::{debug, info};

use super::ports::ActivityCatalog;

/// Trim `email` and require it to be present.
///
/// Format is not checked; any non-blank string is accepted.
///
/// # Errors
/// `InvalidInput` when the email is empty or whitespace.
pub fn normalize_email(email: &str) -> Result<String> {
    StringValidator::new()
        .not_empty()
        .normalize(email)
        .map_err(|message| MergingtonError::InvalidInput(format!("{EMAIL_FIELD} {message}")))
}

/// In-memory activity directory
pub struct ActivityDirectory {
    activities: BTreeMap<String, Mutex<Activity>>,
    policy: CapacityPolicy,
}

impl ActivityDirectory {
    /// Build a directory from `(name, details)` pairs.
    ///
    /// # Errors
    /// `Config` if a name repeats or an entry fails
    /// [`ActivityDetails::validate`] under `policy`.
    pub fn new<I>(entries: I, policy: CapacityPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (String, ActivityDetails)>,
    {
        let mut activities = BTreeMap::new();

        for (name, details) in entries {
            details.validate(&name, policy)?;
            if activities.contains_key(&name) {
                return Err(MergingtonError::Config(format!(
                    "activity '{name}' is defined more than once"
                )));
            }
            let activity = Activity::new(name.clone(), details);
            activities.insert(name, Mutex::new(activity));
        }

        Ok(Self { activities, policy })
    }

    /// Build a directory from a catalog port
    pub fn from_catalog(catalog: &dyn ActivityCatalog, policy: CapacityPolicy) -> Result<Self> {
        let entries = catalog.load()?;
        let directory = Self::new(entries, policy)?;

        info!(
            source = %catalog.describe(),
            activities = directory.len(),
            capacity = %policy,
            "activity directory ready"
        );

        Ok(directory)
    }

    /// Snapshot of every activity, keyed and ordered by name
    pub fn list(&self) -> BTreeMap<String, ActivityDetails> {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.lock().details().clone()))
            .collect()
    }

    /// Snapshot of one activity
    ///
    /// # Errors
    /// `NotFound` for an unknown name.
    pub fn get(&self, name: &str) -> Result<ActivityDetails> {
        Ok(self.entry(name)?.lock().details().clone())
    }

    /// Add `email` to the participants of `name`.
    ///
    /// # Errors
    /// - `InvalidInput` if `email` is blank
    /// - `NotFound` for an unknown activity
    /// - `AlreadyRegistered` if the email is already a participant
    /// - `ActivityFull` if the capacity policy is enforced and no places are left
    pub fn register(&self, name: &str, email: &str) -> Result<SignupConfirmation> {
        let email = normalize_email(email)?;
        let entry = self.entry(name)?;

        let confirmation = entry.lock().enroll(&email, self.policy)?;
        debug!(activity = name, "participant registered");

        Ok(confirmation)
    }

    /// Remove `email` from the participants of `name`.
    ///
    /// # Errors
    /// - `InvalidInput` if `email` is blank
    /// - `NotFound` for an unknown activity
    /// - `NotRegistered` if the email is not a participant
    pub fn unregister(&self, name: &str, email: &str) -> Result<SignupConfirmation> {
        let email = normalize_email(email)?;
        let entry = self.entry(name)?;

        let confirmation = entry.lock().withdraw(&email)?;
        debug!(activity = name, "participant unregistered");

        Ok(confirmation)
    }

    /// Number of activities (fixed after construction)
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Total registrations across all activities
    pub fn participant_count(&self) -> usize {
        self.activities.values().map(|activity| activity.lock().details().participants.len()).sum()
    }

    fn entry(&self, name: &str) -> Result<&Mutex<Activity>> {
        self.activities.get(name).ok_or_else(|| MergingtonError::NotFound(name.to_string()))
    }
}

impl std::fmt::Debug for ActivityDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityDirectory")
            .field("activities", &self.activities.keys().collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish()
    }
}
