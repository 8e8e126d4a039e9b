//! Activity and signup types
//!
//! An [`Activity`] owns its participant list and enforces the signup rules on
//! it; callers that share activities across threads are responsible for
//! serialising access (see `mergington-core`).

use std::fmt;

use mergington_common::StringValidator;
use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_FIELD;
use crate::errors::{MergingtonError, Result};
use crate::impl_setting_conversions;

/// Whether `max_participants` is enforced on signup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// Capacity is informational only; signups are never rejected for size
    #[default]
    Advisory,
    /// Signups are rejected once the activity holds `max_participants`
    Enforced,
}

impl_setting_conversions!(CapacityPolicy {
    Advisory => "advisory",
    Enforced => "enforced",
});

/// Activity metadata plus its current participants.
///
/// This is the wire shape of one entry in `GET /activities` and of one
/// entry in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails in signup order, no duplicates
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Create an activity with no participants
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder helper for seeding participants
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.extend(participants.into_iter().map(Into::into));
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Check a seeded activity before it is admitted into a directory.
    ///
    /// Seeded participants obey the same presence rule as signups and, under
    /// [`CapacityPolicy::Enforced`], must fit within `max_participants`.
    ///
    /// # Errors
    /// Returns `MergingtonError::Config` for an empty name, a zero capacity,
    /// a blank or untrimmed participant, a participant listed twice, or an
    /// enforced activity seeded over capacity.
    pub fn validate(&self, name: &str, policy: CapacityPolicy) -> Result<()> {
        if name.trim().is_empty() {
            return Err(MergingtonError::Config("activity name must not be empty".into()));
        }
        if self.max_participants == 0 {
            return Err(MergingtonError::Config(format!(
                "activity '{name}' must allow at least one participant"
            )));
        }

        let presence = StringValidator::new().not_empty();
        for (idx, email) in self.participants.iter().enumerate() {
            let normalized = presence.normalize(email).map_err(|message| {
                MergingtonError::Config(format!(
                    "activity '{name}' participant #{}: {EMAIL_FIELD} {message}",
                    idx + 1
                ))
            })?;
            if normalized != *email {
                return Err(MergingtonError::Config(format!(
                    "activity '{name}' participant '{email}' has surrounding whitespace"
                )));
            }
            if self.participants[..idx].contains(email) {
                return Err(MergingtonError::Config(format!(
                    "activity '{name}' lists participant '{email}' more than once"
                )));
            }
        }

        if policy == CapacityPolicy::Enforced
            && self.participants.len() > self.max_participants as usize
        {
            return Err(MergingtonError::Config(format!(
                "activity '{name}' is seeded with {} participants but allows {}",
                self.participants.len(),
                self.max_participants
            )));
        }
        Ok(())
    }
}

/// A named activity with its mutable participant list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self { name: name.into(), details }
    }

    pub fn details(&self) -> &ActivityDetails {
        &self.details
    }

    /// Add `email` to the participants.
    ///
    /// Duplicate detection runs before the capacity check, so a registered
    /// email always gets `AlreadyRegistered`. State is untouched on error.
    ///
    /// # Errors
    /// - `AlreadyRegistered` if `email` is already a participant
    /// - `ActivityFull` if `policy` is `Enforced` and no places are left
    pub fn enroll(&mut self, email: &str, policy: CapacityPolicy) -> Result<SignupConfirmation> {
        if self.details.is_registered(email) {
            return Err(MergingtonError::AlreadyRegistered {
                activity: self.name.clone(),
                email: email.to_string(),
            });
        }
        if policy == CapacityPolicy::Enforced && self.details.is_full() {
            return Err(MergingtonError::ActivityFull {
                activity: self.name.clone(),
                capacity: self.details.max_participants,
            });
        }

        self.details.participants.push(email.to_string());
        Ok(SignupConfirmation::new(SignupAction::SignedUp, &self.name, email))
    }

    /// Remove `email` from the participants.
    ///
    /// # Errors
    /// `NotRegistered` if `email` is not a participant.
    pub fn withdraw(&mut self, email: &str) -> Result<SignupConfirmation> {
        let position =
            self.details.participants.iter().position(|p| p == email).ok_or_else(|| {
                MergingtonError::NotRegistered {
                    activity: self.name.clone(),
                    email: email.to_string(),
                }
            })?;

        self.details.participants.remove(position);
        Ok(SignupConfirmation::new(SignupAction::Unregistered, &self.name, email))
    }
}

/// Which mutation a confirmation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupAction {
    SignedUp,
    Unregistered,
}

/// Outcome of a successful register/unregister
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupConfirmation {
    pub action: SignupAction,
    pub activity: String,
    pub email: String,
}

impl SignupConfirmation {
    pub fn new(action: SignupAction, activity: &str, email: &str) -> Self {
        Self { action, activity: activity.to_string(), email: email.to_string() }
    }

    /// Sentence returned to callers, e.g. `Signed up a@b.c for Chess Club`
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SignupConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            SignupAction::SignedUp => write!(f, "Signed up {} for {}", self.email, self.activity),
            SignupAction::Unregistered => {
                write!(f, "Unregistered {} from {}", self.email, self.activity)
            }
        }
    }
}
