//! Integration tests for the signup rules on a single activity
//!
//! Scenarios mirror how the directory drives an activity: a sequence of
//! enrolments and withdrawals by different students.

use mergington_domain::{
    Activity, ActivityDetails, CapacityPolicy, MergingtonError, SignupAction,
};

fn programming_class() -> Activity {
    Activity::new(
        "Programming Class",
        ActivityDetails::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    )
}

/// Every successful enrolment is visible, and a second attempt is rejected
#[test]
fn test_enroll_then_duplicate_for_many_students() {
    let mut activity = programming_class();

    for n in 0..10 {
        let email = format!("student{n}@mergington.edu");
        let confirmation = activity.enroll(&email, CapacityPolicy::Advisory).unwrap();
        assert_eq!(confirmation.action, SignupAction::SignedUp);
        assert!(activity.details().is_registered(&email));

        let snapshot = activity.details().clone();
        let err = activity.enroll(&email, CapacityPolicy::Advisory).unwrap_err();
        assert!(matches!(err, MergingtonError::AlreadyRegistered { .. }));
        assert_eq!(activity.details(), &snapshot, "failed enroll must not change state");
    }

    assert_eq!(activity.details().participants.len(), 12);
    assert!(!activity.details().is_full());
}

/// Withdrawing a student who never enrolled fails for every email
#[test]
fn test_withdraw_without_enroll_fails() {
    let mut activity = programming_class();

    for email in ["", "EMMA@mergington.edu", "nobody@mergington.edu"] {
        let err = activity.withdraw(email).unwrap_err();
        assert_eq!(
            err,
            MergingtonError::NotRegistered {
                activity: "Programming Class".into(),
                email: email.into(),
            }
        );
    }
}

/// Enrol and withdraw interleaved across students leaves the seed intact
#[test]
fn test_interleaved_round_trips() {
    let mut activity = programming_class();
    let seed = activity.details().clone();

    activity.enroll("a@mergington.edu", CapacityPolicy::Advisory).unwrap();
    activity.enroll("b@mergington.edu", CapacityPolicy::Advisory).unwrap();
    activity.withdraw("a@mergington.edu").unwrap();
    activity.enroll("c@mergington.edu", CapacityPolicy::Advisory).unwrap();
    activity.withdraw("c@mergington.edu").unwrap();
    activity.withdraw("b@mergington.edu").unwrap();

    assert_eq!(activity.details(), &seed);
}

/// Withdrawing a seeded participant frees a place under the enforced policy
#[test]
fn test_withdraw_frees_capacity() {
    let mut activity = Activity::new(
        "Debate Team",
        ActivityDetails::new("Argue", "Fridays", 1).with_participants(["ava@mergington.edu"]),
    );

    assert!(activity.enroll("new@mergington.edu", CapacityPolicy::Enforced).is_err());
    activity.withdraw("ava@mergington.edu").unwrap();
    assert!(activity.enroll("new@mergington.edu", CapacityPolicy::Enforced).is_ok());
}

#[test]
fn test_details_wire_shape() {
    let activity = programming_class();
    let json = serde_json::to_value(activity.details()).unwrap();

    assert_eq!(json["max_participants"], 20);
    assert_eq!(json["participants"][0], "emma@mergington.edu");
    assert!(json["description"].is_string());
    assert!(json["schedule"].is_string());
}
