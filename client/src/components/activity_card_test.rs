use super::*;

#[test]
fn register_button_label_reflects_capacity() {
    assert_eq!(register_button_label(false), "Register Student");
    assert_eq!(register_button_label(true), "Activity Full");
}

#[test]
fn full_activity_gets_disabled_label() {
    let activity = Activity {
        description: "d".to_owned(),
        schedule: "s".to_owned(),
        max_participants: 2,
        participants: vec!["a@mergington.edu".to_owned(), "b@mergington.edu".to_owned()],
    };
    assert_eq!(register_button_label(activity.is_full()), "Activity Full");
}
