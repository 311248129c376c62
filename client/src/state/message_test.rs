use super::*;

#[test]
fn message_state_defaults_hidden() {
    let s = MessageState::default();
    assert!(!s.is_visible());
    assert_eq!(s.seq, 0);
}

#[test]
fn ttl_is_five_seconds() {
    assert_eq!(MESSAGE_TTL, Duration::from_secs(5));
}

#[test]
fn notice_kind_css_classes() {
    assert_eq!(NoticeKind::Success.css_class(), "success");
    assert_eq!(NoticeKind::Error.css_class(), "error");
}

#[test]
fn show_replaces_current_and_bumps_seq() {
    let mut s = MessageState::default();
    let first = s.show(Notice::success("Signed up"), 0.0);
    let second = s.show(Notice::error("Nope"), 10.0);
    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(s.current, Some(Notice::error("Nope")));
}

#[test]
fn message_is_not_cleared_before_window() {
    let mut s = MessageState::default();
    let seq = s.show(Notice::success("ok"), 1_000.0);
    assert!(!s.expire(seq, 5_999.0));
    assert!(s.is_visible());
}

#[test]
fn message_is_cleared_after_window() {
    let mut s = MessageState::default();
    let seq = s.show(Notice::success("ok"), 1_000.0);
    assert!(s.expire(seq, 6_000.0));
    assert!(!s.is_visible());
}

#[test]
fn stale_timer_does_not_hide_newer_message() {
    let mut s = MessageState::default();
    let old = s.show(Notice::success("first"), 0.0);
    let new = s.show(Notice::error("second"), 3_000.0);

    // The first message's timer fires at t=5000.
    assert!(!s.expire(old, 5_000.0));
    assert_eq!(s.current, Some(Notice::error("second")));

    // The second message's own timer still clears it on schedule.
    assert!(s.expire(new, 8_000.0));
    assert!(!s.is_visible());
}

#[test]
fn expire_twice_is_noop() {
    let mut s = MessageState::default();
    let seq = s.show(Notice::success("ok"), 0.0);
    assert!(s.expire(seq, 5_000.0));
    assert!(!s.expire(seq, 10_000.0));
}

#[test]
fn remaining_ms_counts_down_then_stops_for_stale_seq() {
    let mut s = MessageState::default();
    let seq = s.show(Notice::success("ok"), 1_000.0);
    assert_eq!(s.remaining_ms(seq, 2_000.0), Some(4_000.0));
    assert_eq!(s.remaining_ms(seq, 9_000.0), Some(0.0));
    s.show(Notice::success("newer"), 2_500.0);
    assert_eq!(s.remaining_ms(seq, 2_600.0), None);
}

#[test]
fn expiry_step_waits_out_an_early_wake() {
    let mut s = MessageState::default();
    let seq = s.show(Notice::success("ok"), 1_000.0);
    assert_eq!(s.expiry_step(seq, 5_500.0), ExpiryStep::Wait(Duration::from_millis(500)));
    assert_eq!(s.expiry_step(seq, 6_000.0), ExpiryStep::Expire);
}

#[test]
fn expiry_step_stops_for_superseded_or_cleared_message() {
    let mut s = MessageState::default();
    let old = s.show(Notice::success("first"), 0.0);
    let new = s.show(Notice::error("second"), 1_000.0);
    assert_eq!(s.expiry_step(old, 5_000.0), ExpiryStep::Stop);

    assert!(s.expire(new, 6_000.0));
    assert_eq!(s.expiry_step(new, 6_100.0), ExpiryStep::Stop);
}
