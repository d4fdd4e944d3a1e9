//! Tests for toast_state

use super::*;
use proptest::prelude::*;

const DEFAULT: Duration = Duration::from_millis(3000);

fn entry(id: u64, request: ToastRequest) -> ToastEntry {
    ToastEntry::from_request(ToastId(id), request, DEFAULT)
}

#[test]
fn test_request_builders_set_kind() {
    assert_eq!(ToastRequest::success("a").kind, ToastKind::Success);
    assert_eq!(ToastRequest::error("a").kind, ToastKind::Error);
    assert_eq!(ToastRequest::warning("a").kind, ToastKind::Warning);
    assert_eq!(ToastRequest::info("a").kind, ToastKind::Info);
}

#[test]
fn test_entry_uses_default_duration() {
    let entry = entry(1, ToastRequest::success("Saved"));
    assert_eq!(entry.duration, DEFAULT);
    assert_eq!(entry.title, "Saved");
    assert_eq!(entry.message, None);
    assert!(!entry.is_persistent());
}

#[test]
fn test_entry_keeps_explicit_duration_and_message() {
    let entry = entry(
        2,
        ToastRequest::warning("Disk almost full")
            .message("12 MB left")
            .duration(Duration::from_millis(500)),
    );
    assert_eq!(entry.duration, Duration::from_millis(500));
    assert_eq!(entry.message.as_deref(), Some("12 MB left"));
}

#[test]
fn test_persistent_request_has_zero_duration() {
    let entry = entry(3, ToastRequest::error("Offline").persistent());
    assert!(entry.is_persistent());
}

#[test]
fn test_id_generator_is_monotonic() {
    let mut ids = ToastIdGenerator::new();
    let first = ids.next_id();
    let second = ids.next_id();
    assert!(second > first);
    assert_ne!(first, second);
}

#[test]
fn test_id_display() {
    assert_eq!(ToastId(7).to_string(), "toast-7");
    assert_eq!(ToastId(7).get(), 7);
}

#[test]
fn test_kind_icons_are_distinct() {
    let icons = [
        ToastKind::Success.icon(),
        ToastKind::Error.icon(),
        ToastKind::Warning.icon(),
        ToastKind::Info.icon(),
    ];
    for (i, a) in icons.iter().enumerate() {
        for b in &icons[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_kind_colors_follow_theme() {
    assert_eq!(ToastKind::Success.colors().accent, theme::palette::SUCCESS);
    assert_eq!(ToastKind::Error.colors().accent, theme::palette::ERROR);
    assert_eq!(ToastKind::Warning.colors().accent, theme::palette::WARNING);
    assert_eq!(ToastKind::Info.colors().accent, theme::palette::INFO);
}

#[test]
fn test_success_icon_snapshot() {
    insta::assert_snapshot!(ToastKind::Success.icon(), @"✓");
}

#[test]
fn test_toast_fires_after_exact_duration() {
    let start = Instant::now();
    let mut toast = Toast::mount(entry(1, ToastRequest::success("Saved")), start);

    assert_eq!(toast.tick(start + Duration::from_millis(2999)), None);
    assert_eq!(toast.tick(start + Duration::from_millis(3000)), Some(ToastId(1)));
    assert_eq!(toast.tick(start + Duration::from_millis(9000)), None);
}

#[test]
fn test_persistent_toast_never_fires() {
    let start = Instant::now();
    let mut toast = Toast::mount(entry(1, ToastRequest::info("Pinned").persistent()), start);

    assert_eq!(toast.deadline(), None);
    assert_eq!(toast.tick(start + Duration::from_secs(3600)), None);
}

#[test]
fn test_close_cancels_timer() {
    let start = Instant::now();
    let mut toast = Toast::mount(entry(4, ToastRequest::success("Saved")), start);

    assert_eq!(toast.close(), ToastId(4));
    assert_eq!(toast.deadline(), None);
    assert_eq!(toast.tick(start + Duration::from_secs(10)), None);
}

#[test]
fn test_set_duration_rearms_from_now() {
    let start = Instant::now();
    let mut toast = Toast::mount(entry(1, ToastRequest::success("Saved")), start);

    let later = start + Duration::from_millis(2000);
    toast.set_duration(Duration::from_millis(1000), later);

    // Old deadline at +3000 must not fire on its own
    assert_eq!(toast.tick(start + Duration::from_millis(2999)), None);
    assert_eq!(toast.deadline(), Some(later + Duration::from_millis(1000)));
    assert_eq!(toast.tick(later + Duration::from_millis(1000)), Some(ToastId(1)));
}

#[test]
fn test_set_duration_to_zero_disarms() {
    let start = Instant::now();
    let mut toast = Toast::mount(entry(1, ToastRequest::success("Saved")), start);

    toast.set_duration(Duration::ZERO, start);
    assert!(toast.entry().is_persistent());
    assert_eq!(toast.tick(start + Duration::from_secs(60)), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any positive duration the timer fires exactly at the deadline.
    #[test]
    fn prop_fires_exactly_at_duration(duration_ms in 1u64..100_000) {
        let start = Instant::now();
        let request = ToastRequest::info("t").duration(Duration::from_millis(duration_ms));
        let mut toast = Toast::mount(entry(1, request), start);

        prop_assert_eq!(toast.tick(start + Duration::from_millis(duration_ms - 1)), None);
        prop_assert_eq!(toast.tick(start + Duration::from_millis(duration_ms)), Some(ToastId(1)));
    }

    /// A toast closed before its deadline never fires afterwards.
    #[test]
    fn prop_closed_toast_never_fires(duration_ms in 1u64..100_000, probe_ms in 0u64..200_000) {
        let start = Instant::now();
        let request = ToastRequest::info("t").duration(Duration::from_millis(duration_ms));
        let mut toast = Toast::mount(entry(1, request), start);

        toast.close();
        prop_assert_eq!(toast.tick(start + Duration::from_millis(probe_ms)), None);
    }
}
