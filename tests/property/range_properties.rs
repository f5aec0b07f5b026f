// Property-based tests for the range consistency rules
// Drives the controller with random event sequences

use chrono::{DateTime, Duration, Local, TimeZone};
use date_range_picker::services::range::RangeConsistencyController;
use proptest::prelude::*;

fn t0() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn at(minutes: i64) -> DateTime<Local> {
    t0() + Duration::minutes(minutes)
}

#[derive(Debug, Clone, Copy)]
enum PickerEvent {
    Start(i64),
    End(i64),
}

fn picker_event() -> impl Strategy<Value = PickerEvent> {
    prop_oneof![
        (-500_000i64..500_000).prop_map(PickerEvent::Start),
        (-500_000i64..500_000).prop_map(PickerEvent::End),
    ]
}

proptest! {
    /// Property: an end date before the start always resolves to the start
    #[test]
    fn prop_end_before_start_is_clamped(s in -500_000i64..500_000, back in 1i64..100_000) {
        let mut controller = RangeConsistencyController::with_now(t0());
        controller.on_start_date_changed(at(s));
        let range = controller.on_end_date_changed(at(s - back));
        prop_assert_eq!(range.end, at(s));
        prop_assert_eq!(range.start, at(s));
    }

    /// Property: moving the start past the end drags the end along
    #[test]
    fn prop_later_start_drags_end(s1 in -500_000i64..0, gap in 1i64..100_000, extra in 1i64..100_000) {
        let mut controller = RangeConsistencyController::with_now(t0());
        controller.on_start_date_changed(at(s1));
        controller.on_end_date_changed(at(s1 + gap));

        let s2 = s1 + gap + extra;
        let range = controller.on_start_date_changed(at(s2));
        prop_assert_eq!(range.end, at(s2));
    }

    /// Property: repeating a start change gives the same range
    #[test]
    fn prop_start_change_is_idempotent(events in prop::collection::vec(picker_event(), 0..20), s in -500_000i64..500_000) {
        let mut controller = RangeConsistencyController::with_now(t0());
        for event in events {
            match event {
                PickerEvent::Start(m) => { controller.on_start_date_changed(at(m)); }
                PickerEvent::End(m) => { controller.on_end_date_changed(at(m)); }
            }
        }
        let first = controller.on_start_date_changed(at(s));
        let second = controller.on_start_date_changed(at(s));
        prop_assert_eq!(first, second);
    }

    /// Property: the invariant survives any event sequence
    #[test]
    fn prop_end_never_precedes_start(events in prop::collection::vec(picker_event(), 1..50)) {
        let mut controller = RangeConsistencyController::with_now(t0());
        for event in events {
            let range = match event {
                PickerEvent::Start(m) => controller.on_start_date_changed(at(m)),
                PickerEvent::End(m) => controller.on_end_date_changed(at(m)),
            };
            prop_assert!(range.is_consistent());
            prop_assert!(controller.selected_end() >= controller.selected_start());
        }
    }
}
