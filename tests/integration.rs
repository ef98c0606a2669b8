use chrono::NaiveDate;
use waqt::{Adjustments, DailySchedule, Point, ScheduleModel, TimePoint};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn schedule() -> DailySchedule {
    let times = [
        (Point::Dawn, "05:00"),
        (Point::Sunrise, "06:20"),
        (Point::Midday, "12:05"),
        (Point::Afternoon, "15:30"),
        (Point::Sunset, "18:10"),
        (Point::Night, "19:40"),
    ]
    .iter()
    .map(|&(p, t)| TimePoint::parse(p, t).unwrap())
    .collect();
    DailySchedule::new(day(), "24 Ramadan 1447", times)
}

#[test]
fn countdown_is_strictly_decreasing_until_rollover() {
    // Tick second by second across the Sunset -> Night boundary: the
    // countdown must fall by exactly one each tick, reach the boundary, and
    // restart from the next period's full span.
    let mut model = ScheduleModel::new(schedule());
    model.set_clock(day().and_hms_opt(19, 39, 30).unwrap());

    let mut prev = model.current_period().remaining.total_seconds();
    assert_eq!(prev, 30);
    for _ in 0..30 {
        model.advance_clock(0, 0, 1);
        let status = model.current_period();
        let left = status.remaining.total_seconds();
        if status.now == Point::Sunset {
            assert_eq!(left, prev - 1);
        } else {
            assert_eq!(status.now, Point::Night);
            assert_eq!(status.next, Point::Dawn);
            // 19:40:00 -> next-day 05:00:00
            assert_eq!(left, 9 * 3600 + 20 * 60);
        }
        prev = left;
    }
}

#[test]
fn night_adjustment_pulls_the_wraparound_period_forward() {
    // Night 19:40 - 10 min = 19:30: at 19:35 we are already in the
    // wraparound period and the next point is tomorrow's Dawn.
    let adj = Adjustments::new([0, 0, 0, 0, 0, -10]);
    let mut model = ScheduleModel::with_adjustments(schedule(), adj);
    model.set_clock(day().and_hms_opt(19, 35, 0).unwrap());

    let status = model.current_period();
    assert_eq!(status.now, Point::Night);
    assert_eq!(status.next, Point::Dawn);
    assert_eq!(model.adjusted_label(Point::Night), "19:30");
    // 19:35 -> 05:00 next day
    assert_eq!(status.remaining.as_hms(), [9, 25, 0]);
}

#[test]
fn ticking_across_midnight_keeps_answering() {
    // A model left running past midnight anchors to the new calendar day:
    // still the wraparound period, now counting down to today's Dawn.
    let mut model = ScheduleModel::new(schedule());
    model.set_clock(day().and_hms_opt(23, 59, 59).unwrap());
    assert_eq!(model.current_period().now, Point::Night);

    model.advance_clock(0, 0, 1);
    let status = model.current_period();
    assert_eq!(status.now, Point::Night);
    assert_eq!(status.next, Point::Dawn);
    assert_eq!(status.remaining.as_hms(), [5, 0, 0]);
}

#[test]
fn loading_state_renders_frozen_placeholders() {
    // The contract UI code relies on while the provider has not answered:
    // sentinels everywhere, no panic anywhere.
    let mut model = ScheduleModel::new(DailySchedule::new(day(), "", Vec::new()));
    model.set_clock(day().and_hms_opt(9, 15, 0).unwrap());

    let status = model.current_period();
    assert_eq!(status.now, Point::Night);
    assert_eq!(status.next, Point::Dawn);
    assert_eq!(model.time_until_next(), "00:00:00");
    for p in Point::ALL {
        assert_eq!(model.adjusted_label(p), "00:00");
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_schedule_wire_format_uses_hh_mm() {
    let json = serde_json::to_string(&schedule()).unwrap();
    assert!(json.contains("\"05:00\""));
    assert!(json.contains("24 Ramadan 1447"));

    let back: DailySchedule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, schedule());
}
