use chrono::NaiveDate;
use waqt::{Adjustments, DailySchedule, Point, ScheduleModel, TimePoint};

fn main() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let times = vec![
        TimePoint::parse(Point::Dawn, "05:00").unwrap(),
        TimePoint::parse(Point::Sunrise, "06:20").unwrap(),
        TimePoint::parse(Point::Midday, "12:05").unwrap(),
        TimePoint::parse(Point::Afternoon, "15:30").unwrap(),
        TimePoint::parse(Point::Sunset, "18:10").unwrap(),
        TimePoint::parse(Point::Night, "19:40").unwrap(),
    ];
    let schedule = DailySchedule::new(date, "24 Ramadan 1447", times);
    let model = ScheduleModel::with_adjustments(schedule, Adjustments::ZERO);

    let status = model.current_period();
    println!("clock: {}", model.clock());
    println!("current period: {}", status.now);
    println!("next point: {} at {}", status.next, model.adjusted_label(status.next));
    println!("remaining: {}", status.remaining);
}
