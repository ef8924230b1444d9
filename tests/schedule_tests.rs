//! Integration tests for review scheduling

use chrono::{Duration, Utc};
use memorize::domain::ReviewSchedule;

#[test]
fn constant_perfect_ratings_grow_geometrically() {
    let now = Utc::now();
    let mut schedule = ReviewSchedule::starting_at(now);

    // Easiness commits 2.5 -> 2.6 -> 2.7 -> 2.8 and the delay recurrence
    // multiplies by the stored value at each simulated repetition.
    let expected = [1.0, 6.0, 16.2, 47.04];
    for days in expected {
        let delay = schedule.plan_at(5, now).unwrap();
        assert!(
            (delay - days).abs() < 1e-6,
            "expected delay {}, got {}",
            days,
            delay
        );
    }
}

#[test]
fn one_bad_answer_collapses_the_interval() {
    let now = Utc::now();
    let mut schedule = ReviewSchedule::starting_at(now);
    for _ in 0..6 {
        schedule.plan_at(5, now).unwrap();
    }

    let delay = schedule.plan_at(1, now).unwrap();
    assert!((delay - 1.0).abs() < 1e-9);
    assert!(schedule.next_practice_timestamp() < now + Duration::days(1) + Duration::seconds(3600));
}

#[test]
fn easiness_never_drops_below_floor() {
    let now = Utc::now();
    let mut schedule = ReviewSchedule::starting_at(now);
    for _ in 0..50 {
        schedule.plan_at(0, now).unwrap();
    }
    assert!(schedule.easiness() >= 1.3);
    assert!((schedule.easiness() - 1.3).abs() < 1e-9);
}

#[test]
fn counter_grows_only_on_good_answers() {
    let now = Utc::now();
    let mut schedule = ReviewSchedule::starting_at(now);
    assert_eq!(schedule.practiced(), 1);

    schedule.plan_at(2, now).unwrap();
    schedule.plan_at(3, now).unwrap();
    assert_eq!(schedule.practiced(), 1);

    schedule.plan_at(4, now).unwrap();
    schedule.plan_at(5, now).unwrap();
    assert_eq!(schedule.practiced(), 3);
}

#[test]
fn sort_keys_order_by_due_date() {
    let now = Utc::now();
    let mut early = ReviewSchedule::starting_at(now);
    let mut late = ReviewSchedule::starting_at(now);
    early.plan_at(5, now).unwrap(); // one day out
    late.plan_at(5, now).unwrap();
    late.plan_at(5, now).unwrap(); // six days out

    assert!(early.date_sort_key() < late.date_sort_key());
}

#[test]
fn fresh_schedules_are_due_within_the_hour() {
    let now = Utc::now();
    let schedule = ReviewSchedule::starting_at(now);
    assert!(!schedule.is_due(now - Duration::seconds(1)));
    assert!(schedule.is_due(now + Duration::seconds(3600)));
}
