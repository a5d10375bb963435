//! Calendar-wide checks of the upcoming-birthday window.

use chrono::{Datelike, NaiveDate, Weekday};
use contact_assistant::models::UPCOMING_WINDOW_DAYS;
use contact_assistant::{AddressBook, Record};

fn record_born_on(date: NaiveDate) -> Record {
    let mut record = Record::with_name("Subject").unwrap();
    record
        .add_birthday(&date.format("%d.%m.%Y").to_string())
        .unwrap();
    record
}

/// Every day of 2023 and 2024 (a non-leap and a leap year).
fn days() -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    start.iter_days().take(365 + 366)
}

#[test]
fn test_congratulation_is_never_on_a_weekend_and_always_in_window() {
    let record = record_born_on(NaiveDate::from_ymd_opt(1990, 1, 6).unwrap());

    for today in days() {
        if let Some(upcoming) = record.upcoming_birthday(today) {
            let date = upcoming.congratulation_date;
            assert!(
                !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                "{} lands on a weekend",
                date
            );
            let delta = (date - today).num_days();
            assert!(
                (0..=UPCOMING_WINDOW_DAYS).contains(&delta),
                "delta {} out of window for today {}",
                delta,
                today
            );
        }
    }
}

#[test]
fn test_each_weekday_birthday_is_reported_for_eight_days() {
    // 03.01.2024 is a Wednesday: reported from 27.12.2023 through 03.01.2024
    let record = record_born_on(NaiveDate::from_ymd_opt(1990, 1, 3).unwrap());

    let hits: Vec<NaiveDate> = days()
        .filter(|today| {
            record
                .upcoming_birthday(*today)
                .map(|u| u.congratulation_date == NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
                .unwrap_or(false)
        })
        .collect();

    assert_eq!(hits.len(), 8);
    assert_eq!(hits[0], NaiveDate::from_ymd_opt(2023, 12, 27).unwrap());
    assert_eq!(hits[7], NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
}

#[test]
fn test_leap_day_birthday_reported_every_year() {
    let record = record_born_on(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());

    for year in 2021..=2028 {
        let today = NaiveDate::from_ymd_opt(year, 2, 23).unwrap();
        let upcoming = record
            .upcoming_birthday(today)
            .unwrap_or_else(|| panic!("no entry for {}", year));
        assert_eq!(upcoming.congratulation_date.year(), year);
        assert!(upcoming.congratulation_date.month() <= 3);
    }
}

#[test]
fn test_book_without_birthdays_reports_nothing() {
    let mut book = AddressBook::new();
    book.add_record(Record::with_name("Alice").unwrap());
    book.add_record(Record::with_name("Bob").unwrap());

    for today in days() {
        assert!(book.upcoming_birthdays(today).is_empty());
    }
}
