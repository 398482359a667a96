//! Catalog resolution and schedule assembly against fixture catalogs.

use crate::integration::test_utils::{fixture_assembler, FixtureCatalog, CS2040_JSON};
use modpocket::catalog::CatalogResolver;
use modpocket::schedule::ScheduleAssembler;
use modpocket::share_url;
use modpocket::types::ResolutionStatus;

const YEAR: &str = "2024-2025";

#[tokio::test]
async fn test_every_selected_module_gets_a_key() {
    let assembler = fixture_assembler();
    let selection = share_url::decode(
        "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1&XX9999=LEC:1&GEA1000=SEC:D1",
    )
    .unwrap();

    let schedule = assembler.assemble(&selection, YEAR).await;

    assert_eq!(schedule.module_codes(), vec!["CS2040", "XX9999", "GEA1000"]);
    assert_eq!(schedule.lessons("CS2040").unwrap().len(), 2);
    assert!(schedule.lessons("XX9999").unwrap().is_empty());
    assert!(matches!(
        schedule.get("XX9999").unwrap().status,
        ResolutionStatus::Unavailable { .. }
    ));
    assert_eq!(
        schedule.get("GEA1000").unwrap().status,
        ResolutionStatus::TermNotOffered
    );
}

#[tokio::test]
async fn test_lecture_meeting_twice_yields_two_lessons() {
    let assembler = fixture_assembler();
    let selection =
        share_url::decode("https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1").unwrap();

    let schedule = assembler.assemble(&selection, YEAR).await;
    let days: Vec<_> = schedule
        .lessons("CS2040")
        .unwrap()
        .iter()
        .map(|l| l.day.as_str())
        .collect();
    assert_eq!(days, vec!["Monday", "Thursday"]);
}

#[tokio::test]
async fn test_repeated_class_spellings_each_lesson_once() {
    let assembler = fixture_assembler();
    for url in [
        "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:(1,01)",
        "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1;LECTURE:1",
    ] {
        let selection = share_url::decode(url).unwrap();
        let schedule = assembler.assemble(&selection, YEAR).await;
        let resolution = schedule.get("CS2040").unwrap();
        assert_eq!(resolution.lessons.len(), 2, "{}", url);
        assert!(resolution.unmatched.is_empty(), "{}", url);
    }
}

#[tokio::test]
async fn test_zero_padding_and_numeric_class_numbers() {
    let assembler = fixture_assembler();
    let padded = share_url::decode(
        "https://nusmods.com/timetable/sem-1/share?CS2040=TUT:(5);LAB:(03)",
    )
    .unwrap();
    let plain =
        share_url::decode("https://nusmods.com/timetable/sem-1/share?CS2040=TUT:(05);LAB:(3)")
            .unwrap();

    let a = assembler.assemble(&padded, YEAR).await;
    let b = assembler.assemble(&plain, YEAR).await;
    assert_eq!(a.lessons("CS2040"), b.lessons("CS2040"));

    let lessons = a.lessons("CS2040").unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[1].lesson_type, "Laboratory");
    assert_eq!(lessons[1].class_no, "3");
    assert_eq!(lessons[1].venue, "TBA");
}

#[tokio::test]
async fn test_unmatched_pairs_are_reported_not_fatal() {
    let assembler = fixture_assembler();
    let selection = share_url::decode(
        "https://nusmods.com/timetable/sem-1/share?MA1521=LEC:1;TUT:99",
    )
    .unwrap();

    let schedule = assembler.assemble(&selection, YEAR).await;
    let resolution = schedule.get("MA1521").unwrap();
    assert!(resolution.is_resolved());
    assert_eq!(resolution.lessons.len(), 1);
    assert_eq!(resolution.unmatched.len(), 1);
    assert_eq!(resolution.unmatched[0].lesson_type, "TUT");
    assert_eq!(resolution.unmatched[0].class_no, "99");
}

#[tokio::test]
async fn test_term_filtering_uses_requested_term() {
    let assembler = fixture_assembler();
    let selection =
        share_url::decode("https://nusmods.com/timetable/sem-2/share?CS2040=LEC:2").unwrap();

    let schedule = assembler.assemble(&selection, YEAR).await;
    let lessons = schedule.lessons("CS2040").unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].venue, "LT19");
}

#[tokio::test]
async fn test_one_request_per_module_with_given_year() {
    let assembler = ScheduleAssembler::new(CatalogResolver::new(FixtureCatalog::new(&[(
        "CS2040",
        CS2040_JSON,
    )])))
    .with_max_concurrent(1);
    let selection = share_url::decode(
        "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1&MA1521=LEC:1",
    )
    .unwrap();

    assembler.assemble(&selection, YEAR).await;

    let source = assembler.resolver().source();
    assert_eq!(source.request_count(), 2);
    assert_eq!(source.academic_years(), vec![YEAR, YEAR]);
}
