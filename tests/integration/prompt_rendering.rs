//! Rendering prompts from schedules assembled out of fixture data.

use crate::integration::test_utils::{fixture_assembler, FixtureCatalog, GEA1000_JSON};
use modpocket::catalog::CatalogResolver;
use modpocket::prompt::{self, EMPTY_SCHEDULE_TEXT};
use modpocket::schedule::ScheduleAssembler;
use modpocket::share_url;
use modpocket::types::{StyleChoice, Theme};

#[tokio::test]
async fn test_prompt_groups_lessons_by_weekday() {
    let selection = share_url::decode(
        "https://nusmods.com/timetable/sem-1/share?MA1521=LEC:1;TUT:12&CS2040=LEC:1;TUT:05",
    )
    .unwrap();
    let schedule = fixture_assembler().assemble(&selection, "2024-2025").await;

    let text = prompt::format_schedule(&schedule);
    assert_eq!(
        text,
        "## Monday\n\
         - CS2040 — Lecture — 10:00–12:00 @ I3-AUD\n\
         \n\
         ## Tuesday\n\
         - MA1521 — Lecture — 16:00–18:00 @ LT27\n\
         \n\
         ## Wednesday\n\
         - CS2040 — Tutorial — 09:00–10:00 @ COM1-0208\n\
         \n\
         ## Thursday\n\
         - MA1521 — Tutorial — 08:00–09:00 @ TBA\n\
         - CS2040 — Lecture — 10:00–11:00 @ I3-AUD"
    );

    let rendered = prompt::render(&schedule, &StyleChoice::new("glass", Theme::Dark), "9:16");
    assert!(rendered.contains(&text));
    assert!(rendered.contains("STYLE: Glass (Dark Mode)\nDark blur, smoked glass cards"));
}

#[tokio::test]
async fn test_unscheduled_lessons_are_listed_separately() {
    let assembler = ScheduleAssembler::new(CatalogResolver::new(FixtureCatalog::new(&[(
        "GEA1000",
        GEA1000_JSON,
    )])));
    let selection =
        share_url::decode("https://nusmods.com/timetable/sem-2/share?GEA1000=SEC:D1").unwrap();
    let schedule = assembler.assemble(&selection, "2024-2025").await;

    assert_eq!(
        prompt::format_schedule(&schedule),
        "## Unscheduled\n- GEA1000 — Sectional Teaching — TBA–TBA @ TBA"
    );
}

#[tokio::test]
async fn test_unreachable_modules_render_empty_schedule() {
    let selection =
        share_url::decode("https://nusmods.com/timetable/sem-1/share?ZZ1000=LEC:1").unwrap();
    let schedule = fixture_assembler().assemble(&selection, "2024-2025").await;

    let rendered = prompt::render(&schedule, &StyleChoice::new("kawaii", Theme::Light), "1:1");
    assert!(rendered.starts_with("iPhone 1:1 wallpaper."));
    assert!(rendered.contains(EMPTY_SCHEDULE_TEXT));
}
