//! Property-based tests for prompt rendering determinism

use modpocket::prompt;
use modpocket::types::{ModuleResolution, ResolutionStatus, ResolvedLesson, Schedule, StyleChoice, Theme};
use proptest::prelude::*;

fn lesson_strategy() -> impl Strategy<Value = ResolvedLesson> {
    (
        "[A-Z]{2}[0-9]{4}",
        prop_oneof![Just("Lecture"), Just("Tutorial"), Just("Laboratory")],
        prop_oneof![
            Just("Monday"),
            Just("Tue"),
            Just("W"),
            Just("4"),
            Just("Friday"),
            Just("TBA")
        ],
        "(0[89]|1[0-9])00",
        "[A-Z0-9-]{2,10}",
    )
        .prop_map(|(module, kind, day, start, venue)| ResolvedLesson {
            module_code: module,
            lesson_type: kind.to_string(),
            class_no: "1".to_string(),
            day: day.to_string(),
            end_time: start.clone(),
            start_time: start,
            venue,
        })
}

fn schedule_from(lessons: Vec<ResolvedLesson>) -> Schedule {
    let mut schedule = Schedule::new();
    for lesson in lessons {
        let mut resolution = schedule
            .get(&lesson.module_code)
            .cloned()
            .unwrap_or_else(|| ModuleResolution::empty(&lesson.module_code, ResolutionStatus::Resolved));
        resolution.lessons.push(lesson);
        schedule.insert(resolution);
    }
    schedule
}

fn style_strategy() -> impl Strategy<Value = StyleChoice> {
    (
        prop_oneof![
            Just("minimalist"),
            Just("gradient"),
            Just("neon"),
            Just("pastel"),
            Just("glass"),
            Just("retro"),
            Just("kawaii"),
            Just("unknown-style")
        ],
        prop_oneof![Just(Theme::Light), Just(Theme::Dark)],
    )
        .prop_map(|(name, theme)| StyleChoice::new(name, theme))
}

/// Rendering twice with identical inputs yields identical prompts
#[test]
fn test_render_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(lesson_strategy(), 0..12), style_strategy()),
            |(lessons, style)| {
                let schedule = schedule_from(lessons);
                let first = prompt::render(&schedule, &style, "9:16");
                let second = prompt::render(&schedule.clone(), &style.clone(), "9:16");
                prop_assert_eq!(first, second);
                Ok(())
            },
        )
        .unwrap();
}

/// Every lesson appears exactly once in the rendered schedule text
#[test]
fn test_every_lesson_is_rendered_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec(lesson_strategy(), 1..12),
            |lessons| {
                let total = lessons.len();
                let schedule = schedule_from(lessons);
                let text = prompt::format_schedule(&schedule);
                let rendered_lines = text.lines().filter(|l| l.starts_with("- ")).count();
                prop_assert_eq!(rendered_lines, total);
                Ok(())
            },
        )
        .unwrap();
}
