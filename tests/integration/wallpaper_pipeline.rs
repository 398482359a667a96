//! End-to-end pipeline runs with a fixture catalog and a fake image provider.

use crate::integration::test_utils::fixture_assembler;
use async_trait::async_trait;
use modpocket::error::ApiError;
use modpocket::imagen::{GeneratedImage, ImageSynthesizer};
use modpocket::pipeline::{WallpaperPipeline, WallpaperRequest};
use modpocket::share_url::ShareUrlDecoder;
use modpocket::types::Theme;
use std::sync::atomic::{AtomicUsize, Ordering};

const URL: &str = "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1;TUT:05&MA1521=LEC:1";

fn pipeline() -> WallpaperPipeline<impl modpocket::schedule::ModuleResolver> {
    WallpaperPipeline::new(ShareUrlDecoder::nusmods().unwrap(), fixture_assembler())
        .with_academic_year(Some("2024-2025".to_string()))
}

struct FakeImagen {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeImagen {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }
}

#[async_trait]
impl ImageSynthesizer for FakeImagen {
    async fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<GeneratedImage, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ApiError::GenerationFailed("quota exhausted".to_string()));
        }
        Ok(GeneratedImage {
            bytes: format!("{}|{}", aspect_ratio, prompt.len()).into_bytes(),
            mime_type: "image/png".to_string(),
            model: "fake".to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        "fake"
    }
}

#[tokio::test]
async fn test_prepare_collects_schedule_and_prompt() {
    let prepared = pipeline()
        .prepare(&WallpaperRequest::new(URL).with_style("neon").with_theme(Theme::Dark))
        .await
        .unwrap();

    assert_eq!(prepared.modules(), vec!["CS2040", "MA1521"]);
    assert_eq!(prepared.schedule.total_lessons(), 4);
    assert!(prepared.prompt.contains("STYLE: Neon (Dark Mode)"));
    assert!(prepared.prompt.contains("## Wednesday\n- CS2040 — Tutorial — 09:00–10:00"));
}

#[tokio::test]
async fn test_prepare_is_deterministic() {
    let request = WallpaperRequest::new(URL).with_style("retro");
    let first = pipeline().prepare(&request).await.unwrap();
    let second = pipeline().prepare(&request).await.unwrap();
    assert_eq!(first.prompt, second.prompt);
}

#[tokio::test]
async fn test_no_lessons_is_distinct_outcome() {
    let err = pipeline()
        .prepare(&WallpaperRequest::new(
            "https://nusmods.com/timetable/sem-1/share?XX0000=LEC:1&GEA1000=SEC:D1",
        ))
        .await
        .unwrap_err();
    match err {
        ApiError::NoLessonsResolved { modules } => {
            assert_eq!(modules, vec!["XX0000", "GEA1000"]);
        }
        other => panic!("expected NoLessonsResolved, got {other:?}"),
    }
}

#[tokio::test]
async fn test_partial_success_still_generates() {
    let fake = FakeImagen::new(false);
    let wallpaper = pipeline()
        .generate(
            &WallpaperRequest::new(
                "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1&XX0000=LEC:1",
            )
            .with_aspect_ratio("16:9"),
            &fake,
        )
        .await
        .unwrap();

    assert_eq!(wallpaper.modules, vec!["CS2040", "XX0000"]);
    assert!(String::from_utf8(wallpaper.image.bytes).unwrap().starts_with("16:9|"));
    assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_request_never_reaches_provider() {
    let fake = FakeImagen::new(false);
    let err = pipeline()
        .generate(&WallpaperRequest::new(URL).with_style("vaporwave"), &fake)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let fake = FakeImagen::new(true);
    let err = pipeline()
        .generate(&WallpaperRequest::new(URL), &fake)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::GenerationFailed(_)));
}
