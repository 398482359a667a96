//! Share URL decoding through the public API.

use modpocket::error::{ApiError, ShareUrlError};
use modpocket::share_url::{self, ShareUrlDecoder};

#[test]
fn test_decode_generic_catalog_site() {
    let decoder = ShareUrlDecoder::new("catalog.example.com", "term-").unwrap();
    let selection = decoder
        .decode("https://catalog.example.com/timetable/term-2/share?CS101=LEC:(1);TUT:(3,4)")
        .unwrap();

    assert_eq!(selection.term, 2);
    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "term": 2,
            "moduleSelections": {"CS101": {"LEC": ["1"], "TUT": ["3", "4"]}}
        })
    );
}

#[test]
fn test_decode_wrong_host() {
    let decoder = ShareUrlDecoder::new("catalog.example.com", "term-").unwrap();
    let err = decoder
        .decode("https://other.com/timetable/term-2/share?CS101=LEC:1")
        .unwrap_err();
    assert!(matches!(err, ShareUrlError::WrongHost { .. }));
}

#[test]
fn test_decode_nusmods_link_keeps_url_order() {
    let selection = share_url::decode(
        "https://nusmods.com/timetable/sem-1/share?MA1521=LEC:1,TUT:12&cs2040=lec:1,tut:05&GEA1000=",
    )
    .unwrap();
    assert_eq!(selection.term, 1);
    assert_eq!(selection.module_codes(), vec!["MA1521", "CS2040"]);
    let cs2040 = selection.get("CS2040").unwrap();
    assert_eq!(cs2040.get("TUT").unwrap().class_numbers, vec!["05"]);
}

#[test]
fn test_decode_drops_modules_without_usable_lessons() {
    let selection = share_url::decode(
        "https://nusmods.com/timetable/sem-2/share?CS2040=LEC:1&CS1010=notes&CS1231=TUT:()",
    )
    .unwrap();
    assert_eq!(selection.module_codes(), vec!["CS2040"]);
}

#[test]
fn test_decode_missing_term_is_invalid_url() {
    let err = share_url::decode("https://nusmods.com/timetable/share?CS2040=LEC:1").unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidUrl(ShareUrlError::MissingTermSegment(_))
    ));
    assert!(err.is_user_error());
}
