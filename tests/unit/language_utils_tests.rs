/*!
 * Tests for language code utilities
 */

use vmdtex::language_utils::{
    get_language_name, is_valid_slide_language, language_codes_match, normalize_to_part2t,
    resolve_deck_language, validate_language_code, LanguageCodeType,
};

/// Test detection of the three code kinds
#[test]
fn test_validate_language_code_withEachKind_shouldReturnType() {
    assert_eq!(validate_language_code("en").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("DE").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("fra").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B);
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("english").is_err());
}

/// Test that slide tags are expected as two-letter codes
#[test]
fn test_is_valid_slide_language_shouldAcceptPart1Only() {
    assert!(is_valid_slide_language("EN"));
    assert!(is_valid_slide_language("de"));
    assert!(!is_valid_slide_language("eng"));
    assert!(!is_valid_slide_language(""));
}

/// Test normalization to ISO 639-2/T
#[test]
fn test_normalize_to_part2t_shouldMapAllForms() {
    assert_eq!(normalize_to_part2t("de").unwrap(), "deu");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");
    assert_eq!(normalize_to_part2t("deu").unwrap(), "deu");
    assert!(normalize_to_part2t("zz").is_err());
}

/// Test matching across code forms and casing
#[test]
fn test_language_codes_match_shouldIgnoreFormAndCase() {
    assert!(language_codes_match("EN", "eng"));
    assert!(language_codes_match("fr", "fre"));
    assert!(language_codes_match("XY", "xy"));
    assert!(!language_codes_match("en", "de"));
}

/// Test that resolving prefers the exact tag written in the deck
#[test]
fn test_resolve_deck_language_shouldPreferExactTag() {
    let available = ["DE", "EN", "en"];
    assert_eq!(resolve_deck_language("en", available), Some("en"));
    assert_eq!(resolve_deck_language("eng", ["DE", "EN"]), Some("EN"));
    assert_eq!(resolve_deck_language("fr", ["DE", "EN"]), None);
}

/// Test language display names
#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("de").unwrap(), "German");
    assert_eq!(get_language_name("fre").unwrap(), "French");
    assert!(get_language_name("xyz").is_err());
}
