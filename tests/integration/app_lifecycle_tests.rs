/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use std::fs;
use vmdtex::app_config::Config;
use vmdtex::app_controller::Controller;
use vmdtex::errors::DeckError;
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_controller_initialization_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.output.extension = String::new();

    let err = Controller::with_config(config).err().unwrap();
    assert!(format!("{:#}", err).contains("output.extension"));
}

/// Test that a single-language deck is written next to its input
#[test]
fn test_run_singleLanguageDeck_shouldWriteOneFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", common::SINGLE_LANGUAGE_DECK)?;

    let controller = Controller::with_config(Config::default())?;
    let written = controller.run(&deck, false)?;

    let expected = temp_dir.path().join("talk_output.tex");
    assert_eq!(written, vec![expected.clone()]);
    let content = fs::read_to_string(&expected)?;
    assert!(content.starts_with("% Generated LaTeX presentation"));
    assert!(content.contains(r"\title{Rust Basics}"));
    Ok(())
}

/// Test that a bilingual deck gives one file per language
#[test]
fn test_run_multiLanguageDeck_shouldWriteFilePerLanguage() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", common::MULTI_LANGUAGE_DECK)?;

    let controller = Controller::with_config(Config::default())?;
    let written = controller.run(&deck, false)?;

    assert_eq!(
        written,
        vec![
            temp_dir.path().join("talk_DE_output.tex"),
            temp_dir.path().join("talk_EN_output.tex"),
        ]
    );
    let german = fs::read_to_string(&written[0])?;
    assert!(german.contains("Hallo zusammen"));
    assert!(!german.contains("Hello everyone"));
    Ok(())
}

/// Test that a requested language writes only that language
#[test]
fn test_run_withRequestedLanguage_shouldWriteOnlyThatLanguage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", common::MULTI_LANGUAGE_DECK)?;

    let controller = Controller::with_config(Config::default())?.with_language(Some("de".to_string()));
    let written = controller.run(&deck, false)?;

    assert_eq!(written, vec![temp_dir.path().join("talk_DE_output.tex")]);
    assert!(!temp_dir.path().join("talk_EN_output.tex").exists());
    Ok(())
}

/// Test that configured output directory, suffix and extension are used
#[test]
fn test_run_withOutputConfig_shouldUseConfiguredPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", common::SINGLE_LANGUAGE_DECK)?;
    let build_dir = temp_dir.path().join("build");

    let mut config = Config::default();
    config.output.directory = Some(build_dir.to_string_lossy().to_string());
    config.output.suffix = "_beamer".to_string();
    config.output.extension = "latex".to_string();

    let written = Controller::with_config(config)?.run(&deck, false)?;

    assert_eq!(written, vec![build_dir.join("talk_beamer.latex")]);
    assert!(build_dir.join("talk_beamer.latex").exists());
    Ok(())
}

/// Test that existing outputs are only replaced with force
#[test]
fn test_run_withExistingOutput_shouldRespectForceFlag() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", common::SINGLE_LANGUAGE_DECK)?;
    let output = common::create_test_file(temp_dir.path(), "talk_output.tex", "old")?;

    let controller = Controller::with_config(Config::default())?;

    assert!(controller.run(&deck, false)?.is_empty());
    assert_eq!(fs::read_to_string(&output)?, "old");

    assert_eq!(controller.run(&deck, true)?, vec![output.clone()]);
    assert_ne!(fs::read_to_string(&output)?, "old");
    Ok(())
}

/// Test that an untagged slide aborts without writing anything
#[test]
fn test_run_withUntaggedSlide_shouldFailWithDeckError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "broken.vmd", common::UNTAGGED_DECK)?;

    let controller = Controller::with_config(Config::default())?;
    let err = controller.run(&deck, false).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DeckError>(),
        Some(DeckError::MissingLanguage { position: 2, .. })
    ));
    assert!(!temp_dir.path().join("broken_output.tex").exists());
    Ok(())
}

/// Test that a missing input file is reported
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(&temp_dir.path().join("nope.vmd"), false);
    assert!(result.is_err());
    Ok(())
}

/// Test folder processing with one good and one broken deck
#[test]
fn test_run_folder_withMixedDecks_shouldCountFailures() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_deck(temp_dir.path(), "a_talk.vmd", common::SINGLE_LANGUAGE_DECK)?;
    common::create_test_deck(temp_dir.path(), "b_broken.vmd", common::UNTAGGED_DECK)?;
    common::create_test_deck(temp_dir.path(), "nested/c_bilingual.vmd", common::MULTI_LANGUAGE_DECK)?;
    common::create_test_file(temp_dir.path(), "readme.txt", "not a deck")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run_folder(temp_dir.path(), false)?;

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written.len(), 3);
    assert!(temp_dir.path().join("nested").join("c_bilingual_EN_output.tex").exists());
    Ok(())
}

/// Test folder processing of a directory without decks
#[test]
fn test_run_folder_withoutDecks_shouldReturnEmptySummary() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let summary = controller.run_folder(temp_dir.path(), false)?;
    assert_eq!(summary.processed, 0);
    assert!(summary.written.is_empty());

    assert!(controller.run_folder(&temp_dir.path().join("missing"), false).is_err());
    Ok(())
}

/// Test the check command on a broken deck
#[test]
fn test_check_withUntaggedDeck_shouldNotPass() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "broken.vmd", common::UNTAGGED_DECK)?;

    let controller = Controller::with_config(Config::default())?;
    let report = controller.check(&deck)?;

    assert_eq!(report.error_count(), 1);
    assert!(!controller.check_passed(&report));
    Ok(())
}

/// Test the check command honours strict mode
#[test]
fn test_check_withStrictConfig_shouldFailOnWarnings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = "---\ntitle = \"T\"\nauthor = \"A\"\ndraft = yes\n---\n# Scene: A\n## Slide(title=\"X\")\ntext\n";
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", source)?;

    let lenient = Controller::with_config(Config::default())?;
    let report = lenient.check(&deck)?;
    assert_eq!(report.warning_count(), 1);
    assert!(lenient.check_passed(&report));

    let mut config = Config::default();
    config.validation.strict = true;
    let strict = Controller::with_config(config)?;
    assert!(!strict.check_passed(&report));
    Ok(())
}

/// Test that rendering with checks enabled still writes the output
#[test]
fn test_run_withCheckBeforeRender_shouldStillRender() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", "# Scene: A\n## Slide(title=\"X\", lang=\"EN\")\n")?;

    let mut config = Config::default();
    config.validation.check_before_render = true;
    let written = Controller::with_config(config)?.run(&deck, false)?;

    assert_eq!(written.len(), 1);
    Ok(())
}

/// Test the JSON dump of a deck file
#[test]
fn test_dump_ast_shouldReturnPrettyJson() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let deck = common::create_test_deck(temp_dir.path(), "talk.vmd", common::MULTI_LANGUAGE_DECK)?;

    let json = Controller::with_config(Config::default())?.dump_ast(&deck)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert!(json.contains('\n'));
    assert_eq!(value["scenes"][0]["elements"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["scenes"][0]["elements"][1]["parameters"]["lang"], "DE");
    Ok(())
}
