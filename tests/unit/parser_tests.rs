/*!
 * Tests for the structural parser and the parameter grammar
 */

use vmdtex::deck::{parse, DeckParser, ElementKind};
use vmdtex::deck::params::{parse_params, parse_token};
use crate::common;

/// Test that an empty input gives default header and no scenes
#[test]
fn test_parse_withEmptyInput_shouldReturnDefaults() {
    let doc = parse("");

    assert_eq!(doc.header.title, "Untitled");
    assert_eq!(doc.header.author, "Unknown");
    assert_eq!(doc.header.style, "");
    assert!(doc.scenes.is_empty());
}

/// Test that header values are read without their quotes
#[test]
fn test_parse_withHeader_shouldReadTitleAndAuthor() {
    let doc = parse(common::SINGLE_LANGUAGE_DECK);

    assert_eq!(doc.header.title, "Rust Basics");
    assert_eq!(doc.header.author, "Jane Doe");
}

/// Test that only the first header block is used
#[test]
fn test_parse_withTwoHeaderBlocks_shouldUseFirst() {
    let source = "---\ntitle = \"First\"\n---\n---\ntitle = \"Second\"\n---\n";
    assert_eq!(parse(source).header.title, "First");
}

/// Test that header lines without '=' are ignored
#[test]
fn test_parseHeader_withLinesWithoutEquals_shouldIgnoreThem() {
    let header = DeckParser::new("---\njust a note\nauthor = Bob\n---\n").parse_header();
    assert_eq!(header.author, "Bob");
    assert_eq!(header.title, "Untitled");
}

/// Test that header entries keep unknown keys for the validators
#[test]
fn test_headerEntries_shouldKeepAllPairsInOrder() {
    let entries = DeckParser::new("---\ntitle = \"T\"\ndate = 2024\n---\n")
        .header_entries()
        .unwrap();
    assert_eq!(
        entries,
        vec![
            ("title".to_string(), "T".to_string()),
            ("date".to_string(), "2024".to_string()),
        ]
    );
    assert!(DeckParser::new("# Scene: A\n").header_entries().is_none());
}

/// Test that scenes and elements keep source order
#[test]
fn test_parse_withSample_shouldKeepSourceOrder() {
    let doc = parse(common::SINGLE_LANGUAGE_DECK);

    let scene_titles: Vec<&str> = doc.scenes.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(scene_titles, vec!["Welcome", "Code"]);

    let kinds: Vec<ElementKind> = doc.elements().map(|(_, e)| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Slide,
            ElementKind::Teleprompt,
            ElementKind::Code,
            ElementKind::Button,
        ]
    );
}

/// Test that element content is trimmed as a whole
#[test]
fn test_parse_elementContent_shouldBeTrimmed() {
    let doc = parse(common::SINGLE_LANGUAGE_DECK);
    let slide = &doc.scenes[0].elements[0];

    assert_eq!(
        slide.content,
        "- **Ownership** explained\n- *Borrowing* explained\n\nClosing words."
    );
    assert_eq!(doc.scenes[1].elements[1].content, "");
}

/// Test that text before the first scene marker is dropped
#[test]
fn test_parse_withTextBeforeFirstScene_shouldDropIt() {
    let doc = parse("## Slide(title=\"Lost\")\nnever seen\n# Scene: Real\n## Slide\nkept\n");

    assert_eq!(doc.scenes.len(), 1);
    assert_eq!(doc.scenes[0].elements.len(), 1);
    assert_eq!(doc.scenes[0].elements[0].content, "kept");
}

/// Test that a scene without element headers has no elements
#[test]
fn test_parse_withSceneWithoutElements_shouldKeepEmptyScene() {
    let doc = parse("# Scene: Empty\nfree text only\n# Scene: Next\n## Quiz\n");

    assert_eq!(doc.scenes.len(), 2);
    assert!(doc.scenes[0].elements.is_empty());
    assert_eq!(doc.scenes[1].elements.len(), 1);
}

/// Test that '# Scene:' only counts at the start of a line
#[test]
fn test_parse_withInlineSceneText_shouldNotSplit() {
    let doc = parse("# Scene: A\n## Slide\nsee # Scene: B for more\n");

    assert_eq!(doc.scenes.len(), 1);
    assert_eq!(doc.scenes[0].elements[0].content, "see # Scene: B for more");
}

/// Test that sub-headings stay inside the slide content
#[test]
fn test_parse_withThirdLevelMarkers_shouldKeepThemInContent() {
    let doc = parse("# Scene: A\n## Slide\n### Column(width=1)\nleft\n### Column(width=1)\nright\n");

    assert_eq!(doc.scenes[0].elements.len(), 1);
    assert!(doc.scenes[0].elements[0].content.starts_with("### Column(width=1)"));
}

/// Test that the element type keeps its original casing
#[test]
fn test_parse_elementType_shouldKeepCasing() {
    let doc = parse("# Scene: A\n## sLiDe(lang=\"EN\")\nx\n");
    let element = &doc.scenes[0].elements[0];

    assert_eq!(element.element_type, "sLiDe");
    assert_eq!(element.kind(), ElementKind::Slide);
}

/// Test parameter parsing with quoted and unquoted values
#[test]
fn test_parseParams_withMixedValues_shouldStripQuotes() {
    let params = parse_params(r#"title="Intro", lang=EN , width = 3"#);

    assert_eq!(params.len(), 3);
    assert_eq!(params["title"], "Intro");
    assert_eq!(params["lang"], "EN");
    assert_eq!(params["width"], "3");
}

/// Test that tokens without '=' are skipped
#[test]
fn test_parseParams_withBareToken_shouldSkipIt() {
    let params = parse_params(r#"draft, title="X""#);

    assert_eq!(params.len(), 1);
    assert!(parse_token("draft").is_none());
    assert!(parse_params("").is_empty());
}

/// Test that only the first '=' separates key and value
#[test]
fn test_parseToken_withEqualsInValue_shouldSplitOnFirst() {
    let param = parse_token(r#"source="a=b.png""#).unwrap();
    assert_eq!(param.key, "source");
    assert_eq!(param.value, "a=b.png");
}

/// Test that a quoted comma still ends the token
#[test]
fn test_parseParams_withQuotedComma_shouldCutAtComma() {
    let params = parse_params(r#"title="Hello, World", lang="EN""#);

    assert_eq!(params["title"], "Hello");
    assert_eq!(params["lang"], "EN");
    assert_eq!(params.len(), 2);
}
