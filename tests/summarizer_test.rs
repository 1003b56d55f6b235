use prsum::summarize::summary_sentences;
use prsum::{summarize_html, Extractor, HtmlPage, Lexicon, Options, StructuredContent};

const RELEASE_NOTES: &str = r#"<html><head><title>Release Notes</title></head><body>
<article>
  <h1>Overview</h1>
  <p>The compiler release improves incremental builds for large workspaces by caching typed metadata between runs. It is fast. The cache lives inside the target directory and invalidates itself whenever toolchain versions change between builds.</p>
  <p>Debug information is now split into separate files on every supported platform, reducing link times for compiler developers. Release builds keep the previous layout so that existing deployment scripts continue to work without edits.</p>
  <p>Several diagnostics were rewritten to point at the exact expression that caused a type mismatch in generic code. Ok. Error codes remain stable across versions, and every rewritten message links to an extended explanation with examples.</p>
</article>
</body></html>"#;

fn release_notes() -> HtmlPage {
    match HtmlPage::new(RELEASE_NOTES, "https://example.com/releases/1.80") {
        Ok(page) => page,
        Err(err) => panic!("fixture page failed to parse: {err}"),
    }
}

fn bullets(summary: &str) -> Vec<&str> {
    summary
        .split("\n\n")
        .find(|section| section.starts_with("Summary:"))
        .map(|section| section.lines().filter(|l| l.starts_with("- ")).collect())
        .unwrap_or_default()
}

#[test]
fn release_notes_with_small_budget_has_at_most_two_bullets() {
    let page = release_notes();
    let extractor = Extractor::default();
    let structured = extractor.extract_main_content(&page);
    assert_eq!(structured.headings, vec!["Overview"]);
    assert_eq!(structured.paragraphs.len(), 3);

    let summary = extractor.summarize_structured(&structured, Some(200));
    let picked = bullets(&summary);

    assert!(summary.starts_with("Release Notes\nhttps://example.com/releases/1.80\n\nSummary:\n- "));
    assert!(!picked.is_empty());
    assert!(picked.len() <= 2);
    assert!(!summary.contains("It is fast."));
    assert!(!summary.contains("- Ok."));
    assert!(!summary.contains("- Overview"));
}

#[test]
fn larger_budget_selects_more_sentences_in_document_order() {
    let page = release_notes();
    let extractor = Extractor::default();
    let structured = extractor.extract_main_content(&page);

    let picked = summary_sentences(&structured, 1400, extractor.options(), extractor.lexicon());
    assert!(picked.len() >= 4);
    assert!(picked.windows(2).all(|w| w[0].index < w[1].index));

    let summary = extractor.summarize_structured(&structured, None);
    let first = summary.find("incremental builds");
    let last = summary.find("extended explanation");
    assert!(first.is_some() && last.is_some());
    assert!(first < last);
}

#[test]
fn summary_budget_bounds_selected_sentences() {
    let page = release_notes();
    let extractor = Extractor::default();
    let structured = extractor.extract_main_content(&page);

    for budget in [0, 50, 120, 200, 350, 800] {
        let picked = summary_sentences(&structured, budget, extractor.options(), extractor.lexicon());
        let used: usize = picked.iter().map(|s| s.text.chars().count() + 1).sum();
        assert!(used <= budget, "budget {budget} exceeded: {used}");
    }
}

#[test]
fn summarize_html_uses_default_budget() {
    let brief = match summarize_html(RELEASE_NOTES, "https://example.com/releases/1.80") {
        Ok(brief) => brief,
        Err(err) => panic!("summary failed: {err}"),
    };
    assert_eq!(brief.title, "Release Notes");
    assert_eq!(brief.stats.paragraphs, 3);
    assert!(bullets(&brief.summary).len() >= 4);
}

#[test]
fn empty_structured_content_gives_header_only() {
    let structured = StructuredContent {
        url: "https://example.com/empty".into(),
        ..StructuredContent::default()
    };
    let summary = Extractor::default().summarize_structured(&structured, Some(1400));
    assert_eq!(summary, "https://example.com/empty\n\nSummary:");
}

#[test]
fn substituted_stopwords_change_ranking_inputs() {
    let page = release_notes();
    let lexicon = Lexicon::default().with_stopwords(["compiler", "release", "builds"]);
    let extractor = Extractor::new(Options::default(), lexicon);
    let structured = extractor.extract_main_content(&page);

    let picked = summary_sentences(&structured, 1400, extractor.options(), extractor.lexicon());
    assert!(!picked.is_empty());
    assert!(picked.iter().all(|s| s.score > 0.0));
}

#[test]
fn lists_and_code_are_appended() {
    let html = r#"<html><head><title>Guide</title></head><body><main>
        <p>Install the toolchain with the official installer and confirm the version it reports afterwards.</p>
        <ul><li>Download the installer</li><li>Run it</li></ul>
        <pre>curl -sSf https://example.com/install.sh | sh</pre>
        </main></body></html>"#;
    let brief = match summarize_html(html, "https://example.com/guide") {
        Ok(brief) => brief,
        Err(err) => panic!("summary failed: {err}"),
    };

    assert!(brief.summary.contains("\n\nKey items:\n- Download the installer\n- Run it"));
    assert!(brief
        .summary
        .ends_with("Code snippet:\n\"\"\"\ncurl -sSf https://example.com/install.sh | sh\n\"\"\""));
}
