use prsum::selector::container::select_main_container;
use prsum::{element_text, Extractor, HtmlPage, Options, PageNode};

fn page(html: &str) -> HtmlPage {
    match HtmlPage::new(html, "https://blog.example.com/posts/ownership") {
        Ok(page) => page,
        Err(err) => panic!("fixture page failed to parse: {err}"),
    }
}

fn prose(sentence: &str, times: usize) -> String {
    std::iter::repeat(sentence).take(times).collect::<Vec<_>>().join(" ")
}

#[test]
fn article_wins_over_navigation_and_sidebar() {
    let html = format!(
        r#"<html><head><title>Understanding Ownership</title></head><body>
        <nav><ul><li><a href="/">Home</a></li><li><a href="/archive">Archive</a></li></ul></nav>
        <div class="sidebar"><p>{}</p></div>
        <article>
          <h1>Understanding Ownership</h1>
          <p>{}</p>
          <h2>Borrowing</h2>
          <p>{}</p>
          <ul><li>Each value has one owner</li><li>Owners drop values when they go out of scope</li></ul>
        </article>
        <footer><p>Copyright</p></footer>
        </body></html>"#,
        prose("Popular posts from this week are listed here for readers.", 4),
        prose("Ownership rules decide when memory is released without a garbage collector.", 4),
        prose("References let code use a value without taking ownership of it.", 4),
    );
    let page = page(&html);
    let main = select_main_container(&page, &Options::default());
    assert_eq!(main.tag_name().as_deref(), Some("article"));

    let structured = Extractor::default().extract_main_content(&page);
    assert_eq!(structured.title, "Understanding Ownership");
    assert_eq!(structured.url, "https://blog.example.com/posts/ownership");
    assert_eq!(structured.headings, vec!["Understanding Ownership", "Borrowing"]);
    assert_eq!(structured.paragraphs.len(), 2);
    assert_eq!(structured.lists.len(), 1);
    assert!(!structured.full_text.contains("Popular posts"));
    assert!(!structured.full_text.contains("Archive"));
}

#[test]
fn large_plain_div_is_found_without_semantic_markup() {
    let html = format!(
        r#"<body><div id="menu"><p>Short menu text</p></div>
        <div id="story"><p>{}</p><p>{}</p></div></body>"#,
        prose("The river rose quickly after three days of steady rain upstream.", 4),
        prose("Residents moved vehicles to higher ground before the bridge closed.", 4),
    );
    let page = page(&html);
    let main = select_main_container(&page, &Options::default());
    assert_eq!(main.attr("id").as_deref(), Some("story"));
}

#[test]
fn tiny_page_falls_back_to_body() {
    let page = page("<body><article><p>Hi.</p></article></body>");
    let main = select_main_container(&page, &Options::default());
    assert_eq!(main.tag_name().as_deref(), Some("body"));
}

#[test]
fn paragraph_count_boosts_score() {
    let one = prose("Words fill this paragraph so the container passes the length gate.", 8);
    let split: Vec<String> = (0..8)
        .map(|_| "Words fill this paragraph so the container passes the length gate.".to_string())
        .collect();
    let html = format!(
        r#"<body><section id="single"><p>{one}</p></section><section id="many">{}</section></body>"#,
        split.iter().map(|p| format!("<p>{p}</p>")).collect::<String>()
    );
    let page = page(&html);
    let main = select_main_container(&page, &Options::default());
    assert_eq!(main.attr("id").as_deref(), Some("many"));
}

#[test]
fn hidden_modal_does_not_win_over_visible_text() {
    let html = format!(
        r#"<body><div style="display:none"><div>{}</div></div><div id="story"><p>{}</p></div></body>"#,
        prose("Hidden modal boilerplate sentence that repeats for a long while.", 20),
        prose("Visible reporting on the harbor expansion and its budget.", 8),
    );
    let page = page(&html);
    let structured = Extractor::default().extract_main_content(&page);
    assert!(structured.full_text.starts_with("Visible reporting"));
    assert!(!structured.full_text.contains("Hidden modal"));
}

#[test]
fn form_marked_as_content_is_selected() {
    let html = format!(
        r#"<body><nav><a href="/">Home</a></nav><form class="content"><p>{}</p></form></body>"#,
        prose("Applicants describe their project goals and the expected timeline here.", 4),
    );
    let page = page(&html);
    let main = select_main_container(&page, &Options::default());
    assert_eq!(main.tag_name().as_deref(), Some("form"));

    let structured = Extractor::default().extract_main_content(&page);
    assert!(structured.full_text.starts_with("Applicants describe"));
    assert_eq!(structured.paragraphs.len(), 1);
}

#[test]
fn boilerplate_paragraphs_are_dropped() {
    let html = r#"<article>
        <p>We use cookies to improve your experience on this website, please accept.</p>
        <p>Share this story with your friends on every social network you like.</p>
        <p>The council approved the new budget after a long debate on Tuesday evening.</p>
        </article>"#;
    let structured = Extractor::default().extract_main_content(&page(html));
    assert_eq!(
        structured.paragraphs,
        vec!["The council approved the new budget after a long debate on Tuesday evening."]
    );
}

#[test]
fn element_text_ignores_scripts_and_forms() {
    let page = page(
        r#"<div id="c"><p>Visible body text.</p><script>var hidden = 1;</script>
        <form><input value="x"><button>Send</button></form><style>p{}</style></div>"#,
    );
    let Some(container) = prsum::PageDocument::body(&page).select_first("#c") else {
        panic!("container missing");
    };
    assert_eq!(element_text(&container), "Visible body text.");
}

#[test]
fn code_blocks_are_collected_in_order() {
    let html = r#"<article><pre><code>fn main() {
    println!("hi");
}</code></pre><p>Some inline <code>let x</code> code.</p></article>"#;
    let structured = Extractor::default().extract_main_content(&page(html));

    // both the pre and its nested code element match
    assert_eq!(structured.code_blocks.len(), 3);
    assert_eq!(structured.code_blocks[0], "fn main() { println!(\"hi\"); }");
    assert_eq!(structured.code_blocks[2], "let x");
}

#[test]
fn legacy_encoding_is_transcoded() {
    let html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9</title></head><body></body></html>";
    let page = match HtmlPage::from_bytes(html, "https://example.com/") {
        Ok(page) => page,
        Err(err) => panic!("fixture page failed to parse: {err}"),
    };
    let structured = Extractor::default().extract_main_content(&page);
    assert_eq!(structured.title, "Café");
}
