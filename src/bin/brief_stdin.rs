//! CLI that reads HTML from stdin and prints a JSON brief to stdout.
//!
//! Usage: `brief_stdin <url> [summary|raw|prompt|structured|pr] [max_chars]`
//!
//! `prompt` mode reads stored settings from the JSON file named by
//! `PRSUM_SETTINGS`, when set. Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read};
use std::process;

use prsum::prompt::build_request;
use prsum::{Extractor, HtmlPage, Settings};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn emit<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string(value).unwrap_or_default());
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn load_settings() -> Settings {
    let Ok(path) = std::env::var("PRSUM_SETTINGS") else {
        return Settings::default();
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Settings::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%path, %err, "ignoring unreadable settings");
            Settings::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(url) = args.next() else {
        fail("usage: brief_stdin <url> [summary|raw|prompt|structured|pr] [max_chars]");
    };
    let mode = args.next().unwrap_or_else(|| "summary".to_string());
    let max_chars = args.next().and_then(|n| n.parse::<usize>().ok());

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        fail("Failed to read from stdin");
    }

    if prsum::url_utils::is_restricted_url(&url) {
        fail(&prsum::Error::RestrictedPage(url).to_string());
    }
    let page = match HtmlPage::from_bytes(&html, &url) {
        Ok(page) => page,
        Err(err) => fail(&err.to_string()),
    };
    info!(%url, %mode, bytes = html.len(), "read page");

    let extractor = Extractor::default();
    match mode.as_str() {
        "summary" => emit(&extractor.summarize_page(&page, max_chars)),
        "raw" => emit(&extractor.build_raw_payload(&page, page.path())),
        "structured" => emit(&extractor.extract_main_content(&page).capped()),
        "pr" => emit(&extractor.extract_pr(&page, page.path()).capped()),
        "prompt" => {
            let settings = load_settings();
            let raw = extractor.build_raw_payload(&page, page.path());
            emit(&build_request(&raw, max_chars, &settings, None));
            eprintln!("{}", raw.meta_line());
        }
        other => fail(&format!("unknown mode: {other}")),
    }
}
