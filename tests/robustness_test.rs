use page_unfurl::{extract, Error};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = "<title>T</title><p>text<div>more";
    match extract(html) {
        Ok(result) => assert_eq!(result.text, "textmore"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    let html = "<title>T</title><p><div></p></div>";
    assert!(extract(html).is_ok());
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let html = "<title>T</title><img src=\"http://x.com/a.png id=broken>";
    assert!(extract(html).is_ok());
}

#[test]
fn extract_fails_without_title_for_empty_input() {
    assert_eq!(extract(""), Err(Error::MissingElement("title")));
    assert_eq!(extract("   \n\t  "), Err(Error::MissingElement("title")));
    assert_eq!(extract("<html></html>"), Err(Error::MissingElement("title")));
}

#[test]
fn title_only_document_is_complete() {
    match extract("<title>Only</title>") {
        Ok(result) => {
            assert_eq!(result.title, "Only");
            assert!(result.text.is_empty());
            assert!(result.images.is_empty());
            assert!(result.metas.is_empty());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_handles_large_html_without_panic() {
    let target_size = 10 * 1024 * 1024 + 1;
    let chunk = "<p>Some repeated content for stress testing.</p>";
    let mut html = String::with_capacity(target_size + 128);
    html.push_str("<html><head><title>Big</title></head><body>");
    while html.len() < target_size {
        html.push_str(chunk);
    }
    html.push_str("</body></html>");

    let start = Instant::now();
    let result = extract(&html);
    let elapsed = start.elapsed();

    match result {
        Ok(result) => {
            assert_eq!(result.title, "Big");
            assert!(result.text.len() < 300);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
    assert!(elapsed < Duration::from_secs(30), "large HTML parsing took {elapsed:?}");
}

#[test]
fn extract_handles_null_bytes_gracefully() {
    let html = "<title>T</title>text\x00more";
    assert!(extract(html).is_ok());
}
