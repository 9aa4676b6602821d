//! Strips executable constructs from model-generated markup before mount.
//!
//! Allow-nothing-executable policy aimed at script injection through generated
//! content. Not a general HTML sandbox: styling and structure pass through.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("Invalid script block regex")
});

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?script\b[^>]*>?").expect("Invalid script tag regex")
});

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(<[a-z][^>]*?)[\s/]+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#)
        .expect("Invalid event handler regex")
});

static JAVASCRIPT_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)javascript\s*:").expect("Invalid javascript scheme regex")
});

// Every pass only deletes text, so the loop ends once nothing matches.
pub fn sanitize_markup(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

// A removal can splice its neighbours into a new match, e.g. `<scr<script>ipt>`.
fn sanitize_pass(input: &str) -> String {
    let without_blocks = SCRIPT_BLOCK.replace_all(input, "");
    let without_tags = SCRIPT_TAG.replace_all(&without_blocks, "");
    let without_handlers = strip_event_handlers(&without_tags);
    JAVASCRIPT_SCHEME
        .replace_all(&without_handlers, "")
        .into_owned()
}

fn strip_event_handlers(input: &str) -> String {
    let mut current = input.to_string();
    while EVENT_HANDLER.is_match(&current) {
        current = EVENT_HANDLER.replace_all(&current, "$1").into_owned();
    }
    current
}
