//! The rule chain: eight regex rewrites that turn Markdown into HTML.
//!
//! Every rule is a pure `&str → String` pass over the whole buffer. There is
//! no parser and no intermediate structure; a heading, list or paragraph only
//! exists for as long as one pattern is looking at it.
//!
//! ## Rule Order
//!
//! The order is part of the output format. Line breaks are inserted before
//! emphasis is converted, list items are wrapped before paragraphs are
//! detected, and the ordered-list wrap re-scans `<li>` runs that the
//! unordered-list wrap already produced (so every `<ul>` carries an inner
//! `<ol>`).
//!
//! ## Boundary checks
//!
//! Several rules only fire when the text *around* a match looks a certain
//! way (a preceding newline, a following blank line, a following `<`). The
//! `regex` crate has no look-around, so those rules match the bare line and
//! test the neighbouring bytes in [`replace_where`], always against the buffer
//! as it was when the pass started.

use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};

/// Apply the full rule chain to a Markdown buffer.
///
/// Rules (applied in order):
/// 1. Headings, level 6 down to level 1
/// 2. Unordered list items (`- `), then wrap `<li>` runs in `<ul>`
/// 3. Ordered list items (`* `), then wrap `<li>` runs in `<ol>`
/// 4. Paragraphs bounded by a blank line on both sides
/// 5. `<br/>` before every newline not followed by a tag
/// 6. Bold (`**…**`) and italic (`__…__`)
/// 7. `[[text]]` → MD5 hex digest of `text`
/// 8. `((text))` → `text` without `c`/`C`
pub fn markdown_to_html(input: &str) -> String {
    let s = convert_headings(input);
    let s = convert_unordered_lists(&s);
    let s = convert_ordered_lists(&s);
    let s = convert_paragraphs(&s);
    let s = insert_line_breaks(&s);
    let s = convert_emphasis(&s);
    let s = expand_hash_directives(&s);
    strip_c_directives(&s)
}

/// `Regex::replace_all`, except a match is left untouched unless `keep`
/// accepts it. A rejected match still consumes its span.
fn replace_where<K, R>(input: &str, re: &Regex, keep: K, rewrite: R) -> String
where
    K: Fn(Match<'_>) -> bool,
    R: Fn(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(input.len() + 64);
    let mut last = 0;
    for caps in re.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if !keep(whole) {
            continue;
        }
        out.push_str(&input[last..whole.start()]);
        out.push_str(&rewrite(&caps));
        last = whole.end();
    }
    out.push_str(&input[last..]);
    out
}

// ── Rule 1: Headings ─────────────────────────────────────────────────────────

// Deepest level first: `###### x` must never be read as `# ` + `##### x`.
static RE_HEADINGS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let re = Regex::new(&format!(r"(?m)^#{{{level}}} (.+)$")).unwrap();
            (level, re)
        })
        .collect()
});

fn convert_headings(input: &str) -> String {
    let mut s = input.to_string();
    for (level, re) in RE_HEADINGS.iter() {
        s = re
            .replace_all(&s, format!("<h{level}>${{1}}</h{level}>").as_str())
            .into_owned();
    }
    s
}

// ── Rules 2 & 3: Lists ───────────────────────────────────────────────────────

// `^` also matches at offset 0: a list on the first line is still a list.
static RE_UL_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());
static RE_OL_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\* (.+)$").unwrap());
static RE_LI_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(<li>.*</li>\n)+").unwrap());

fn convert_unordered_lists(input: &str) -> String {
    let s = wrap_list_items(input, &RE_UL_ITEM);
    wrap_item_runs(&s, "ul")
}

fn convert_ordered_lists(input: &str) -> String {
    let s = wrap_list_items(input, &RE_OL_ITEM);
    wrap_item_runs(&s, "ol")
}

/// Turn marker lines into `<li>` items. Only newline-terminated lines count.
fn wrap_list_items(input: &str, item: &Regex) -> String {
    replace_where(
        input,
        item,
        |m| input[m.end()..].starts_with('\n'),
        |caps| format!("<li>{}</li>", &caps[1]),
    )
}

/// Wrap every run of consecutive `<li>` lines, whatever list produced them.
fn wrap_item_runs(input: &str, tag: &str) -> String {
    RE_LI_RUN
        .replace_all(input, format!("<{tag}>\n${{0}}</{tag}>\n").as_str())
        .into_owned()
}

// ── Rule 4: Paragraphs ───────────────────────────────────────────────────────

static RE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^.+$").unwrap());

fn convert_paragraphs(input: &str) -> String {
    replace_where(
        input,
        &RE_LINE,
        |m| input[..m.start()].ends_with("\n\n") && input[m.end()..].starts_with("\n\n"),
        |caps| format!("<p>\n{}\n</p>", &caps[0]),
    )
}

// ── Rule 5: Line breaks ──────────────────────────────────────────────────────

static RE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n").unwrap());

fn insert_line_breaks(input: &str) -> String {
    replace_where(
        input,
        &RE_NEWLINE,
        |m| !input[m.end()..].starts_with('<'),
        |_| String::from("<br/>\n"),
    )
}

// ── Rule 6: Emphasis ─────────────────────────────────────────────────────────

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());

fn convert_emphasis(input: &str) -> String {
    let s = RE_BOLD.replace_all(input, "<b>${1}</b>");
    RE_ITALIC.replace_all(&s, "<em>${1}</em>").into_owned()
}

// ── Rule 7: Hash directive ───────────────────────────────────────────────────

static RE_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());

fn md5_hex(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

fn expand_hash_directives(input: &str) -> String {
    RE_HASH
        .replace_all(input, |caps: &Captures<'_>| md5_hex(&caps[1]))
        .into_owned()
}

// ── Rule 8: Strip-c directive ────────────────────────────────────────────────

static RE_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\((.+?)\)\)").unwrap());

fn strip_c_directives(input: &str) -> String {
    RE_STRIP
        .replace_all(input, |caps: &Captures<'_>| caps[1].replace(['c', 'C'], ""))
        .into_owned()
}

// ── Tests ────────────────────────────────────────────────────────────────────
