//! Date and text formatting for article cards and feed lists.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::borrow::Cow;

use scraper::{Html, Node};
use time::format_description::well_known::{Iso8601, Rfc2822, Rfc3339};
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Default character budget for [`truncate_text`].
pub const DEFAULT_TRUNCATE_LEN: usize = 150;

/// Label for missing or unreadable timestamps.
pub const UNKNOWN_DATE: &str = "Unknown date";

const ELLIPSIS: &str = "...";
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Elements whose text never reaches the reader.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Relative label for `then` as seen at `now`.
///
/// Under an hour reads "Just now", under a day "Nh ago", under two days
/// "Yesterday". Older stamps render as a short calendar date in `now`'s
/// offset, with the year only when it differs from the current year.
pub fn format_relative(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let hours = (now - then).abs().whole_hours();
    if hours < 1 {
        return "Just now".to_owned();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if hours < 48 {
        return "Yesterday".to_owned();
    }

    let local = then.to_offset(now.offset());
    short_date(local.date(), local.year() != now.year())
}

/// Format a raw timestamp string relative to `now`.
pub fn format_date(input: Option<&str>, now: OffsetDateTime) -> String {
    let Some(raw) = input.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return UNKNOWN_DATE.to_owned();
    };
    match parse_timestamp(raw, now.offset()) {
        Some(then) => format_relative(then, now),
        None => UNKNOWN_DATE.to_owned(),
    }
}

/// [`format_date`] against the current local time.
pub fn format_date_now(input: Option<&str>) -> String {
    format_date(input, super::clock::now_local())
}

/// Parse the timestamp shapes the backend and RSS feeds hand us.
///
/// Offset-less date-times are read in `local_offset`; bare dates are
/// midnight UTC.
pub fn parse_timestamp(input: &str, local_offset: UtcOffset) -> Option<OffsetDateTime> {
    let input = input.trim();
    if let Ok(ts) = OffsetDateTime::parse(input, &Rfc3339) {
        return Some(ts);
    }
    if let Ok(ts) = OffsetDateTime::parse(input, &Rfc2822) {
        return Some(ts);
    }

    let normalized = normalize_separator(input);
    if let Ok(ts) = OffsetDateTime::parse(&normalized, &Iso8601::DEFAULT) {
        return Some(ts);
    }
    if let Ok(naive) = PrimitiveDateTime::parse(&normalized, &Iso8601::DEFAULT) {
        return Some(naive.assume_offset(local_offset));
    }
    Date::parse(&normalized, &Iso8601::DEFAULT)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Accept `YYYY-MM-DD HH:MM:SS` as well as the `T`-separated form.
fn normalize_separator(input: &str) -> Cow<'_, str> {
    if input.len() > 10 && input.as_bytes()[10] == b' ' {
        Cow::Owned(format!("{}T{}", &input[..10], &input[11..]))
    } else {
        Cow::Borrowed(input)
    }
}

fn short_date(date: Date, with_year: bool) -> String {
    let month = MONTHS[usize::from(u8::from(date.month())) - 1];
    if with_year {
        format!("{month} {}, {}", date.day(), date.year())
    } else {
        format!("{month} {}", date.day())
    }
}

/// Bound `text` to `max_len` characters, appending `...` when cut.
///
/// The kept prefix is trimmed before the ellipsis is added, so the result is
/// never longer than `max_len + 3` characters.
pub fn truncate_text(text: &str, max_len: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_len) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", text[..cut].trim())),
    }
}

/// Plain-text excerpt of an HTML summary, bounded to `max_len` characters.
pub fn excerpt(html: &str, max_len: usize) -> String {
    let text = strip_html(html);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_text(&collapsed, max_len).into_owned()
}

/// Text content of an HTML fragment.
///
/// Parsed with `scraper` (html5ever), so quoted attributes, comments and
/// character references follow browser rules. Text inside `script` and
/// `style` is dropped. Nothing is handed to the DOM.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    for node in fragment.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|el| el.name()))
            .is_some_and(|name| RAW_TEXT_ELEMENTS.contains(&name));
        if !hidden {
            out.push_str(text);
        }
    }
    out
}
