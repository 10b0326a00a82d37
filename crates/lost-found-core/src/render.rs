//! Card Rendering
//!
//! Builds the HTML fragments for result cards. Every record field goes
//! through `escape_html` before it reaches markup.

use crate::record::{FoundItemRecord, LostItemRecord, RecordKind};

pub const LOST_EMPTY_MESSAGE: &str = "🔍 No lost items match your filters.";
pub const FOUND_EMPTY_MESSAGE: &str = "🔍 No found items match your filters.";

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Photo source usable in an `img` tag, or `None` if it should be dropped.
///
/// Accepts image data URIs, http(s) URLs and scheme-less relative paths.
pub fn safe_photo_src(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    let scheme_end = lower.find(':');
    let path_start = lower.find(['/', '?', '#']);
    let has_scheme = match (scheme_end, path_start) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        (None, _) => false,
    };
    let allowed = !has_scheme
        || lower.starts_with("data:image/")
        || lower.starts_with("http://")
        || lower.starts_with("https://");
    allowed.then(|| escape_html(url))
}

/// Card markup for a lost item
pub fn lost_card(item: &LostItemRecord, index: usize) -> String {
    let mut html = card_open(index);
    if let Some(src) = safe_photo_src(&item.photo_url) {
        html.push_str(&format!(r#"<img class="item-photo" src="{}" alt="Photo"/>"#, src));
    }
    html.push_str(&format!(r#"<h3 class="item-title">{}</h3>"#, escape_html(&item.item_name)));
    html.push_str(&category_tag(&item.category));
    html.push_str(&detail("Last seen", &item.last_seen));
    html.push_str(&detail("Date lost", &item.date_lost));
    html.push_str(&detail("Description", &item.description));
    if !item.unique_marks.is_empty() {
        html.push_str(&detail("Unique marks", &item.unique_marks));
    }
    html.push_str(&detail("Contact", &item.contact));
    html.push_str("</div>");
    html
}

/// Card markup for a found item
pub fn found_card(item: &FoundItemRecord, index: usize) -> String {
    let mut html = card_open(index);
    html.push_str(&format!(r#"<h3 class="item-title">Found: {}</h3>"#, escape_html(&item.category)));
    html.push_str(&category_tag(&item.category));
    html.push_str(&detail("Found at", &item.found_location));
    html.push_str(&detail("Date found", &item.date_found));
    html.push_str(&detail("Kept at", &item.kept_at));
    if !item.notes.is_empty() {
        html.push_str(&detail("Notes", &item.notes));
    }
    html.push_str(&detail("Contact", &item.contact));
    html.push_str("</div>");
    html
}

/// All cards of one result set, or the empty-state message
pub fn render_cards<T>(kind: RecordKind, items: &[T], card: impl Fn(&T, usize) -> String) -> String {
    if items.is_empty() {
        let message = match kind {
            RecordKind::Lost => LOST_EMPTY_MESSAGE,
            RecordKind::Found => FOUND_EMPTY_MESSAGE,
        };
        return format!(r#"<p class="subtle">{}</p>"#, message);
    }
    items.iter().enumerate().map(|(i, item)| card(item, i)).collect()
}

// Cards fade in one after another
fn card_open(index: usize) -> String {
    format!(
        r#"<div class="item-card" style="animation-delay: {:.1}s">"#,
        index as f32 * 0.1
    )
}

fn category_tag(category: &str) -> String {
    format!(r#"<p class="meta"><span class="tag">{}</span></p>"#, escape_html(category))
}

fn detail(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", label, escape_html(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
        assert_eq!(escape_html("plain – text"), "plain – text");
    }

    #[test]
    fn test_safe_photo_src() {
        assert_eq!(safe_photo_src("images/earbuds.png").as_deref(), Some("images/earbuds.png"));
        assert!(safe_photo_src("data:image/png;base64,AAAA").is_some());
        assert!(safe_photo_src("https://example.com/a.png").is_some());
        assert!(safe_photo_src("photos/a:b.png").is_some());
        assert_eq!(safe_photo_src(""), None);
        assert_eq!(safe_photo_src("javascript:alert(1)"), None);
        assert_eq!(safe_photo_src("data:text/html,<script>"), None);
        assert_eq!(safe_photo_src(r#"a.png" onerror="x"#).as_deref(), Some("a.png&quot; onerror=&quot;x"));
    }

    #[test]
    fn test_lost_card_escapes_every_field() {
        let item = LostItemRecord {
            item_name: "<i>Bag</i>".to_string(),
            category: "Bags & Co".to_string(),
            last_seen: "\"Gym\"".to_string(),
            date_lost: "2025-01-01".to_string(),
            description: "it's red".to_string(),
            unique_marks: "<script>".to_string(),
            contact: "<b>x</b>".to_string(),
            photo_url: String::new(),
        };
        let html = lost_card(&item, 0);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>x</b>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;i&gt;Bag&lt;/i&gt;"));
        assert!(html.contains("Bags &amp; Co"));
        assert!(html.contains("&quot;Gym&quot;"));
        assert!(html.contains("it&#39;s red"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_optional_lines_omitted() {
        let found = FoundItemRecord {
            category: "Keys".to_string(),
            contact: "<b>x</b>".to_string(),
            ..Default::default()
        };
        let html = found_card(&found, 2);
        assert!(html.starts_with(r#"<div class="item-card" style="animation-delay: 0.2s">"#));
        assert!(html.contains("Found: Keys"));
        assert!(!html.contains("Notes:"));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_render_cards_empty_state() {
        let none: Vec<FoundItemRecord> = Vec::new();
        let html = render_cards(RecordKind::Found, &none, found_card);
        assert_eq!(html, format!(r#"<p class="subtle">{}</p>"#, FOUND_EMPTY_MESSAGE));
    }
}
