// Boilerplate removal for HTML mementos.
//
// A lightweight stripper: drops elements that almost never carry primary
// content (scripts, navigation, page chrome, forms), then all remaining tags,
// and collapses whitespace. Collections with a better extractor available
// should store its output instead; this is the fallback.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Elements removed together with everything inside them.
const BOILERPLATE_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form",
];

struct Patterns {
    elements: Vec<Regex>,
    comments: Regex,
    tags: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        elements: BOILERPLATE_ELEMENTS
            .iter()
            .map(|name| {
                Regex::new(&format!(r"(?is)<{name}\b[^>]*>.*?</{name}\s*>"))
                    .expect("static element pattern")
            })
            .collect(),
        comments: Regex::new(r"(?s)<!--.*?-->").expect("static comment pattern"),
        tags: Regex::new(r"(?s)<[^>]*>").expect("static tag pattern"),
        whitespace: Regex::new(r"\s+").expect("static whitespace pattern"),
    })
}

/// Strip boilerplate from an HTML document and return the remaining text.
pub fn strip_boilerplate(html: &str) -> String {
    let p = patterns();

    let mut text = p.comments.replace_all(html, " ").into_owned();
    for element in &p.elements {
        text = element.replace_all(&text, " ").into_owned();
    }
    let text = p.tags.replace_all(&text, " ");
    let text = decode_entities(&text);

    p.whitespace.replace_all(text.trim(), " ").into_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_chrome_and_tags() {
        let html = r#"<html><head><style>p { color: red }</style>
            <script type="text/javascript">var x = "<p>";</script></head>
            <body><nav><a href="/">Home</a></nav>
            <p>The cat sat</p> <p>on the <b>mat</b>.</p>
            <footer>Copyright</footer></body></html>"#;
        assert_eq!(strip_boilerplate(html), "The cat sat on the mat .");
    }

    #[test]
    fn test_comments_and_entities() {
        let html = "<!-- tracking <div> --><p>Fish &amp; chips&nbsp;&lt;3</p>";
        assert_eq!(strip_boilerplate(html), "Fish & chips <3");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(strip_boilerplate("  just\n text "), "just text");
    }

    #[test]
    fn test_uppercase_elements() {
        assert_eq!(strip_boilerplate("<SCRIPT>x()</SCRIPT>kept"), "kept");
    }
}
