use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

/// Render the trusted inline-HTML subset the quiz service embeds in
/// question, option, explanation, and feedback text. Supported:
/// `<strong>`/`<b>`, `<em>`/`<i>`, `<code>`, `<br>` and `<p>` breaks.
/// Every other tag is stripped; a handful of common entities are decoded.
/// The raw strings are left untouched elsewhere, so grading still compares
/// markup-bearing text.
pub fn render_markup(content: &str) -> Vec<Line<'static>> {
    let breaks = Regex::new(r"(?i)<br\s*/?>|</p>").unwrap();
    let opens = Regex::new(r"(?i)<p[^>]*>").unwrap();
    let normalized = opens.replace_all(content, "");
    let normalized = breaks.replace_all(&normalized, "\n");

    normalized
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                Line::from("")
            } else {
                Line::from(parse_inline(line))
            }
        })
        .collect()
}

/// Flatten markup to plain text (tags stripped, entities decoded). Used
/// where a single unstyled string is needed, e.g. log lines.
pub fn plain_text(content: &str) -> String {
    let tags = Regex::new(r"<[^>]+>").unwrap();
    decode_entities(&tags.replace_all(content, ""))
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut remaining = text;

    // The regex crate has no backreferences, so each tag pair gets its own
    // alternation arm and capture group.
    let inline_re = Regex::new(
        r"(?is)(<strong>(.*?)</strong>|<b>(.*?)</b>|<em>(.*?)</em>|<i>(.*?)</i>|<code>(.*?)</code>)",
    )
    .unwrap();

    while !remaining.is_empty() {
        if let Some(m) = inline_re.find(remaining) {
            if m.start() > 0 {
                push_plain(&mut spans, &remaining[..m.start()]);
            }

            let caps = inline_re.captures(m.as_str()).unwrap();
            if let Some(bold) = caps.get(2).or(caps.get(3)) {
                spans.push(Span::styled(
                    plain_text(bold.as_str()),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            } else if let Some(italic) = caps.get(4).or(caps.get(5)) {
                spans.push(Span::styled(
                    plain_text(italic.as_str()),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            } else if let Some(code) = caps.get(6) {
                spans.push(Span::styled(
                    plain_text(code.as_str()),
                    Style::default().fg(Color::Cyan),
                ));
            }

            remaining = &remaining[m.end()..];
        } else {
            push_plain(&mut spans, remaining);
            break;
        }
    }

    if spans.is_empty() {
        spans.push(Span::from(""));
    }
    spans
}

fn push_plain(spans: &mut Vec<Span<'static>>, text: &str) {
    let plain = plain_text(text);
    if !plain.is_empty() {
        spans.push(Span::from(plain));
    }
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

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_plain_line_passes_through() {
        let lines = render_markup("What is equity?");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "What is equity?");
    }

    #[test]
    fn test_strong_becomes_bold_span() {
        let lines = render_markup("The answer is <strong>Equity</strong>.");
        assert_eq!(lines.len(), 1);
        let bold: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::BOLD))
            .collect();
        assert_eq!(bold.len(), 1);
        assert_eq!(bold[0].content.as_ref(), "Equity");
        assert_eq!(line_text(&lines[0]), "The answer is Equity.");
    }

    #[test]
    fn test_em_and_code_styles() {
        let lines = render_markup("<em>roughly</em> <code>ROI</code>");
        let spans = &lines[0].spans;
        assert!(spans[0].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(spans[0].content.as_ref(), "roughly");
        let code = spans.last().unwrap();
        assert_eq!(code.content.as_ref(), "ROI");
        assert_eq!(code.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_br_and_p_split_lines() {
        let lines = render_markup("<p>First.</p><p>Second<br>Third</p>");
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["First.", "Second", "Third"]);
    }

    #[test]
    fn test_unknown_tags_are_stripped() {
        let lines = render_markup("<span class=\"x\">kept</span> <script>gone()</script>");
        assert_eq!(line_text(&lines[0]), "kept gone()");
    }

    #[test]
    fn test_entities_are_decoded() {
        let lines = render_markup("P&amp;L &lt; 0&nbsp;means a loss");
        assert_eq!(line_text(&lines[0]), "P&L < 0 means a loss");
    }

    #[test]
    fn test_plain_text_flattens_markup() {
        assert_eq!(
            plain_text("Incorrect. The correct answer is: <strong>Equity</strong>"),
            "Incorrect. The correct answer is: Equity"
        );
    }

    #[test]
    fn test_empty_content() {
        assert!(render_markup("").is_empty());
        let lines = render_markup("<br>");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "");
    }
}
