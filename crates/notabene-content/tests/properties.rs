//! Property-based tests for extraction invariants.

#![allow(clippy::unwrap_used)]

use notabene_content::{strip_inline, MarkdownParser};
use proptest::prelude::*;

/// A line of a generated note: headings, plain text, blanks, or hashtags.
fn note_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (1usize..5, "[a-zA-Z][a-zA-Z0-9]{0,8}( {1,2}[a-zA-Z0-9]{1,8}){0,3}")
            .prop_map(|(level, text)| format!("{} {text}", "#".repeat(level))),
        "[a-zA-Z][a-zA-Z ]{0,20}",
        Just(String::new()),
        Just("   ".to_string()),
        "#[a-z]{1,5}",
        "\\* [a-z]{1,6}",
    ]
}

fn note() -> impl Strategy<Value = String> {
    prop::collection::vec(note_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

/// Reference model: (level, line, text) of the expected title heading.
fn expected_title(source: &str) -> Option<(usize, usize, String)> {
    let mut best: Option<(usize, usize, String)> = None;
    for (index, line) in source.lines().enumerate() {
        let level = line.chars().take_while(|&c| c == '#').count();
        let Some(text) = line[level..].strip_prefix(' ') else {
            continue;
        };
        if level == 0 || text.trim().is_empty() {
            continue;
        }
        if best.as_ref().is_none_or(|(l, _, _)| level < *l) {
            best = Some((level, index, text.trim().to_string()));
        }
    }
    best
}

proptest! {
    #[test]
    fn test_title_matches_lowest_earliest_heading(source in note()) {
        let content = MarkdownParser::new().parse(&source);
        let expected = expected_title(&source).map(|(_, _, text)| text);
        prop_assert_eq!(content.title, expected);
    }

    #[test]
    fn test_no_title_means_no_body_or_lead(source in note()) {
        let content = MarkdownParser::new().parse(&source);
        if content.title.is_none() {
            prop_assert!(content.body.is_none());
            prop_assert!(content.lead.is_none());
        }
    }

    #[test]
    fn test_body_is_trimmed_slice_after_title(source in note()) {
        let content = MarkdownParser::new().parse(&source);
        if let Some(body) = content.body {
            let (_, line, _) = expected_title(&source).unwrap();
            let after: String = source
                .split('\n')
                .skip(line + 1)
                .collect::<Vec<_>>()
                .join("\n");
            prop_assert!(after.contains(&body));
            prop_assert_eq!(body.trim_end(), body.as_str());
            prop_assert!(!body.lines().next().unwrap().trim().is_empty());
        }
    }

    #[test]
    fn test_lead_is_single_block_prefix_of_body(source in note()) {
        let content = MarkdownParser::new().parse(&source);
        prop_assert_eq!(content.lead.is_some(), content.body.is_some());
        if let (Some(lead), Some(body)) = (content.lead, content.body) {
            prop_assert!(body.starts_with(&lead));
            prop_assert!(lead.lines().all(|line| !line.trim().is_empty()));
            let rest = &body[lead.len()..];
            prop_assert!(rest.is_empty() || rest.lines().nth(1).is_some_and(|l| l.trim().is_empty()));
        }
    }

    #[test]
    fn test_strip_inline_leaves_plain_text(text in "[a-zA-Z0-9]{1,8}( {1,2}[a-zA-Z0-9]{1,8}){0,5}") {
        prop_assert_eq!(strip_inline(&text), text.clone());
        prop_assert_eq!(strip_inline(&strip_inline(&text)), text);
    }

    #[test]
    fn test_strip_inline_is_stable_on_formatted_text(
        words in prop::collection::vec("[a-zA-Z]{1,8}", 1..5),
        style in 0usize..4,
    ) {
        let text = words.join(" ");
        let marked = match style {
            0 => format!("**{text}**"),
            1 => format!("*{text}*"),
            2 => format!("[{text}](http://example.com)"),
            _ => text.clone(),
        };
        let once = strip_inline(&marked);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(strip_inline(&once), once);
    }

    #[test]
    fn test_strip_inline_is_stable_on_punctuation(
        parts in prop::collection::vec(
            prop_oneof![
                "[a-z]{1,4}",
                Just(" ".to_string()),
                Just("*".to_string()),
                Just("**".to_string()),
                Just("\\".to_string()),
                Just("&amp;".to_string()),
                Just("&".to_string()),
                Just("[".to_string()),
                Just("]".to_string()),
                Just("(u)".to_string()),
                Just("`".to_string()),
            ],
            1..12,
        ),
    ) {
        let span = parts.concat();
        let once = strip_inline(&span);
        prop_assert_eq!(strip_inline(&once), once.clone());
        prop_assert!(once.len() <= span.len());
    }

    #[test]
    fn test_strip_inline_keeps_escaped_markers(
        words in prop::collection::vec("[a-zA-Z]{1,8}", 1..4),
        marker in prop::sample::select(vec!['*', '_', '[', ']', '&']),
    ) {
        let span = words
            .iter()
            .map(|w| format!("\\{marker}{w}\\{marker}"))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(strip_inline(&span), span);
    }
}
