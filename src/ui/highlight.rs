use crate::models::Language;
use crate::ui::colors::RosePine;
use once_cell::sync::Lazy;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use syntect::{
    easy::HighlightLines, highlighting::ThemeSet, parsing::SyntaxSet, util::LinesWithEndings,
};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME: &str = "base16-mocha.dark";

/// Highlight `code` line by line, skipping `skip` lines and returning at most `take`.
pub fn highlight_lines(code: &str, language: Language, skip: usize, take: usize) -> Vec<Line<'static>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_name(language.syntax_name())
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let Some(theme) = THEME_SET.themes.get(THEME) else {
        return plain_lines(code, skip, take);
    };

    // earlier lines still go through the highlighter so multi-line state is right
    let mut highlighter = HighlightLines::new(syntax, theme);
    LinesWithEndings::from(code)
        .enumerate()
        .take(skip + take)
        .filter_map(|(i, line)| {
            let ranges = highlighter
                .highlight_line(line, &SYNTAX_SET)
                .unwrap_or_default();
            if i < skip {
                return None;
            }

            let spans: Vec<Span<'static>> = ranges
                .iter()
                .map(|(style, text)| {
                    let fg = style.foreground;
                    Span::styled(
                        text.trim_end_matches(['\n', '\r']).to_string(),
                        Style::default()
                            .fg(Color::Rgb(fg.r, fg.g, fg.b))
                            .bg(RosePine::SURFACE),
                    )
                })
                .collect();

            Some(Line::from(spans))
        })
        .collect()
}

fn plain_lines(code: &str, skip: usize, take: usize) -> Vec<Line<'static>> {
    code.lines()
        .skip(skip)
        .take(take)
        .map(|line| Line::styled(line.to_string(), Style::default().fg(RosePine::TEXT)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_is_respected_and_text_preserved() {
        let code = "a = 1\nb = 2\nc = 3\nd = 4\n";
        let lines = highlight_lines(code, Language::Python, 1, 2);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text, vec!["b = 2".to_string(), "c = 3".to_string()]);
    }
}
