use crate::ui::colors::RosePine;
use crate::ui::components::centered_rect;
use ratatui::{
    Frame,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Listing",
        &[
            ("/", "Search title, description and code"),
            ("Tab / ]", "Next language"),
            ("BackTab / [", "Previous language"),
            ("0", "Show all languages"),
            ("↑↓ / j k", "Move between cards"),
            ("⏎ / v", "Open snippet"),
            ("c / y", "Copy code"),
            ("d", "Download"),
            ("a / n", "Add a snippet"),
            ("q", "Quit"),
        ],
    ),
    (
        "Snippet",
        &[
            ("c", "Copy code"),
            ("d", "Download"),
            ("e", "Copy embed code"),
            ("Space", "Show / hide code"),
            ("↑↓ PgUp PgDn", "Scroll code"),
            ("Esc / x / click outside", "Close"),
        ],
    ),
    (
        "Add Snippet",
        &[
            ("Tab / BackTab", "Next / previous field"),
            ("← →", "Pick language"),
            ("Ctrl-P", "Edit / Preview"),
            ("Ctrl-R", "Create Pull Request"),
            ("Ctrl-S", "Commit as Bot"),
            ("Esc", "Back to snippets"),
        ],
    ),
];

pub fn render(frame: &mut Frame) {
    let mut lines = Vec::new();
    for (heading, keys) in SECTIONS {
        lines.push(Line::styled(
            format!(" {heading}"),
            Style::default().fg(RosePine::GOLD).bold(),
        ));
        for (key, action) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("   {key:<24}"), Style::default().fg(RosePine::FOAM)),
                Span::styled(*action, Style::default().fg(RosePine::TEXT)),
            ]));
        }
        lines.push(Line::raw(""));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(64, height, frame.area());
    Clear.render(area, frame.buffer_mut());
    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(" Keyboard Shortcuts ")
                .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE)),
        )
        .render(area, frame.buffer_mut());
}
