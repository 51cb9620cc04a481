//! Snippet listing page
//!
//! Cards are laid out in one or two columns depending on width and scrolled so
//! the highlighted card stays on screen.

use crate::app::App;
use crate::models::Snippet;
use crate::ui::colors::{RosePine, language_color};
use crate::ui::components::{
    render_bottom_bar, render_filter_bar, render_header, rounded_block, truncate_to_width,
};
use crate::ui::{detail, highlight};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

const CARD_HEIGHT: u16 = 10;
const PREVIEW_LINES: usize = 3;
const TWO_COLUMN_MIN_WIDTH: u16 = 100;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    render_header(frame, chunks[0], app);
    render_filter_bar(frame, chunks[1], app);
    render_heading(frame, chunks[2], app);
    render_cards(frame, chunks[3], app);
    render_bottom_bar(frame, chunks[4], app);

    if app.detail.is_some() {
        detail::render(frame, app);
    }
}

fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.visible_snippets().len();
    let lines = vec![
        Line::from(vec![
            Span::styled(" Code Snippets Library", Style::default().fg(RosePine::TEXT).bold()),
            Span::styled(
                format!("  {count} of {}", app.catalog.len()),
                Style::default().fg(RosePine::MUTED),
            ),
        ]),
        Line::styled(
            " Discover, share, and reuse code snippets across your projects",
            Style::default().fg(RosePine::SUBTLE),
        ),
    ];
    Paragraph::new(lines).render(area, frame.buffer_mut());
}

fn render_cards(frame: &mut Frame, area: Rect, app: &mut App) {
    app.card_areas.clear();

    let visible: Vec<Snippet> = app.visible_snippets().into_iter().cloned().collect();
    if visible.is_empty() {
        let empty = Paragraph::new("No snippets found matching your criteria")
            .alignment(Alignment::Center)
            .style(Style::default().fg(RosePine::MUTED));
        let middle = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area)[1];
        empty.render(middle, frame.buffer_mut());
        return;
    }

    let columns: usize = if area.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let rows_fit = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor = app.cursor.min(visible.len() - 1);
    let cursor_row = cursor / columns;
    let first_row = cursor_row.saturating_sub(rows_fit - 1);

    let card_width = area.width / columns as u16;
    for (index, snippet) in visible.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= rows_fit {
            break;
        }
        let column = index % columns;
        let card_area = Rect {
            x: area.x + column as u16 * card_width,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(area.height),
        };

        render_card(frame, card_area, snippet, index == cursor);
        app.card_areas.push((card_area, snippet.id.clone()));
    }
}

fn render_card(frame: &mut Frame, area: Rect, snippet: &Snippet, highlighted: bool) {
    let border = if highlighted {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(PREVIEW_LINES as u16 + 2),
        Constraint::Length(1),
    ])
    .split(inner);

    let badge = format!(" {} ", snippet.language.badge());
    let title_width = (inner.width as usize).saturating_sub(badge.len() + 1);
    let title_style = if highlighted {
        Style::default().fg(RosePine::IRIS).bold()
    } else {
        Style::default().fg(RosePine::TEXT).bold()
    };
    let header = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(badge.len() as u16),
    ])
    .split(rows[0]);
    Paragraph::new(truncate_to_width(&snippet.title, title_width))
        .style(title_style)
        .render(header[0], frame.buffer_mut());
    Paragraph::new(badge)
        .style(
            Style::default()
                .fg(RosePine::BASE)
                .bg(language_color(snippet.language)),
        )
        .render(header[1], frame.buffer_mut());

    Paragraph::new(truncate_to_width(&snippet.description, inner.width as usize))
        .style(Style::default().fg(RosePine::SUBTLE))
        .render(rows[1], frame.buffer_mut());

    let code_block = rounded_block(RosePine::HIGHLIGHT_LOW).bg(RosePine::SURFACE);
    let code_area = code_block.inner(rows[2]);
    code_block.render(rows[2], frame.buffer_mut());
    Paragraph::new(highlight::highlight_lines(
        &snippet.code,
        snippet.language,
        0,
        PREVIEW_LINES,
    ))
    .render(code_area, frame.buffer_mut());

    let footer = Line::from(vec![
        Span::styled(snippet.byline(), Style::default().fg(RosePine::MUTED)),
        Span::raw("  "),
        Span::styled(snippet.display_date(), Style::default().fg(RosePine::MUTED)),
    ]);
    let actions = Line::styled(
        "[c] copy  [d] save  [⏎] view",
        Style::default().fg(RosePine::HIGHLIGHT_HIGH),
    );
    let footer_chunks =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(actions.width() as u16)])
            .split(rows[3]);
    Paragraph::new(footer).render(footer_chunks[0], frame.buffer_mut());
    Paragraph::new(actions)
        .alignment(Alignment::Right)
        .render(footer_chunks[1], frame.buffer_mut());
}
