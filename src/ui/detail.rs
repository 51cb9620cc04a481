use crate::app::App;
use crate::ui::colors::{RosePine, language_color};
use crate::ui::components::centered_rect;
use crate::ui::highlight;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Widget, Wrap,
    },
};

const MAX_WIDTH: u16 = 110;

/// Area the detail overlay occupies within `screen`
pub fn overlay_area(screen: Rect) -> Rect {
    let width = (screen.width.saturating_mul(9) / 10).min(MAX_WIDTH);
    centered_rect(width, screen.height.saturating_sub(4), screen)
}

/// Renders the detail overlay for the selected snippet and records its area
/// so clicks outside it can dismiss it.
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(snippet) = app.selected_snippet().cloned() else {
        return;
    };
    let Some(detail) = app.detail.clone() else {
        return;
    };

    let area = overlay_area(frame.area());
    app.overlay_area = Some(area);

    Clear.render(area, frame.buffer_mut());
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(" [x] ")
        .title_alignment(ratatui::layout::Alignment::Right)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(inner);

    let badge = format!(" {} ", snippet.language.badge());
    let title_row =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(badge.len() as u16)])
            .split(chunks[0]);
    Paragraph::new(snippet.title.clone())
        .style(Style::default().fg(RosePine::TEXT).bold())
        .render(title_row[0], frame.buffer_mut());
    Paragraph::new(badge)
        .style(
            Style::default()
                .fg(RosePine::BASE)
                .bg(language_color(snippet.language)),
        )
        .render(title_row[1], frame.buffer_mut());

    Paragraph::new(snippet.description.clone())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(RosePine::SUBTLE))
        .render(chunks[1], frame.buffer_mut());

    Paragraph::new(Line::from(vec![
        Span::styled(snippet.byline(), Style::default().fg(RosePine::MUTED)),
        Span::styled("  •  ", Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        Span::styled(snippet.display_date(), Style::default().fg(RosePine::MUTED)),
    ]))
    .render(chunks[2], frame.buffer_mut());

    let marker = if detail.code_expanded { "▾" } else { "▸" };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(RosePine::FOAM)),
        Span::styled("Code", Style::default().fg(RosePine::TEXT).bold()),
        Span::styled(
            format!("  {} lines  [Space]", snippet.get_line_count()),
            Style::default().fg(RosePine::MUTED),
        ),
    ]))
    .render(chunks[3], frame.buffer_mut());

    app.code_height = None;
    if detail.code_expanded {
        let (height, scroll) = render_code(frame, chunks[4], &snippet, detail.scroll);
        app.code_height = Some(height);
        if let Some(open) = app.detail.as_mut() {
            open.scroll = scroll;
        }
    }

    Paragraph::new(Line::from(vec![
        Span::styled(" [c] Copy Code ", Style::default().fg(RosePine::BASE).bg(RosePine::IRIS)),
        Span::raw("  "),
        Span::styled(" [d] Download ", Style::default().fg(RosePine::TEXT).bg(RosePine::OVERLAY)),
        Span::raw("  "),
        Span::styled(" [e] Embed ", Style::default().fg(RosePine::SUBTLE)),
    ]))
    .render(chunks[5], frame.buffer_mut());
}

/// Returns the number of visible code rows and the scroll offset actually used.
fn render_code(
    frame: &mut Frame,
    area: Rect,
    snippet: &crate::models::Snippet,
    scroll: usize,
) -> (usize, usize) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH).bg(RosePine::SURFACE));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let total_lines = snippet.get_line_count();
    let visible_lines = inner.height as usize;
    let scroll = scroll.min(total_lines.saturating_sub(visible_lines));

    let content_area = Rect {
        width: inner.width.saturating_sub(1),
        ..inner
    };
    Paragraph::new(highlight::highlight_lines(
        &snippet.code,
        snippet.language,
        scroll,
        visible_lines,
    ))
    .render(content_area, frame.buffer_mut());

    if total_lines > visible_lines && inner.width > 1 {
        let scrollbar_area = Rect {
            x: inner.x + inner.width.saturating_sub(1),
            width: 1,
            ..inner
        };
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(total_lines.saturating_sub(visible_lines))
            .position(scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(RosePine::SUBTLE))
            .thumb_style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
    (visible_lines, scroll)
}
