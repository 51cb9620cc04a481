//! UI Components and Layout Module
//!
//! Reusable pieces shared by the listing and the add-snippet page.
//!
//! # Components
//!
//! - **Header**: brand, search box and the current location
//! - **Filter Bar**: "All" plus one chip per language
//! - **Bottom Navigation Bar**: breadcrumbs and context shortcuts
//! - **Toast**: the transient success/error notification

use crate::app::{App, ListFocus, NotificationKind};
use crate::models::{Language, Route};
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the header: brand on the left, search in the middle, location on the right.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Length(18),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .split(area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" \u{f121} ", Style::default().fg(RosePine::IRIS)),
        Span::styled("CodeSnippets", Style::default().fg(RosePine::TEXT).bold()),
    ]))
    .block(rounded_block(RosePine::HIGHLIGHT_HIGH));
    brand.render(chunks[0], frame.buffer_mut());

    let searching = app.route == Route::Listing && app.list_focus == ListFocus::Search;
    let search_line = if app.route == Route::AddSnippet {
        Line::from(Span::styled(
            " Search snippets...",
            Style::default().fg(RosePine::MUTED),
        ))
    } else if app.filter.query.is_empty() && !searching {
        Line::from(vec![
            Span::styled(" \u{f002} ", Style::default().fg(RosePine::MUTED)),
            Span::styled("Search snippets... [/]", Style::default().fg(RosePine::MUTED)),
        ])
    } else {
        let mut spans = vec![
            Span::styled(" \u{f002} ", Style::default().fg(RosePine::FOAM)),
            Span::styled(app.filter.query.clone(), Style::default().fg(RosePine::TEXT)),
        ];
        if searching {
            spans.push(Span::styled("█", Style::default().fg(RosePine::IRIS)));
        }
        Line::from(spans)
    };

    let border = if searching {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };
    Paragraph::new(search_line)
        .block(rounded_block(border).title(" Search "))
        .render(chunks[1], frame.buffer_mut());

    let location = app.location().to_string();
    let width = chunks[2].width.saturating_sub(4) as usize;
    Paragraph::new(truncate_to_width(&location, width))
        .style(Style::default().fg(RosePine::SUBTLE))
        .block(rounded_block(RosePine::HIGHLIGHT_HIGH).title(" Location "))
        .render(chunks[2], frame.buffer_mut());
}

/// Renders the language filter chips. The active one is filled.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Filter: ",
        Style::default().fg(RosePine::MUTED),
    )];

    spans.push(chip("All", app.filter.language.is_none()));
    for language in Language::ALL {
        spans.push(Span::raw(" "));
        spans.push(chip(
            language.identifier(),
            app.filter.language == Some(language),
        ));
    }

    Paragraph::new(Line::from(spans))
        .block(rounded_block(RosePine::HIGHLIGHT_HIGH))
        .render(area, frame.buffer_mut());
}

fn chip(label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!(" {label} "),
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold(),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(RosePine::SUBTLE))
    }
}

/// Renders the bottom navigation bar with breadcrumbs and keyboard shortcuts
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(2)]).split(area);

    Paragraph::new(get_breadcrumbs(app))
        .alignment(Alignment::Left)
        .block(rounded_block(RosePine::HIGHLIGHT_HIGH))
        .render(navbar_chunks[0], frame.buffer_mut());

    Paragraph::new(get_context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(rounded_block(RosePine::HIGHLIGHT_HIGH))
        .render(navbar_chunks[1], frame.buffer_mut());
}

fn get_context_shortcuts(app: &App) -> &'static str {
    match app.route {
        _ if app.show_help => " [?/Esc] Close help ",
        Route::Listing if app.detail.is_some() => {
            " [c] Copy │ [d] Download │ [e] Embed │ [Space] Code │ [↑↓] Scroll │ [Esc] Close "
        }
        Route::Listing if app.list_focus == ListFocus::Search => {
            " [⏎] Done │ [Ctrl-U] Clear │ [Esc] Back "
        }
        Route::Listing => {
            " [/] Search │ [Tab] Language │ [⏎] View │ [c] Copy │ [d] Download │ [a] Add │ [?] Help │ [q] Quit "
        }
        Route::AddSnippet => {
            " [Tab] Field │ [Ctrl-P] Preview │ [Ctrl-R] Pull Request │ [Ctrl-S] Commit │ [Esc] Back "
        }
    }
}

fn get_breadcrumbs(app: &App) -> Line<'static> {
    let active = Style::default().fg(RosePine::BASE).bg(RosePine::IRIS);
    let inactive = Style::default().fg(RosePine::SUBTLE);
    let separator = Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED));

    let mut spans = Vec::new();
    match app.route {
        Route::Listing => match app.selected_snippet() {
            Some(snippet) => {
                spans.push(Span::styled(" 󰋜 Snippets ", inactive));
                spans.push(separator);
                spans.push(Span::styled(
                    format!(" {} {} ", snippet.language.icon(), snippet.title),
                    Style::default().fg(RosePine::BASE).bg(RosePine::GOLD),
                ));
            }
            None => spans.push(Span::styled(" 󰋜 Snippets ", active)),
        },
        Route::AddSnippet => {
            spans.push(Span::styled(" 󰋜 Snippets ", inactive));
            spans.push(separator);
            spans.push(Span::styled(" Add New Snippet ", active));
        }
    }
    Line::from(spans)
}

/// Renders the current notification as a toast in the top-right corner.
pub fn render_toast(frame: &mut Frame, app: &App) {
    let Some(notification) = app.notification.as_ref() else {
        return;
    };

    let (icon, color) = match notification.kind {
        NotificationKind::Success => ("✓", RosePine::FOAM),
        NotificationKind::Error => ("✗", RosePine::LOVE),
    };

    let area = frame.area();
    let width = (notification.message.width() as u16 + 8).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 3,
    }
    .intersection(area);
    if toast_area.is_empty() {
        return;
    }

    Clear.render(toast_area, frame.buffer_mut());
    Paragraph::new(Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(color).bold()),
        Span::styled(
            notification.message.clone(),
            Style::default().fg(RosePine::TEXT),
        ),
    ]))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color).bg(RosePine::SURFACE)),
    )
    .render(toast_area, frame.buffer_mut());
}

pub fn rounded_block(color: ratatui::style::Color) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color))
}

/// A rectangle of `width` x `height` centered in `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
