//! Add-snippet page
//!
//! Edit tab shows the form fields with inline validation errors; Preview tab shows
//! the draft roughly the way a card would render it.

use crate::app::{App, FormTab};
use crate::models::{DraftField, Language};
use crate::ui::colors::{RosePine, language_color};
use crate::ui::components::{render_bottom_bar, render_header, rounded_block};
use crate::ui::highlight;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    render_header(frame, chunks[0], app);
    render_heading(frame, chunks[1]);
    render_tabs(frame, chunks[2], app.form.tab);

    let body = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(100),
        Constraint::Fill(1),
    ])
    .split(chunks[3])[1];

    match app.form.tab {
        FormTab::Edit => render_form(frame, body, app),
        FormTab::Preview => render_preview(frame, body, app),
    }

    Paragraph::new("* Required fields")
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::MUTED))
        .render(chunks[4], frame.buffer_mut());
    render_bottom_bar(frame, chunks[5], app);
}

fn render_heading(frame: &mut Frame, area: Rect) {
    Paragraph::new(vec![
        Line::styled(" ← Back to snippets [Esc]", Style::default().fg(RosePine::MUTED)),
        Line::styled(" Add New Snippet", Style::default().fg(RosePine::TEXT).bold()),
        Line::styled(
            " Share your code with the community",
            Style::default().fg(RosePine::SUBTLE),
        ),
    ])
    .render(area, frame.buffer_mut());
}

fn render_tabs(frame: &mut Frame, area: Rect, tab: FormTab) {
    let selected = match tab {
        FormTab::Edit => 0,
        FormTab::Preview => 1,
    };
    Tabs::new(vec![" Edit ", " Preview "])
        .select(selected)
        .style(Style::default().fg(RosePine::SUBTLE))
        .highlight_style(Style::default().fg(RosePine::BASE).bg(RosePine::IRIS))
        .divider("│")
        .render(area, frame.buffer_mut());
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let code_height = area.height.saturating_sub(3 + 5 + 3 + 4).max(5);
    let rows = Layout::vertical([
        Constraint::Length(3 + 1),
        Constraint::Length(4 + 1),
        Constraint::Length(3 + 1),
        Constraint::Length(code_height),
    ])
    .split(area);

    render_text_field(frame, rows[0], app, DraftField::Title);
    render_text_field(frame, rows[1], app, DraftField::Description);

    let split = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[2]);
    render_language_field(frame, split[0], app);
    render_text_field(frame, split[1], app, DraftField::Tags);

    render_text_field(frame, rows[3], app, DraftField::Code);
}

/// Field box plus an error line underneath.
fn field_areas(area: Rect) -> (Rect, Rect) {
    let parts = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
    (parts[0], parts[1])
}

fn field_border(app: &App, field: DraftField) -> ratatui::style::Color {
    if app.form.errors.contains_key(&field) {
        RosePine::LOVE
    } else if app.form.focused == field {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    }
}

fn render_error(frame: &mut Frame, area: Rect, app: &App, field: DraftField) {
    if let Some(message) = app.form.errors.get(&field) {
        Paragraph::new(format!(" {message}"))
            .style(Style::default().fg(RosePine::LOVE))
            .render(area, frame.buffer_mut());
    }
}

fn render_text_field(frame: &mut Frame, area: Rect, app: &App, field: DraftField) {
    let (box_area, error_area) = field_areas(area);
    let text = app.form.draft.text(field).unwrap_or_default();
    let focused = app.form.focused == field;

    let mut lines: Vec<Line> = if text.is_empty() && !focused {
        vec![Line::styled(
            field.placeholder(),
            Style::default().fg(RosePine::MUTED),
        )]
    } else {
        text.split('\n')
            .map(|l| Line::styled(l.to_string(), Style::default().fg(RosePine::TEXT)))
            .collect()
    };
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", Style::default().fg(RosePine::IRIS)));
        }
    }

    // keep the end of long input in view
    let inner_height = box_area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(inner_height);

    Paragraph::new(lines.split_off(skip))
        .wrap(Wrap { trim: false })
        .block(rounded_block(field_border(app, field)).title(format!(" {} ", field.label())))
        .render(box_area, frame.buffer_mut());
    render_error(frame, error_area, app, field);
}

fn render_language_field(frame: &mut Frame, area: Rect, app: &App) {
    let (box_area, error_area) = field_areas(area);
    let field = DraftField::Language;

    let line = match app.form.draft.language {
        Some(language) => Line::from(vec![
            Span::styled("◂ ", Style::default().fg(RosePine::MUTED)),
            Span::styled(
                format!("{} {}", language.icon(), language.identifier()),
                Style::default().fg(language_color(language)).bold(),
            ),
            Span::styled(" ▸", Style::default().fg(RosePine::MUTED)),
        ]),
        None => Line::styled(
            format!("{}  [←→]", field.placeholder()),
            Style::default().fg(RosePine::MUTED),
        ),
    };

    Paragraph::new(line)
        .block(rounded_block(field_border(app, field)).title(format!(" {} ", field.label())))
        .render(box_area, frame.buffer_mut());
    render_error(frame, error_area, app, field);
}

fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let draft = &app.form.draft;
    let block = rounded_block(RosePine::HIGHLIGHT_HIGH).title(" Preview ");
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(inner);

    let title = if draft.title.is_empty() {
        "Untitled Snippet"
    } else {
        draft.title.as_str()
    };
    Paragraph::new(title)
        .style(Style::default().fg(RosePine::TEXT).bold())
        .render(rows[0], frame.buffer_mut());

    let description = if draft.description.is_empty() {
        "No description"
    } else {
        draft.description.as_str()
    };
    Paragraph::new(description)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(RosePine::SUBTLE))
        .render(rows[1], frame.buffer_mut());

    if let Some(language) = draft.language {
        Paragraph::new(format!(" {} ", language.badge()))
            .style(Style::default().fg(RosePine::BASE).bg(language_color(language)))
            .render(badge_area(rows[2], language), frame.buffer_mut());
    }

    let tags: Vec<Span> = draft
        .tag_list()
        .into_iter()
        .flat_map(|tag| {
            [
                Span::styled(
                    format!(" {tag} "),
                    Style::default().fg(RosePine::SUBTLE).bg(RosePine::OVERLAY),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Paragraph::new(Line::from(tags)).render(rows[3], frame.buffer_mut());

    let code_block = rounded_block(RosePine::HIGHLIGHT_LOW).bg(RosePine::SURFACE);
    let code_area = code_block.inner(rows[4]);
    code_block.render(rows[4], frame.buffer_mut());
    let code_lines = match draft.language {
        _ if draft.code.is_empty() => vec![Line::styled(
            "// Your code will appear here",
            Style::default().fg(RosePine::MUTED),
        )],
        Some(language) => {
            highlight::highlight_lines(&draft.code, language, 0, code_area.height as usize)
        }
        None => draft
            .code
            .lines()
            .map(|l| Line::styled(l.to_string(), Style::default().fg(RosePine::TEXT)))
            .collect(),
    };
    Paragraph::new(code_lines).render(code_area, frame.buffer_mut());
}

fn badge_area(row: Rect, language: Language) -> Rect {
    Rect {
        width: (language.badge().len() as u16 + 2).min(row.width),
        ..row
    }
}
