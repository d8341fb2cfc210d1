use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{App, Focus},
    protein::Ptm,
    ui::{build_ptm_lines, build_results_lines, get_status_color},
};

/// One row per modification plus the borders
const PTM_LIST_HEIGHT: u16 = Ptm::ALL.len() as u16 + 2;

pub fn render_ui(f: &mut Frame, app: &App) {
    let main_horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(f.area());

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(main_horizontal_split[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PTM_LIST_HEIGHT),
            Constraint::Min(4),
        ])
        .split(main_horizontal_split[1]);

    render_title(f, app, left_chunks[0]);
    render_sequence_input(f, app, left_chunks[1]);
    render_status_bar(f, app, left_chunks[2]);
    render_ptm_selector(f, app, right_chunks[0]);
    render_results(f, app, right_chunks[1]);
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Protein Molecular Weight Calculator",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    if !app.reports.is_empty() {
        spans.push(Span::styled(
            format!("{} result(s)", app.reports.len()),
            Style::default().fg(Color::Green),
        ));
    }

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_sequence_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sequence;
    let mut lines = Vec::new();

    if let Some(file) = &app.file {
        lines.push(Line::from(vec![
            Span::raw("File: "),
            Span::styled(file.display().to_string(), Style::default().fg(Color::Yellow)),
            Span::styled("  (Ctrl+U to unload)", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }

    let mut input_spans = vec![Span::styled(app.input.clone(), Style::default().fg(Color::Green))];
    if focused {
        input_spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(input_spans));

    let input_widget = Paragraph::new(lines)
        .block(focused_block("Protein Sequence (1-letter code)", focused))
        .wrap(Wrap { trim: false });
    f.render_widget(input_widget, area);
}

fn render_ptm_selector(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Ptms;
    let ptm_widget = Paragraph::new(build_ptm_lines(app, focused))
        .block(focused_block("Post-Translational Modifications", focused));
    f.render_widget(ptm_widget, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let results_widget = Paragraph::new(build_results_lines(&app.reports))
        .block(Block::default().title("Results").borders(Borders::ALL))
        .wrap(Wrap { trim: true })
        .scroll((app.results_scroll, 0));
    f.render_widget(results_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(get_status_color(status.kind)),
        )),
        None => Line::from(Span::styled(
            "Enter: calculate  Tab: switch focus  Space: toggle PTM  Ctrl+S: export CSV  \
             Ctrl+L: clear  PgUp/PgDn: scroll  Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let status_widget = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
