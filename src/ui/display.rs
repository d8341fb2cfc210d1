//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::protein::{Composition, Ptm, SequenceReport};
use crate::report::{format_mass, format_signed_mass};
use crate::ui::colors::{get_delta_color, get_residue_color};

/// Shorten long sequences for headings, keeping the start
pub fn format_sequence_preview(sequence: &str, max_chars: usize) -> String {
    if sequence.chars().count() <= max_chars {
        return sequence.to_string();
    }
    let head: String = sequence.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}…")
}

/// Composition as colored `A:2` entries
pub fn composition_spans(composition: &Composition) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (residue, count)) in composition.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{residue}:{count}"),
            Style::default().fg(get_residue_color(residue)),
        ));
    }
    spans
}

pub fn build_report_lines(index: usize, report: &SequenceReport) -> Vec<Line<'static>> {
    let result = &report.result;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Result for Sequence {index}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_sequence_preview(&report.sequence, 40),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![Span::styled(
            format_mass(result),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )]),
    ];

    let mut composition_line = vec![Span::raw("Composition: ")];
    if result.composition.is_empty() {
        composition_line.push(Span::styled("empty", Style::default().fg(Color::DarkGray)));
    } else {
        composition_line.extend(composition_spans(&result.composition));
    }
    lines.push(Line::from(composition_line));

    if !result.applied_ptms.is_empty() {
        lines.push(Line::from("Applied PTMs:"));
        for applied in &result.applied_ptms {
            let delta = applied.delta();
            lines.push(Line::from(vec![
                Span::raw(format!("  • {} (×{}) → ", applied.ptm, applied.multiplicity)),
                Span::styled(
                    format_signed_mass(delta),
                    Style::default().fg(get_delta_color(delta)),
                ),
            ]));
        }
    }

    if !result.invalid.is_empty() {
        let invalid: Vec<String> = result.invalid.iter().map(char::to_string).collect();
        lines.push(Line::from(Span::styled(
            format!("Ignored invalid characters: {}", invalid.join(", ")),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines
}

/// All results, separated by blank lines
pub fn build_results_lines(reports: &[SequenceReport]) -> Vec<Line<'static>> {
    if reports.is_empty() {
        return vec![Line::from(Span::styled(
            "Enter a sequence and press Enter to calculate",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(build_report_lines(i + 1, report));
    }
    lines
}

/// PTM checklist with the cursor row highlighted when the list has focus
pub fn build_ptm_lines(app: &App, focused: bool) -> Vec<Line<'static>> {
    Ptm::ALL
        .iter()
        .enumerate()
        .map(|(i, &ptm)| {
            let marker = if app.is_selected(ptm) { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if app.is_selected(ptm) {
                style = style.fg(Color::Green);
            }
            if focused && i == app.ptm_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::styled(format!("{marker} {}", ptm.name()), style),
                Span::styled(
                    format!("  {}", format_signed_mass(ptm.delta())),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::calculate_batch;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_sequence_preview() {
        assert_eq!(format_sequence_preview("ARN", 10), "ARN");
        assert_eq!(format_sequence_preview("ARNDCEQGH", 5), "ARND…");
    }

    #[test]
    fn test_report_lines() {
        let reports = calculate_batch(&["cc1"], &[Ptm::DisulfideBond, Ptm::Methylation]);
        let lines: Vec<String> = build_report_lines(2, &reports[0]).iter().map(line_text).collect();

        assert_eq!(lines[0], "Result for Sequence 2: cc1");
        assert!(lines[1].ends_with("Da (0.24 kDa)"));
        assert_eq!(lines[2], "Composition: C:2");
        assert_eq!(lines[3], "Applied PTMs:");
        assert_eq!(lines[4], "  • Disulfide bond (×1) → -2.02 Da");
        assert_eq!(lines[5], "  • Methylation (×1) → +14.02 Da");
        assert_eq!(lines[6], "Ignored invalid characters: 1");
    }

    #[test]
    fn test_results_placeholder_and_separators() {
        assert_eq!(build_results_lines(&[]).len(), 1);

        let reports = calculate_batch(&["A", "G"], &[]);
        let lines = build_results_lines(&reports);
        // three lines per report plus one separator
        assert_eq!(lines.len(), 7);
        assert_eq!(line_text(&lines[3]), "");
    }

    #[test]
    fn test_ptm_lines_show_selection() {
        let mut app = App::new();
        app.selected_ptms = vec![Ptm::Glycosylation];
        let lines: Vec<String> = build_ptm_lines(&app, true).iter().map(line_text).collect();
        assert_eq!(lines.len(), Ptm::ALL.len());
        assert!(lines[0].starts_with("[ ] Phosphorylation"));
        assert!(lines[4].starts_with("[x] Glycosylation"));
        assert!(lines[5].ends_with("-2.02 Da"));
    }
}
