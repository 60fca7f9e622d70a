use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use resumer_core::{AnalysisRecord, Section};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{bar, header_line};

/// Width of the per-section score bar.
const SECTION_BAR_WIDTH: usize = 30;

/// Render the Results screen.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();

    let chunks = layout(area);

    f.render_widget(
        Paragraph::new(header_line(theme, "Resume Analysis Results")),
        chunks[0],
    );

    // The controller only enters Results with a record.
    let Some(record) = app.controller.record() else {
        return;
    };

    render_overall(f, chunks[1], record, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let inner = block.inner(chunks[2]);
    let body = Paragraph::new(body_lines(record, theme)).wrap(Wrap { trim: false });
    let max_scroll = overflow(&body, inner);
    f.render_widget(block, chunks[2]);
    f.render_widget(body.scroll((app.results_scroll.min(max_scroll), 0)), inner);

    render_footer(f, chunks[3], theme);
}

/// Header, overall score, scrollable breakdown, footer.
fn layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Rows of `body` below the bottom of `area` once wrapped to its width.
fn overflow(body: &Paragraph, area: Rect) -> u16 {
    let rows = body.line_count(area.width);
    rows.saturating_sub(area.height as usize)
        .min(u16::MAX as usize) as u16
}

/// Furthest the results body can scroll when the screen is `area`.
pub fn max_scroll(record: &AnalysisRecord, theme: &Theme, area: Rect) -> u16 {
    let inner = Block::default().borders(Borders::ALL).inner(layout(area)[2]);
    let body = Paragraph::new(body_lines(record, theme)).wrap(Wrap { trim: false });
    overflow(&body, inner)
}

fn render_overall(f: &mut Frame, area: Rect, record: &AnalysisRecord, theme: &Theme) {
    let score = record.overall_score;
    let color = theme.tier_color(score.tier());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Overall Score ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let headline = Line::from(vec![
        Span::styled(
            score.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(score.tier().label(), Style::default().fg(color)),
    ]);
    f.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        rows[0],
    );

    let (filled, empty) = bar(score.ratio(), rows[1].width as usize);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(filled, Style::default().fg(color)),
            Span::styled(empty, Style::default().fg(theme.dim)),
        ])),
        rows[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Your resume scores {score}/100"),
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Center),
        rows[2],
    );
}

/// The scrollable part of the results: section cards, then the three lists,
/// then the actions. Sections appear in the record's order.
pub fn body_lines(record: &AnalysisRecord, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    heading(&mut lines, "SECTION BREAKDOWN", theme);
    let title_width = record
        .sections
        .iter()
        .map(|s| s.title().chars().count())
        .max()
        .unwrap_or(0)
        .max(12);
    for section in &record.sections {
        section_card(&mut lines, section, title_width, theme);
    }

    heading(&mut lines, "KEY RECOMMENDATIONS", theme);
    for (i, rec) in record.recommendations.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>2}. ", i + 1),
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
            ),
            Span::styled(rec.clone(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));

    heading(&mut lines, "STRENGTHS", theme);
    for strength in &record.strengths {
        lines.push(Line::from(vec![
            Span::styled("   ✓ ", Style::default().fg(theme.top)),
            Span::styled(strength.clone(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));

    heading(&mut lines, "AREAS FOR IMPROVEMENT", theme);
    for improvement in &record.improvements {
        lines.push(Line::from(vec![
            Span::styled("   ! ", Style::default().fg(theme.mid)),
            Span::styled(improvement.clone(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" Download Full Report ", theme.button_style()),
        Span::styled(" d ", Style::default().fg(theme.dim)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            " Analyze Another Resume ",
            Style::default().fg(theme.text).add_modifier(Modifier::REVERSED),
        ),
        Span::styled(" r ", Style::default().fg(theme.dim)),
    ]));

    lines
}

fn heading(lines: &mut Vec<Line<'static>>, title: &'static str, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        theme.section_style(),
    )));
    lines.push(Line::from(""));
}

fn section_card(lines: &mut Vec<Line<'static>>, section: &Section, width: usize, theme: &Theme) {
    let color = theme.tier_color(section.score.tier());
    let (filled, empty) = bar(section.score.ratio(), SECTION_BAR_WIDTH);

    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<width$}  ", section.title()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}%", section.score),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(filled, Style::default().fg(color)),
        Span::styled(empty, Style::default().fg(theme.dim)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", section.feedback),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(""));
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Line::from(Span::styled(
        " j/k:scroll  r:start over  d:download report  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use resumer_core::{sample_record, AnalysisRecord};

    use super::*;
    use crate::action::Action;
    use crate::app::App;
    use crate::tui_event::BackendEvent;
    use crate::view::testing::{render_rows, render_text};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    /// Titles of the section cards, in rendered order.
    fn card_titles(record: &AnalysisRecord) -> Vec<String> {
        body_lines(record, &Theme::professional())
            .iter()
            .map(text)
            .filter(|t| t.ends_with('%'))
            .map(|t| t.split_whitespace().next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn cards_follow_record_order_not_score() {
        let record = AnalysisRecord::from_json(
            r#"{
                "overallScore": 50,
                "sections": {
                    "a": {"score": 10, "feedback": "low"},
                    "b": {"score": 95, "feedback": "high"},
                    "c": {"score": 60, "feedback": "mid"}
                },
                "recommendations": [],
                "strengths": [],
                "improvements": []
            }"#,
        )
        .unwrap();
        assert_eq!(card_titles(&record), vec!["A", "B", "C"]);
    }

    #[test]
    fn sample_cards_and_numbered_recommendations() {
        let record = sample_record().unwrap();
        assert_eq!(
            card_titles(&record),
            vec!["Headline", "Summary", "Experience", "Skills", "Education"]
        );

        let lines: Vec<String> = body_lines(&record, &Theme::professional())
            .iter()
            .map(text)
            .collect();
        let numbered: Vec<&String> = lines
            .iter()
            .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbered.len(), 4);
        assert!(numbered[0].trim_start().starts_with("1. Add specific metrics"));
        assert!(numbered[3].trim_start().starts_with("4. Update skills section"));
    }

    #[test]
    fn badge_color_follows_tier() {
        let theme = Theme::professional();
        let record = sample_record().unwrap();
        let lines = body_lines(&record, &theme);
        let badge = |title: &str| {
            lines
                .iter()
                .find(|l| text(l).trim_start().starts_with(title))
                .and_then(|l| l.spans.last())
                .and_then(|s| s.style.fg)
        };
        assert_eq!(badge("Headline"), Some(theme.top)); // 85
        assert_eq!(badge("Summary"), Some(theme.mid)); // 72
        assert_eq!(badge("Experience"), Some(theme.top)); // 80
    }

    #[test]
    fn renders_overall_score() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, std::time::Duration::from_secs(5));
        app.update(Action::Confirm);
        app.handle_backend_event(BackendEvent::AnalysisComplete {
            record: sample_record().unwrap(),
        });
        app.update(Action::Back); // close the "Analysis Complete!" toast
        let screen = render_text(&app, 100, 40);
        assert!(screen.contains("Your resume scores 78/100"));
        assert!(screen.contains("SECTION BREAKDOWN"));
        assert!(screen.contains("Headline"));
    }

    #[test]
    fn wrapped_lines_count_towards_scroll_range() {
        let theme = Theme::professional();
        let record = sample_record().unwrap();
        let area = Rect::new(0, 0, 50, 30);
        // 30 rows minus header, overall panel, footer and borders
        let visible = 21;
        let unwrapped = body_lines(&record, &theme).len() - visible;
        assert!(max_scroll(&record, &theme, area) as usize > unwrapped);
    }

    #[test]
    fn bottom_of_results_reachable_on_narrow_terminal() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, std::time::Duration::from_secs(5));
        app.update(Action::Resize(50, 30));
        app.update(Action::Confirm);
        app.handle_backend_event(BackendEvent::AnalysisComplete {
            record: sample_record().unwrap(),
        });
        app.update(Action::Back);

        let top = render_text(&app, 50, 30);
        assert!(!top.contains("Analyze Another Resume"));

        app.update(Action::GoBottom);
        let bottom = render_text(&app, 50, 30);
        assert!(bottom.contains("Analyze Another Resume"));

        app.update(Action::MoveUp);
        assert_ne!(render_text(&app, 50, 30), bottom);
    }

    #[test]
    fn overall_bar_has_no_gap() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, std::time::Duration::from_secs(5));
        app.update(Action::Confirm);
        app.handle_backend_event(BackendEvent::AnalysisComplete {
            record: sample_record().unwrap(),
        });
        app.update(Action::Back);
        // header, panel border, headline, then the bar
        let row = &render_rows(&app, 100, 40)[3];
        let inside: String = row.chars().skip(1).take(98).collect();
        assert!(inside.chars().all(|c| c == '█' || c == '░'), "{row}");
        assert_eq!(inside.chars().filter(|&c| c == '█').count(), 76);
    }
}
