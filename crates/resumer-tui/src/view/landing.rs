use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::theme::Theme;
use crate::view::header_line;

const FEATURES: [&str; 3] = [
    "AI-Powered Analysis",
    "Instant Feedback",
    "Professional Recommendations",
];

/// Render the Landing screen.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(12),   // hero
        Constraint::Length(1), // footer
    ])
    .split(area);

    f.render_widget(Paragraph::new(header_line(theme, "Welcome")), chunks[0]);
    render_hero(f, chunks[1], theme);
    render_footer(f, chunks[2], theme);
}

fn render_hero(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Perfect Your",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Freelancer Profile",
            Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Get AI-powered insights and actionable feedback to optimize your LinkedIn resume",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "and stand out in the competitive freelancing market.",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Analyze My Resume → ", theme.button_style()),
            Span::styled(" Enter ", Style::default().fg(theme.dim)),
            Span::raw("   "),
            Span::styled(
                " See Example Analysis ",
                Style::default().fg(theme.text).add_modifier(Modifier::REVERSED),
            ),
            Span::styled(" e ", Style::default().fg(theme.dim)),
        ]),
        Line::from(""),
    ];

    let mut features = Vec::new();
    for (i, feature) in FEATURES.iter().enumerate() {
        if i > 0 {
            features.push(Span::raw("     "));
        }
        features.push(Span::styled("✓ ", Style::default().fg(theme.top)));
        features.push(Span::styled(*feature, Style::default().fg(theme.text)));
    }
    lines.push(Line::from(features));

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    f.render_widget(hero, area);
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Line::from(Span::styled(
        " Enter:get started  e:example  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use crate::app::App;
    use crate::view::testing::render_text;

    #[test]
    fn shows_call_to_action_and_features() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let app = App::new(tx, std::time::Duration::from_secs(5));
        let text = render_text(&app, 120, 24);
        assert!(text.contains("Freelancer Profile"));
        assert!(text.contains("Analyze My Resume"));
        assert!(text.contains("Instant Feedback"));
    }
}
