use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use resumer_core::document::ADVERTISED_MAX_BYTES;
use resumer_core::{SelectedFile, UploadPhase};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{header_line, spinner_char, truncate};

/// Render the Upload screen.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(3), // title
        Constraint::Min(8),    // card
        Constraint::Length(1), // footer
    ])
    .split(area);

    f.render_widget(Paragraph::new(header_line(theme, "Upload")), chunks[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Upload Your Resume",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Upload your LinkedIn resume to get detailed feedback and improvement suggestions",
            Style::default().fg(theme.dim),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    match app.upload.selected() {
        None => render_drop_zone(f, chunks[2], theme),
        Some(file) => render_selection(f, chunks[2], app, file),
    }

    render_footer(f, chunks[3], app);

    if let Some(picker) = &app.picker {
        crate::view::picker::render(f, chunks[2], picker, theme);
    }
}

fn render_drop_zone(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("⇪", Style::default().fg(theme.dim))),
        Line::from(Span::styled(
            "Drag & drop your resume here",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "(or paste its path)",
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Choose File ", Style::default().fg(theme.text).add_modifier(Modifier::REVERSED)),
            Span::styled(" o ", Style::default().fg(theme.dim)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Supports PDF, DOC, and DOCX files (max {}MB)",
                ADVERTISED_MAX_BYTES / 1024 / 1024
            ),
            Style::default().fg(theme.dim),
        )),
    ];

    let zone = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(theme.border_style()),
        );
    f.render_widget(zone, area);
}

fn render_selection(f: &mut Frame, area: Rect, app: &App, file: &SelectedFile) {
    let theme = &app.theme;
    let name_width = (area.width as usize).saturating_sub(24);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ▤ ", Style::default().fg(theme.document)),
            Span::styled(
                truncate(&file.name, name_width),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", file.media_type.label()),
                Style::default().fg(theme.dim),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", file.display_size()),
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
    ];

    if app.upload.phase() == UploadPhase::Analyzing {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} Analyzing Resume... ", spinner_char(app.tick)),
                Style::default()
                    .fg(theme.spinner)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(status) = &app.retry_status {
            lines.push(Line::from(Span::styled(
                format!("   {status}"),
                Style::default().fg(theme.mid),
            )));
        }
    } else {
        lines.push(Line::from(vec![
            Span::styled(" Analyze Resume ", theme.button_style()),
            Span::styled(" Enter ", Style::default().fg(theme.dim)),
            Span::raw("   "),
            Span::styled(" Remove ", Style::default().fg(theme.text).add_modifier(Modifier::REVERSED)),
            Span::styled(" x ", Style::default().fg(theme.dim)),
        ]));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Selected file "),
    );
    f.render_widget(card, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hint = if app.picker.is_some() {
        " j/k:nav  Enter:open/choose  Esc:close  q:quit"
    } else if app.upload.is_busy() {
        " analyzing...  ?:help  q:quit"
    } else if app.upload.can_analyze() {
        " Enter:analyze  x:remove  o:choose another  ?:help  q:quit"
    } else {
        " o:choose file  paste/drop a path  ?:help  q:quit"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, app.theme.footer_style()))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use resumer_core::CandidateFile;

    use crate::action::Action;
    use crate::app::App;
    use crate::view::testing::render_text;

    fn upload_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, std::time::Duration::from_secs(5));
        app.update(Action::Confirm);
        app
    }

    #[test]
    fn empty_state_shows_drop_zone() {
        let app = upload_app();
        let text = render_text(&app, 100, 24);
        assert!(text.contains("Drag & drop your resume here"));
        assert!(text.contains("Supports PDF, DOC, and DOCX files (max 10MB)"));
    }

    #[test]
    fn selection_shows_name_and_size() {
        let mut app = upload_app();
        app.upload
            .select(CandidateFile::new("resume.pdf", 500_000, "application/pdf"))
            .unwrap();
        let text = render_text(&app, 100, 24);
        assert!(text.contains("resume.pdf"));
        assert!(text.contains("0.48 MB"));
        assert!(text.contains("Analyze Resume"));
    }

    #[test]
    fn busy_state_shows_progress() {
        let mut app = upload_app();
        app.upload
            .select(CandidateFile::new("resume.pdf", 500_000, "application/pdf"))
            .unwrap();
        app.upload.begin_analysis().unwrap();
        let text = render_text(&app, 100, 24);
        assert!(text.contains("Analyzing Resume..."));
        assert!(!text.contains("Remove"));
    }

    #[test]
    fn footer_offers_analyze_only_when_possible() {
        let mut app = upload_app();
        assert!(!render_text(&app, 100, 24).contains("Enter:analyze"));
        app.upload
            .select(CandidateFile::new("resume.pdf", 500_000, "application/pdf"))
            .unwrap();
        assert!(render_text(&app, 100, 24).contains("Enter:analyze"));
        app.upload.begin_analysis().unwrap();
        assert!(!render_text(&app, 100, 24).contains("Enter:analyze"));
    }
}
