use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(60, 26, area);

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section_header("Welcome Screen", theme),
        key_line("Enter", "Analyze my resume", theme),
        key_line("e", "See example analysis", theme),
        Line::from(""),
        section_header("Upload Screen", theme),
        key_line("drag / paste", "Drop a resume (path)", theme),
        key_line("o", "Choose file", theme),
        key_line("x / Delete", "Remove selected file", theme),
        key_line("Enter", "Analyze resume", theme),
        Line::from(""),
        section_header("Results Screen", theme),
        key_line("j / k", "Scroll", theme),
        key_line("Ctrl+d / Ctrl+u", "Page down / up", theme),
        key_line("r", "Analyze another resume", theme),
        key_line("d", "Download report", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("Esc", "Close picker / notification", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
        key_line("Ctrl+c", "Force quit", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<18}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
