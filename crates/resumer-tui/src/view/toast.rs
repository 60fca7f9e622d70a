use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 4;

/// Render active notifications stacked in the top-right corner, newest on top.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);

    let mut y = area.y + 1;
    for toast in app.toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let n = &toast.notification;
        let color = theme.notification_color(n.kind);
        let popup = Rect::new(x, y, width, TOAST_HEIGHT);

        let body = Paragraph::new(vec![Line::from(Span::styled(
            n.description.as_str(),
            Style::default().fg(theme.text),
        ))])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    format!(" {} ", n.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(Span::styled(" Esc ", Style::default().fg(theme.dim))).right_aligned()),
        );

        f.render_widget(Clear, popup);
        f.render_widget(body, popup);
        y += TOAST_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use resumer_core::Notification;

    use crate::app::App;
    use crate::view::testing::render_text;

    #[test]
    fn newest_notification_is_drawn() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, std::time::Duration::from_secs(5));
        app.toasts.push(Notification::invalid_file_type(), tokio::time::Instant::now());
        let text = render_text(&app, 120, 30);
        assert!(text.contains("Invalid file type"));
        assert!(text.contains("Please upload a PDF or Word document"));
    }
}
