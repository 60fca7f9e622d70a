use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use ratatui::Frame;

use crate::model::picker::FilePickerState;
use crate::theme::Theme;
use crate::view::truncate;

/// Render the file picker over `area`.
pub fn render(f: &mut Frame, area: Rect, picker: &FilePickerState, theme: &Theme) {
    let width = (area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| {
            let (icon, style) = if entry.is_dir {
                ("▸ ", Style::default().fg(theme.active).add_modifier(Modifier::BOLD))
            } else if entry.is_document {
                ("  ", Style::default().fg(theme.document))
            } else {
                ("  ", Style::default().fg(theme.dim))
            };
            let name = if entry.is_dir && entry.name != ".." {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(truncate(&name, width), style),
            ]))
        })
        .collect();

    let title = format!(
        " {} ",
        truncate(&picker.dir().display().to_string(), width.saturating_sub(2))
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(title),
        )
        .highlight_style(theme.highlight_style());

    let mut state = ListState::default();
    state.select(Some(picker.cursor));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
