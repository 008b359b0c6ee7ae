use crate::ui::app::{SidebarEntry, SidebarView};
use crate::ui::theme::{ACCENT, BORDER, HIGHLIGHT_BG, IN_FLIGHT, MUTED, SETTLED, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Sidebar<'a> {
    view: &'a SidebarView,
    spinner: &'static str,
}

impl<'a> Sidebar<'a> {
    pub fn new(view: &'a SidebarView, spinner: &'static str) -> Self {
        Self { view, spinner }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = self.view.entries.iter().map(|e| self.line(e)).collect();

        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(" Records ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
    }

    fn line(&self, entry: &SidebarEntry) -> Line<'static> {
        // Local pending indicator for a press waiting on its data.
        let marker = if entry.pressing {
            Span::styled(format!("{} ", self.spinner), Style::default().fg(IN_FLIGHT))
        } else if entry.fetching {
            Span::styled("◌ ", Style::default().fg(MUTED))
        } else if entry.cached {
            Span::styled("● ", Style::default().fg(SETTLED))
        } else {
            Span::raw("  ")
        };

        let mut title_style = Style::default().fg(TEXT);
        if entry.active {
            title_style = title_style.fg(ACCENT).add_modifier(Modifier::BOLD);
        }

        let mut line = Line::from(vec![
            marker,
            Span::styled(entry.summary.title.clone(), title_style),
        ]);
        if entry.highlighted {
            line = line.style(Style::default().bg(HIGHLIGHT_BG));
        }
        line
    }
}
