use crate::cache::CacheError;
use crate::ui::app::DetailView;
use crate::ui::boundary::DetailPane;
use crate::ui::theme::{ACCENT, BORDER, FAILED, MUTED, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Detail pane as decided by its loading boundary.
pub struct DetailWidget<'a> {
    pane: &'a DetailPane<DetailView>,
    spinner: &'static str,
}

impl<'a> DetailWidget<'a> {
    pub fn new(pane: &'a DetailPane<DetailView>, spinner: &'static str) -> Self {
        Self { pane, spinner }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let (title, lines) = match self.pane {
            DetailPane::Content(view) => content(view),
            DetailPane::Fallback => (
                " Loading ".to_string(),
                vec![Line::from(Span::styled(
                    format!("{} Loading record...", self.spinner),
                    Style::default().fg(MUTED),
                ))],
            ),
            DetailPane::Failed(err) => (" Error ".to_string(), error_lines(err)),
        };

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}

fn content(view: &DetailView) -> (String, Vec<Line<'static>>) {
    match view {
        DetailView::Placeholder => (
            " All records ".to_string(),
            vec![Line::from(Span::styled(
                "Select a record from the list.",
                Style::default().fg(MUTED),
            ))],
        ),
        DetailView::NotFound(id) => (
            format!(" {} ", id),
            vec![Line::from(Span::styled(
                "Record not found",
                Style::default().fg(MUTED),
            ))],
        ),
        DetailView::Record(detail) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    detail.title.clone(),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for paragraph in detail.paragraphs() {
                lines.push(Line::from(paragraph.to_string()));
                lines.push(Line::from(""));
            }
            (format!(" Record {} ", detail.id), lines)
        }
    }
}

/// Error indicator lines, shared with the page-wide error.
pub fn error_lines(err: &CacheError) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            err.user_message(),
            Style::default().fg(FAILED).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(err.to_string(), Style::default().fg(MUTED))),
        Line::from(Span::styled("Press r to retry.", Style::default().fg(MUTED))),
    ]
}
