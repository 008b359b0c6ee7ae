use crate::ui::lifecycle::RenderPhase;
use crate::ui::nav::Route;
use crate::ui::theme::{BORDER, IN_FLIGHT, MUTED, SEPARATOR, SETTLED, TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
    phase: RenderPhase,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, phase: RenderPhase) -> Self {
        Self { route, phase }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let (phase_label, phase_color) = match self.phase {
            RenderPhase::Initial => ("initial render", IN_FLIGHT),
            RenderPhase::Steady => ("steady", SETTLED),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("recordview", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.path(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(phase_color)),
            Span::styled(phase_label, Style::default().fg(MUTED)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
