use crate::cache::CacheStatsSnapshot;
use crate::ui::theme::{BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = " ↑/↓: Hover │ Enter: Open │ Ctrl+Enter: Native │ a: All │ r: Retry │ q: Quit";

pub struct Footer {
    stats: CacheStatsSnapshot,
    in_flight: usize,
}

impl Footer {
    pub fn new(stats: CacheStatsSnapshot, in_flight: usize) -> Self {
        Self { stats, in_flight }
    }

    fn status_text(&self) -> String {
        format!(
            "in flight {} │ fetch {} hit {} join {} cancel {} drop {} ",
            self.in_flight,
            self.stats.fetches,
            self.stats.hits,
            self.stats.joins,
            self.stats.cancelled,
            self.stats.discarded
        )
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let stats = self.status_text();

        // Char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let stats_width = stats.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(stats_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(stats, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
