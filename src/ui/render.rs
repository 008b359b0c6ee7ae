use crate::ui::app::App;
use crate::ui::boundary::Page;
use crate::ui::detail::{error_lines, DetailWidget};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_split, centered_rect, layout_regions};
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::{ACCENT, BORDER, MUTED};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn spinner_frame(ticks: u64) -> &'static str {
    SPINNER[(ticks % SPINNER.len() as u64) as usize]
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let spinner = spinner_frame(app.ticks());

    frame.render_widget(Header::new(app.route(), app.phase()).widget(), header);
    frame.render_widget(Clear, body);

    match app.page() {
        Page::Fallback => {
            // Page-wide fallback: nothing but the spinner.
            let line = Line::from(Span::styled(
                format!("{} Loading...", spinner),
                Style::default().fg(MUTED),
            ));
            let widget = Paragraph::new(line).alignment(Alignment::Center);
            frame.render_widget(widget, centered_rect(40, 20, body));
        }
        Page::Failed(err) => {
            let block = Block::default()
                .title(Span::styled(" Something went wrong ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER));
            let widget = Paragraph::new(error_lines(&err))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(widget, centered_rect(60, 40, body));
        }
        Page::Ready { sidebar, detail } => {
            let (sidebar_area, detail_area) = body_split(body);
            frame.render_widget(Sidebar::new(&sidebar, spinner).widget(), sidebar_area);
            frame.render_widget(DetailWidget::new(&detail, spinner).widget(), detail_area);
        }
    }

    frame.render_widget(Footer::new(app.cache_stats(), app.in_flight()).widget(footer), footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_frame(0), SPINNER[0]);
        assert_eq!(spinner_frame(SPINNER.len() as u64), SPINNER[0]);
        assert_eq!(spinner_frame(3), SPINNER[3]);
    }
}
