use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar column, borders included.
pub const SIDEBAR_WIDTH: u16 = 34;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into sidebar and detail pane.
pub fn body_split(body: Rect) -> (Rect, Rect) {
    let sidebar_width = SIDEBAR_WIDTH.min(body.width / 2);
    let sidebar = Rect {
        width: sidebar_width,
        ..body
    };
    let detail = Rect {
        x: body.x + sidebar_width,
        width: body.width.saturating_sub(sidebar_width),
        ..body
    };
    (sidebar, detail)
}

/// Sidebar entry drawn at `(col, row)`. Entries are one line each inside a
/// bordered block.
pub fn sidebar_entry_at(sidebar: Rect, col: u16, row: u16, count: usize) -> Option<usize> {
    let inner_x = sidebar.x.saturating_add(1);
    let inner_y = sidebar.y.saturating_add(1);
    let inner_right = sidebar.x + sidebar.width.saturating_sub(1);
    let inner_bottom = sidebar.y + sidebar.height.saturating_sub(1);

    if col < inner_x || col >= inner_right || row < inner_y || row >= inner_bottom {
        return None;
    }
    let index = (row - inner_y) as usize;
    (index < count).then_some(index)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 100, 30));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 24);
    }

    #[test]
    fn split_keeps_sidebar_width() {
        let (sidebar, detail) = body_split(Rect::new(0, 3, 100, 24));
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(detail.x, SIDEBAR_WIDTH);
        assert_eq!(detail.width, 100 - SIDEBAR_WIDTH);
    }

    #[test]
    fn split_shrinks_sidebar_on_narrow_terminals() {
        let (sidebar, detail) = body_split(Rect::new(0, 0, 40, 10));
        assert_eq!(sidebar.width, 20);
        assert_eq!(detail.width, 20);
    }

    #[test]
    fn entry_hit_test() {
        let sidebar = Rect::new(0, 3, 34, 24);
        // First entry is on the row below the top border.
        assert_eq!(sidebar_entry_at(sidebar, 5, 4, 10), Some(0));
        assert_eq!(sidebar_entry_at(sidebar, 5, 13, 10), Some(9));
        assert_eq!(sidebar_entry_at(sidebar, 5, 14, 10), None);
        // Borders and outside the column.
        assert_eq!(sidebar_entry_at(sidebar, 0, 4, 10), None);
        assert_eq!(sidebar_entry_at(sidebar, 5, 3, 10), None);
        assert_eq!(sidebar_entry_at(sidebar, 40, 4, 10), None);
    }
}
