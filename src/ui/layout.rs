use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header, tab bar and footer strips.
const STRIP_HEIGHT: u16 = 3;

/// Height of the page heading line under the header.
const HEADING_HEIGHT: u16 = 1;

/// Narrowest card the grid will lay out before dropping a column.
pub const MIN_CARD_WIDTH: u16 = 36;

/// Rows taken by one product card, borders included.
pub const CARD_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub heading: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(STRIP_HEIGHT);
    let heading_height = HEADING_HEIGHT.min(area.height.saturating_sub(header_height));
    let top = header_height + heading_height;
    let tabs_height = STRIP_HEIGHT.min(area.height.saturating_sub(top));
    let footer_height = STRIP_HEIGHT.min(area.height.saturating_sub(top + tabs_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let heading = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: heading_height,
    };
    let tabs = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: tabs_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + top + tabs_height,
        width: area.width,
        height: area.height.saturating_sub(top + tabs_height + footer_height),
    };
    Regions {
        header,
        heading,
        tabs,
        body,
        footer,
    }
}

/// Number of card columns that fit in `width`, between 1 and `max_columns`.
pub fn grid_columns(width: u16, max_columns: u16) -> usize {
    (width / MIN_CARD_WIDTH).clamp(1, max_columns.max(1)) as usize
}

/// Number of whole card rows that fit in `height`, at least one.
pub fn visible_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// First grid row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    (selected_row + 1).saturating_sub(visible_rows)
}

/// Split a grid row into `columns` equal cells.
pub fn row_cells(row: Rect, columns: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
        .split(row)
        .to_vec()
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
