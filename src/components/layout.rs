//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the open sidebar, in columns
pub const SIDEBAR_WIDTH: u16 = 26;

/// Main screen layout areas
pub struct MainLayout {
    pub navbar: Rect,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Popup sized as a percentage of `area`
pub fn centered_popup_percent(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width.saturating_mul(percent_x.min(100)) / 100;
    let height = area.height.saturating_mul(percent_y.min(100)) / 100;
    centered_popup(area, width, height)
}

/// Navbar on top, optional sidebar on the left, status and help bars at the bottom
pub fn calculate_main_layout(area: Rect, sidebar_open: bool, has_status: bool) -> MainLayout {
    let rows = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
    };

    let (sidebar, content) = if sidebar_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);
        (Some(columns[0]), columns[1])
    } else {
        (None, rows[1])
    };

    let (status, help) = if has_status {
        (Some(rows[2]), rows[3])
    } else {
        (None, rows[2])
    };

    MainLayout {
        navbar: rows[0],
        sidebar,
        content,
        status,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 50, 20);
        assert_eq!(popup, area);

        let popup = centered_popup(Rect::new(10, 5, 40, 20), 20, 10);
        assert_eq!(popup, Rect::new(20, 10, 20, 10));
    }

    #[test]
    fn test_layout_without_sidebar_uses_full_width() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_main_layout(area, false, false);
        assert!(layout.sidebar.is_none());
        assert!(layout.status.is_none());
        assert_eq!(layout.content.width, 120);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_layout_with_sidebar_and_status() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_main_layout(area, true, true);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(SIDEBAR_WIDTH));
        assert_eq!(layout.content.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.status.map(|r| r.y), Some(38));
    }
}
