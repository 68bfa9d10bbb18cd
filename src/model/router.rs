//! View router - active page and sidebar visibility

use std::fmt;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Violations,
    Reports,
    Trends,
    Settings,
}

impl Page {
    pub fn all() -> [Page; 5] {
        [
            Page::Dashboard,
            Page::Violations,
            Page::Reports,
            Page::Trends,
            Page::Settings,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Violations => "Violations",
            Page::Reports => "Reports",
            Page::Trends => "Trends",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Violations => "⚠",
            Page::Reports => "▤",
            Page::Trends => "↗",
            Page::Settings => "⚙",
        }
    }

    /// Page for a 1-based sidebar shortcut
    pub fn from_shortcut(c: char) -> Option<Page> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Page::all().get(index).copied()
    }

    fn index(&self) -> usize {
        Page::all().iter().position(|p| p == self).unwrap_or(0)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Holds the active page and whether the sidebar is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    pub current: Page,
    pub sidebar_open: bool,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            current: Page::Dashboard,
            sidebar_open: true,
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.current = page;
    }

    pub fn next(&mut self) {
        let pages = Page::all();
        self.current = pages[(self.current.index() + 1) % pages.len()];
    }

    pub fn previous(&mut self) {
        let pages = Page::all();
        let index = self.current.index();
        self.current = if index == 0 {
            pages[pages.len() - 1]
        } else {
            pages[index - 1]
        };
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Return to the dashboard, as after a logout
    pub fn reset(&mut self) {
        self.current = Page::Dashboard;
    }
}
