//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; `App::update`
//! applies them and may return a follow-up action.

use crate::model::filter::Selector;
use crate::model::modal::FilterKind;
use crate::model::reports::ReportFormat;
use crate::model::router::Page;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Leave the splash screen
    SplashComplete,
    /// Validate the login form
    LoginSubmit,
    /// Return to the login screen
    Logout,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NavigatePage(Page),
    NextPage,
    PrevPage,
    ToggleSidebar,

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation (routed to the active page)
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling (active modal)
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Show the detail overlay for the highlighted violation
    OpenProductDetail,
    CloseModal,
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Violation Filter
    // ─────────────────────────────────────────────────────────────────────────
    OpenFilterPicker(FilterKind),
    SetFilter(FilterKind, Selector),
    ClearFilters,
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    /// Write the filtered violations to CSV
    ExportViolations,

    // ─────────────────────────────────────────────────────────────────────────
    // Reports & Trends
    // ─────────────────────────────────────────────────────────────────────────
    GenerateReport(ReportFormat),
    CycleReportPeriod,
    CycleReportPlatform,
    CycleReportCategory,
    CycleTimeframe,

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────
    ToggleSetting,
    IncreaseThreshold,
    DecreaseThreshold,
    SaveSettings,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::LoginSubmit => write!(f, "LoginSubmit"),
            Action::Logout => write!(f, "Logout"),
            Action::NavigatePage(page) => write!(f, "NavigatePage({})", page),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::ToggleSidebar => write!(f, "ToggleSidebar"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenProductDetail => write!(f, "OpenProductDetail"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::OpenFilterPicker(kind) => write!(f, "OpenFilterPicker({:?})", kind),
            Action::SetFilter(kind, selector) => write!(f, "SetFilter({:?}, {})", kind, selector),
            Action::ClearFilters => write!(f, "ClearFilters"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ExportViolations => write!(f, "ExportViolations"),
            Action::GenerateReport(format) => write!(f, "GenerateReport({})", format),
            Action::CycleReportPeriod => write!(f, "CycleReportPeriod"),
            Action::CycleReportPlatform => write!(f, "CycleReportPlatform"),
            Action::CycleReportCategory => write!(f, "CycleReportCategory"),
            Action::CycleTimeframe => write!(f, "CycleTimeframe"),
            Action::ToggleSetting => write!(f, "ToggleSetting"),
            Action::IncreaseThreshold => write!(f, "IncreaseThreshold"),
            Action::DecreaseThreshold => write!(f, "DecreaseThreshold"),
            Action::SaveSettings => write!(f, "SaveSettings"),
        }
    }
}
