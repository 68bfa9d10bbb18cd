//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It owns
//! the shared data (catalog, config, router, selection) and passes it down.

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::key_hint;
use crate::components::{
    self, calculate_main_layout, draw_dashboard_page, draw_help_dialog, draw_product_detail,
    draw_report_written, draw_reports_page, draw_settings_page, draw_trends_page,
    draw_violations_page, render_navbar, render_sidebar, DashboardComponent, FilterDialog,
    HelpDialog, LoginComponent, NoticeDialog, ProductDetailDialog, QuitDialog, ReportsComponent,
    SettingsComponent, SplashComponent, TrendsComponent, ViolationsComponent,
};
use crate::config::{Config, THRESHOLD_STEP};
use crate::error::DashboardResult;
use crate::model::catalog::Catalog;
use crate::model::dashboard::DashboardState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::router::{Page, ViewRouter};
use crate::model::selection::Selection;
use crate::model::ui::AppMode;
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::PathBuf;
use std::time::Instant;

/// Startup options resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub config_path: PathBuf,
    /// Overrides the export directory from the config file
    pub export_dir: Option<PathBuf>,
    pub skip_splash: bool,
    pub skip_login: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    pub mode: AppMode,
    pub router: ViewRouter,
    pub catalog: Catalog,
    pub selection: Selection,
    pub modals: ModalStack,
    pub dashboard_state: DashboardState,
    pub config: Config,
    pub config_path: PathBuf,
    export_dir_override: Option<PathBuf>,
    skip_login: bool,

    /// Signed-in officer id
    pub officer: Option<String>,

    pub should_quit: bool,

    /// Failure shown in the status bar
    pub error: Option<String>,

    /// Success message shown in the status bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub login: LoginComponent,
    pub dashboard: DashboardComponent,
    pub violations: ViolationsComponent,
    pub reports: ReportsComponent,
    pub trends: TrendsComponent,
    pub settings: SettingsComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub detail_dialog: ProductDetailDialog,
    pub filter_dialog: FilterDialog,
    pub notice_dialog: NoticeDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(options: AppOptions) -> App {
        let config = Config::load_or_default(&options.config_path);
        let catalog = Catalog::seeded();
        tracing::info!("Catalog seeded with {} products", catalog.len());

        let mode = if options.skip_splash {
            AppMode::Login
        } else {
            AppMode::Splash
        };

        let mut app = App {
            mode,
            router: ViewRouter::new(),
            catalog,
            selection: Selection::new(),
            modals: ModalStack::new(),
            dashboard_state: DashboardState::new(),
            config,
            config_path: options.config_path,
            export_dir_override: options.export_dir,
            skip_login: options.skip_login,
            officer: None,
            should_quit: false,
            error: None,
            status_message: None,
            splash: SplashComponent::new(),
            login: LoginComponent::new(),
            dashboard: DashboardComponent,
            violations: ViolationsComponent::new(),
            reports: ReportsComponent::new(),
            trends: TrendsComponent::new(),
            settings: SettingsComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
            detail_dialog: ProductDetailDialog,
            filter_dialog: FilterDialog::new(),
            notice_dialog: NoticeDialog,
        };

        if app.mode == AppMode::Login && app.skip_login {
            let officer = app.config.profile.full_name();
            app.sign_in(officer);
        }
        app
    }

    /// Directory reports are written to; the CLI override wins over the config
    pub fn export_dir(&self) -> DashboardResult<PathBuf> {
        match &self.export_dir_override {
            Some(dir) => Ok(dir.clone()),
            None => self.config.export_dir(),
        }
    }

    fn sign_in(&mut self, officer: String) {
        tracing::info!("Officer {} signed in", officer);
        self.officer = Some(officer);
        self.mode = AppMode::Running;
        self.login.form.reset();
        self.dashboard_state.start_counters(Instant::now());
    }

    fn log_out(&mut self) {
        if let Some(officer) = self.officer.take() {
            tracing::info!("Officer {} signed out", officer);
        }
        self.mode = AppMode::Login;
        self.router.reset();
        self.modals.clear();
        self.selection.close();
        self.violations.exit_search_mode();
        self.login.form.reset();
        self.error = None;
        self.status_message = None;
    }

    fn show_error(&mut self, message: String) {
        tracing::error!("{}", message);
        self.status_message = None;
        self.error = Some(message);
    }

    fn show_status(&mut self, message: String) {
        self.error = None;
        self.status_message = Some(message);
    }

    fn navigate(&mut self, page: Page) {
        if self.router.current == page {
            return;
        }
        tracing::debug!("Navigate {} -> {}", self.router.current, page);
        self.router.navigate(page);
        self.error = None;
        self.status_message = None;
        if page == Page::Dashboard {
            self.dashboard_state.start_counters(Instant::now());
        }
    }

    fn export_violations(&mut self) {
        let dir = match self.export_dir() {
            Ok(dir) => dir,
            Err(e) => return self.show_error(format!("Export failed: {}", e)),
        };
        let visible = self.violations.visible(&self.catalog);
        match services::export_violations(&visible, &dir, Local::now()) {
            Ok(path) => {
                let count = visible.len();
                self.show_status(format!("Exported {} violations to {}", count, path.display()));
                self.modals.push(Modal::ReportWritten { path });
            }
            Err(e) => self.show_error(format!("Export failed: {}", e)),
        }
    }

    fn generate_report(&mut self, format: crate::model::reports::ReportFormat) {
        let kind = self.reports.selected_kind();
        let dir = match self.export_dir() {
            Ok(dir) => dir,
            Err(e) => return self.show_error(format!("Report generation failed: {}", e)),
        };
        let result = services::write_report(
            kind,
            format,
            &self.reports.state.config,
            &self.catalog,
            &dir,
            Local::now(),
        );
        match result {
            Ok(path) => {
                self.reports.state.reports_generated += 1;
                self.show_status(format!("{} written to {}", kind.title(), path.display()));
                self.modals.push(Modal::ReportWritten { path });
            }
            Err(e) => self.show_error(format!("Report generation failed: {}", e)),
        }
    }

    fn save_settings(&mut self) {
        match self.config.save_to(&self.config_path) {
            Ok(()) => {
                tracing::info!("Saved config to {}", self.config_path.display());
                self.show_status(format!("Settings saved to {}", self.config_path.display()));
            }
            Err(e) => self.show_error(format!("Failed to save settings: {}", e)),
        }
    }

    fn scroll_modal(&mut self, down: bool) {
        if let Some(Modal::ProductDetail { scroll_offset } | Modal::Help { scroll_offset }) =
            self.modals.top_mut()
        {
            *scroll_offset = if down {
                scroll_offset.saturating_add(1)
            } else {
                scroll_offset.saturating_sub(1)
            };
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Login => self.login.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    return self.handle_modal_key_event(&modal, key);
                }
                if self.router.current == Page::Violations && self.violations.search_mode {
                    return self.handle_search_key_event(key);
                }
                if let Some(action) = self.handle_global_key_event(key) {
                    return Ok(Some(action));
                }
                match self.router.current {
                    Page::Dashboard => self.dashboard.handle_key_event(key),
                    Page::Violations => self.violations.handle_key_event(key),
                    Page::Reports => self.reports.handle_key_event(key),
                    Page::Trends => self.trends.handle_key_event(key),
                    Page::Settings => self.settings.handle_key_event(key),
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running {
            return Ok(None);
        }
        let scrolls_modal = matches!(
            self.modals.top(),
            Some(Modal::ProductDetail { .. } | Modal::Help { .. })
        );
        let action = match mouse.kind {
            MouseEventKind::ScrollDown if scrolls_modal => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp if scrolls_modal => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown if self.modals.is_empty() => Some(Action::NextItem),
            MouseEventKind::ScrollUp if self.modals.is_empty() => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            tracing::debug!("Action: {}", action);
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::SplashComplete => {
                if self.mode == AppMode::Splash {
                    self.mode = AppMode::Login;
                    if self.skip_login {
                        let officer = self.config.profile.full_name();
                        self.sign_in(officer);
                    }
                }
            }
            Action::LoginSubmit => {
                if let Some(officer) = self.login.form.submit() {
                    self.sign_in(officer);
                }
            }
            Action::Logout => self.log_out(),

            // ─────────────────────────────────────────────────────────────────
            // Page Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NavigatePage(page) => self.navigate(page),
            Action::NextPage => {
                let mut router = self.router.clone();
                router.next();
                self.navigate(router.current);
            }
            Action::PrevPage => {
                let mut router = self.router.clone();
                router.previous();
                self.navigate(router.current);
            }
            Action::ToggleSidebar => self.router.toggle_sidebar(),

            // ─────────────────────────────────────────────────────────────────
            // List Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => match self.router.current {
                Page::Dashboard => self.dashboard_state.select_next_state(),
                Page::Violations => self.violations.next(&self.catalog),
                Page::Reports => self.reports.state.next(),
                Page::Settings => self.settings.next(&self.config),
                Page::Trends => {}
            },
            Action::PrevItem => match self.router.current {
                Page::Dashboard => self.dashboard_state.select_prev_state(),
                Page::Violations => self.violations.previous(&self.catalog),
                Page::Reports => self.reports.state.previous(),
                Page::Settings => self.settings.previous(&self.config),
                Page::Trends => {}
            },
            Action::FirstItem => self.violations.select_first(&self.catalog),
            Action::LastItem => self.violations.select_last(&self.catalog),
            Action::ScrollDown => self.scroll_modal(true),
            Action::ScrollUp => self.scroll_modal(false),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help { scroll_offset: 0 }),
            Action::OpenProductDetail => {
                if let Some(product) = self.violations.selected_product(&self.catalog) {
                    tracing::debug!("Open detail for product {}", product.id);
                    self.selection.open(product);
                    self.modals.push(Modal::ProductDetail { scroll_offset: 0 });
                }
            }
            Action::CloseModal => {
                if let Some(Modal::ProductDetail { .. }) = self.modals.pop() {
                    self.selection.close();
                }
            }
            Action::ConfirmModal => {
                if let Some(Modal::QuitConfirm) = self.modals.top() {
                    return Ok(Some(Action::ForceQuit));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Violation Filter
            // ─────────────────────────────────────────────────────────────────
            Action::OpenFilterPicker(kind) => {
                let current = self.violations.selector(kind).clone();
                self.filter_dialog.open(kind, &current);
                self.modals.push(Modal::FilterPicker { kind });
            }
            Action::SetFilter(kind, selector) => {
                self.violations.set_filter(kind, selector, &self.catalog);
                if let Some(Modal::FilterPicker { .. }) = self.modals.top() {
                    self.modals.pop();
                }
            }
            Action::ClearFilters => self.violations.clear_filters(&self.catalog),
            Action::EnterSearchMode => self.violations.enter_search_mode(),
            Action::ExitSearchMode => self.violations.exit_search_mode(),
            Action::SearchInput(c) => self.violations.search_input(c, &self.catalog),
            Action::SearchBackspace => self.violations.search_backspace(&self.catalog),
            Action::ExportViolations => self.export_violations(),

            // ─────────────────────────────────────────────────────────────────
            // Reports & Trends
            // ─────────────────────────────────────────────────────────────────
            Action::GenerateReport(format) => self.generate_report(format),
            Action::CycleReportPeriod => self.reports.state.config.cycle_period(),
            Action::CycleReportPlatform => self.reports.state.config.cycle_platform(),
            Action::CycleReportCategory => self.reports.state.config.cycle_category(),
            Action::CycleTimeframe => self.trends.cycle_timeframe(),

            // ─────────────────────────────────────────────────────────────────
            // Settings
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleSetting => {
                if let Some(item) = self.settings.selected_item(&self.config) {
                    self.config.toggle(item);
                }
            }
            Action::IncreaseThreshold => self.config.scanning.adjust_threshold(THRESHOLD_STEP),
            Action::DecreaseThreshold => self.config.scanning.adjust_threshold(-THRESHOLD_STEP),
            Action::SaveSettings => self.save_settings(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Login => self.login.draw(frame, area)?,
            AppMode::Running => {
                self.draw_main(frame, area);
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_global_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('O') => Some(Action::Logout),
            KeyCode::Char('b') => Some(Action::ToggleSidebar),
            KeyCode::Tab => Some(Action::NextPage),
            KeyCode::BackTab => Some(Action::PrevPage),
            KeyCode::Char(c) => Page::from_shortcut(c).map(Action::NavigatePage),
            _ => None,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::ProductDetail { .. } => self.detail_dialog.handle_key_event(key),
            Modal::FilterPicker { .. } => self.filter_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            Modal::ReportWritten { .. } => self.notice_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::SearchInput(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw_main(&mut self, frame: &mut Frame, area: Rect) {
        let has_status = self.error.is_some() || self.status_message.is_some();
        let layout = calculate_main_layout(area, self.router.sidebar_open, has_status);

        render_navbar(frame, layout.navbar, self.router.current, self.officer.as_deref());
        if let Some(sidebar) = layout.sidebar {
            render_sidebar(frame, sidebar, &self.router, self.catalog.len());
        }

        let content = layout.content;
        match self.router.current {
            Page::Dashboard => {
                draw_dashboard_page(frame, content, &self.dashboard_state, &self.catalog, Instant::now())
            }
            Page::Violations => draw_violations_page(frame, content, &mut self.violations, &self.catalog),
            Page::Reports => {
                draw_reports_page(frame, content, &self.reports, &self.dashboard_state.stats)
            }
            Page::Trends => draw_trends_page(frame, content, &self.trends),
            Page::Settings => draw_settings_page(frame, content, &self.settings, &self.config),
        }

        if let Some(status_area) = layout.status {
            let line = match (&self.error, &self.status_message) {
                (Some(error), _) => Line::from(Span::styled(
                    format!(" ✗ {}", error),
                    Style::default().fg(Color::Red),
                )),
                (None, Some(status)) => Line::from(Span::styled(
                    format!(" ✓ {}", status),
                    Style::default().fg(Color::Green),
                )),
                (None, None) => Line::from(""),
            };
            frame.render_widget(Paragraph::new(line), status_area);
        }

        frame.render_widget(Paragraph::new(Line::from(self.help_spans())), layout.help);
    }

    fn help_spans(&self) -> Vec<Span<'static>> {
        let mut spans = match self.router.current {
            Page::Violations => components::violations::help_spans(self.violations.search_mode),
            Page::Reports => components::reports::help_spans(),
            Page::Trends => components::trends::help_spans(),
            Page::Settings => components::settings::help_spans(),
            Page::Dashboard => key_hint("j/k", "States", Color::Cyan).to_vec(),
        };
        if !(self.router.current == Page::Violations && self.violations.search_mode) {
            spans.extend(key_hint("1-5", "Pages", Color::Cyan));
            spans.extend(key_hint("b", "Sidebar", Color::Cyan));
            spans.extend(key_hint("?", "Help", Color::Yellow));
            spans.extend(key_hint("q", "Quit", Color::Red));
        }
        spans
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::ProductDetail { .. } => {
                let product = self.selection.product(&self.catalog);
                if let (Some(product), Some(Modal::ProductDetail { scroll_offset })) =
                    (product, self.modals.top_mut())
                {
                    draw_product_detail(frame, area, product, scroll_offset);
                }
            }
            Modal::FilterPicker { .. } => self.filter_dialog.draw(frame, area)?,
            Modal::Help { .. } => {
                if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                    draw_help_dialog(frame, area, scroll_offset);
                }
            }
            Modal::ReportWritten { path } => draw_report_written(frame, area, path),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingItem;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        App::new(AppOptions {
            config_path: dir.path().join("config.json"),
            export_dir: Some(dir.path().join("reports")),
            skip_splash: true,
            skip_login: true,
        })
    }

    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(action) = app.handle_key_event(key).unwrap() {
            dispatch(app, action);
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_skip_flags_start_on_dashboard() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.router.current, Page::Dashboard);
        assert_eq!(app.officer.as_deref(), Some("Rajesh Kumar"));
    }

    #[test]
    fn test_login_flow() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(AppOptions {
            config_path: dir.path().join("config.json"),
            skip_splash: true,
            ..Default::default()
        });
        assert_eq!(app.mode, AppMode::Login);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Login);
        assert!(app.login.form.error.is_some());

        type_str(&mut app, "OFF-7");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pw");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.officer.as_deref(), Some("OFF-7"));
    }

    #[test]
    fn test_search_narrows_list() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.router.current, Page::Violations);

        press(&mut app, KeyCode::Char('/'));
        assert!(app.violations.search_mode);
        // 'q' is search text here, not quit
        type_str(&mut app, "honey");
        press(&mut app, KeyCode::Enter);

        assert!(!app.violations.search_mode);
        assert!(app.modals.is_empty());
        let visible = app.violations.visible(&app.catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_platform_picker_sets_filter() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Violations));
        press(&mut app, KeyCode::Char('p'));
        assert!(matches!(app.modals.top(), Some(Modal::FilterPicker { .. })));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        let ids: Vec<&str> = app
            .violations
            .visible(&app.catalog)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "4", "5"]);
    }

    #[test]
    fn test_detail_open_and_close_clears_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Violations));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.selection.selected_id(), Some("2"));
        assert!(matches!(app.modals.top(), Some(Modal::ProductDetail { .. })));
        assert!(render(&mut app).contains("Nature's Best"));

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert!(!app.selection.is_open());
    }

    #[test]
    fn test_logout_resets_page() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Trends));
        press(&mut app, KeyCode::Char('O'));

        assert_eq!(app.mode, AppMode::Login);
        assert_eq!(app.router.current, Page::Dashboard);
        assert!(app.officer.is_none());
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_empty_result_renders_zero_count() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Violations));
        for c in "no such product".chars() {
            dispatch(&mut app, Action::SearchInput(c));
        }
        assert!(render(&mut app).contains("0 violations found"));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Reports));
        press(&mut app, KeyCode::Char('c'));

        let Some(Modal::ReportWritten { path }) = app.modals.top().cloned() else {
            panic!("expected report notice, got {:?}", app.modals.top());
        };
        assert!(path.exists());
        assert!(path.starts_with(dir.path().join("reports")));
        assert_eq!(app.reports.state.reports_generated, 46);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_repeated_reports_keep_every_file() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Reports));
        for _ in 0..3 {
            dispatch(&mut app, Action::GenerateReport(crate::model::reports::ReportFormat::Csv));
            dispatch(&mut app, Action::CloseModal);
        }

        let files = std::fs::read_dir(dir.path().join("reports")).unwrap().count();
        assert_eq!(files, 3);
        assert_eq!(app.reports.state.reports_generated, 48);
    }

    #[test]
    fn test_search_ignores_modifier_chords() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Violations));
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "sam");
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let key = KeyEvent::new(KeyCode::Char('x'), modifiers);
            assert_eq!(app.handle_key_event(key).unwrap(), None);
        }
        let shifted = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        if let Some(action) = app.handle_key_event(shifted).unwrap() {
            dispatch(&mut app, action);
        }
        assert!(app.violations.search_mode);
        assert_eq!(app.violations.criteria.query, "samS");
    }

    #[test]
    fn test_export_failure_goes_to_status_bar() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let mut app = App::new(AppOptions {
            config_path: dir.path().join("config.json"),
            export_dir: Some(blocker),
            skip_splash: true,
            skip_login: true,
        });
        dispatch(&mut app, Action::ExportViolations);
        assert!(app.error.as_deref().unwrap_or("").starts_with("Export failed"));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_settings_toggle_and_save() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        dispatch(&mut app, Action::NavigatePage(Page::Settings));
        assert_eq!(
            app.settings.selected_item(&app.config),
            Some(SettingItem::EmailAlerts)
        );
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.config.notifications.email);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.config.scanning.confidence_threshold, 85);

        press(&mut app, KeyCode::Char('s'));
        assert!(app.status_message.is_some());
        let saved = Config::load_from(&app.config_path).unwrap();
        assert!(!saved.notifications.email);
        assert_eq!(saved.scanning.confidence_threshold, 85);
    }

    #[test]
    fn test_splash_then_login() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(AppOptions {
            config_path: dir.path().join("config.json"),
            ..Default::default()
        });
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, AppMode::Login);
    }
}
