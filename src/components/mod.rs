//! UI Components
//!
//! Pages, overlays and shared chrome. Pages keep presentation state only;
//! the data they render is passed in by `App`.

pub mod dashboard;
pub mod filter_dialog;
pub mod help_dialog;
pub mod layout;
pub mod login;
pub mod navbar;
pub mod notice_dialog;
pub mod product_detail;
pub mod quit_dialog;
pub mod reports;
pub mod settings;
pub mod sidebar;
pub mod splash;
pub mod text;
pub mod theme;
pub mod trends;
pub mod violations;

pub use dashboard::{draw_dashboard_page, DashboardComponent};
pub use filter_dialog::FilterDialog;
pub use help_dialog::{draw_help_dialog, HelpDialog};
pub use layout::{calculate_main_layout, centered_popup, MainLayout};
pub use login::LoginComponent;
pub use navbar::render_navbar;
pub use notice_dialog::{draw_report_written, NoticeDialog};
pub use product_detail::{draw_product_detail, ProductDetailDialog};
pub use quit_dialog::QuitDialog;
pub use reports::{draw_reports_page, ReportsComponent};
pub use settings::{draw_settings_page, SettingsComponent};
pub use sidebar::render_sidebar;
pub use splash::SplashComponent;
pub use trends::{draw_trends_page, TrendsComponent};
pub use violations::{draw_violations_page, ViolationsComponent};
