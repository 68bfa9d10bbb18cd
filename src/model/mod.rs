//! Model layer - data and state, free of rendering concerns
//!
//! - `Catalog` / `Product` - the static violation records
//! - `FilterCriteria` - the violation-list filter
//! - `Selection` - the product shown in the detail overlay
//! - `ViewRouter` - active page and sidebar state
//! - `ModalStack` - overlay management
//! - `AppMode` / `LoginForm` - session state
//! - static analytics for the dashboard, trends and reports pages

pub mod catalog;
pub mod counter;
pub mod dashboard;
pub mod filter;
pub mod modal;
pub mod product;
pub mod reports;
pub mod router;
pub mod selection;
pub mod trends;
pub mod ui;

pub use catalog::Catalog;
pub use filter::{FilterCriteria, Selector};
pub use product::{ConfidenceLevel, Product};
pub use router::{Page, ViewRouter};
pub use selection::Selection;
pub use ui::{AppMode, LoginForm};
