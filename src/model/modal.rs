//! Modal stack for overlays
//!
//! Overlays are pushed on top of the active page. Only the top modal
//! receives input; closing pops it.

use std::path::PathBuf;

/// Which filter criterion a picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Platform,
    ViolationType,
}

impl FilterKind {
    pub fn title(&self) -> &'static str {
        match self {
            FilterKind::Platform => "Platform",
            FilterKind::ViolationType => "Violation Type",
        }
    }

    pub fn all_label(&self) -> &'static str {
        match self {
            FilterKind::Platform => "All Platforms",
            FilterKind::ViolationType => "All Violations",
        }
    }
}

/// An overlay displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    QuitConfirm,
    /// Detail view of the selected product
    ProductDetail { scroll_offset: usize },
    /// Picker for the platform or violation-type criterion
    FilterPicker { kind: FilterKind },
    Help { scroll_offset: usize },
    /// Confirmation after a report or export is written
    ReportWritten { path: PathBuf },
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::ProductDetail { scroll_offset: 0 });
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::ProductDetail { scroll_offset: 0 }));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::ProductDetail { scroll_offset: 0 });

        if let Some(Modal::ProductDetail { scroll_offset }) = stack.top_mut() {
            *scroll_offset = 3;
        }

        assert_eq!(stack.top(), Some(&Modal::ProductDetail { scroll_offset: 3 }));
    }

    #[test]
    fn test_clear() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help { scroll_offset: 0 });
        stack.push(Modal::FilterPicker {
            kind: FilterKind::Platform,
        });
        stack.clear();
        assert!(stack.is_empty());
    }
}
