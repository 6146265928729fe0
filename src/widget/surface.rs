//! Handles to the page elements the widget reads and mutates.
//!
//! The widget never touches a page directly. The host supplies
//! implementations of these traits at construction time, so the same
//! component runs against the real panel or against synthetic handles
//! in tests.

/// Visibility state of the modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

/// Where a pointer activation landed, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The modal's outer container region itself.
    Backdrop,
    /// Anything inside the dialog's content area.
    Content,
}

/// The modal container element.
pub trait ModalSurface: Send + Sync {
    fn set_visibility(&self, visibility: Visibility);
    fn visibility(&self) -> Visibility;
}

/// The free-text task input element.
pub trait TaskInput: Send + Sync {
    /// Current text value, exactly as typed.
    fn value(&self) -> String;

    /// Reset the value to the empty string.
    fn clear(&self);
}
