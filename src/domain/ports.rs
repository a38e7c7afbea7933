use crate::domain::model::{ModalOptions, Opaque};

/// A rendering host able to present modals.
///
/// Hosts that only need closures can skip this trait and build an
/// `ImplementationUpdate` directly.
pub trait ModalHost: Send + Sync {
    /// Presents a modal. The return value is passed back to the caller of
    /// `UiModalService::show` untouched.
    fn show(&self, options: ModalOptions) -> Option<Opaque>;

    fn hide(&self);

    fn custom_component(&self) -> Option<Opaque> {
        None
    }
}
