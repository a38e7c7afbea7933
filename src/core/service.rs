use crate::core::registry::Registration;
use crate::core::slot::{ImplementationSlot, ImplementationUpdate};
use crate::domain::model::{ModalOptionsPatch, Opaque};
use std::sync::{PoisonError, RwLock};

const NAME: &str = "uiModalService";

/// Stable entry point for showing and hiding modals.
///
/// Until a host calls [`set_service_implementation`](Self::set_service_implementation),
/// `show` and `hide` only log a warning. Calls made in that window are lost.
#[derive(Debug, Default)]
pub struct UiModalService {
    slot: ImplementationSlot,
    defaults: RwLock<ModalOptionsPatch>,
}

impl UiModalService {
    pub const REGISTRATION: Registration<UiModalService> = Registration {
        name: NAME,
        alt_name: "UIModalService",
        create: UiModalService::new,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ModalOptionsPatch) -> Self {
        Self {
            slot: ImplementationSlot::new(),
            defaults: RwLock::new(defaults),
        }
    }

    pub fn name(&self) -> &'static str {
        NAME
    }

    /// Replaces the configured defaults that sit between caller values and
    /// the built-in defaults.
    pub fn set_defaults(&self, defaults: ModalOptionsPatch) {
        *self.defaults.write().unwrap_or_else(PoisonError::into_inner) = defaults;
    }

    /// Shows a modal. Missing fields are filled in before the installed
    /// `show` runs; its return value is handed back unchanged.
    pub fn show(&self, options: ModalOptionsPatch) -> Option<Opaque> {
        let defaults = self
            .defaults
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let options = defaults.merge(options).resolve();

        tracing::debug!(
            title = options.title.as_deref().unwrap_or(""),
            has_content = options.content.is_some(),
            "Forwarding show()"
        );
        let show = self.slot.show_fn();
        show(options)
    }

    /// Hides/dismisses the modal, if one is shown.
    pub fn hide(&self) {
        tracing::debug!("Forwarding hide()");
        let hide = self.slot.hide_fn();
        hide();
    }

    pub fn get_custom_component(&self) -> Option<Opaque> {
        self.slot.custom_component()
    }

    pub fn set_service_implementation(&self, implementation: ImplementationUpdate) {
        self.slot.set(implementation);
    }
}
