use crate::domain::model::{ModalOptions, Opaque};
use crate::domain::ports::ModalHost;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

pub type ShowFn = Arc<dyn Fn(ModalOptions) -> Option<Opaque> + Send + Sync>;
pub type HideFn = Arc<dyn Fn() + Send + Sync>;

fn show_not_implemented(_options: ModalOptions) -> Option<Opaque> {
    tracing::warn!("show() NOT IMPLEMENTED");
    None
}

fn hide_not_implemented() {
    tracing::warn!("hide() NOT IMPLEMENTED");
}

/// The callbacks currently installed in a slot.
#[derive(Clone)]
pub struct ServiceImplementation {
    pub show: ShowFn,
    pub hide: HideFn,
    pub custom_component: Option<Opaque>,
}

impl Default for ServiceImplementation {
    fn default() -> Self {
        Self {
            show: Arc::new(show_not_implemented),
            hide: Arc::new(hide_not_implemented),
            custom_component: None,
        }
    }
}

impl fmt::Debug for ServiceImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceImplementation")
            .field("show", &"<fn>")
            .field("hide", &"<fn>")
            .field("custom_component", &self.custom_component)
            .finish()
    }
}

/// Partial replacement for a [`ServiceImplementation`]. Only `Some` fields
/// overwrite what is installed.
#[derive(Clone, Default)]
pub struct ImplementationUpdate {
    pub show: Option<ShowFn>,
    pub hide: Option<HideFn>,
    pub custom_component: Option<Opaque>,
}

impl ImplementationUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show<F>(mut self, show: F) -> Self
    where
        F: Fn(ModalOptions) -> Option<Opaque> + Send + Sync + 'static,
    {
        self.show = Some(Arc::new(show));
        self
    }

    pub fn hide<F>(mut self, hide: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.hide = Some(Arc::new(hide));
        self
    }

    pub fn custom_component(mut self, component: Opaque) -> Self {
        self.custom_component = Some(component);
        self
    }

    /// Routes `show` and `hide` to `host`; the custom component is taken from
    /// the host once, at conversion time.
    pub fn from_host<H: ModalHost + 'static>(host: Arc<H>) -> Self {
        let show_host = Arc::clone(&host);
        let hide_host = Arc::clone(&host);
        Self {
            show: Some(Arc::new(move |options: ModalOptions| show_host.show(options))),
            hide: Some(Arc::new(move || hide_host.hide())),
            custom_component: host.custom_component(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.show.is_none() && self.hide.is_none() && self.custom_component.is_none()
    }

    fn describe(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.show.is_some() {
            fields.push("show");
        }
        if self.hide.is_some() {
            fields.push("hide");
        }
        if self.custom_component.is_some() {
            fields.push("custom_component");
        }
        fields
    }
}

impl fmt::Debug for ImplementationUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationUpdate")
            .field("fields", &self.describe())
            .finish()
    }
}

/// Owned, swappable holder of the active implementation.
///
/// Callbacks are cloned out before they run, so no lock is held while host
/// code executes and a callback may install a new implementation.
#[derive(Debug, Default)]
pub struct ImplementationSlot {
    current: RwLock<ServiceImplementation>,
}

impl ImplementationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, update: ImplementationUpdate) {
        if update.is_empty() {
            tracing::debug!("Empty implementation update ignored");
            return;
        }
        tracing::info!("Installing modal implementation: {:?}", update.describe());

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(hide) = update.hide {
            current.hide = hide;
        }
        if let Some(show) = update.show {
            current.show = show;
        }
        if let Some(component) = update.custom_component {
            current.custom_component = Some(component);
        }
    }

    pub fn show_fn(&self) -> ShowFn {
        Arc::clone(&self.read().show)
    }

    pub fn hide_fn(&self) -> HideFn {
        Arc::clone(&self.read().hide)
    }

    pub fn custom_component(&self) -> Option<Opaque> {
        self.read().custom_component.clone()
    }

    pub fn snapshot(&self) -> ServiceImplementation {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ServiceImplementation> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}
