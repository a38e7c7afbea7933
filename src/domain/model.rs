use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Size descriptor handed through to the host untouched.
pub type Dimensions = serde_json::Value;

/// Parameters forwarded to a modal's content.
pub type ContentProps = HashMap<String, serde_json::Value>;

/// Identity-only reference to something a host knows how to render.
///
/// The facade never looks inside; two `Opaque`s are equal only when they point
/// at the same allocation. Hosts recover the concrete value with
/// [`Opaque::downcast_ref`].
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

impl Opaque {
    /// Wraps `value`. An `Opaque` passed in is returned as-is, keeping its
    /// identity, rather than being wrapped a second time.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        match (&value as &dyn Any).downcast_ref::<Opaque>() {
            Some(existing) => existing.clone(),
            None => Self(Arc::new(value)),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:p})", Arc::as_ptr(&self.0))
    }
}

/// Fully populated options, as delivered to a host's `show`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalOptions {
    pub content: Option<Opaque>,
    pub content_props: Option<ContentProps>,
    pub should_close_on_esc: bool,
    pub is_open: bool,
    pub close_button: bool,
    pub title: Option<String>,
    pub custom_class_name: Option<String>,
    pub movable: bool,
    pub container_dimensions: Option<Dimensions>,
    pub content_dimensions: Option<Dimensions>,
    pub should_close_on_overlay_click: bool,
    pub should_close_immediately: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            content: None,
            content_props: None,
            should_close_on_esc: true,
            is_open: true,
            close_button: true,
            title: None,
            custom_class_name: None,
            movable: false,
            container_dimensions: None,
            content_dimensions: None,
            should_close_on_overlay_click: true,
            should_close_immediately: false,
        }
    }
}

/// Caller-supplied options; `None` means "not supplied".
///
/// `Some(false)` and `Some(String::new())` are real overrides. Content cannot
/// come from configuration files, so it is skipped by serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalOptionsPatch {
    #[serde(skip)]
    pub content: Option<Opaque>,
    pub content_props: Option<ContentProps>,
    pub should_close_on_esc: Option<bool>,
    pub is_open: Option<bool>,
    pub close_button: Option<bool>,
    pub title: Option<String>,
    pub custom_class_name: Option<String>,
    pub movable: Option<bool>,
    pub container_dimensions: Option<Dimensions>,
    pub content_dimensions: Option<Dimensions>,
    pub should_close_on_overlay_click: Option<bool>,
    pub should_close_immediately: Option<bool>,
}

impl ModalOptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content<T: Any + Send + Sync>(mut self, content: T) -> Self {
        self.content = Some(Opaque::new(content));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Layers `over` on top of `self`: every field present in `over` wins.
    pub fn merge(self, over: ModalOptionsPatch) -> ModalOptionsPatch {
        ModalOptionsPatch {
            content: over.content.or(self.content),
            content_props: over.content_props.or(self.content_props),
            should_close_on_esc: over.should_close_on_esc.or(self.should_close_on_esc),
            is_open: over.is_open.or(self.is_open),
            close_button: over.close_button.or(self.close_button),
            title: over.title.or(self.title),
            custom_class_name: over.custom_class_name.or(self.custom_class_name),
            movable: over.movable.or(self.movable),
            container_dimensions: over.container_dimensions.or(self.container_dimensions),
            content_dimensions: over.content_dimensions.or(self.content_dimensions),
            should_close_on_overlay_click: over
                .should_close_on_overlay_click
                .or(self.should_close_on_overlay_click),
            should_close_immediately: over
                .should_close_immediately
                .or(self.should_close_immediately),
        }
    }

    /// Fills every missing field from [`ModalOptions::default`].
    pub fn resolve(self) -> ModalOptions {
        let d = ModalOptions::default();
        ModalOptions {
            content: self.content.or(d.content),
            content_props: self.content_props.or(d.content_props),
            should_close_on_esc: self.should_close_on_esc.unwrap_or(d.should_close_on_esc),
            is_open: self.is_open.unwrap_or(d.is_open),
            close_button: self.close_button.unwrap_or(d.close_button),
            title: self.title.or(d.title),
            custom_class_name: self.custom_class_name.or(d.custom_class_name),
            movable: self.movable.unwrap_or(d.movable),
            container_dimensions: self.container_dimensions.or(d.container_dimensions),
            content_dimensions: self.content_dimensions.or(d.content_dimensions),
            should_close_on_overlay_click: self
                .should_close_on_overlay_click
                .unwrap_or(d.should_close_on_overlay_click),
            should_close_immediately: self
                .should_close_immediately
                .unwrap_or(d.should_close_immediately),
        }
    }
}

/// Handle returned by hosts that track individual modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalHandle(pub u64);
