use crate::core::{ModalHandle, ModalHost, ModalOptions, Opaque};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Text host that draws modals as framed blocks on a writer.
///
/// `show` returns a [`ModalHandle`]; `hide` dismisses the most recent modal.
pub struct ConsoleHost<W: Write + Send> {
    out: Mutex<W>,
    open: Mutex<Vec<ModalHandle>>,
    next_id: AtomicU64,
}

impl ConsoleHost<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            open: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn writer(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn open_modals(&self) -> Vec<ModalHandle> {
        self.open.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn render(&self, handle: ModalHandle, options: &ModalOptions) -> io::Result<()> {
        let mut out = self.writer();
        let title = options.title.as_deref().unwrap_or("");
        let rule = "─".repeat(title.chars().count().max(24) + 2);

        writeln!(out, "┌{}┐  #{}", rule, handle.0)?;
        if !title.is_empty() {
            writeln!(out, "  {}", title)?;
        }
        writeln!(out, "  {}", describe_content(options.content.as_ref()))?;
        if let Some(props) = &options.content_props {
            writeln!(out, "  props: {}", serde_json::to_string(props)?)?;
        }
        let mut flags = Vec::new();
        if options.close_button {
            flags.push("[x]");
        }
        if options.movable {
            flags.push("movable");
        }
        if options.should_close_on_esc {
            flags.push("esc");
        }
        if let Some(class_name) = &options.custom_class_name {
            flags.push(class_name.as_str());
        }
        writeln!(out, "  {}", flags.join(" "))?;
        writeln!(out, "└{}┘", rule)?;
        out.flush()
    }
}

fn describe_content(content: Option<&Opaque>) -> String {
    match content {
        None => "(no content)".to_string(),
        Some(c) => c
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| c.downcast_ref::<&'static str>().map(|s| s.to_string()))
            .unwrap_or_else(|| "<component>".to_string()),
    }
}

impl<W: Write + Send> ModalHost for ConsoleHost<W> {
    fn show(&self, options: ModalOptions) -> Option<Opaque> {
        if !options.is_open {
            tracing::debug!("Modal requested closed; nothing rendered");
            return None;
        }

        let handle = ModalHandle(self.next_id.fetch_add(1, Ordering::SeqCst));
        if let Err(e) = self.render(handle, &options) {
            tracing::error!("Failed to render modal #{}: {}", handle.0, e);
            return None;
        }
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
        Some(Opaque::new(handle))
    }

    fn hide(&self) {
        let dismissed = self
            .open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        match dismissed {
            Some(handle) => {
                let mut out = self.writer();
                if let Err(e) = writeln!(out, "[modal #{} dismissed]", handle.0) {
                    tracing::error!("Failed to write dismissal: {}", e);
                }
            }
            None => tracing::debug!("hide() with no open modal"),
        }
    }
}
