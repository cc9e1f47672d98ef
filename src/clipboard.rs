// ── Clipboard access ──────────────────────────────────────────────────────────
//
// `SystemClipboard` talks to the OS clipboard through arboard.  Headless
// sessions (no X11/Wayland display, CI) fall back to `MemoryClipboard`,
// which keeps the last copied text for the lifetime of the process.

use crate::error::Result;

/// Destination for the copy action.
pub(crate) trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
pub(crate) struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// In-process clipboard buffer.
#[derive(Debug, Default)]
pub(crate) struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[cfg(test)]
    pub(crate) fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Open the system clipboard, or fall back to an in-memory buffer.
pub(crate) fn open() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(cb) => Box::new(cb),
        Err(e) => {
            tracing::info!(error = %e, "system clipboard unavailable; copies stay in-process");
            Box::new(MemoryClipboard::default())
        }
    }
}
