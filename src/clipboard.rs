//! Platform clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};

/// Fire-and-forget text sink.
///
/// Failures are absorbed by the implementation; callers never see them.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);

    /// Whether writes reach a real clipboard.
    fn is_available(&self) -> bool {
        true
    }
}

/// System clipboard through copypasta.
///
/// Degrades to a no-op when the platform clipboard can't be opened.
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let ctx = match ClipboardContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self { ctx }
    }

    /// A clipboard that drops every write.
    pub fn disabled() -> Self {
        Self { ctx: None }
    }

}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn is_available(&self) -> bool {
        self.ctx.is_some()
    }

    fn write_text(&mut self, text: &str) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };

        if let Err(e) = ctx.set_contents(text.to_string()) {
            tracing::warn!(error = %e, "clipboard write failed");
        }
    }
}
