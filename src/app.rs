// ── Application state ─────────────────────────────────────────────────────────
//
// A single `App` is created on startup and owned by the front end for the
// lifetime of the process.  All mutations happen on one thread; there is no
// global mutable state.  Everything the view shows is derived here from the
// two fields and the theme, so the view only formats.

use std::time::Duration;

use crate::{
    clipboard::Clipboard,
    field::PersistedField,
    stats::{analyze, TextStats},
    store::{KeyValueStore, CHAR_INPUT_KEY, MSG_INPUT_KEY},
    theme::Theme,
};

/// Maximum length of the message field, in characters.
pub(crate) const MESSAGE_MAX_LEN: usize = 100;

/// Below this many remaining characters the message counter turns to a warning.
const MESSAGE_WARN_REMAINING: usize = 20;

const TOAST_DEFAULT: Duration = Duration::from_millis(3000);
const TOAST_SHORT: Duration = Duration::from_millis(2000);

// ── Field identity ────────────────────────────────────────────────────────────

/// Which of the two inputs an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldId {
    /// The free character counter.
    Chars,
    /// The bounded message counter.
    Message,
}

impl FieldId {
    /// Noun used in toasts: `"Text copied…"`, `"Message cleared…"`.
    fn noun(self) -> &'static str {
        match self {
            Self::Chars => "Text",
            Self::Message => "Message",
        }
    }
}

// ── Toasts ────────────────────────────────────────────────────────────────────

/// A transient notification raised by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub(crate) message: String,
    pub(crate) duration: Duration,
}

impl Toast {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_DEFAULT,
        }
    }

    fn short(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_SHORT,
        }
    }
}

// ── Derived counter state ─────────────────────────────────────────────────────

/// Colour class of a counter badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Neutral,
    Success,
    Warning,
}

/// What the character counter shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharCounter {
    pub(crate) label: String,
    pub(crate) badge: String,
    pub(crate) tone: Tone,
    /// `None` hides the statistics panel.
    pub(crate) stats: Option<TextStats>,
}

/// What the message counter shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageCounter {
    pub(crate) label: String,
    pub(crate) badge: String,
    pub(crate) tone: Tone,
    /// Fill of the progress bar, 0–100.
    pub(crate) progress: usize,
    pub(crate) stats: Option<TextStats>,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Top-level application state: the store, both fields and the theme.
pub(crate) struct App {
    store: Box<dyn KeyValueStore>,
    chars: PersistedField,
    message: PersistedField,
    theme: Theme,
}

impl App {
    /// Restore both fields and the theme from `store`.
    pub(crate) fn new(store: Box<dyn KeyValueStore>) -> Self {
        let chars = PersistedField::load(store.as_ref(), CHAR_INPUT_KEY, None);
        let message = PersistedField::load(store.as_ref(), MSG_INPUT_KEY, Some(MESSAGE_MAX_LEN));
        let theme = Theme::load(store.as_ref());
        tracing::debug!(
            chars = chars.len(),
            message = message.len(),
            theme = theme.as_str(),
            "state restored"
        );
        Self {
            store,
            chars,
            message,
            theme,
        }
    }

    pub(crate) fn field(&self, id: FieldId) -> &PersistedField {
        match id {
            FieldId::Chars => &self.chars,
            FieldId::Message => &self.message,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> (&mut PersistedField, &mut dyn KeyValueStore) {
        let field = match id {
            FieldId::Chars => &mut self.chars,
            FieldId::Message => &mut self.message,
        };
        (field, self.store.as_mut())
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    /// Replace the text of `id`.  Input to a bounded field is clamped to its
    /// limit first, the way a `maxlength` input would refuse extra keystrokes.
    pub(crate) fn edit(&mut self, id: FieldId, text: &str) {
        let (field, store) = self.field_mut(id);
        let accepted = field.clamp(text).to_owned();
        if accepted.len() < text.len() {
            tracing::debug!(key = field.key(), "input clamped to field limit");
        }
        field.set_value(store, accepted);
    }

    /// Empty `id`, unless it is already blank.
    pub(crate) fn clear(&mut self, id: FieldId) -> Toast {
        let (field, store) = self.field_mut(id);
        if field.is_blank() {
            return Toast::short("Already empty!");
        }
        field.clear(store);
        Toast::new(format!("{} cleared! \u{1F5D1}\u{FE0F}", id.noun()))
    }

    /// Copy the text of `id` to `clipboard`.
    pub(crate) fn copy(&self, id: FieldId, clipboard: &mut dyn Clipboard) -> Toast {
        let field = self.field(id);
        if field.is_blank() {
            return Toast::short("Nothing to copy!");
        }
        match clipboard.set_text(field.value()) {
            Ok(()) => Toast::new(format!("{} copied to clipboard! \u{2713}", id.noun())),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                Toast::short("Failed to copy text")
            }
        }
    }

    /// Switch between light and dark and remember the choice.
    pub(crate) fn toggle_theme(&mut self) -> Toast {
        self.theme = self.theme.toggled();
        self.theme.save(self.store.as_mut());
        Toast::new(self.theme.activated_message())
    }

    // ── Derived state ─────────────────────────────────────────────────────────

    /// | Length | Label | Badge | Tone |
    /// |---|---|---|---|
    /// | 0 | `Enter Your Text` | `0` | neutral |
    /// | 1 | `You Entered 1 Character` | `1` | success |
    /// | n | `You Entered n Characters` | `n` | success |
    pub(crate) fn char_counter(&self) -> CharCounter {
        let len = self.chars.len();
        if len == 0 {
            return CharCounter {
                label: "Enter Your Text".to_owned(),
                badge: "0".to_owned(),
                tone: Tone::Neutral,
                stats: None,
            };
        }
        let plural = if len > 1 { "s" } else { "" };
        CharCounter {
            label: format!("You Entered {len} Character{plural}"),
            badge: len.to_string(),
            tone: Tone::Success,
            stats: Some(analyze(self.chars.value())),
        }
    }

    /// | Remaining | Label | Tone |
    /// |---|---|---|
    /// | empty | `Express Your Thoughts` | success |
    /// | ≥ 20 | `Keep Writing...` | success |
    /// | 1–19 | `Almost There!` | warning |
    /// | 0 | `Limit Reached!` | warning |
    pub(crate) fn message_counter(&self) -> MessageCounter {
        let len = self.message.len();
        let max = self.message.max_len().unwrap_or(MESSAGE_MAX_LEN);
        let remaining = self.message.remaining().unwrap_or(max);
        let progress = (len * 100 / max).min(100);
        let stats = (len > 0).then(|| analyze(self.message.value()));

        let (label, badge, tone) = if len == 0 {
            ("Express Your Thoughts", format!("0 / {max}"), Tone::Success)
        } else if remaining >= MESSAGE_WARN_REMAINING {
            ("Keep Writing...", format!("{len} / {max}"), Tone::Success)
        } else if remaining > 0 {
            ("Almost There!", format!("{len} / {max}"), Tone::Warning)
        } else {
            ("Limit Reached!", format!("{max} / {max}"), Tone::Warning)
        };

        MessageCounter {
            label: label.to_owned(),
            badge,
            tone,
            progress,
            stats,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
