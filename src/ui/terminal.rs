// ── Terminal view ─────────────────────────────────────────────────────────────
//
// Line-oriented rendering to any `io::Write`.  Colour comes from the active
// theme's palette and is switched off for non-terminal output.

use std::io::Write;

use super::{field_name, View};
use crate::{
    app::{App, FieldId, Toast, Tone},
    error::Result,
    stats::TextStats,
    theme::Palette,
};

/// Width of the message progress bar, in cells.
const PROGRESS_WIDTH: usize = 20;

const HELP: &str = "\
commands:
  char <text>      set the character counter text
  msg <text>       set the message text (max 100 characters)
  clear char|msg   empty a field
  copy char|msg    copy a field to the clipboard
  theme            toggle light/dark mode
  show             redraw
  help             this list
  quit             exit
text may use \\n, \\t and \\\\ escapes";

pub(crate) struct TerminalView<W: Write> {
    out: W,
    colour: bool,
}

impl<W: Write> TerminalView<W> {
    pub(crate) fn new(out: W, colour: bool) -> Self {
        Self { out, colour }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, palette: &Palette, colour: u32, text: &str) -> String {
        if self.colour {
            palette.paint(colour, text)
        } else {
            text.to_owned()
        }
    }

    fn tone_colour(palette: &Palette, tone: Tone) -> u32 {
        match tone {
            Tone::Neutral => palette.muted,
            Tone::Success => palette.success,
            Tone::Warning => palette.warning,
        }
    }

    fn write_counter(&mut self, palette: &Palette, id: FieldId, label: &str, badge: &str, tone: Tone) -> Result<()> {
        let name = self.paint(palette, palette.muted, &format!("{:<5}", field_name(id)));
        let label = self.paint(palette, palette.fg, label);
        let badge = self.paint(palette, Self::tone_colour(palette, tone), &format!("[{badge}]"));
        writeln!(self.out, "{name} {label} {badge}")?;
        Ok(())
    }

    fn write_stats(&mut self, palette: &Palette, stats: &TextStats) -> Result<()> {
        let line = format!(
            "      words {}  letters {}  numbers {}  special {}",
            stats.words, stats.letters, stats.numbers, stats.special
        );
        let line = self.paint(palette, palette.muted, &line);
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// `[#####---------------]` for `percent` of `PROGRESS_WIDTH`.
fn progress_bar(percent: usize) -> String {
    let filled = percent.min(100) * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

impl<W: Write> View for TerminalView<W> {
    fn render(&mut self, app: &App) -> Result<()> {
        let theme = app.theme();
        let palette = theme.palette();

        let header = self.paint(palette, palette.accent, &format!("textbox ({} mode)", theme.as_str()));
        writeln!(self.out, "{header}  toggle: {}", theme.icon())?;

        let chars = app.char_counter();
        self.write_counter(palette, FieldId::Chars, &chars.label, &chars.badge, chars.tone)?;
        if let Some(stats) = &chars.stats {
            self.write_stats(palette, stats)?;
        }

        let msg = app.message_counter();
        self.write_counter(palette, FieldId::Message, &msg.label, &msg.badge, msg.tone)?;
        let bar = self.paint(palette, Self::tone_colour(palette, msg.tone), &progress_bar(msg.progress));
        writeln!(self.out, "      {bar} {}%", msg.progress)?;
        if let Some(stats) = &msg.stats {
            self.write_stats(palette, stats)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn toast(&mut self, toast: &Toast) -> Result<()> {
        tracing::trace!(duration_ms = toast.duration.as_millis() as u64, "toast");
        writeln!(self.out, ">> {}", toast.message)?;
        self.out.flush()?;
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "{HELP}")?;
        Ok(())
    }

    fn reject(&mut self, line: &str, reason: &str) -> Result<()> {
        tracing::debug!(line, reason, "rejected input");
        writeln!(self.out, "?? {reason}")?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
