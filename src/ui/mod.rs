// ── Front end ─────────────────────────────────────────────────────────────────
//
// The `View` trait is the only thing `run` draws through; `App` never knows
// how it is displayed.  `terminal` is the one implementation, `command` turns
// input lines into actions.

pub mod command;
pub mod terminal;

use std::io::BufRead;

use crate::{
    app::{App, FieldId, Toast},
    clipboard::Clipboard,
    error::Result,
};

use command::Command;

/// Something that can display the application state.
pub(crate) trait View {
    /// Redraw both counters.
    fn render(&mut self, app: &App) -> Result<()>;

    /// Show a transient notification.
    fn toast(&mut self, toast: &Toast) -> Result<()>;

    /// Show the command reference.
    fn help(&mut self) -> Result<()>;

    /// Report a line that could not be understood.
    fn reject(&mut self, line: &str, reason: &str) -> Result<()>;
}

/// Drive `app` from `input` until `quit` or end of input.
///
/// Restored state is rendered once before the first command.
pub(crate) fn run(
    app: &mut App,
    clipboard: &mut dyn Clipboard,
    input: impl BufRead,
    view: &mut dyn View,
) -> Result<()> {
    view.render(app)?;
    for line in input.lines() {
        let line = line?;
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                view.reject(&line, &e.to_string())?;
                continue;
            }
        };
        tracing::trace!(?command, "command");
        match command {
            Command::Edit(id, text) => {
                app.edit(id, &text);
                view.render(app)?;
            }
            Command::Clear(id) => {
                let toast = app.clear(id);
                view.render(app)?;
                view.toast(&toast)?;
            }
            Command::Copy(id) => view.toast(&app.copy(id, clipboard))?,
            Command::ToggleTheme => {
                let toast = app.toggle_theme();
                view.render(app)?;
                view.toast(&toast)?;
            }
            Command::Show => view.render(app)?,
            Command::Help => view.help()?,
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Short name of a field as typed in commands.
pub(crate) fn field_name(id: FieldId) -> &'static str {
    match id {
        FieldId::Chars => "char",
        FieldId::Message => "msg",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
