// ── Light/dark theme ──────────────────────────────────────────────────────────
//
// The theme preference is persisted under `store::THEME_KEY` as `"light"` or
// `"dark"`.  Anything else, including a missing entry, means light.
//
// Colour conventions:
//   • All palette entries are 0xRRGGBB.
//   • `Palette::paint` wraps text in a 24-bit ANSI foreground escape.

use crate::store::{self, KeyValueStore, THEME_KEY};

/// The user's colour preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Restore the saved preference.
    pub(crate) fn load(store: &dyn KeyValueStore) -> Self {
        Self::from_stored(&store::load(store, THEME_KEY))
    }

    /// Persist this preference.
    pub(crate) fn save(self, store: &mut dyn KeyValueStore) {
        store::save(store, THEME_KEY, self.as_str());
    }

    fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value written to the store.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph on the toggle button: offers the *other* theme.
    pub(crate) fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}", // 🌙
            Self::Dark => "\u{2600}\u{FE0F}", // ☀️
        }
    }

    /// Toast text shown right after switching *to* this theme.
    pub(crate) fn activated_message(self) -> &'static str {
        match self {
            Self::Light => "Light mode activated! \u{2600}\u{FE0F}",
            Self::Dark => "Dark mode activated! \u{1F319}",
        }
    }

    pub(crate) fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub(crate) struct Palette {
    pub(crate) fg: u32,
    pub(crate) muted: u32,
    pub(crate) accent: u32,
    pub(crate) success: u32,
    pub(crate) warning: u32,
}

/// Light palette: dark text on a light terminal.
const LIGHT: Palette = Palette {
    fg: 0x00_00_00,
    muted: 0x80_80_80,
    accent: 0x00_00_FF,
    success: 0x00_80_00,
    warning: 0xFF_80_00,
};

/// VS Code Dark+-inspired dark palette.
const DARK: Palette = Palette {
    fg: 0xD4_D4_D4,
    muted: 0x85_85_85,
    accent: 0x56_9C_D6,
    success: 0x6A_99_55,
    warning: 0xCE_91_78,
};

impl Palette {
    /// Wrap `text` in a 24-bit foreground colour escape and reset afterwards.
    pub(crate) fn paint(&self, colour: u32, text: &str) -> String {
        let r = (colour >> 16) & 0xFF;
        let g = (colour >> 8) & 0xFF;
        let b = colour & 0xFF;
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn missing_preference_is_light() {
        assert_eq!(Theme::load(&MemoryStore::default()), Theme::Light);
    }

    #[test]
    fn unknown_value_is_light() {
        assert_eq!(Theme::from_stored("solarized"), Theme::Light);
        assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    }

    #[test]
    fn roundtrip_dark() {
        let mut store = MemoryStore::default();
        Theme::Dark.save(&mut store);
        assert_eq!(store::load(&store, THEME_KEY), "dark");
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn paint_emits_truecolor_escape() {
        let s = Theme::Light.palette().paint(0x12_34_56, "ok");
        assert_eq!(s, "\x1b[38;2;18;52;86mok\x1b[0m");
    }
}
