//! Theme state, handed down explicitly instead of being looked up from an ambient context.

use std::{cell::Cell, rc::Rc};

use strum_macros::AsRefStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Name of the UI toolkit theme to render with.
    pub fn toolkit_theme(self) -> &'static str {
        match self {
            Theme::Light => "webLightTheme",
            Theme::Dark => "webDarkTheme",
        }
    }
}

/// Creates the shared theme cell. Readers can be cloned and handed to any widget,
/// the single setter goes to whoever owns the theme switch.
pub fn theme_handle(initial: Theme) -> (ThemeReader, ThemeSetter) {
    let cell = Rc::new(Cell::new(initial));
    (ThemeReader(cell.clone()), ThemeSetter(cell))
}

#[derive(Debug, Clone)]
pub struct ThemeReader(Rc<Cell<Theme>>);

impl ThemeReader {
    pub fn get(&self) -> Theme {
        self.0.get()
    }
}

#[derive(Debug)]
pub struct ThemeSetter(Rc<Cell<Theme>>);

impl ThemeSetter {
    pub fn set(&self, theme: Theme) {
        self.0.set(theme);
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.0.get().toggled();
        self.0.set(theme);
        theme
    }

    pub fn reader(&self) -> ThemeReader {
        ThemeReader(self.0.clone())
    }
}

/// The light/dark switch. Checked means light.
#[derive(Debug)]
pub struct ThemeSwitch {
    setter: ThemeSetter,
}

impl ThemeSwitch {
    pub fn new(setter: ThemeSetter) -> Self {
        Self { setter }
    }

    pub fn checked(&self) -> bool {
        self.setter.reader().get() == Theme::Light
    }

    pub fn label(&self) -> &'static str {
        if self.checked() {
            "Light Theme"
        } else {
            "Dark Theme"
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.checked() {
            "🌞"
        } else {
            "🌚"
        }
    }

    /// Switch `onChange`.
    pub fn on_change(&self, checked: bool) {
        let theme = if checked { Theme::Light } else { Theme::Dark };
        self.setter.set(theme);
    }
}
