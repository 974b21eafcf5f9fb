//! Light and dark palette definitions.
//!
//! Both palettes are built from one shared base (typography, shape, button
//! styling) and differ only in their colors and card shadow. The resolved
//! palette reaches the page as CSS custom properties, see
//! [`Palette::css_variables`].

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt::Write as _;

use crate::state::theme::ThemeMode;

/// `main` / `light` / `dark` shades of one semantic color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSet {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundColors {
    pub default: &'static str,
    pub paper: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub font_size: &'static str,
    pub font_weight: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
    pub body1: TextStyle,
}

impl Typography {
    fn headings(&self) -> [(&'static str, TextStyle); 6] {
        [("h1", self.h1), ("h2", self.h2), ("h3", self.h3), ("h4", self.h4), ("h5", self.h5), ("h6", self.h6)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    /// Corner radius in pixels.
    pub border_radius: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub text_transform: &'static str,
    pub font_weight: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub box_shadow: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentStyles {
    pub button: ButtonStyle,
    pub card: CardStyle,
}

/// Fully resolved style configuration for one [`ThemeMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: ColorSet,
    pub secondary: ColorSet,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub typography: Typography,
    pub shape: Shape,
    pub components: ComponentStyles,
}

const HEADING_WEIGHT: u16 = 600;

pub const TYPOGRAPHY: Typography = Typography {
    font_family: r#""Roboto", "Helvetica", "Arial", sans-serif"#,
    h1: TextStyle { font_size: "2.5rem", font_weight: HEADING_WEIGHT },
    h2: TextStyle { font_size: "2rem", font_weight: HEADING_WEIGHT },
    h3: TextStyle { font_size: "1.75rem", font_weight: HEADING_WEIGHT },
    h4: TextStyle { font_size: "1.5rem", font_weight: HEADING_WEIGHT },
    h5: TextStyle { font_size: "1.25rem", font_weight: HEADING_WEIGHT },
    h6: TextStyle { font_size: "1rem", font_weight: HEADING_WEIGHT },
    body1: TextStyle { font_size: "1rem", font_weight: 400 },
};

pub const SHAPE: Shape = Shape { border_radius: 8 };

pub const BUTTON: ButtonStyle = ButtonStyle { text_transform: "none", font_weight: 500 };

/// Merge mode-specific colors into the shared base.
const fn with_common_base(
    mode: ThemeMode,
    primary: ColorSet,
    secondary: ColorSet,
    background: BackgroundColors,
    text: TextColors,
    card_shadow: &'static str,
) -> Palette {
    Palette {
        mode,
        primary,
        secondary,
        background,
        text,
        typography: TYPOGRAPHY,
        shape: SHAPE,
        components: ComponentStyles { button: BUTTON, card: CardStyle { box_shadow: card_shadow } },
    }
}

pub static LIGHT_PALETTE: Palette = with_common_base(
    ThemeMode::Light,
    ColorSet { main: "#1976d2", light: "#42a5f5", dark: "#1565c0" },
    ColorSet { main: "#dc004e", light: "#f73378", dark: "#9a0036" },
    BackgroundColors { default: "#fafafa", paper: "#ffffff" },
    TextColors { primary: "#000000", secondary: "#666666" },
    "0 2px 8px rgba(0,0,0,0.1)",
);

pub static DARK_PALETTE: Palette = with_common_base(
    ThemeMode::Dark,
    ColorSet { main: "#90caf9", light: "#b3d9fc", dark: "#648dae" },
    ColorSet { main: "#f48fb1", light: "#f6a5c1", dark: "#aa647b" },
    BackgroundColors { default: "#121212", paper: "#1e1e1e" },
    TextColors { primary: "#ffffff", secondary: "#b0b0b0" },
    "0 2px 8px rgba(0,0,0,0.3)",
);

/// Resolve the palette for `mode`.
pub fn resolve(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}

impl Palette {
    /// Render the palette as an inline `--theme-*` declaration list.
    ///
    /// The stylesheet only reads these variables, so swapping the declaration
    /// list is all a mode change needs to restyle the page.
    pub fn css_variables(&self) -> String {
        let mut out = String::new();
        let mut push = |name: &str, value: &dyn std::fmt::Display| {
            let _ = write!(out, "--theme-{name}: {value}; ");
        };

        push("color-scheme", &self.mode);
        for (role, set) in [("primary", self.primary), ("secondary", self.secondary)] {
            push(&format!("{role}-main"), &set.main);
            push(&format!("{role}-light"), &set.light);
            push(&format!("{role}-dark"), &set.dark);
        }
        push("background-default", &self.background.default);
        push("background-paper", &self.background.paper);
        push("text-primary", &self.text.primary);
        push("text-secondary", &self.text.secondary);

        push("font-family", &self.typography.font_family);
        for (tag, style) in self.typography.headings() {
            push(&format!("{tag}-font-size"), &style.font_size);
            push(&format!("{tag}-font-weight"), &style.font_weight);
        }
        push("body1-font-size", &self.typography.body1.font_size);
        push("border-radius", &format!("{}px", self.shape.border_radius));
        push("button-text-transform", &self.components.button.text_transform);
        push("button-font-weight", &self.components.button.font_weight);
        push("card-shadow", &self.components.card.box_shadow);

        out.truncate(out.trim_end().len());
        out
    }
}
