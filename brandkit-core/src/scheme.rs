use crate::color::{Color, HexCase};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY: Color = Color::rgb(0x00, 0x78, 0xd4).with_case(HexCase::Upper);
pub const DEFAULT_SECONDARY: Color = Color::rgb(0x10, 0x6e, 0xbe).with_case(HexCase::Upper);

pub const LIGHT_BACKGROUND: Color = Color::rgb(0xf3, 0xf2, 0xf1);
pub const DARK_BACKGROUND: Color = Color::rgb(0x20, 0x1f, 0x1e);
pub const LIGHT_TEXT: Color = Color::rgb(0x32, 0x31, 0x30);
pub const DARK_TEXT: Color = Color::rgb(0xff, 0xff, 0xff);

/// WCAG AA minimum for normal text.
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

const SHADE_STEP: i16 = 30;
const STRONG_SHADE_STEP: i16 = 60;
const ACCENT_STEP: i16 = 20;

/// The nine brand colors derived from two seed colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub primary_dark: Color,
    pub primary_light: Color,
    pub accent: Color,
    pub background: Color,
    pub background_dark: Color,
    pub text: Color,
    pub text_dark: Color,
}

impl Palette {
    /// Derives the palette from the seeds. Only `primary_dark` is contrast
    /// checked: when the primary seed is too light against the light
    /// background it is darkened twice as hard.
    pub fn derive(primary: Color, secondary: Color) -> Self {
        let mut palette = Self {
            primary,
            secondary,
            primary_dark: primary.adjust_brightness(-SHADE_STEP),
            primary_light: primary.adjust_brightness(SHADE_STEP),
            accent: secondary.adjust_brightness(ACCENT_STEP),
            background: LIGHT_BACKGROUND,
            background_dark: DARK_BACKGROUND,
            text: LIGHT_TEXT,
            text_dark: DARK_TEXT,
        };

        let contrast = palette.primary_contrast();
        if contrast < MIN_TEXT_CONTRAST {
            log::debug!(
                "primary {} has contrast {:.2} against {}, darkening by {}",
                primary,
                contrast,
                palette.background,
                STRONG_SHADE_STEP
            );
            palette.primary_dark = primary.adjust_brightness(-STRONG_SHADE_STEP);
        }

        palette
    }

    /// Contrast of the primary color against the light background.
    pub fn primary_contrast(&self) -> f64 {
        self.primary.contrast_ratio(&self.background)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::derive(DEFAULT_PRIMARY, DEFAULT_SECONDARY)
    }
}
