use crate::renderer::{AssetKind, RenderSpec, Theme};
use brandkit_core::files;

pub const BANNER_SIZE: (u32, u32) = (1920, 280);
pub const DESKTOP_BACKGROUND_SIZE: (u32, u32) = (1920, 1080);
pub const MOBILE_BACKGROUND_SIZE: (u32, u32) = (768, 1024);

/// One image of the branding bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTarget {
    pub file_name: &'static str,
    pub kind: AssetKind,
    pub spec: RenderSpec,
}

const fn target(file_name: &'static str, kind: AssetKind, size: (u32, u32), theme: Theme) -> AssetTarget {
    AssetTarget {
        file_name,
        kind,
        spec: RenderSpec::new(size.0, size.1, theme),
    }
}

/// The six images every generation produces, in bundle order.
pub const REQUIRED_ASSETS: [AssetTarget; 6] = [
    target(files::BANNER_LIGHT, AssetKind::Banner, BANNER_SIZE, Theme::Light),
    target(files::BANNER_DARK, AssetKind::Banner, BANNER_SIZE, Theme::Dark),
    target(files::BACKGROUND_DESKTOP_LIGHT, AssetKind::Background, DESKTOP_BACKGROUND_SIZE, Theme::Light),
    target(files::BACKGROUND_DESKTOP_DARK, AssetKind::Background, DESKTOP_BACKGROUND_SIZE, Theme::Dark),
    target(files::BACKGROUND_MOBILE_LIGHT, AssetKind::Background, MOBILE_BACKGROUND_SIZE, Theme::Light),
    target(files::BACKGROUND_MOBILE_DARK, AssetKind::Background, MOBILE_BACKGROUND_SIZE, Theme::Dark),
];
