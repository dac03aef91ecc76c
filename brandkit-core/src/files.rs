//! File names of the branding bundle. The emitted script reads the images
//! back from the working directory under exactly these names.

pub const BANNER_LIGHT: &str = "BannerImageLight.png";
pub const BANNER_DARK: &str = "BannerImageDark.png";
pub const BACKGROUND_DESKTOP_LIGHT: &str = "BackgroundImageDesktopLight.png";
pub const BACKGROUND_DESKTOP_DARK: &str = "BackgroundImageDesktopDark.png";
pub const BACKGROUND_MOBILE_LIGHT: &str = "BackgroundImageMobileLight.png";
pub const BACKGROUND_MOBILE_DARK: &str = "BackgroundImageMobileDark.png";
pub const SQUARE_LOGO: &str = "SquareLogo.png";
pub const SCRIPT: &str = "ApplyBranding.ps1";
pub const README: &str = "README.txt";
