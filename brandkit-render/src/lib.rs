//! Procedural rendering of the branding banners and backgrounds.

pub mod error;
pub mod gradient;
pub mod logo;
pub mod renderer;
pub mod surface;
pub mod targets;

pub use error::RenderError;
pub use logo::{decode_logo, Logo, LogoError};
pub use renderer::{AssetKind, EncodedImage, RenderSpec, Renderer, Theme};
pub use targets::{AssetTarget, REQUIRED_ASSETS};
