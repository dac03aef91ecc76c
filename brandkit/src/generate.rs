//! The single "generate" action: derive the palette once, render the six
//! images on one reused surface, then emit the script.

use brandkit_core::{files, Color, Palette};
use brandkit_render::{AssetTarget, EncodedImage, Logo, RenderError, Renderer, REQUIRED_ASSETS};
use brandkit_script::{ScriptEmitter, ScriptError};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to render {file}")]
    Render {
        file: &'static str,
        #[source]
        source: RenderError,
    },

    #[error("failed to emit {}", files::SCRIPT)]
    Script(#[from] ScriptError),
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub primary: Color,
    pub secondary: Color,
    pub logo: Option<Logo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub file_name: &'static str,
    pub image: EncodedImage,
}

/// Everything one generation run produced. Replaced wholesale on the next run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAssetSet {
    pub palette: Palette,
    pub images: Vec<GeneratedImage>,
    pub square_logo: Option<Vec<u8>>,
    pub script: String,
    pub generated_at: DateTime<Utc>,
}

pub fn generate(request: &GenerationRequest, generated_at: DateTime<Utc>) -> Result<GeneratedAssetSet, GenerateError> {
    let palette = Palette::derive(request.primary, request.secondary);
    log::debug!(
        "palette {} / {}: primary contrast {:.2}, primaryDark {}",
        palette.primary,
        palette.secondary,
        palette.primary_contrast(),
        palette.primary_dark
    );

    let mut renderer = Renderer::new();
    let mut images = Vec::with_capacity(REQUIRED_ASSETS.len());
    for target in REQUIRED_ASSETS {
        images.push(render_target(&mut renderer, &target, &palette, request.logo.as_ref())?);
    }

    let script = ScriptEmitter::new()?.emit(&palette, generated_at)?;

    Ok(GeneratedAssetSet {
        palette,
        images,
        square_logo: request.logo.as_ref().map(|logo| logo.encoded().to_vec()),
        script,
        generated_at,
    })
}

fn render_target(
    renderer: &mut Renderer,
    target: &AssetTarget,
    palette: &Palette,
    logo: Option<&Logo>,
) -> Result<GeneratedImage, GenerateError> {
    let image = renderer
        .render(target.kind, target.spec, palette, logo)
        .inspect_err(|err| log::error!("rendering {} failed, aborting generation: {}", target.file_name, err))
        .map_err(|source| GenerateError::Render {
            file: target.file_name,
            source,
        })?;
    Ok(GeneratedImage {
        file_name: target.file_name,
        image,
    })
}
