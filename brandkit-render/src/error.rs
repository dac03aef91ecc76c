use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}
