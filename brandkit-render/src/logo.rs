use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logo is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("logo decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// An uploaded logo: the decoded raster used for drawing, plus the original
/// file bytes which are shipped unchanged as the square logo.
#[derive(Clone)]
pub struct Logo {
    image: RgbaImage,
    encoded: Vec<u8>,
}

impl Logo {
    pub fn from_bytes(encoded: Vec<u8>) -> Result<Self, LogoError> {
        let format = image::guess_format(&encoded)?;
        if format != ImageFormat::Png {
            log::warn!("logo is {:?}, not PNG; it will still be shipped as-is", format);
        }

        let image = image::load_from_memory_with_format(&encoded, format)?.to_rgba8();
        let logo = Self { image, encoded };
        if !logo.has_transparency() {
            log::warn!("logo has no transparent pixels; it will render as a solid square");
        }
        Ok(logo)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn has_transparency(&self) -> bool {
        self.image.pixels().any(|p| p[3] < u8::MAX)
    }
}

impl fmt::Debug for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logo")
            .field("dimensions", &self.dimensions())
            .field("encoded_len", &self.encoded.len())
            .finish()
    }
}

/// Reads and decodes a logo file. Decoding runs on the blocking pool.
pub async fn decode_logo(path: impl AsRef<Path>) -> Result<Logo, LogoError> {
    let path = path.as_ref();
    let encoded = tokio::fs::read(path).await.map_err(|source| LogoError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("decoding logo {} ({} bytes)", path.display(), encoded.len());
    tokio::task::spawn_blocking(move || Logo::from_bytes(encoded)).await?
}
