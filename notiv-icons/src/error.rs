#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("icon size must be at least 1 pixel, got {0}")]
    InvalidSize(u32),

    #[error("oversample factor must be at least 1, got {0}")]
    InvalidOversample(u32),

    #[error("canvas for a {size}px icon at {oversample}x oversampling is too large")]
    CanvasTooLarge { size: u32, oversample: u32 },
}

pub type Result<T> = std::result::Result<T, IconError>;
