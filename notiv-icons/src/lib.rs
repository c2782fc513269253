pub mod app;
pub mod error;
pub mod export;
pub mod generate;
pub mod version;

pub use error::{IconError, Result};
pub use generate::{
    DEFAULT_OVERSAMPLE, DEFAULT_SIZES, GenerateOptions, default_out_dir, generate, icon_path,
};
