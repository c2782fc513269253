use std::path::{Path, PathBuf};

use image::RgbaImage;
use notiv_renderer::render_icon;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{info, instrument};

use crate::{
    error::{IconError, Result},
    export::save_png,
};

pub const DEFAULT_SIZES: [u32; 5] = [16, 48, 128, 256, 512];
pub const DEFAULT_OVERSAMPLE: u32 = 8;

/// `assets/icons` at the workspace root, wherever the binary is started from.
pub fn default_out_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .join("assets")
        .join("icons")
}

/// What to render and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub out_dir: PathBuf,
    pub sizes: Vec<u32>,
    /// Canvas scale relative to the target size before downsampling.
    pub oversample: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            sizes: DEFAULT_SIZES.to_vec(),
            oversample: DEFAULT_OVERSAMPLE,
        }
    }
}

pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("{size}.png"))
}

fn canvas_size(size: u32, oversample: u32) -> Result<u32> {
    if oversample == 0 {
        return Err(IconError::InvalidOversample(oversample));
    }
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }
    size.checked_mul(oversample)
        .ok_or(IconError::CanvasTooLarge { size, oversample })
}

/// Renders every requested size and writes `<size>.png` into the output
/// directory, creating it when missing.
///
/// Icons are rendered in parallel, then written in the order of
/// `options.sizes`. `on_written` is called after each file lands. Options
/// are validated before anything touches the filesystem.
#[instrument(level = "info", skip_all)]
pub fn generate(
    options: &GenerateOptions,
    mut on_written: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    let jobs = options
        .sizes
        .iter()
        .map(|&size| canvas_size(size, options.oversample).map(|canvas| (size, canvas)))
        .collect::<Result<Vec<_>>>()?;

    std::fs::create_dir_all(&options.out_dir)?;

    let icons: Vec<(u32, RgbaImage)> = jobs
        .into_par_iter()
        .map(|(size, canvas)| (size, render_icon(canvas, size)))
        .collect();

    let mut written = Vec::with_capacity(icons.len());
    for (size, icon) in icons {
        let path = icon_path(&options.out_dir, size);
        save_png(&icon, &path)?;
        on_written(&path);
        written.push(path);
    }

    info!(
        "generated {} icons in {}",
        written.len(),
        options.out_dir.display()
    );

    Ok(written)
}
