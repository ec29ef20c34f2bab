//! ImageComposer - burn the title into a caption band and save the result.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, PxScale};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use tracing::{debug, info, warn};

use crate::domains::publishing::models::{ComposedImageFile, GeneratedImage};
use crate::error::PipelineError;
use crate::storage::ImageStore;

// Layout on the nominal 1024px-tall canvas; scaled for other heights.
const REFERENCE_HEIGHT: f32 = 1024.0;
const BAND_TOP: f32 = 900.0;
const TEXT_X: f32 = 30.0;
const TEXT_Y: f32 = 920.0;
const FONT_PX: f32 = 40.0;

/// Opacity of the black caption band, out of 255.
const BAND_ALPHA: u8 = 180;
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

const BUNDLED_FONT: &[u8] = include_bytes!("../../../../assets/fonts/DejaVuSans-Bold.ttf");

// Where a bare font file name is looked up when it is not in the working directory
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Font used for the caption.
pub enum CaptionFont {
    /// The configured font file was found and parsed
    Preferred { font: FontArc, path: PathBuf },
    /// Compiled-in fallback
    Bundled(FontArc),
}

impl CaptionFont {
    /// Load `preferred`, falling back to the bundled font.
    ///
    /// Returns `None` only if the bundled font itself cannot be parsed.
    pub fn load(preferred: &Path) -> Option<Self> {
        for candidate in font_candidates(preferred) {
            let Ok(data) = std::fs::read(&candidate) else {
                continue;
            };
            match FontArc::try_from_vec(data) {
                Ok(font) => {
                    debug!(path = %candidate.display(), "Using preferred caption font");
                    return Some(CaptionFont::Preferred {
                        font,
                        path: candidate,
                    });
                }
                Err(e) => {
                    warn!(path = %candidate.display(), error = %e, "Preferred font is not a usable font file");
                }
            }
        }

        info!(preferred = %preferred.display(), "Preferred font not found, using bundled font");
        match FontArc::try_from_slice(BUNDLED_FONT) {
            Ok(font) => Some(CaptionFont::Bundled(font)),
            Err(e) => {
                warn!(error = %e, "Bundled font failed to parse");
                None
            }
        }
    }

    pub fn font(&self) -> &FontArc {
        match self {
            CaptionFont::Preferred { font, .. } => font,
            CaptionFont::Bundled(font) => font,
        }
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, CaptionFont::Bundled(_))
    }

    /// File the font was read from; `None` for the bundled font.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CaptionFont::Preferred { path, .. } => Some(path.as_path()),
            CaptionFont::Bundled(_) => None,
        }
    }
}

fn font_candidates(preferred: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![preferred.to_path_buf()];
    if preferred.is_relative() {
        if let Some(name) = preferred.file_name() {
            candidates.extend(FONT_DIRS.iter().map(|dir| Path::new(dir).join(name)));
        }
    }
    candidates
}

/// Caption geometry for a canvas of the given height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionLayout {
    pub band_top: u32,
    pub text_x: i32,
    pub text_y: i32,
    pub font_px: f32,
}

impl CaptionLayout {
    pub fn for_height(height: u32) -> Self {
        let scale = height as f32 / REFERENCE_HEIGHT;
        Self {
            band_top: ((BAND_TOP * scale).round() as u32).min(height),
            text_x: (TEXT_X * scale).round() as i32,
            text_y: (TEXT_Y * scale).round() as i32,
            font_px: (FONT_PX * scale).max(1.0),
        }
    }
}

/// Blend black at `BAND_ALPHA` over every row from `top` down.
fn darken_band(canvas: &mut RgbImage, top: u32) {
    let keep = f32::from(255 - BAND_ALPHA) / 255.0;
    let (width, height) = canvas.dimensions();
    for y in top..height {
        for x in 0..width {
            let pixel = canvas.get_pixel_mut(x, y);
            pixel.0 = pixel.0.map(|c| (f32::from(c) * keep).round() as u8);
        }
    }
}

/// Draw the band and title onto `canvas` in place.
pub fn render_caption(canvas: &mut RgbImage, title: &str, font: Option<&CaptionFont>) {
    let layout = CaptionLayout::for_height(canvas.height());
    darken_band(canvas, layout.band_top);

    match font {
        Some(font) => draw_text_mut(
            canvas,
            TEXT_COLOR,
            layout.text_x,
            layout.text_y,
            PxScale::from(layout.font_px),
            font.font(),
            title,
        ),
        None => warn!("No caption font available, saving image without title text"),
    }
}

/// Caption `image` with `title` and write it through `store`.
///
/// The encoding follows the store's target extension, JPEG when unknown.
pub fn compose_title_image(
    image: &GeneratedImage,
    title: &str,
    preferred_font: &Path,
    store: &dyn ImageStore,
) -> Result<ComposedImageFile, PipelineError> {
    let mut canvas = image::load_from_memory(&image.bytes)?.to_rgb8();
    if canvas.dimensions() != (image.width, image.height) {
        debug!(
            width = canvas.width(),
            height = canvas.height(),
            "Image size differs from requested size"
        );
    }

    let font = CaptionFont::load(preferred_font);
    if let Some(font) = &font {
        let source = font
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "bundled".to_string());
        debug!(font = %source, "Caption font selected");
    }
    render_caption(&mut canvas, title, font.as_ref());

    let format = ImageFormat::from_path(store.target()).unwrap_or(ImageFormat::Jpeg);
    let mut encoded = Vec::new();
    DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut encoded), format)?;

    let path = store.save(&encoded)?;
    info!(path = %path.display(), bytes = encoded.len(), "Caption image saved");

    Ok(ComposedImageFile { path })
}
