// SPDX-License-Identifier: MPL-2.0
//! Dice face image resolution.
//!
//! Every [`DieFace`] maps to exactly one image resource. By default that is the
//! SVG artwork embedded from `assets/dice/` at compile time, with handles cached
//! in a `OnceLock`. A custom directory of `dice_1.png` .. `dice_6.png` files can
//! replace individual faces; faces missing from it keep the embedded artwork.
//!
//! The directory is scanned once in [`DiceFaces::new`], so rendering never
//! touches the filesystem.

use crate::domain::{DieFace, FACE_COUNT};
use crate::ui::design_tokens::sizing;
use iced::widget::{image, svg};
use iced::{Element, Length};
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/dice/"]
struct EmbeddedFaces;

/// Where the image for one face comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceImage {
    /// SVG artwork compiled into the binary.
    Embedded(DieFace),
    /// User-supplied raster image.
    File(PathBuf),
}

/// Resolved image resource for each of the six faces.
#[derive(Debug, Clone)]
pub struct DiceFaces {
    images: [FaceImage; FACE_COUNT],
}

impl Default for DiceFaces {
    fn default() -> Self {
        Self {
            images: DieFace::ALL.map(FaceImage::Embedded),
        }
    }
}

impl DiceFaces {
    /// Resolves all faces, preferring `assets_dir/dice_{n}.png` when present.
    pub fn new(assets_dir: Option<&Path>) -> Self {
        let Some(dir) = assets_dir else {
            return Self::default();
        };

        let images = DieFace::ALL.map(|face| {
            let candidate = dir.join(face.asset_name());
            if candidate.is_file() {
                FaceImage::File(candidate)
            } else {
                tracing::debug!(
                    face = face.value(),
                    path = %candidate.display(),
                    "custom face image missing, using embedded artwork"
                );
                FaceImage::Embedded(face)
            }
        });

        Self { images }
    }

    /// Returns the image resource for `face`.
    #[must_use]
    pub fn resolve(&self, face: DieFace) -> &FaceImage {
        &self.images[face.index()]
    }

    /// Renders the image for `face` at the standard dice size.
    pub fn view<'a, Message: 'a>(&self, face: DieFace) -> Element<'a, Message> {
        let size = Length::Fixed(sizing::DICE_IMAGE);
        match self.resolve(face) {
            FaceImage::File(path) => image(image::Handle::from_path(path))
                .width(size)
                .height(size)
                .into(),
            FaceImage::Embedded(face) => svg(embedded_handle(*face))
                .width(size)
                .height(size)
                .into(),
        }
    }
}

/// Returns the cached SVG handle for the embedded artwork of `face`.
fn embedded_handle(face: DieFace) -> svg::Handle {
    static HANDLES: OnceLock<Vec<svg::Handle>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| {
        DieFace::ALL
            .iter()
            .map(|face| {
                let data = EmbeddedFaces::get(&face.embedded_name())
                    .map(|file| file.data)
                    .unwrap_or_default();
                svg::Handle::from_memory(data)
            })
            .collect()
    });
    handles[face.index()].clone()
}
