//! Pixel buffers the renderer writes into.
//!
//! [`ImageView`] wraps a borrowed byte backing store whose rows may be
//! padded (`row_stride` bytes apart), which is what window surfaces and
//! texture uploads usually hand out. [`RgbaImage`] is a tightly-packed
//! owned buffer for offline renders and tests.

use std::io::Write;

use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;
use thiserror::Error;

/// An 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Bytes per pixel.
pub const PIXEL_SIZE: usize = std::mem::size_of::<Rgba8>();

/// Errors that can occur when wrapping or exporting pixel buffers.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row stride must be non-zero")]
    ZeroStride,

    #[error("Row stride of {stride} bytes cannot hold {width} pixels ({required} bytes)")]
    StrideTooSmall {
        stride: usize,
        width: usize,
        required: usize,
    },

    #[error("Backing store holds {len} bytes but {required} are needed")]
    BufferTooSmall { len: usize, required: usize },
}

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Read access to rows of pixels.
pub trait Raster {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn row(&self, j: usize) -> &[Rgba8];

    fn pixel(&self, i: usize, j: usize) -> Rgba8 {
        self.row(j)[i]
    }
}

/// A mutable, row-strided view over RGBA bytes.
pub struct ImageView<'a> {
    bytes: &'a mut [u8],
    width: usize,
    height: usize,
    row_stride: usize,
}

impl<'a> ImageView<'a> {
    /// Wrap `bytes` as `height` rows of `width` pixels, `row_stride` bytes apart.
    ///
    /// The final row only needs `width` pixels of backing store, not a full stride.
    pub fn new(bytes: &'a mut [u8], width: usize, height: usize, row_stride: usize) -> ImageResult<Self> {
        if row_stride == 0 {
            return Err(ImageError::ZeroStride);
        }

        let too_large = |len: usize| ImageError::BufferTooSmall {
            len,
            required: usize::MAX,
        };

        let row_bytes = width.checked_mul(PIXEL_SIZE).ok_or_else(|| too_large(bytes.len()))?;
        if row_stride < row_bytes {
            return Err(ImageError::StrideTooSmall {
                stride: row_stride,
                width,
                required: row_bytes,
            });
        }

        let required = match height {
            0 => 0,
            h => row_stride
                .checked_mul(h - 1)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or_else(|| too_large(bytes.len()))?,
        };
        if bytes.len() < required {
            return Err(ImageError::BufferTooSmall {
                len: bytes.len(),
                required,
            });
        }

        Ok(Self {
            bytes,
            width,
            height,
            row_stride,
        })
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    fn row_bytes(&self) -> usize {
        self.width * PIXEL_SIZE
    }

    pub fn row_mut(&mut self, j: usize) -> &mut [Rgba8] {
        let start = j * self.row_stride;
        let end = start + self.row_bytes();
        bytemuck::cast_slice_mut(&mut self.bytes[start..end])
    }

    pub fn set_pixel(&mut self, i: usize, j: usize, pixel: Rgba8) {
        self.row_mut(j)[i] = pixel;
    }

    pub fn fill(&mut self, pixel: Rgba8) {
        for j in 0..self.height {
            self.row_mut(j).fill(pixel);
        }
    }

    /// Rows as disjoint mutable slices, for parallel writers.
    ///
    /// Padding bytes between rows are never exposed.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [Rgba8]> + '_ {
        let row_bytes = self.row_bytes();
        self.bytes
            .par_chunks_mut(self.row_stride)
            .take(self.height)
            .map(move |row| {
                let (pixels, _padding) = row.split_at_mut(row_bytes);
                bytemuck::cast_slice_mut::<u8, Rgba8>(pixels)
            })
    }
}

impl Raster for ImageView<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn row(&self, j: usize) -> &[Rgba8] {
        let start = j * self.row_stride;
        bytemuck::cast_slice(&self.bytes[start..start + self.row_bytes()])
    }
}

/// An owned, tightly-packed RGBA image.
#[derive(Debug, Clone)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgba8>,
}

impl RgbaImage {
    /// Create a new image filled with transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::default(); width * height],
        }
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Borrow the image as a view the renderer can write into.
    pub fn view_mut(&mut self) -> ImageView<'_> {
        ImageView {
            bytes: bytemuck::cast_slice_mut(&mut self.pixels),
            width: self.width,
            height: self.height,
            row_stride: (self.width * PIXEL_SIZE).max(PIXEL_SIZE),
        }
    }
}

impl Raster for RgbaImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn row(&self, j: usize) -> &[Rgba8] {
        &self.pixels[j * self.width..(j + 1) * self.width]
    }
}

/// Write an image as plain-text PPM (`P3`): a header with width, height and
/// the maximum value, then one `r g b` triple per line in row-major order.
pub fn write_ppm<W: Write>(mut writer: W, image: &impl Raster) -> ImageResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for j in 0..image.height() {
        for pixel in image.row(j) {
            writeln!(writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
        }
    }

    writer.flush()?;
    Ok(())
}
