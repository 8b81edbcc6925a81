//! Owned 8-bit grayscale buffer used as the segmentation output.
//!
//! - `GrayImageU8::from_view`: copy a strided [`ImageU8`] into a packed buffer.
//! - `GrayImageU8::from_gray_image` / `into_gray_image`: interop with the
//!   `image` crate for callers that already hold an `image::GrayImage`.
use super::{ImageU8, ImageView, ImageViewMut};
use crate::error::SegmentError;
use image::GrayImage;

/// Owned 8-bit grayscale buffer in row-major layout (stride == width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    /// Packed copy of a (possibly strided) view.
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let mut data = Vec::with_capacity(view.w * view.h);
        for row in view.rows() {
            data.extend_from_slice(row);
        }
        Self::new(view.w, view.h, data)
    }

    /// Take ownership of an `image::GrayImage` buffer.
    pub fn from_gray_image(img: GrayImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self::new(width, height, img.into_raw())
    }

    /// Convert into an `image::GrayImage`.
    pub fn into_gray_image(self) -> Result<GrayImage, SegmentError> {
        let needed = self.width * self.height;
        let actual = self.data.len();
        let (w, h) = match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(SegmentError::EmptyImage {
                    width: self.width,
                    height: self.height,
                })
            }
        };
        GrayImage::from_raw(w, h, self.data)
            .ok_or(SegmentError::BufferTooSmall { needed, actual })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed pixel data in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Rows of the buffer as disjoint mutable chunks, for parallel writes.
    #[cfg(feature = "parallel")]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        use rayon::slice::ParallelSliceMut;
        self.data.par_chunks_exact_mut(self.stride)
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}
