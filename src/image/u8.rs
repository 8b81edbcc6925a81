use crate::error::SegmentError;

/// Borrowed 8-bit grayscale view with an explicit row stride.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // samples between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data` (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Check that the view is non-empty and that `data` covers every row.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.w == 0 || self.h == 0 {
            return Err(SegmentError::EmptyImage {
                width: self.w,
                height: self.h,
            });
        }
        if self.stride < self.w {
            return Err(SegmentError::InvalidStride {
                stride: self.stride,
                width: self.w,
            });
        }
        let needed = self.stride * (self.h - 1) + self.w;
        if self.data.len() < needed {
            return Err(SegmentError::BufferTooSmall {
                needed,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
