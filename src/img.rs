use crate::error::Error;

/// A row-major 8-bit RGB image. Immutable once constructed; the buffer
/// always holds exactly `width * height * 3` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension);
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::InvalidInputSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbImage {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat RGB888 buffer, row-major, left-to-right, top-to-bottom.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Channel triple at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
