//! Raw RGB565 framebuffer decoding and encoding.
//!
//! A raw dump is `width * height` packed 16-bit pixels, row-major,
//! left-to-right, top-to-bottom, with no stride padding. Each pixel is
//! stored little-endian: the byte pair `[0x00, 0xF8]` is pure red.
//! Bit layout of the 16-bit word, MSB to LSB: 5 bits red, 6 bits
//! green, 5 bits blue.

use crate::error::Error;
use crate::img::RgbImage;
use log::debug;

/// Two bytes per packed pixel.
pub const BYTES_PER_PIXEL: usize = 2;

/// Expand a raw RGB565 dump into an 8-bit RGB image.
///
/// Widening zero-fills the dropped low bits (no rounding, no
/// dithering), so output channels are multiples of 8 for red and blue
/// and multiples of 4 for green; a saturated channel reads 248 or 252,
/// never 255.
///
/// Fails before touching any pixel when the buffer length is not
/// `width * height * 2` or either dimension is zero.
pub fn decode(raw: &[u8], width: u32, height: u32) -> Result<RgbImage, Error> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroDimension);
    }
    let pixels = width as usize * height as usize;
    let expected = pixels * BYTES_PER_PIXEL;
    if raw.len() != expected {
        return Err(Error::InvalidInputSize {
            expected,
            actual: raw.len(),
        });
    }

    debug!("decoding {pixels} rgb565 pixels ({width}x{height})");
    let mut rgb = Vec::with_capacity(pixels * 3);
    for pair in raw.chunks_exact(BYTES_PER_PIXEL) {
        let px = u16::from_le_bytes([pair[0], pair[1]]);
        rgb.push((((px >> 11) & 0x1F) << 3) as u8);
        rgb.push((((px >> 5) & 0x3F) << 2) as u8);
        rgb.push(((px & 0x1F) << 3) as u8);
    }
    RgbImage::new(width, height, rgb)
}

/// Pack an 8-bit RGB image back into a raw RGB565 dump.
///
/// Truncating: the low 3 bits of red and blue and the low 2 bits of
/// green are dropped. On the output of [`decode`] those bits are zero,
/// so `encode(decode(raw)) == raw`.
pub fn encode(img: &RgbImage) -> Vec<u8> {
    let mut raw = Vec::with_capacity(
        img.width() as usize * img.height() as usize * BYTES_PER_PIXEL,
    );
    for p in img.data().chunks_exact(3) {
        let px = ((p[0] as u16 >> 3) << 11) | ((p[1] as u16 >> 2) << 5) | (p[2] as u16 >> 3);
        raw.extend_from_slice(&px.to_le_bytes());
    }
    raw
}
