//! PNG serialization of decoded images, through the `png` crate.

use crate::error::Error;
use crate::img::RgbImage;
use log::debug;
use png::{BitDepth, ColorType, Decoder, Encoder};

/// Encode an image as an 8-bit RGB PNG.
pub fn encode_img(img: &RgbImage) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, img.width(), img.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.data())?;
    writer.finish()?;
    Ok(out)
}

/// Read an 8-bit RGB or RGBA PNG back into an [`RgbImage`]. Alpha is
/// stripped; anything else is rejected.
pub fn parse_img(bytes: &[u8]) -> Result<RgbImage, Error> {
    let decoder = Decoder::new(bytes);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());
    debug!(
        "parsed {}x{} png, {:?} {:?}",
        info.width, info.height, info.color_type, info.bit_depth
    );

    if info.bit_depth != BitDepth::Eight {
        return Err(Error::UnsupportedPng(format!(
            "only 8-bit channels are supported, got {:?}",
            info.bit_depth
        )));
    }
    let rgb = match info.color_type {
        ColorType::Rgb => buf,
        ColorType::Rgba => buf
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect(),
        other => {
            return Err(Error::UnsupportedPng(format!(
                "color type {other:?} is not supported"
            )));
        }
    };
    RgbImage::new(info.width, info.height, rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_lossless() {
        let data: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8 * 4).collect();
        let img = RgbImage::new(2, 3, data).unwrap();
        let encoded = encode_img(&img).unwrap();
        let parsed = parse_img(&encoded).unwrap();
        assert_eq!(parsed, img);
    }

    #[test]
    fn rgba_alpha_is_stripped() {
        let mut bytes = Vec::new();
        let mut encoder = Encoder::new(&mut bytes, 2, 1);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&[10, 20, 30, 255, 40, 50, 60, 128])
            .unwrap();
        writer.finish().unwrap();

        let img = parse_img(&bytes).unwrap();
        assert_eq!(img.pixel(0, 0), (10, 20, 30));
        assert_eq!(img.pixel(1, 0), (40, 50, 60));
    }

    #[test]
    fn grayscale_png_is_rejected() {
        let mut bytes = Vec::new();
        let mut encoder = Encoder::new(&mut bytes, 1, 1);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[100]).unwrap();
        writer.finish().unwrap();

        assert!(matches!(parse_img(&bytes), Err(Error::UnsupportedPng(_))));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            parse_img(b"not a png"),
            Err(Error::PngDecode(_))
        ));
    }
}
