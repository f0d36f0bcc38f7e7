use crate::math::Vec3;
use std::path::Path;

pub const COLOR_CHANNELS: usize = 3;

/// Gamma-2 encodes a linear channel and quantizes it to a byte.
pub fn to_byte(linear: f64) -> u8 {
    let encoded = linear.sqrt().max(0.0).min(0.999);
    (encoded * 256.0) as u8
}

/// An 8-bit RGB image, row-major with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * COLOR_CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_len(&self) -> usize {
        self.width as usize * COLOR_CHANNELS
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * COLOR_CHANNELS
    }
}

// Write output color to a 3 byte pixel slice
pub(crate) fn write_pixel(pixel: &mut [u8], color: Vec3) {
    pixel[0] = to_byte(color.x);
    pixel[1] = to_byte(color.y);
    pixel[2] = to_byte(color.z);
}
