pub mod app;
pub mod key;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new_rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new_rgb(0x00, 0x00, 0x00);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Store the colour at pixel `index` of an RGB24 buffer. Out-of-range
    /// pixels are ignored.
    #[inline]
    pub fn write_rgb24(&self, buffer: &mut [u8], index: usize) {
        if let Some(px) = buffer.get_mut(index * 3..index * 3 + 3) {
            px.copy_from_slice(&[self.r, self.g, self.b]);
        }
    }
}
