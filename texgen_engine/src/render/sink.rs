use crate::core::types::GreyImage;
use crate::render::pixel::{GridPixel, GreyLevel};

/// The drawing surface a grid render writes into, one pixel at a time
pub trait PixelSink {
    fn fill_pixel(&mut self, pixel: &GridPixel);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn fill_pixel(&mut self, pixel: &GridPixel) { (**self).fill_pixel(pixel) }
}

/// Pixels outside the image bounds are dropped
impl PixelSink for GreyImage {
    fn fill_pixel(&mut self, pixel: &GridPixel) {
        if let Some(px) = self.get_pixel_mut_checked(pixel.x, pixel.y) {
            *px = pixel.colour.into();
        }
    }
}

/// Records every write in order
impl PixelSink for Vec<GridPixel> {
    fn fill_pixel(&mut self, pixel: &GridPixel) { self.push(*pixel); }
}

/// Adapts a `(x, y, level)` callback into a [PixelSink]
#[derive(Copy, Clone, Debug)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(u32, u32, GreyLevel)> PixelSink for FnSink<F> {
    fn fill_pixel(&mut self, pixel: &GridPixel) { (self.0)(pixel.x, pixel.y, pixel.colour) }
}
