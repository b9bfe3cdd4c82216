use super::quantize::Sample;
use image::{ImageBuffer, Luma, LumaA, Pixel, Primitive, Rgb, Rgba};

/// This trait is implemented by all channel types that can be widened to a
/// 16-bit sample channel.
pub trait Channel: Primitive {
    /// Expands the channel to the full `[0, 65535]` range.
    fn widen(self) -> u16;
}

impl Channel for u8 {
    fn widen(self) -> u16 {
        u16::from(self) * 257
    }
}

impl Channel for u16 {
    fn widen(self) -> u16 {
        self
    }
}

/// Pixels that can be read as a [`Sample`].
pub trait ToSample {
    fn to_sample(&self) -> Sample;
}

impl<T: Channel> ToSample for Luma<T> {
    fn to_sample(&self) -> Sample {
        Sample::gray(self.0[0].widen())
    }
}

impl<T: Channel> ToSample for LumaA<T> {
    fn to_sample(&self) -> Sample {
        let [l, a] = self.0;
        let l = l.widen();
        Sample::premultiplied(l, l, l, a.widen())
    }
}

impl<T: Channel> ToSample for Rgb<T> {
    fn to_sample(&self) -> Sample {
        let [r, g, b] = self.0;
        Sample::new(r.widen(), g.widen(), b.widen())
    }
}

impl<T: Channel> ToSample for Rgba<T> {
    fn to_sample(&self) -> Sample {
        let [r, g, b, a] = self.0;
        Sample::premultiplied(r.widen(), g.widen(), b.widen(), a.widen())
    }
}

/// A two-dimensional grid of samples with random access.
pub trait SampleSource {
    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Returns the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if the coordinates are out of bounds.
    fn sample(&self, x: u32, y: u32) -> Sample;
}

impl<P> SampleSource for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + ToSample,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn sample(&self, x: u32, y: u32) -> Sample {
        self.get_pixel(x, y).to_sample()
    }
}

#[cfg(test)]
mod test {
    use super::{SampleSource, ToSample};
    use crate::encoding::Sample;
    use image::{GrayImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};

    #[test]
    fn test_widen_8_bit() {
        assert_eq!(Luma([0u8]).to_sample(), Sample::gray(0));
        assert_eq!(Luma([1u8]).to_sample(), Sample::gray(257));
        assert_eq!(Luma([255u8]).to_sample(), Sample::gray(65535));
        assert_eq!(
            Rgb([255u8, 0, 128]).to_sample(),
            Sample::new(65535, 0, 128 * 257)
        );
    }

    #[test]
    fn test_16_bit_is_preserved() {
        assert_eq!(Luma([1234u16]).to_sample(), Sample::gray(1234));
        assert_eq!(Rgb([1u16, 2, 3]).to_sample(), Sample::new(1, 2, 3));
    }

    #[test]
    fn test_alpha_is_premultiplied() {
        assert_eq!(Rgba([255u8, 255, 255, 0]).to_sample(), Sample::gray(0));
        assert_eq!(
            Rgba([255u8, 255, 255, 255]).to_sample(),
            Sample::gray(65535)
        );
        assert_eq!(LumaA([255u8, 0]).to_sample(), Sample::gray(0));
        assert_eq!(LumaA([40000u16, 65535]).to_sample(), Sample::gray(40000));
    }

    #[test]
    fn test_image_buffer_source() {
        let mut image = GrayImage::new(3, 2);
        image.put_pixel(2, 1, Luma([255]));

        assert_eq!(SampleSource::dimensions(&image), (3, 2));
        assert_eq!(image.sample(2, 1), Sample::gray(65535));
        assert_eq!(image.sample(0, 0), Sample::gray(0));

        let image: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgba([10, 20, 30, 65535]));
        assert_eq!(image.sample(0, 0), Sample::new(10, 20, 30));
    }
}
