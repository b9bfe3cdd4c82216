use super::config::EncodingConfig;

/// The largest value of a 16-bit sample channel.
pub const CHANNEL_MAX: u32 = u16::MAX as u32;

/// A pixel sample with 16-bit color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Sample {
    pub fn new(r: u16, g: u16, b: u16) -> Sample {
        Sample { r, g, b }
    }

    /// A sample with the same value in all three channels.
    pub fn gray(value: u16) -> Sample {
        Sample::new(value, value, value)
    }

    /// Builds a sample from straight (non-premultiplied) channels, multiplying
    /// each color channel by `a`.
    ///
    /// A fully transparent pixel therefore reads as black.
    pub fn premultiplied(r: u16, g: u16, b: u16, a: u16) -> Sample {
        let premultiply = |c: u16| (u32::from(c) * u32::from(a) / CHANNEL_MAX) as u16;
        Sample::new(premultiply(r), premultiply(g), premultiply(b))
    }

    /// The average of the three channels, truncated.
    pub fn intensity(&self) -> u32 {
        (u32::from(self.r) + u32::from(self.g) + u32::from(self.b)) / 3
    }
}

/// Linearly maps `value` from `[from_min, from_max]` to `[to_min, to_max]`.
///
/// The multiplication happens before the division and every step truncates,
/// so the result is bit-exact for integer inputs.
pub fn remap(value: u128, from_min: u128, from_max: u128, to_min: u128, to_max: u128) -> u128 {
    to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min)
}

/// Returns a mask of the lowest `bits` bits.
///
/// `bits` must be in `1..=64`.
pub fn field_mask(bits: u32) -> u64 {
    u64::MAX >> (u64::BITS - bits)
}

/// Reduces samples to unsigned intensities of a fixed bit depth.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    max: u64,
    invert: bool,
}

impl Quantizer {
    pub fn new(config: &EncodingConfig) -> Quantizer {
        Quantizer {
            max: field_mask(config.color_depth()),
            invert: config.invert(),
        }
    }

    /// The largest value `quantize` can return: `2^depth - 1`.
    pub fn max_value(&self) -> u64 {
        self.max
    }

    /// Quantizes the grayscale intensity of a sample.
    pub fn quantize(&self, sample: Sample) -> u64 {
        let mut intensity = sample.intensity();
        if self.invert {
            intensity = CHANNEL_MAX - intensity;
        }

        let value = remap(
            intensity.into(),
            0,
            CHANNEL_MAX.into(),
            0,
            self.max.into(),
        );
        (value as u64) & self.max
    }
}

#[cfg(test)]
mod test {
    use super::{field_mask, remap, Quantizer, Sample};
    use crate::encoding::{EncodingConfig, ScanDirection};
    use rand::Rng;

    fn quantizer(depth: u32, invert: bool) -> Quantizer {
        let config = EncodingConfig::new(depth, 64, ScanDirection::RowMajor, invert).unwrap();
        Quantizer::new(&config)
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(0, 0, 65535, 0, 15), 0);
        assert_eq!(remap(65535, 0, 65535, 0, 15), 15);
        assert_eq!(remap(32767, 0, 65535, 0, 15), 7);
        assert_eq!(remap(257, 0, 65535, 0, 255), 1);
        assert_eq!(remap(5, 0, 10, 100, 200), 150);
    }

    #[test]
    fn test_field_mask() {
        assert_eq!(field_mask(1), 0b1);
        assert_eq!(field_mask(4), 0xF);
        assert_eq!(field_mask(12), 0xFFF);
        assert_eq!(field_mask(64), u64::MAX);
    }

    #[test]
    fn test_intensity_truncates() {
        assert_eq!(Sample::new(1, 1, 0).intensity(), 0);
        assert_eq!(Sample::new(65535, 65535, 65534).intensity(), 65534);
        assert_eq!(Sample::gray(u16::MAX).intensity(), 65535);
    }

    #[test]
    fn test_premultiplied() {
        assert_eq!(Sample::premultiplied(65535, 1000, 0, 0), Sample::gray(0));
        assert_eq!(
            Sample::premultiplied(65535, 1000, 0, 65535),
            Sample::new(65535, 1000, 0)
        );
        assert_eq!(
            Sample::premultiplied(65535, 65535, 65535, 32768),
            Sample::gray(32768)
        );
    }

    #[test]
    fn test_quantize_extremes() {
        let white = Sample::gray(u16::MAX);
        let black = Sample::gray(0);

        assert_eq!(quantizer(4, false).quantize(white), 0xF);
        assert_eq!(quantizer(4, false).quantize(black), 0);
        assert_eq!(quantizer(4, true).quantize(white), 0);
        assert_eq!(quantizer(4, true).quantize(black), 0xF);

        assert_eq!(quantizer(1, false).quantize(Sample::gray(32768)), 0);
        assert_eq!(quantizer(1, false).quantize(white), 1);
        assert_eq!(quantizer(8, false).quantize(Sample::gray(257)), 1);
        assert_eq!(quantizer(64, false).quantize(white), u64::MAX);
        assert_eq!(quantizer(64, true).quantize(white), 0);
    }

    #[test]
    fn test_quantize_range() {
        let mut rng = rand::thread_rng();
        for depth in 1..=64 {
            let quantizer = quantizer(depth, rng.gen());
            assert_eq!(quantizer.max_value(), field_mask(depth));
            for _ in 0..200 {
                let sample = Sample::new(rng.gen(), rng.gen(), rng.gen());
                assert!(quantizer.quantize(sample) <= quantizer.max_value());
            }
        }
    }

    #[test]
    fn test_inversion_matches_complemented_sample() {
        let mut rng = rand::thread_rng();
        for depth in [1, 2, 3, 4, 8, 13, 16, 32, 64] {
            let inverted = quantizer(depth, true);
            let plain = quantizer(depth, false);
            for _ in 0..500 {
                let value: u16 = rng.gen();
                assert_eq!(
                    inverted.quantize(Sample::gray(value)),
                    plain.quantize(Sample::gray(u16::MAX - value))
                );
            }
        }
    }
}
