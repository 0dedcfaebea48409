/// Convert one sRGB channel in `[0, 1]` to linear light.
#[must_use]
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB triple to linear light.
#[must_use]
pub fn srgb_to_linear(rgb: [f32; 3]) -> [f32; 3] {
    [
        srgb_channel_to_linear(rgb[0]),
        srgb_channel_to_linear(rgb[1]),
        srgb_channel_to_linear(rgb[2]),
    ]
}

/// Linearize an sRGB triple into a wgpu clear color.
#[must_use]
pub fn clear_color(rgb: [f32; 3]) -> wgpu::Color {
    let linear = srgb_to_linear(rgb);
    wgpu::Color {
        r: f64::from(linear[0]),
        g: f64::from(linear[1]),
        b: f64::from(linear[2]),
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(srgb_channel_to_linear(0.0), 0.0);
        assert!((srgb_channel_to_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn linear_is_below_srgb_midtones() {
        // Gamma expansion darkens midtones
        let mid = srgb_channel_to_linear(0.5);
        assert!(mid > 0.0 && mid < 0.5);
    }

    #[test]
    fn conversion_is_monotonic() {
        let mut prev = -1.0;
        for i in 0..=100 {
            let v = srgb_channel_to_linear(i as f32 / 100.0);
            assert!(v > prev);
            prev = v;
        }
    }
}
