//! Placeholder logo capability
//!
//! Rendering the logo needs a PNG encoder, compiled in behind the `logo`
//! feature. Callers check for `None` instead of handling a missing encoder
//! at runtime; without the feature, `/logo.png` answers 404 until a logo
//! file is supplied by other means.

#[cfg(feature = "logo")]
const WIDTH: u32 = 60;
#[cfg(feature = "logo")]
const HEIGHT: u32 = 30;

/// Render the placeholder logo. `None` when the capability is unavailable
/// or encoding fails.
#[cfg(feature = "logo")]
pub fn render_placeholder() -> Option<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, WIDTH, HEIGHT);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().ok()?;
    // Solid red rectangle
    let pixels = [255u8, 0, 0].repeat((WIDTH as usize) * (HEIGHT as usize));
    writer.write_image_data(&pixels).ok()?;
    writer.finish().ok()?;

    Some(out)
}

#[cfg(not(feature = "logo"))]
pub fn render_placeholder() -> Option<Vec<u8>> {
    None
}

#[cfg(all(test, feature = "logo"))]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_png() {
        let image = render_placeholder().expect("encoder available");
        assert_eq!(&image[..8], b"\x89PNG\r\n\x1a\n");
    }
}
