//! PNG screenshots of a rendered screen.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context;
use log::debug;
use zxgfx::core::render::{render_rgb24, Frame};
use zxgfx::DisplayFile;

/// Render `screen` and save it as an 8-bit RGB PNG, `scale` times the
/// Spectrum resolution.
pub fn save_png(
    screen: &DisplayFile,
    path: &Path,
    scale: u32,
    flash_phase: bool,
) -> anyhow::Result<()> {
    let scale = scale.max(1);
    let frame = render_rgb24(screen, flash_phase);
    let (width, height) = (Frame::WIDTH * scale, Frame::HEIGHT * scale);

    debug!("writing {width}x{height} png to {}", path.display());

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    writer.write_image_data(&upscale(frame.as_bytes(), scale))?;
    writer.finish()?;
    Ok(())
}

/// Repeat every RGB pixel `scale` times across and every row `scale` times down.
fn upscale(rgb: &[u8], scale: u32) -> Vec<u8> {
    let scale = scale as usize;
    let row_len = Frame::WIDTH as usize * 3;
    let mut out = Vec::with_capacity(rgb.len() * scale * scale);

    for row in rgb.chunks_exact(row_len) {
        let start = out.len();
        for pixel in row.chunks_exact(3) {
            for _ in 0..scale {
                out.extend_from_slice(pixel);
            }
        }
        for _ in 1..scale {
            out.extend_from_within(start..start + row_len * scale);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upscale() {
        let mut row = vec![0u8; Frame::WIDTH as usize * 3];
        row[..3].copy_from_slice(&[1, 2, 3]);

        let out = upscale(&row, 2);
        assert_eq!(out.len(), row.len() * 4);
        assert_eq!(&out[..9], &[1, 2, 3, 1, 2, 3, 0, 0, 0]);
        // second copy of the row
        assert_eq!(&out[row.len() * 2..row.len() * 2 + 6], &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_upscale_one_is_identity() {
        let row: Vec<u8> = (0..Frame::WIDTH as usize * 3).map(|i| i as u8).collect();
        assert_eq!(upscale(&row, 1), row);
    }
}
