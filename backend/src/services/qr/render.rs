//! QR painter.
//!
//! Turns payload text plus `QrStyleOptions` into an RGBA canvas. The
//! module matrix always comes from the `qrcode` encoder at error
//! correction level H; the style variant decides only how each dark
//! module is painted. Borders are drawn before the modules so the modules
//! layer on top.

use common::model::qr::{QrBorder, QrBorderShape, QrStyle, QrStyleOptions};
use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};

/// Quiet-zone width on each edge, in modules.
const QUIET_ZONE_MODULES: u32 = 4;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Encodes `payload` at level H and returns the dark-module grid as a
/// row-major boolean vector plus its edge width in modules.
///
/// A payload beyond level-H capacity is reported to the caller; it must
/// never degrade into a blank or corrupt image.
pub fn encode_matrix(payload: &str) -> Result<(Vec<bool>, usize), String> {
    if payload.is_empty() {
        return Err("payload must not be empty".to_string());
    }
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
        .map_err(|e| e.to_string())?;
    let width = code.width();
    let dark = code
        .to_colors()
        .iter()
        .map(|c| *c == qrcode::Color::Dark)
        .collect();
    Ok((dark, width))
}

/// Renders `payload` as a square `size × size` canvas according to
/// `options`: background first, then the optional border, then the dark
/// modules in the selected style.
pub fn render_qr(payload: &str, options: &QrStyleOptions) -> Result<RgbaImage, String> {
    options.validate()?;
    let (dark, width) = encode_matrix(payload)?;

    let size = options.size;
    let dark_color = parse_hex_color(&options.dark).unwrap_or(BLACK);
    let light_color = parse_hex_color(&options.light).unwrap_or(WHITE);
    let mut canvas = RgbaImage::from_pixel(size, size, light_color);

    if let Some(border) = &options.border {
        paint_border(&mut canvas, border, dark_color);
    }

    let total = width as f64 + 2.0 * QUIET_ZONE_MODULES as f64;
    let pitch = size as f64 / total;
    let origin = QUIET_ZONE_MODULES as f64 * pitch;
    let center = size as f64 / 2.0;
    // Modules of the circular variant must stay inside the bordered mask.
    let mask_radius = center
        - options
            .border
            .as_ref()
            .map(|b| b.width as f64)
            .unwrap_or(0.0);

    for my in 0..width {
        for mx in 0..width {
            if !dark[my * width + mx] {
                continue;
            }
            let x0 = origin + mx as f64 * pitch;
            let y0 = origin + my as f64 * pitch;
            match options.style {
                QrStyle::Standard | QrStyle::Square => {
                    fill_rect(&mut canvas, x0, y0, pitch, pitch, dark_color);
                }
                QrStyle::Dot => {
                    fill_circle(
                        &mut canvas,
                        x0 + pitch / 2.0,
                        y0 + pitch / 2.0,
                        pitch / 2.0,
                        dark_color,
                    );
                }
                QrStyle::Rounded => {
                    fill_rounded_rect(&mut canvas, x0, y0, pitch, pitch, pitch * 0.35, dark_color);
                }
                QrStyle::Circular => {
                    if cell_within_circle(x0, y0, pitch, center, center, mask_radius) {
                        fill_rect(&mut canvas, x0, y0, pitch, pitch, dark_color);
                    }
                }
            }
        }
    }

    Ok(canvas)
}

/// Encodes an RGBA canvas as a PNG byte stream.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, String> {
    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(|e| e.to_string())?;
        writer
            .write_image_data(canvas.as_raw())
            .map_err(|e| e.to_string())?;
    }
    Ok(bytes)
}

fn paint_border(canvas: &mut RgbaImage, border: &QrBorder, fallback: Rgba<u8>) {
    let color = parse_hex_color(&border.color).unwrap_or(fallback);
    let (size, _) = canvas.dimensions();
    let s = size as f64;
    let w = (border.width as f64).min(s / 2.0);

    match border.shape {
        QrBorderShape::Rectangle => {
            fill_rect(canvas, 0.0, 0.0, s, w, color);
            fill_rect(canvas, 0.0, s - w, s, w, color);
            fill_rect(canvas, 0.0, 0.0, w, s, color);
            fill_rect(canvas, s - w, 0.0, w, s, color);
        }
        QrBorderShape::Rounded => {
            let radius = (s / 10.0).max(w * 1.5);
            let inner_radius = (radius - w).max(0.0);
            for py in 0..size {
                for px in 0..size {
                    let x = px as f64 + 0.5;
                    let y = py as f64 + 0.5;
                    let in_outer = inside_rounded_rect(x, y, 0.0, 0.0, s, s, radius);
                    let in_inner =
                        inside_rounded_rect(x, y, w, w, s - 2.0 * w, s - 2.0 * w, inner_radius);
                    if in_outer && !in_inner {
                        canvas.put_pixel(px, py, color);
                    }
                }
            }
        }
        QrBorderShape::Circle => {
            let c = s / 2.0;
            let outer_sq = c * c;
            let inner = (c - w).max(0.0);
            let inner_sq = inner * inner;
            for py in 0..size {
                for px in 0..size {
                    let dx = px as f64 + 0.5 - c;
                    let dy = py as f64 + 0.5 - c;
                    let dist_sq = dx * dx + dy * dy;
                    if dist_sq <= outer_sq && dist_sq >= inner_sq {
                        canvas.put_pixel(px, py, color);
                    }
                }
            }
        }
    }
}

fn fill_rect(canvas: &mut RgbaImage, x0: f64, y0: f64, w: f64, h: f64, color: Rgba<u8>) {
    let (cw, ch) = canvas.dimensions();
    let x_start = x0.round().max(0.0) as u32;
    let y_start = y0.round().max(0.0) as u32;
    let x_end = ((x0 + w).round().max(0.0) as u32).min(cw);
    let y_end = ((y0 + h).round().max(0.0) as u32).min(ch);
    for py in y_start..y_end {
        for px in x_start..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

fn fill_circle(canvas: &mut RgbaImage, cx: f64, cy: f64, r: f64, color: Rgba<u8>) {
    let (cw, ch) = canvas.dimensions();
    let x_start = (cx - r).floor().max(0.0) as u32;
    let y_start = (cy - r).floor().max(0.0) as u32;
    let x_end = (((cx + r).ceil()).max(0.0) as u32).min(cw);
    let y_end = (((cy + r).ceil()).max(0.0) as u32).min(ch);
    let r_sq = r * r;
    for py in y_start..y_end {
        for px in x_start..x_end {
            let dx = px as f64 + 0.5 - cx;
            let dy = py as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= r_sq {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
    radius: f64,
    color: Rgba<u8>,
) {
    let (cw, ch) = canvas.dimensions();
    let x_start = x0.floor().max(0.0) as u32;
    let y_start = y0.floor().max(0.0) as u32;
    let x_end = ((x0 + w).ceil().max(0.0) as u32).min(cw);
    let y_end = ((y0 + h).ceil().max(0.0) as u32).min(ch);
    for py in y_start..y_end {
        for px in x_start..x_end {
            let x = px as f64 + 0.5;
            let y = py as f64 + 0.5;
            if inside_rounded_rect(x, y, x0, y0, w, h, radius) {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

/// Point-in-rounded-rect test: the point must be within `radius` of the
/// rectangle inset by `radius` on every side.
fn inside_rounded_rect(px: f64, py: f64, x0: f64, y0: f64, w: f64, h: f64, radius: f64) -> bool {
    if px < x0 || px > x0 + w || py < y0 || py > y0 + h {
        return false;
    }
    let r = radius.min(w / 2.0).min(h / 2.0);
    let cx = px.clamp(x0 + r, x0 + w - r);
    let cy = py.clamp(y0 + r, y0 + h - r);
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r * r
}

/// True when the whole module cell lies inside the circle, corner
/// included, so no painted pixel can bleed outside the mask.
fn cell_within_circle(x0: f64, y0: f64, pitch: f64, cx: f64, cy: f64, radius: f64) -> bool {
    let radius_sq = radius * radius;
    [
        (x0, y0),
        (x0 + pitch, y0),
        (x0, y0 + pitch),
        (x0 + pitch, y0 + pitch),
    ]
    .iter()
    .all(|(px, py)| {
        let dx = px - cx;
        let dy = py - cy;
        dx * dx + dy * dy <= radius_sq
    })
}

/// Parses `#RGB` / `#RRGGBB` hex colors, leading `#` optional. Invalid
/// input yields `None` and the caller falls back to black or white.
fn parse_hex_color(value: &str) -> Option<Rgba<u8>> {
    let hex = value.trim().trim_start_matches('#');
    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let digit = c.to_digit(16)? as u8;
                channels[i] = digit * 16 + digit;
            }
            Some(Rgba([channels[0], channels[1], channels[2], 255]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgba([r, g, b, 255]))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = "https://example.com/p/42";

    fn options(style: QrStyle) -> QrStyleOptions {
        QrStyleOptions {
            style,
            size: 256,
            ..QrStyleOptions::default()
        }
    }

    fn count_pixels(canvas: &RgbaImage, color: Rgba<u8>) -> usize {
        canvas.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn empty_payload_is_an_error() {
        assert!(render_qr("", &options(QrStyle::Standard)).is_err());
    }

    #[test]
    fn payload_beyond_level_h_capacity_is_surfaced() {
        let oversized = "x".repeat(3000);
        let err = render_qr(&oversized, &options(QrStyle::Standard));
        assert!(err.is_err());
    }

    #[test]
    fn standard_and_square_render_identically() {
        let standard = render_qr(PAYLOAD, &options(QrStyle::Standard)).unwrap();
        let square = render_qr(PAYLOAD, &options(QrStyle::Square)).unwrap();
        assert_eq!(standard.as_raw(), square.as_raw());
    }

    #[test]
    fn styling_reuses_the_same_module_matrix() {
        // The finder-pattern center module (3,3) is dark in every QR code;
        // its cell center must be painted in every non-clipping variant.
        let (dark, width) = encode_matrix(PAYLOAD).unwrap();
        assert!(dark[3 * width + 3]);

        for style in [QrStyle::Standard, QrStyle::Dot, QrStyle::Rounded] {
            let canvas = render_qr(PAYLOAD, &options(style)).unwrap();
            let pitch = 256.0 / (width as f64 + 2.0 * QUIET_ZONE_MODULES as f64);
            let px = (QUIET_ZONE_MODULES as f64 * pitch + 3.5 * pitch) as u32;
            assert_eq!(*canvas.get_pixel(px, px), BLACK, "style {:?}", style);
        }
    }

    #[test]
    fn dot_style_paints_less_ink_than_standard() {
        let standard = render_qr(PAYLOAD, &options(QrStyle::Standard)).unwrap();
        let dot = render_qr(PAYLOAD, &options(QrStyle::Dot)).unwrap();
        assert!(count_pixels(&dot, BLACK) < count_pixels(&standard, BLACK));
        assert!(count_pixels(&dot, BLACK) > 0);
    }

    #[test]
    fn circular_modules_stay_inside_the_bordered_mask() {
        let border_width = 8u32;
        let opts = QrStyleOptions {
            style: QrStyle::Circular,
            size: 256,
            dark: "#000000".to_string(),
            light: "#FFFFFF".to_string(),
            border: Some(QrBorder {
                shape: QrBorderShape::Circle,
                color: "#FF0000".to_string(),
                width: border_width,
            }),
        };
        let canvas = render_qr(PAYLOAD, &opts).unwrap();

        let center = 128.0;
        let mask_radius = center - border_width as f64;
        for (px, py, pixel) in canvas.enumerate_pixels() {
            if *pixel == BLACK {
                let dx = px as f64 + 0.5 - center;
                let dy = py as f64 + 0.5 - center;
                assert!(
                    (dx * dx + dy * dy).sqrt() <= mask_radius + 0.75,
                    "module pixel ({px},{py}) bleeds outside the mask"
                );
            }
        }
        // The border itself must have been painted.
        assert!(count_pixels(&canvas, Rgba([255, 0, 0, 255])) > 0);
    }

    #[test]
    fn invalid_hex_colors_fall_back_to_black_on_white() {
        let opts = QrStyleOptions {
            dark: "#notahex".to_string(),
            light: "also-bad".to_string(),
            ..options(QrStyle::Standard)
        };
        let canvas = render_qr(PAYLOAD, &opts).unwrap();
        assert!(count_pixels(&canvas, BLACK) > 0);
        assert!(count_pixels(&canvas, WHITE) > 0);
    }

    #[test]
    fn short_hex_colors_are_accepted() {
        assert_eq!(parse_hex_color("#fff"), Some(Rgba([255, 255, 255, 255])));
        assert_eq!(parse_hex_color("000"), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn png_output_carries_the_signature() {
        let canvas = render_qr(PAYLOAD, &options(QrStyle::Standard)).unwrap();
        let bytes = encode_png(&canvas).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
