//! Bitmap-Text für Fahrzeug-Labels.
//!
//! Eingebetteter 5×7-Font, beschränkt auf den Zeichenvorrat der Labels
//! (Ziffern, Gross-/Kleinbuchstaben der Rollen-Labels, Leerzeichen, `#`).
//! Unbekannte Zeichen werden als Leerraum gesetzt.

use glam::Vec2;
use image::{Rgba, RgbaImage};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Zeichnet `text` mit der oberen linken Ecke bei `(x, y)`.
///
/// `scale` vergrössert jedes Font-Pixel auf `scale × scale` Bildpixel.
pub fn draw_text(image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>, scale: u32) {
    let scale = scale.max(1);
    let advance = ((GLYPH_WIDTH + 1) * scale) as i32;
    let mut cursor_x = x;

    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            draw_glyph(image, cursor_x, y, rows, color, scale);
        }
        cursor_x += advance;
    }
}

/// Zeichnet `text` zentriert um `center`.
pub fn draw_text_centered(
    image: &mut RgbaImage,
    center: Vec2,
    text: &str,
    color: Rgba<u8>,
    scale: u32,
) {
    let w = text_width(text, scale) as f32;
    let h = text_height(scale) as f32;
    let x = (center.x - w / 2.0).round() as i32;
    let y = (center.y - h / 2.0).round() as i32;
    draw_text(image, x, y, text, color, scale);
}

/// Pixelbreite eines Texts (ohne Abstand nach dem letzten Zeichen).
pub fn text_width(text: &str, scale: u32) -> u32 {
    let scale = scale.max(1);
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * GLYPH_WIDTH * scale + (chars - 1) * scale
}

/// Pixelhöhe einer Textzeile.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale.max(1)
}

fn draw_glyph(image: &mut RgbaImage, x: i32, y: i32, rows: &[&str; 7], color: Rgba<u8>, scale: u32) {
    let (img_w, img_h) = (image.width() as i32, image.height() as i32);
    let s = scale as i32;

    for (row, line) in rows.iter().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            if cell != b'#' {
                continue;
            }
            for sy in 0..s {
                for sx in 0..s {
                    let px = x + col as i32 * s + sx;
                    let py = y + row as i32 * s + sy;
                    if (0..img_w).contains(&px) && (0..img_h).contains(&py) {
                        image.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

fn glyph(ch: char) -> Option<&'static [&'static str; 7]> {
    GLYPHS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, rows)| rows)
}

#[rustfmt::skip]
static GLYPHS: &[(char, [&str; 7])] = &[
    ('0', [" ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### "]),
    ('1', ["  #  ", " ##  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### "]),
    ('2', [" ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####"]),
    ('3', [" ### ", "#   #", "    #", "  ## ", "    #", "#   #", " ### "]),
    ('4', ["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "]),
    ('5', ["#####", "#    ", "#### ", "    #", "    #", "#   #", " ### "]),
    ('6', ["  ## ", " #   ", "#    ", "#### ", "#   #", "#   #", " ### "]),
    ('7', ["#####", "    #", "   # ", "  #  ", " #   ", " #   ", " #   "]),
    ('8', [" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "]),
    ('9', [" ### ", "#   #", "#   #", " ####", "    #", "   # ", " ##  "]),
    ('#', [" # # ", " # # ", "#####", " # # ", "#####", " # # ", " # # "]),
    ('C', [" ### ", "#   #", "#    ", "#    ", "#    ", "#   #", " ### "]),
    ('E', ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#####"]),
    ('G', [" ### ", "#   #", "#    ", "# ###", "#   #", "#   #", " ####"]),
    ('N', ["#   #", "##  #", "# # #", "#  ##", "#   #", "#   #", "#   #"]),
    ('O', [" ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "]),
    ('P', ["#### ", "#   #", "#   #", "#### ", "#    ", "#    ", "#    "]),
    ('e', ["     ", "     ", " ### ", "#   #", "#####", "#    ", " ### "]),
    ('g', ["     ", "     ", " ####", "#   #", " ####", "    #", " ### "]),
    ('o', ["     ", "     ", " ### ", "#   #", "#   #", "#   #", " ### "]),
];

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn text_width_matches_glyph_advance() {
        assert_eq!(text_width("NPC 2", 1), 29);
        assert_eq!(text_width("ego", 2), 34);
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_height(2), 14);
    }

    #[test]
    fn every_glyph_is_five_by_seven() {
        for (ch, rows) in GLYPHS {
            for row in rows {
                assert_eq!(row.len(), 5, "Glyph '{ch}' hat falsche Breite");
            }
        }
    }

    #[test]
    fn draw_text_sets_pixels_of_glyph() {
        let mut img = RgbaImage::new(10, 10);
        draw_text(&mut img, 0, 0, "1", WHITE, 1);

        // Oberste Zeile von '1': nur mittlere Spalte gesetzt
        assert_eq!(*img.get_pixel(2, 0), WHITE);
        assert_ne!(*img.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn drawing_outside_bounds_does_not_panic() {
        let mut img = RgbaImage::new(4, 4);
        draw_text(&mut img, -8, -3, "NPC 12", WHITE, 2);
        draw_text_centered(&mut img, Vec2::new(100.0, 100.0), "ego", WHITE, 1);
    }
}
