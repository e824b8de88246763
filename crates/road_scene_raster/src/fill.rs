//! Flächenfüllung: Rechtecke, Polygone (Scanline, Even-Odd) und Kreisscheiben.

use glam::Vec2;
use image::{Rgba, RgbaImage};

/// Füllt das komplette Bild mit einer Farbe.
pub fn clear(image: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in image.pixels_mut() {
        *pixel = color;
    }
}

/// Füllt ein achsenparalleles Rechteck zwischen `min` und `max`.
///
/// Gesetzt werden alle Pixel, deren Mittelpunkt in `[min, max)` liegt.
/// Vertauschte Ecken werden normalisiert, Teile ausserhalb des Bilds verworfen.
pub fn fill_rect(image: &mut RgbaImage, min: Vec2, max: Vec2, color: Rgba<u8>) {
    let lo = min.min(max);
    let hi = min.max(max);

    let Some((x0, x1)) = covered_span(lo.x, hi.x, image.width()) else {
        return;
    };
    let Some((y0, y1)) = covered_span(lo.y, hi.y, image.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
}

/// Füllt ein beliebiges (auch konkaves) Polygon nach der Even-Odd-Regel.
///
/// Das Polygon wird implizit vom letzten zum ersten Punkt geschlossen.
pub fn fill_polygon(image: &mut RgbaImage, points: &[Vec2], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let (min_y, max_y) = points
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });

    let Some((row_start, row_end)) = covered_span(min_y, max_y, image.height()) else {
        return;
    };

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for row in row_start..row_end {
        let scan_y = row as f32 + 0.5;
        crossings.clear();

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            // Halboffenes Intervall verhindert doppelte Zählung an Ecken
            let spans_row = (a.y <= scan_y && scan_y < b.y) || (b.y <= scan_y && scan_y < a.y);
            if spans_row {
                let t = (scan_y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }

        crossings.sort_by(f32::total_cmp);

        for pair in crossings.chunks_exact(2) {
            if let Some((x0, x1)) = covered_span(pair[0], pair[1], image.width()) {
                for x in x0..x1 {
                    image.put_pixel(x, row, color);
                }
            }
        }
    }
}

/// Füllt eine Kreisscheibe um `center` mit Radius `radius`.
pub fn fill_disc(image: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }

    // Obergrenze um 1 erweitert: Mittelpunkte genau auf dem Rand zählen dazu
    let Some((x0, x1)) = covered_span(center.x - radius, center.x + radius + 1.0, image.width())
    else {
        return;
    };
    let Some((y0, y1)) = covered_span(center.y - radius, center.y + radius + 1.0, image.height())
    else {
        return;
    };

    let radius_sq = radius * radius;
    for y in y0..y1 {
        for x in x0..x1 {
            let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if pixel_center.distance_squared(center) <= radius_sq {
                image.put_pixel(x, y, color);
            }
        }
    }
}

/// Pixelbereich `[start, end)`, dessen Mittelpunkte in `[lo, hi)` liegen,
/// auf `[0, limit)` beschnitten. `None` wenn leer.
pub(crate) fn covered_span(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }

    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(limit as f32);
    if start >= end {
        return None;
    }

    Some((start as u32, end as u32))
}
