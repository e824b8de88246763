//! Linien mit Breite: Polylinien, geschlossene Umrisse und Strichmuster.
//!
//! Jedes Segment wird als Viereck gefüllt (stumpfe Enden), innere Knicke
//! erhalten eine runde Verbindung mit Radius `width / 2`.

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::fill::{fill_disc, fill_polygon};

/// Strichmuster: `on` Pixel gezeichnet, `off` Pixel Lücke (entlang des Pfads).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    /// Länge eines gezeichneten Abschnitts
    pub on: f32,
    /// Länge einer Lücke
    pub off: f32,
}

impl Dash {
    /// Erstellt ein Strichmuster.
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }
}

/// Zeichnet eine offene Polylinie.
pub fn stroke_polyline(image: &mut RgbaImage, points: &[Vec2], width: f32, color: Rgba<u8>) {
    stroke_path(image, points, width, color, false);
}

/// Zeichnet den geschlossenen Umriss eines Polygons.
pub fn stroke_polygon(image: &mut RgbaImage, points: &[Vec2], width: f32, color: Rgba<u8>) {
    stroke_path(image, points, width, color, true);
}

/// Zeichnet den Umriss eines achsenparallelen Rechtecks, zentriert auf den Kanten.
pub fn stroke_rect(image: &mut RgbaImage, min: Vec2, max: Vec2, width: f32, color: Rgba<u8>) {
    stroke_polygon(image, &rect_corners(min, max), width, color);
}

/// Zeichnet einen Pfad mit Strichmuster.
///
/// Das Muster läuft über Knickpunkte hinweg weiter; bei `closed` wird auch die
/// Kante vom letzten zum ersten Punkt gestrichelt. Ein Muster ohne positive
/// `on`-Länge fällt auf eine durchgezogene Linie zurück.
pub fn stroke_dashed(
    image: &mut RgbaImage,
    points: &[Vec2],
    closed: bool,
    width: f32,
    dash: Dash,
    color: Rgba<u8>,
) {
    if dash.on <= 0.0 || dash.off < 0.0 {
        stroke_path(image, points, width, color, closed);
        return;
    }

    let path = path_points(points, closed);
    let Some(&first) = path.first() else {
        return;
    };

    let mut drawing = true;
    let mut remaining = dash.on;
    let mut piece = vec![first];

    for window in path.windows(2) {
        let (mut a, b) = (window[0], window[1]);
        let mut segment_len = a.distance(b);

        while segment_len > remaining {
            let split = a + (b - a) * (remaining / segment_len);
            if drawing {
                piece.push(split);
                stroke_path(image, &piece, width, color, false);
                piece.clear();
            } else {
                piece.push(split);
            }
            drawing = !drawing;
            segment_len -= remaining;
            a = split;
            remaining = if drawing { dash.on } else { dash.off };
        }

        remaining -= segment_len;
        if drawing {
            piece.push(b);
        }
    }

    if drawing && piece.len() >= 2 {
        stroke_path(image, &piece, width, color, false);
    }
}

/// Gemeinsamer Kern für offene und geschlossene Pfade.
fn stroke_path(image: &mut RgbaImage, points: &[Vec2], width: f32, color: Rgba<u8>, closed: bool) {
    if width <= 0.0 || points.len() < 2 {
        return;
    }

    let path = path_points(points, closed);
    let half = width / 2.0;

    for window in path.windows(2) {
        stroke_segment(image, window[0], window[1], half, color);
    }

    // Runde Verbindungen an inneren Knicken (geschlossen: an allen Ecken)
    let joints = if closed {
        &points[..]
    } else {
        &points[1..points.len() - 1]
    };
    if width > 2.0 {
        for &joint in joints {
            fill_disc(image, joint, half, color);
        }
    }
}

fn stroke_segment(image: &mut RgbaImage, a: Vec2, b: Vec2, half_width: f32, color: Rgba<u8>) {
    let direction = b - a;
    let Some(unit) = direction.try_normalize() else {
        return;
    };
    let normal = unit.perp() * half_width;
    fill_polygon(image, &[a + normal, b + normal, b - normal, a - normal], color);
}

fn path_points(points: &[Vec2], closed: bool) -> Vec<Vec2> {
    let mut path = points.to_vec();
    if closed && points.len() > 2 {
        path.push(points[0]);
    }
    path
}

/// Ecken im Uhrzeigersinn (Bildkoordinaten), beginnend oben links.
pub(crate) fn rect_corners(min: Vec2, max: Vec2) -> [Vec2; 4] {
    [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ]
}
