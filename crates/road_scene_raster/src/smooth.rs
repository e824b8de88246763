//! Kurvenglättung über quadratische B-Splines.
//!
//! Die Kontrollpunkte wirken als Bezier-Anfasser, die Kurve läuft durch die
//! Mittelpunkte benachbarter Kontrollpunkte. Offene Kurven beginnen und enden
//! exakt im ersten bzw. letzten Kontrollpunkt.

use glam::Vec2;

/// Glättet eine offene Kontrollpunktfolge.
///
/// `samples_per_segment`: Anzahl erzeugter Punkte pro Bezier-Segment (ohne Startpunkt).
/// Bei weniger als drei Punkten wird die Folge unverändert zurückgegeben.
pub fn smooth_open(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let n = points.len();
    if n < 3 || samples_per_segment == 0 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity((n - 2) * samples_per_segment + 1);
    result.push(points[0]);

    for i in 0..n - 2 {
        let start = if i == 0 {
            points[0]
        } else {
            points[i].lerp(points[i + 1], 0.5)
        };
        let control = points[i + 1];
        let end = if i == n - 3 {
            points[n - 1]
        } else {
            points[i + 1].lerp(points[i + 2], 0.5)
        };
        push_quadratic(&mut result, start, control, end, samples_per_segment);
    }

    result
}

/// Glättet einen geschlossenen Kontrollpunkt-Ring.
///
/// Das Ergebnis ist selbst ein Ring (der Startpunkt wird am Ende nicht wiederholt).
pub fn smooth_closed(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let n = points.len();
    if n < 3 || samples_per_segment == 0 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(n * samples_per_segment);
    result.push(points[0].lerp(points[1], 0.5));

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        push_quadratic(
            &mut result,
            a.lerp(b, 0.5),
            b,
            b.lerp(c, 0.5),
            samples_per_segment,
        );
    }

    // Letztes Segment endet wieder im Startpunkt
    result.pop();
    result
}

fn push_quadratic(out: &mut Vec<Vec2>, start: Vec2, control: Vec2, end: Vec2, samples: usize) {
    for step in 1..=samples {
        let t = step as f32 / samples as f32;
        let u = 1.0 - t;
        out.push(start * (u * u) + control * (2.0 * u * t) + end * (t * t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_curve_keeps_endpoints() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(30.0, 20.0),
            Vec2::new(40.0, 0.0),
        ];
        let smooth = smooth_open(&points, 8);

        assert_eq!(smooth.first().copied(), Some(points[0]));
        assert_eq!(smooth.last().copied(), Some(points[3]));
        assert_eq!(smooth.len(), 2 * 8 + 1);
    }

    #[test]
    fn open_curve_passes_through_inner_midpoints() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(30.0, 20.0),
            Vec2::new(40.0, 0.0),
        ];
        let smooth = smooth_open(&points, 4);

        // Ende des ersten Segments = Mittelpunkt von p1 und p2
        assert_eq!(smooth[4], Vec2::new(20.0, 20.0));
    }

    #[test]
    fn closed_curve_is_a_ring_without_duplicate() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let ring = smooth_closed(&square, 5);

        assert_eq!(ring.len(), 4 * 5);
        assert_eq!(ring[0], Vec2::new(5.0, 0.0));
        assert_ne!(ring.last().copied(), Some(ring[0]));
    }

    #[test]
    fn short_input_is_returned_unchanged() {
        let line = [Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)];
        assert_eq!(smooth_open(&line, 6), line.to_vec());
        assert_eq!(smooth_closed(&line, 6), line.to_vec());
    }
}
