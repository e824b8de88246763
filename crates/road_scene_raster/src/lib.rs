//! `road_scene_raster`: CPU-Zeichenprimitive für den Road Scene Editor.
//!
//! Zeichnet direkt in `image::RgbaImage`-Puffer:
//! - gefüllte Rechtecke, Polygone und Kreisscheiben
//! - Linien, Polylinien und Strichmuster mit Linienbreite
//! - Kurvenglättung über quadratische B-Splines
//! - eingebetteter Bitmap-Font für kurze Labels
//!
//! Alle Primitive sind deterministisch: Ein Pixel wird genau dann gesetzt,
//! wenn sein Mittelpunkt in der Fläche liegt. Kein Anti-Aliasing, kein
//! Blending. Identische Eingaben ergeben identische Pixel.
//!
//! # Beispiel
//! ```
//! use glam::Vec2;
//! use image::{Rgba, RgbaImage};
//! use road_scene_raster::{fill_rect, stroke_polyline};
//!
//! let mut image = RgbaImage::new(64, 32);
//! fill_rect(&mut image, Vec2::new(4.0, 4.0), Vec2::new(60.0, 28.0), Rgba([40, 40, 40, 255]));
//! stroke_polyline(
//!     &mut image,
//!     &[Vec2::new(4.0, 16.0), Vec2::new(60.0, 16.0)],
//!     2.0,
//!     Rgba([255, 255, 255, 255]),
//! );
//! assert_eq!(*image.get_pixel(10, 16), Rgba([255, 255, 255, 255]));
//! ```

pub mod fill;
pub mod smooth;
pub mod stroke;
pub mod text;

pub use fill::{clear, fill_disc, fill_polygon, fill_rect};
pub use smooth::{smooth_closed, smooth_open};
pub use stroke::{stroke_dashed, stroke_polygon, stroke_polyline, stroke_rect, Dash};
pub use text::{draw_text, draw_text_centered, text_height, text_width};
