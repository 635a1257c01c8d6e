//! Sun cursor icon.
//!
//! Twelve curved rays around a thick ring, drawn black with a white outline
//! so the cursor stays visible on dark and light backgrounds. Each ray is a
//! closed path of two quadratic curves:
//!
//! ```text
//! M base1 Q control1 tip Q control2 base2 Z
//! ```
//!
//! The ring is drawn twice, before and after the rays, so its black stroke
//! covers the white outline where rays meet it.

use std::fmt::Write as _;

use asset_fs::{NormalizedPath, io};

use crate::error::Result;

/// Geometry and styling of the sun icon. Angles are in degrees, lengths in
/// viewBox units (the viewBox is 100 x 100).
#[derive(Debug, Clone, PartialEq)]
pub struct SunIcon {
    pub cx: f64,
    pub cy: f64,
    pub ring_radius: f64,
    pub ring_stroke: f64,
    /// Distance of the ray bases from the centre.
    pub ray_base_radius: f64,
    pub ray_tip_radius: f64,
    pub control_radius: f64,
    pub rays: u32,
    /// Half the angular width of a ray at its base.
    pub base_half_width: f64,
    /// Tips lean clockwise by this much, giving the swirl.
    pub tip_offset: f64,
    pub leading_control_offset: f64,
    pub trailing_control_offset: f64,
    pub outline_width: f64,
    /// Rendered width and height in pixels.
    pub size: u32,
}

impl Default for SunIcon {
    fn default() -> Self {
        Self {
            cx: 50.0,
            cy: 50.0,
            ring_radius: 14.0,
            ring_stroke: 7.0,
            ray_base_radius: 18.0,
            ray_tip_radius: 38.0,
            control_radius: 26.0,
            rays: 12,
            base_half_width: 7.0,
            tip_offset: 4.0,
            leading_control_offset: -6.0,
            trailing_control_offset: 12.0,
            outline_width: 3.0,
            size: 32,
        }
    }
}

impl SunIcon {
    fn point(&self, radius: f64, degrees: f64) -> (f64, f64) {
        let radians = degrees.to_radians();
        (
            self.cx + radius * radians.cos(),
            self.cy + radius * radians.sin(),
        )
    }

    /// Path data for all rays, one decimal place per coordinate. Every ray
    /// segment is followed by a space, including the last.
    pub fn ray_path(&self) -> String {
        let step = if self.rays == 0 {
            0.0
        } else {
            360.0 / f64::from(self.rays)
        };

        let mut d = String::new();
        for i in 0..self.rays {
            let angle = f64::from(i) * step;
            let (x1, y1) = self.point(self.ray_base_radius, angle - self.base_half_width);
            let (x2, y2) = self.point(self.ray_base_radius, angle + self.base_half_width);
            let (tx, ty) = self.point(self.ray_tip_radius, angle + self.tip_offset);
            let (c1x, c1y) = self.point(self.control_radius, angle + self.leading_control_offset);
            let (c2x, c2y) = self.point(self.control_radius, angle + self.trailing_control_offset);

            let _ = write!(
                d,
                "M {x1:.1} {y1:.1} Q {c1x:.1} {c1y:.1} {tx:.1} {ty:.1} Q {c2x:.1} {c2y:.1} {x2:.1} {y2:.1} Z "
            );
        }
        d
    }

    fn ring(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" stroke="black" stroke-width="{}" fill="none" />"#,
            self.cx, self.cy, self.ring_radius, self.ring_stroke
        )
    }

    /// Render the complete SVG document.
    pub fn to_svg(&self) -> String {
        let ring = self.ring();
        [
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="{0}" height="{0}">"#,
                self.size
            ),
            format!(
                r#"<g stroke="white" stroke-width="{}" stroke-linejoin="round">"#,
                self.outline_width
            ),
            ring.clone(),
            format!(r#"<path d="{}" fill="black" />"#, self.ray_path()),
            ring,
            "</g>".to_string(),
            "</svg>".to_string(),
        ]
        .join("\n")
    }

    /// Render and write the SVG to `path`.
    pub fn write_svg(&self, path: &NormalizedPath) -> Result<()> {
        let svg = self.to_svg();
        io::write_text(path, &svg)?;
        tracing::info!(path = %path, rays = self.rays, "Wrote sun icon");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_ray_coordinates() {
        let path = SunIcon::default().ray_path();
        assert!(
            path.starts_with("M 67.9 47.8 Q 75.9 47.3 87.9 52.7 Q 75.4 55.4 67.9 52.2 Z M "),
            "unexpected path start: {}",
            &path[..80]
        );
    }

    #[test]
    fn test_one_segment_per_ray() {
        let path = SunIcon::default().ray_path();
        assert_eq!(path.matches("M ").count(), 12);
        assert_eq!(path.matches(" Z ").count(), 12);
        assert!(path.ends_with("Z "));
    }

    #[test]
    fn test_ray_count_is_configurable() {
        let icon = SunIcon {
            rays: 8,
            ..SunIcon::default()
        };
        assert_eq!(icon.ray_path().matches('Z').count(), 8);
    }

    #[test]
    fn test_zero_rays_gives_empty_path() {
        let icon = SunIcon {
            rays: 0,
            ..SunIcon::default()
        };
        assert_eq!(icon.ray_path(), "");
    }

    #[test]
    fn test_svg_structure() {
        let svg = SunIcon::default().to_svg();
        let lines: Vec<&str> = svg.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="32" height="32">"#
        );
        assert_eq!(
            lines[1],
            r#"<g stroke="white" stroke-width="3" stroke-linejoin="round">"#
        );
        assert_eq!(
            lines[2],
            r#"<circle cx="50" cy="50" r="14" stroke="black" stroke-width="7" fill="none" />"#
        );
        assert!(lines[3].starts_with(r#"<path d="M "#));
        assert!(lines[3].ends_with(r#"Z " fill="black" />"#));
        assert_eq!(lines[4], lines[2]);
        assert_eq!(lines[6], "</svg>");
    }
}
