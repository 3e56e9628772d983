use thiserror::Error;

/// Errors from the mesh builder's validation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid parameter {name}: {value} (must be {constraint})")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        constraint: &'static str,
    },
}

/// Shape parameters for one page build. Immutable per call: the panel edits
/// a copy and the whole record is handed to the builder again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    /// Length of the first flat panel.
    pub flat_len_1: f32,
    /// Length of the second flat panel, past the bend.
    pub flat_len_2: f32,
    /// Bend angle in degrees, 0..=360. 90 collapses the bend; above 90 the
    /// arc length goes negative and the bend reverses.
    pub bend_angle_deg: f32,
    /// Radius of the circular bend.
    pub bend_radius: f32,
    /// Cross-section rows spent on the bend.
    pub bend_segments: u32,
    /// Extrusion width along x, centered on x = 0.
    pub width: f32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            flat_len_1: 25.0,
            flat_len_2: 10.0,
            bend_angle_deg: 180.0,
            bend_radius: 5.0,
            bend_segments: 25,
            width: 50.0,
        }
    }
}

impl PageParams {
    pub fn validate(&self) -> Result<(), GeometryError> {
        // `!(v > 0.0)` also rejects NaN.
        let positive: [(&'static str, f32); 4] = [
            ("flat_len_1", self.flat_len_1),
            ("flat_len_2", self.flat_len_2),
            ("bend_radius", self.bend_radius),
            ("width", self.width),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(GeometryError::InvalidParameter {
                    name,
                    value,
                    constraint: "positive",
                });
            }
        }

        if !(0.0..=360.0).contains(&self.bend_angle_deg) {
            return Err(GeometryError::InvalidParameter {
                name: "bend_angle_deg",
                value: self.bend_angle_deg,
                constraint: "within [0, 360]",
            });
        }

        if self.bend_segments < 1 {
            return Err(GeometryError::InvalidParameter {
                name: "bend_segments",
                value: self.bend_segments as f32,
                constraint: "at least 1",
            });
        }

        Ok(())
    }

    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    pub fn with_bend_angle_deg(self, bend_angle_deg: f32) -> Self {
        Self {
            bend_angle_deg,
            ..self
        }
    }

    pub fn with_bend_segments(self, bend_segments: u32) -> Self {
        Self {
            bend_segments,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PageParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_lengths() {
        let p = PageParams {
            flat_len_1: 0.0,
            ..Default::default()
        };
        assert_eq!(
            p.validate(),
            Err(GeometryError::InvalidParameter {
                name: "flat_len_1",
                value: 0.0,
                constraint: "positive",
            })
        );

        let p = PageParams {
            width: -3.0,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_nan() {
        let p = PageParams {
            bend_radius: f32::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_angle() {
        assert!(
            PageParams::default()
                .with_bend_angle_deg(400.0)
                .validate()
                .is_err()
        );
        assert!(
            PageParams::default()
                .with_bend_angle_deg(-1.0)
                .validate()
                .is_err()
        );
        assert!(
            PageParams::default()
                .with_bend_angle_deg(0.0)
                .validate()
                .is_ok()
        );
        assert!(
            PageParams::default()
                .with_bend_angle_deg(360.0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_zero_segments() {
        assert!(
            PageParams::default()
                .with_bend_segments(0)
                .validate()
                .is_err()
        );
    }
}
