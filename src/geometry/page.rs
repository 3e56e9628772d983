//! The page surface builder.
//!
//! A page is a flat panel, a circular bend, and a second flat panel leaving
//! the bend along its exit tangent, extruded across `width` in x. Cross
//! sections are emitted as rows of `LENGTH_SEGMENTS + 1` points; adjacent
//! rows are stitched into two triangles per quad.

use std::f32::consts::FRAC_PI_2;

use crate::geometry::mesh::PageMesh;
use crate::geometry::params::{GeometryError, PageParams};

/// Rows spent on each flat panel.
pub const FLAT_SEGMENTS: u32 = 5;
/// Segments across the width of every cross-section row.
pub const LENGTH_SEGMENTS: u32 = 10;

const POINTS_PER_ROW: u32 = LENGTH_SEGMENTS + 1;

/// Build the page mesh for one parameter set.
///
/// Pure and deterministic: identical parameters produce bit-identical
/// buffers, and every call allocates fresh ones. Fails with
/// [`GeometryError::InvalidParameter`] instead of producing degenerate
/// geometry when a constraint is violated.
pub fn build_page(params: &PageParams) -> Result<PageMesh, GeometryError> {
    params.validate()?;

    let rows = (2 * FLAT_SEGMENTS + params.bend_segments + 1) as usize;
    let mut vertices = Vec::with_capacity(rows * POINTS_PER_ROW as usize * 3);

    let col_step = params.width / LENGTH_SEGMENTS as f32;
    let half_width = params.width / 2.0;
    let push_row = |vertices: &mut Vec<f32>, y: f32, z: f32| {
        for j in 0..POINTS_PER_ROW {
            vertices.push(j as f32 * col_step - half_width);
            vertices.push(y);
            vertices.push(z);
        }
    };

    // First flat panel: from z = flat_len_1 down to the bend origin, y = 0.
    let flat_step_1 = params.flat_len_1 / FLAT_SEGMENTS as f32;
    for i in 0..=FLAT_SEGMENTS {
        push_row(&mut vertices, 0.0, params.flat_len_1 - i as f32 * flat_step_1);
    }

    // Circular bend, parametrized by arc length over radius. A 90 degree
    // angle gives arc_len = 0 and stacks every bend row on the origin;
    // above 90 degrees arc_len is negative and the bend reverses. This is
    // the documented mapping from angle to arc length, kept as is.
    //
    // The i = 0 row coincides with the flat panel's last row and is shared,
    // not re-emitted.
    let angle = params.bend_angle_deg.to_radians();
    let arc_len = params.bend_radius * (FRAC_PI_2 - angle);
    let bend_step = arc_len / params.bend_segments as f32;
    let mut l = 0.0;
    for i in 1..=params.bend_segments {
        l = i as f32 * bend_step / params.bend_radius;
        push_row(
            &mut vertices,
            params.bend_radius * (1.0 - l.cos()),
            params.bend_radius * l.sin(),
        );
    }

    // Second flat panel: step along the bend's exit tangent (cos l, sin l).
    let (exit_sin, exit_cos) = l.sin_cos();
    let y_exit = params.bend_radius * (1.0 - exit_cos);
    let z_exit = params.bend_radius * exit_sin;
    let flat_step_2 = params.flat_len_2 / FLAT_SEGMENTS as f32;
    for i in 1..=FLAT_SEGMENTS {
        let l = i as f32 * flat_step_2;
        push_row(&mut vertices, y_exit - l * exit_sin, z_exit - l * exit_cos);
    }

    // Two triangles per quad between adjacent rows; the (b,d,c)/(a,d,b)
    // winding keeps all faces consistently front-facing.
    let strips = (rows - 1) as u32;
    let mut indices = Vec::with_capacity((strips * LENGTH_SEGMENTS * 6) as usize);
    for i in 0..strips {
        for j in 0..LENGTH_SEGMENTS {
            let b = i * POINTS_PER_ROW + j;
            let a = b + 1;
            let c = (i + 1) * POINTS_PER_ROW + j;
            let d = c + 1;

            indices.extend_from_slice(&[b, d, c]);
            indices.extend_from_slice(&[a, d, b]);
        }
    }

    Ok(PageMesh { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz(mesh: &PageMesh, i: usize) -> (f32, f32, f32) {
        (
            mesh.vertices[i * 3],
            mesh.vertices[i * 3 + 1],
            mesh.vertices[i * 3 + 2],
        )
    }

    #[test]
    fn default_scenario_counts() {
        let mesh = build_page(&PageParams::default()).unwrap();
        // (5 + 25 + 5 + 1) rows of 11 points, (5 + 25 + 5) * 10 quads.
        assert_eq!(mesh.vertex_count(), 396);
        assert_eq!(mesh.triangle_count(), 700);
        assert_eq!(mesh.vertices.len(), 396 * 3);
        assert_eq!(mesh.indices.len(), 700 * 3);
    }

    #[test]
    fn counts_follow_bend_segments() {
        for segments in [1, 7, 60] {
            let params = PageParams::default().with_bend_segments(segments);
            let mesh = build_page(&params).unwrap();
            let rows = (2 * FLAT_SEGMENTS + segments + 1) as usize;
            assert_eq!(mesh.vertex_count(), rows * 11);
            assert_eq!(mesh.triangle_count(), (rows - 1) * 10 * 2);
        }
    }

    #[test]
    fn indices_are_in_bounds() {
        for segments in [1, 2, 25, 60] {
            let params = PageParams::default().with_bend_segments(segments);
            let mesh = build_page(&params).unwrap();
            let limit = mesh.vertex_count() as u32;
            assert!(mesh.indices.iter().all(|&i| i < limit));
        }
    }

    #[test]
    fn build_is_deterministic() {
        let params = PageParams {
            flat_len_1: 13.0,
            flat_len_2: 7.0,
            bend_angle_deg: 230.0,
            bend_radius: 3.0,
            bend_segments: 17,
            width: 42.0,
        };
        let first = build_page(&params).unwrap();
        let second = build_page(&params).unwrap();
        assert_eq!(first, second);
        let bits: Vec<u32> = first.vertices.iter().map(|v| v.to_bits()).collect();
        let bits2: Vec<u32> = second.vertices.iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits, bits2);
    }

    #[test]
    fn rebuild_allocates_fresh_buffers() {
        let defaults = PageParams::default();
        let first = build_page(&defaults).unwrap();
        let other = build_page(&defaults.with_width(80.0)).unwrap();
        assert_ne!(first, other);
        // Regenerating with the original parameters reproduces the original
        // mesh, untouched by the intervening build.
        assert_eq!(build_page(&defaults).unwrap(), first);
    }

    #[test]
    fn right_angle_collapses_bend() {
        let params = PageParams::default().with_bend_angle_deg(90.0);
        let mesh = build_page(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 396);

        // arc_len ~ 0: every bend row sits on the bend origin (up to the
        // rounding in converting 90 degrees to radians).
        let per_row = 11;
        for row in FLAT_SEGMENTS as usize..=(FLAT_SEGMENTS + params.bend_segments) as usize {
            for j in 0..per_row {
                let (_, y, z) = xyz(&mesh, row * per_row + j);
                assert!(y.abs() < 1e-4, "row {row} y = {y}");
                assert!(z.abs() < 1e-4, "row {row} z = {z}");
            }
        }
        // Indices still reference valid vertices through the degenerate span.
        let limit = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < limit));
    }

    #[test]
    fn width_only_rescales_x() {
        let narrow = build_page(&PageParams::default()).unwrap();
        let wide = build_page(&PageParams::default().with_width(80.0)).unwrap();
        assert_eq!(narrow.vertex_count(), wide.vertex_count());

        for i in 0..narrow.vertex_count() {
            let (nx, ny, nz) = xyz(&narrow, i);
            let (wx, wy, wz) = xyz(&wide, i);
            assert_eq!(ny, wy);
            assert_eq!(nz, wz);
            assert!((wx - nx * 80.0 / 50.0).abs() < 1e-4);
        }

        // Rows span [-width/2, width/2].
        let (first_x, _, _) = xyz(&wide, 0);
        let (last_x, _, _) = xyz(&wide, 10);
        assert_eq!(first_x, -40.0);
        assert_eq!(last_x, 40.0);
    }

    #[test]
    fn flat_panel_lies_at_y_zero() {
        let mesh = build_page(&PageParams::default()).unwrap();
        for row in 0..=FLAT_SEGMENTS as usize {
            for j in 0..11 {
                let (_, y, _) = xyz(&mesh, row * 11 + j);
                assert_eq!(y, 0.0);
            }
        }
        // Row 0 starts at z = flat_len_1, the boundary row at z = 0.
        let (_, _, z0) = xyz(&mesh, 0);
        let (_, _, z5) = xyz(&mesh, 5 * 11);
        assert_eq!(z0, 25.0);
        assert_eq!(z5, 0.0);
    }

    #[test]
    fn default_angle_exits_vertically() {
        // At 180 degrees l_final = -pi/2: the exit tangent is (0, -1), so
        // the second panel climbs straight up at z = -bend_radius.
        let params = PageParams::default();
        let mesh = build_page(&params).unwrap();
        let last = mesh.vertex_count() - 1;
        let (_, y, z) = xyz(&mesh, last);
        assert!((y - (params.bend_radius + params.flat_len_2)).abs() < 1e-4);
        assert!((z + params.bend_radius).abs() < 1e-4);
    }

    #[test]
    fn invalid_parameters_fail() {
        let bad = PageParams {
            bend_segments: 0,
            ..Default::default()
        };
        assert!(matches!(
            build_page(&bad),
            Err(GeometryError::InvalidParameter { .. })
        ));
        assert!(build_page(&PageParams::default().with_width(0.0)).is_err());
    }
}
