// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use bevy::asset::RenderAssetUsages;
use bevy::math::{Vec2, Vec3};
use bevy::render::mesh::{Indices, Mesh, PrimitiveTopology};

// ---- Flat quad in the XY plane, facing +Z ----
// UV (0, 0) is the image's top-left so textures read upright.
pub fn quad_mesh(size: Vec2) -> Mesh {
    let h = size * 0.5;

    // 1) Positions, counter-clockwise from bottom-left
    let positions: Vec<[f32; 3]> = vec![
        [-h.x, -h.y, 0.0],
        [h.x, -h.y, 0.0],
        [h.x, h.y, 0.0],
        [-h.x, h.y, 0.0],
    ];

    // 2) Normals and UVs
    let normals = vec![[0.0f32, 0.0, 1.0]; 4];
    let uvs: Vec<[f32; 2]> = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    // 3) Indices
    let indices: Vec<u32> = vec![0, 1, 2, 0, 2, 3];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::all());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

// ---- Open polyline drawn as a line strip ----
pub fn polyline_mesh(points: &[Vec2]) -> Mesh {
    let positions: Vec<[f32; 3]> = points
        .iter()
        .map(|p| Vec3::new(p.x, p.y, 0.0).to_array())
        .collect();
    let normals = vec![[0.0f32, 0.0, 1.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::all());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

/// Mirrors chevron points across the local Y axis.
pub fn mirrored(points: &[Vec2]) -> Vec<Vec2> {
    points.iter().map(|p| Vec2::new(-p.x, p.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn quad_spans_requested_size() {
        let mesh = quad_mesh(Vec2::new(2.0, 3.0));
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("quad has no positions");
        };
        assert_eq!(positions.len(), 4);
        assert!(positions.contains(&[-1.0, -1.5, 0.0]));
        assert!(positions.contains(&[1.0, 1.5, 0.0]));
        assert_eq!(mesh.indices().map(|i| i.len()), Some(6));
    }

    #[test]
    fn polyline_keeps_point_order() {
        let points = [Vec2::new(0.5, 0.5), Vec2::ZERO, Vec2::new(0.5, -0.5)];
        let mesh = polyline_mesh(&points);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineStrip);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("polyline has no positions");
        };
        assert_eq!(positions[0], [0.5, 0.5, 0.0]);
        assert_eq!(positions[2], [0.5, -0.5, 0.0]);
    }

    #[test]
    fn mirror_flips_x_only() {
        let left = [Vec2::new(-0.5, 0.5), Vec2::ZERO, Vec2::new(-0.5, -0.5)];
        assert_eq!(
            mirrored(&left),
            vec![Vec2::new(0.5, 0.5), Vec2::ZERO, Vec2::new(0.5, -0.5)]
        );
    }
}
