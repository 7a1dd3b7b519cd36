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

use bevy::{
    ecs::entity::Entity,
    math::{Ray3d, Vec2},
    transform::components::GlobalTransform,
};

use crate::carousel::components::{HitShape, Interactive, Role};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub entity: Entity,
    pub role: Role,
    pub distance: f32,
}

impl HitShape {
    /// Distance along `ray` to this shape placed at `transform`, if hit.
    pub fn intersect(&self, ray: Ray3d, transform: &GlobalTransform) -> Option<f32> {
        let world_from_local = transform.affine();
        let local_from_world = world_from_local.inverse();

        // Work in the shape's local frame, where it lies in the z = 0 plane.
        let origin = local_from_world.transform_point3(ray.origin);
        let direction = local_from_world.transform_vector3(ray.direction.as_vec3());
        if direction.z.abs() <= f32::EPSILON {
            return None;
        }
        let s = -origin.z / direction.z;
        if s < 0.0 {
            return None;
        }
        let local_hit = origin + direction * s;
        if !self.contains(local_hit.truncate()) {
            return None;
        }

        let world_hit = world_from_local.transform_point3(local_hit);
        Some(ray.origin.distance(world_hit))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            HitShape::Rect { half_size } => {
                point.x.abs() <= half_size.x && point.y.abs() <= half_size.y
            }
            HitShape::Polyline { points, threshold } => points
                .windows(2)
                .any(|seg| distance_to_segment(point, seg[0], seg[1]) <= *threshold),
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Nearest interactive object hit by `ray`. Ties keep the first candidate.
pub fn nearest_hit<'a>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (Entity, &'a Interactive, &'a GlobalTransform)>,
) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;
    for (entity, interactive, transform) in candidates {
        let Some(distance) = interactive.shape.intersect(ray, transform) else {
            continue;
        };
        if nearest.is_none_or(|best| distance < best.distance) {
            nearest = Some(Hit {
                entity,
                role: interactive.role,
                distance,
            });
        }
    }
    nearest
}
