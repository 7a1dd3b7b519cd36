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

//! Pinhole math shared by click picking and the description overlay.
//!
//! Everything here works from the camera's `GlobalTransform` and
//! `PerspectiveProjection` alone, so it does not depend on the render world
//! having computed a clip matrix yet.

use bevy::{
    math::{Dir3, Ray3d, Vec2, Vec3},
    render::camera::PerspectiveProjection,
    transform::components::GlobalTransform,
};

use crate::config::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

pub fn carousel_projection(aspect_ratio: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(), // vertical
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        aspect_ratio,
    }
}

/// Window coordinates (origin top-left, y down) to NDC in [-1, 1], y up.
pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        screen.x / viewport.x * 2.0 - 1.0,
        -(screen.y / viewport.y) * 2.0 + 1.0,
    )
}

pub fn ndc_to_screen(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    )
}

/// Ray from the camera origin through `ndc`.
pub fn camera_ray(
    ndc: Vec2,
    camera: &GlobalTransform,
    projection: &PerspectiveProjection,
) -> Option<Ray3d> {
    let half_height = (projection.fov * 0.5).tan();
    let view_dir = Vec3::new(
        ndc.x * half_height * projection.aspect_ratio,
        ndc.y * half_height,
        -1.0,
    );
    let direction = Dir3::new(camera.affine().transform_vector3(view_dir)).ok()?;
    Some(Ray3d {
        origin: camera.translation(),
        direction,
    })
}

/// Projects a world point to NDC. Returns the NDC position and the view depth,
/// or `None` when the point is behind the camera.
pub fn world_to_ndc(
    point: Vec3,
    camera: &GlobalTransform,
    projection: &PerspectiveProjection,
) -> Option<(Vec2, f32)> {
    let view = camera.affine().inverse().transform_point3(point);
    let depth = -view.z;
    if depth <= f32::EPSILON {
        return None;
    }
    let half_height = (projection.fov * 0.5).tan();
    let ndc = Vec2::new(
        view.x / (depth * half_height * projection.aspect_ratio),
        view.y / (depth * half_height),
    );
    Some((ndc, depth))
}

/// Height in logical pixels of a world-space length seen at `depth`.
pub fn world_to_pixels(
    length: f32,
    depth: f32,
    projection: &PerspectiveProjection,
    viewport_height: f32,
) -> f32 {
    let visible_height = 2.0 * depth * (projection.fov * 0.5).tan();
    length / visible_height * viewport_height
}
