use bevy::{
    core_pipeline::{core_2d::Camera2d, core_3d::Camera3d},
    ecs::{
        query::With,
        system::{Commands, Query},
    },
    render::{
        camera::{Camera, ClearColorConfig, Projection},
        view::RenderLayers,
    },
    transform::components::Transform,
    utils::default,
    window::{PrimaryWindow, Window},
};

use crate::camera::components::{CarouselCamera, OverlayCamera, ViewportSize};
use crate::camera::projection::carousel_projection;
use crate::config::{CAMERA_POSITION, OVERLAY_LAYER};

pub fn setup_cameras(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
    let viewport = windows
        .single()
        .map(|window| ViewportSize::new(window.width(), window.height()))
        .unwrap_or_default();

    // Fixed camera on +Z looking at the poster
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(carousel_projection(viewport.aspect_ratio())),
        Transform::from_translation(CAMERA_POSITION),
        CarouselCamera,
    ));

    // Description text is drawn on top without clearing the 3D pass
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        RenderLayers::layer(OVERLAY_LAYER),
        OverlayCamera,
    ));

    commands.insert_resource(viewport);
}
