use bevy::{
    asset::Assets,
    color::Color,
    ecs::system::{Commands, ResMut},
    log::debug,
    pbr::{MeshMaterial3d, StandardMaterial},
    render::mesh::{Mesh, Mesh3d},
    transform::components::Transform,
    utils::default,
};

use crate::carousel::components::{HitShape, Interactive, Role};
use crate::config::{
    ARROW_OFFSET_X, BOOK_BUTTON_POSITION, BOOK_BUTTON_SIZE, CHEVRON, LINE_PICK_THRESHOLD,
};
use crate::mesh::shapes::{mirrored, polyline_mesh, quad_mesh};

/// Spawns the arrows and the book button. They live for the whole session.
pub fn build_static_controls(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let arrow_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.85, 0.9),
        unlit: true,
        ..default()
    });

    let left_points = CHEVRON.to_vec();
    let right_points = mirrored(&CHEVRON);
    for (role, points, x) in [
        (Role::Previous, left_points, -ARROW_OFFSET_X),
        (Role::Next, right_points, ARROW_OFFSET_X),
    ] {
        commands.spawn((
            Mesh3d(meshes.add(polyline_mesh(&points))),
            MeshMaterial3d(arrow_material.clone()),
            Transform::from_xyz(x, 0.0, 0.0),
            Interactive {
                role,
                shape: HitShape::Polyline {
                    points,
                    threshold: LINE_PICK_THRESHOLD,
                },
            },
        ));
    }

    let button_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.0, 0.0, 1.0),
        unlit: true,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(quad_mesh(BOOK_BUTTON_SIZE))),
        MeshMaterial3d(button_material),
        Transform::from_translation(BOOK_BUTTON_POSITION),
        Interactive {
            role: Role::Book,
            shape: HitShape::Rect {
                half_size: BOOK_BUTTON_SIZE * 0.5,
            },
        },
    ));

    debug!("Static controls spawned");
}
