use bevy::{
    asset::Assets,
    color::Color,
    ecs::{
        entity::Entity,
        event::{EventReader, EventWriter},
        query::With,
        system::{Commands, Query, Res, ResMut},
    },
    log::{debug, info},
    math::Vec3,
    pbr::{MeshMaterial3d, StandardMaterial},
    render::{
        camera::Projection,
        mesh::{Mesh, Mesh3d},
        view::RenderLayers,
    },
    sprite::Anchor,
    text::{Text2d, TextColor, TextFont},
    transform::components::{GlobalTransform, Transform},
    utils::default,
};

use crate::camera::components::{CarouselCamera, ViewportSize};
use crate::camera::projection::{world_to_ndc, world_to_pixels};
use crate::carousel::assets::{DescriptionFont, PosterTextures};
use crate::carousel::components::{DescriptionLine, PosterPlane};
use crate::carousel::events::{DisplayPoster, RefreshDescription};
use crate::carousel::state::CarouselState;
use crate::catalog::Catalog;
use crate::config::{description_anchor, DESCRIPTION_TEXT_SIZE, OVERLAY_LAYER, POSTER_SIZE};
use crate::mesh::shapes::quad_mesh;

/// Swaps the poster plane for the requested poster. Requests whose texture is
/// not loaded yet are dropped.
pub fn display_poster(
    mut commands: Commands,
    mut requests: EventReader<DisplayPoster>,
    textures: Res<PosterTextures>,
    mut state: ResMut<CarouselState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    posters: Query<Entity, With<PosterPlane>>,
    mut refresh: EventWriter<RefreshDescription>,
) {
    // Several requests in one frame collapse into the last displayable one
    let mut shown = None;
    for request in requests.read() {
        match textures.ready(request.index) {
            Some(texture) => shown = Some((request.index, texture.clone())),
            None => debug!("Poster {} not loaded yet, skipping", request.index),
        }
    }
    let Some((index, texture)) = shown else {
        return;
    };

    for entity in &posters {
        commands.entity(entity).despawn();
    }

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(quad_mesh(POSTER_SIZE))),
        MeshMaterial3d(material),
        Transform::default(),
        PosterPlane { index },
    ));

    state.set_current(index);
    info!("Showing poster {} of {}", index + 1, state.len());
    refresh.write(RefreshDescription { index });
}

/// Replaces the description lines. Waits for the font when it is still
/// loading; the font tracker replays the latest request.
pub fn refresh_description(
    mut commands: Commands,
    mut requests: EventReader<RefreshDescription>,
    mut font: ResMut<DescriptionFont>,
    catalog: Res<Catalog>,
    lines: Query<Entity, With<DescriptionLine>>,
) {
    let Some(index) = requests.read().last().map(|request| request.index) else {
        return;
    };
    let Some(handle) = font.ready().cloned() else {
        debug!("Font not loaded, deferring description for poster {index}");
        font.defer(index);
        return;
    };

    for entity in &lines {
        commands.entity(entity).despawn();
    }

    for (row, text) in catalog.record(index).description.iter().enumerate() {
        commands.spawn((
            Text2d::new(text.clone()),
            TextFont {
                font: handle.clone(),
                ..default()
            },
            TextColor(Color::srgb(1.0, 0.0, 0.0)),
            Anchor::BottomLeft,
            Transform::default(),
            RenderLayers::layer(OVERLAY_LAYER),
            DescriptionLine {
                poster: index,
                row,
                anchor: description_anchor(row),
            },
        ));
    }
}

/// Pins each description line to its world anchor as seen by the 3D camera,
/// scaling the font so the text keeps its world size.
pub fn layout_description_lines(
    viewport: Res<ViewportSize>,
    cameras: Query<(&GlobalTransform, &Projection), With<CarouselCamera>>,
    mut lines: Query<(&DescriptionLine, &mut Transform, &mut TextFont)>,
) {
    let Ok((camera, Projection::Perspective(projection))) = cameras.single() else {
        return;
    };
    let half = viewport.size() * 0.5;

    for (line, mut transform, mut font) in &mut lines {
        let Some((ndc, depth)) = world_to_ndc(line.anchor, camera, projection) else {
            continue;
        };
        // Overlay space: origin at the viewport center, one unit per pixel
        let translation = Vec3::new(ndc.x * half.x, ndc.y * half.y, 0.0);
        if transform.translation != translation {
            transform.translation = translation;
        }
        let size =
            world_to_pixels(DESCRIPTION_TEXT_SIZE, depth, projection, viewport.height).max(1.0);
        if font.font_size != size {
            font.font_size = size;
        }
    }
}
