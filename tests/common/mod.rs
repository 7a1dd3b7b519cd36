#![allow(dead_code)]

use bevy::asset::{AssetEvent, Assets, Handle};
use bevy::image::Image;
use bevy::pbr::StandardMaterial;
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy::render::mesh::Mesh;
use bevy::text::Font;
use bevy::transform::TransformPlugin;
use bevy::window::WindowResized;

use poster_carousel::camera::components::{CarouselCamera, ViewportSize};
use poster_carousel::camera::projection::{carousel_projection, ndc_to_screen, world_to_ndc};
use poster_carousel::camera::systems::resize_viewport;
use poster_carousel::carousel::assets::{
    DescriptionFont, PosterTextures, track_font_load, track_texture_loads,
};
use poster_carousel::carousel::components::{DescriptionLine, PosterPlane};
use poster_carousel::carousel::events::{DisplayPoster, RefreshDescription};
use poster_carousel::carousel::state::CarouselState;
use poster_carousel::carousel::systems::{
    display_poster, layout_description_lines, refresh_description,
};
use poster_carousel::catalog::Catalog;
use poster_carousel::config::{CAMERA_POSITION, CarouselSettings};
use poster_carousel::input::systems::{PointerClick, dispatch_clicks};
use poster_carousel::mesh::setup::build_static_controls;
use poster_carousel::navigation::BookingRequested;

pub const ARROW_LEFT: Vec3 = Vec3::new(-3.0, 0.0, 0.0);
pub const ARROW_RIGHT: Vec3 = Vec3::new(3.0, 0.0, 0.0);
pub const BOOK_BUTTON: Vec3 = Vec3::new(0.0, -2.5, 0.0);

/// Navigation requests seen so far, in order.
#[derive(Resource, Default)]
pub struct BookingLog(pub Vec<String>);

pub fn record_bookings(mut requests: EventReader<BookingRequested>, mut log: ResMut<BookingLog>) {
    log.0.extend(requests.read().map(|request| request.url.clone()));
}

pub struct Harness {
    pub app: App,
    pub textures: Vec<Handle<Image>>,
}

impl Harness {
    /// Headless carousel with the embedded font and no textures loaded yet.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_font(catalog, DescriptionFont::embedded())
    }

    pub fn with_font(catalog: Catalog, font: DescriptionFont) -> Self {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin))
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<Image>>()
            .init_resource::<BookingLog>()
            .insert_resource(ViewportSize::new(800.0, 600.0))
            .insert_resource(CarouselState::new(catalog.len()))
            .insert_resource(catalog.clone())
            .insert_resource(CarouselSettings::default())
            .insert_resource(font)
            .add_event::<AssetEvent<Image>>()
            .add_event::<AssetEvent<Font>>()
            .add_event::<WindowResized>()
            .add_event::<PointerClick>()
            .add_event::<DisplayPoster>()
            .add_event::<RefreshDescription>()
            .add_event::<BookingRequested>()
            .add_systems(Startup, build_static_controls)
            .add_systems(
                Update,
                (
                    (track_texture_loads, track_font_load),
                    resize_viewport,
                    dispatch_clicks,
                    record_bookings,
                    display_poster,
                    refresh_description,
                    layout_description_lines,
                )
                    .chain(),
            );

        let textures: Vec<Handle<Image>> = {
            let mut images = app.world_mut().resource_mut::<Assets<Image>>();
            (0..catalog.len())
                .map(|_| images.add(Image::default()))
                .collect()
        };
        app.insert_resource(PosterTextures::new(textures.clone()));

        app.world_mut().spawn((
            CarouselCamera,
            Projection::Perspective(carousel_projection(800.0 / 600.0)),
            Transform::from_translation(CAMERA_POSITION),
            GlobalTransform::from_translation(CAMERA_POSITION),
        ));

        // Startup, then transform propagation for the static controls
        app.update();

        Self { app, textures }
    }

    pub fn load_texture(&mut self, index: usize) {
        let id = self.textures[index].id();
        self.app
            .world_mut()
            .send_event(AssetEvent::<Image>::LoadedWithDependencies { id });
        self.app.update();
    }

    pub fn load_all_textures(&mut self) {
        for index in 0..self.textures.len() {
            self.load_texture(index);
        }
    }

    pub fn click_screen(&mut self, position: Vec2) {
        self.app.world_mut().send_event(PointerClick { position });
        self.app.update();
    }

    /// Clicks wherever `world` lands on screen for the current camera.
    pub fn click_world(&mut self, world: Vec3) {
        let position = self.screen_point(world);
        self.click_screen(position);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width,
            height,
        });
        self.app.update();
    }

    pub fn screen_point(&mut self, world: Vec3) -> Vec2 {
        let viewport = *self.app.world().resource::<ViewportSize>();
        let mut cameras = self
            .app
            .world_mut()
            .query_filtered::<(&GlobalTransform, &Projection), With<CarouselCamera>>();
        let (camera, projection) = cameras.iter(self.app.world()).next().unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("carousel camera is not perspective");
        };
        let (ndc, _) = world_to_ndc(world, camera, perspective).unwrap();
        ndc_to_screen(ndc, viewport.size())
    }

    pub fn current_index(&self) -> usize {
        self.app.world().resource::<CarouselState>().current_index()
    }

    pub fn posters(&mut self) -> Vec<usize> {
        let mut query = self.app.world_mut().query::<&PosterPlane>();
        query
            .iter(self.app.world())
            .map(|poster| poster.index)
            .collect()
    }

    /// Description text currently spawned, ordered by row.
    pub fn description(&mut self) -> Vec<String> {
        let mut query = self.app.world_mut().query::<(&DescriptionLine, &Text2d)>();
        let mut rows: Vec<(usize, String)> = query
            .iter(self.app.world())
            .map(|(line, text)| (line.row, text.0.clone()))
            .collect();
        rows.sort_by_key(|(row, _)| *row);
        rows.into_iter().map(|(_, text)| text).collect()
    }

    pub fn bookings(&self) -> &[String] {
        &self.app.world().resource::<BookingLog>().0
    }
}
