pub mod camera;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod mesh;
pub mod navigation;

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::winit::WinitSettings;

use crate::camera::components::{CarouselCamera, OverlayCamera, ViewportSize};
use crate::camera::setup::setup_cameras;
use crate::camera::systems::resize_viewport;
use crate::carousel::assets::{
    report_failed_loads, request_assets, track_font_load, track_texture_loads,
};
use crate::carousel::components::{DescriptionLine, HitShape, Interactive, PosterPlane, Role};
use crate::carousel::events::{DisplayPoster, RefreshDescription};
use crate::carousel::state::CarouselState;
use crate::carousel::systems::{display_poster, layout_description_lines, refresh_description};
use crate::catalog::{Catalog, PosterRecord};
use crate::config::CarouselSettings;
use crate::input::systems::{PointerClick, dispatch_clicks, emit_pointer_clicks};
use crate::mesh::setup::build_static_controls;
use crate::navigation::BookingRequested;

/// Poster carousel scene: cameras, controls, asset tracking and click
/// dispatch. Pair with [`navigation::BookingRedirectPlugin`] to act on the
/// book button.
pub struct CarouselPlugin {
    /// JSON catalog to read at startup; the built-in catalog is used when
    /// unset or missing.
    pub catalog_path: Option<PathBuf>,
    pub settings: CarouselSettings,
}

impl Default for CarouselPlugin {
    fn default() -> Self {
        Self {
            catalog_path: cfg!(not(target_arch = "wasm32"))
                .then(|| PathBuf::from("assets/posters.json")),
            settings: CarouselSettings::default(),
        }
    }
}

impl Plugin for CarouselPlugin {
    fn build(&self, app: &mut App) {
        let catalog = Catalog::load_or_default(self.catalog_path.as_deref());

        app.insert_resource(CarouselState::new(catalog.len()))
            .insert_resource(catalog)
            .insert_resource(self.settings.clone())
            .insert_resource(ClearColor(self.settings.clear_color))
            // Redraw every display refresh, focused or not
            .insert_resource(WinitSettings::game())
            .init_resource::<ViewportSize>()
            .add_event::<PointerClick>()
            .add_event::<DisplayPoster>()
            .add_event::<RefreshDescription>()
            .add_event::<BookingRequested>()
            .register_type::<Catalog>()
            .register_type::<PosterRecord>()
            .register_type::<CarouselState>()
            .register_type::<CarouselSettings>()
            .register_type::<ViewportSize>()
            .register_type::<CarouselCamera>()
            .register_type::<OverlayCamera>()
            .register_type::<Interactive>()
            .register_type::<Role>()
            .register_type::<HitShape>()
            .register_type::<PosterPlane>()
            .register_type::<DescriptionLine>()
            .add_systems(
                Startup,
                (setup_cameras, build_static_controls, request_assets),
            )
            .add_systems(
                Update,
                (
                    (track_texture_loads, track_font_load, report_failed_loads),
                    resize_viewport,
                    emit_pointer_clicks,
                    dispatch_clicks,
                    display_poster,
                    refresh_description,
                    layout_description_lines,
                )
                    .chain(),
            );
    }
}
