use bevy::{
    ecs::{
        entity::Entity,
        event::{EventReader, EventWriter},
        query::With,
        system::{Query, Res, ResMut},
    },
    input::{ButtonInput, mouse::MouseButton},
    log::{debug, info},
    math::Vec2,
    prelude::Event,
    render::camera::Projection,
    transform::components::GlobalTransform,
    window::{PrimaryWindow, Window},
};

use crate::camera::components::{CarouselCamera, ViewportSize};
use crate::camera::projection::{camera_ray, screen_to_ndc};
use crate::carousel::components::{Interactive, Role};
use crate::carousel::events::DisplayPoster;
use crate::carousel::state::CarouselState;
use crate::config::CarouselSettings;
use crate::input::picking::nearest_hit;
use crate::navigation::BookingRequested;

/// A primary-button click at `position`, in logical window coordinates
/// (origin top-left, y down).
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PointerClick {
    pub position: Vec2,
}

// Turns left-button presses over the primary window into clicks
pub fn emit_pointer_clicks(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut clicks: EventWriter<PointerClick>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(position) = window.cursor_position() {
        clicks.write(PointerClick { position });
    }
}

/// Hit-tests each click against the arrows and the book button and applies
/// the role of the nearest one.
pub fn dispatch_clicks(
    mut clicks: EventReader<PointerClick>,
    viewport: Res<ViewportSize>,
    cameras: Query<(&GlobalTransform, &Projection), With<CarouselCamera>>,
    targets: Query<(Entity, &Interactive, &GlobalTransform)>,
    settings: Res<CarouselSettings>,
    mut state: ResMut<CarouselState>,
    mut display: EventWriter<DisplayPoster>,
    mut booking: EventWriter<BookingRequested>,
) {
    let Ok((camera, Projection::Perspective(projection))) = cameras.single() else {
        // Drain so stale clicks don't fire once a camera exists
        clicks.clear();
        return;
    };

    for click in clicks.read() {
        let ndc = screen_to_ndc(click.position, viewport.size());
        let Some(ray) = camera_ray(ndc, camera, projection) else {
            continue;
        };
        let Some(hit) = nearest_hit(ray, &targets) else {
            debug!("Click at {} hit nothing", click.position);
            continue;
        };

        match hit.role {
            Role::Book => {
                info!("Book button clicked");
                booking.write(BookingRequested {
                    url: settings.booking_url.clone(),
                });
            }
            Role::Previous => {
                let index = state.retreat();
                display.write(DisplayPoster { index });
            }
            Role::Next => {
                let index = state.advance();
                display.write(DisplayPoster { index });
            }
        }
    }
}
