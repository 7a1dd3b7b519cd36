use bevy::{
    ecs::{
        event::EventReader,
        query::With,
        system::{Query, ResMut},
    },
    log::debug,
    render::camera::Projection,
    window::WindowResized,
};

use crate::camera::components::{CarouselCamera, ViewportSize};

// Keeps the camera aspect and the tracked surface size in step with the window
pub fn resize_viewport(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut cameras: Query<&mut Projection, With<CarouselCamera>>,
) {
    // Only the latest size matters
    let Some(event) = resized.read().last() else {
        return;
    };
    if event.width <= 0.0 || event.height <= 0.0 {
        debug!("Ignoring zero-area resize {}x{}", event.width, event.height);
        return;
    }

    let next = ViewportSize::new(event.width, event.height);
    if *viewport != next {
        *viewport = next;
    }

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = next.aspect_ratio();
        }
    }
}
