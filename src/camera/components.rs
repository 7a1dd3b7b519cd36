use bevy::prelude::{Component, Reflect, ReflectComponent, ReflectResource, Resource, Vec2};

/// The perspective camera the carousel is viewed and picked through.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct CarouselCamera;

/// Orthographic camera that draws description text over the 3D scene.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct OverlayCamera;

/// Logical size of the render surface, kept in step with the window.
#[derive(Resource, Reflect, Clone, Copy, Debug, PartialEq)]
#[reflect(Resource)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}
