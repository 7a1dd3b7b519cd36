use bevy::prelude::{Color, Reflect, ReflectResource, Resource, Vec2, Vec3};

pub const BOOKING_URL: &str = "https://yourbookingpage.com";

/// Poster plane extents in world units (2 wide, 3 tall).
pub const POSTER_SIZE: Vec2 = Vec2::new(2.0, 3.0);

pub const ARROW_OFFSET_X: f32 = 3.0;
/// Chevron points for the left arrow; the right arrow mirrors them on X.
pub const CHEVRON: [Vec2; 3] = [Vec2::new(-0.5, 0.5), Vec2::ZERO, Vec2::new(-0.5, -0.5)];
/// How far from a chevron segment a click still counts as a hit.
pub const LINE_PICK_THRESHOLD: f32 = 1.0;

pub const BOOK_BUTTON_SIZE: Vec2 = Vec2::new(1.0, 0.5);
pub const BOOK_BUTTON_POSITION: Vec3 = Vec3::new(0.0, -2.5, 0.0);

pub const DESCRIPTION_ORIGIN: Vec3 = Vec3::new(-2.0, 1.0, 0.0);
pub const DESCRIPTION_ROW_HEIGHT: f32 = 0.2;
/// Cap height of description text in world units.
pub const DESCRIPTION_TEXT_SIZE: f32 = 0.1;

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Render layer shared by the overlay camera and description text.
pub const OVERLAY_LAYER: usize = 1;

/// Session-wide knobs that are not part of the poster catalog.
#[derive(Resource, Reflect, Clone, Debug)]
#[reflect(Resource)]
pub struct CarouselSettings {
    pub booking_url: String,
    /// `None` renders descriptions with Bevy's embedded font.
    pub font_path: Option<String>,
    pub clear_color: Color,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            booking_url: BOOKING_URL.to_string(),
            font_path: None,
            clear_color: Color::srgb(0.05, 0.05, 0.07),
        }
    }
}

/// World-space anchor of description row `row`.
pub fn description_anchor(row: usize) -> Vec3 {
    DESCRIPTION_ORIGIN - Vec3::Y * (row as f32 * DESCRIPTION_ROW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_rows_stack_downwards() {
        assert_eq!(description_anchor(0), Vec3::new(-2.0, 1.0, 0.0));
        let third = description_anchor(2);
        assert!((third.y - 0.6).abs() < 1e-6);
        assert_eq!(third.x, -2.0);
    }
}
