use bevy::prelude::{Component, Reflect, ReflectComponent, Vec2, Vec3};

/// What happens when an interactive object is clicked.
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Previous,
    Next,
    Book,
}

/// Pickable outline of an interactive object, in its local XY plane.
#[derive(Reflect, Clone, Debug, PartialEq)]
pub enum HitShape {
    /// Centered rectangle.
    Rect { half_size: Vec2 },
    /// Open polyline, hit within `threshold` of any segment.
    Polyline { points: Vec<Vec2>, threshold: f32 },
}

/// Tags the arrows and the book button. Nothing else is hit-tested.
#[derive(Component, Reflect, Clone, Debug)]
#[reflect(Component)]
pub struct Interactive {
    pub role: Role,
    pub shape: HitShape,
}

/// The single poster plane currently on screen.
#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct PosterPlane {
    pub index: usize,
}

/// One description row; used for bulk removal and overlay layout.
#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct DescriptionLine {
    pub poster: usize,
    pub row: usize,
    /// World-space baseline origin of the row.
    pub anchor: Vec3,
}
