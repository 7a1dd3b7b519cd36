use bevy::prelude::Event;

/// Replace the poster plane with poster `index`.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPoster {
    pub index: usize,
}

/// Rebuild the description lines for poster `index`.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshDescription {
    pub index: usize,
}
