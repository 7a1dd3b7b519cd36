use bevy::prelude::{Reflect, ReflectResource, Resource};

/// Which poster is on screen. `len` mirrors the catalog size and is never 0.
#[derive(Resource, Reflect, Clone, Copy, Debug, PartialEq, Eq)]
#[reflect(Resource)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel needs at least one poster");
        Self {
            current_index: 0,
            len,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.len;
        self.current_index
    }

    pub fn retreat(&mut self) -> usize {
        self.current_index = (self.current_index + self.len - 1) % self.len;
        self.current_index
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.current_index = index;
    }
}
