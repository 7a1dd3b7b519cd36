use bevy::{
    asset::{AssetEvent, AssetId, AssetLoadFailedEvent, AssetServer, Handle},
    ecs::{
        event::{EventReader, EventWriter},
        system::{Commands, Res, ResMut},
    },
    image::Image,
    log::{debug, info, warn},
    prelude::Resource,
    text::Font,
};

use crate::carousel::events::{DisplayPoster, RefreshDescription};
use crate::catalog::Catalog;
use crate::config::CarouselSettings;

/// One image handle per catalog entry, with its readiness.
#[derive(Resource, Default, Debug)]
pub struct PosterTextures {
    slots: Vec<TextureSlot>,
}

#[derive(Debug)]
struct TextureSlot {
    handle: Handle<Image>,
    ready: bool,
}

impl PosterTextures {
    pub fn new(handles: impl IntoIterator<Item = Handle<Image>>) -> Self {
        Self {
            slots: handles
                .into_iter()
                .map(|handle| TextureSlot {
                    handle,
                    ready: false,
                })
                .collect(),
        }
    }

    /// The texture for `index`, once it has finished loading.
    pub fn ready(&self, index: usize) -> Option<&Handle<Image>> {
        self.slots
            .get(index)
            .filter(|slot| slot.ready)
            .map(|slot| &slot.handle)
    }

    /// Marks every slot holding `id` as loaded, returning the slots that were
    /// not ready before.
    fn mark_loaded(&mut self, id: AssetId<Image>) -> Vec<usize> {
        let mut newly_ready = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.handle.id() == id && !slot.ready {
                slot.ready = true;
                newly_ready.push(index);
            }
        }
        newly_ready
    }
}

/// The shared description font. Loaded once and cached for the session.
#[derive(Resource, Debug)]
pub struct DescriptionFont {
    handle: Handle<Font>,
    ready: bool,
    /// Latest refresh requested before the font arrived.
    pending: Option<usize>,
}

impl DescriptionFont {
    pub fn loading(handle: Handle<Font>) -> Self {
        Self {
            handle,
            ready: false,
            pending: None,
        }
    }

    /// Bevy's embedded font, which needs no loading.
    pub fn embedded() -> Self {
        Self {
            handle: Handle::default(),
            ready: true,
            pending: None,
        }
    }

    pub fn ready(&self) -> Option<&Handle<Font>> {
        self.ready.then_some(&self.handle)
    }

    pub fn defer(&mut self, index: usize) {
        self.pending = Some(index);
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }
}

/// Requests every poster image and the description font up front.
pub fn request_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    catalog: Res<Catalog>,
    settings: Res<CarouselSettings>,
) {
    let textures =
        PosterTextures::new(catalog.iter().map(|record| asset_server.load(&record.image)));
    info!("Requested {} poster textures", catalog.len());
    commands.insert_resource(textures);

    let font = match &settings.font_path {
        Some(path) => DescriptionFont::loading(asset_server.load(path)),
        None => DescriptionFont::embedded(),
    };
    commands.insert_resource(font);
}

/// Marks textures ready as they land; the first poster is shown once its own
/// texture is in.
pub fn track_texture_loads(
    mut events: EventReader<AssetEvent<Image>>,
    mut textures: ResMut<PosterTextures>,
    mut display: EventWriter<DisplayPoster>,
) {
    for event in events.read() {
        let AssetEvent::LoadedWithDependencies { id } = event else {
            continue;
        };
        for index in textures.mark_loaded(*id) {
            debug!("Poster texture {index} loaded");
            if index == 0 {
                display.write(DisplayPoster { index });
            }
        }
    }
}

pub fn track_font_load(
    mut events: EventReader<AssetEvent<Font>>,
    mut font: ResMut<DescriptionFont>,
    mut refresh: EventWriter<RefreshDescription>,
) {
    for event in events.read() {
        let AssetEvent::LoadedWithDependencies { id } = event else {
            continue;
        };
        if font.ready || *id != font.handle.id() {
            continue;
        }
        font.ready = true;
        debug!("Description font loaded");
        if let Some(index) = font.pending.take() {
            refresh.write(RefreshDescription { index });
        }
    }
}

// Fetch failures leave the poster or text missing; make them visible in the log
pub fn report_failed_loads(
    mut images: EventReader<AssetLoadFailedEvent<Image>>,
    mut fonts: EventReader<AssetLoadFailedEvent<Font>>,
) {
    for failed in images.read() {
        warn!("Poster image {} failed to load: {}", failed.path, failed.error);
    }
    for failed in fonts.read() {
        warn!("Description font {} failed to load: {}", failed.path, failed.error);
    }
}
