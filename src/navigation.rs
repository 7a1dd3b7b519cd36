//! Leaving the scene for the booking page.

use bevy::prelude::*;
use error_stack::Report;

use crate::error::{NavigationError, Result};
use crate::input::systems::dispatch_clicks;

/// Follows booking requests out of the app.
pub struct BookingRedirectPlugin;

impl Plugin for BookingRedirectPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BookingRequested>()
            .add_systems(Update, open_booking_page.after(dispatch_clicks));
    }
}

/// Full navigation to `url` was requested.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct BookingRequested {
    pub url: String,
}

pub fn open_booking_page(mut requests: EventReader<BookingRequested>) {
    for request in requests.read() {
        match navigate_to(&request.url) {
            Ok(()) => info!("Opened {}", request.url),
            Err(report) => error!("{report:?}"),
        }
    }
}

/// Replaces the current page with `url`.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(url: &str) -> Result<(), NavigationError> {
    let window = web_sys::window()
        .ok_or_else(|| Report::new(NavigationError).attach("no browser window"))?;
    window.location().set_href(url).map_err(|err| {
        Report::new(NavigationError).attach(format!("set_href({url}) rejected: {err:?}"))
    })
}

/// Hands `url` to the system browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(url: &str) -> Result<(), NavigationError> {
    open::that(url).map_err(|err| {
        Report::new(err)
            .change_context(NavigationError)
            .attach(format!("opening {url}"))
    })
}
