//! Resize orchestration
//!
//! The resizer runs one directional command against one window:
//! fullscreen off, read geometry, generate, pad, write, verify, correct.
//! Everything runs synchronously on the caller's thread.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::PreferenceStore;
use crate::domain::core::{Point, Rect};
use crate::domain::correction::corrected_origin;
use crate::domain::direction::Direction;
use crate::domain::frame::generate;
use crate::domain::padding::apply_padding;
use crate::platform::{
    Attribute, PlatformError, ScreenDescriptor, ScreenResolver, WindowHandle, WindowProvider,
};

/// Read-back frames within this many points of the target count as honored
pub const FRAME_TOLERANCE: f64 = 1.0;

/// Errors that abandon a resize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    #[error("no focused window to resize")]
    NoFocusedWindow,
    #[error("could not resolve the active screen")]
    NoActiveScreen,
    #[error("direction {0} has no placement")]
    NoMapping(Direction),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl ResizeError {
    /// True when the request itself was unusable, as opposed to the platform
    /// refusing to carry it out
    pub fn is_invalid_request(&self) -> bool {
        !matches!(self, ResizeError::Platform(_))
    }
}

/// What a successful resize did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// The window took the padded target (within [`FRAME_TOLERANCE`])
    Applied { target: Rect },
    /// The window diverged from the target; `origin` is where it was moved
    /// to, or `None` if it diverged but still fit on screen
    Corrected {
        target: Rect,
        actual: Rect,
        origin: Option<Point>,
    },
}

impl ResizeOutcome {
    pub fn target(&self) -> Rect {
        match self {
            ResizeOutcome::Applied { target } | ResizeOutcome::Corrected { target, .. } => *target,
        }
    }
}

/// Callback fired once after every successful resize
pub type CompletionCallback = Box<dyn FnMut(Direction)>;

/// Applies directional commands to windows
pub struct Resizer<P> {
    preferences: P,
    on_complete: Option<CompletionCallback>,
}

impl<P: PreferenceStore> Resizer<P> {
    pub fn new(preferences: P) -> Self {
        Self {
            preferences,
            on_complete: None,
        }
    }

    /// Registers the completion callback, replacing any previous one
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Direction) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Resolves the focused window and the screen under the pointer, then resizes
    ///
    /// Returns [`ResizeError::NoFocusedWindow`] or [`ResizeError::NoActiveScreen`]
    /// without touching anything if either can't be resolved.
    pub fn resize_focused_window<WP, SR>(
        &mut self,
        windows: &WP,
        screens: &SR,
        direction: Direction,
    ) -> Result<ResizeOutcome, ResizeError>
    where
        WP: WindowProvider,
        SR: ScreenResolver,
    {
        let mut window = windows.focused_window().ok_or(ResizeError::NoFocusedWindow)?;
        let screen = screens
            .screen_under_pointer()
            .ok_or(ResizeError::NoActiveScreen)?;

        self.resize(&mut window, direction, &screen)
    }

    /// Moves and resizes `window` according to `direction` on `screen`
    pub fn resize<W>(
        &mut self,
        window: &mut W,
        direction: Direction,
        screen: &ScreenDescriptor,
    ) -> Result<ResizeOutcome, ResizeError>
    where
        W: WindowHandle + ?Sized,
    {
        // Undefined commands must not cause any write, not even the fullscreen one
        if !direction.has_mapping() {
            return Err(ResizeError::NoMapping(direction));
        }

        exit_fullscreen(window)?;

        let current = window.frame()?;
        let usable = screen.usable_frame();
        let unpadded =
            generate(current, usable, direction).ok_or(ResizeError::NoMapping(direction))?;

        let padding = self.preferences.window_padding();
        let target = apply_padding(unpadded, direction, padding);
        debug!(%direction, %current, %usable, %unpadded, %target, padding, "computed placement");

        // Position first: some constrained windows clamp their size against
        // the old position. The size write is authoritative.
        window.set_position(target.origin())?;
        match window.set_size(target.size()) {
            Ok(()) => {}
            Err(PlatformError::Write(Attribute::Size)) => {
                debug!(%direction, "size write refused; verifying placement");
            }
            Err(err) => return Err(err.into()),
        }

        let actual = window.frame()?;
        let outcome = if actual.approx_eq(&target, FRAME_TOLERANCE) {
            ResizeOutcome::Applied { target }
        } else {
            let origin = self.correct(window, actual, usable, padding)?;
            ResizeOutcome::Corrected {
                target,
                actual,
                origin,
            }
        };

        info!(%direction, target = %outcome.target(), "resized window");
        if let Some(callback) = self.on_complete.as_mut() {
            callback(direction);
        }

        Ok(outcome)
    }

    /// Moves a window that overflows `screen` back inside it
    ///
    /// Only the position is written: the window has already shown it will
    /// not take the requested size.
    pub fn correct<W>(
        &self,
        window: &mut W,
        actual: Rect,
        screen: Rect,
        padding: f64,
    ) -> Result<Option<Point>, PlatformError>
    where
        W: WindowHandle + ?Sized,
    {
        let Some(origin) = corrected_origin(actual, screen, padding) else {
            debug!(%actual, %screen, "window diverged from target but fits on screen");
            return Ok(None);
        };

        warn!(
            %actual,
            %screen,
            x = origin.x,
            y = origin.y,
            "window overflows screen; moving it back"
        );
        window.set_position(origin)?;
        Ok(Some(origin))
    }
}

/// Turns fullscreen off before any geometry is read
///
/// A fullscreen window's reported frame is not usable for tiling. If the
/// flag can't be read, turning it off is attempted anyway.
fn exit_fullscreen<W>(window: &mut W) -> Result<(), PlatformError>
where
    W: WindowHandle + ?Sized,
{
    match window.is_fullscreen() {
        Ok(false) => Ok(()),
        Ok(true) => window.set_fullscreen(false),
        Err(err) => {
            debug!(%err, "fullscreen state unknown; forcing it off");
            window.set_fullscreen(false)
        }
    }
}
