//! Display mode state machine.
//!
//! Formation is the initial mode. Transitions come from gesture
//! classifications (or an explicit UI request). Entering focus is
//! edge-triggered: the focused photo is drawn once on entry and stays
//! stable until the mode is left.

use crate::gesture::GestureClass;
use crate::scene::SceneRegistry;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Formation,
    Scatter,
    Focus,
}

impl Mode {
    /// Short label for display purposes.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Formation => "formation",
            Mode::Scatter => "scatter",
            Mode::Focus => "focus",
        }
    }
}

fn mode_for_class(class: GestureClass) -> Mode {
    match class {
        GestureClass::Pinch => Mode::Focus,
        GestureClass::Fist => Mode::Formation,
        GestureClass::Open => Mode::Scatter,
    }
}

pub struct ModeResolver {
    mode: Mode,
    previous: Mode,
    focused: Option<usize>,
}

impl Default for ModeResolver {
    fn default() -> Self {
        Self {
            mode: Mode::Formation,
            previous: Mode::Formation,
            focused: None,
        }
    }
}

impl ModeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn previous(&self) -> Mode {
        self.previous
    }

    /// Registry index of the spotlighted object; `Some` only while in focus
    /// and only if a photo existed on entry.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Maps a gesture classification to a transition request. No
    /// classification means no transition.
    pub fn apply(
        &mut self,
        class: Option<GestureClass>,
        registry: &SceneRegistry,
        rng: &mut StdRng,
    ) -> Option<Mode> {
        self.request(mode_for_class(class?), registry, rng)
    }

    /// Requests a transition to `mode`. Returns `Some(mode)` only on an
    /// actual change; re-requesting the current mode is a no-op, which is
    /// what keeps the focus selection stable frame to frame.
    pub fn request(
        &mut self,
        mode: Mode,
        registry: &SceneRegistry,
        rng: &mut StdRng,
    ) -> Option<Mode> {
        if mode == self.mode {
            return None;
        }
        self.previous = self.mode;
        self.mode = mode;
        self.focused = match mode {
            // If no photos exist the scene enters focus unfocused: every
            // object clears to the perimeter, nothing is spotlighted.
            Mode::Focus => choose_focus(registry, rng),
            _ => None,
        };
        Some(mode)
    }
}

fn choose_focus(registry: &SceneRegistry, rng: &mut StdRng) -> Option<usize> {
    let photos = registry.photo_indices();
    if photos.is_empty() {
        log::warn!("[mode] entering focus with no photo objects");
        return None;
    }
    Some(photos[rng.gen_range(0..photos.len())])
}
