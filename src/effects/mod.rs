use crate::dom::Listener;
use fx_core::Animation;

pub mod cursor;
pub mod field;
pub mod scroll;
pub mod tilt;
pub mod typing;

/// What an effect leaves behind once wired: listeners to drop on teardown,
/// an optional per-frame task and, for scroll reveal, the observer.
pub struct Wiring {
    pub name: &'static str,
    pub listeners: Vec<Listener>,
    pub animation: Option<Box<dyn Animation>>,
    pub observer: Option<scroll::RevealObserver>,
}

impl Wiring {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Vec::new(),
            animation: None,
            observer: None,
        }
    }

    pub fn with_animation(mut self, anim: impl Animation + 'static) -> Self {
        self.animation = Some(Box::new(anim));
        self
    }
}
