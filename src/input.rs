//! Note input sources and subscription management.
//!
//! The platform MIDI stack (Web MIDI, ALSA, CoreMIDI, ...) lives outside
//! this crate. What the crate owns is the subscription discipline around
//! it: a source delivers events to at most one handler, and at most one
//! source in a registry is ever attached. Switching devices detaches
//! everything before attaching the new source, so no event from a stale
//! source is processed after switchover.

use std::fmt;

use crate::midi::NoteEvent;

/// Callback invoked with each decoded note event.
///
/// Everything is single-threaded and event-driven, so a plain `FnMut` box
/// is enough; there is no cross-thread handoff to guard.
pub type NoteHandler = Box<dyn FnMut(NoteEvent)>;

/// Error type for note-input discovery and switchover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No compatible note source is available
    NoDevicesFound,
    /// The platform refused access to note input
    PermissionDenied,
    /// The requested device id is not in the registry
    UnknownDevice(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NoDevicesFound => {
                write!(f, "no MIDI input devices found; connect a keyboard")
            }
            InputError::PermissionDenied => write!(f, "MIDI access denied"),
            InputError::UnknownDevice(id) => write!(f, "unknown input device: '{id}'"),
        }
    }
}

impl std::error::Error for InputError {}

/// A device that can deliver note events to a single registered handler.
///
/// Platform adapters implement this; [`InputRegistry`] only relies on the
/// attach/detach pair and the identity accessors used by the device picker.
pub trait NoteSource {
    /// Stable identifier used for selection.
    fn id(&self) -> &str;

    /// Human-readable device name.
    fn name(&self) -> &str;

    /// Device manufacturer, if the platform reports one.
    fn manufacturer(&self) -> &str {
        ""
    }

    /// Registers the handler receiving this source's events, replacing any
    /// previous one.
    fn attach(&mut self, handler: NoteHandler);

    /// Removes the registered handler. A no-op when none is registered.
    fn detach(&mut self);

    /// Returns true while a handler is registered.
    fn is_attached(&self) -> bool;
}

/// Owns the enumerated note sources and keeps at most one attached.
///
/// Mirrors the device-selector flow: list the devices, pick one, and let
/// the registry handle the handoff. [`switch_to`](Self::switch_to) detaches
/// every source, not just the remembered active one, before attaching the
/// chosen source. At most one source is ever attached.
pub struct InputRegistry {
    sources: Vec<Box<dyn NoteSource>>,
    active_id: Option<String>,
}

impl InputRegistry {
    /// Wraps the sources produced by platform enumeration.
    pub fn new(sources: Vec<Box<dyn NoteSource>>) -> Self {
        Self {
            sources,
            active_id: None,
        }
    }

    /// Number of known sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true when enumeration found nothing.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterates over the known sources, for the device picker.
    pub fn devices(&self) -> impl Iterator<Item = &dyn NoteSource> {
        self.sources.iter().map(|source| source.as_ref())
    }

    /// Id of the currently attached source, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Attaches `handler` to the source named by `id`, detaching every
    /// source first.
    ///
    /// The detach-then-attach order guarantees no event from the previous
    /// source is delivered after the switch.
    pub fn switch_to(&mut self, id: &str, handler: NoteHandler) -> Result<(), InputError> {
        if self.sources.is_empty() {
            return Err(InputError::NoDevicesFound);
        }
        let index = self
            .sources
            .iter()
            .position(|source| source.id() == id)
            .ok_or_else(|| InputError::UnknownDevice(id.to_string()))?;

        for source in &mut self.sources {
            source.detach();
        }
        self.active_id = None;

        self.sources[index].attach(handler);
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// Detaches every source. Used on teardown and device disconnect.
    pub fn detach_all(&mut self) {
        for source in &mut self.sources {
            source.detach();
        }
        self.active_id = None;
    }
}
