//! Speech synthesis adapters

pub mod elevenlabs;

pub use elevenlabs::ElevenLabsService;
