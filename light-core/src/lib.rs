//! Light Core - Platform-agnostic Button-Dispatch und Render-Logik
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Ausgänge, Protokoll-Attribute und Press-Classifier sind Traits,
//! Farbumrechnung und Regel-Tabellen sind Pure Logic.

#![no_std]

#[macro_use]
mod fmt;

pub mod action;
pub mod characteristic;
pub mod color;
pub mod config;
pub mod device;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use action::{ActionRule, ActionTable};
pub use characteristic::Characteristic;
pub use color::{hsv_to_rgb, to_percent};
pub use config::{ButtonTimings, MAX_RULES};
pub use device::{DimmableLight, Device, OnOffLight, RgbLight};
pub use traits::{ButtonRegistrar, OutputChannel, OutputError, ProtocolValue};
pub use types::{ActionCode, ControlInput, Polarity, PressType, RegisterError};
