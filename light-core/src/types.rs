//! Core Types für Button-Dispatch und Ausgänge
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Physischer Eingangs-Pin, an dem ein Pushbutton hängt
pub type ControlInput = u8;

/// Aktion, die ein Tastendruck auf das Power-Attribut eines Lichts hat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionCode {
    /// Kein Effekt
    #[default]
    None,
    SetOff,
    SetOn,
    Toggle,
}

impl ActionCode {
    /// Lesbare Beschreibung für Konfigurations-Logs
    pub const fn describe(self) -> &'static str {
        match self {
            ActionCode::SetOn => "Turns ON",
            ActionCode::SetOff => "Turns OFF",
            ActionCode::Toggle => "Toggles ON or OFF",
            ActionCode::None => "Does nothing",
        }
    }

    /// Roher Code wie in Button-Konfigurationen üblich (-1, 0, 1, 2)
    pub const fn as_raw(self) -> i8 {
        match self {
            ActionCode::None => -1,
            ActionCode::SetOff => 0,
            ActionCode::SetOn => 1,
            ActionCode::Toggle => 2,
        }
    }
}

impl TryFrom<i8> for ActionCode {
    type Error = ();

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Self::None),
            0 => Ok(Self::SetOff),
            1 => Ok(Self::SetOn),
            2 => Ok(Self::Toggle),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Klassifizierter Tastendruck, geliefert vom externen Press-Classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressType {
    Single,
    Double,
    Long,
}

impl PressType {
    pub const fn name(self) -> &'static str {
        match self {
            PressType::Single => "SINGLE",
            PressType::Double => "DOUBLE",
            PressType::Long => "LONG",
        }
    }
}

/// Rohe Classifier-Codes: 0 = SINGLE, 1 = DOUBLE, 2 = LONG
impl TryFrom<u8> for PressType {
    type Error = ();

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Single),
            1 => Ok(Self::Double),
            2 => Ok(Self::Long),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Polarität eines Ausgangs
///
/// Relais im Öffner-Betrieb und RGB-LEDs mit gemeinsamer Anode brauchen
/// invertierte Werte. Die Invertierung passiert ausschließlich hier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Wandelt eine logische Intensität (0-100) in den Wert am Pin um
    pub const fn apply(self, percent: u8) -> u8 {
        let percent = if percent > 100 { 100 } else { percent };
        match self {
            Polarity::ActiveHigh => percent,
            Polarity::ActiveLow => 100 - percent,
        }
    }
}

/// Fehler beim Anmelden einer Button-Regel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Es sind bereits `MAX_RULES` Regeln registriert
    TableFull,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::TableFull => write!(
                f,
                "button rule table full ({} rules max)",
                crate::config::MAX_RULES
            ),
        }
    }
}

impl core::error::Error for RegisterError {}
