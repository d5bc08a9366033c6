//! Hardware- und Protokoll-Abstraktionen
//!
//! Diese Traits definieren Schnittstellen zu den externen Kollaborateuren
//! (PWM/GPIO-Treiber, Characteristic-Framework, Press-Classifier)
//! ohne konkrete Implementierung.

use core::fmt;

use crate::config::ButtonTimings;
use crate::types::ControlInput;

/// Fehler-Typ für Ausgangs-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    WriteFailed,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::WriteFailed => f.write_str("output channel write failed"),
        }
    }
}

impl core::error::Error for OutputError {}

/// Trait für einen physischen Ausgangskanal (PWM oder GPIO)
///
/// # Implementierungen
/// - **Production:** LEDC-PWM oder GPIO-Treiber der Firmware
/// - **Testing:** MockOutputChannel (in-memory Mock)
pub trait OutputChannel {
    /// Stabile physische Kennung (Pin-Nummer), nur für Logs
    fn pin(&self) -> u8;

    /// Setzt die Intensität in Prozent (0-100)
    ///
    /// # Fehlerbehandlung
    /// Gibt `OutputError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_intensity(&mut self, percent: u8) -> Result<(), OutputError>;
}

/// Ein Attribut des Fernsteuerungs-Protokolls mit bestätigtem und
/// ausstehendem Wert
pub trait ProtocolValue<T: Copy> {
    /// Zuletzt als gültig übernommener Wert
    fn confirmed(&self) -> T;

    /// Neu geschriebener, noch nicht übernommener Wert.
    /// Ohne ausstehendes Update identisch mit `confirmed()`.
    fn pending(&self) -> T;

    fn has_pending(&self) -> bool;

    /// Lokaler Schreibzugriff, wird sofort der bestätigte Wert
    fn set(&mut self, value: T);

    /// Ausstehender Wert falls vorhanden, sonst der bestätigte
    fn resolved(&self) -> T {
        if self.has_pending() {
            self.pending()
        } else {
            self.confirmed()
        }
    }
}

/// Meldet einen Pushbutton beim Press-Classifier an
///
/// Die Timings werden unverändert durchgereicht.
pub trait ButtonRegistrar {
    fn attach(&mut self, control_input: ControlInput, timings: ButtonTimings);
}

/// Für Geräte ohne physische Buttons
impl ButtonRegistrar for () {
    fn attach(&mut self, _control_input: ControlInput, _timings: ButtonTimings) {}
}
