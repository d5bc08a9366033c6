//! Konfiguration: Konstanten und Default-Werte
//!
//! Alle Werte sind Compile-Time-Konstanten, es gibt keine Persistenz.

use crate::types::Polarity;

// ============================================================================
// Pushbutton Konfiguration
// ============================================================================

/// Maximale Anzahl an Button-Regeln pro Accessory
pub const MAX_RULES: usize = 3;

/// Mindestdauer (ms) für einen langen Tastendruck
pub const LONG_PRESS_MS: u16 = 1200;

/// Kürzester gültiger Impuls (ms), alles darunter gilt als Prellen
pub const MIN_PULSE_MS: u16 = 10;

/// Zeitfenster (ms) für Single- vs. Double-Click
pub const DOUBLE_CLICK_MS: u16 = 300;

// ============================================================================
// Helligkeit / Farbe
// ============================================================================

/// Untere Grenze der Helligkeit in Prozent
pub const MIN_BRIGHTNESS: u8 = 5;

/// Obere Grenze der Helligkeit in Prozent
pub const MAX_BRIGHTNESS: u8 = 100;

/// Start-Helligkeit eines dimmbaren Lichts
pub const DIMMABLE_DEFAULT_BRIGHTNESS: u8 = 50;

/// Start-Helligkeit (V) eines RGB-Lichts
pub const RGB_DEFAULT_VALUE: u8 = 100;

/// Maximaler Farbwinkel in Grad
pub const MAX_HUE: f32 = 360.0;

/// Maximale Sättigung in Prozent
pub const MAX_SATURATION: f32 = 100.0;

// ============================================================================
// Ausgangs-Polarität
// ============================================================================

/// On/Off-Ausgang treibt ein Relais im Öffner-Betrieb (normally closed)
pub const ON_OFF_POLARITY: Polarity = Polarity::ActiveLow;

/// Dimmbarer PWM-Ausgang ist nicht invertiert
pub const DIMMABLE_POLARITY: Polarity = Polarity::ActiveHigh;

/// RGB-LED mit gemeinsamer Anode: 100% Duty = aus
pub const RGB_POLARITY: Polarity = Polarity::ActiveLow;

/// Timing-Parameter, die beim Anmelden eines Buttons an den
/// Press-Classifier durchgereicht werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTimings {
    pub long_press_ms: u16,
    pub min_pulse_ms: u16,
    pub double_click_ms: u16,
}

impl Default for ButtonTimings {
    fn default() -> Self {
        Self {
            long_press_ms: LONG_PRESS_MS,
            min_pulse_ms: MIN_PULSE_MS,
            double_click_ms: DOUBLE_CLICK_MS,
        }
    }
}
