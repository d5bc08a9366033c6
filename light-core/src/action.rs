//! Button-Regeln
//!
//! Eine [`ActionRule`] ordnet einem Eingangs-Pin je eine Aktion für langen,
//! einfachen und doppelten Tastendruck zu. Jedes Licht besitzt genau eine
//! [`ActionTable`] mit höchstens [`MAX_RULES`] Einträgen.

use heapless::Vec;

use crate::config::MAX_RULES;
use crate::types::{ActionCode, ControlInput, PressType, RegisterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRule {
    pub control_input: ControlInput,
    pub on_long: ActionCode,
    pub on_single: ActionCode,
    pub on_double: ActionCode,
}

impl ActionRule {
    pub const fn new(
        control_input: ControlInput,
        on_long: ActionCode,
        on_single: ActionCode,
        on_double: ActionCode,
    ) -> Self {
        Self {
            control_input,
            on_long,
            on_single,
            on_double,
        }
    }

    /// Aktion für den gegebenen Tastendruck
    pub const fn action_for(&self, press: PressType) -> ActionCode {
        match press {
            PressType::Single => self.on_single,
            PressType::Double => self.on_double,
            PressType::Long => self.on_long,
        }
    }
}

/// Regeln eines Lichts in Registrierungs-Reihenfolge
///
/// Doppelte Eingangs-Pins werden akzeptiert, beim Nachschlagen gewinnt die
/// zuerst registrierte Regel.
#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    rules: Vec<ActionRule, MAX_RULES>,
}

impl ActionTable {
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Hängt eine Regel an
    ///
    /// # Fehlerbehandlung
    /// `RegisterError::TableFull` wenn bereits `MAX_RULES` Regeln existieren,
    /// die Tabelle bleibt dann unverändert.
    pub fn register(&mut self, rule: ActionRule) -> Result<(), RegisterError> {
        self.rules.push(rule).map_err(|_| RegisterError::TableFull)
    }

    /// Schlägt die Aktion für einen Tastendruck nach.
    /// Ohne passende Regel ist das Ergebnis `ActionCode::None`.
    pub fn resolve(&self, control_input: ControlInput, press: PressType) -> ActionCode {
        self.find(control_input)
            .map(|rule| rule.action_for(press))
            .unwrap_or(ActionCode::None)
    }

    /// Wie [`resolve`](Self::resolve), mit rohem Classifier-Code.
    /// Unbekannte Codes ergeben `ActionCode::None`.
    pub fn resolve_raw(&self, control_input: ControlInput, raw_press: u8) -> ActionCode {
        match PressType::try_from(raw_press) {
            Ok(press) => self.resolve(control_input, press),
            Err(()) => ActionCode::None,
        }
    }

    /// Erste Regel für den Eingangs-Pin
    pub fn find(&self, control_input: ControlInput) -> Option<&ActionRule> {
        self.rules
            .iter()
            .find(|rule| rule.control_input == control_input)
    }

    pub fn get(&self, index: usize) -> Option<&ActionRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rules.is_full()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ActionRule {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ActionRule {{ pin: {}, long: {}, single: {}, double: {} }}",
            self.control_input,
            self.on_long,
            self.on_single,
            self.on_double
        )
    }
}
