//! Licht-Accessories
//!
//! Drei Varianten (On/Off, dimmbar, RGB) mit gemeinsamem Button-Dispatch.
//! Jede Variante besitzt ihre Ausgangskanäle, ihre Attribute und genau eine
//! [`ActionTable`]. Nach jeder Zustandsänderung durch einen Button wird
//! genau einmal gerendert.

mod dimmable;
mod on_off;
mod rgb_light;

pub use dimmable::DimmableLight;
pub use on_off::OnOffLight;
pub use rgb_light::RgbLight;

use crate::action::{ActionRule, ActionTable};
use crate::characteristic::Characteristic;
use crate::config::ButtonTimings;
use crate::traits::{ButtonRegistrar, OutputChannel, ProtocolValue};
use crate::types::{ActionCode, ControlInput, PressType, RegisterError};

/// Ein Licht-Accessory beliebiger Variante
///
/// `P`, `B` und `F` sind die Protokoll-Attribute für Power, Prozentwerte
/// (Helligkeit, V) und Fließkommawerte (Farbwinkel, Sättigung).
pub enum Device<
    O,
    P = Characteristic<bool>,
    B = Characteristic<u8>,
    F = Characteristic<f32>,
> {
    OnOff(OnOffLight<O, P>),
    Dimmable(DimmableLight<O, P, B>),
    Rgb(RgbLight<O, P, F, B>),
}

impl<O, P, B, F> Device<O, P, B, F>
where
    O: OutputChannel,
    P: ProtocolValue<bool>,
    B: ProtocolValue<u8>,
    F: ProtocolValue<f32>,
{
    pub fn name(&self) -> &'static str {
        match self {
            Device::OnOff(light) => light.name(),
            Device::Dimmable(light) => light.name(),
            Device::Rgb(light) => light.name(),
        }
    }

    pub fn rules(&self) -> &ActionTable {
        match self {
            Device::OnOff(light) => light.rules(),
            Device::Dimmable(light) => light.rules(),
            Device::Rgb(light) => light.rules(),
        }
    }

    pub fn power(&self) -> &P {
        match self {
            Device::OnOff(light) => light.power(),
            Device::Dimmable(light) => light.power(),
            Device::Rgb(light) => light.power(),
        }
    }

    pub fn power_mut(&mut self) -> &mut P {
        match self {
            Device::OnOff(light) => light.power_mut(),
            Device::Dimmable(light) => light.power_mut(),
            Device::Rgb(light) => light.power_mut(),
        }
    }

    /// Schreibt den aktuellen Zustand auf die Ausgänge.
    /// Gibt immer `true` zurück.
    pub fn render(&mut self) -> bool {
        match self {
            Device::OnOff(light) => light.render(),
            Device::Dimmable(light) => light.render(),
            Device::Rgb(light) => light.render(),
        }
    }

    pub fn on_button(&mut self, control_input: ControlInput, press: PressType) {
        match self {
            Device::OnOff(light) => light.on_button(control_input, press),
            Device::Dimmable(light) => light.on_button(control_input, press),
            Device::Rgb(light) => light.on_button(control_input, press),
        }
    }

    /// Tastendruck mit rohem Classifier-Code (0 = SINGLE, 1 = DOUBLE,
    /// 2 = LONG). Unbekannte Codes werden ignoriert.
    pub fn on_raw_button(&mut self, control_input: ControlInput, raw_press: u8) {
        match PressType::try_from(raw_press) {
            Ok(press) => self.on_button(control_input, press),
            Err(()) => debug!(
                "Accessory {} got unknown press type {} on pin {}, ignored",
                self.name(),
                raw_press,
                control_input
            ),
        }
    }

    pub fn add_button<R: ButtonRegistrar>(
        &mut self,
        registrar: &mut R,
        rule: ActionRule,
    ) -> Result<(), RegisterError> {
        match self {
            Device::OnOff(light) => light.add_button(registrar, rule),
            Device::Dimmable(light) => light.add_button(registrar, rule),
            Device::Rgb(light) => light.add_button(registrar, rule),
        }
    }
}

impl<O, P, B, F> From<OnOffLight<O, P>> for Device<O, P, B, F> {
    fn from(light: OnOffLight<O, P>) -> Self {
        Device::OnOff(light)
    }
}

impl<O, P, B, F> From<DimmableLight<O, P, B>> for Device<O, P, B, F> {
    fn from(light: DimmableLight<O, P, B>) -> Self {
        Device::Dimmable(light)
    }
}

impl<O, P, B, F> From<RgbLight<O, P, F, B>> for Device<O, P, B, F> {
    fn from(light: RgbLight<O, P, F, B>) -> Self {
        Device::Rgb(light)
    }
}

// ============================================================================
// Gemeinsame Helfer der Varianten
// ============================================================================

/// Ausgangs-Pins eines Accessories, nur für Logs
#[derive(Clone, Copy)]
enum OutputPins {
    Single(u8),
    Rgb(u8, u8, u8),
}

/// Prüft die Kapazität, loggt die Konfiguration, meldet den Button beim
/// Classifier an und hängt die Regel an.
fn attach_rule<R: ButtonRegistrar>(
    kind: &str,
    name: &str,
    pins: OutputPins,
    rules: &mut ActionTable,
    registrar: &mut R,
    rule: ActionRule,
) -> Result<(), RegisterError> {
    if rules.is_full() {
        warn!(
            "Accessory {}: no room for pushbutton on pin {}",
            name, rule.control_input
        );
        return Err(RegisterError::TableFull);
    }

    match pins {
        OutputPins::Single(pin) => info!(
            "Configuring {} for accessory {} [pin {}] with control pushbutton on pin {} and index #{}",
            kind,
            name,
            pin,
            rule.control_input,
            rules.len()
        ),
        OutputPins::Rgb(r, g, b) => info!(
            "Configuring {} for accessory {} [pins ({}, {}, {})] with control pushbutton on pin {} and index #{}",
            kind,
            name,
            r,
            g,
            b,
            rule.control_input,
            rules.len()
        ),
    }
    info!("      {} on normal click", rule.on_single.describe());
    info!("      {} on double click", rule.on_double.describe());
    info!("      {} on long press", rule.on_long.describe());

    registrar.attach(rule.control_input, ButtonTimings::default());
    rules.register(rule)
}

/// Schlägt die Aktion nach und loggt den Tastendruck
fn lookup(
    name: &str,
    rules: &ActionTable,
    control_input: ControlInput,
    press: PressType,
) -> ActionCode {
    let action = rules.resolve(control_input, press);
    debug!(
        "Accessory {} got {} press on pin {}: {}",
        name,
        press.name(),
        control_input,
        action.describe()
    );
    action
}

/// Wendet eine Aktion auf ein Power-Attribut an.
/// Gibt `true` zurück, wenn neu gerendert werden muss.
fn switch_power<P: ProtocolValue<bool>>(power: &mut P, action: ActionCode) -> bool {
    match action {
        ActionCode::None => false,
        ActionCode::SetOff => {
            power.set(false);
            true
        }
        ActionCode::SetOn => {
            power.set(true);
            true
        }
        ActionCode::Toggle => {
            power.set(!power.resolved());
            true
        }
    }
}

/// Best effort: ein Fehler wird geloggt, der Aufrufer macht weiter
fn write_channel<O: OutputChannel>(channel: &mut O, percent: u8) {
    if let Err(e) = channel.set_intensity(percent) {
        error!(
            "Failed to write {} to output pin {}: {}",
            percent,
            channel.pin(),
            e
        );
    }
}
