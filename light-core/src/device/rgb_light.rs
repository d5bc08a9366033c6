use rgb::{RGB, RGB8};

use super::{OutputPins, attach_rule, lookup, write_channel};
use crate::action::{ActionRule, ActionTable};
use crate::characteristic::Characteristic;
use crate::color::{hsv_to_rgb, to_percent};
use crate::config::{
    MAX_BRIGHTNESS, MAX_HUE, MAX_SATURATION, MIN_BRIGHTNESS, RGB_DEFAULT_VALUE, RGB_POLARITY,
};
use crate::traits::{ButtonRegistrar, OutputChannel, ProtocolValue};
use crate::types::{ActionCode, ControlInput, Polarity, PressType, RegisterError};

/// Löst ein Attribut auf und loggt alten und neuen Wert
macro_rules! resolve_logged {
    ($cell:expr, $changed:literal, $unchanged:literal) => {{
        let cell = &$cell;
        let resolved = cell.resolved();
        if cell.has_pending() {
            debug!($changed, cell.confirmed(), resolved);
        } else {
            debug!($unchanged, resolved);
        }
        resolved
    }};
}

/// RGB-Licht an drei PWM-Ausgängen (gemeinsame Anode)
///
/// Buttons unterstützen nur `SetOff`. `SetOn` und `Toggle` werden geloggt
/// und ignoriert.
pub struct RgbLight<
    O,
    P = Characteristic<bool>,
    F = Characteristic<f32>,
    V = Characteristic<u8>,
> {
    name: &'static str,
    channels: RGB<O>,
    power: P,
    hue: F,
    saturation: F,
    value: V,
    rules: ActionTable,
    polarity: Polarity,
}

impl<O: OutputChannel> RgbLight<O> {
    pub fn new(name: &'static str, red: O, green: O, blue: O) -> Self {
        Self::new_with_polarity(name, red, green, blue, RGB_POLARITY)
    }

    pub fn new_with_polarity(
        name: &'static str,
        red: O,
        green: O,
        blue: O,
        polarity: Polarity,
    ) -> Self {
        Self::with_cells(
            name,
            RGB {
                r: red,
                g: green,
                b: blue,
            },
            Characteristic::new(false),
            Characteristic::new(0.0).with_range(0.0, MAX_HUE),
            Characteristic::new(0.0).with_range(0.0, MAX_SATURATION),
            Characteristic::new(RGB_DEFAULT_VALUE).with_range(MIN_BRIGHTNESS, MAX_BRIGHTNESS),
            polarity,
        )
    }
}

impl<O, P, F, V> RgbLight<O, P, F, V>
where
    O: OutputChannel,
    P: ProtocolValue<bool>,
    F: ProtocolValue<f32>,
    V: ProtocolValue<u8>,
{
    /// Erstellt das Licht mit vom Framework gelieferten Attributen und
    /// schreibt die Kanäle einmal mit der endgültigen Polarität.
    pub fn with_cells(
        name: &'static str,
        channels: RGB<O>,
        power: P,
        hue: F,
        saturation: F,
        value: V,
        polarity: Polarity,
    ) -> Self {
        let mut light = Self {
            name,
            channels,
            power,
            hue,
            saturation,
            value,
            rules: ActionTable::new(),
            polarity,
        };
        light.render();
        light
    }

    /// Berechnet die Kanalwerte aus HSV und schreibt sie auf die Ausgänge.
    /// Ohne Änderung der Attribute liefert jeder Aufruf dieselben Werte.
    pub fn render(&mut self) -> bool {
        debug!(
            "Updating RGB light {} [pins ({}, {}, {})]",
            self.name,
            self.channels.r.pin(),
            self.channels.g.pin(),
            self.channels.b.pin()
        );

        let power = resolve_logged!(self.power, "  power={}->{}", "  power={}");
        let hue = resolve_logged!(self.hue, "  H={}->{}", "  H={}");
        let saturation = resolve_logged!(self.saturation, "  S={}->{}", "  S={}");
        let value = resolve_logged!(self.value, "  V={}->{}", "  V={}");

        let level = self.levels(power, hue, saturation, value);
        debug!("  RGB=({}, {}, {})", level.r, level.g, level.b);

        write_channel(&mut self.channels.r, self.polarity.apply(level.r));
        write_channel(&mut self.channels.g, self.polarity.apply(level.g));
        write_channel(&mut self.channels.b, self.polarity.apply(level.b));
        true
    }

    /// Logische Kanalwerte in Prozent, vor der Polarität
    fn levels(&self, power: bool, hue: f32, saturation: f32, value: u8) -> RGB8 {
        if !power {
            return RGB8::new(0, 0, 0);
        }
        let color = hsv_to_rgb(hue, saturation / 100.0, f32::from(value) / 100.0);
        RGB8::new(to_percent(color.r), to_percent(color.g), to_percent(color.b))
    }

    pub fn on_button(&mut self, control_input: ControlInput, press: PressType) {
        match lookup(self.name, &self.rules, control_input, press) {
            ActionCode::None => {}
            ActionCode::SetOff => {
                self.power.set(false);
                self.hue.set(0.0);
                self.saturation.set(0.0);
                self.value.set(0);
                debug!("RGB light {} going OFF", self.name);
                self.render();
            }
            action @ (ActionCode::SetOn | ActionCode::Toggle) => {
                info!(
                    "RGB light {}: '{}' not supported, state unchanged",
                    self.name,
                    action.describe()
                );
            }
        }
    }

    pub fn add_button<R: ButtonRegistrar>(
        &mut self,
        registrar: &mut R,
        rule: ActionRule,
    ) -> Result<(), RegisterError> {
        let pins = OutputPins::Rgb(
            self.channels.r.pin(),
            self.channels.g.pin(),
            self.channels.b.pin(),
        );
        attach_rule("RGB lamp", self.name, pins, &mut self.rules, registrar, rule)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &ActionTable {
        &self.rules
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    pub fn power_mut(&mut self) -> &mut P {
        &mut self.power
    }

    pub fn hue(&self) -> &F {
        &self.hue
    }

    pub fn hue_mut(&mut self) -> &mut F {
        &mut self.hue
    }

    pub fn saturation(&self) -> &F {
        &self.saturation
    }

    pub fn saturation_mut(&mut self) -> &mut F {
        &mut self.saturation
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn channels(&self) -> &RGB<O> {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut RGB<O> {
        &mut self.channels
    }
}
