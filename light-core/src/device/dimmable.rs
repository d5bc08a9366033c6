use super::{OutputPins, attach_rule, lookup, switch_power, write_channel};
use crate::action::{ActionRule, ActionTable};
use crate::characteristic::Characteristic;
use crate::config::{
    DIMMABLE_DEFAULT_BRIGHTNESS, DIMMABLE_POLARITY, MAX_BRIGHTNESS, MIN_BRIGHTNESS,
};
use crate::traits::{ButtonRegistrar, OutputChannel, ProtocolValue};
use crate::types::{ControlInput, Polarity, PressType, RegisterError};

/// Dimmbares Licht an einem PWM-Ausgang
///
/// Buttons schalten nur `power`, die Helligkeit kommt ausschließlich vom
/// Controller.
pub struct DimmableLight<O, P = Characteristic<bool>, B = Characteristic<u8>> {
    name: &'static str,
    output: O,
    power: P,
    brightness: B,
    rules: ActionTable,
    polarity: Polarity,
}

impl<O: OutputChannel> DimmableLight<O> {
    pub fn new(name: &'static str, output: O) -> Self {
        Self::new_with_polarity(name, output, DIMMABLE_POLARITY)
    }

    pub fn new_with_polarity(name: &'static str, output: O, polarity: Polarity) -> Self {
        Self::with_cells(
            name,
            output,
            Characteristic::new(false),
            Characteristic::new(DIMMABLE_DEFAULT_BRIGHTNESS)
                .with_range(MIN_BRIGHTNESS, MAX_BRIGHTNESS),
            polarity,
        )
    }
}

impl<O, P, B> DimmableLight<O, P, B>
where
    O: OutputChannel,
    P: ProtocolValue<bool>,
    B: ProtocolValue<u8>,
{
    pub fn with_cells(
        name: &'static str,
        output: O,
        power: P,
        brightness: B,
        polarity: Polarity,
    ) -> Self {
        let mut light = Self {
            name,
            output,
            power,
            brightness,
            rules: ActionTable::new(),
            polarity,
        };
        light.render();
        light
    }

    /// Power und Helligkeit werden unabhängig voneinander aufgelöst
    /// (ausstehender Wert, sonst bestätigter Wert)
    pub fn render(&mut self) -> bool {
        let on = self.power.resolved();
        let brightness = self
            .brightness
            .resolved()
            .clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
        let level = if on { brightness } else { 0 };
        trace!(
            "Dimmable light {} [pin {}]: power={} brightness={} -> {}%",
            self.name,
            self.output.pin(),
            on,
            brightness,
            level
        );
        write_channel(&mut self.output, self.polarity.apply(level));
        true
    }

    pub fn on_button(&mut self, control_input: ControlInput, press: PressType) {
        let action = lookup(self.name, &self.rules, control_input, press);
        if switch_power(&mut self.power, action) {
            debug!(
                "Dimmable light {} going {}",
                self.name,
                if self.power.confirmed() { "ON" } else { "OFF" }
            );
            self.render();
        }
    }

    pub fn add_button<R: ButtonRegistrar>(
        &mut self,
        registrar: &mut R,
        rule: ActionRule,
    ) -> Result<(), RegisterError> {
        let pins = OutputPins::Single(self.output.pin());
        attach_rule("dimmable lamp", self.name, pins, &mut self.rules, registrar, rule)
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

    pub fn brightness(&self) -> &B {
        &self.brightness
    }

    pub fn brightness_mut(&mut self) -> &mut B {
        &mut self.brightness
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
