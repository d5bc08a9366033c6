use super::{OutputPins, attach_rule, lookup, switch_power, write_channel};
use crate::action::{ActionRule, ActionTable};
use crate::characteristic::Characteristic;
use crate::config::ON_OFF_POLARITY;
use crate::traits::{ButtonRegistrar, OutputChannel, ProtocolValue};
use crate::types::{ControlInput, Polarity, PressType, RegisterError};

/// Schaltbares Licht an einem GPIO-Ausgang (z.B. Relais)
pub struct OnOffLight<O, P = Characteristic<bool>> {
    name: &'static str,
    output: O,
    power: P,
    rules: ActionTable,
    polarity: Polarity,
}

impl<O: OutputChannel> OnOffLight<O> {
    /// Erstellt das Licht (aus) mit der Standard-Polarität
    pub fn new(name: &'static str, output: O) -> Self {
        Self::new_with_polarity(name, output, ON_OFF_POLARITY)
    }

    pub fn new_with_polarity(name: &'static str, output: O, polarity: Polarity) -> Self {
        Self::with_cells(name, output, Characteristic::new(false), polarity)
    }
}

impl<O, P> OnOffLight<O, P>
where
    O: OutputChannel,
    P: ProtocolValue<bool>,
{
    /// Erstellt das Licht mit einem vom Framework gelieferten Power-Attribut.
    /// Der Ausgang wird sofort mit der endgültigen Polarität geschrieben,
    /// damit das Relais beim Start nicht flackert.
    pub fn with_cells(name: &'static str, output: O, power: P, polarity: Polarity) -> Self {
        let mut light = Self {
            name,
            output,
            power,
            rules: ActionTable::new(),
            polarity,
        };
        light.render();
        light
    }

    pub fn render(&mut self) -> bool {
        let on = self.power.resolved();
        let level = if on { 100 } else { 0 };
        trace!(
            "On/Off light {} [pin {}]: power={}",
            self.name,
            self.output.pin(),
            on
        );
        write_channel(&mut self.output, self.polarity.apply(level));
        true
    }

    pub fn on_button(&mut self, control_input: ControlInput, press: PressType) {
        let action = lookup(self.name, &self.rules, control_input, press);
        if switch_power(&mut self.power, action) {
            debug!(
                "On/Off light {} going {}",
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
        attach_rule("ON/OFF lamp", self.name, pins, &mut self.rules, registrar, rule)
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

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
