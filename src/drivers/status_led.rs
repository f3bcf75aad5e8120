//! Traffic-light status LEDs.
//!
//! Three discrete LEDs (red, yellow, green) on plain GPIO outputs,
//! active HIGH. The driver mirrors what it last wrote.

use embedded_hal::digital::OutputPin;

use crate::drivers::inputs::ButtonLevels;
use crate::error::{BusError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedState {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

pub struct StatusLeds<OUT> {
    red: OUT,
    yellow: OUT,
    green: OUT,
    current: LedState,
}

impl<OUT: OutputPin> StatusLeds<OUT> {
    pub fn new(red: OUT, yellow: OUT, green: OUT) -> Self {
        Self {
            red,
            yellow,
            green,
            current: LedState::default(),
        }
    }

    pub fn set(&mut self, state: LedState) -> Result<()> {
        drive(&mut self.red, state.red)?;
        drive(&mut self.yellow, state.yellow)?;
        drive(&mut self.green, state.green)?;
        self.current = state;
        Ok(())
    }

    pub fn off(&mut self) -> Result<()> {
        self.set(LedState::default())
    }

    /// Red + yellow on while any button input reads HIGH, everything off
    /// otherwise. Green is never switched on here.
    pub fn reflect_buttons(&mut self, levels: &ButtonLevels) -> Result<()> {
        if levels.any_high() {
            drive(&mut self.red, true)?;
            drive(&mut self.yellow, true)?;
            self.current.red = true;
            self.current.yellow = true;
            Ok(())
        } else {
            self.off()
        }
    }

    pub fn current(&self) -> LedState {
        self.current
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) -> Result<()> {
    pin.set_state(on.into()).map_err(|e| BusError::gpio(&e).into())
}
