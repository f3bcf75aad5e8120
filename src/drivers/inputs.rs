//! Push-buttons and slide switches.
//!
//! ## Hardware
//!
//! Everything is wired to ground with the RP2350's internal pull-ups
//! enabled, so an idle input reads HIGH:
//!
//! | Input   | HIGH      | LOW     |
//! |---------|-----------|---------|
//! | Button  | released  | pressed |
//! | Switch  | off       | on      |
//!
//! Buttons are reported as raw levels (1 = released) to match the console
//! output of the board's test procedure. Switches are inverted so that
//! `1 = on`.

use embedded_hal::digital::InputPin;

use crate::error::{BusError, Result};

pub const NUM_BUTTONS: usize = 4;
pub const NUM_SWITCHES: usize = 8;

/// Raw button levels, BTN1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonLevels(pub [u8; NUM_BUTTONS]);

impl ButtonLevels {
    /// At least one input reads HIGH.
    pub fn any_high(&self) -> bool {
        self.0.iter().any(|&l| l != 0)
    }

    /// Every button held down.
    pub fn all_pressed(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }
}

/// Switch states, SW1 first, `true` = on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchStates(pub [bool; NUM_SWITCHES]);

impl SwitchStates {
    /// Pack into one byte: SW1 → bit 0 … SW8 → bit 7.
    pub fn to_byte(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, &on)| acc | (u8::from(on) << bit))
    }
}

pub struct Inputs<IN> {
    buttons: [IN; NUM_BUTTONS],
    switches: [IN; NUM_SWITCHES],
}

impl<IN: InputPin> Inputs<IN> {
    pub fn new(buttons: [IN; NUM_BUTTONS], switches: [IN; NUM_SWITCHES]) -> Self {
        Self { buttons, switches }
    }

    pub fn read_buttons(&mut self) -> Result<ButtonLevels> {
        let mut levels = [0u8; NUM_BUTTONS];
        for (level, pin) in levels.iter_mut().zip(self.buttons.iter_mut()) {
            *level = u8::from(pin.is_high().map_err(|e| BusError::gpio(&e))?);
        }
        Ok(ButtonLevels(levels))
    }

    pub fn read_switches(&mut self) -> Result<SwitchStates> {
        let mut states = [false; NUM_SWITCHES];
        for (on, pin) in states.iter_mut().zip(self.switches.iter_mut()) {
            *on = pin.is_low().map_err(|e| BusError::gpio(&e))?;
        }
        Ok(SwitchStates(states))
    }

    /// Switch states packed for the shift-register chain.
    pub fn switch_byte(&mut self) -> Result<u8> {
        Ok(self.read_switches()?.to_byte())
    }
}
