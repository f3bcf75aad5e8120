//! Simulated board for integration tests.
//!
//! A fake I²C bus that answers as both the HT16K33 and the MMA8451Q, a
//! recording SPI bus, and shared-handle GPIO pins. Tests keep clones of
//! the pins and the SPI log so they can drive inputs and inspect outputs
//! while the demo owns the drivers.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use devboard::app::demo::Demo;
use devboard::app::events::AppEvent;
use devboard::app::ports::EventSink;
use devboard::config::DemoConfig;
use devboard::drivers::ht16k33::Ht16k33;
use devboard::drivers::inputs::Inputs;
use devboard::drivers::mma8451q::{Mma8451q, reg};
use devboard::drivers::shift_register::ShiftRegister;
use devboard::drivers::status_led::StatusLeds;
use devboard::pins;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, I2c, NoAcknowledgeSource, Operation};
use embedded_hal::spi::{self, SpiBus};
use embedded_hal_bus::i2c::RefCellDevice;

pub const DISPLAY_ADDR: u8 = pins::HT16K33_ADDRESS;
pub const ACCEL_ADDR: u8 = pins::MMA8451Q_ADDRESS;

// ── I²C ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault(pub ErrorKind);

impl i2c::Error for BusFault {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

const NAK: BusFault = BusFault(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));

/// Both chips behind one bus.
pub struct FakeI2cBus {
    /// HT16K33 display RAM, two bytes per digit.
    pub display_ram: [u8; 16],
    /// Single-byte command writes to the HT16K33, in order.
    pub display_commands: Vec<u8>,
    pub display_present: bool,
    /// MMA8451Q register file.
    pub accel_regs: [u8; 0x32],
    /// Fail every accelerometer read while set.
    pub accel_read_fault: bool,
    accel_pointer: u8,
}

#[allow(dead_code)]
impl FakeI2cBus {
    pub fn new() -> Self {
        let mut accel_regs = [0u8; 0x32];
        accel_regs[reg::WHO_AM_I as usize] = 0x2A;
        Self {
            display_ram: [0; 16],
            display_commands: Vec::new(),
            display_present: true,
            accel_regs,
            accel_read_fault: false,
            accel_pointer: 0,
        }
    }

    pub fn digit(&self, position: usize) -> u16 {
        u16::from_le_bytes([self.display_ram[position * 2], self.display_ram[position * 2 + 1]])
    }

    pub fn digits(&self) -> [u16; 4] {
        [self.digit(0), self.digit(1), self.digit(2), self.digit(3)]
    }

    pub fn last_display_command(&self) -> Option<u8> {
        self.display_commands.last().copied()
    }

    pub fn accel_reg(&self, r: u8) -> u8 {
        self.accel_regs[r as usize]
    }

    /// Load a 14-bit sample per axis into OUT_X_MSB..OUT_Z_LSB.
    pub fn set_sample(&mut self, x: i16, y: i16, z: i16) {
        for (i, v) in [x, y, z].into_iter().enumerate() {
            let [msb, lsb] = ((v as u16) << 2).to_be_bytes();
            self.accel_regs[reg::OUT_X_MSB as usize + i * 2] = msb;
            self.accel_regs[reg::OUT_X_MSB as usize + i * 2 + 1] = lsb;
        }
    }

    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusFault> {
        match address {
            DISPLAY_ADDR if self.display_present => {
                match bytes {
                    [cmd] => self.display_commands.push(*cmd),
                    [ptr, data @ ..] => {
                        for (i, b) in data.iter().enumerate() {
                            self.display_ram[(*ptr as usize + i) % 16] = *b;
                        }
                    }
                    [] => {}
                }
                Ok(())
            }
            ACCEL_ADDR => {
                if let [ptr, data @ ..] = bytes {
                    self.accel_pointer = *ptr;
                    for b in data {
                        self.accel_regs[self.accel_pointer as usize] = *b;
                        self.accel_pointer += 1;
                    }
                }
                Ok(())
            }
            _ => Err(NAK),
        }
    }

    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusFault> {
        if address != ACCEL_ADDR {
            return Err(NAK);
        }
        if self.accel_read_fault {
            return Err(BusFault(ErrorKind::ArbitrationLoss));
        }
        for b in buf {
            *b = self.accel_regs[self.accel_pointer as usize];
            self.accel_pointer += 1;
        }
        Ok(())
    }
}

impl i2c::ErrorType for FakeI2cBus {
    type Error = BusFault;
}

impl I2c for FakeI2cBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), BusFault> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.write_bytes(address, bytes)?,
                Operation::Read(buf) => self.read_bytes(address, buf)?,
            }
        }
        Ok(())
    }
}

// ── SPI ───────────────────────────────────────────────────────

/// Records every byte clocked out and every flush.
#[derive(Clone, Default)]
pub struct FakeSpi(Rc<RefCell<SpiLog>>);

#[derive(Default)]
pub struct SpiLog {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

#[allow(dead_code)]
impl FakeSpi {
    pub fn bytes(&self) -> Vec<u8> {
        self.0.borrow().bytes.clone()
    }

    pub fn flushes(&self) -> usize {
        self.0.borrow().flushes
    }

    pub fn clear(&self) {
        self.0.borrow_mut().bytes.clear();
    }
}

impl spi::ErrorType for FakeSpi {
    type Error = Infallible;
}

impl SpiBus for FakeSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
        self.0.borrow_mut().bytes.extend_from_slice(words);
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
        self.write(write)?;
        self.read(read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
        self.0.borrow_mut().bytes.extend_from_slice(words);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().flushes += 1;
        Ok(())
    }
}

// ── GPIO ──────────────────────────────────────────────────────

/// A pin whose level both the demo and the test can see.
#[derive(Clone)]
pub struct FakePin(Rc<RefCell<PinLog>>);

pub struct PinLog {
    pub high: bool,
    /// Every level driven as an output.
    pub history: Vec<bool>,
}

#[allow(dead_code)]
impl FakePin {
    pub fn new(high: bool) -> Self {
        Self(Rc::new(RefCell::new(PinLog {
            high,
            history: Vec::new(),
        })))
    }

    pub fn level(&self) -> bool {
        self.0.borrow().high
    }

    /// Drive the pin from the outside, as a button or switch would.
    pub fn set_level(&self, high: bool) {
        self.0.borrow_mut().high = high;
    }

    pub fn history(&self) -> Vec<bool> {
        self.0.borrow().history.clone()
    }

    pub fn clear_history(&self) {
        self.0.borrow_mut().history.clear();
    }
}

impl digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut log = self.0.borrow_mut();
        log.high = false;
        log.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut log = self.0.borrow_mut();
        log.high = true;
        log.history.push(true);
        Ok(())
    }
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.borrow().high)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.borrow().high)
    }
}

// ── Delay / sink ──────────────────────────────────────────────

/// Adds up requested sleeps instead of sleeping.
#[derive(Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Bench ─────────────────────────────────────────────────────

pub type BenchDemo<'a> = Demo<
    RefCellDevice<'a, FakeI2cBus>,
    RefCellDevice<'a, FakeI2cBus>,
    FakeSpi,
    FakePin,
    FakePin,
>;

/// The whole board at power-on: buttons released, switches off,
/// LEDs dark.
pub struct Bench {
    pub bus: RefCell<FakeI2cBus>,
    pub spi: FakeSpi,
    pub latch: FakePin,
    pub output_enable: FakePin,
    pub reset: FakePin,
    pub buttons: [FakePin; 4],
    pub switches: [FakePin; 8],
    pub red: FakePin,
    pub yellow: FakePin,
    pub green: FakePin,
}

#[allow(dead_code)]
impl Bench {
    pub fn new() -> Self {
        Self {
            bus: RefCell::new(FakeI2cBus::new()),
            spi: FakeSpi::default(),
            latch: FakePin::new(false),
            output_enable: FakePin::new(true),
            reset: FakePin::new(false),
            buttons: core::array::from_fn(|_| FakePin::new(true)),
            switches: core::array::from_fn(|_| FakePin::new(true)),
            red: FakePin::new(false),
            yellow: FakePin::new(false),
            green: FakePin::new(false),
        }
    }

    /// Wire the demo to this bench, sharing the I²C bus the way the
    /// firmware does.
    pub fn demo(&self, config: DemoConfig) -> BenchDemo<'_> {
        Demo::new(
            config,
            Ht16k33::new(RefCellDevice::new(&self.bus), DISPLAY_ADDR),
            Mma8451q::new(RefCellDevice::new(&self.bus), ACCEL_ADDR),
            ShiftRegister::new(
                self.spi.clone(),
                self.latch.clone(),
                self.output_enable.clone(),
                self.reset.clone(),
            ),
            Inputs::new(self.buttons.clone(), self.switches.clone()),
            StatusLeds::new(self.red.clone(), self.yellow.clone(), self.green.clone()),
        )
    }

    /// Switch SWn (1-based) on or off.
    pub fn set_switch(&self, n: usize, on: bool) {
        self.switches[n - 1].set_level(!on);
    }

    /// Press or release BTNn (1-based).
    pub fn set_button(&self, n: usize, pressed: bool) {
        self.buttons[n - 1].set_level(!pressed);
    }
}
