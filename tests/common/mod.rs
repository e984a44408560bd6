//! Register-file MPU6886 stand-in for the driver tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use mpu6886::{I2cDevice, Mpu6886, MpuConfig, Vec3};

pub const ADDRESS: u8 = 0x68;

pub const XG_OFFS_USRH: u8 = 0x13;
pub const YG_OFFS_USRH: u8 = 0x15;
pub const ZG_OFFS_USRH: u8 = 0x17;
pub const SMPLRT_DIV: u8 = 0x19;
pub const CONFIG: u8 = 0x1a;
pub const GYRO_CONFIG: u8 = 0x1b;
pub const ACCEL_CONFIG: u8 = 0x1c;
pub const ACCEL_CONFIG2: u8 = 0x1d;
pub const FIFO_EN: u8 = 0x23;
pub const INT_PIN_CFG: u8 = 0x37;
pub const INT_ENABLE: u8 = 0x38;
pub const ACCEL_XOUT_H: u8 = 0x3b;
pub const TEMP_OUT_H: u8 = 0x41;
pub const GYRO_XOUT_H: u8 = 0x43;
pub const USER_CTRL: u8 = 0x6a;
pub const PWR_MGMT_1: u8 = 0x6b;
pub const FIFO_COUNTH: u8 = 0x72;
pub const FIFO_COUNTL: u8 = 0x73;
pub const FIFO_R_W: u8 = 0x74;
pub const WHO_AM_I: u8 = 0x75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// One bus transaction seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Register block write: start register and payload
    Write(u8, Vec<u8>),
    /// Register block read: start register and length
    Read(u8, usize),
}

pub struct Chip {
    regs: [u8; 128],
    fifo: VecDeque<u8>,
    log: Vec<Transaction>,
    fail: bool,
    fail_after: Option<usize>,
}

impl Chip {
    fn should_fail(&mut self) -> bool {
        match self.fail_after {
            _ if self.fail => true,
            Some(0) => true,
            Some(n) => {
                self.fail_after = Some(n - 1);
                false
            },
            None => false,
        }
    }

    fn read_reg(&mut self, reg: u8) -> u8 {
        match reg {
            FIFO_COUNTH => (self.fifo.len() >> 8) as u8,
            FIFO_COUNTL => self.fifo.len() as u8,
            FIFO_R_W => self.fifo.pop_front().unwrap_or(0xff),
            _ => self.regs[reg as usize],
        }
    }

    fn write_reg(&mut self, reg: u8, value: u8) {
        match reg {
            PWR_MGMT_1 if value & 0x80 != 0 => {
                let who_am_i = self.regs[WHO_AM_I as usize];
                self.regs = [0; 128];
                self.regs[WHO_AM_I as usize] = who_am_i;
                // sleep bit set after reset
                self.regs[PWR_MGMT_1 as usize] = 0x40;
            },
            USER_CTRL if value & 0x04 != 0 => {
                self.fifo.clear();
                self.regs[USER_CTRL as usize] = value & !0x04;
            },
            _ => self.regs[reg as usize] = value,
        }
    }
}

/// Shared handle on the mock chip; clones see the same registers
#[derive(Clone)]
pub struct MockI2c {
    chip: Arc<Mutex<Chip>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::with_who_am_i(0x19)
    }

    pub fn with_who_am_i(who_am_i: u8) -> Self {
        let mut regs = [0; 128];
        regs[WHO_AM_I as usize] = who_am_i;
        MockI2c { chip: Arc::new(Mutex::new(Chip { regs,
                                                   fifo: VecDeque::new(),
                                                   log: Vec::new(),
                                                   fail: false,
                                                   fail_after: None })) }
    }

    pub fn chip(&self) -> MutexGuard<'_, Chip> {
        self.chip.lock().unwrap()
    }

    pub fn reg(&self, reg: u8) -> u8 {
        self.chip().regs[reg as usize]
    }

    pub fn reg16(&self, reg: u8) -> i16 {
        let chip = self.chip();
        i16::from_be_bytes([chip.regs[reg as usize], chip.regs[reg as usize + 1]])
    }

    pub fn set_reg16(&self, reg: u8, value: i16) {
        let mut chip = self.chip();
        let [h, l] = value.to_be_bytes();
        chip.regs[reg as usize] = h;
        chip.regs[reg as usize + 1] = l;
    }

    pub fn set_vec3(&self, reg: u8, value: Vec3<i16>) {
        self.set_reg16(reg, value.x);
        self.set_reg16(reg + 2, value.y);
        self.set_reg16(reg + 4, value.z);
    }

    /// Fills the ACCEL_XOUT_H..GYRO_ZOUT_L block
    pub fn set_output(&self, accel: Vec3<i16>, temp: i16, gyro: Vec3<i16>) {
        self.set_vec3(ACCEL_XOUT_H, accel);
        self.set_reg16(TEMP_OUT_H, temp);
        self.set_vec3(GYRO_XOUT_H, gyro);
    }

    pub fn push_fifo(&self, bytes: &[u8]) {
        self.chip().fifo.extend(bytes.iter().copied());
    }

    pub fn fifo_len(&self) -> usize {
        self.chip().fifo.len()
    }

    pub fn log(&self) -> Vec<Transaction> {
        self.chip().log.clone()
    }

    pub fn clear_log(&self) {
        self.chip().log.clear();
    }

    /// Values written to `reg` (first payload byte of each write), oldest
    /// first
    pub fn writes_to(&self, reg: u8) -> Vec<u8> {
        self.log()
            .into_iter()
            .filter_map(|t| match t {
                Transaction::Write(r, payload) if r == reg => Some(payload[0]),
                _ => None,
            })
            .collect()
    }

    pub fn reads_of(&self, reg: u8, len: usize) -> usize {
        self.log()
            .into_iter()
            .filter(|t| *t == Transaction::Read(reg, len))
            .count()
    }

    pub fn set_failing(&self, fail: bool) {
        self.chip().fail = fail;
    }

    /// Lets `transactions` more transfers through, then fails every one
    pub fn fail_after(&self, transactions: usize) {
        self.chip().fail_after = Some(transactions);
    }
}

impl i2c::Write for MockI2c {
    type Error = MockError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), MockError> {
        let mut chip = self.chip();
        if chip.should_fail() || address != ADDRESS || bytes.is_empty() {
            return Err(MockError);
        }
        let reg = bytes[0];
        chip.log.push(Transaction::Write(reg, bytes[1..].to_vec()));
        for (i, value) in bytes[1..].iter().enumerate() {
            chip.write_reg(reg + i as u8, *value);
        }
        Ok(())
    }
}

impl i2c::WriteRead for MockI2c {
    type Error = MockError;

    fn write_read(&mut self,
                  address: u8,
                  bytes: &[u8],
                  buffer: &mut [u8])
                  -> Result<(), MockError> {
        let mut chip = self.chip();
        if chip.should_fail() || address != ADDRESS || bytes.len() != 1 {
            return Err(MockError);
        }
        let reg = bytes[0];
        chip.log.push(Transaction::Read(reg, buffer.len()));
        for (i, byte) in buffer.iter_mut().enumerate() {
            // the FIFO port does not auto-increment
            let r = if reg == FIFO_R_W { reg } else { reg + i as u8 };
            *byte = chip.read_reg(r);
        }
        Ok(())
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Clone, Default)]
pub struct MockDelay {
    total_ms: Arc<AtomicU32>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u32 {
        self.total_ms.load(Ordering::SeqCst)
    }
}

impl DelayMs<u8> for MockDelay {
    fn delay_ms(&mut self, ms: u8) {
        self.total_ms.fetch_add(u32::from(ms), Ordering::SeqCst);
    }
}

/// Delay that really sleeps, for tests timing other threads against it
#[derive(Clone, Copy, Default)]
pub struct SleepDelay;

impl DelayMs<u8> for SleepDelay {
    fn delay_ms(&mut self, ms: u8) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

pub type Driver = Mpu6886<I2cDevice<MockI2c>>;

/// Driver on a fresh mock chip, initialized with the default config
pub fn driver() -> (Driver, MockI2c, MockDelay) {
    driver_with(&MpuConfig::default())
}

pub fn driver_with(config: &MpuConfig) -> (Driver, MockI2c, MockDelay) {
    let i2c = MockI2c::new();
    let mut delay = MockDelay::default();
    let mpu = Driver::new(I2cDevice::new(i2c.clone()));
    mpu.init(&mut delay, config).unwrap();
    i2c.clear_log();
    (mpu, i2c, delay)
}
