//! no_std driver for the MPU6886 (accelerometer + gyroscope IMU) over I2C
//!
//! Every register transaction runs under a mutex owned by the driver, so a
//! single [`Mpu6886`] can be shared between tasks: all methods take `&self`
//! and configuration changes are atomic with respect to reads. Pick the raw
//! mutex matching your execution model; the default,
//! `CriticalSectionRawMutex`, makes the driver `Sync`.
//!
//! Operations that need the chip to settle take a `DelayMs` provider and
//! wait after releasing the lock, so a critical section only ever spans
//! register transfers. The driver blocks on that delay and must not be used
//! from interrupt context.
//!
//! [`Mpu6886`]: ./struct.Mpu6886.html

#![deny(missing_docs)]
#![no_std]

extern crate embedded_hal as hal;

#[macro_use]
extern crate bitflags;

pub mod conf;
pub mod device;
mod types;
pub mod vec3;

use core::cell::RefCell;
use core::convert::TryFrom;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::blocking_mutex::Mutex;
use hal::blocking::delay::DelayMs;
use hal::blocking::i2c;

pub use conf::*;
pub use device::*;
pub use types::*;
pub use vec3::*;

use conf::{GyroSettings, PwrMgmt1, UserCtrl};

/// Supported MPU6886 WHO_AM_I value
pub const MPU6886_WHO_AM_I: u8 = 0x19;

/// Samples averaged by [`calibrate_gyro_zero`]
///
/// [`calibrate_gyro_zero`]: ./struct.Mpu6886.html#method.calibrate_gyro_zero
pub const CALIBRATION_SAMPLES: i32 = 32;

/// Pause between calibration samples, ms
const CALIBRATION_INTERVAL: u8 = 10;

const TEMP_SENSITIVITY: f32 = 326.8;
const TEMP_OFFSET: f32 = 25.0;

/// Largest FIFO frame (accel + temp + gyro)
const MAX_FIFO_FRAME: usize = 14;

/// Error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// WHO_AM_I returned an unexpected value; no MPU6886 answers on the bus
    DeviceNotFound(u8),
    /// Bus transaction failed
    TransportFailure(E),
    /// Value outside the set the chip accepts; nothing was written
    InvalidArgument,
}

impl<E> From<InvalidValue> for Error<E> {
    fn from(_: InvalidValue) -> Self {
        Error::InvalidArgument
    }
}

/// MPU6886 driver
pub struct Mpu6886<DEV, R = CriticalSectionRawMutex> {
    state: Mutex<R, RefCell<State<DEV>>>,
}

/// Everything guarded by the driver mutex
struct State<DEV> {
    dev: DEV,
    accel_scale: AccelScale,
    accel_filter: AccelFilter,
    gyro: GyroSettings,
    sample_rate_divisor: u8,
    accel_resolution: f32,
    gyro_resolution: f32,
    gyro_rad_resolution: f32,
    fifo: FifoState,
}

impl<E, I2C, R> Mpu6886<I2cDevice<I2C>, R>
    where I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
          R: RawMutex
{
    /// Binds an I2C bus, already running at [`I2C_FREQUENCY_HZ`], and
    /// initializes the chip with the default [`MpuConfig`].
    ///
    /// [`I2C_FREQUENCY_HZ`]: ./constant.I2C_FREQUENCY_HZ.html
    /// [`MpuConfig`]: ./conf/struct.MpuConfig.html
    pub fn imu_default<D>(i2c: I2C,
                          delay: &mut D)
                          -> Result<Self, Error<I2CError<E>>>
        where D: DelayMs<u8>
    {
        Self::imu(i2c, delay, &MpuConfig::default())
    }

    /// Binds an I2C bus and initializes the chip with `config`.
    pub fn imu<D>(i2c: I2C,
                  delay: &mut D,
                  config: &MpuConfig)
                  -> Result<Self, Error<I2CError<E>>>
        where D: DelayMs<u8>
    {
        let mpu = Mpu6886::new(I2cDevice::new(i2c));
        mpu.init(delay, config)?;
        Ok(mpu)
    }
}

impl<DEV, R> Mpu6886<DEV, R>
    where DEV: Device,
          R: RawMutex
{
    /// Creates an unconfigured driver. The chip is not touched until
    /// [`init`]; reading data before a successful `init` returns whatever
    /// the registers happen to hold.
    ///
    /// [`init`]: #method.init
    pub fn new(dev: DEV) -> Self {
        let defaults = MpuConfig::default();
        let mut state = State { dev,
                                accel_scale: defaults.accel_scale,
                                accel_filter: defaults.accel_filter,
                                gyro: defaults.gyro_settings(),
                                sample_rate_divisor:
                                    defaults.sample_rate_divisor,
                                accel_resolution: 0.0,
                                gyro_resolution: 0.0,
                                gyro_rad_resolution: 0.0,
                                fifo: FifoState::Stopped };
        state.update_resolutions();
        Mpu6886 { state: Mutex::new(RefCell::new(state)) }
    }

    /// Verifies the device identity, resets it and programs `config`.
    ///
    /// Interrupts, the FIFO and FIFO access from the serial interface are
    /// left disabled. On error the cached configuration is not updated and
    /// the chip is in an unknown state.
    ///
    /// The lock is released for every settle delay (about 140ms in
    /// total); other users of the driver must not reconfigure the chip
    /// while it initializes.
    pub fn init<D>(&self,
                   delay: &mut D,
                   config: &MpuConfig)
                   -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        let who_am_i = self.who_am_i()?;
        if who_am_i != MPU6886_WHO_AM_I {
            #[cfg(feature = "defmt")]
            defmt::warn!("unexpected WHO_AM_I: {=u8:#x}", who_am_i);
            return Err(Error::DeviceNotFound(who_am_i));
        }
        delay.delay_ms(1);

        self.write_settled(Register::PWR_MGMT_1, 0x00, delay, 10)?;
        // reset all registers, auto-clears
        self.write_settled(Register::PWR_MGMT_1,
                           PwrMgmt1::DEVICE_RESET.bits(),
                           delay,
                           10)?;
        self.write_settled(Register::PWR_MGMT_1,
                           PwrMgmt1::CLKSEL_AUTO.bits(),
                           delay,
                           10)?;

        self.write_settled(Register::ACCEL_CONFIG,
                           config.accel_scale.accel_config_bits(),
                           delay,
                           1)?;
        self.with_state(|s| s.write_gyro(config.gyro_settings()))?;
        delay.delay_ms(1);
        self.write_settled(Register::SMPLRT_DIV,
                           config.sample_rate_divisor,
                           delay,
                           1)?;
        self.write_settled(Register::INT_ENABLE, 0x00, delay, 1)?;
        self.write_settled(Register::ACCEL_CONFIG2,
                           config.accel_filter.accel_config2_bits(),
                           delay,
                           1)?;
        // no FIFO access from the serial interface
        self.write_settled(Register::USER_CTRL, 0x00, delay, 1)?;
        self.write_settled(Register::FIFO_EN,
                           FifoChannels::empty().bits(),
                           delay,
                           1)?;
        self.write_settled(Register::INT_PIN_CFG, 0x00, delay, 1)?;
        self.write_settled(Register::INT_ENABLE, 0x00, delay, 100)?;

        self.with_state(|s| {
                s.accel_scale = config.accel_scale;
                s.accel_filter = config.accel_filter;
                s.gyro = config.gyro_settings();
                s.sample_rate_divisor = config.sample_rate_divisor;
                s.fifo = FifoState::Stopped;
                s.update_resolutions();
            });
        #[cfg(feature = "defmt")]
        defmt::debug!("mpu6886 initialized: {}", config);
        Ok(())
    }

    /// Reads the WHO_AM_I register; should return `0x19`
    pub fn who_am_i(&self) -> Result<u8, Error<DEV::Error>> {
        self.with_state(|s| s.read(Register::WHO_AM_I))
    }

    /// Snapshot of the cached configuration
    pub fn settings(&self) -> Settings {
        self.with_state(|s| s.settings())
    }

    /// Sets accelerometer full reading scale ([`AccelScale`]) and updates
    /// the accelerometer resolution.
    ///
    /// [`AccelScale`]: ./conf/enum.AccelScale.html
    pub fn set_accel_scale<D>(&self,
                              scale: AccelScale,
                              delay: &mut D)
                              -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| {
                s.write(Register::ACCEL_CONFIG, scale.accel_config_bits())?;
                s.accel_scale = scale;
                s.update_resolutions();
                Ok::<(), Error<DEV::Error>>(())
            })?;
        delay.delay_ms(10);
        Ok(())
    }

    /// Sets gyroscope full reading scale ([`GyroScale`]), keeping the
    /// current gyroscope filter.
    ///
    /// [`GyroScale`]: ./conf/enum.GyroScale.html
    pub fn set_gyro_scale<D>(&self,
                             scale: GyroScale,
                             delay: &mut D)
                             -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| {
                let filter = s.gyro.filter;
                s.apply_gyro(GyroSettings { scale, filter })
            })?;
        delay.delay_ms(10);
        Ok(())
    }

    /// Sets gyroscope bandwidth ([`GyroFilter`]), keeping the current
    /// gyroscope scale.
    ///
    /// [`GyroFilter`]: ./conf/enum.GyroFilter.html
    pub fn set_gyro_filter<D>(&self,
                              filter: GyroFilter,
                              delay: &mut D)
                              -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| {
                let scale = s.gyro.scale;
                s.apply_gyro(GyroSettings { scale, filter })
            })?;
        delay.delay_ms(1);
        Ok(())
    }

    /// Sets gyroscope scale and bandwidth in one step.
    ///
    /// Both live partly in GYRO_CONFIG (FS_SEL and FCHOICE_B), so they are
    /// always encoded together.
    pub fn set_gyro<D>(&self,
                       scale: GyroScale,
                       filter: GyroFilter,
                       delay: &mut D)
                       -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| s.apply_gyro(GyroSettings { scale, filter }))?;
        delay.delay_ms(10);
        Ok(())
    }

    /// Sets accelerometer bandwidth ([`AccelFilter`]).
    ///
    /// [`AccelFilter`]: ./conf/enum.AccelFilter.html
    pub fn set_accel_filter<D>(&self,
                               filter: AccelFilter,
                               delay: &mut D)
                               -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| {
                s.write(Register::ACCEL_CONFIG2, filter.accel_config2_bits())?;
                s.accel_filter = filter;
                Ok::<(), Error<DEV::Error>>(())
            })?;
        delay.delay_ms(1);
        Ok(())
    }

    /// Sets sample rate divisor: SampleRate = 1kHz / (1 + `smplrt_div`).
    /// Only effective while the gyroscope filter runs at 1kHz.
    pub fn set_sample_rate_divisor<D>(&self,
                                      smplrt_div: u8,
                                      delay: &mut D)
                                      -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| {
                s.write(Register::SMPLRT_DIV, smplrt_div)?;
                s.sample_rate_divisor = smplrt_div;
                Ok::<(), Error<DEV::Error>>(())
            })?;
        delay.delay_ms(1);
        Ok(())
    }

    /// Reads and returns unscaled accelerometer measurements (LSB).
    pub fn unscaled_accel(&self) -> Result<Vec3<i16>, Error<DEV::Error>> {
        self.with_state(|s| s.read_vec3(Register::ACCEL_XOUT_H))
    }

    /// Reads and returns accelerometer measurements scaled to g.
    pub fn accel(&self) -> Result<Vec3<f32>, Error<DEV::Error>> {
        self.with_state(|s| {
                let raw = s.read_vec3(Register::ACCEL_XOUT_H)?;
                Ok(raw.f32().scale(s.accel_resolution))
            })
    }

    /// Reads and returns unscaled gyroscope measurements (LSB).
    pub fn unscaled_gyro(&self) -> Result<Vec3<i16>, Error<DEV::Error>> {
        self.with_state(|s| s.read_vec3(Register::GYRO_XOUT_H))
    }

    /// Reads and returns gyroscope measurements in `unit` per second.
    pub fn gyro(&self,
                unit: AngularUnit)
                -> Result<Vec3<f32>, Error<DEV::Error>> {
        self.with_state(|s| {
                let raw = s.read_vec3(Register::GYRO_XOUT_H)?;
                Ok(raw.f32().scale(s.gyro_resolution_in(unit)))
            })
    }

    /// Reads and returns the raw temperature (LSB).
    pub fn raw_temp(&self) -> Result<i16, Error<DEV::Error>> {
        self.with_state(|s| {
                let mut buffer = [0; 2];
                s.read_many(Register::TEMP_OUT_H, &mut buffer)?;
                Ok(i16::from_be_bytes(buffer))
            })
    }

    /// Reads and returns the temperature in °C.
    pub fn temp(&self) -> Result<f32, Error<DEV::Error>> {
        self.raw_temp().map(scale_temp)
    }

    /// Reads accelerometer, temperature and gyroscope in one 14-byte
    /// transaction, so all seven values belong to the same sample.
    pub fn unscaled_all(&self)
                        -> Result<UnscaledMeasurements, Error<DEV::Error>> {
        self.unscaled_all_bytes()
            .map(|buffer| UnscaledMeasurements::from_be_bytes(&buffer))
    }

    /// The 14-byte ACCEL_XOUT_H..GYRO_ZOUT_L block as read from the chip
    /// (big-endian, two's complement).
    pub fn unscaled_all_bytes(&self) -> Result<[u8; 14], Error<DEV::Error>> {
        self.with_state(|s| {
                let mut buffer = [0; 14];
                s.read_many(Register::ACCEL_XOUT_H, &mut buffer)?;
                Ok(buffer)
            })
    }

    /// Reads and scales accelerometer, temperature and gyroscope from one
    /// transaction.
    pub fn all(&self,
               unit: AngularUnit)
               -> Result<Measurements, Error<DEV::Error>> {
        self.with_state(|s| {
                let mut buffer = [0; 14];
                s.read_many(Register::ACCEL_XOUT_H, &mut buffer)?;
                let raw = UnscaledMeasurements::from_be_bytes(&buffer);
                Ok(Measurements { accel:
                                      raw.accel.f32().scale(s.accel_resolution),
                                  temp: scale_temp(raw.temp),
                                  gyro: raw.gyro
                                           .f32()
                                           .scale(s.gyro_resolution_in(unit)) })
            })
    }

    /// Resets the FIFO and starts pushing `channels` into it, one frame per
    /// sample. Restarting a running FIFO discards what it holds.
    pub fn start_fifo<D>(&self,
                         channels: FifoChannels,
                         delay: &mut D)
                         -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| {
                s.write(Register::USER_CTRL, UserCtrl::FIFO_RST.bits())
            })?;
        delay.delay_ms(1);
        self.with_state(|s| {
                s.write(Register::USER_CTRL, UserCtrl::FIFO_EN.bits())?;
                s.write(Register::FIFO_EN, channels.bits())?;
                s.fifo = FifoState::Running(channels);
                Ok::<(), Error<DEV::Error>>(())
            })?;
        #[cfg(feature = "defmt")]
        defmt::debug!("fifo started: {=u8:#x}", channels.bits());
        Ok(())
    }

    /// Stops pushing samples into the FIFO. Buffered data is discarded by
    /// the reset of the next [`start_fifo`].
    ///
    /// [`start_fifo`]: #method.start_fifo
    pub fn stop_fifo(&self) -> Result<(), Error<DEV::Error>> {
        self.with_state(|s| {
                s.write(Register::FIFO_EN, FifoChannels::empty().bits())?;
                s.fifo = FifoState::Stopped;
                Ok::<(), Error<DEV::Error>>(())
            })?;
        #[cfg(feature = "defmt")]
        defmt::debug!("fifo stopped");
        Ok(())
    }

    /// Current FIFO capture state
    pub fn fifo_state(&self) -> FifoState {
        self.with_state(|s| s.fifo)
    }

    /// Number of bytes buffered in the FIFO. Valid whether or not capture
    /// is running.
    pub fn fifo_count(&self) -> Result<u16, Error<DEV::Error>> {
        self.with_state(|s| s.fifo_count())
    }

    /// Pops `buffer.len()` bytes from the FIFO data port.
    ///
    /// At most one frame may be requested per call: 8 bytes with a single
    /// channel running, 14 with both (or while stopped); longer buffers are
    /// rejected with `InvalidArgument` before touching the bus. Bytes the
    /// FIFO does not hold read as `0xff`.
    pub fn read_fifo(&self, buffer: &mut [u8]) -> Result<(), Error<DEV::Error>> {
        self.with_state(|s| {
                let limit = match s.fifo {
                    FifoState::Running(channels)
                        if channels.frame_size() > 0 =>
                    {
                        channels.frame_size()
                    },
                    _ => MAX_FIFO_FRAME,
                };
                if buffer.len() > limit {
                    return Err(Error::InvalidArgument);
                }
                if buffer.is_empty() {
                    return Ok(());
                }
                s.read_many(Register::FIFO_R_W, buffer)
            })
    }

    /// Pops and decodes one frame when capture is running and at least a
    /// full frame is buffered; `None` otherwise.
    pub fn read_fifo_frame(&self)
                           -> Result<Option<FifoFrame>, Error<DEV::Error>> {
        self.with_state(|s| {
                let channels = match s.fifo {
                    FifoState::Running(channels)
                        if channels.frame_size() > 0 =>
                    {
                        channels
                    },
                    _ => return Ok(None),
                };
                let size = channels.frame_size();
                if usize::from(s.fifo_count()?) < size {
                    return Ok(None);
                }
                let mut buffer = [0; MAX_FIFO_FRAME];
                s.read_many(Register::FIFO_R_W, &mut buffer[..size])?;
                Ok(Some(FifoFrame::decode(channels, &buffer[..size])))
            })
    }

    /// Programs the user offset of one gyroscope axis.
    ///
    /// `offset` is in LSB of the current gyroscope scale; it is rescaled to
    /// the fixed scale of the offset registers before being written, so the
    /// correction holds whatever the active range.
    pub fn set_gyro_offset<D>(&self,
                              axis: Axis,
                              offset: i16,
                              delay: &mut D)
                              -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| s.set_gyro_offset(axis, offset))?;
        delay.delay_ms(1);
        Ok(())
    }

    /// Zeroes the gyroscope: clears the user offsets, averages
    /// [`CALIBRATION_SAMPLES`] readings taken 10ms apart and programs the
    /// negated average as offset of each axis. Returns the applied offsets
    /// (LSB of the current scale).
    ///
    /// The sensor must be at rest for the whole call (about 320ms); motion
    /// cannot be detected and ends up in the offsets. The lock is taken
    /// once per sample, so the gyroscope scale must not be changed
    /// concurrently.
    ///
    /// [`CALIBRATION_SAMPLES`]: ./constant.CALIBRATION_SAMPLES.html
    pub fn calibrate_gyro_zero<D>(&self,
                                  delay: &mut D)
                                  -> Result<Vec3<i16>, Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        // offsets already programmed would be measured as zero rate
        for axis in AXES.iter() {
            self.set_gyro_offset(*axis, 0, delay)?;
        }

        let mut sum = Vec3::<i32>::default();
        for _ in 0..CALIBRATION_SAMPLES {
            sum += self.unscaled_gyro()?.i32();
            delay.delay_ms(CALIBRATION_INTERVAL);
        }
        let offsets = (-sum).map(|c| {
                                 i16::try_from(c / CALIBRATION_SAMPLES)
                                     .unwrap_or(i16::MAX)
                             });

        self.set_gyro_offset(Axis::X, offsets.x, delay)?;
        self.set_gyro_offset(Axis::Y, offsets.y, delay)?;
        self.set_gyro_offset(Axis::Z, offsets.z, delay)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("gyro zero offsets: {}", offsets);
        Ok(offsets)
    }

    /// Destroys the driver recovering the bus peripheral
    pub fn release(self) -> DEV::Released {
        self.state.into_inner().into_inner().dev.release()
    }

    fn write_settled<D>(&self,
                        reg: Register,
                        val: u8,
                        delay: &mut D,
                        settle_ms: u8)
                        -> Result<(), Error<DEV::Error>>
        where D: DelayMs<u8>
    {
        self.with_state(|s| s.write(reg, val))?;
        delay.delay_ms(settle_ms);
        Ok(())
    }

    /// Runs `f` under the driver lock. Never delay inside `f`: with the
    /// default raw mutex the lock is a critical section.
    fn with_state<F, U>(&self, f: F) -> U
        where F: FnOnce(&mut State<DEV>) -> U
    {
        self.state.lock(|state| f(&mut *state.borrow_mut()))
    }
}

const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

impl<DEV> State<DEV> where DEV: Device
{
    fn settings(&self) -> Settings {
        Settings { accel_scale: self.accel_scale,
                   gyro_scale: self.gyro.scale,
                   accel_filter: self.accel_filter,
                   gyro_filter: self.gyro.filter,
                   sample_rate_divisor: self.sample_rate_divisor,
                   accel_resolution: self.accel_resolution,
                   gyro_resolution: self.gyro_resolution,
                   gyro_rad_resolution: self.gyro_rad_resolution,
                   fifo: self.fifo }
    }

    fn update_resolutions(&mut self) {
        self.accel_resolution = self.accel_scale.resolution();
        self.gyro_resolution = self.gyro.scale.resolution();
        self.gyro_rad_resolution = self.gyro.scale.radian_resolution();
    }

    fn gyro_resolution_in(&self, unit: AngularUnit) -> f32 {
        match unit {
            AngularUnit::Radians => self.gyro_rad_resolution,
            AngularUnit::Degrees => self.gyro_resolution,
        }
    }

    /// Writes CONFIG and GYRO_CONFIG, both derived from `settings`.
    fn write_gyro(&mut self,
                  settings: GyroSettings)
                  -> Result<(), Error<DEV::Error>> {
        self.write(Register::CONFIG, settings.config_bits())?;
        self.write(Register::GYRO_CONFIG, settings.gyro_config_bits())
    }

    fn apply_gyro(&mut self,
                  settings: GyroSettings)
                  -> Result<(), Error<DEV::Error>> {
        self.write_gyro(settings)?;
        self.gyro = settings;
        self.update_resolutions();
        Ok(())
    }

    fn set_gyro_offset(&mut self,
                       axis: Axis,
                       offset: i16)
                       -> Result<(), Error<DEV::Error>> {
        let reg = match axis {
            Axis::X => Register::XG_OFFS_USRH,
            Axis::Y => Register::YG_OFFS_USRH,
            Axis::Z => Register::ZG_OFFS_USRH,
        };
        let scaled = self.gyro.scale.scale_offset(offset);
        self.write_many(reg, &scaled.to_be_bytes())
    }

    fn fifo_count(&mut self) -> Result<u16, Error<DEV::Error>> {
        let mut buffer = [0; 2];
        self.read_many(Register::FIFO_COUNTH, &mut buffer)?;
        Ok(u16::from_be_bytes(buffer))
    }

    fn read_vec3(&mut self, reg: Register) -> Result<Vec3<i16>, Error<DEV::Error>> {
        let mut buffer = [0; 6];
        self.read_many(reg, &mut buffer)?;
        Ok(Vec3::from_be_bytes(&buffer))
    }

    fn read(&mut self, reg: Register) -> Result<u8, Error<DEV::Error>> {
        self.dev.read(reg).map_err(Error::TransportFailure)
    }

    fn read_many(&mut self,
                 reg: Register,
                 buffer: &mut [u8])
                 -> Result<(), Error<DEV::Error>> {
        self.dev
            .read_many(reg, buffer)
            .map_err(Error::TransportFailure)
    }

    fn write(&mut self, reg: Register, val: u8) -> Result<(), Error<DEV::Error>> {
        self.dev.write(reg, val).map_err(Error::TransportFailure)
    }

    fn write_many(&mut self,
                  reg: Register,
                  buffer: &[u8])
                  -> Result<(), Error<DEV::Error>> {
        self.dev
            .write_many(reg, buffer)
            .map_err(Error::TransportFailure)
    }
}

fn scale_temp(raw: i16) -> f32 {
    f32::from(raw) / TEMP_SENSITIVITY + TEMP_OFFSET
}

/// MPU6886 registers used by the driver
#[allow(non_camel_case_types)]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    XG_OFFS_USRH = 0x13,
    YG_OFFS_USRH = 0x15,
    ZG_OFFS_USRH = 0x17,
    SMPLRT_DIV = 0x19,
    CONFIG = 0x1a,
    GYRO_CONFIG = 0x1b,
    ACCEL_CONFIG = 0x1c,
    ACCEL_CONFIG2 = 0x1d,
    FIFO_EN = 0x23,
    INT_PIN_CFG = 0x37,
    INT_ENABLE = 0x38,
    ACCEL_XOUT_H = 0x3b,
    TEMP_OUT_H = 0x41,
    GYRO_XOUT_H = 0x43,
    USER_CTRL = 0x6a,
    PWR_MGMT_1 = 0x6b,
    FIFO_COUNTH = 0x72,
    FIFO_R_W = 0x74,
    WHO_AM_I = 0x75,
}

impl Register {
    /// Register address
    pub fn addr(&self) -> u8 {
        *self as u8
    }
}
