//! Configuration for MPU6886.

use core::convert::TryFrom;
use core::default::Default;
use core::f32::consts::PI;

/// Raw value that does not name any variant of a configuration enum.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidValue(pub u8);

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Accelerometer reading full scale configuration, default: +2g.
pub enum AccelScale {
    /// +2g
    _2G = 0,
    /// +4g
    _4G = 1,
    /// +8g
    _8G = 2,
    /// +16g
    _16G = 3,
}
impl AccelScale {
    /// Full scale in g.
    pub fn full_scale(&self) -> f32 {
        match self {
            AccelScale::_2G => 2.0,
            AccelScale::_4G => 4.0,
            AccelScale::_8G => 8.0,
            AccelScale::_16G => 16.0,
        }
    }

    /// g per LSB.
    pub fn resolution(&self) -> f32 {
        self.full_scale() / 32768.0
    }

    /// ACCEL_FS_SEL bits of ACCEL_CONFIG.
    pub(crate) fn accel_config_bits(&self) -> u8 {
        (*self as u8) << 3
    }
}
impl Default for AccelScale {
    fn default() -> Self {
        AccelScale::_2G
    }
}
impl TryFrom<u8> for AccelScale {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, InvalidValue> {
        match value {
            0 => Ok(AccelScale::_2G),
            1 => Ok(AccelScale::_4G),
            2 => Ok(AccelScale::_8G),
            3 => Ok(AccelScale::_16G),
            _ => Err(InvalidValue(value)),
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Gyroscope reading full scale configuration; default: +500 dps.
pub enum GyroScale {
    /// +250 dps
    _250DPS = 0,
    /// +500 dps
    _500DPS = 1,
    /// +1000 dps
    _1000DPS = 2,
    /// +2000 dps
    _2000DPS = 3,
}
impl GyroScale {
    /// Full scale in degrees per second.
    pub fn full_scale(&self) -> f32 {
        match self {
            GyroScale::_250DPS => 250.0,
            GyroScale::_500DPS => 500.0,
            GyroScale::_1000DPS => 1000.0,
            GyroScale::_2000DPS => 2000.0,
        }
    }

    /// Degrees per second per LSB.
    pub fn resolution(&self) -> f32 {
        self.full_scale() / 32768.0
    }

    /// Radians per second per LSB.
    pub fn radian_resolution(&self) -> f32 {
        self.resolution() * PI / 180.0
    }

    /// Brings a raw offset to the fixed scale of the XG/YG/ZG_OFFS_USR
    /// registers.
    pub(crate) fn scale_offset(&self, offset: i16) -> i16 {
        match self {
            GyroScale::_250DPS => offset / 4,
            GyroScale::_500DPS => offset / 2,
            GyroScale::_1000DPS => offset,
            GyroScale::_2000DPS => offset.saturating_mul(2),
        }
    }
}
impl Default for GyroScale {
    fn default() -> Self {
        GyroScale::_500DPS
    }
}
impl TryFrom<u8> for GyroScale {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, InvalidValue> {
        match value {
            0 => Ok(GyroScale::_250DPS),
            1 => Ok(GyroScale::_500DPS),
            2 => Ok(GyroScale::_1000DPS),
            3 => Ok(GyroScale::_2000DPS),
            _ => Err(InvalidValue(value)),
        }
    }
}

/// Controls the gyroscope and temperature sensor bandwidth and internal
/// sampling rate. The first eight variants use the digital low pass filter
/// (FCHOICE_B = 00, DLPF_CFG = 0..=7); the last two bypass it.
/// Sample Rate Divisor only applies to the 1 kHz settings.
/// Default is 176Hz with 1kHz internal rate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFilter {
    /// bandwidth=250Hz, Fs=8kHz
    Dlpf250Hz = 0,
    /// bandwidth=176Hz, Fs=1kHz
    Dlpf176Hz = 1,
    /// bandwidth=92Hz, Fs=1kHz
    Dlpf92Hz = 2,
    /// bandwidth=41Hz, Fs=1kHz
    Dlpf41Hz = 3,
    /// bandwidth=20Hz, Fs=1kHz
    Dlpf20Hz = 4,
    /// bandwidth=10Hz, Fs=1kHz
    Dlpf10Hz = 5,
    /// bandwidth=5Hz, Fs=1kHz
    Dlpf5Hz = 6,
    /// bandwidth=3281Hz, Fs=8kHz
    Dlpf3281Hz = 7,
    /// FCHOICE_B 10: bandwidth=3281Hz, Fs=32kHz
    Bypass3281Hz = 8,
    /// FCHOICE_B x1: bandwidth=8173Hz, Fs=32kHz
    Bypass8173Hz = 9,
}
impl GyroFilter {
    /// Every valid gyroscope filter, in register order.
    pub const ALL: [GyroFilter; 10] = [GyroFilter::Dlpf250Hz,
                                       GyroFilter::Dlpf176Hz,
                                       GyroFilter::Dlpf92Hz,
                                       GyroFilter::Dlpf41Hz,
                                       GyroFilter::Dlpf20Hz,
                                       GyroFilter::Dlpf10Hz,
                                       GyroFilter::Dlpf5Hz,
                                       GyroFilter::Dlpf3281Hz,
                                       GyroFilter::Bypass3281Hz,
                                       GyroFilter::Bypass8173Hz];

    pub(crate) fn fchoice_b_bits(&self) -> u8 {
        match self {
            GyroFilter::Bypass3281Hz => 0b10,
            GyroFilter::Bypass8173Hz => 0b01,
            _ => 0b00,
        }
    }

    pub(crate) fn dlpf_bits(&self) -> u8 {
        match self {
            GyroFilter::Bypass3281Hz | GyroFilter::Bypass8173Hz => 0b000,
            dlpf => *dlpf as u8,
        }
    }
}
impl Default for GyroFilter {
    fn default() -> Self {
        GyroFilter::Dlpf176Hz
    }
}
impl TryFrom<u8> for GyroFilter {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, InvalidValue> {
        GyroFilter::ALL.iter()
                       .find(|f| **f as u8 == value)
                       .copied()
                       .ok_or(InvalidValue(value))
    }
}

/// Controls the accelerometer bandwidth. All DLPF settings run at 1kHz;
/// `Bypass1046Hz` sets ACCEL_FCHOICE_B and runs at 4kHz.
/// Default is 218Hz.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFilter {
    /// bandwidth=218Hz
    Dlpf218Hz = 0,
    /// bandwidth=99Hz
    Dlpf99Hz = 2,
    /// bandwidth=44.8Hz
    Dlpf44Hz = 3,
    /// bandwidth=21.2Hz
    Dlpf21Hz = 4,
    /// bandwidth=10.2Hz
    Dlpf10Hz = 5,
    /// bandwidth=5.1Hz
    Dlpf5Hz = 6,
    /// bandwidth=420Hz
    Dlpf420Hz = 7,
    /// ACCEL_FCHOICE_B 1: bandwidth=1046Hz, rate=4kHz
    Bypass1046Hz = 8,
}
impl AccelFilter {
    /// Every valid accelerometer filter, in register order.
    pub const ALL: [AccelFilter; 8] = [AccelFilter::Dlpf218Hz,
                                       AccelFilter::Dlpf99Hz,
                                       AccelFilter::Dlpf44Hz,
                                       AccelFilter::Dlpf21Hz,
                                       AccelFilter::Dlpf10Hz,
                                       AccelFilter::Dlpf5Hz,
                                       AccelFilter::Dlpf420Hz,
                                       AccelFilter::Bypass1046Hz];

    /// ACCEL_CONFIG2 value.
    pub(crate) fn accel_config2_bits(&self) -> u8 {
        match self {
            AccelFilter::Bypass1046Hz => 0b0000_1000,
            dlpf => *dlpf as u8,
        }
    }
}
impl Default for AccelFilter {
    fn default() -> Self {
        AccelFilter::Dlpf218Hz
    }
}
impl TryFrom<u8> for AccelFilter {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, InvalidValue> {
        AccelFilter::ALL.iter()
                        .find(|f| **f as u8 == value)
                        .copied()
                        .ok_or(InvalidValue(value))
    }
}

/// Gyroscope range and filter, the two settings sharing GYRO_CONFIG.
///
/// Both registers are always derived from the pair, so changing one field
/// can never clobber the other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GyroSettings {
    pub(crate) scale: GyroScale,
    pub(crate) filter: GyroFilter,
}
impl GyroSettings {
    /// CONFIG value. FIFO_MODE (bit 6) is always set: once the FIFO is full
    /// further samples are dropped instead of overwriting older ones.
    pub(crate) fn config_bits(&self) -> u8 {
        0b0100_0000 | self.filter.dlpf_bits()
    }

    /// GYRO_CONFIG value.
    pub(crate) fn gyro_config_bits(&self) -> u8 {
        ((self.scale as u8) << 3) | self.filter.fchoice_b_bits()
    }
}

/// Configuration of MPU6886
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MpuConfig {
    pub(crate) accel_scale: AccelScale,
    pub(crate) gyro_scale: GyroScale,
    pub(crate) accel_filter: AccelFilter,
    pub(crate) gyro_filter: GyroFilter,
    pub(crate) sample_rate_divisor: u8,
}

impl Default for MpuConfig {
    /// +2g, +500 dps, 176Hz gyroscope filter, 218Hz accelerometer filter,
    /// no sample rate divisor.
    fn default() -> Self {
        MpuConfig { accel_scale: AccelScale::default(),
                    gyro_scale: GyroScale::default(),
                    accel_filter: AccelFilter::default(),
                    gyro_filter: GyroFilter::default(),
                    sample_rate_divisor: 0 }
    }
}

impl MpuConfig {
    /// Creates configuration with default [`AccelScale`], [`GyroScale`],
    /// [`AccelFilter`], [`GyroFilter`] and no sample rate divisor.
    ///
    /// [`AccelScale`]: ./enum.AccelScale.html
    /// [`GyroScale`]: ./enum.GyroScale.html
    /// [`AccelFilter`]: ./enum.AccelFilter.html
    /// [`GyroFilter`]: ./enum.GyroFilter.html
    pub fn imu() -> Self {
        Self::default()
    }

    /// Sets gyroscope full reading scale ([`GyroScale`]).
    ///
    /// [`GyroScale`]: ./enum.GyroScale.html
    pub fn gyro_scale(&mut self, scale: GyroScale) -> &mut Self {
        self.gyro_scale = scale;
        self
    }

    /// Sets accelerometer full reading scale ([`AccelScale`]).
    ///
    /// [`AccelScale`]: ./enum.AccelScale.html
    pub fn accel_scale(&mut self, scale: AccelScale) -> &mut Self {
        self.accel_scale = scale;
        self
    }

    /// Sets accelerometer bandwidth ([`AccelFilter`]).
    ///
    /// [`AccelFilter`]: ./enum.AccelFilter.html
    pub fn accel_filter(&mut self, filter: AccelFilter) -> &mut Self {
        self.accel_filter = filter;
        self
    }

    /// Sets gyroscope and temperature bandwidth ([`GyroFilter`]).
    ///
    /// [`GyroFilter`]: ./enum.GyroFilter.html
    pub fn gyro_filter(&mut self, filter: GyroFilter) -> &mut Self {
        self.gyro_filter = filter;
        self
    }

    /// Sets sample rate divisor.
    /// SampleRate = InternalSampleRate / (1 + SMPLRT_DIV). Only effective
    /// when the gyroscope filter runs at 1kHz, see [`GyroFilter`].
    ///
    /// [`GyroFilter`]: ./enum.GyroFilter.html
    pub fn sample_rate_divisor(&mut self, smplrt_div: u8) -> &mut Self {
        self.sample_rate_divisor = smplrt_div;
        self
    }

    pub(crate) fn gyro_settings(&self) -> GyroSettings {
        GyroSettings { scale: self.gyro_scale,
                       filter: self.gyro_filter }
    }
}

bitflags! {
    /// Sensor data written into the FIFO (FIFO_EN register)
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct FifoChannels: u8 {
        /// Gyroscope X, Y, Z and temperature
        const GYRO = 0b0001_0000;
        /// Accelerometer X, Y, Z and temperature
        const ACCEL = 0b0000_1000;
    }
}

impl FifoChannels {
    /// Bytes the chip pushes into the FIFO per sample for this channel set:
    /// 8 for a single channel (3 axes + temperature), 14 for both.
    pub fn frame_size(&self) -> usize {
        match (self.contains(FifoChannels::ACCEL),
               self.contains(FifoChannels::GYRO))
        {
            (true, true) => 14,
            (false, false) => 0,
            _ => 8,
        }
    }
}

bitflags! {
    /// USER_CTRL register
    pub(crate) struct UserCtrl: u8 {
        /// Enable FIFO operation mode
        const FIFO_EN = 0b0100_0000;
        /// Reset FIFO module, auto-clears
        const FIFO_RST = 0b0000_0100;
    }
}

bitflags! {
    /// PWR_MGMT_1 register
    pub(crate) struct PwrMgmt1: u8 {
        /// Reset internal registers to default, auto-clears
        const DEVICE_RESET = 0b1000_0000;
        /// Auto select the best available clock source
        const CLKSEL_AUTO = 0b0000_0001;
    }
}
