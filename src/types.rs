use crate::conf::{AccelFilter, AccelScale, FifoChannels, GyroFilter, GyroScale};
use crate::vec3::Vec3;

/// Gyroscope axis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

/// Unit of scaled angular rates
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngularUnit {
    /// rad/s
    Radians,
    /// degrees/s
    Degrees,
}

impl Default for AngularUnit {
    fn default() -> Self {
        AngularUnit::Radians
    }
}

/// Unscaled IMU measurements (LSB), taken in a single bus transaction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnscaledMeasurements {
    /// Accelerometer measurements (LSB)
    pub accel: Vec3<i16>,
    /// Temperature sensor measurement (LSB)
    pub temp: i16,
    /// Gyroscope measurements (LSB)
    pub gyro: Vec3<i16>,
}

impl UnscaledMeasurements {
    /// Decodes the 14-byte ACCEL_XOUT_H..GYRO_ZOUT_L block
    pub(crate) fn from_be_bytes(buffer: &[u8; 14]) -> Self {
        UnscaledMeasurements { accel: Vec3::from_be_bytes(&buffer[0..6]),
                               temp: i16::from_be_bytes([buffer[6],
                                                         buffer[7]]),
                               gyro: Vec3::from_be_bytes(&buffer[8..14]) }
    }

    /// The seven values in register order: accel x/y/z, temp, gyro x/y/z
    pub fn to_array(&self) -> [i16; 7] {
        [self.accel.x,
         self.accel.y,
         self.accel.z,
         self.temp,
         self.gyro.x,
         self.gyro.y,
         self.gyro.z]
    }
}

/// Scaled IMU measurements
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurements {
    /// Accelerometer measurements (g)
    pub accel: Vec3<f32>,
    /// Temperature sensor measurement (°C)
    pub temp: f32,
    /// Gyroscope measurements (rad/s or degrees/s)
    pub gyro: Vec3<f32>,
}

/// Snapshot of the configuration cached by the driver
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Accelerometer full scale
    pub accel_scale: AccelScale,
    /// Gyroscope full scale
    pub gyro_scale: GyroScale,
    /// Accelerometer bandwidth
    pub accel_filter: AccelFilter,
    /// Gyroscope and temperature bandwidth
    pub gyro_filter: GyroFilter,
    /// SMPLRT_DIV value
    pub sample_rate_divisor: u8,
    /// g per LSB
    pub accel_resolution: f32,
    /// degrees/s per LSB
    pub gyro_resolution: f32,
    /// rad/s per LSB
    pub gyro_rad_resolution: f32,
    /// FIFO capture state
    pub fifo: FifoState,
}

/// FIFO capture state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoState {
    /// No sensor data is pushed into the FIFO
    Stopped,
    /// The chip pushes one frame of the given channels per sample
    Running(FifoChannels),
}

impl Default for FifoState {
    fn default() -> Self {
        FifoState::Stopped
    }
}

/// One sample popped from the FIFO
///
/// Channels that were not enabled are `None`; temperature is pushed with
/// either channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoFrame {
    /// Accelerometer sample (LSB)
    pub accel: Option<Vec3<i16>>,
    /// Temperature sample (LSB)
    pub temp: i16,
    /// Gyroscope sample (LSB)
    pub gyro: Option<Vec3<i16>>,
}

impl FifoFrame {
    /// Decodes a frame laid out for `channels`:
    /// accel only: accel, temp; gyro only: temp, gyro; both: accel, temp,
    /// gyro. `buffer` holds exactly `channels.frame_size()` bytes.
    pub(crate) fn decode(channels: FifoChannels, buffer: &[u8]) -> Self {
        let temp_at = |i: usize| i16::from_be_bytes([buffer[i], buffer[i + 1]]);
        match (channels.contains(FifoChannels::ACCEL),
               channels.contains(FifoChannels::GYRO))
        {
            (true, true) => {
                FifoFrame { accel: Some(Vec3::from_be_bytes(&buffer[0..6])),
                            temp: temp_at(6),
                            gyro: Some(Vec3::from_be_bytes(&buffer[8..14])) }
            },
            (true, false) => {
                FifoFrame { accel: Some(Vec3::from_be_bytes(&buffer[0..6])),
                            temp: temp_at(6),
                            gyro: None }
            },
            (false, true) => {
                FifoFrame { accel: None,
                            temp: temp_at(0),
                            gyro: Some(Vec3::from_be_bytes(&buffer[2..8])) }
            },
            (false, false) => FifoFrame::default(),
        }
    }
}
