mod common;

use common::*;
use mpu6886::{AccelFilter, AccelScale, Error, FifoState, GyroFilter, GyroScale,
              I2CError, I2cDevice, Mpu6886, MpuConfig};

#[test]
fn init_programs_datasheet_defaults() {
    let (mpu, i2c, delay) = driver();

    assert_eq!(i2c.reg(ACCEL_CONFIG), 0x00);
    assert_eq!(i2c.reg(GYRO_CONFIG), 0x08);
    assert_eq!(i2c.reg(CONFIG), 0x41);
    assert_eq!(i2c.reg(SMPLRT_DIV), 0x00);
    assert_eq!(i2c.reg(ACCEL_CONFIG2), 0x00);
    assert_eq!(i2c.reg(USER_CTRL), 0x00);
    assert_eq!(i2c.reg(FIFO_EN), 0x00);
    assert_eq!(i2c.reg(INT_PIN_CFG), 0x00);
    assert_eq!(i2c.reg(INT_ENABLE), 0x00);
    assert_eq!(i2c.reg(PWR_MGMT_1), 0x01);
    assert_eq!(delay.total_ms(), 139);

    let settings = mpu.settings();
    assert_eq!(settings.accel_scale, AccelScale::_2G);
    assert_eq!(settings.gyro_scale, GyroScale::_500DPS);
    assert_eq!(settings.gyro_filter, GyroFilter::Dlpf176Hz);
    assert_eq!(settings.accel_filter, AccelFilter::Dlpf218Hz);
    assert_eq!(settings.sample_rate_divisor, 0);
    assert_eq!(settings.accel_resolution, 2.0 / 32768.0);
    assert_eq!(settings.gyro_resolution, 500.0 / 32768.0);
    assert_eq!(settings.fifo, FifoState::Stopped);
}

#[test]
fn init_resets_before_configuring() {
    let i2c = MockI2c::new();
    let mpu: Driver = Mpu6886::new(I2cDevice::new(i2c.clone()));
    mpu.init(&mut MockDelay::default(), &MpuConfig::default()).unwrap();

    assert_eq!(i2c.log()[0], Transaction::Read(WHO_AM_I, 1));
    assert_eq!(i2c.writes_to(PWR_MGMT_1), vec![0x00, 0x80, 0x01]);
    // INT_ENABLE is cleared once before and once after the FIFO setup
    assert_eq!(i2c.writes_to(INT_ENABLE), vec![0x00, 0x00]);
}

#[test]
fn init_with_custom_config() {
    let mut config = MpuConfig::imu();
    config.accel_scale(AccelScale::_8G)
          .gyro_scale(GyroScale::_2000DPS)
          .gyro_filter(GyroFilter::Bypass3281Hz)
          .accel_filter(AccelFilter::Bypass1046Hz)
          .sample_rate_divisor(4);
    let (mpu, i2c, _) = driver_with(&config);

    assert_eq!(i2c.reg(ACCEL_CONFIG), 0x10);
    assert_eq!(i2c.reg(GYRO_CONFIG), 0x1a);
    assert_eq!(i2c.reg(CONFIG), 0x40);
    assert_eq!(i2c.reg(ACCEL_CONFIG2), 0x08);
    assert_eq!(i2c.reg(SMPLRT_DIV), 4);

    let settings = mpu.settings();
    assert_eq!(settings.accel_resolution, 8.0 / 32768.0);
    assert_eq!(settings.gyro_resolution, 2000.0 / 32768.0);
    assert_eq!(settings.sample_rate_divisor, 4);
}

#[test]
fn wrong_identity_is_device_not_found() {
    let i2c = MockI2c::with_who_am_i(0x71);
    let mpu: Driver = Mpu6886::new(I2cDevice::new(i2c.clone()));
    let before = mpu.settings();

    assert_eq!(mpu.init(&mut MockDelay::default(), &MpuConfig::default()),
               Err(Error::DeviceNotFound(0x71)));
    assert!(i2c.writes_to(PWR_MGMT_1).is_empty());
    assert_eq!(mpu.settings(), before);
}

#[test]
fn failed_transfer_is_transport_failure() {
    let i2c = MockI2c::new();
    i2c.set_failing(true);
    let mpu: Driver = Mpu6886::new(I2cDevice::new(i2c.clone()));

    assert_eq!(mpu.init(&mut MockDelay::default(), &MpuConfig::default()),
               Err(Error::TransportFailure(I2CError::BusError(MockError))));
}

#[test]
fn failed_init_keeps_cached_configuration() {
    let i2c = MockI2c::new();
    let mpu: Driver = Mpu6886::new(I2cDevice::new(i2c.clone()));
    let before = mpu.settings();

    let mut config = MpuConfig::imu();
    config.accel_scale(AccelScale::_16G);
    // identity check and reset pass, then the bus goes away
    i2c.fail_after(5);

    assert!(mpu.init(&mut MockDelay::default(), &config).is_err());
    assert_eq!(mpu.settings(), before);
}

#[test]
fn wrong_address_never_reaches_the_chip() {
    let i2c = MockI2c::new();
    let mpu: Driver = Mpu6886::new(I2cDevice::with_address(i2c.clone(), 0x69));

    assert!(matches!(mpu.who_am_i(), Err(Error::TransportFailure(_))));
    assert!(i2c.log().is_empty());
}

#[test]
fn imu_default_binds_and_initializes() {
    let i2c = MockI2c::new();
    let mut delay = MockDelay::default();
    let mpu: Driver = Mpu6886::imu_default(i2c.clone(), &mut delay).unwrap();

    assert_eq!(mpu.who_am_i(), Ok(0x19));
    assert_eq!(i2c.reg(GYRO_CONFIG), 0x08);

    assert_eq!(delay.total_ms(), 139);

    let bus = mpu.release();
    bus.set_reg16(ACCEL_XOUT_H, 1);
    assert_eq!(i2c.reg16(ACCEL_XOUT_H), 1);
}
