//! Raspberry Pi demo
//!
//! # Connections
//!
//! - PIN1 = 3V3 = VCC
//! - PIN3 = BCM2 = SDA
//! - PIN5 = BCM3 = SCL
//! - PIN6 = GND = GND
//!
//! Set the bus to 400 kHz in /boot/config.txt:
//! `dtparam=i2c_arm=on,i2c_arm_baudrate=400000`

extern crate linux_embedded_hal as hal;
extern crate mpu6886;

use std::thread;
use std::time::Duration;

use hal::{Delay, I2cdev};
use mpu6886::{AngularUnit, FifoChannels, Mpu6886, MpuConfig, GyroScale};

fn main() {
    let i2c = I2cdev::new("/dev/i2c-1").expect("unable to open /dev/i2c-1");

    let mut delay = Delay;

    let mut config = MpuConfig::imu();
    config.gyro_scale(GyroScale::_1000DPS).sample_rate_divisor(9);
    let mpu: Mpu6886<_> =
        Mpu6886::imu(i2c, &mut delay, &config).expect("unable to init MPU6886");

    println!("WHO_AM_I: 0x{:x}", mpu.who_am_i().unwrap());
    println!("{:#?}", mpu.settings());

    println!("calibrating, keep the sensor still");
    let offsets = mpu.calibrate_gyro_zero(&mut delay).unwrap();
    println!("gyro offsets: {:?}", offsets);

    for _ in 0..5 {
        println!("{:#?}", mpu.all(AngularUnit::Degrees).unwrap());
        thread::sleep(Duration::from_millis(100));
    }

    // 100 Hz into the FIFO
    mpu.start_fifo(FifoChannels::ACCEL | FifoChannels::GYRO, &mut delay)
       .unwrap();
    thread::sleep(Duration::from_millis(100));
    println!("fifo holds {} bytes", mpu.fifo_count().unwrap());
    while let Some(frame) = mpu.read_fifo_frame().unwrap() {
        println!("{:?}", frame);
    }
    mpu.stop_fifo().unwrap();
}
