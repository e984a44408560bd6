//! Vec3: per-axis triple of readings
use core::ops::{AddAssign, Mul, Neg};

/// Vector in 3D space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vec3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl<T> Vec3<T> {
    /// Creates a vector from its components
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vec3 { x, y, z }
    }

    /// Applies `f` to every component
    pub fn map<U, F>(self, mut f: F) -> Vec3<U>
        where F: FnMut(T) -> U
    {
        Vec3 { x: f(self.x),
               y: f(self.y),
               z: f(self.z), }
    }
}

impl<T> AddAssign for Vec3<T> where T: AddAssign
{
    fn add_assign(&mut self, rhs: Vec3<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T> Neg for Vec3<T> where T: Neg<Output = T>
{
    type Output = Vec3<T>;

    fn neg(self) -> Vec3<T> {
        self.map(Neg::neg)
    }
}

/// Scale
pub trait Scale<RHS = Self> {
    /// Scale vector
    fn scale(self, rhs: RHS) -> Self;
}

impl<T> Scale<T> for Vec3<T> where T: Mul<T, Output = T> + Copy
{
    fn scale(self, rhs: T) -> Vec3<T> {
        self.map(|c| c * rhs)
    }
}

impl Vec3<i16> {
    /// Big-endian two's-complement triple as laid out in the output
    /// registers
    pub(crate) fn from_be_bytes(buffer: &[u8]) -> Self {
        Vec3 { x: i16::from_be_bytes([buffer[0], buffer[1]]),
               y: i16::from_be_bytes([buffer[2], buffer[3]]),
               z: i16::from_be_bytes([buffer[4], buffer[5]]), }
    }

    /// Converts Vec<i16> to Vec<f32>
    pub fn f32(self) -> Vec3<f32> {
        self.map(f32::from)
    }

    /// Converts Vec<i16> to Vec<i32>
    pub fn i32(self) -> Vec3<i32> {
        self.map(i32::from)
    }
}
