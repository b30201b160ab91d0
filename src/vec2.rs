use std::ops::{Add, Sub};

use crate::modulo::floor_mod;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// Discrete cell offset, both a relative shift and an absolute logical coordinate.
pub type Offset = Vec2<i32>;

/// Metric position; conversion to cell offsets is the caller's concern.
pub type Position = Vec2<f64>;

impl<T> Vec2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Add for Vec2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T> Sub for Vec2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Offset {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn floor_mod(self, divisor: i32) -> Self {
        Self::new(floor_mod(self.x, divisor), floor_mod(self.y, divisor))
    }

    #[inline]
    pub fn to_position(self) -> Position {
        Position::new(self.x as f64, self.y as f64)
    }
}

impl Position {
    /// Truncates toward zero, per-component.
    #[inline]
    pub fn to_offset(self) -> Offset {
        Offset::new(self.x as i32, self.y as i32)
    }
}
