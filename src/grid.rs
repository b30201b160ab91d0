use std::ops::{Index, IndexMut};

use crate::error::MovingGridError;
use crate::vec2::Offset;

#[derive(Clone, Debug)]
pub struct MovingGrid<T> {
    origin: Offset,
    side: i32,
    data: Box<[T]>,
}

impl<T> MovingGrid<T>
where
    T: Default,
{
    pub fn new(side: usize) -> Self {
        Self::try_new(side).expect("side length should be positive and fit the signed index range")
    }

    pub fn try_new(side: usize) -> Result<Self, MovingGridError> {
        if side == 0 {
            return Err(MovingGridError::MovingGridZeroSideError);
        }

        let Some(num_cells) = side.checked_mul(side) else {
            return Err(MovingGridError::MovingGridSideOverflowError(side));
        };
        if num_cells > i32::MAX as usize {
            return Err(MovingGridError::MovingGridSideOverflowError(side));
        }

        Ok(Self {
            origin: Offset::ZERO,
            side: side as i32,
            data: (0..num_cells).map(|_| T::default()).collect(),
        })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side as usize
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bounds predicate backing the checked access path: `true` iff both
    /// components of `offset` lie in `[0, side)`.
    #[inline]
    pub fn contains_offset(&self, offset: Offset) -> bool {
        offset.x >= 0 && offset.x < self.side && offset.y >= 0 && offset.y < self.side
    }

    #[inline]
    fn flat_index(&self, internal: Offset) -> usize {
        (internal.x + self.side * internal.y) as usize
    }

    #[inline]
    fn backing_index(&self, offset: Offset) -> usize {
        self.flat_index((self.origin + offset).floor_mod(self.side))
    }

    pub fn get(&self, offset: Offset) -> Option<&T> {
        if !self.contains_offset(offset) {
            return None;
        }

        Some(&self.data[self.backing_index(offset)])
    }

    pub fn get_mut(&mut self, offset: Offset) -> Option<&mut T> {
        if !self.contains_offset(offset) {
            return None;
        }

        let backing_index = self.backing_index(offset);
        Some(&mut self.data[backing_index])
    }

    fn clear_column(&mut self, x: i32) {
        for y in 0..self.side {
            let flat_index = self.flat_index(Offset::new(x, y));
            self.data[flat_index] = T::default();
        }
    }

    fn clear_row(&mut self, y: i32) {
        for x in 0..self.side {
            let flat_index = self.flat_index(Offset::new(x, y));
            self.data[flat_index] = T::default();
        }
    }

    /// Slides the logical window by `delta`, one axis at a time. Each unit of
    /// horizontal displacement vacates a full column, each unit of vertical
    /// displacement a full row; vacated cells are reset to `T::default()`.
    /// Returns whether anything moved.
    pub fn shift(&mut self, delta: Offset) -> bool {
        if delta == Offset::ZERO {
            return false;
        }

        let side = self.side;

        // One saturated axis already invalidates every cell, so the stepwise
        // sweep would touch the whole grid anyway.
        if delta.x.unsigned_abs() >= side as u32 || delta.y.unsigned_abs() >= side as u32 {
            for cell in self.data.iter_mut() {
                *cell = T::default();
            }

            self.origin = (self.origin + delta.floor_mod(side)).floor_mod(side);
            return true;
        }

        if delta.x > 0 {
            for _ in 0..delta.x {
                self.clear_column(self.origin.x);

                self.origin.x += 1;
                if self.origin.x >= side {
                    self.origin.x -= side;
                }
            }
        } else {
            for _ in 0..delta.x.unsigned_abs() {
                self.origin.x -= 1;
                if self.origin.x < 0 {
                    self.origin.x += side;
                }

                self.clear_column(self.origin.x);
            }
        }

        if delta.y > 0 {
            for _ in 0..delta.y {
                self.clear_row(self.origin.y);

                self.origin.y += 1;
                if self.origin.y >= side {
                    self.origin.y -= side;
                }
            }
        } else {
            for _ in 0..delta.y.unsigned_abs() {
                self.origin.y -= 1;
                if self.origin.y < 0 {
                    self.origin.y += side;
                }

                self.clear_row(self.origin.y);
            }
        }

        return true;
    }
}

impl<T> Index<Offset> for MovingGrid<T>
where
    T: Default,
{
    type Output = T;

    fn index(&self, offset: Offset) -> &Self::Output {
        assert!(self.contains_offset(offset));
        &self.data[self.backing_index(offset)]
    }
}

impl<T> IndexMut<Offset> for MovingGrid<T>
where
    T: Default,
{
    fn index_mut(&mut self, offset: Offset) -> &mut Self::Output {
        assert!(self.contains_offset(offset));
        let backing_index = self.backing_index(offset);
        &mut self.data[backing_index]
    }
}
