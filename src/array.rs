use std::ops::{Index, IndexMut};

use crate::error::MovingArrayError;
use crate::modulo::floor_mod;

#[derive(Clone, Debug)]
pub struct MovingArray<T> {
    origin: i32,
    data: Box<[T]>,
}

impl<T> MovingArray<T>
where
    T: Default,
{
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).expect("capacity should be positive and fit the signed index range")
    }

    pub fn try_new(capacity: usize) -> Result<Self, MovingArrayError> {
        if capacity == 0 {
            return Err(MovingArrayError::MovingArrayZeroCapacityError);
        }

        if capacity > i32::MAX as usize {
            return Err(MovingArrayError::MovingArrayCapacityOverflowError(capacity));
        }

        Ok(Self {
            origin: 0,
            data: (0..capacity).map(|_| T::default()).collect(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn size(&self) -> i32 {
        self.data.len() as i32
    }

    #[inline]
    fn backing_index(&self, index: i32) -> usize {
        // Both operands are in [0, capacity), but capacity may exceed half the
        // i32 range, so the sum is taken in i64.
        ((self.origin as i64 + index as i64) % self.data.len() as i64) as usize
    }

    /// Bounds predicate backing the checked access path: `true` iff `index`
    /// lies in `[0, capacity)`.
    #[inline]
    pub fn contains_index(&self, index: i32) -> bool {
        index >= 0 && index < self.size()
    }

    pub fn get(&self, index: i32) -> Option<&T> {
        if !self.contains_index(index) {
            return None;
        }

        Some(&self.data[self.backing_index(index)])
    }

    pub fn get_mut(&mut self, index: i32) -> Option<&mut T> {
        if !self.contains_index(index) {
            return None;
        }

        let backing_index = self.backing_index(index);
        Some(&mut self.data[backing_index])
    }

    /// Slides the logical window by `delta` positions. Cells that scroll out of
    /// the window are reset to `T::default()`; surviving cells keep their value
    /// under a re-based logical index. Returns whether anything moved.
    pub fn shift(&mut self, delta: i32) -> bool {
        if delta == 0 {
            return false;
        }

        let size = self.size();

        if delta.unsigned_abs() >= size as u32 {
            // The new window is disjoint from the old one; no cell survives.
            for cell in self.data.iter_mut() {
                *cell = T::default();
            }

            // Reduce delta to [0, size) first; the remaining sum still needs
            // i64, since size may exceed half the i32 range.
            self.origin = ((self.origin as i64 + floor_mod(delta, size) as i64) % size as i64) as i32;
        } else if delta > 0 {
            for _ in 0..delta {
                // Clear before advancing: the vacated slot becomes the new
                // high-end logical index and must read as default.
                self.data[self.origin as usize] = T::default();

                self.origin += 1;
                if self.origin >= size {
                    self.origin -= size;
                }
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                self.origin -= 1;
                if self.origin < 0 {
                    self.origin += size;
                }

                // The slot origin retreated onto is the new logical index 0.
                self.data[self.origin as usize] = T::default();
            }
        }

        return true;
    }
}

impl<T> Index<i32> for MovingArray<T>
where
    T: Default,
{
    type Output = T;

    fn index(&self, index: i32) -> &Self::Output {
        assert!(self.contains_index(index));
        &self.data[self.backing_index(index)]
    }
}

impl<T> IndexMut<i32> for MovingArray<T>
where
    T: Default,
{
    fn index_mut(&mut self, index: i32) -> &mut Self::Output {
        assert!(self.contains_index(index));
        let backing_index = self.backing_index(index);
        &mut self.data[backing_index]
    }
}
