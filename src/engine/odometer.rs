//! Mixed-radix counter driving the enumeration

use crate::error::Result;
use crate::internal_error;

/// One digit per word position, each bounded by the alphabet size.
///
/// Digit 0 is the least significant: it is the first symbol of the word
/// and the one that changes on every step. The last digit is allowed to
/// reach `radix`, which marks the counter as exhausted.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    radix: usize,
}

impl Odometer {
    /// Allocate a zeroed counter of `width` digits
    pub fn new(width: usize, radix: usize) -> Result<Self> {
        if width == 0 {
            return Err(internal_error!("odometer width must be at least 1"));
        }

        let mut digits = Vec::new();
        digits.try_reserve_exact(width)?;
        digits.resize(width, 0);

        Ok(Self { digits, radix })
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn is_exhausted(&self) -> bool {
        self.digits.last().map_or(true, |&d| d >= self.radix)
    }

    /// Step to the next tuple. Returns `false` once the counter overflowed.
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }

        self.digits[0] += 1;
        // A single forward pass: each position is examined after the one
        // below it had the chance to carry into it.
        for i in 0..self.digits.len() - 1 {
            if self.digits[i] >= self.radix {
                self.digits[i] = 0;
                self.digits[i + 1] += 1;
            }
        }

        !self.is_exhausted()
    }
}
