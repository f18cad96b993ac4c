//! Pixel range resolution
//!
//! A [`PixelRange`] is resolved against the live pixel count into a concrete
//! ordered list of positions. Resolution follows slice semantics: missing
//! bounds default to the ends, negative bounds count from the end, bounds
//! are clamped to the buffer and a negative step walks backwards.

use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{Error, Result};

/// Half-open `start..stop` range with a step, resolved lazily against a length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRange {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl PixelRange {
    /// Every pixel, first to last
    pub const FULL: Self = Self::new(None, None, 1);

    /// Every pixel, last to first
    pub const REVERSED: Self = Self::new(None, None, -1);

    pub const fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// Same bounds with a different step
    #[must_use]
    pub const fn with_step(self, step: isize) -> Self {
        Self { step, ..self }
    }

    /// Normalized `(start, stop, step)` for a sequence of `len` items
    ///
    /// The result always describes a walk that stays inside `0..len`.
    pub fn indices(&self, len: usize) -> Result<(isize, isize, isize)> {
        if self.step == 0 {
            return Err(Error::ZeroStep);
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if self.step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            let bound = if bound < 0 { bound.saturating_add(len) } else { bound };
            bound.clamp(lower, upper)
        };

        let start = match self.start {
            Some(start) => clamp(start),
            None if self.step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(stop) => clamp(stop),
            None if self.step < 0 => lower,
            None => upper,
        };

        Ok((start, stop, self.step))
    }

    /// Concrete positions covered by this range, in walk order
    pub fn resolve(&self, len: usize) -> Result<Vec<usize>> {
        let (start, stop, step) = self.indices(len)?;
        let mut positions = Vec::new();
        let mut current = start;
        while (step > 0 && current < stop) || (step < 0 && current > stop) {
            if let Ok(position) = usize::try_from(current) {
                positions.push(position);
            }
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(positions)
    }
}

impl Default for PixelRange {
    fn default() -> Self {
        Self::FULL
    }
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

impl From<Range<usize>> for PixelRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(Some(signed(range.start)), Some(signed(range.end)), 1)
    }
}

impl From<RangeInclusive<usize>> for PixelRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(Some(signed(start)), Some(signed(end).saturating_add(1)), 1)
    }
}

impl From<RangeFrom<usize>> for PixelRange {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(Some(signed(range.start)), None, 1)
    }
}

impl From<RangeTo<usize>> for PixelRange {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(None, Some(signed(range.end)), 1)
    }
}

impl From<RangeToInclusive<usize>> for PixelRange {
    fn from(range: RangeToInclusive<usize>) -> Self {
        Self::new(None, Some(signed(range.end).saturating_add(1)), 1)
    }
}

impl From<RangeFull> for PixelRange {
    fn from(_: RangeFull) -> Self {
        Self::FULL
    }
}
