//! T-state accounting.

/// A monotonic count of T-states (CPU clock cycles).
///
/// The CPU accumulates one per tick; hosts read the total to schedule
/// video, audio and peripheral work against the CPU clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticks(pub u64);

impl Ticks {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::ops::AddAssign for Ticks {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates() {
        let mut total = Ticks::ZERO;
        total += Ticks::new(4);
        total += Ticks::new(17);
        assert_eq!(total.get(), 21);
        assert!(total > Ticks::ZERO);
    }
}
