/// Call-count gate for periodic sub-behaviours
///
/// The counter advances once per call and fires when it reaches the period
/// supplied on that call. The period may change between calls; a counter
/// already past a shortened period fires on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    count: u16,
}

impl Default for Cadence {
    fn default() -> Self {
        Self::primed()
    }
}

impl Cadence {
    /// Counter that first fires after a full period
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Counter that fires on the very first call
    pub const fn primed() -> Self {
        Self { count: u16::MAX }
    }

    /// Advance the counter
    ///
    /// Returns true (and restarts the count) when the period is reached.
    pub fn tick(&mut self, period: u16) -> bool {
        self.count = self.count.saturating_add(1);
        if self.count >= period {
            self.count = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut cadence = Cadence::new();
        let fired = (0..12).filter(|_| cadence.tick(4)).count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn primed_fires_first() {
        let mut cadence = Cadence::primed();
        assert!(cadence.tick(5));
        assert!(!cadence.tick(5));
    }
}
