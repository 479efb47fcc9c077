/// Running min / max / sum / count over integer salaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryStats {
    sum: i128,
    count: usize,
    min: i64,
    max: i64,
}

impl Default for SalaryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SalaryStats {
    pub fn new() -> Self {
        SalaryStats {
            sum: 0,
            count: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }

    pub fn push(&mut self, v: i64) {
        self.sum += v as i128;
        self.count += 1;
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest value seen, 0 when empty
    pub fn min(&self) -> i64 {
        if self.count == 0 { 0 } else { self.min }
    }

    /// Largest value seen, 0 when empty
    pub fn max(&self) -> i64 {
        if self.count == 0 { 0 } else { self.max }
    }

    /// Mean in hundredths, rounded half away from zero; 0 when empty
    pub fn mean_cents(&self) -> i128 {
        if self.count == 0 {
            return 0;
        }
        round_div(self.sum * 100, self.count as i128)
    }
}

/// `num / den` rounded to the nearest integer, halves away from zero
///
/// `den` must be positive.
pub fn round_div(num: i128, den: i128) -> i128 {
    debug_assert!(den > 0);
    let q = num / den;
    let r = num % den;
    if 2 * r.abs() >= den { q + num.signum() } else { q }
}
