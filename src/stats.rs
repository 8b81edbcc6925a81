//! Population statistics over integer samples.
//!
//! [`Moments`] keeps exact integer sums so that uniform sample sets produce a
//! standard deviation of exactly zero and threshold comparisons do not depend
//! on floating-point accumulation order.
use serde::Serialize;

/// Population mean and standard deviation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub stddev: f64,
}

/// Exact running sums of a sample multiset: count, Σv and Σv².
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moments {
    pub area: u64,
    pub sum: u64,
    pub sum_sq: u64,
}

impl Moments {
    /// Moments of `area` copies of `value`.
    pub fn repeated(value: u8, area: u64) -> Self {
        let v = u64::from(value);
        Self {
            area,
            sum: v * area,
            sum_sq: v * v * area,
        }
    }

    pub fn push(&mut self, value: u8) {
        let v = u64::from(value);
        self.area += 1;
        self.sum += v;
        self.sum_sq += v * v;
    }

    pub fn absorb(&mut self, other: &Moments) {
        self.area += other.area;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
    }

    pub fn combined(&self, other: &Moments) -> Moments {
        let mut out = *self;
        out.absorb(other);
        out
    }

    pub fn mean(&self) -> f64 {
        if self.area == 0 {
            0.0
        } else {
            self.sum as f64 / self.area as f64
        }
    }

    /// Population standard deviation.
    ///
    /// `n·Σv² - (Σv)²` is evaluated in integers; it is `n²·var` and never
    /// negative.
    pub fn stddev(&self) -> f64 {
        if self.area == 0 {
            return 0.0;
        }
        let n = u128::from(self.area);
        let sum = u128::from(self.sum);
        let scaled = n * u128::from(self.sum_sq) - sum * sum;
        (scaled as f64).sqrt() / self.area as f64
    }

    pub fn stats(&self) -> Stats {
        Stats {
            mean: self.mean(),
            stddev: self.stddev(),
        }
    }

    /// Mean rounded to the nearest sample value, halves to even.
    pub fn rounded_mean(&self) -> u8 {
        self.mean().round_ties_even().clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_samples_have_zero_stddev() {
        let m = Moments::repeated(200, 10_000);
        assert_eq!(m.stddev(), 0.0);
        assert_eq!(m.rounded_mean(), 200);
    }

    #[test]
    fn population_stddev_of_two_values() {
        let mut m = Moments::default();
        for v in [2u8, 2, 2, 2, 4, 4, 4, 4] {
            m.push(v);
        }
        assert_eq!(m.mean(), 3.0);
        assert_eq!(m.stddev(), 1.0);
    }

    #[test]
    fn rounding_sends_halves_to_even() {
        let mean_of = |values: &[u8]| {
            let mut m = Moments::default();
            values.iter().for_each(|&v| m.push(v));
            (m.mean(), m.rounded_mean())
        };
        assert_eq!(mean_of(&[0, 1, 2, 3]), (1.5, 2));
        assert_eq!(mean_of(&[2, 3, 1, 4]), (2.5, 2));
        assert_eq!(mean_of(&[28, 29]), (28.5, 28));
        assert_eq!(mean_of(&[4, 5, 5]).1, 5);
    }

    #[test]
    fn combined_equals_sequential_pushes() {
        let a = Moments::repeated(10, 4);
        let b = Moments::repeated(5, 1);
        let mut c = a;
        c.push(5);
        assert_eq!(a.combined(&b), c);
    }
}
