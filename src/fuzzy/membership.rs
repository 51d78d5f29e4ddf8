/// Triangular membership function over the [0, 10] universe. A degenerate
/// edge (`a == peak` or `peak == b`) is a vertical shoulder with full
/// membership at the peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: f64,
    pub peak: f64,
    pub b: f64,
}

impl Triangle {
    pub const fn new(a: f64, peak: f64, b: f64) -> Self {
        Self { a, peak, b }
    }

    pub fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        if x <= self.peak {
            if self.peak == self.a {
                1.0
            } else {
                (x - self.a) / (self.peak - self.a)
            }
        } else if self.peak == self.b {
            1.0
        } else {
            (self.b - x) / (self.b - self.peak)
        }
    }
}

/// Linguistic partition of every fuzzy input variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Low,
    Medium,
    High,
}

impl Term {
    pub const fn membership(self) -> Triangle {
        match self {
            Self::Low => Triangle::new(0.0, 0.0, 4.0),
            Self::Medium => Triangle::new(3.0, 5.0, 7.0),
            Self::High => Triangle::new(6.0, 10.0, 10.0),
        }
    }

    pub fn degree(self, x: f64) -> f64 {
        self.membership().degree(x)
    }
}

/// Linguistic partition of the output score variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub const fn membership(self) -> Triangle {
        match self {
            Self::Poor => Triangle::new(0.0, 0.0, 3.0),
            Self::Fair => Triangle::new(2.0, 4.0, 6.0),
            Self::Good => Triangle::new(5.0, 7.0, 9.0),
            Self::Excellent => Triangle::new(8.0, 10.0, 10.0),
        }
    }
}
