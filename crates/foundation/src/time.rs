/// Milliseconds on the host's monotonic clock (`performance.now()` in the
/// browser, a test-controlled counter natively).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Millis(pub f64);

impl Millis {
    pub const ZERO: Millis = Millis(0.0);

    pub fn as_secs(self) -> f64 {
        self.0 / 1000.0
    }

    pub fn saturating_since(self, earlier: Millis) -> Millis {
        Millis((self.0 - earlier.0).max(0.0))
    }

    pub fn has_reached(self, deadline: Millis) -> bool {
        self.0 >= deadline.0
    }
}

impl std::ops::Add for Millis {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Millis(self.0 + other.0)
    }
}
