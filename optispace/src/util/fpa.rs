use std::cmp::Ordering;

use crate::fsize;

///Float wrapper whose comparisons tolerate rounding errors, see [`float_cmp::approx_eq!()`]
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub fsize);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(fsize, self.0, other.0)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_noise_compares_equal() {
        assert!(FPA(0.1 + 0.2) == FPA(0.3));
        assert!(FPA(0.1 + 0.2) <= FPA(0.3));
        assert!(FPA(1.0) < FPA(1.001));
    }
}
