use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{cost::Euros, price::CentsPerKilowattHour};

quantity!(KilowattHours);

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}kWh", self.0)
    }
}

/// The price is quoted in cents, the product is in whole euros.
impl Mul<CentsPerKilowattHour> for KilowattHours {
    type Output = Euros;

    fn mul(self, rhs: CentsPerKilowattHour) -> Self::Output {
        Euros(self.0 * rhs.0 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul_cent_rate() {
        let cost = KilowattHours(2.0) * CentsPerKilowattHour(5.5);
        assert_abs_diff_eq!(cost.0, 0.11);
    }
}
