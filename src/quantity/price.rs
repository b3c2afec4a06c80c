use std::fmt::{Debug, Display, Formatter};

quantity!(CentsPerKilowattHour);

impl Display for CentsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} snt/kWh", self.0)
    }
}

impl Debug for CentsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}snt/kWh", self.0)
    }
}
