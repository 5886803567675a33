// lf-core/src/units.rs

use uom::si::f64::{Length as UomLength, Time as UomTime, Velocity as UomVelocity};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_base_values() {
        assert_eq!(m(100.0).value, 100.0);
        assert_eq!(s(2.5).value, 2.5);
        assert_eq!(mps(2.3e8).value, 2.3e8);
    }

    #[test]
    fn length_over_velocity_is_time() {
        let t: Time = m(2.0e8) / mps(2.0e8);
        assert_eq!(t.value, 1.0);
    }
}
