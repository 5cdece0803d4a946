// Reduced units with k_B = 1, so beta = 1 / T.

/// Energy scale of the shoulder potential at reduced temperature `temperature`
pub fn energy_scale(temperature: f64) -> f64 {
    1.0 / temperature
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_scale_decreasing() {
        let e1 = energy_scale(0.1);
        let e2 = energy_scale(0.18);
        let e3 = energy_scale(1.0);
        assert!(e1 > e2);
        assert!(e2 > e3);
        assert_eq!(e3, 1.0);
    }

    #[test]
    fn test_energy_scale_at_zero() {
        assert_eq!(energy_scale(0.0), f64::INFINITY);
        assert_eq!(energy_scale(-0.0), f64::NEG_INFINITY);
    }
}
