//! Unit conversions between the metric quantities NWS reports and the
//! imperial quantities the snow-day model was trained on.

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts millimeters to inches.
pub fn millimeters_to_inches(millimeters: f64) -> f64 {
    millimeters / 25.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_millimeters_to_inches() {
        assert_eq!(millimeters_to_inches(25.4), 1.0);
        assert_eq!(millimeters_to_inches(0.0), 0.0);
        assert!((millimeters_to_inches(10.0) - 0.3937007874015748).abs() < 1e-12);
    }
}
