/// Rounds to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;
    use test_case::test_case;

    #[test_case(55.3456, 55.35; "rounds up past the midpoint")]
    #[test_case(0.0981, 0.10; "rounds the one timestep speed")]
    #[test_case(-1.234, -1.23; "negative rounds toward zero below midpoint")]
    #[test_case(0.125, 0.13; "exact tie rounds away from zero")]
    #[test_case(-0.125, -0.13; "negative tie rounds away from zero")]
    #[test_case(14.0, 14.0; "integers pass through")]
    fn round2_cases(value: f64, expected: f64) {
        assert_eq!(round2(value), expected);
    }
}
