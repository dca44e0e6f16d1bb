use crate::gpio::Pin;

/// Busy-wait iterations per half period. Not a time unit: the blink rate
/// depends on the core clock (16 MHz HSI out of reset) and code generation.
pub const DEFAULT_HALF_PERIOD: u32 = 500_000;

/// Which pin to blink and how long to hold each level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub pin: Pin,
    pub half_period: u32,
}

impl BlinkConfig {
    pub const DEFAULT: Self = Self {
        pin: Pin::LED,
        half_period: DEFAULT_HALF_PERIOD,
    };

    pub const fn with_pin(self, pin: Pin) -> Self {
        Self { pin, ..self }
    }

    pub const fn with_half_period(self, half_period: u32) -> Self {
        Self {
            half_period,
            ..self
        }
    }

    /// Default config, with the half period taken from `var` when it is set.
    ///
    /// Meant for `option_env!`, so a malformed value fails the build:
    ///
    /// ```
    /// use ledreg::BlinkConfig;
    ///
    /// const CONFIG: BlinkConfig = BlinkConfig::from_env(Some("250_000"));
    /// assert_eq!(CONFIG.half_period, 250_000);
    /// ```
    pub const fn from_env(var: Option<&str>) -> Self {
        match var {
            Some(value) => Self::DEFAULT.with_half_period(parse_u32(value)),
            None => Self::DEFAULT,
        }
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decimal `u32`, `_` separators allowed.
pub const fn parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty number");

    let mut value: u32 = 0;
    let mut digits = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if b == b'_' {
            continue;
        }
        assert!(b.is_ascii_digit(), "not a decimal number");
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u32) {
                Some(v) => v,
                None => panic!("number does not fit in u32"),
            },
            None => panic!("number does not fit in u32"),
        };
        digits += 1;
    }
    assert!(digits > 0, "not a decimal number");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_blinks_pc13() {
        let config = BlinkConfig::default();
        assert_eq!(config.pin.index(), 13);
        assert_eq!(config.half_period, 500_000);
        assert_eq!(BlinkConfig::from_env(None), config);
    }

    #[test]
    fn builders_override_one_field() {
        let config = BlinkConfig::DEFAULT.with_half_period(10).with_pin(Pin::new(5));
        assert_eq!(config.half_period, 10);
        assert_eq!(config.pin, Pin::new(5));
    }

    #[test]
    fn parses_decimal() {
        assert_eq!(parse_u32("0"), 0);
        assert_eq!(parse_u32("1_000_000"), 1_000_000);
        assert_eq!(parse_u32("4294967295"), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn rejects_overflow() {
        parse_u32("4294967296");
    }

    #[test]
    #[should_panic(expected = "not a decimal")]
    fn rejects_hex() {
        parse_u32("0x10");
    }

    #[test]
    #[should_panic(expected = "not a decimal")]
    fn rejects_only_separators() {
        parse_u32("__");
    }
}
