//! Structural checks for personal identity codes.

use chrono::NaiveDate;

/// Predicate deciding whether an identity code is well formed.
pub trait IdentityCodeValidator: Send + Sync {
    fn is_valid(&self, code: &str) -> bool;
}

impl<F> IdentityCodeValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, code: &str) -> bool {
        self(code)
    }
}

const CODE_LENGTH: usize = 11;
const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Estonian personal code (`isikukood`) validator: `GYYMMDDSSSC`.
///
/// Accepts every gender/century digit `1..=8` (1800s through 2100s), a real calendar birth
/// date, and a matching mod-11 check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianPersonalCodeValidator;

impl EstonianPersonalCodeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check digit for the first ten digits of a code.
    pub fn checksum(digits: &[u32; 10]) -> u32 {
        let weighted = |weights: &[u32; 10]| -> u32 {
            digits
                .iter()
                .zip(weights)
                .map(|(digit, weight)| digit * weight)
                .sum::<u32>()
                % 11
        };

        match weighted(&PRIMARY_WEIGHTS) {
            10 => match weighted(&SECONDARY_WEIGHTS) {
                10 => 0,
                remainder => remainder,
            },
            remainder => remainder,
        }
    }

    fn century_base(digit: u32) -> Option<i32> {
        match digit {
            1 | 2 => Some(1800),
            3 | 4 => Some(1900),
            5 | 6 => Some(2000),
            7 | 8 => Some(2100),
            _ => None,
        }
    }
}

impl IdentityCodeValidator for EstonianPersonalCodeValidator {
    fn is_valid(&self, code: &str) -> bool {
        if code.len() != CODE_LENGTH || !code.bytes().all(|byte| byte.is_ascii_digit()) {
            return false;
        }

        let digits: Vec<u32> = code.bytes().map(|byte| u32::from(byte - b'0')).collect();
        let Some(century) = Self::century_base(digits[0]) else {
            return false;
        };

        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return false;
        }

        let mut leading = [0u32; 10];
        leading.copy_from_slice(&digits[..10]);
        Self::checksum(&leading) == digits[10]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_codes_with_matching_check_digit() {
        let validator = EstonianPersonalCodeValidator::new();
        for code in ["49002010965", "49002010976", "37605020270", "60606150007"] {
            assert!(validator.is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn rejects_wrong_check_digit() {
        let validator = EstonianPersonalCodeValidator::new();
        assert!(!validator.is_valid("49002010966"));
    }

    #[test]
    fn rejects_bad_shape() {
        let validator = EstonianPersonalCodeValidator::new();
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("4900201096"));
        assert!(!validator.is_valid("490020109655"));
        assert!(!validator.is_valid("4900201096a"));
        assert!(!validator.is_valid(" 49002010965"));
    }

    #[test]
    fn rejects_impossible_birth_dates() {
        let validator = EstonianPersonalCodeValidator::new();
        // month 13, check digit otherwise correct
        assert!(!validator.is_valid("39013010003"));
    }

    #[test]
    fn accepts_centuries_outside_the_lending_range() {
        let validator = EstonianPersonalCodeValidator::new();
        assert!(validator.is_valid("19001014901"));
        assert!(validator.is_valid("89001014908"));
        assert!(!validator.is_valid("99001014900"));
    }

    #[test]
    fn falls_back_to_secondary_weights() {
        // primary remainder is 10 for both prefixes
        assert_eq!(
            EstonianPersonalCodeValidator::checksum(&[3, 9, 0, 0, 1, 0, 1, 0, 2, 3]),
            8
        );
        assert_eq!(
            EstonianPersonalCodeValidator::checksum(&[3, 9, 0, 0, 1, 0, 1, 0, 5, 9]),
            0
        );
        assert!(EstonianPersonalCodeValidator::new().is_valid("39001010238"));
    }
}
