use serde::{Deserialize, Serialize};

use super::domain::CreditSegment;

/// Credit modifier assigned to each non-debt segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentModifiers {
    pub segment_1: u32,
    pub segment_2: u32,
    pub segment_3: u32,
}

/// Process-wide lending limits. Amounts are in whole currency units, periods in months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub min_loan_amount: u32,
    pub max_loan_amount: u32,
    pub min_loan_period: u32,
    pub max_loan_period: u32,
    pub loan_amount_step: u32,
    pub minimum_allowed_age: i32,
    pub maximum_allowed_age: i32,
    pub segment_modifiers: SegmentModifiers,
}

impl DecisionConfig {
    pub const MIN_LOAN_AMOUNT: u32 = 2000;
    pub const MAX_LOAN_AMOUNT: u32 = 10000;
    pub const MIN_LOAN_PERIOD: u32 = 12;
    pub const MAX_LOAN_PERIOD: u32 = 60;
    pub const LOAN_AMOUNT_STEP: u32 = 100;
    /// Legal majority.
    pub const MINIMUM_ALLOWED_AGE: i32 = 18;
    /// Life-expectancy proxy for the single supported country.
    pub const MAXIMUM_ALLOWED_AGE: i32 = 78;
    pub const SEGMENT_1_CREDIT_MODIFIER: u32 = 100;
    pub const SEGMENT_2_CREDIT_MODIFIER: u32 = 300;
    pub const SEGMENT_3_CREDIT_MODIFIER: u32 = 1000;

    /// Credit modifier for a segment; the debt segment has none.
    pub fn modifier_for(&self, segment: CreditSegment) -> u32 {
        match segment {
            CreditSegment::None => 0,
            CreditSegment::Segment1 => self.segment_modifiers.segment_1,
            CreditSegment::Segment2 => self.segment_modifiers.segment_2,
            CreditSegment::Segment3 => self.segment_modifiers.segment_3,
        }
    }

    /// Oldest eligible age. Always reserves the longest possible term, whatever was requested.
    pub fn maximum_eligible_age(&self) -> i32 {
        let longest_term_years = (self.max_loan_period / 12) as i32;
        self.maximum_allowed_age - longest_term_years
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            min_loan_amount: Self::MIN_LOAN_AMOUNT,
            max_loan_amount: Self::MAX_LOAN_AMOUNT,
            min_loan_period: Self::MIN_LOAN_PERIOD,
            max_loan_period: Self::MAX_LOAN_PERIOD,
            loan_amount_step: Self::LOAN_AMOUNT_STEP,
            minimum_allowed_age: Self::MINIMUM_ALLOWED_AGE,
            maximum_allowed_age: Self::MAXIMUM_ALLOWED_AGE,
            segment_modifiers: SegmentModifiers {
                segment_1: Self::SEGMENT_1_CREDIT_MODIFIER,
                segment_2: Self::SEGMENT_2_CREDIT_MODIFIER,
                segment_3: Self::SEGMENT_3_CREDIT_MODIFIER,
            },
        }
    }
}
