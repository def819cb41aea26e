use serde::{Deserialize, Serialize};

/// Closed set of period kinds. Interval periods consume real match time
/// (half-time, breaks before extra time) but never receive events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    Regular,
    Extra,
    Interval,
}

impl PeriodType {
    pub fn is_interval(self) -> bool {
        matches!(self, PeriodType::Interval)
    }
}

/// A contiguous span of match time.
///
/// Periods are index-addressed in the order they were played. `duration_secs`
/// grows while the period's clock runs and is frozen once the period is
/// superseded by the next one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    #[serde(rename = "type")]
    pub period_type: PeriodType,
    pub label: String,
    pub duration_secs: u32,
    pub is_finished: bool,
}

impl Period {
    pub fn new(period_type: PeriodType, label: impl Into<String>) -> Self {
        Self {
            period_type,
            label: label.into(),
            duration_secs: 0,
            is_finished: false,
        }
    }

    /// Default label for the n-th period of a kind, counting from 1.
    pub fn default_label(period_type: PeriodType, ordinal: usize) -> String {
        match period_type {
            PeriodType::Regular => format!("Period {ordinal}"),
            PeriodType::Extra => format!("Extra time {ordinal}"),
            PeriodType::Interval => "Interval".to_string(),
        }
    }
}
