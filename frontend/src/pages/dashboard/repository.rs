use crate::api::{ApiClient, ApiError, DashboardSummary};

pub async fn fetch_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    api.get_dashboard_summary().await
}

/// Percentages derived from the raw counts. Pure; recomputed from whatever
/// the latest fetch returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DerivedSummary {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub checked_in_today: i64,
    pub attendance_rate: i64,
    pub coverage_rate: i64,
    pub absent_impact: i64,
}

pub fn derive_summary(summary: &DashboardSummary) -> DerivedSummary {
    let checked_in_today = summary.present_today + summary.absent_today;
    DerivedSummary {
        total_employees: summary.total_employees,
        present_today: summary.present_today,
        absent_today: summary.absent_today,
        checked_in_today,
        attendance_rate: round_percent(summary.present_today, checked_in_today),
        coverage_rate: round_percent(checked_in_today, summary.total_employees),
        absent_impact: round_percent(summary.absent_today, summary.total_employees),
    }
}

/// Half-up integer rounding of `numerator / denominator * 100`. A zero (or
/// negative) denominator yields 0 rather than an error.
pub fn round_percent(numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    (200 * numerator + denominator) / (2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: i64, present: i64, absent: i64) -> DashboardSummary {
        DashboardSummary {
            total_employees: total,
            present_today: present,
            absent_today: absent,
            recent_attendance: Vec::new(),
        }
    }

    #[test]
    fn derives_rates_from_counts() {
        let derived = derive_summary(&summary(10, 6, 2));
        assert_eq!(derived.checked_in_today, 8);
        assert_eq!(derived.attendance_rate, 75);
        assert_eq!(derived.coverage_rate, 80);
        assert_eq!(derived.absent_impact, 20);
    }

    #[test]
    fn zero_total_employees_yields_zero_coverage() {
        let derived = derive_summary(&summary(0, 0, 0));
        assert_eq!(derived.coverage_rate, 0);
        assert_eq!(derived.attendance_rate, 0);
        assert_eq!(derived.absent_impact, 0);
    }

    #[test]
    fn zero_checked_in_yields_zero_attendance_rate() {
        let derived = derive_summary(&summary(5, 0, 0));
        assert_eq!(derived.attendance_rate, 0);
        assert_eq!(derived.coverage_rate, 0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(round_percent(6, 8), 75);
        assert_eq!(round_percent(1, 3), 33); // 33.33 rounds down
        assert_eq!(round_percent(2, 3), 67); // 66.67 rounds up
        assert_eq!(round_percent(0, 7), 0);
        assert_eq!(round_percent(7, 7), 100);
    }
}
