//! Hiring-funnel numbers for the HR dashboard, derived from stored
//! applications.

use serde::Serialize;

use crate::models::application::{Application, ApplicationStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_applications: usize,
    /// Mean ATS score across all applications; 0 when there are none.
    pub average_score: f64,
    /// Share of applications marked Accepted; 0 when there are none.
    pub acceptance_rate: f64,
}

pub fn compute_analytics(applications: &[Application]) -> AnalyticsReport {
    let total = applications.len();
    if total == 0 {
        return AnalyticsReport {
            total_applications: 0,
            average_score: 0.0,
            acceptance_rate: 0.0,
        };
    }

    let average_score =
        applications.iter().map(|a| a.ats_score as f64).sum::<f64>() / total as f64;
    let accepted = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Accepted)
        .count();

    AnalyticsReport {
        total_applications: total,
        average_score,
        acceptance_rate: accepted as f64 / total as f64,
    }
}
