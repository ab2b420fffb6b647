//! Human- and machine-readable run reports.
//!
//! A [`Report`] pairs the kernel's [`Estimate`] with the integrand's
//! closed-form reference value. The table rendering mirrors the field set
//! of the original tool's output; the JSON rendering carries the same
//! fields for benchmark drivers to consume.

use std::fmt;

use quad_core::Integrand;
use quad_mc::Estimate;
use serde::Serialize;

/// One run's reportable record.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// Integrand selector name.
    pub function: String,
    /// Worker team size.
    pub threads: usize,
    /// Schedule descriptor (`kind[,chunk]`).
    pub schedule: String,
    /// Number of samples drawn.
    pub samples: u64,
    /// The Monte Carlo estimate.
    pub estimate: f64,
    /// Closed-form value of the integral.
    pub exact: f64,
    /// |estimate - exact|.
    pub absolute_error: f64,
    /// Whether a singular sample drove the estimate non-finite.
    pub anomalous: bool,
    /// Wall-clock seconds spent in the parallel region.
    pub elapsed_seconds: f64,
}

impl Report {
    /// Builds the report for one estimate.
    pub fn new(integrand: Integrand, estimate: &Estimate) -> Self {
        let exact = integrand.exact();
        Self {
            function: integrand.selector().to_string(),
            threads: estimate.threads,
            schedule: estimate.schedule.to_string(),
            samples: estimate.samples,
            estimate: estimate.value,
            exact,
            absolute_error: estimate.absolute_error(exact),
            anomalous: estimate.is_anomalous(),
            elapsed_seconds: estimate.elapsed.as_secs_f64(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Function: {}", self.function)?;
        writeln!(f, "Threads:  {}", self.threads)?;
        writeln!(f, "Schedule: {}", self.schedule)?;
        writeln!(f, "Points N: {}", self.samples)?;
        writeln!(f, "Result:   {:.15}", self.estimate)?;
        writeln!(f, "Exact:    {:.15}", self.exact)?;
        writeln!(f, "Error:    {:.15e}", self.absolute_error)?;
        if self.anomalous {
            writeln!(f, "Anomaly:  estimate is non-finite")?;
        }
        writeln!(f, "Time (s): {:.6}", self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quad_mc::Schedule;
    use std::time::Duration;

    fn sample_estimate(value: f64) -> Estimate {
        Estimate {
            value,
            elapsed: Duration::from_millis(250),
            samples: 10_000,
            threads: 4,
            schedule: Schedule::Dynamic { chunk: Some(1024) },
        }
    }

    #[test]
    fn test_report_fields() {
        let report = Report::new(Integrand::Identity, &sample_estimate(0.501));
        assert_eq!(report.function, "x");
        assert_eq!(report.threads, 4);
        assert_eq!(report.schedule, "dynamic,1024");
        assert_eq!(report.samples, 10_000);
        assert_relative_eq!(report.absolute_error, 0.001, epsilon = 1e-12);
        assert!(!report.anomalous);
        assert_relative_eq!(report.elapsed_seconds, 0.25);
    }

    #[test]
    fn test_report_table_rendering() {
        let text = Report::new(Integrand::Cube, &sample_estimate(0.2503)).to_string();
        assert!(text.contains("Function: x3"));
        assert!(text.contains("Points N: 10000"));
        assert!(text.contains("Exact:    0.250000000000000"));
        assert!(text.contains("Time (s): 0.250000"));
        assert!(!text.contains("Anomaly"));
    }

    #[test]
    fn test_report_flags_anomaly() {
        let report = Report::new(Integrand::InvSqrt, &sample_estimate(f64::INFINITY));
        assert!(report.anomalous);
        assert!(report.to_string().contains("Anomaly"));
    }

    #[test]
    fn test_report_serialises_to_json() {
        let report = Report::new(Integrand::Cos100x, &sample_estimate(-0.005));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"function\":\"cos100x\""));
        assert!(json.contains("\"samples\":10000"));
    }
}
