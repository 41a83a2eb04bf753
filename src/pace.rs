use crate::error::PaceError;
use crate::models::{Breakdown, PaceResult, SplitConversionResult};

pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_KM: f64 = 1000.0;
pub const METERS_PER_200: f64 = 200.0;
pub const METERS_PER_400: f64 = 400.0;

/// Number of 200m reps covering `rep_meters`, rounded to the nearest whole rep.
///
/// Never less than one, including for non-finite or non-positive input.
pub fn reps_count(rep_meters: f64) -> u32 {
    // f64::max ignores NaN, and the cast saturates on huge values
    (rep_meters / METERS_PER_200).round().max(1.0) as u32
}

/// Goal paces and splits for covering `distance_meters` in `total_seconds`.
///
/// Every figure is `total_seconds / distance_meters` scaled by a fixed distance.
pub fn compute_goal_pace(
    distance_meters: f64,
    total_seconds: f64,
    rep_meters: f64,
) -> Result<PaceResult, PaceError> {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(PaceError::InvalidInput("distance must be a positive number of meters"));
    }
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
        return Err(PaceError::InvalidInput("time must be a positive number of seconds"));
    }

    let seconds_per_meter = total_seconds / distance_meters;
    let split_200 = seconds_per_meter * METERS_PER_200;
    let reps = reps_count(rep_meters);

    Ok(PaceResult {
        pace_per_mile: seconds_per_meter * METERS_PER_MILE,
        pace_per_km: seconds_per_meter * METERS_PER_KM,
        split_200,
        split_400: seconds_per_meter * METERS_PER_400,
        rep_seconds: split_200 * f64::from(reps),
        breakdown: Breakdown::new(split_200, reps),
    })
}

/// Mile and kilometer paces equivalent to a 200m split
pub fn compute_from_split(split_200_seconds: f64) -> Result<SplitConversionResult, PaceError> {
    if !split_200_seconds.is_finite() || split_200_seconds <= 0.0 {
        return Err(PaceError::InvalidInput("200m split must be a positive number of seconds"));
    }

    let seconds_per_meter = split_200_seconds / METERS_PER_200;

    Ok(SplitConversionResult {
        split_200: split_200_seconds,
        pace_per_mile: seconds_per_meter * METERS_PER_MILE,
        pace_per_km: seconds_per_meter * METERS_PER_KM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreakdownRow;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_goal_pace_20_minute_5k() {
        // 1200s / 5000m = 0.24 s/m
        let result = compute_goal_pace(5000.0, 1200.0, 1000.0).unwrap();

        assert_close(result.pace_per_mile, 386.24256);
        assert_close(result.pace_per_km, 240.0);
        assert_close(result.split_200, 48.0);
        assert_close(result.split_400, 96.0);
        assert_close(result.rep_seconds, 240.0);

        let rows: Vec<_> = result.breakdown.iter().collect();
        let expected = [(200.0, 48.0), (400.0, 96.0), (600.0, 144.0), (800.0, 192.0), (1000.0, 240.0)];
        assert_eq!(rows.len(), expected.len());
        for (row, (distance, seconds)) in rows.iter().zip(expected) {
            assert_eq!(row.distance_meters, distance);
            assert_close(row.cumulative_seconds, seconds);
        }
    }

    #[test]
    fn test_split_200_times_five_is_the_1k_entry() {
        let cases = [
            (1609.344, 300.0, 1000.0),
            (5000.0, 1320.0, 1000.0),
            (10000.0, 2400.0, 1600.0),
            (21097.5, 5400.0, 3000.0),
            (42195.0, 10799.0, 1200.0),
            (800.0, 123.4, 2000.0),
        ];

        for (distance, time, rep) in cases {
            let result = compute_goal_pace(distance, time, rep).unwrap();
            let at_1k = result
                .breakdown
                .iter()
                .find(|row| row.distance_meters == 1000.0)
                .unwrap();
            assert_eq!(result.split_200 * 5.0, at_1k.cumulative_seconds);
        }
    }

    #[test]
    fn test_goal_pace_rejects_non_positive_inputs() {
        assert!(compute_goal_pace(0.0, 1200.0, 1000.0).is_err());
        assert!(compute_goal_pace(5000.0, 0.0, 1000.0).is_err());
        assert!(compute_goal_pace(-5000.0, 1200.0, 1000.0).is_err());
        assert!(compute_goal_pace(5000.0, -1.0, 1000.0).is_err());
        assert!(compute_goal_pace(f64::NAN, 1200.0, 1000.0).is_err());
        assert!(compute_goal_pace(5000.0, f64::INFINITY, 1000.0).is_err());
    }

    #[test]
    fn test_reps_count_quantisation() {
        assert_eq!(reps_count(1000.0), 5);
        assert_eq!(reps_count(400.0), 2);

        // Rounds to the nearest 200m
        assert_eq!(reps_count(1099.0), 5);
        assert_eq!(reps_count(1100.0), 6);
        assert_eq!(reps_count(250.0), 1);

        // Never below one rep
        assert_eq!(reps_count(50.0), 1);
        assert_eq!(reps_count(0.0), 1);
        assert_eq!(reps_count(-800.0), 1);
        assert_eq!(reps_count(f64::NAN), 1);
    }

    #[test]
    fn test_short_rep_keeps_single_row() {
        let result = compute_goal_pace(5000.0, 1200.0, 0.0).unwrap();

        assert_eq!(result.breakdown.reps(), 1);
        assert_eq!(
            result.breakdown.iter().next(),
            Some(BreakdownRow {
                distance_meters: 200.0,
                cumulative_seconds: 48.0
            })
        );
        assert_close(result.rep_seconds, result.split_200);
    }

    #[test]
    fn test_breakdown_is_strictly_increasing() {
        let result = compute_goal_pace(10000.0, 2700.0, 3200.0).unwrap();
        let rows: Vec<_> = result.breakdown.iter().collect();

        assert_eq!(rows.len(), 16);
        for pair in rows.windows(2) {
            assert!(pair[1].distance_meters > pair[0].distance_meters);
            assert!(pair[1].cumulative_seconds > pair[0].cumulative_seconds);
        }
        assert_close(rows[15].cumulative_seconds, result.rep_seconds);
    }

    #[test]
    fn test_goal_pace_is_idempotent() {
        let first = compute_goal_pace(21097.5, 5400.0, 1000.0).unwrap();
        let second = compute_goal_pace(21097.5, 5400.0, 1000.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_from_split() {
        let result = compute_from_split(40.0).unwrap();

        assert_eq!(result.split_200, 40.0);
        assert_close(result.pace_per_mile, 321.8688);
        assert_close(result.pace_per_km, 200.0);
    }

    #[test]
    fn test_compute_from_split_rejects_invalid() {
        assert!(compute_from_split(-5.0).is_err());
        assert!(compute_from_split(0.0).is_err());
        assert!(compute_from_split(f64::NAN).is_err());
        assert!(compute_from_split(f64::INFINITY).is_err());
    }

    #[test]
    fn test_split_round_trip() {
        let cases = [(5000.0, 1200.0), (1609.344, 299.0), (42195.0, 12600.0), (400.0, 55.5)];

        for (distance, time) in cases {
            let goal = compute_goal_pace(distance, time, 1000.0).unwrap();
            let from_split = compute_from_split(goal.split_200).unwrap();
            assert_close(from_split.pace_per_mile, goal.pace_per_mile);
            assert_close(from_split.pace_per_km, goal.pace_per_km);
        }
    }
}
