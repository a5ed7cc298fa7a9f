//! The per-day moisture formula.

use crate::params::MoistureParams;
use crate::rainfall::Rainfall;

/// Computes one day's moisture balance from the previous day's balance and
/// the day's own inputs.
///
/// Watering is a hard reset: the result is exactly the threshold, and both
/// the previous balance and the day's rainfall are ignored. Otherwise the
/// balance loses one day of decay (floored at zero), gains the effective
/// rainfall, and is capped at the threshold.
///
/// The result is always within `[0, threshold]`; the function is
/// deterministic and keeps no state.
pub fn daily_moisture(
    prev_moisture: f64,
    effective: Rainfall,
    watered: bool,
    params: &MoistureParams,
) -> f64 {
    if watered {
        return params.threshold_mm();
    }
    let decayed = (prev_moisture - params.decay_per_day()).max(0.0);
    (decayed + effective.amount()).min(params.threshold_mm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params() -> MoistureParams {
        MoistureParams::new(10.0, 7).unwrap()
    }

    #[test]
    fn watering_resets_to_threshold() {
        let p = params();
        assert_eq!(daily_moisture(0.0, Rainfall::Valid(50.0), true, &p), 10.0);
        assert_eq!(daily_moisture(3.3, Rainfall::Unknown, true, &p), 10.0);
    }

    #[test]
    fn rain_lands_on_top_of_decay() {
        let p = params();
        let m = daily_moisture(0.0, Rainfall::Valid(5.0), false, &p);
        assert_abs_diff_eq!(m, 5.0);
    }

    #[test]
    fn dry_day_decays() {
        let p = params();
        let m = daily_moisture(5.0, Rainfall::Valid(0.0), false, &p);
        assert_abs_diff_eq!(m, 5.0 - 10.0 / 7.0);
    }

    #[test]
    fn decay_floors_at_zero() {
        let p = params();
        let m = daily_moisture(0.5, Rainfall::Valid(0.0), false, &p);
        assert_abs_diff_eq!(m, 0.0);
    }

    #[test]
    fn rain_caps_at_threshold() {
        let p = params();
        let m = daily_moisture(8.0, Rainfall::Valid(40.0), false, &p);
        assert_abs_diff_eq!(m, 10.0);
    }

    #[test]
    fn unknown_rain_behaves_like_zero() {
        let p = params();
        let unknown = daily_moisture(5.0, Rainfall::Unknown, false, &p);
        let zero = daily_moisture(5.0, Rainfall::Valid(0.0), false, &p);
        assert_abs_diff_eq!(unknown, zero);
    }

    #[test]
    fn one_day_period_dries_out_whatever_the_balance() {
        let p = MoistureParams::new(10.0, 1).unwrap();
        let m = daily_moisture(10.0, Rainfall::Valid(0.0), false, &p);
        assert_abs_diff_eq!(m, 0.0);
    }

    #[test]
    fn oversized_previous_balance_is_still_capped() {
        // A stale balance left behind by a threshold shrink is pulled back
        // into range on the next pass.
        let p = params();
        let m = daily_moisture(25.0, Rainfall::Valid(0.0), false, &p);
        assert!(m <= p.threshold_mm());
    }

    #[test]
    fn output_stays_in_range_over_random_walk() {
        let p = MoistureParams::new(10.0, 3).unwrap();
        let mut m = 0.0;
        // A fixed pseudo-random input sequence; no value may escape the range.
        let inputs = [
            (Rainfall::Valid(2.5), false),
            (Rainfall::Unknown, false),
            (Rainfall::Valid(80.0), false),
            (Rainfall::Valid(0.0), true),
            (Rainfall::Valid(0.0), false),
            (Rainfall::Unknown, true),
            (Rainfall::Valid(0.3), false),
        ];
        for (eff, watered) in inputs {
            m = daily_moisture(m, eff, watered, &p);
            assert!((0.0..=p.threshold_mm()).contains(&m), "escaped: {m}");
        }
    }
}
