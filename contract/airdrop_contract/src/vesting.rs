//! Linear vesting with a cliff.
//!
//! Nothing unlocks before `start_time + cliff_duration`. From the cliff until
//! `start_time + total_duration` the entitlement unlocks linearly, and after
//! that it is fully unlocked. When `cliff_duration == total_duration` the
//! schedule is a single step at the cliff.

use crate::storage_types::AirdropError;

/// Amount of `entitled` unlocked at `now`, rounded down.
pub fn unlocked_amount(
    entitled: i128,
    start_time: u64,
    cliff_duration: u64,
    total_duration: u64,
    now: u64,
) -> Result<i128, AirdropError> {
    if entitled < 0 || cliff_duration > total_duration {
        return Err(AirdropError::InvalidScheduleParameters);
    }

    let cliff_end = start_time
        .checked_add(cliff_duration)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    let schedule_end = vesting_end(start_time, total_duration)?;

    if now < cliff_end {
        return Ok(0);
    }
    if now >= schedule_end {
        return Ok(entitled);
    }

    // cliff_end <= now < schedule_end, so the span is non-zero
    let elapsed = (now - cliff_end) as i128;
    let span = (total_duration - cliff_duration) as i128;

    let scaled = entitled
        .checked_mul(elapsed)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    Ok(scaled / span)
}

/// End of the schedule, or `ArithmeticOverflow` if it does not fit in a timestamp.
pub fn vesting_end(start_time: u64, total_duration: u64) -> Result<u64, AirdropError> {
    start_time
        .checked_add(total_duration)
        .ok_or(AirdropError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: u64 = 1_700_000_000;

    #[test]
    fn nothing_before_cliff() {
        assert_eq!(unlocked_amount(1000, T, 100, 1000, T).unwrap(), 0);
        assert_eq!(unlocked_amount(1000, T, 100, 1000, T + 99).unwrap(), 0);
        assert_eq!(unlocked_amount(1000, T, 100, 1000, T - 50).unwrap(), 0);
    }

    #[test]
    fn cliff_equal_to_duration_is_a_step() {
        assert_eq!(unlocked_amount(1000, T, 100, 100, T + 99).unwrap(), 0);
        assert_eq!(unlocked_amount(1000, T, 100, 100, T + 100).unwrap(), 1000);
        assert_eq!(unlocked_amount(1000, T, 100, 100, T + 5000).unwrap(), 1000);
    }

    #[test]
    fn linear_without_cliff() {
        assert_eq!(unlocked_amount(1000, T, 0, 1000, T + 250).unwrap(), 250);
        assert_eq!(unlocked_amount(1000, T, 0, 1000, T + 1000).unwrap(), 1000);
        assert_eq!(unlocked_amount(1000, T, 0, 1000, T + 2000).unwrap(), 1000);
    }

    #[test]
    fn linear_after_cliff_rounds_down() {
        // 9 day cliff, 10 day schedule: the last day unlocks linearly
        let day = 86_400;
        let entitled = 10_000_000_000_000_000_000i128;
        assert_eq!(unlocked_amount(entitled, T, 9 * day, 10 * day, T + 9 * day).unwrap(), 0);
        assert_eq!(
            unlocked_amount(entitled, T, 9 * day, 10 * day, T + 9 * day + day / 2).unwrap(),
            entitled / 2
        );
        assert_eq!(unlocked_amount(7, T, 0, 3, T + 1).unwrap(), 2);
    }

    #[test]
    fn rejects_cliff_longer_than_duration() {
        assert_eq!(
            unlocked_amount(1000, T, 200, 100, T),
            Err(AirdropError::InvalidScheduleParameters)
        );
    }

    #[test]
    fn rejects_negative_entitlement() {
        assert_eq!(
            unlocked_amount(-1, T, 0, 100, T),
            Err(AirdropError::InvalidScheduleParameters)
        );
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        assert_eq!(
            unlocked_amount(i128::MAX, 0, 0, 1000, 500),
            Err(AirdropError::ArithmeticOverflow)
        );
        assert_eq!(
            unlocked_amount(1000, u64::MAX, 1, 10, u64::MAX),
            Err(AirdropError::ArithmeticOverflow)
        );
        assert_eq!(vesting_end(u64::MAX, 1), Err(AirdropError::ArithmeticOverflow));
    }
}
