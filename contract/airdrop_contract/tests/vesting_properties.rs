use airdrop_contract::vesting::unlocked_amount;
use proptest::prelude::*;

proptest! {
    #[test]
    fn unlock_is_monotonic(
        entitled in 0i128..1_000_000_000_000i128,
        start in 0u64..1_000_000u64,
        cliff in 0u64..10_000u64,
        extra in 0u64..10_000u64,
        now1 in 0u64..1_100_000u64,
        step in 0u64..100_000u64,
    ) {
        let total = cliff + extra;
        let a = unlocked_amount(entitled, start, cliff, total, now1).unwrap();
        let b = unlocked_amount(entitled, start, cliff, total, now1 + step).unwrap();
        prop_assert!(b >= a);
    }

    #[test]
    fn unlock_stays_within_entitlement(
        entitled in 0i128..1_000_000_000_000i128,
        cliff in 0u64..10_000u64,
        extra in 0u64..10_000u64,
        now in 0u64..30_000u64,
    ) {
        let total = cliff + extra;
        let unlocked = unlocked_amount(entitled, 0, cliff, total, now).unwrap();
        prop_assert!(unlocked >= 0);
        prop_assert!(unlocked <= entitled);
        prop_assert_eq!(unlocked, unlocked_amount(entitled, 0, cliff, total, now).unwrap());
    }

    #[test]
    fn fully_unlocked_at_schedule_end(
        entitled in 0i128..1_000_000_000_000i128,
        start in 0u64..1_000_000u64,
        cliff in 0u64..10_000u64,
        extra in 0u64..10_000u64,
        after in 0u64..10_000u64,
    ) {
        let total = cliff + extra;
        prop_assert_eq!(
            unlocked_amount(entitled, start, cliff, total, start + total + after).unwrap(),
            entitled
        );
    }
}
