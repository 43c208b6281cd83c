/// Cross-validation tests: the paired implementations (recursive vs iterative
/// factorial, manual scan vs builtin reduction) must agree on every shared
/// valid input, and both must match independent reference values. Their
/// agreement is part of the contract, not an implementation detail.

#[cfg(test)]
mod equivalence_tests {
    use num_bigint::BigUint;

    use crate::error::AppError;
    use crate::{factorial, largest, reverse};

    // n! for n in 0..=20, from a reference table (20! still fits in u64).
    const REFERENCE: [u64; 21] = [
        1,
        1,
        2,
        6,
        24,
        120,
        720,
        5_040,
        40_320,
        362_880,
        3_628_800,
        39_916_800,
        479_001_600,
        6_227_020_800,
        87_178_291_200,
        1_307_674_368_000,
        20_922_789_888_000,
        355_687_428_096_000,
        6_402_373_705_728_000,
        121_645_100_408_832_000,
        2_432_902_008_176_640_000,
    ];

    #[test]
    fn factorial_implementations_agree_with_the_reference() {
        for (n, &expected) in REFERENCE.iter().enumerate() {
            let n = n as i64;
            let rec = factorial::recursive(n).unwrap();
            let itr = factorial::iterative(n).unwrap();
            assert_eq!(rec, itr, "implementations disagree for {n}!");
            assert_eq!(itr, BigUint::from(expected), "wrong value for {n}!");
        }
    }

    #[test]
    fn factorial_implementations_fail_identically_on_negative_input() {
        assert!(matches!(factorial::recursive(-1), Err(AppError::Value(_))));
        assert!(matches!(factorial::iterative(-1), Err(AppError::Value(_))));
    }

    #[test]
    fn non_integer_text_fails_at_the_parse_boundary() {
        assert!(matches!(
            factorial::parse_input("3.5"),
            Err(AppError::Type(_))
        ));
    }

    #[test]
    fn scan_and_reduction_agree_on_integer_samples() {
        let samples: [&[i64]; 5] = [
            &[7],
            &[2, 9, 5],
            &[-1, -2, -3],
            &[5, 5, 1],
            &[0, -10, 10, 3],
        ];
        for s in samples {
            assert_eq!(
                largest::find_largest(s).unwrap(),
                largest::find_largest_builtin(s).unwrap(),
                "disagreement on {s:?}"
            );
        }
    }

    #[test]
    fn scan_and_reduction_agree_on_string_samples() {
        let samples: [&[&str]; 3] = [&["a", "z", "m"], &["zz", "za"], &["one"]];
        for s in samples {
            assert_eq!(
                largest::find_largest(s).unwrap(),
                largest::find_largest_builtin(s).unwrap(),
                "disagreement on {s:?}"
            );
        }
    }

    #[test]
    fn both_largest_implementations_reject_empty_input() {
        assert!(matches!(
            largest::find_largest::<i64>(&[]),
            Err(AppError::EmptyInput(_))
        ));
        assert!(matches!(
            largest::find_largest_builtin::<i64>(&[]),
            Err(AppError::EmptyInput(_))
        ));
    }

    #[test]
    fn reverse_is_an_involution() {
        for s in ["hello", "", "A", "racecar", "ab cd", "héllo wörld"] {
            assert_eq!(reverse::reverse(&reverse::reverse(s)), s);
        }
    }

    #[test]
    fn concrete_scenarios_from_the_exercises() {
        assert_eq!(reverse::reverse("hello"), "olleh");
        assert_eq!(reverse::reverse(""), "");
        assert_eq!(reverse::reverse(&12345), "54321");

        assert_eq!(factorial::recursive(5).unwrap(), BigUint::from(120u32));
        assert_eq!(factorial::iterative(5).unwrap(), BigUint::from(120u32));

        assert_eq!(*largest::find_largest(&[1, 3, 2]).unwrap(), 3);
        assert_eq!(*largest::find_largest(&[-5, -2, -3]).unwrap(), -2);
        assert_eq!(*largest::find_largest(&["a", "z", "m"]).unwrap(), "z");
    }
}
