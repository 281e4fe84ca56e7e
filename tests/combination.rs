use dempster_shafer::mass::MassFunction;
use dempster_shafer::structures::discrete::DiscreteElement;

fn el(n: usize, bits: u32) -> DiscreteElement {
    DiscreteElement::from_bits(n, &[bits]).unwrap()
}

mod smets_and_dempster {
    use super::*;

    #[test]
    fn self_combination_matches_the_hand_computed_auto_conflict_table() {
        let m = MassFunction::from_focals([(el(2, 0b01), 0.2), (el(2, 0b10), 0.2), (el(2, 0b11), 0.6)]).unwrap();

        let combined = m.combination_smets(&[&m]).unwrap();

        assert!((combined.m(&el(2, 0b00)) - 0.08).abs() < 1e-9);
        assert!((combined.m(&el(2, 0b01)) - 0.28).abs() < 1e-9);
        assert!((combined.m(&el(2, 0b10)) - 0.28).abs() < 1e-9);
        assert!((combined.m(&el(2, 0b11)) - 0.36).abs() < 1e-9);
    }

    #[test]
    fn dempster_removes_the_empty_focal_and_renormalises() {
        let m = MassFunction::from_focals([(el(2, 0b01), 0.2), (el(2, 0b10), 0.2), (el(2, 0b11), 0.6)]).unwrap();

        let combined = m.combination_dempster(&[&m]).unwrap();

        assert_eq!(combined.m(&el(2, 0b00)), 0.0);
        assert!(combined.has_valid_sum());
    }

    #[test]
    fn dempster_signals_total_conflict_on_fully_disjoint_inputs() {
        let m1 = MassFunction::from_focals([(el(3, 0b001), 1.0)]).unwrap();
        let m2 = MassFunction::from_focals([(el(3, 0b110), 1.0)]).unwrap();

        assert!(m1.combination_dempster(&[&m2]).is_err());
    }

    #[test]
    fn dempster_is_commutative() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 0.6), (el(2, 0b11), 0.4)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b10), 0.3), (el(2, 0b11), 0.7)]).unwrap();

        let ab = m1.combination_dempster(&[&m2]).unwrap();
        let ba = m2.combination_dempster(&[&m1]).unwrap();

        for bits in [0b00u32, 0b01, 0b10, 0b11] {
            assert!((ab.m(&el(2, bits)) - ba.m(&el(2, bits))).abs() < 1e-9);
        }
    }

    #[test]
    fn dempster_is_associative_across_a_three_way_combination() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 0.6), (el(2, 0b11), 0.4)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b10), 0.3), (el(2, 0b11), 0.7)]).unwrap();
        let m3 = MassFunction::from_focals([(el(2, 0b01), 0.5), (el(2, 0b10), 0.5)]).unwrap();

        let left_first = m1.combination_dempster(&[&m2]).unwrap().combination_dempster(&[&m3]).unwrap();
        let right_first = m1.combination_dempster(&[&m2, &m3]).unwrap();

        for bits in [0b00u32, 0b01, 0b10, 0b11] {
            assert!((left_first.m(&el(2, bits)) - right_first.m(&el(2, bits))).abs() < 1e-9);
        }
    }
}

mod identities_over_the_vacuous_function {
    use super::*;

    #[test]
    fn smets_with_vacuous_is_the_identity() {
        let m = MassFunction::from_focals([(el(3, 0b001), 0.3), (el(3, 0b111), 0.7)]).unwrap();
        let vacuous = MassFunction::vacuous(3).unwrap();

        let combined = m.combination_smets(&[&vacuous]).unwrap();

        for bits in 0u32..8 {
            assert!((combined.m(&el(3, bits)) - m.m(&el(3, bits))).abs() < 1e-9);
        }
    }

    #[test]
    fn disjunctive_with_vacuous_is_vacuous() {
        let m = MassFunction::from_focals([(el(3, 0b001), 0.3), (el(3, 0b111), 0.7)]).unwrap();
        let vacuous = MassFunction::vacuous(3).unwrap();

        let combined = m.combination_disjunctive(&[&vacuous]).unwrap();

        assert!((combined.m(&el(3, 0b111)) - 1.0).abs() < 1e-9);
    }
}

mod dubois_prade {
    use super::*;

    #[test]
    fn assigns_conflicting_mass_to_the_union_instead_of_discarding_it() {
        let m1 = MassFunction::from_focals([(el(3, 0b001), 1.0)]).unwrap();
        let m2 = MassFunction::from_focals([(el(3, 0b110), 1.0)]).unwrap();

        let combined = m1.combination_dubois_prade(&[&m2]).unwrap();

        assert!((combined.m(&el(3, 0b111)) - 1.0).abs() < 1e-9);
        assert_eq!(combined.m(&el(3, 0b000)), 0.0);
    }

    #[test]
    fn agrees_with_smets_when_every_pair_intersects() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 0.4), (el(2, 0b11), 0.6)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b01), 0.5), (el(2, 0b11), 0.5)]).unwrap();

        let smets = m1.combination_smets(&[&m2]).unwrap();
        let dubois_prade = m1.combination_dubois_prade(&[&m2]).unwrap();

        for bits in [0b00u32, 0b01, 0b10, 0b11] {
            assert!((smets.m(&el(2, bits)) - dubois_prade.m(&el(2, bits))).abs() < 1e-9);
        }
    }
}

mod average_murphy_and_chen {
    use super::*;

    #[test]
    fn average_is_the_arithmetic_mean_of_the_inputs() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 1.0)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b10), 1.0)]).unwrap();

        let averaged = m1.combination_average(&[&m2]).unwrap();

        assert!((averaged.m(&el(2, 0b01)) - 0.5).abs() < 1e-9);
        assert!((averaged.m(&el(2, 0b10)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn murphy_self_combines_the_average_n_minus_one_times() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 0.9), (el(2, 0b11), 0.1)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b10), 0.9), (el(2, 0b11), 0.1)]).unwrap();

        let murphy = m1.combination_murphy(&[&m2]).unwrap();
        let average = m1.combination_average(&[&m2]).unwrap();
        let by_hand = average.combination_dempster(&[&average]).unwrap();

        for bits in [0b00u32, 0b01, 0b10, 0b11] {
            assert!((murphy.m(&el(2, bits)) - by_hand.m(&el(2, bits))).abs() < 1e-9);
        }
    }

    #[test]
    fn chen_agrees_with_murphy_when_every_input_is_equally_similar() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 0.5), (el(2, 0b11), 0.5)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b01), 0.5), (el(2, 0b11), 0.5)]).unwrap();

        let chen = m1.combination_chen(&[&m2]).unwrap();
        let murphy = m1.combination_murphy(&[&m2]).unwrap();

        for bits in [0b00u32, 0b01, 0b10, 0b11] {
            assert!((chen.m(&el(2, bits)) - murphy.m(&el(2, bits))).abs() < 1e-9);
        }
    }
}

mod dispatcher {
    use dempster_shafer::mass::Rule;

    use super::*;

    #[test]
    fn combination_dispatches_to_the_named_rule() {
        let m1 = MassFunction::from_focals([(el(2, 0b01), 0.6), (el(2, 0b11), 0.4)]).unwrap();
        let m2 = MassFunction::from_focals([(el(2, 0b10), 0.3), (el(2, 0b11), 0.7)]).unwrap();

        let via_dispatcher = m1.combination(Rule::Dempster, &[&m2]).unwrap();
        let direct = m1.combination_dempster(&[&m2]).unwrap();

        for bits in [0b00u32, 0b01, 0b10, 0b11] {
            assert!((via_dispatcher.m(&el(2, bits)) - direct.m(&el(2, bits))).abs() < 1e-9);
        }
    }

    #[test]
    fn combination_rejects_a_single_input() {
        let m = MassFunction::from_focals([(el(2, 0b01), 1.0)]).unwrap();
        assert!(m.combination(Rule::Smets, &[]).is_err());
    }
}
