use pinrelax::domain::*;
use pinrelax::initial_conditions::*;
use pinrelax::solver::*;
use pinrelax::SmoothError;

use float_cmp::assert_approx_eq;

#[test]
fn reference_run_one_step() {
    let n = 10;
    let pins = PinSet::ends_and_middle(n, 1.0).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let result = smoother.smooth(Sequence::new(n), 1).unwrap();
    let expected = [1.0, 0.5, 0.0, 0.0, 0.5, 1.0, 0.5, 0.0, 0.5, 1.0];
    assert_eq!(result.buffer(), &expected);
}

#[test]
fn pins_hold_for_every_step_count() {
    let n = 33;
    let pins =
        PinSet::new([(0, 2.0), (7, -1.0), (20, 0.25), (32, 4.0)]).unwrap();
    let smoother = Smoother::new(n, pins.clone()).unwrap();
    let initial = generate_ic(
        n,
        ICType::Rand {
            max_val: 10.0,
            seed: Some(3),
        },
    )
    .unwrap();
    for m in [0, 1, 2, 5, 64, 500] {
        let result = smoother.smooth(initial.clone(), m).unwrap();
        for pin in pins.iter() {
            assert_eq!(result.view(pin.position), pin.value);
        }
    }
}

#[test]
fn unpinned_endpoints_never_move() {
    let n = 12;
    let pins = PinSet::new([(4, 1.0), (8, -3.0)]).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let initial = Sequence::from_fn(n, |i| (i * i) as f64);
    for m in [0, 1, 3, 100] {
        let result = smoother.smooth(initial.clone(), m).unwrap();
        assert_eq!(result.view(0), 0.0);
        assert_eq!(result.view(n - 1), ((n - 1) * (n - 1)) as f64);
    }
}

#[test]
fn zero_iterations_is_pinning() {
    let n = 9;
    let pins = PinSet::ends_and_middle(n, 1.0).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let v = generate_ic(n, ICType::Impulse { variance: 4.0 }).unwrap();
    let mut expected = v.clone();
    smoother.apply_pins(&mut expected).unwrap();
    assert_eq!(smoother.smooth(v, 0).unwrap(), expected);
}

#[test]
fn fixed_point_is_stable() {
    // A line between the end pins is its own neighbor average.
    let n = 9;
    let pins = PinSet::new([(0, 0.0), (4, 4.0), (8, 8.0)]).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let line = Sequence::from_fn(n, |i| i as f64);
    for m in [1, 2, 17] {
        let result = smoother.smooth(line.clone(), m).unwrap();
        assert_eq!(result, line);
    }
}

#[test]
fn deterministic() {
    let n = 101;
    let pins = PinSet::ends_and_middle(n, 1.0).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let initial = generate_ic(
        n,
        ICType::Rand {
            max_val: 1.0,
            seed: Some(11),
        },
    )
    .unwrap();
    let a = smoother.smooth(initial.clone(), 250).unwrap();
    let b = smoother.smooth(initial, 250).unwrap();
    for (x, y) in a.buffer().iter().zip(b.buffer()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn all_pinned_is_no_op() {
    let n = 5;
    let pins =
        PinSet::new([(0, 1.0), (1, 2.0), (2, 3.0), (3, 4.0), (4, 5.0)])
            .unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let expected = Sequence::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    for m in [0, 1, 10] {
        let result = smoother.smooth(Sequence::new(n), m).unwrap();
        assert_eq!(result, expected);
    }
}

#[test]
fn relaxes_toward_pins() {
    // With every interior position between pins at 1.0
    // the whole sequence approaches 1.0.
    let n = 10;
    let pins = PinSet::ends_and_middle(n, 1.0).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let result = smoother.smooth(Sequence::new(n), 2000).unwrap();
    for v in result.buffer() {
        assert_approx_eq!(f64, *v, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn skip_self_ignores_own_value() {
    // A spike moves to its neighbors and back instead of spreading.
    let n = 5;
    let pins = PinSet::new([(0, 0.0), (4, 0.0)]).unwrap();
    let smoother = Smoother::new(n, pins).unwrap();
    let initial = Sequence::from(vec![0.0, 0.0, 2.0, 0.0, 0.0]);
    let one = smoother.smooth(initial.clone(), 1).unwrap();
    assert_eq!(one.buffer(), &[0.0, 1.0, 0.0, 1.0, 0.0]);
    let two = smoother.smooth(initial, 2).unwrap();
    assert_eq!(two.buffer(), &[0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn configuration_errors() {
    assert!(matches!(
        Smoother::new(0, PinSet::default()),
        Err(SmoothError::EmptySequence)
    ));
    assert!(matches!(
        Smoother::new(3, PinSet::ends_and_middle(10, 1.0).unwrap()),
        Err(SmoothError::PinOutOfRange {
            position: 5,
            len: 3
        })
    ));
    assert!(matches!(
        Smoother::new(2, PinSet::ends_and_middle(10, 1.0).unwrap()),
        Err(SmoothError::TooManyPins { pins: 3, len: 2 })
    ));
    assert!(matches!(
        PinSet::new([(1, 1.0), (1, 2.0)]),
        Err(SmoothError::DuplicatePin { position: 1 })
    ));

    let smoother = Smoother::new(4, PinSet::default()).unwrap();
    assert!(matches!(
        smoother.smooth(Sequence::new(5), 1),
        Err(SmoothError::LengthMismatch {
            expected: 4,
            got: 5
        })
    ));
}
