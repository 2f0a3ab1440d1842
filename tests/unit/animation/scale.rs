use super::*;

const SC_DIV: f64 = 0.51;
const SC_GAP: f64 = 0.05;

#[test]
fn divide_scale_stays_in_unit_interval() {
    for n in 1..=4usize {
        for i in 0..n {
            for step in 0..=200 {
                let scale = f64::from(step) / 100.0;
                let v = divide_scale(scale, i, n);
                assert!(
                    (0.0..=1.0).contains(&v),
                    "divide_scale({scale}, {i}, {n}) = {v}"
                );
            }
        }
    }
}

#[test]
fn divide_scale_staggers_siblings() {
    // First sibling halfway through its window, second not yet started.
    assert_eq!(divide_scale(0.25, 0, 2), 0.5);
    assert_eq!(divide_scale(0.25, 1, 2), 0.0);
    // First done, second halfway.
    assert_eq!(divide_scale(0.75, 0, 2), 1.0);
    assert_eq!(divide_scale(0.75, 1, 2), 0.5);
}

#[test]
fn scale_factor_thresholds() {
    assert_eq!(scale_factor(0.0, SC_DIV), 0.0);
    assert_eq!(scale_factor(0.5, SC_DIV), 0.0);
    assert_eq!(scale_factor(0.51, SC_DIV), 1.0);
    assert_eq!(scale_factor(1.01, SC_DIV), 1.0);
    assert_eq!(scale_factor(1.02, SC_DIV), 2.0);
    assert_eq!(scale_factor(1.6, SC_DIV), 3.0);
}

#[test]
fn mirror_value_switches_denominator_mid_cycle() {
    // Below the divisor the first denominator is active.
    assert_eq!(mirror_value(0.3, 2.0, 1.0, SC_DIV), 0.5);
    // At and above the divisor the second takes over.
    assert_eq!(mirror_value(0.6, 2.0, 1.0, SC_DIV), 1.0);
}

#[test]
fn update_value_sign_follows_direction() {
    let up = update_value(0.3, 1.0, 2.0, 1.0, SC_GAP, SC_DIV);
    let down = update_value(0.3, -1.0, 2.0, 1.0, SC_GAP, SC_DIV);
    let idle = update_value(0.3, 0.0, 2.0, 1.0, SC_GAP, SC_DIV);
    assert!(up > 0.0);
    assert_eq!(down, -up);
    assert_eq!(idle, 0.0);
}

#[test]
fn update_value_second_half_is_faster() {
    let slow = update_value(0.3, 1.0, 2.0, 1.0, SC_GAP, SC_DIV);
    let fast = update_value(0.7, 1.0, 2.0, 1.0, SC_GAP, SC_DIV);
    assert_eq!(slow, SC_GAP / 2.0);
    assert_eq!(fast, SC_GAP);
}
