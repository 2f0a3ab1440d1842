use super::*;

fn cfg() -> StageConfig {
    StageConfig::default()
}

/// Drive one full cycle, returning the tick count and completion count.
fn run_cycle(state: &mut PulseState, cfg: &StageConfig) -> (u32, u32) {
    let mut ticks = 0;
    let mut completions = 0;
    while ticks < 1000 {
        ticks += 1;
        if state.update(cfg) == UpdateOutcome::Completed {
            completions += 1;
            break;
        }
    }
    (ticks, completions)
}

#[test]
fn update_while_idle_is_a_noop() {
    let cfg = cfg();
    let mut state = PulseState::default();
    assert_eq!(state.update(&cfg), UpdateOutcome::InProgress);
    assert_eq!(state.scale(), 0.0);
    assert!(state.is_idle());
}

#[test]
fn cycle_ends_at_exactly_one_and_completes_once() {
    let cfg = cfg();
    let mut state = PulseState::default();
    assert_eq!(state.start(), StartOutcome::Started);
    assert_eq!(state.direction(), Direction::Advance);

    let (ticks, completions) = run_cycle(&mut state, &cfg);
    assert_eq!(completions, 1);
    assert!(ticks < 100, "cycle should finish in bounded ticks");
    assert_eq!(state.scale(), 1.0);
    assert!(state.is_idle());
}

#[test]
fn advancing_scale_is_monotonic() {
    let cfg = cfg();
    let mut state = PulseState::default();
    state.start();
    let mut prev = state.scale();
    for _ in 0..100 {
        if state.update(&cfg) == UpdateOutcome::Completed {
            break;
        }
        assert!(state.scale() > prev);
        prev = state.scale();
    }
}

#[test]
fn direction_alternates_between_cycles() {
    let cfg = cfg();
    let mut state = PulseState::default();

    assert_eq!(state.start(), StartOutcome::Started);
    assert_eq!(state.direction(), Direction::Advance);
    run_cycle(&mut state, &cfg);
    assert_eq!(state.scale(), 1.0);

    assert_eq!(state.start(), StartOutcome::Started);
    assert_eq!(state.direction(), Direction::Retreat);
    run_cycle(&mut state, &cfg);
    assert_eq!(state.scale(), 0.0);

    assert_eq!(state.start(), StartOutcome::Started);
    assert_eq!(state.direction(), Direction::Advance);
}

#[test]
fn start_mid_cycle_is_ignored() {
    let cfg = cfg();
    let mut state = PulseState::default();
    assert_eq!(state.start(), StartOutcome::Started);
    state.update(&cfg);
    assert_eq!(state.start(), StartOutcome::Ignored);
    assert_eq!(state.direction(), Direction::Advance);
}

#[test]
fn retreating_cycle_snaps_back_to_zero() {
    let cfg = cfg();
    let mut state = PulseState::default();
    state.start();
    run_cycle(&mut state, &cfg);
    state.start();
    assert_eq!(state.direction(), Direction::Retreat);

    let (_, completions) = run_cycle(&mut state, &cfg);
    assert_eq!(completions, 1);
    assert_eq!(state.scale(), 0.0);
    assert!(state.is_idle());
}
