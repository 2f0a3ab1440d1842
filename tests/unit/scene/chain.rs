use super::*;

fn cfg_with_nodes(nodes: usize) -> StageConfig {
    StageConfig {
        nodes,
        ..StageConfig::default()
    }
}

/// Start the active node and tick until its cycle completes.
fn run_full_cycle(chain: &mut Chain, cfg: &StageConfig) {
    assert_eq!(chain.start_updating(), StartOutcome::Started);
    for _ in 0..1000 {
        if chain.update(cfg) == UpdateOutcome::Completed {
            return;
        }
    }
    panic!("cycle did not complete");
}

#[test]
fn rejects_zero_nodes() {
    let cfg = cfg_with_nodes(0);
    assert!(Chain::new(&cfg).is_err());
}

#[test]
fn starts_at_head_moving_forward() {
    let cfg = cfg_with_nodes(5);
    let chain = Chain::new(&cfg).unwrap();
    assert_eq!(chain.len(), 5);
    assert_eq!(chain.current_index(), 0);
    assert_eq!(chain.traversal(), Traversal::Forward);
    assert!(chain.is_idle());
}

#[test]
fn start_mid_cycle_is_ignored() {
    let cfg = cfg_with_nodes(3);
    let mut chain = Chain::new(&cfg).unwrap();
    assert_eq!(chain.start_updating(), StartOutcome::Started);
    chain.update(&cfg);
    assert_eq!(chain.start_updating(), StartOutcome::Ignored);
}

#[test]
fn forward_boundary_stays_and_flips() {
    let cfg = cfg_with_nodes(2);
    let mut chain = Chain::new(&cfg).unwrap();
    run_full_cycle(&mut chain, &cfg); // node 0 -> cursor 1
    assert_eq!(chain.current_index(), 1);
    assert_eq!(chain.traversal(), Traversal::Forward);

    run_full_cycle(&mut chain, &cfg); // node 1: boundary
    assert_eq!(chain.current_index(), 1);
    assert_eq!(chain.traversal(), Traversal::Backward);
}

#[test]
fn backward_boundary_stays_and_flips() {
    let cfg = cfg_with_nodes(2);
    let mut chain = Chain::new(&cfg).unwrap();
    for _ in 0..3 {
        run_full_cycle(&mut chain, &cfg);
    }
    // Cycles so far: 0, 1 (flip), 1; cursor is back at the head.
    assert_eq!(chain.current_index(), 0);
    assert_eq!(chain.traversal(), Traversal::Backward);

    run_full_cycle(&mut chain, &cfg); // node 0: boundary again
    assert_eq!(chain.current_index(), 0);
    assert_eq!(chain.traversal(), Traversal::Forward);
}

#[test]
fn five_node_traversal_flips_only_after_the_tail() {
    let cfg = cfg_with_nodes(5);
    let mut chain = Chain::new(&cfg).unwrap();

    let mut visited = Vec::new();
    for _ in 0..6 {
        visited.push(chain.current_index());
        run_full_cycle(&mut chain, &cfg);
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 4, 4]);
    assert_eq!(chain.current_index(), 3);
    assert_eq!(chain.traversal(), Traversal::Backward);
}

#[test]
fn single_node_chain_flips_every_cycle() {
    let cfg = cfg_with_nodes(1);
    let mut chain = Chain::new(&cfg).unwrap();
    run_full_cycle(&mut chain, &cfg);
    assert_eq!(chain.current_index(), 0);
    assert_eq!(chain.traversal(), Traversal::Backward);
    run_full_cycle(&mut chain, &cfg);
    assert_eq!(chain.current_index(), 0);
    assert_eq!(chain.traversal(), Traversal::Forward);
}
