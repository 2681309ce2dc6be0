use gamesearch::{
    config::DEFAULT_TRANSPOSITION_CAPACITY, HeuristicOrder, MemorySavingMode, SearchConfig,
};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = SearchConfig::default()
        .with_depth_limit(12)
        .with_transposition_capacity(4096)
        .with_heuristic_order(HeuristicOrder::LowerIsBetter)
        .with_memory_saving_mode(MemorySavingMode::Recompute);

    // Verify each setting was applied correctly
    assert_eq!(config.depth_limit, Some(12));
    assert_eq!(config.transposition_capacity, 4096);
    assert_eq!(config.heuristic_order, HeuristicOrder::LowerIsBetter);
    assert_eq!(config.memory_saving_mode, MemorySavingMode::Recompute);
}

#[test]
fn test_config_default_values() {
    // Test that default values are set correctly
    let config = SearchConfig::default();

    assert_eq!(config.depth_limit, None);
    assert_eq!(config.transposition_capacity, DEFAULT_TRANSPOSITION_CAPACITY);
    assert_eq!(config.heuristic_order, HeuristicOrder::HigherIsBetter);
    assert_eq!(config.memory_saving_mode, MemorySavingMode::FullCopy);
    assert_eq!(HeuristicOrder::default(), HeuristicOrder::HigherIsBetter);
    assert_eq!(MemorySavingMode::default(), MemorySavingMode::FullCopy);
}
