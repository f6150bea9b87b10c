//! Tests for progress tracking across rounds and restarts

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::executor::StuckReason;
    use tilecollapse::io::progress::ProgressManager;

    // Tests that the bar position follows the resolved cell count
    // Verified by advancing by the round number
    #[test]
    fn test_progress_tracks_resolved_cells() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(100);
        assert_eq!(pm.position(), 0);

        pm.update_round(1, 3, 17);
        assert_eq!(pm.position(), 17);
        pm.finish();
    }

    // Tests that restarts are counted and the position drops to the new seed
    // Verified by not resetting the counter on initialize
    #[test]
    fn test_restarts_counted_and_reset() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(25);
        pm.update_round(1, 5, 20);
        pm.restart(2, StuckReason::Contradiction, 1);
        pm.restart(3, StuckReason::RoundBudget, 1);

        assert_eq!(pm.restarts(), 2);
        assert_eq!(pm.position(), 1);

        pm.initialize(25);
        assert_eq!(pm.restarts(), 0);
    }

    // Tests that the default manager starts with no restarts
    // Verified by counting the first attempt as a restart
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();
        assert_eq!(pm.restarts(), 0);
        pm.finish();
    }
}
