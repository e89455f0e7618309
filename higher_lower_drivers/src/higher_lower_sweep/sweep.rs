use std::time::Instant;

use higher_lower::simulation::simulate;
use higher_lower::{expected_cache_len, SimulationSettings, Solver};
use higher_lower_drivers::ConfigSweep;

/// Solves every deck size of the sweep and prints one row per size.
pub fn print_sweep(config: &ConfigSweep) -> anyhow::Result<()> {
    let mut solver = Solver::new();

    println!(
        "{:>6} {:>24} {:>10} {:>10} {:>10}",
        "cards", "p_all", "cache", "expected", "micros"
    );
    for n in config.deck_sizes() {
        if config.reset_cache_between_runs {
            solver.clear();
        }
        let start = Instant::now();
        let p = solver.p_all(n)?;
        let elapsed = start.elapsed();

        println!(
            "{:>6} {:>24.17e} {:>10} {:>10} {:>10}",
            n,
            p,
            solver.cache_len(),
            expected_cache_len(n),
            elapsed.as_micros()
        );
    }
    println!();

    Ok(())
}

/// Plays random decks and compares the win rate with the exact probability.
pub fn print_simulation(settings: &SimulationSettings) -> anyhow::Result<()> {
    let exact = Solver::new().p_all(settings.number_of_cards)?;
    let start = Instant::now();
    let summary = simulate(settings)?;

    println!(
        "Simulated {} games with {} cards (ties guess {:?}).",
        summary.games, settings.number_of_cards, settings.tie_break
    );
    println!(
        "Won: {}. Rate: {:.6}. Exact: {:.6}. Took {:.2?}.",
        summary.wins,
        summary.rate(),
        exact,
        start.elapsed()
    );

    Ok(())
}
