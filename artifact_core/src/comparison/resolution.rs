//! Comparison resolution - Aggregating and scoring both builds

use super::{Build, Comparison, ComparisonInput, ComparisonResult, Winner};
use crate::damage::score;
use crate::stat_block::StatBlock;
use crate::types::Stats;

/// Score two builds and pick the winner.
///
/// Swapping the A and B arguments swaps the verdict; a tie stays a tie.
pub fn compare(
    total_a: &Stats,
    weights_a: &Stats,
    total_b: &Stats,
    weights_b: &Stats,
) -> Comparison {
    let a = score(total_a, weights_a);
    let b = score(total_b, weights_b);
    Comparison {
        a,
        b,
        winner: Winner::from_scores(a.score, b.score),
    }
}

/// Run the whole pipeline for both builds.
///
/// Each build is aggregated on its own (shared leader, siege and rune
/// inputs, its own artifact flats) and then scored with its own weights.
/// Returns `None` while no base stats are available.
pub fn evaluate(input: &ComparisonInput) -> Option<ComparisonResult> {
    let base = input.base?;

    let block_for = |build: &Build| {
        StatBlock::for_build(
            &base,
            &input.leader,
            input.siege_active,
            input.flat_user_bonus,
            build.flat_equipment_bonus,
        )
    };
    let block_a = block_for(&input.build_a);
    let block_b = block_for(&input.build_b);

    let total_a = block_a.totals();
    let total_b = block_b.totals();
    let comparison = compare(&total_a, &input.build_a.weights, &total_b, &input.build_b.weights);

    tracing::debug!(
        score_a = comparison.a.score,
        score_b = comparison.b.score,
        winner = comparison.winner.symbol(),
        "evaluated artifact comparison"
    );

    Some(ComparisonResult {
        total_a,
        total_b,
        score_a: comparison.a.score,
        score_b: comparison.b.score,
        winner: comparison.winner,
        comparison,
        block_a,
        block_b,
    })
}
