//! Non-overlapping segment selection.
//!
//! Classic weighted interval scheduling with a cardinality bound: pick up
//! to K pairwise non-overlapping candidates maximizing total weight, via
//! `dp[k][i]` = best weight using at most `k` segments among the first
//! `i + 1` candidates (sorted by end position). A parallel boolean table
//! records the take/skip choice for backtracking.

use clipkit_models::RecommendationMode;

use super::candidates::Candidate;

/// A candidate carrying both its original score and its DP weight.
struct Weighted {
    start_bucket: usize,
    end_bucket: usize,
    score: f64,
    weight: f64,
}

/// Select up to `count` non-overlapping candidates.
///
/// In `Remove` mode, weights are inverted (`max_score - score`) so the
/// maximization picks the lowest-energy segments; returned candidates
/// always carry their original score. Results come back sorted by start
/// position.
pub(crate) fn select_non_overlapping(
    candidates: &[Candidate],
    mode: RecommendationMode,
    count: usize,
) -> Vec<Candidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let max_score = candidates
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut sorted: Vec<Weighted> = candidates
        .iter()
        .map(|c| Weighted {
            start_bucket: c.start_bucket,
            end_bucket: c.end_bucket,
            score: c.score,
            weight: match mode {
                RecommendationMode::Remove => max_score - c.score,
                RecommendationMode::Highlight => c.score,
            },
        })
        .collect();
    sorted.sort_by(|a, b| a.end_bucket.cmp(&b.end_bucket));

    let ends: Vec<usize> = sorted.iter().map(|c| c.end_bucket).collect();

    // prev_non_overlap[i]: latest earlier candidate whose end does not
    // cross candidate i's start, found by binary search over the sorted
    // ends.
    let prev_non_overlap: Vec<Option<usize>> = sorted
        .iter()
        .enumerate()
        .map(|(i, c)| {
            ends[..i]
                .partition_point(|&end| end <= c.start_bucket)
                .checked_sub(1)
        })
        .collect();

    let n = sorted.len();
    let k_max = count.min(n).max(1);
    let mut dp = vec![vec![0.0f64; n]; k_max + 1];
    let mut choose = vec![vec![false; n]; k_max + 1];

    for i in 0..n {
        let take = sorted[i].weight;
        let skip = if i > 0 { dp[1][i - 1] } else { 0.0 };
        // Ties prefer taking: packs selections toward earlier candidates
        // and keeps output deterministic.
        if take >= skip {
            dp[1][i] = take;
            choose[1][i] = true;
        } else {
            dp[1][i] = skip;
        }
    }

    for k in 2..=k_max {
        for i in 0..n {
            let take =
                sorted[i].weight + prev_non_overlap[i].map_or(0.0, |prev| dp[k - 1][prev]);
            let skip = if i > 0 { dp[k][i - 1] } else { 0.0 };
            if take >= skip {
                dp[k][i] = take;
                choose[k][i] = true;
            } else {
                dp[k][i] = skip;
            }
        }
    }

    let mut best_k = 1;
    let mut best_weight = dp[1][n - 1];
    for (k, row) in dp.iter().enumerate().skip(2) {
        if row[n - 1] > best_weight {
            best_weight = row[n - 1];
            best_k = k;
        }
    }

    let mut chosen = Vec::with_capacity(best_k);
    let mut k = best_k;
    let mut index = Some(n - 1);
    while k > 0 {
        let Some(i) = index else { break };
        if choose[k][i] {
            chosen.push(i);
            index = prev_non_overlap[i];
            k -= 1;
        } else {
            index = i.checked_sub(1);
        }
    }

    let mut selected: Vec<Candidate> = chosen
        .into_iter()
        .map(|i| Candidate {
            start_bucket: sorted[i].start_bucket,
            end_bucket: sorted[i].end_bucket,
            score: sorted[i].score,
        })
        .collect();
    selected.sort_by(|a, b| a.start_bucket.cmp(&b.start_bucket));
    selected
}
