//! The end-of-batch report shown to the user.
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::checker::StatusOutcome;

/// Aggregate view of one finished batch: how many distinct URLs were
/// checked and how often each rendered status code was observed across the
/// rows of the table.
pub struct Summary {
    total_checked: usize,
    distribution: Vec<(Option<u16>, usize)>,
}

impl Summary {
    /// Builds the summary from the count of distinct URLs checked and the
    /// outcome recorded on every row of the table. A URL kept on several
    /// rows therefore weighs as many times as it appears.
    #[must_use]
    pub fn new(total_checked: usize, row_outcomes: &[StatusOutcome]) -> Self {
        let mut counts: BTreeMap<Option<u16>, usize> = BTreeMap::new();
        for outcome in row_outcomes {
            *counts.entry(outcome.as_code()).or_insert(0) += 1;
        }

        let mut distribution: Vec<(Option<u16>, usize)> = counts.into_iter().collect();
        distribution.sort_by(|(code_a, count_a), (code_b, count_b)| {
            count_b.cmp(count_a).then_with(|| compare_codes(*code_a, *code_b))
        });

        Self {
            total_checked,
            distribution,
        }
    }

    /// Renders the block printed after the table has been saved.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            String::new(),
            "Link Check Summary:".to_string(),
            format!("Total links checked: {}", self.total_checked),
            String::new(),
            "Status Code Distribution:".to_string(),
        ];

        for (code, count) in &self.distribution {
            let label = code.map_or_else(|| "unknown".to_string(), |code| code.to_string());
            lines.push(format!("  {label:<7} {count}"));
        }

        lines.join("\n")
    }
}

/// Codes sort numerically; rows without a code go last.
fn compare_codes(a: Option<u16>, b: Option<u16>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
