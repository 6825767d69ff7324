//! Templated initiative generation
//!
//! Stand-in for the "generate with AI" action: a real deployment would
//! call a generation service with the benchmark context. The templates
//! cost out at fixed shares of the total budget and pull personnel from
//! overlapping roster slices.

use crate::initiative::{Difficulty, Initiative, InitiativeStatus};
use crate::InitiativeId;

struct Template {
    name: fn(&str) -> String,
    budget_share: f64,
    difficulty: Difficulty,
    roster_range: (usize, usize),
}

const TEMPLATES: [Template; 3] = [
    Template {
        name: |metric| format!("Increase {metric} through targeted campaigns"),
        budget_share: 0.20,
        difficulty: Difficulty::Medium,
        roster_range: (0, 2),
    },
    Template {
        name: |metric| format!("Optimize {metric} with data-driven strategies"),
        budget_share: 0.15,
        difficulty: Difficulty::High,
        roster_range: (1, 3),
    },
    Template {
        name: |metric| format!("Enhance {metric} via customer feedback implementation"),
        budget_share: 0.10,
        difficulty: Difficulty::Low,
        roster_range: (2, 4),
    },
];

pub(crate) fn generated_initiatives(
    metric_name: &str,
    total_budget: f64,
    roster: &[String],
) -> Vec<Initiative> {
    TEMPLATES
        .iter()
        .map(|template| {
            let cost = (total_budget * template.budget_share).round();
            let (start, end) = template.roster_range;
            let personnel = roster
                .get(start.min(roster.len())..end.min(roster.len()))
                .unwrap_or(&[])
                .to_vec();

            Initiative {
                id: InitiativeId::new(),
                name: (template.name)(metric_name),
                cost,
                budget_percent: Initiative::derive_budget_percent(cost, total_budget),
                difficulty: template.difficulty,
                personnel,
                status: InitiativeStatus::Pending,
            }
        })
        .collect()
}
