//! # Static Content Registry
//!
//! The fixed roadmap data shown on the page. Everything here is immutable and
//! rendered once at load; order is significant.

use serde::Serialize;

/// One phase of the simulated year, in the order the season loop runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    /// 1-based position in the yearly loop
    pub order: usize,
    pub label: &'static str,
}

/// An architecture layer card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub name: &'static str,
    pub description: &'static str,
}

/// A delivery milestone row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub text: &'static str,
}

const TIMELINE_LABELS: [&str; 11] = [
    "Policy phase",
    "Coach carousel",
    "Roster churn I (graduation, draft, portal)",
    "NIL market opening",
    "Recruiting cycle",
    "Roster churn II (late portal movement)",
    "Development camp",
    "Schedule generation",
    "Season simulation",
    "Postseason tournaments",
    "Persistence and history snapshots",
];

/// Architecture layers, outermost first.
pub const LAYERS: [Layer; 5] = [
    Layer {
        name: "World",
        description: "Conferences, policy rules, realignment, media economics.",
    },
    Layer {
        name: "Program",
        description: "Finances, prestige, facilities, staffing, fan climate.",
    },
    Layer {
        name: "Roster",
        description: "Players, recruits, transfers, NIL and eligibility.",
    },
    Layer {
        name: "Game",
        description: "Possession engine, tactics, clutch logic, variance.",
    },
    Layer {
        name: "Narrative",
        description: "Polls, bracketology, awards, records, legacy.",
    },
];

pub const MILESTONES: [Milestone; 5] = [
    Milestone { text: "M1: Data model + season loop + basic game simulation." },
    Milestone { text: "M2: Recruiting, portal, NIL market, and coach carousel." },
    Milestone { text: "M3: Rankings, bracketology, postseason, and records." },
    Milestone { text: "M4: Long-term macro events and narrative engine." },
    Milestone { text: "M5: Balancing tooling, telemetry dashboards, mod support." },
];

/// The annual timeline with 1-based ordering attached.
pub fn annual_timeline() -> Vec<TimelineStep> {
    TIMELINE_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| TimelineStep { order: i + 1, label: *label })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_order_is_one_based_and_contiguous() {
        let steps = annual_timeline();
        assert_eq!(steps.len(), 11);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.order, i + 1);
        }
        assert_eq!(steps[0].label, "Policy phase");
        assert_eq!(steps[10].label, "Persistence and history snapshots");
    }

    #[test]
    fn test_layer_and_milestone_order() {
        let names: Vec<_> = LAYERS.iter().map(|l| l.name).collect();
        assert_eq!(names, ["World", "Program", "Roster", "Game", "Narrative"]);
        assert!(MILESTONES[0].text.starts_with("M1:"));
        assert!(MILESTONES[4].text.starts_with("M5:"));
    }
}
