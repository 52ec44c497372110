//! Text formatting for rounds and reports

use courtmix_core::{FairnessReport, Round, Side};

/// Names on a side joined with " & "
pub fn format_side(side: &Side) -> String {
    side.players()
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// One line per court, e.g. "Court 1 (2v2): Ann & Ben  vs  Cat & Dov"
pub fn format_round(round: &Round) -> String {
    round
        .courts()
        .iter()
        .enumerate()
        .map(|(i, court)| {
            format!(
                "Court {} ({}): {}  vs  {}",
                i + 1,
                court.label(),
                format_side(&court.side1),
                format_side(&court.side2)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line fairness summary
pub fn format_report(report: &FairnessReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Fairness after {} rounds ===\n", report.rounds_played));
    out.push_str(&format!(
        "{:<16} {:>7} {:>11} {:>9} {:>10}\n",
        "Player", "Singles", "Last single", "Partners", "Opponents"
    ));
    for line in &report.players {
        let last = line
            .last_single
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<16} {:>7} {:>11} {:>9} {:>10}\n",
            line.name, line.singles, last, line.partners, line.opponents
        ));
    }
    out.push_str(&format!("Singles spread:          {}\n", report.singles_spread));
    out.push_str(&format!(
        "Partner pairs:           {} distinct, {} repeated (max {})\n",
        report.distinct_partner_pairs, report.repeated_partner_pairs, report.max_partner_count
    ));
    out.push_str(&format!(
        "Opponent pairs repeated: {} (max {})",
        report.repeated_opponent_pairs, report.max_opponent_count
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtmix_core::{MatchHistory, Participant};

    #[test]
    fn test_format_round() {
        let p = |id: &str, name: &str| Participant::new(id, name);
        let round = Round::from_groups([
            vec![p("a", "Ann"), p("b", "Ben")],
            vec![p("c", "Cat")],
            vec![p("d", "Dov")],
            vec![p("e", "Eve")],
        ])
        .unwrap();
        assert_eq!(
            format_round(&round),
            "Court 1 (2v1): Ann & Ben  vs  Cat\nCourt 2 (1v1): Dov  vs  Eve"
        );
    }

    #[test]
    fn test_format_report_lists_players() {
        let roster = vec![Participant::new("a", "Ann"), Participant::new("b", "Ben")];
        let report = FairnessReport::from_history(&MatchHistory::new(), &roster);
        let text = format_report(&report);
        assert!(text.contains("after 0 rounds"));
        assert!(text.contains("Ann"));
        assert!(text.contains("Ben"));
    }
}
