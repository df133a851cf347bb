//! Summary printed after a merge

use std::path::Path;

use console::Style;

use crate::merger::MergeStats;

/// Format a count with thousands separators (`12345` -> `12,345`)
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Headline reporting record count and destination
pub fn summary_line(records: usize, target: &Path, dry_run: bool) -> String {
    if dry_run {
        format!(
            "[DRY RUN] Would write {} records to {}",
            format_count(records),
            target.display()
        )
    } else {
        format!(
            "Wrote {} records to {}",
            format_count(records),
            target.display()
        )
    }
}

pub fn print_summary(stats: &MergeStats, target: &Path, dry_run: bool, detailed: bool) {
    let line = summary_line(stats.pairs, target, dry_run);
    let style = if dry_run {
        Style::new().yellow()
    } else {
        Style::new().green()
    };
    println!("{}", style.apply_to(line));

    if !detailed {
        return;
    }

    let label = Style::new().bold();
    println!(
        "  {} {}",
        label.apply_to("Behaviors:"),
        format_count(stats.behaviors)
    );
    println!(
        "  {} {}",
        label.apply_to("Duplicates dropped:"),
        format_count(stats.duplicate_behaviors)
    );
    println!(
        "  {} {}",
        label.apply_to("Unresolved clusters:"),
        format_count(stats.unresolved_clusters)
    );
    println!(
        "  {} {}",
        label.apply_to("Pairs without evaluations:"),
        format_count(stats.pairs_without_evaluations)
    );
    if stats.orphan_evaluations > 0 {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to("Evaluations for unknown pairs:"),
            format_count(stats.orphan_evaluations)
        );
    }
}
