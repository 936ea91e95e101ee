use chrono::NaiveDate;

use crate::models::{JobApplication, STATUS_ORDER, Status};

pub const EMPTY_TABLE_MESSAGE: &str = "No applications yet. Add one to get started.";
pub const EMPTY_CHART_MESSAGE: &str = "Add jobs to see stats";

/// Summary counters over one list snapshot. Always derived from the exact
/// same list the table was rendered from, filtered or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn count_for(&self, status: Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interview => self.interview,
            Status::Offer => self.offer,
            Status::Rejected => self.rejected,
        }
    }
}

/// Single pass over the list.
pub fn count_statuses(records: &[JobApplication]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: records.len(),
        applied: 0,
        interview: 0,
        offer: 0,
        rejected: 0,
    };
    for record in records {
        match record.status {
            Status::Applied => counts.applied += 1,
            Status::Interview => counts.interview += 1,
            Status::Offer => counts.offer += 1,
            Status::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// One bucket of the status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSegment {
    pub status: Status,
    pub count: usize,
    pub percent: u32,
}

/// Chart input. An empty list gets a neutral placeholder instead of a
/// zero-filled chart, so no percentage is ever computed over zero records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartView {
    Placeholder,
    Segments(Vec<ChartSegment>),
}

pub fn chart_view(records: &[JobApplication]) -> ChartView {
    if records.is_empty() {
        return ChartView::Placeholder;
    }
    let counts = count_statuses(records);
    let segments = STATUS_ORDER
        .iter()
        .map(|&status| {
            let count = counts.count_for(status);
            ChartSegment {
                status,
                count,
                percent: ((count as f64 / counts.total as f64) * 100.0).round() as u32,
            }
        })
        .collect();
    ChartView::Segments(segments)
}

/// Splits `width` cells proportionally across the segments. Leftover cells
/// from integer division go to the largest buckets so the bar always fills
/// exactly `width`.
pub fn segment_widths(segments: &[ChartSegment], width: usize) -> Vec<usize> {
    let total: usize = segments.iter().map(|s| s.count).sum();
    if total == 0 {
        return vec![0; segments.len()];
    }
    let mut widths: Vec<usize> = segments
        .iter()
        .map(|s| s.count * width / total)
        .collect();
    let mut used: usize = widths.iter().sum();
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by(|&a, &b| segments[b].count.cmp(&segments[a].count));
    let mut i = 0;
    while used < width {
        let idx = order[i % order.len()];
        if segments[idx].count > 0 {
            widths[idx] += 1;
            used += 1;
        }
        i += 1;
    }
    widths
}

/// Localized short date, em-dash when absent. An unparsable value is shown
/// raw rather than dropped.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "—".to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Notes cell: truncated free text, em-dash when absent or empty.
pub fn notes_display(notes: Option<&str>, max: usize) -> String {
    match notes {
        Some(n) if !n.trim().is_empty() => truncate(n.trim(), max),
        _ => "—".to_string(),
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Plain-text table, one row per record. Pure: the same list always yields
/// the same text.
pub fn render_table(records: &[JobApplication]) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_TABLE_MESSAGE);
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<20} {:<24} {:<14} {:<10} {:<30}\n",
        "ID", "COMPANY", "ROLE", "APPLIED", "STATUS", "NOTES"
    ));
    out.push_str(&format!("{}\n", "-".repeat(108)));
    for record in records {
        out.push_str(&format!(
            "{:<6} {:<20} {:<24} {:<14} {:<10} {:<30}\n",
            record.id,
            truncate(&record.company, 18),
            truncate(&record.role, 22),
            format_date(&record.date_applied),
            record.status,
            notes_display(record.notes.as_deref(), 28),
        ));
    }
    out
}

pub fn render_stats(counts: &StatusCounts) -> String {
    format!(
        "Total: {}   Interviews: {}   Offers: {}   Rejected: {}\n",
        counts.total, counts.interview, counts.offer, counts.rejected
    )
}

/// Proportional status bar plus legend for plain terminal output.
pub fn render_chart(records: &[JobApplication]) -> String {
    const WIDTH: usize = 40;
    match chart_view(records) {
        ChartView::Placeholder => {
            format!("{}\n{}\n", "░".repeat(WIDTH), EMPTY_CHART_MESSAGE)
        }
        ChartView::Segments(segments) => {
            let widths = segment_widths(&segments, WIDTH);
            let glyphs = ['█', '▓', '▒', '░'];
            let mut out = String::new();
            for (i, w) in widths.iter().enumerate() {
                out.push_str(&glyphs[i].to_string().repeat(*w));
            }
            out.push('\n');
            for (i, segment) in segments.iter().enumerate() {
                out.push_str(&format!(
                    "{} {:<10} {:>3} ({}%)\n",
                    glyphs[i], segment.status, segment.count, segment.percent
                ));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: i64,
        company: &str,
        role: &str,
        status: Status,
        notes: Option<&str>,
    ) -> JobApplication {
        JobApplication {
            id,
            company: company.to_string(),
            role: role.to_string(),
            date_applied: "2026-03-05".to_string(),
            status,
            notes: notes.map(str::to_string),
        }
    }

    fn sample() -> Vec<JobApplication> {
        vec![
            record(1, "Acme", "Engineer", Status::Applied, None),
            record(2, "Globex", "Manager", Status::Offer, Some("phone screen")),
        ]
    }

    #[test]
    fn counts_partition_the_list() {
        let records = vec![
            record(1, "A", "x", Status::Applied, None),
            record(2, "B", "x", Status::Interview, None),
            record(3, "C", "x", Status::Interview, None),
            record(4, "D", "x", Status::Offer, None),
            record(5, "E", "x", Status::Rejected, None),
        ];
        let counts = count_statuses(&records);
        assert_eq!(counts.total, records.len());
        assert_eq!(
            counts.applied + counts.interview + counts.offer + counts.rejected,
            counts.total
        );
        assert_eq!(counts.interview, 2);
    }

    #[test]
    fn counts_match_a_small_sample() {
        let counts = count_statuses(&sample());
        assert_eq!(counts.total, 2);
        assert_eq!(counts.interview, 0);
        assert_eq!(counts.offer, 1);
        assert_eq!(counts.rejected, 0);
    }

    #[test]
    fn counts_agree_with_status_filter() {
        let records = sample();
        for status in STATUS_ORDER {
            let filtered = crate::store::filter(&records, "", Some(status));
            assert_eq!(filtered.len(), count_statuses(&records).count_for(status));
        }
    }

    #[test]
    fn empty_list_gets_the_placeholder_chart() {
        assert_eq!(chart_view(&[]), ChartView::Placeholder);
        let text = render_chart(&[]);
        assert!(text.contains(EMPTY_CHART_MESSAGE));
        assert!(!text.contains('%'));
    }

    #[test]
    fn chart_buckets_are_in_fixed_order() {
        let ChartView::Segments(segments) = chart_view(&sample()) else {
            panic!("expected segments");
        };
        let order: Vec<Status> = segments.iter().map(|s| s.status).collect();
        assert_eq!(order, STATUS_ORDER.to_vec());
        assert_eq!(segments[0].percent, 50);
        assert_eq!(segments[2].percent, 50);
    }

    #[test]
    fn percentages_use_integer_rounding() {
        let records = vec![
            record(1, "A", "x", Status::Applied, None),
            record(2, "B", "x", Status::Applied, None),
            record(3, "C", "x", Status::Offer, None),
        ];
        let ChartView::Segments(segments) = chart_view(&records) else {
            panic!("expected segments");
        };
        // 2/3 and 1/3 round to 67 and 33
        assert_eq!(segments[0].percent, 67);
        assert_eq!(segments[2].percent, 33);
    }

    #[test]
    fn segment_widths_fill_the_bar_exactly() {
        let records = vec![
            record(1, "A", "x", Status::Applied, None),
            record(2, "B", "x", Status::Interview, None),
            record(3, "C", "x", Status::Offer, None),
        ];
        let ChartView::Segments(segments) = chart_view(&records) else {
            panic!("expected segments");
        };
        let widths = segment_widths(&segments, 40);
        assert_eq!(widths.iter().sum::<usize>(), 40);
        // Rejected has no records, so no cells
        assert_eq!(widths[3], 0);
    }

    #[test]
    fn table_shows_placeholders_for_missing_fields() {
        let mut records = sample();
        records[0].date_applied = String::new();
        let table = render_table(&records);
        assert!(table.contains("—"));
        assert!(table.contains("phone screen"));
    }

    #[test]
    fn empty_table_renders_the_empty_state() {
        assert_eq!(render_table(&[]), format!("{}\n", EMPTY_TABLE_MESSAGE));
    }

    #[test]
    fn renderers_are_idempotent() {
        let records = sample();
        assert_eq!(render_table(&records), render_table(&records));
        assert_eq!(render_chart(&records), render_chart(&records));
        assert_eq!(count_statuses(&records), count_statuses(&records));
    }

    #[test]
    fn dates_render_in_short_localized_form() {
        assert_eq!(format_date("2026-03-05"), "Mar 5, 2026");
        assert_eq!(format_date(""), "—");
        assert_eq!(format_date("sometime"), "sometime");
    }

    #[test]
    fn notes_fall_back_to_em_dash() {
        assert_eq!(notes_display(None, 20), "—");
        assert_eq!(notes_display(Some("   "), 20), "—");
        assert_eq!(notes_display(Some("short"), 20), "short");
        let long = "a".repeat(40);
        let shown = notes_display(Some(&long), 20);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 20);
    }
}
