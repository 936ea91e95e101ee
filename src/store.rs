use crate::models::{JobApplication, Status};

/// The most recently fetched list of applications. Single source of truth
/// for every view until the next fetch; always replaced wholesale, never
/// patched field-by-field.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<JobApplication>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Swaps in a fresh server snapshot. Server order is kept as-is.
    pub fn replace(&mut self, records: Vec<JobApplication>) {
        self.records = records;
    }

    pub fn records(&self) -> &[JobApplication] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Current search text and status selector. Transient view state; cleared
/// after every mutation reload.
#[derive(Debug, Clone, Default)]
pub struct ActiveFilter {
    pub search: String,
    pub status: Option<Status>,
}

impl ActiveFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status.is_some()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.status = None;
    }
}

/// A record is kept when the lowercased search text is a substring of its
/// company or role (empty search matches all) and the status selector
/// matches its status (`None` means all). Input order is preserved.
pub fn filter(
    records: &[JobApplication],
    search: &str,
    status: Option<Status>,
) -> Vec<JobApplication> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_search = needle.is_empty()
                || record.company.to_lowercase().contains(&needle)
                || record.role.to_lowercase().contains(&needle);
            let matches_status = status.is_none_or(|s| record.status == s);
            matches_search && matches_status
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, company: &str, role: &str, status: Status) -> JobApplication {
        JobApplication {
            id,
            company: company.to_string(),
            role: role.to_string(),
            date_applied: "2026-01-15".to_string(),
            status,
            notes: None,
        }
    }

    fn sample() -> Vec<JobApplication> {
        vec![
            record(1, "Acme", "Engineer", Status::Applied),
            record(2, "Globex", "Manager", Status::Offer),
            record(3, "Initech", "Engineer", Status::Interview),
            record(4, "Umbrella", "Analyst", Status::Rejected),
        ]
    }

    #[test]
    fn no_op_filter_is_identity() {
        let records = sample();
        let filtered = filter(&records, "", None);
        assert_eq!(filtered.len(), records.len());
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_company_and_role() {
        let records = sample();
        let by_company = filter(&records, "ACME", None);
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].id, 1);

        let by_role = filter(&records, "engineer", None);
        let ids: Vec<i64> = by_role.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn every_search_hit_contains_the_term() {
        let records = sample();
        for hit in filter(&records, "en", None) {
            let company = hit.company.to_lowercase();
            let role = hit.role.to_lowercase();
            assert!(company.contains("en") || role.contains("en"));
        }
    }

    #[test]
    fn status_selector_keeps_only_that_status() {
        let records = sample();
        let offers = filter(&records, "", Some(Status::Offer));
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].id, 2);
        assert!(offers.iter().all(|r| r.status == Status::Offer));
    }

    #[test]
    fn search_and_status_are_anded() {
        let records = sample();
        let both = filter(&records, "engineer", Some(Status::Interview));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, 3);

        let none = filter(&records, "globex", Some(Status::Rejected));
        assert!(none.is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let mut records = sample();
        records.reverse();
        let ids: Vec<i64> = filter(&records, "", None).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn replace_swaps_the_whole_snapshot() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        store.replace(sample());
        assert_eq!(store.len(), 4);
        store.replace(vec![record(9, "Hooli", "Designer", Status::Applied)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id, 9);
    }
}
