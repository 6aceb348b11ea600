//! Record ordering.

use std::cmp::Ordering;

use recap_commit::CommitRecord;
use recap_config::SortOrder;

/// Text an absent scope sorts as.
const ABSENT_SCOPE_KEY: &str = "None";

/// Sorts records by type name, then by scope.
///
/// Both keys compare as strings; an absent scope compares as `"None"`. The sort is stable.
pub fn sort(records: &mut [CommitRecord]) {
    sort_by_order(records, SortOrder::Lexicographic);
}

/// Sorts records by type using the given order, then by scope.
pub fn sort_by_order(records: &mut [CommitRecord], order: SortOrder) {
    records.sort_by(|a, b| compare_types(a, b, order).then_with(|| compare_scopes(a, b)));
}

fn compare_types(a: &CommitRecord, b: &CommitRecord, order: SortOrder) -> Ordering {
    let (a, b) = (a.commit_type(), b.commit_type());
    match order {
        SortOrder::Lexicographic => a.as_str().cmp(b.as_str()),
        SortOrder::Priority => a.priority().cmp(&b.priority()),
    }
}

fn compare_scopes(a: &CommitRecord, b: &CommitRecord) -> Ordering {
    scope_key(a).cmp(scope_key(b))
}

fn scope_key(record: &CommitRecord) -> &str {
    record.scope().unwrap_or(ABSENT_SCOPE_KEY)
}
