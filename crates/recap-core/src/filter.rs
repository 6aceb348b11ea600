//! Record filters.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use recap_commit::{CommitRecord, CommitType};
use tracing::debug;

/// Removes every record whose type is in `types`.
///
/// Order of the remaining records is preserved. An empty set leaves the records untouched.
pub fn exclude_types(records: &mut Vec<CommitRecord>, types: &HashSet<CommitType>) {
    if types.is_empty() {
        return;
    }

    let before = records.len();
    records.retain(|record| !types.contains(&record.commit_type()));
    debug!(
        removed = before - records.len(),
        remaining = records.len(),
        "excluded commit types"
    );
}

/// Removes every record older than `days` days, counted back from the current time in `tz`.
///
/// A record exactly at the cutoff is kept. Empty input is a no-op.
pub fn exclude_older_than(records: &mut Vec<CommitRecord>, days: u32, tz: &FixedOffset) {
    if records.is_empty() {
        return;
    }
    exclude_older_than_at(records, days, Utc::now().with_timezone(tz));
}

/// Same as [`exclude_older_than`], with an explicit reference time.
pub fn exclude_older_than_at(
    records: &mut Vec<CommitRecord>,
    days: u32,
    now: DateTime<FixedOffset>,
) {
    if records.is_empty() {
        return;
    }

    // Out of chrono's range: nothing can be older.
    let Some(cutoff) = now.checked_sub_signed(TimeDelta::days(i64::from(days))) else {
        return;
    };

    let before = records.len();
    records.retain(|record| record.timestamp() >= cutoff);
    debug!(
        %cutoff,
        removed = before - records.len(),
        remaining = records.len(),
        "excluded old commits"
    );
}
