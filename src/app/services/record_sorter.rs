//! Sorting and VIP filtering for admission records
//!
//! Two orderings are supported: alphabetical by guest name, and seating
//! order (row, then numeric seat). Both are stable, so re-sorting an
//! already sorted list is a no-op, and seats that fail numeric parsing keep
//! their relative order within a row.

use std::cmp::Ordering;

use crate::app::models::{AdmissionRecord, SortOrder};

/// Sort records in place by the requested order
///
/// The seat ordering is not total when numeric and non-numeric seats mix
/// within one row: non-numeric seats compare equal to everything, so their
/// neighbors' relative order is whatever the stable sort happens to keep.
/// This matches the platform's comparator, which downstream tooling relies
/// on; do not tighten it into a total order.
pub fn sort_records(records: &mut [AdmissionRecord], order: SortOrder) {
    match order {
        SortOrder::Name => records.sort_by(compare_by_name),
        SortOrder::Seat => records.sort_by(compare_by_seat),
    }
}

/// Return a sorted copy, leaving the input untouched
///
/// Exports work on copies so the displayed table is never mutated.
pub fn sorted_copy(records: &[AdmissionRecord], order: SortOrder) -> Vec<AdmissionRecord> {
    let mut copy = records.to_vec();
    sort_records(&mut copy, order);
    copy
}

/// The VIP subset of `records`, preserving their current order
pub fn vip_subset(records: &[AdmissionRecord]) -> Vec<AdmissionRecord> {
    records.iter().filter(|r| r.is_vip).cloned().collect()
}

/// Case-insensitive alphabetical comparison on guest name
fn compare_by_name(a: &AdmissionRecord, b: &AdmissionRecord) -> Ordering {
    compare_text(&a.name, &b.name)
}

/// Seating comparison: row first, numeric seat as tie-break
///
/// Seats without a leading number compare equal, so the stable sort leaves
/// their relative order untouched.
fn compare_by_seat(a: &AdmissionRecord, b: &AdmissionRecord) -> Ordering {
    compare_text(&a.row, &b.row).then_with(|| {
        match (parse_seat_number(&a.seat), parse_seat_number(&b.seat)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        }
    })
}

/// Case-insensitive text comparison approximating locale collation
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Parse the leading integer of a seat label, e.g. "12" or "12A"
pub fn parse_seat_number(seat: &str) -> Option<i64> {
    let trimmed = seat.trim();
    let (negative, digits_part) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let digits: String = digits_part
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().map(|n| if negative { -n } else { n })
}
