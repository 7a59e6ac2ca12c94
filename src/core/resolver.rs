//! Latest-write-wins overlap resolution.
//!
//! Given one authoritative range that is already persisted, every other stored
//! range intersecting it is deleted, truncated or split so that the
//! authoritative range ends up owning its interval exclusively.

use crate::db::store::RangeStore;
use crate::errors::{AppError, AppResult};
use crate::models::Range;

/// How an existing range sits relative to the authoritative one.
///
/// Only ranges that strictly overlap the authoritative range are classified,
/// so exactly one variant applies to each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Existing lies entirely inside the new range.
    Contained,
    /// Existing sticks out on both sides of the new range.
    Contains,
    /// Existing starts before the new range and ends inside it.
    LeftOverhang,
    /// Existing starts inside the new range and ends after it.
    RightOverhang,
}

impl Overlap {
    pub fn classify(existing: &Range, authoritative: &Range) -> Self {
        let (e, n) = (existing, authoritative);

        if e.start() >= n.start() && e.end() <= n.end() {
            Overlap::Contained
        } else if e.start() < n.start() && e.end() > n.end() {
            Overlap::Contains
        } else if e.start() < n.start() {
            Overlap::LeftOverhang
        } else {
            Overlap::RightOverhang
        }
    }
}

/// Writes a resolution pass will perform, grouped by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub deleted: Vec<i64>,
    pub inserted: Vec<Range>,
    pub truncated: Vec<Range>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.inserted.is_empty() && self.truncated.is_empty()
    }
}

/// Work out what has to change around `authoritative`, without writing anything.
pub fn plan(overlapping: Vec<Range>, authoritative: &Range) -> AppResult<Resolution> {
    let mut res = Resolution::default();

    for mut e in overlapping {
        let id = e
            .id()
            .ok_or_else(|| AppError::Other("stored range without id".into()))?;

        let case = Overlap::classify(&e, authoritative);
        log::debug!(
            "entry #{} [{} .. {}) vs [{} .. {}): {:?}",
            id,
            e.start(),
            e.end(),
            authoritative.start(),
            authoritative.end(),
            case
        );

        match case {
            Overlap::Contained => res.deleted.push(id),
            Overlap::Contains => {
                // right part first, it needs the original end
                res.inserted.push(e.remainder(authoritative.end())?);
                e.set_end(authoritative.start())?;
                res.truncated.push(e);
            }
            Overlap::LeftOverhang => {
                e.set_end(authoritative.start())?;
                res.truncated.push(e);
            }
            Overlap::RightOverhang => {
                e.set_start(authoritative.end())?;
                res.truncated.push(e);
            }
        }
    }

    Ok(res)
}

/// Resolve all overlaps against `authoritative`, which must already be stored.
///
/// The authoritative range itself is never modified. Callers are expected to
/// run this inside `RangeStore::atomic` together with the insert that
/// produced `authoritative`.
pub fn resolve<S: RangeStore>(store: &mut S, authoritative: &Range) -> AppResult<Resolution> {
    let id = authoritative
        .id()
        .ok_or_else(|| AppError::Other("authoritative range must be persisted first".into()))?;

    let overlapping =
        store.query_overlapping(id, authoritative.start(), authoritative.end())?;

    debug_assert!(
        pairwise_disjoint(&overlapping),
        "store already held overlapping ranges before resolution"
    );

    let res = plan(overlapping, authoritative)?;

    for id in &res.deleted {
        store.delete(*id)?;
    }
    for r in &res.inserted {
        store.insert(r)?;
    }
    for r in &res.truncated {
        store.update(r)?;
    }

    if !res.is_empty() {
        log::info!(
            "entry #{}: {} deleted, {} split, {} truncated",
            id,
            res.deleted.len(),
            res.inserted.len(),
            res.truncated.len() - res.inserted.len()
        );
    }

    Ok(res)
}

/// True when no two ranges in the slice overlap.
pub fn pairwise_disjoint(ranges: &[Range]) -> bool {
    let mut sorted: Vec<&Range> = ranges.iter().collect();
    sorted.sort_by_key(|r| r.start());
    sorted.windows(2).all(|w| w[0].end() <= w[1].start())
}
