mod common;
use common::{assert_disjoint, bounds, day, dt, range, seed, triple};

use timelayer::core::resolver::{Overlap, plan, resolve};
use timelayer::db::MemoryStore;
use timelayer::db::store::RangeStore;

/// Insert `n` and resolve, the way the entry services do it.
fn place(store: &mut MemoryStore, start: &str, end: &str, project: &str) -> timelayer::models::Range {
    let n = seed(store, range(start, end, project));
    resolve(store, &n).expect("resolve");
    n
}

#[test]
fn classify_covers_the_four_cases() {
    let n = range("2025-03-10 10:00", "2025-03-10 12:00", "N");

    let inside = range("2025-03-10 10:30", "2025-03-10 11:00", "E");
    let same = range("2025-03-10 10:00", "2025-03-10 12:00", "E");
    let around = range("2025-03-10 09:00", "2025-03-10 13:00", "E");
    let left = range("2025-03-10 09:00", "2025-03-10 11:00", "E");
    let left_to_end = range("2025-03-10 09:00", "2025-03-10 12:00", "E");
    let right = range("2025-03-10 11:00", "2025-03-10 13:00", "E");
    let right_from_start = range("2025-03-10 10:00", "2025-03-10 13:00", "E");

    assert_eq!(Overlap::classify(&inside, &n), Overlap::Contained);
    assert_eq!(Overlap::classify(&same, &n), Overlap::Contained);
    assert_eq!(Overlap::classify(&around, &n), Overlap::Contains);
    assert_eq!(Overlap::classify(&left, &n), Overlap::LeftOverhang);
    assert_eq!(Overlap::classify(&left_to_end, &n), Overlap::LeftOverhang);
    assert_eq!(Overlap::classify(&right, &n), Overlap::RightOverhang);
    assert_eq!(Overlap::classify(&right_from_start, &n), Overlap::RightOverhang);
}

#[test]
fn split_scenario_carves_a_hole() {
    let mut store = MemoryStore::new();
    let a = seed(&mut store, range("2025-03-10 09:00", "2025-03-10 17:00", "A"));

    let b = place(&mut store, "2025-03-10 12:00", "2025-03-10 13:00", "B");

    let all = store.all();
    assert_eq!(
        bounds(&all),
        vec![
            triple("2025-03-10 09:00", "2025-03-10 12:00", "A"),
            triple("2025-03-10 12:00", "2025-03-10 13:00", "B"),
            triple("2025-03-10 13:00", "2025-03-10 17:00", "A"),
        ]
    );

    // left part keeps the original identity, right part is new
    let left = store.get(a.id().unwrap()).unwrap().unwrap();
    assert_eq!(left.end(), dt("2025-03-10 12:00"));
    let right = all
        .iter()
        .find(|r| r.start() == dt("2025-03-10 13:00"))
        .unwrap();
    assert_ne!(right.id(), a.id());
    assert_ne!(right.id(), b.id());

    assert_eq!(store.get(b.id().unwrap()).unwrap().unwrap(), b);
}

#[test]
fn left_overhang_is_truncated() {
    let mut store = MemoryStore::new();
    let e = seed(&mut store, range("2025-03-10 09:00", "2025-03-10 12:00", "A"));

    let n = place(&mut store, "2025-03-10 11:00", "2025-03-10 13:00", "B");

    let e = store.get(e.id().unwrap()).unwrap().unwrap();
    assert_eq!(e.start(), dt("2025-03-10 09:00"));
    assert_eq!(e.end(), dt("2025-03-10 11:00"));
    assert_eq!(store.get(n.id().unwrap()).unwrap().unwrap(), n);
    assert_eq!(store.len(), 2);
}

#[test]
fn right_overhang_moves_start() {
    let mut store = MemoryStore::new();
    let e = seed(&mut store, range("2025-03-10 22:00", "2025-03-10 23:30", "A"));

    place(&mut store, "2025-03-10 21:00", "2025-03-10 23:00", "B");

    let e = store.get(e.id().unwrap()).unwrap().unwrap();
    assert_eq!(e.start(), dt("2025-03-10 23:00"));
    assert_eq!(e.end(), dt("2025-03-10 23:30"));
    assert_eq!(e.day_key(), day("2025-03-10"));
}

#[test]
fn left_truncation_across_midnight_keeps_day_key() {
    let mut store = MemoryStore::new();
    let e = seed(&mut store, range("2025-03-10 23:00", "2025-03-11 02:00", "A"));

    place(&mut store, "2025-03-11 01:00", "2025-03-11 03:00", "B");

    let e = store.get(e.id().unwrap()).unwrap().unwrap();
    assert_eq!(e.start(), dt("2025-03-10 23:00"));
    assert_eq!(e.end(), dt("2025-03-11 01:00"));
    assert_eq!(e.day_key(), day("2025-03-10"));
}

#[test]
fn right_truncation_across_midnight_moves_day_key() {
    let mut store = MemoryStore::new();
    let e = seed(&mut store, range("2025-03-10 23:00", "2025-03-11 02:00", "A"));

    place(&mut store, "2025-03-10 22:00", "2025-03-11 00:30", "B");

    let e = store.get(e.id().unwrap()).unwrap().unwrap();
    assert_eq!(e.start(), dt("2025-03-11 00:30"));
    assert_eq!(e.day_key(), day("2025-03-11"));

    // the day listing follows the new key
    let next_day = store.query_by_day(day("2025-03-11")).unwrap();
    assert_eq!(next_day.len(), 1);
    assert_eq!(next_day[0].id(), e.id());
}

#[test]
fn split_remainder_past_midnight_gets_its_own_day_key() {
    let mut store = MemoryStore::new();
    let e = seed(&mut store, range("2025-03-10 20:00", "2025-03-11 04:00", "A"));

    place(&mut store, "2025-03-10 23:00", "2025-03-11 01:00", "B");

    let left = store.get(e.id().unwrap()).unwrap().unwrap();
    assert_eq!(left.end(), dt("2025-03-10 23:00"));
    assert_eq!(left.day_key(), day("2025-03-10"));

    let next_day = store.query_by_day(day("2025-03-11")).unwrap();
    assert_eq!(
        bounds(&next_day),
        vec![triple("2025-03-11 01:00", "2025-03-11 04:00", "A")]
    );
}

#[test]
fn identical_bounds_leave_only_the_new_range() {
    let mut store = MemoryStore::new();
    let old = seed(&mut store, range("2025-03-10 09:00", "2025-03-10 10:00", "A"));

    let new = place(&mut store, "2025-03-10 09:00", "2025-03-10 10:00", "B");

    let all = store.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), new.id());
    assert_ne!(all[0].id(), old.id());
    assert_eq!(all[0].project(), "B");
}

#[test]
fn touching_neighbours_are_left_alone() {
    let mut store = MemoryStore::new();
    let before = seed(&mut store, range("2025-03-10 09:00", "2025-03-10 10:00", "A"));
    let after = seed(&mut store, range("2025-03-10 11:00", "2025-03-10 12:00", "C"));

    let n = seed(&mut store, range("2025-03-10 10:00", "2025-03-10 11:00", "B"));
    let res = resolve(&mut store, &n).unwrap();

    assert!(res.is_empty());
    assert_eq!(store.get(before.id().unwrap()).unwrap().unwrap(), before);
    assert_eq!(store.get(after.id().unwrap()).unwrap().unwrap(), after);
}

#[test]
fn one_pass_handles_several_neighbours() {
    let mut store = MemoryStore::new();
    seed(&mut store, range("2025-03-10 08:00", "2025-03-10 09:30", "L"));
    seed(&mut store, range("2025-03-10 09:30", "2025-03-10 10:00", "M1"));
    seed(&mut store, range("2025-03-10 10:00", "2025-03-10 10:30", "M2"));
    seed(&mut store, range("2025-03-10 10:30", "2025-03-10 12:00", "R"));
    seed(&mut store, range("2025-03-10 12:00", "2025-03-10 13:00", "X"));

    let n = seed(&mut store, range("2025-03-10 09:00", "2025-03-10 11:00", "N"));
    let res = resolve(&mut store, &n).unwrap();

    assert_eq!(res.deleted.len(), 2);
    assert_eq!(res.inserted.len(), 0);
    assert_eq!(res.truncated.len(), 2);

    let all = store.all();
    assert_disjoint(&all);
    assert_eq!(
        bounds(&all),
        vec![
            triple("2025-03-10 08:00", "2025-03-10 09:00", "L"),
            triple("2025-03-10 09:00", "2025-03-10 11:00", "N"),
            triple("2025-03-10 11:00", "2025-03-10 12:00", "R"),
            triple("2025-03-10 12:00", "2025-03-10 13:00", "X"),
        ]
    );
}

#[test]
fn plan_does_not_touch_the_store() {
    let mut store = MemoryStore::new();
    let e = seed(&mut store, range("2025-03-10 09:00", "2025-03-10 17:00", "A"));
    let n = range("2025-03-10 12:00", "2025-03-10 13:00", "B");

    let res = plan(vec![e.clone()], &n).unwrap();

    assert_eq!(res.inserted.len(), 1);
    assert_eq!(res.truncated.len(), 1);
    assert_eq!(res.truncated[0].id(), e.id());
    assert_eq!(res.truncated[0].end(), dt("2025-03-10 12:00"));
    assert_eq!(store.get(e.id().unwrap()).unwrap().unwrap(), e);
}

#[test]
fn resolve_requires_a_persisted_range() {
    let mut store = MemoryStore::new();
    let n = range("2025-03-10 09:00", "2025-03-10 10:00", "A");
    assert!(resolve(&mut store, &n).is_err());
}
