use lazy_stream::{
    append, concat, cons, count, drop_while, filter, flat_map, fold, from_slice, integers_from,
    interleave, last, map, nth, reduce, repeat, scan, take, take_while, to_vec, zip, Link,
};
use std::cell::Cell;
use std::rc::Rc;

fn one_to_five() -> Link<i32> {
    from_slice(&[1, 2, 3, 4, 5])
}

/// A stream of `0..len` that counts how many of its promises have run.
fn counting(len: u32, forced: &Rc<Cell<u32>>) -> Link<u32> {
    fn node(i: u32, len: u32, forced: Rc<Cell<u32>>) -> Link<u32> {
        if i == len {
            return None;
        }
        Some(cons(i, move || {
            forced.set(forced.get() + 1);
            node(i + 1, len, forced)
        }))
    }
    node(0, len, Rc::clone(forced))
}

#[test]
fn test_map_preserves_length_and_order() {
    let tripled = map(one_to_five(), |x| 3 * x);
    assert_eq!(to_vec(tripled).unwrap(), vec![3, 6, 9, 12, 15]);
}

#[test]
fn test_map_of_end_is_end() {
    let empty: Link<i32> = None;
    assert!(map(empty, |x| x + 1).is_none());
}

#[test]
fn test_map_changes_type() {
    let words = map(one_to_five(), |x| ".".repeat(*x as usize));
    assert_eq!(
        to_vec(take(words, 3)).unwrap(),
        vec![".".to_string(), "..".to_string(), "...".to_string()]
    );
}

#[test]
fn test_filter_odd_multiples_of_three() {
    let tripled = map(one_to_five(), |x| 3 * x);
    let odd = filter(tripled, |x| x % 2 == 1).unwrap();
    assert_eq!(to_vec(odd).unwrap(), vec![3, 9, 15]);
}

#[test]
fn test_filter_nothing_matches() {
    let out = filter(one_to_five(), |x| *x > 100).unwrap();
    assert!(out.is_none());
}

#[test]
fn test_filter_infinite_stream() {
    let evens = filter(integers_from(1), |x| x % 2 == 0).unwrap();
    assert_eq!(to_vec(take(evens, 4)).unwrap(), vec![2, 4, 6, 8]);
}

#[test]
fn test_concat_with_self_and_end() {
    let s = one_to_five();
    let t = map(s.clone(), |x| 3 * x);
    let joined = concat([s.clone(), t, None, s]);
    assert_eq!(
        to_vec(joined).unwrap(),
        vec![1, 2, 3, 4, 5, 3, 6, 9, 12, 15, 1, 2, 3, 4, 5]
    );
}

#[test]
fn test_concat_leaves_caller_sequence_untouched() {
    let streams = vec![one_to_five(), from_slice(&[6])];
    let joined = concat(streams.clone());
    assert_eq!(count(joined).unwrap(), 6);
    assert_eq!(*streams[0].as_ref().unwrap().value(), 1);
}

#[test]
fn test_concat_empty() {
    let out: Link<u8> = concat(Vec::new());
    assert!(out.is_none());
}

#[test]
fn test_append() {
    let joined = append(from_slice(&[1, 2]), from_slice(&[3]));
    assert_eq!(to_vec(joined).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_append_infinite_second() {
    let joined = append(from_slice(&[0]), repeat(9));
    assert_eq!(to_vec(take(joined, 4)).unwrap(), vec![0, 9, 9, 9]);
}

#[test]
fn test_flat_map_expands_and_suppresses() {
    let xx = flat_map(one_to_five(), |&x| {
        if x % 2 == 1 {
            vec![]
        } else {
            vec![x; x as usize]
        }
    })
    .unwrap();
    assert_eq!(to_vec(xx.clone()).unwrap(), vec![2, 2, 4, 4, 4, 4]);

    let twice = concat([xx.clone(), xx.clone()]);
    assert_eq!(
        to_vec(twice).unwrap(),
        vec![2, 2, 4, 4, 4, 4, 2, 2, 4, 4, 4, 4]
    );
    assert_eq!(to_vec(take(append(xx.clone(), xx), 3)).unwrap(), vec![2, 2, 4]);
}

#[test]
fn test_flat_map_one_to_one() {
    let doubled = flat_map(one_to_five(), |&x| [x * 2]).unwrap();
    assert_eq!(to_vec(doubled).unwrap(), vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_flat_map_only_odds() {
    let odds = flat_map(one_to_five(), |&x| (x % 2 == 1).then_some(x)).unwrap();
    assert_eq!(to_vec(odds).unwrap(), vec![1, 3, 5]);
}

#[test]
fn test_flat_map_infinite_source() {
    let pairs = flat_map(integers_from(1), |&x| vec![x, -x]).unwrap();
    assert_eq!(to_vec(take(pairs, 5)).unwrap(), vec![1, -1, 2, -2, 3]);
}

#[test]
fn test_zip_stops_at_shorter() {
    let sums = zip(from_slice(&[1, 2, 3]), from_slice(&[1, 2]), |a, b| a + b);
    assert_eq!(to_vec(sums).unwrap(), vec![2, 4]);
}

#[test]
fn test_zip_with_end() {
    let empty: Link<i32> = None;
    assert!(zip(one_to_five(), empty, |a, b| a * b).is_none());
}

#[test]
fn test_zip_different_types() {
    let labelled = zip(from_slice(&['a', 'b']), integers_from(1), |c, n| format!("{c}{n}"));
    assert_eq!(to_vec(labelled).unwrap(), vec!["a1", "b2"]);
}

#[test]
fn test_take_more_than_available() {
    assert_eq!(to_vec(take(one_to_five(), 50)).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_take_while_and_drop_while() {
    let small = take_while(integers_from(1), |x| *x < 4);
    assert_eq!(to_vec(small).unwrap(), vec![1, 2, 3]);

    let rest = drop_while(one_to_five(), |x| *x < 4).unwrap();
    assert_eq!(to_vec(rest).unwrap(), vec![4, 5]);
}

#[test]
fn test_drop() {
    let rest = lazy_stream::stream::drop(integers_from(1), 3).unwrap();
    assert_eq!(to_vec(take(rest, 2)).unwrap(), vec![4, 5]);
}

#[test]
fn test_scan_running_total() {
    let totals = scan(one_to_five(), 0, |acc, x| acc + x);
    assert_eq!(to_vec(totals).unwrap(), vec![1, 3, 6, 10, 15]);
}

#[test]
fn test_scan_collects_prefixes() {
    let words = map(from_slice(&[1, 3, 5]), |n| ".".repeat(*n));
    let prefixes = scan(words, Vec::<String>::new(), |acc, word| {
        let mut next = acc.clone();
        next.push(word.clone());
        next
    });
    let second = nth(prefixes, 1).unwrap().unwrap();
    assert_eq!(second, vec![".".to_string(), "...".to_string()]);
}

#[test]
fn test_interleave_round_robin() {
    let mixed = interleave([from_slice(&[1, 3, 5]), from_slice(&[2, 4, 6])]);
    assert_eq!(to_vec(mixed).unwrap(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_interleave_ends_with_first_exhausted_turn() {
    let mixed = interleave([from_slice(&[1, 3, 5]), from_slice(&[2])]);
    assert_eq!(to_vec(mixed).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_consumers() {
    assert_eq!(fold(one_to_five(), 0, |acc, x| acc + x).unwrap(), 15);
    assert_eq!(reduce(one_to_five(), |a, b| a.max(b)).unwrap(), Some(5));
    assert_eq!(count(one_to_five()).unwrap(), 5);
    assert_eq!(last(one_to_five()).unwrap(), Some(5));
    assert_eq!(nth(integers_from(1), 99).unwrap(), Some(100));
    assert_eq!(nth(one_to_five(), 5).unwrap(), None);
}

#[test]
fn test_filter_stops_at_first_match() {
    let forced = Rc::new(Cell::new(0));
    let threes = filter(counting(10, &forced), |x| x % 4 == 3).unwrap();
    assert_eq!(forced.get(), 3);

    let next = threes.unwrap().next().unwrap().unwrap();
    assert_eq!(*next.value(), 7);
    assert_eq!(forced.get(), 7);
}

#[test]
fn test_flat_map_forces_source_only_after_buffer_drains() {
    let forced = Rc::new(Cell::new(0));
    let odds = flat_map(counting(6, &forced), |&x| {
        if x % 2 == 1 {
            vec![x; 3]
        } else {
            vec![]
        }
    })
    .unwrap();
    // Skipping the empty expansion of 0 forces exactly one source node
    assert_eq!(forced.get(), 1);

    assert_eq!(to_vec(take(odds.clone(), 3)).unwrap(), vec![1, 1, 1]);
    assert_eq!(forced.get(), 1);

    assert_eq!(to_vec(take(odds, 4)).unwrap(), vec![1, 1, 1, 3]);
    assert_eq!(forced.get(), 3);
}

#[test]
fn test_zip_does_not_force_second_after_first_ends() {
    let forced = Rc::new(Cell::new(0));
    let pairs = zip(from_slice(&[10u32, 20]), counting(10, &forced), |a, b| a + b);
    assert_eq!(to_vec(pairs).unwrap(), vec![10, 21]);
    assert_eq!(forced.get(), 1);
}

#[test]
fn test_concat_and_append_build_first_node_without_forcing() {
    let left = Rc::new(Cell::new(0));
    let right = Rc::new(Cell::new(0));
    let s = counting(3, &left);
    let t = counting(3, &right);

    let joined = concat([s.clone(), t.clone()]);
    let appended = append(s, t);
    assert_eq!(*joined.as_ref().unwrap().value(), 0);
    assert_eq!(*appended.as_ref().unwrap().value(), 0);
    assert_eq!((left.get(), right.get()), (0, 0));

    // Both share the memoized sources, so each promise still runs once
    assert_eq!(to_vec(joined).unwrap(), vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(to_vec(appended).unwrap(), vec![0, 1, 2, 0, 1, 2]);
    assert_eq!((left.get(), right.get()), (3, 3));
}

#[test]
fn test_take_while_scan_interleave_are_lazy() {
    let forced = Rc::new(Cell::new(0));
    let s = counting(5, &forced);

    let prefix = take_while(s.clone(), |x| *x < 2);
    let totals = scan(s.clone(), 0, |acc, x| acc + x);
    let mixed = interleave([s.clone(), s]);
    assert!(prefix.is_some() && totals.is_some() && mixed.is_some());
    assert_eq!(forced.get(), 0);

    assert_eq!(to_vec(prefix).unwrap(), vec![0, 1]);
    assert_eq!(forced.get(), 2);
    assert_eq!(to_vec(take(totals, 3)).unwrap(), vec![0, 1, 3]);
    assert_eq!(forced.get(), 2);
    assert_eq!(to_vec(take(mixed, 4)).unwrap(), vec![0, 0, 1, 1]);
    assert_eq!(forced.get(), 2);
}
