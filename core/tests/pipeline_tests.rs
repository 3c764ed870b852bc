// tests/pipeline_tests.rs
mod common;

use common::*;
use enumerable::{Enumerable, Sequence};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

#[test]
fn test_map_then_filter_runs_stages_in_order() {
  setup_tracing();
  let result = Enumerable::new(vec![1, 2, 3]).map(|x| x * 2).filter(|x| *x > 2).evaluate();

  assert!(result.is_evaluated());
  assert_eq!(result.to_list(), vec![4, 6]);
}

#[test]
fn test_filter_then_map_differs_from_map_then_filter() {
  setup_tracing();
  let base = Enumerable::new(vec![1, 2, 3]);

  assert_eq!(base.filter(|x| *x > 2).map(|x| x * 2).to_list(), vec![6]);
  assert_eq!(base.map(|x| x * 2).filter(|x| *x > 2).to_list(), vec![4, 6]);
}

#[test]
fn test_map_string_elements() {
  setup_tracing();
  let result = Enumerable::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).map(|s| s.repeat(2));

  assert_eq!(result.to_list(), vec!["aa", "bb", "cc"]);
}

#[test]
fn test_chain_calls_are_deferred_until_evaluate() {
  setup_tracing();
  let calls = Arc::new(AtomicUsize::new(0));
  let pipeline = Enumerable::new(vec![1, 2, 3]).map(counting_increment(calls.clone()));

  assert_eq!(calls.load(Ordering::SeqCst), 0);
  assert_eq!(pipeline.pending_stages(), 1);
  assert!(!pipeline.is_evaluated());

  let evaluated = pipeline.evaluate();
  assert_eq!(calls.load(Ordering::SeqCst), 3);
  assert_eq!(evaluated.pending_stages(), 0);
  assert_eq!(evaluated.to_list(), vec![2, 3, 4]);
}

#[test]
fn test_evaluate_on_evaluated_pipeline_is_noop() {
  setup_tracing();
  let calls = Arc::new(AtomicUsize::new(0));
  let evaluated = Enumerable::new(vec![1, 2]).map(counting_increment(calls.clone())).evaluate();
  let again = evaluated.evaluate().evaluate();

  assert_eq!(calls.load(Ordering::SeqCst), 2);
  assert_eq!(again.to_list(), vec![2, 3]);
  assert_eq!(Enumerable::<i32>::new(vec![]).evaluate().to_list(), Vec::<i32>::new());
}

#[test]
fn test_receiver_is_not_mutated_by_chaining() {
  setup_tracing();
  let base = Enumerable::new(vec![1, 2, 3]);
  let mapped = base.map(|x| x * 100);
  let _reversed = base.reverse();
  let _appended = base.append(4);

  assert_eq!(base.pending_stages(), 0);
  assert_eq!(mapped.pending_stages(), 1);
  assert_eq!(base.to_list(), vec![1, 2, 3]);
  assert_eq!(mapped.to_list(), vec![100, 200, 300]);
}

#[test]
fn test_shared_prefix_branches_do_not_observe_each_other() {
  setup_tracing();
  let prefix = Enumerable::new(vec![5, 1, 4, 2]).map(|x| x + 1);
  let sorted_ish = prefix.filter(|x| *x % 2 == 0);
  let reversed = prefix.reverse();
  let appended = prefix.append(0);

  assert_eq!(sorted_ish.to_list(), vec![6, 2]);
  assert_eq!(reversed.to_list(), vec![3, 5, 2, 6]);
  assert_eq!(appended.to_list(), vec![6, 2, 5, 3, 0]);
  assert_eq!(prefix.to_list(), vec![6, 2, 5, 3]);
}

#[test]
fn test_evaluated_intermediate_can_be_reused() {
  setup_tracing();
  let calls = Arc::new(AtomicUsize::new(0));
  let materialized = numbers(1..=4).map(counting_increment(calls.clone())).evaluate();

  assert_eq!(materialized.take(2).to_list(), vec![2, 3]);
  assert_eq!(materialized.skip(2).to_list(), vec![4, 5]);
  assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_append_adds_to_end() {
  setup_tracing();
  let result = Enumerable::new(vec![1]).append(2).append(3);
  assert_eq!(result.pending_stages(), 2);
  assert_eq!(result.to_list(), vec![1, 2, 3]);
  assert_eq!(Enumerable::new(vec![]).append(7).to_list(), vec![7]);
}

#[test]
fn test_filter_preserves_relative_order() {
  setup_tracing();
  let input = vec![9, 2, 7, 4, 4, 1, 8];
  let expected: Vec<i32> = input.iter().copied().filter(|x| x % 2 == 0).collect();

  assert_eq!(Enumerable::new(input).filter(|x| x % 2 == 0).to_list(), expected);
  assert!(numbers(1..=3).filter(|_| false).to_list().is_empty());
}

#[test]
fn test_reverse_is_an_involution() {
  setup_tracing();
  let inputs: Vec<Vec<i32>> = vec![vec![], vec![1], vec![1, 2], vec![3, 1, 2, 5, 4]];
  for input in inputs {
    let pipeline = Enumerable::new(input.clone());
    assert_eq!(pipeline.reverse().reverse().to_list(), input);
  }
  assert_eq!(numbers(1..=3).reverse().to_list(), vec![3, 2, 1]);
}

#[test]
fn test_take_positive_negative_and_zero() {
  setup_tracing();
  let pipeline = numbers(1..=3);

  assert_eq!(pipeline.take(2).to_list(), vec![1, 2]);
  assert_eq!(pipeline.take(-2).evaluate().to_list(), vec![2, 3]);
  assert!(pipeline.take(0).to_list().is_empty());
}

#[test]
fn test_take_clamps_to_length() {
  setup_tracing();
  let pipeline = numbers(1..=3);

  assert_eq!(pipeline.take(10).to_list(), vec![1, 2, 3]);
  assert_eq!(pipeline.take(-10).to_list(), vec![1, 2, 3]);
  assert!(Enumerable::<i32>::default().take(-1).to_list().is_empty());
}

#[test]
fn test_skip_positive_negative_and_clamped() {
  setup_tracing();
  let pipeline = numbers(1..=3);

  assert_eq!(pipeline.skip(1).to_list(), vec![2, 3]);
  assert_eq!(pipeline.skip(-1).to_list(), vec![1, 2]);
  assert_eq!(pipeline.skip(0).to_list(), vec![1, 2, 3]);
  assert!(pipeline.skip(5).evaluate().to_list().is_empty());
  assert!(pipeline.skip(-5).to_list().is_empty());
}

#[test]
fn test_take_and_skip_partition_the_sequence() {
  setup_tracing();
  let source = numbers(1..=6);
  let all = source.to_list();

  for n in 0..=6isize {
    let mut rebuilt = source.take(n).to_list();
    rebuilt.extend(source.skip(n).to_list());
    assert_eq!(rebuilt, all, "partition failed for n = {}", n);
  }

  for n in 1..=6isize {
    let tail = source.take(-n).to_list();
    let head = source.skip(-n).to_list();
    assert_eq!(tail, all[all.len() - n as usize..].to_vec(), "take({}) is not the tail", -n);
    let mut rebuilt = head;
    rebuilt.extend(tail);
    assert_eq!(rebuilt, all, "negative partition failed for n = {}", -n);
  }
}

#[test]
fn test_take_while_prefix_rules() {
  setup_tracing();
  let pipeline = numbers(1..=3);

  assert_eq!(pipeline.take_while(|x| *x < 3).evaluate().to_list(), vec![1, 2]);
  assert!(pipeline.take_while(|x| *x > 1).to_list().is_empty());
  assert_eq!(pipeline.take_while(|_| true).to_list(), vec![1, 2, 3]);
  // Stops at the first failure even if later elements would pass again.
  assert_eq!(Enumerable::new(vec![1, 5, 2]).take_while(|x| *x < 3).to_list(), vec![1]);
}

#[test]
fn test_skip_while_prefix_rules() {
  setup_tracing();
  let pipeline = numbers(1..=3);

  assert_eq!(pipeline.skip_while(|x| *x < 2).to_list(), vec![2, 3]);
  assert_eq!(pipeline.skip_while(|x| *x > 1).to_list(), vec![1, 2, 3]);
  assert!(pipeline.skip_while(|_| true).to_list().is_empty());
  assert_eq!(Enumerable::new(vec![1, 5, 2]).skip_while(|x| *x < 3).to_list(), vec![5, 2]);
}

#[test]
fn test_position_dependent_stages_see_previous_output() {
  setup_tracing();
  let result = numbers(1..=10)
    .filter(|x| x % 2 == 1) // 1 3 5 7 9
    .reverse() // 9 7 5 3 1
    .skip(1) // 7 5 3 1
    .take(-3) // 5 3 1
    .append(11)
    .map(|x| x * 10);

  assert_eq!(result.pending_stages(), 6);
  assert_eq!(result.to_list(), vec![50, 30, 10, 110]);
}

#[test]
fn test_pipelines_over_structs() {
  setup_tracing();
  let big_spenders = Enumerable::new(sample_orders())
    .filter(|o| o.total_cents >= 1_000)
    .map(|mut o| {
      o.customer = o.customer.to_uppercase();
      o
    })
    .take(-2);

  let ids: Vec<u32> = big_spenders.to_list().into_iter().map(|o| o.id).collect();
  assert_eq!(ids, vec![3, 4]);
  assert_eq!(big_spenders.to_list()[0].customer, "ADA");
}

#[test]
fn test_sequence_container_get_set_reverse() {
  setup_tracing();
  let seq = Sequence::new(vec![1, 2, 3]);
  let replaced = seq.set(vec![9]);
  let reversed = seq.reverse();

  assert_eq!(seq.get(), &[1, 2, 3]);
  assert_eq!(replaced.get(), &[9]);
  assert_eq!(reversed.get(), &[3, 2, 1]);
  assert_eq!(seq.len(), 3);

  let empty = Sequence::<i32>::default();
  assert!(empty.reverse().is_empty());
  assert!(empty.set(vec![]).get().is_empty());
}

#[test]
fn test_pipeline_from_sequence_and_iterator() {
  setup_tracing();
  let from_seq = Enumerable::from(Sequence::from(vec![3, 4]));
  let from_iter: Enumerable<i32> = (3..=4).collect();

  assert_eq!(from_seq.to_list(), from_iter.to_list());
  assert_eq!(from_seq.append(5).to_sequence(), Sequence::new(vec![3, 4, 5]));
}

#[test]
fn test_debug_lists_pending_stages() {
  setup_tracing();
  let pipeline = Enumerable::new(vec![1, 2]).map(|x| x + 1).take(-1).append(3);
  let rendered = format!("{:?}", pipeline);

  assert!(rendered.contains("map"));
  assert!(rendered.contains("take(-1)"));
  assert!(rendered.contains("append(3)"));
  assert!(format!("{:?}", pipeline.evaluate()).contains("pending_stages: []"));
}
