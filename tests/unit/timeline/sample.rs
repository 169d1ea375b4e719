use super::*;

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("update {i}")).collect()
}

#[test]
fn short_sequences_pass_through() {
    for n in [0usize, 1, 2, 13, 14] {
        let items = numbered(n);
        assert_eq!(sample_updates(&items), items);
    }
}

#[test]
fn fifteen_items_stride_one_is_identity() {
    let items = numbered(15);
    assert_eq!(SamplePolicy::default().stride(15), 1);
    assert_eq!(sample_updates(&items), items);
}

#[test]
fn stride_keeps_first_and_appends_true_last() {
    let items = numbered(30);
    let policy = SamplePolicy::default();
    assert_eq!(policy.stride(30), 2);

    let sampled = sample_updates(&items);
    // 0, 2, ..., 28 then forced 29
    assert_eq!(sampled.len(), 16);
    assert_eq!(sampled.first(), items.first());
    assert_eq!(sampled.last(), items.last());
    assert_eq!(sampled[1], "update 2");
}

#[test]
fn last_is_not_duplicated_when_stride_lands_on_it() {
    let items = numbered(25);
    // stride 2 visits index 24 which is already the last item
    let sampled = sample_updates(&items);
    assert_eq!(sampled.len(), 13);
    assert_eq!(sampled.last().unwrap(), "update 24");
    assert_ne!(sampled[sampled.len() - 2], "update 24");
}

#[test]
fn equal_value_at_sampled_tail_suppresses_append() {
    let mut items = numbered(29);
    // stride 2 ends at index 28; index 28 and the appended check compare by value
    items.push("update 28".to_string());
    let sampled = sample_updates(&items);
    assert_eq!(sampled.last().unwrap(), "update 28");
    assert_eq!(sampled.iter().filter(|s| *s == "update 28").count(), 1);
}

#[test]
fn order_is_preserved_for_long_inputs() {
    let items: Vec<u32> = (0..200).collect();
    let sampled = SamplePolicy::default().sample(&items);
    assert!(sampled.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(sampled[0], 0);
    assert_eq!(*sampled.last().unwrap(), 199);
    assert!(sampled.len() <= 14);
}
