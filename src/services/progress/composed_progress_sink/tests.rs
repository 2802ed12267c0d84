use crate::services::progress::composed_progress_sink::ComposedProgressSink;
use crate::services::progress::ProgressSink;
use crate::testing::collecting_progress_sink::CollectingProgressSink;
use std::sync::Arc;

#[test]
fn every_sink_receives_every_message() {
    let first = Arc::new(CollectingProgressSink::new());
    let second = Arc::new(CollectingProgressSink::new());
    let composed = ComposedProgressSink::new()
        .with_sink(first.clone())
        .with_sink(second.clone());

    composed.publish("one");
    composed.publish("two");

    assert_eq!(first.messages(), vec!["one".to_string(), "two".to_string()]);
    assert_eq!(second.messages(), vec!["one".to_string(), "two".to_string()]);
}

#[test]
fn empty_composition_is_a_no_op() {
    let composed = ComposedProgressSink::new();
    composed.publish("nobody listens");
}
