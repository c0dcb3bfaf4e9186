//! End-to-end checkpoint/replay flows: drive a resumable stream partway,
//! persist the progress snapshot as JSON the way a caller would, reload it,
//! and resume a new instance from the saved point.

use fastforward::{ProgressState, ResumableFactory, SharedProgress, Start};
use futures::StreamExt;
use proptest::prelude::*;

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn countdown(input: u32, _state: SharedProgress<u32>) -> impl futures::Stream<Item = u32> + Send {
  async_stream::stream! {
    let mut n = input;
    while n > 0 {
      yield n;
      n -= 1;
    }
  }
}

#[tokio::test]
async fn resume_roundtrips_through_a_checkpoint_file() {
  init_tracing();
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("progress.json");

  let factory = ResumableFactory::new(countdown);
  let mut handle = factory.create(Start::Fresh(4)).unwrap();
  assert_eq!(handle.next().await, Some(4));
  assert_eq!(handle.next().await, Some(3));

  let json = serde_json::to_vec(&handle.state()).unwrap();
  std::fs::write(&path, json).unwrap();
  drop(handle);

  let bytes = std::fs::read(&path).unwrap();
  let saved: ProgressState<u32> = serde_json::from_slice(&bytes).unwrap();
  let rest: Vec<u32> = factory
    .create(Start::Resume(saved))
    .unwrap()
    .collect()
    .await;
  assert_eq!(rest, vec![2, 1]);
}

#[tokio::test]
async fn interrupting_after_every_yield_covers_the_whole_sequence() {
  init_tracing();
  let factory = ResumableFactory::new(countdown);
  let mut collected = Vec::new();
  let mut saved: Option<ProgressState<u32>> = None;
  loop {
    let mut handle = match saved.take() {
      None => factory.create(Start::Fresh(5)).unwrap(),
      Some(state) => factory.create(Start::Resume(state)).unwrap(),
    };
    match handle.next().await {
      Some(v) => {
        collected.push(v);
        saved = Some(handle.state());
      }
      None => break,
    }
  }
  assert_eq!(collected, vec![5, 4, 3, 2, 1]);
}

proptest! {
  #[test]
  fn interrupted_runs_emit_the_same_sequence_as_uninterrupted_ones(
    len in 0u32..8,
    cut in 0usize..8,
  ) {
    let (expected, actual) = futures::executor::block_on(async move {
      let factory = ResumableFactory::new(countdown);
      let expected: Vec<u32> = factory
        .create(Start::Fresh(len))
        .unwrap()
        .collect()
        .await;

      let mut first = factory.create(Start::Fresh(len)).unwrap();
      let mut actual = Vec::new();
      for _ in 0..cut.min(len as usize) {
        if let Some(v) = first.next().await {
          actual.push(v);
        }
      }
      let saved = first.state();
      drop(first);
      let rest: Vec<u32> = factory
        .create(Start::Resume(saved))
        .unwrap()
        .collect()
        .await;
      actual.extend(rest);
      (expected, actual)
    });
    prop_assert_eq!(actual, expected);
  }
}
