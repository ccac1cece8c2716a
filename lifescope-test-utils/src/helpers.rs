use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;

/// Panics if `stream` yields anything within `timeout_ms`.
pub async fn assert_no_item<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected item emitted, expected silence");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Polls `condition` every couple of milliseconds until it holds.
///
/// Panics when `timeout_ms` elapses first. Prefer this over fixed sleeps
/// when waiting for a background collection task to react.
pub async fn wait_until<C>(mut condition: C, timeout_ms: u64)
where
    C: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    while !condition() {
        if tokio::time::Instant::now() >= deadline {
            panic!("condition not met within {timeout_ms}ms");
        }
        sleep(Duration::from_millis(2)).await;
    }
}
