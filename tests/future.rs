use std::future::IntoFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use option_future::{FutureOption, None, Option, Some};

async fn double(n: i32) -> Option<i32> {
    Some(n * 2)
}

#[tokio::test]
async fn chained_and_then_settles_left_to_right() {
    let got = Some(12)
        .and_then_async(|n| async move { Some(n * 2) })
        .and_then(|n| async move { Some(n * 3) })
        .and_then(|n| async move { Some(n * 4) })
        .await;
    assert_eq!(got, Some(12 * 2 * 3 * 4));
}

#[tokio::test]
async fn or_else_recovers_then_chains() {
    let got = None::<i32>
        .or_else_async(|| async { Some(321) })
        .and_then(|n| async move { Some(n * 2) })
        .and_then(|n| async move { Some(n * 3) })
        .and_then(|n| async move { Some(n * 4) })
        .await;
    assert_eq!(got, Some(321 * 2 * 3 * 4));
}

#[tokio::test]
async fn chain_may_change_type_mid_flight() {
    let got = None::<i32>
        .or_else_async(|| async { Some(55) })
        .and_then(double)
        .and_then(|n| async move { Some(format!("{n} * 3")) })
        .await;
    assert_eq!(got, Some("110 * 3".to_string()));
}

#[tokio::test]
async fn async_chain_matches_sync_chain() {
    let sync = Some(12).and_then(|n| Some(n * 2)).and_then(|n| Some(n * 3));
    let async_ = Some(12)
        .and_then_async(|n| async move { Some(n * 2) })
        .and_then(|n| async move { Some(n * 3) })
        .await;
    assert_eq!(sync, async_);
}

#[tokio::test]
async fn map_async_wraps_the_resolved_value() {
    assert_eq!(Some(42).map_async(|n| async move { n + 291 }).await, Some(333));
    assert_eq!(None::<i32>.map_async(|n| async move { n + 291 }).await, None);
}

#[tokio::test]
async fn absent_chain_never_runs_callbacks() {
    let calls = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&calls);
    let mapped = None::<i32>
        .map_async(move |n| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { n }
        })
        .await;
    assert!(mapped.is_none());

    let c = Arc::clone(&calls);
    let chained = None::<i32>
        .and_then_async(move |n| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { Some(n) }
        })
        .await;
    assert!(chained.is_none());

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn present_chain_never_runs_or_else() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);

    let out = Some(5)
        .into_future()
        .or_else(move || {
            c.fetch_add(1, Ordering::SeqCst);
            async { Some(0) }
        })
        .await;

    assert_eq!(out, Some(5));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn eager_and_or_filter_on_the_wrapper() {
    assert_eq!(Some(1).into_future().and(Some("x")).await, Some("x"));
    assert_eq!(None::<i32>.into_future().and(Some("x")).await, None);

    assert_eq!(Some(1).into_future().or(Some(2)).await, Some(1));
    assert_eq!(None::<i32>.into_future().or(Some(2)).await, Some(2));

    assert_eq!(Some(4).into_future().filter(|n| n % 2 == 0).await, Some(4));
    assert_eq!(Some(3).into_future().filter(|n| n % 2 == 0).await, None);
    assert_eq!(None::<i32>.into_future().filter(|n| n % 2 == 0).await, None);
}

#[tokio::test]
async fn queries_and_terminators_settle_the_chain() {
    assert!(Some(1).into_future().is_some().await);
    assert!(!Some(1).into_future().is_none().await);
    assert!(None::<i32>.into_future().is_none().await);

    assert_eq!(Some(5).into_future().unwrap().await, 5);
    assert_eq!(None::<i32>.into_future().unwrap_or(9).await, 9);
    assert_eq!(Some(1).into_future().unwrap_or(9).await, 1);
}

#[tokio::test]
async fn ok_or_else_bridges_to_result() {
    assert_eq!(Some(1).into_future().ok_or_else(|| "gone").await, Ok(1));
    assert_eq!(None::<i32>.into_future().ok_or_else(|| "gone").await, Err("gone"));

    assert_eq!(Some(1).ok_or_else_async(|| async { "gone" }).await, Ok(1));
    assert_eq!(None::<i32>.ok_or_else_async(|| async { "gone" }).await, Err("gone"));
}

#[tokio::test]
async fn awaiting_a_settled_option_yields_it() {
    assert_eq!(Some(7).await, Some(7));
    assert_eq!(None::<i32>.await, None);
}

#[tokio::test]
async fn wrapper_chains_across_a_real_suspension() {
    let fut = FutureOption::new(async {
        tokio::task::yield_now().await;
        Some(5)
    });
    assert_eq!(fut.map(|n| async move { n + 1 }).await, Some(6));
}

#[tokio::test]
#[should_panic(expected = "EmptyOption")]
async fn unwrap_of_a_settled_absence_faults() {
    None::<i32>.into_future().unwrap().await;
}
