#[path = "common/mod.rs"]
mod common;

use common::mock_data::{FakeProvider, mock_page};
use reqwest::StatusCode;
use stargaze::pager::{
    self, Applied, ErrorPolicy, FETCH_ERROR_MESSAGE, Nav, PageState, Pager, Phase,
};
use stargaze::remote::FetchError;

/// Mount and load page 1 from `provider`
async fn mounted(provider: &FakeProvider, pager: &Pager) -> PageState {
    let mut state = PageState::new();
    let request = state.mount();
    let outcome = pager::fetch(provider, request).await;
    assert_eq!(state.apply(pager, outcome), Applied::Loaded);
    state
}

#[tokio::test]
async fn test_total_is_clamped_to_search_window() {
    let provider = FakeProvider::new().with_page(1, mock_page(0, 30, 5000));
    let pager = Pager::default();

    let state = mounted(&provider, &pager).await;

    assert_eq!(state.total_count(), 1000);
    assert_eq!(state.total_pages(&pager), 34);
    assert_eq!(state.items().len(), 30);
    assert_eq!(provider.calls(), vec![1]);
}

#[tokio::test]
async fn test_last_page_holds_remainder() {
    let provider = FakeProvider::new()
        .with_page(1, mock_page(0, 30, 5000))
        .with_page(34, mock_page(990, 10, 5000));
    let pager = Pager::default();
    let mut state = mounted(&provider, &pager).await;

    let request = state.navigate(&pager, Nav::Last).unwrap();
    assert_eq!(request.page, 34);
    let outcome = pager::fetch(&provider, request).await;
    assert_eq!(state.apply(&pager, outcome), Applied::Loaded);

    assert_eq!(state.current_page(), 34);
    assert_eq!(state.items().len(), 10);
    assert!(!state.nav_enabled(&pager, Nav::Next));
    assert!(!state.nav_enabled(&pager, Nav::Last));
    assert!(state.nav_enabled(&pager, Nav::First));
    assert!(state.nav_enabled(&pager, Nav::Previous));
}

#[tokio::test]
async fn test_out_of_range_requests_change_nothing() {
    let provider = FakeProvider::new().with_page(1, mock_page(0, 30, 45));
    let pager = Pager::default();
    let mut state = mounted(&provider, &pager).await;
    let before = state.clone();

    assert!(state.request_page(&pager, 0).is_none());
    assert!(state.request_page(&pager, 3).is_none());
    assert!(state.navigate(&pager, Nav::Previous).is_none());
    assert_eq!(state, before);
    assert_eq!(provider.calls(), vec![1]);
}

#[tokio::test]
async fn test_superseded_outcome_is_discarded() {
    let provider = FakeProvider::new()
        .with_page(1, mock_page(0, 30, 300))
        .with_page(2, mock_page(30, 30, 300))
        .with_page(3, mock_page(60, 30, 300));
    let pager = Pager::default();
    let mut state = mounted(&provider, &pager).await;

    let slow = state.request_page(&pager, 2).unwrap();
    let fast = state.request_page(&pager, 3).unwrap();
    assert!(fast.seq > slow.seq);

    let fast_outcome = pager::fetch(&provider, fast).await;
    let slow_outcome = pager::fetch(&provider, slow).await;

    assert_eq!(state.apply(&pager, fast_outcome), Applied::Loaded);
    assert_eq!(state.apply(&pager, slow_outcome), Applied::Stale);
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.items()[0].id, 60);
}

#[tokio::test]
async fn test_rerequesting_current_page_reloads_it() {
    let provider = FakeProvider::new()
        .with_page(1, mock_page(0, 30, 90))
        .with_page(2, mock_page(30, 30, 90));
    let pager = Pager::default();
    let mut state = mounted(&provider, &pager).await;

    for _ in 0..2 {
        let request = state.request_page(&pager, 2).unwrap();
        let outcome = pager::fetch(&provider, request).await;
        assert_eq!(state.apply(&pager, outcome), Applied::Loaded);
    }

    assert_eq!(state.current_page(), 2);
    assert_eq!(state.items().len(), 30);
    assert_eq!(provider.calls(), vec![1, 2, 2]);
}

#[tokio::test]
async fn test_failure_clears_rows_and_keeps_position() {
    let provider = FakeProvider::new()
        .with_page(1, mock_page(0, 30, 90))
        .with_error(
            2,
            FetchError::with_status(StatusCode::FORBIDDEN, "API rate limit exceeded"),
        );
    let pager = Pager::default();
    let mut state = mounted(&provider, &pager).await;

    let request = state.navigate(&pager, Nav::Next).unwrap();
    let outcome = pager::fetch(&provider, request).await;
    assert_eq!(state.apply(&pager, outcome), Applied::Failed);

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
    assert!(state.items().is_empty());
    assert_eq!(state.current_page(), 2);
    // The last known total still drives navigation
    assert_eq!(state.total_pages(&pager), 3);
    assert!(state.nav_enabled(&pager, Nav::Previous));
}

#[tokio::test]
async fn test_failure_can_retain_rows() {
    let provider = FakeProvider::new()
        .with_page(1, mock_page(0, 30, 90))
        .with_error(2, FetchError::transport("connection reset"));
    let pager = Pager::default().with_error_policy(ErrorPolicy::RetainItems);
    let mut state = mounted(&provider, &pager).await;

    let request = state.navigate(&pager, Nav::Next).unwrap();
    let outcome = pager::fetch(&provider, request).await;
    state.apply(&pager, outcome);

    assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(state.items().len(), 30);
    assert_eq!(state.items()[0].id, 0);
}

#[tokio::test]
async fn test_failed_first_load_recovers_on_refresh() {
    let failing = FakeProvider::new().with_error(1, FetchError::decode("expected value"));
    let pager = Pager::default();
    let mut state = PageState::new();

    let request = state.mount();
    let outcome = pager::fetch(&failing, request).await;
    assert_eq!(state.apply(&pager, outcome), Applied::Failed);
    assert_eq!(state.total_pages(&pager), 0);
    assert!(Nav::ALL.iter().all(|nav| !state.nav_enabled(&pager, *nav)));

    let healthy = FakeProvider::new().with_page(1, mock_page(0, 5, 5));
    let request = state.refresh();
    assert!(state.error().is_none());
    let outcome = pager::fetch(&healthy, request).await;
    assert_eq!(state.apply(&pager, outcome), Applied::Loaded);
    assert_eq!(state.items().len(), 5);
    assert_eq!(state.total_pages(&pager), 1);
}

#[tokio::test]
async fn test_empty_result_has_no_pages() {
    let provider = FakeProvider::new().with_page(1, mock_page(0, 0, 0));
    let pager = Pager::default();
    let state = mounted(&provider, &pager).await;

    assert_eq!(state.phase(), Phase::Loaded);
    assert!(state.items().is_empty());
    assert!(state.error().is_none());
    assert_eq!(state.total_pages(&pager), 0);
}
