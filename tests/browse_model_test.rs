#[path = "common/mod.rs"]
mod common;

use common::mock_data::{FakeProvider, RepositoryBuilder, mock_page};
use iocraft::prelude::{KeyCode, KeyModifiers};
use stargaze::Config;
use stargaze::config::SearchWindow;
use stargaze::pager::{self, Nav, PageRequest};
use stargaze::remote::{FetchError, SearchPage};
use stargaze::tui::BrowseSettings;
use stargaze::tui::browse::{
    BrowseAction, BrowseState, Effect, ListBody, compute_view_model, key_to_action,
    reduce_browse_state,
};

const LIST_HEIGHT: usize = 10;

fn step(
    state: BrowseState,
    action: BrowseAction,
    settings: &BrowseSettings,
) -> (BrowseState, Option<Effect>) {
    reduce_browse_state(state, action, settings, LIST_HEIGHT)
}

fn expect_fetch(effect: Option<Effect>) -> PageRequest {
    match effect {
        Some(Effect::Fetch(request)) => request,
        other => panic!("expected a fetch effect, got {other:?}"),
    }
}

/// Drive one action and, if it issues a fetch, complete it against `provider`
async fn run(
    state: BrowseState,
    action: BrowseAction,
    settings: &BrowseSettings,
    provider: &FakeProvider,
) -> BrowseState {
    let (state, effect) = step(state, action, settings);
    match effect {
        Some(Effect::Fetch(request)) => {
            let outcome = pager::fetch(provider, request).await;
            step(state, BrowseAction::PageLoaded(outcome), settings).0
        }
        _ => state,
    }
}

#[tokio::test]
async fn test_loaded_page_renders_table_and_nav() {
    let provider = FakeProvider::new().with_page(1, mock_page(1, 30, 120));
    let settings = BrowseSettings::default();

    let state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;
    let vm = compute_view_model(&state, &settings);

    assert_eq!(vm.title, "Most Starred GitHub Repositories (Last 10 Days)");
    assert_eq!(vm.body, ListBody::Table);
    assert_eq!(vm.table.rows.len(), 30);
    assert_eq!(vm.table.selected, Some(0));
    assert!(vm.error_banner.is_none());
    assert!(vm.nav.visible);
    assert_eq!(vm.nav.indicator, "Page 1 of 4");
    assert!(!vm.nav.enabled(Nav::First));
    assert!(!vm.nav.enabled(Nav::Previous));
    assert!(vm.nav.enabled(Nav::Next));
    assert!(vm.nav.enabled(Nav::Last));
}

#[tokio::test]
async fn test_loading_shows_only_indicator() {
    let settings = BrowseSettings::default();
    let (state, effect) = step(BrowseState::default(), BrowseAction::Mount, &settings);
    expect_fetch(effect);

    let vm = compute_view_model(&state, &settings);
    assert_eq!(vm.body, ListBody::Loading);
    assert!(vm.table.rows.is_empty());
    assert!(vm.table.selected.is_none());
    assert!(vm.error_banner.is_none());
}

#[tokio::test]
async fn test_empty_results_show_window_message() {
    let provider = FakeProvider::new().with_page(1, SearchPage::default());
    let mut config = Config::default();
    config.search.window_days = 1;
    let settings = BrowseSettings::from_config(&config);
    assert_eq!(settings.window, SearchWindow::LastDays(1));

    let state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;
    let vm = compute_view_model(&state, &settings);

    assert_eq!(
        vm.body,
        ListBody::Empty("No repositories found for the last day.".to_string())
    );
    assert!(!vm.nav.visible);
    assert!(vm.error_banner.is_none());
}

#[tokio::test]
async fn test_failed_load_shows_fixed_banner() {
    let provider = FakeProvider::new().with_error(1, FetchError::transport("dns failure"));
    let settings = BrowseSettings::default();

    let state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;
    let vm = compute_view_model(&state, &settings);

    assert_eq!(vm.error_banner.as_deref(), Some("Failed to fetch repositories"));
    assert_eq!(vm.body, ListBody::Unavailable);
    assert!(vm.table.rows.is_empty());
}

#[tokio::test]
async fn test_navigation_walks_pages() {
    let provider = FakeProvider::new()
        .with_page(1, mock_page(1, 30, 75))
        .with_page(2, mock_page(31, 30, 75))
        .with_page(3, mock_page(61, 15, 75));
    let settings = BrowseSettings::default();

    let mut state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;
    state = run(state, BrowseAction::MoveDown, &settings, &provider).await;
    assert_eq!(state.cursor, 1);

    state = run(state, BrowseAction::Navigate(Nav::Next), &settings, &provider).await;
    assert_eq!(state.page.current_page(), 2);
    assert_eq!(state.cursor, 0);

    state = run(state, BrowseAction::Navigate(Nav::Last), &settings, &provider).await;
    let vm = compute_view_model(&state, &settings);
    assert_eq!(vm.nav.indicator, "Page 3 of 3");
    assert_eq!(vm.table.rows.len(), 15);
    assert!(!vm.nav.enabled(Nav::Next));

    // Disabled controls issue nothing
    let (_, effect) = step(state.clone(), BrowseAction::Navigate(Nav::Next), &settings);
    assert!(effect.is_none());

    state = run(state, BrowseAction::Navigate(Nav::First), &settings, &provider).await;
    assert_eq!(state.page.current_page(), 1);
    assert_eq!(provider.calls(), vec![1, 2, 3, 1]);
}

#[tokio::test]
async fn test_detail_overlay_survives_page_change() {
    let first = RepositoryBuilder::new(1)
        .owner("rust-lang")
        .name("rust")
        .description(Some("Empowering everyone to build reliable software"))
        .stars(99_000)
        .build();
    let provider = FakeProvider::new()
        .with_page(
            1,
            SearchPage {
                items: vec![first],
                total_count: 60,
            },
        )
        .with_page(2, mock_page(100, 30, 60));
    let settings = BrowseSettings::default();

    let mut state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;
    state = run(state, BrowseAction::OpenDetail, &settings, &provider).await;

    let vm = compute_view_model(&state, &settings);
    let detail = vm.detail.expect("overlay open");
    assert_eq!(detail.full_name, "rust-lang/rust");
    assert_eq!(detail.stars, "★ 99000");

    // Pages can still change underneath; the overlay keeps its repository
    state = run(state, BrowseAction::Navigate(Nav::Next), &settings, &provider).await;
    assert_eq!(state.page.current_page(), 2);
    let vm = compute_view_model(&state, &settings);
    assert_eq!(vm.detail.map(|d| d.owner), Some("rust-lang".to_string()));

    let (state, effect) = step(state, BrowseAction::OpenInBrowser, &settings);
    assert_eq!(
        effect,
        Some(Effect::OpenUrl("https://github.com/owner1/repo1".to_string()))
    );

    let (state, _) = step(state, BrowseAction::CloseDetail, &settings);
    assert!(compute_view_model(&state, &settings).detail.is_none());
}

#[tokio::test]
async fn test_detail_disabled_without_view_more() {
    let provider = FakeProvider::new().with_page(1, mock_page(1, 3, 3));
    let mut config = Config::default();
    config.display.view_more = false;
    let settings = BrowseSettings::from_config(&config);

    let state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;
    let (state, _) = step(state, BrowseAction::OpenDetail, &settings);

    assert!(!state.selection.is_open());
    let vm = compute_view_model(&state, &settings);
    assert!(vm.shortcuts.iter().all(|s| s.action != "Detail"));
}

#[tokio::test]
async fn test_keys_route_through_overlay() {
    let provider = FakeProvider::new().with_page(1, mock_page(1, 3, 3));
    let settings = BrowseSettings::default();
    let state = run(BrowseState::default(), BrowseAction::Mount, &settings, &provider).await;

    let action = key_to_action(KeyCode::Enter, KeyModifiers::NONE, &state).unwrap();
    let (state, _) = step(state, action, &settings);
    assert!(state.selection.is_open());

    // Page keys are swallowed while the overlay is open
    assert!(key_to_action(KeyCode::Char('l'), KeyModifiers::NONE, &state).is_none());
    assert!(matches!(
        key_to_action(KeyCode::Esc, KeyModifiers::NONE, &state),
        Some(BrowseAction::CloseDetail)
    ));
    assert!(matches!(
        key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, &state),
        Some(BrowseAction::Quit)
    ));
}
