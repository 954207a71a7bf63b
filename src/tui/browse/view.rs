//! Browse view component
//!
//! Holds the whole [`BrowseState`] in one iocraft `State` and routes every
//! key press and fetch result through [`reduce_browse_state`].

#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::pager::{self, PageOutcome, PageRequest, Phase};
use crate::remote::{FetchError, GitHubSearchClient};
use crate::tui::theme::theme;

use super::components::{BrowseHeader, DetailModal, ListBodyView, NavBar, ShortcutBar};
use super::model::{
    BrowseAction, BrowseSettings, BrowseState, Effect, compute_view_model, key_to_action,
    reduce_browse_state,
};

/// Rows taken by everything except table rows: title, banner, list border,
/// table header, navigation bar and shortcut bar
const CHROME_ROWS: usize = 10;

/// Props for the BrowseApp component
#[derive(Default, Props)]
pub struct BrowseAppProps {
    pub client: Option<GitHubSearchClient>,
    pub settings: Option<BrowseSettings>,
}

fn open_url(url: &str) {
    tracing::debug!(%url, "opening in browser");
    if let Err(e) = open::that_detached(url) {
        tracing::warn!(%url, "failed to open browser: {e}");
    }
}

/// Apply an action and run whatever effect it asks for
fn dispatch(
    state: &mut State<BrowseState>,
    action: BrowseAction,
    settings: &BrowseSettings,
    list_height: usize,
    fetch_handler: &Handler<PageRequest>,
) {
    let current = state.read().clone();
    let (next, effect) = reduce_browse_state(current, action, settings, list_height);
    state.set(next);

    match effect {
        Some(Effect::Fetch(request)) => fetch_handler(request),
        Some(Effect::OpenUrl(url)) => open_url(&url),
        None => {}
    }
}

/// Main browse component
#[component]
pub fn BrowseApp(props: &BrowseAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let settings = props.settings.clone().unwrap_or_default();
    let list_height = (height as usize).saturating_sub(CHROME_ROWS);

    let mut state = hooks.use_state(BrowseState::default);

    // Runs one fetch and feeds the outcome back through the reducer
    let fetch_handler: Handler<PageRequest> = hooks.use_async_handler({
        let client = props.client.clone();
        let settings = settings.clone();
        let state_setter = state.clone();

        move |request: PageRequest| {
            let client = client.clone();
            let settings = settings.clone();
            let mut state_setter = state_setter.clone();

            async move {
                let outcome = match client.as_ref() {
                    Some(client) => pager::fetch(client, request).await,
                    None => PageOutcome {
                        request,
                        result: Err(FetchError::transport("no search client configured")),
                    },
                };
                let current = state_setter.read().clone();
                let (next, _) = reduce_browse_state(
                    current,
                    BrowseAction::PageLoaded(outcome),
                    &settings,
                    list_height,
                );
                state_setter.set(next);
            }
        }
    });

    // Initial load
    if state.read().page.phase() == Phase::Idle {
        dispatch(
            &mut state,
            BrowseAction::Mount,
            &settings,
            list_height,
            &fetch_handler,
        );
    }

    hooks.use_terminal_events({
        let settings = settings.clone();
        let fetch_handler = fetch_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let action = key_to_action(code, modifiers, &state.read());
                if let Some(action) = action {
                    dispatch(&mut state, action, &settings, list_height, &fetch_handler);
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_view_model(&state.read(), &settings);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            BrowseHeader(title: vm.title, error: vm.error_banner)
            ListBodyView(body: vm.body, table: Some(vm.table), visible_rows: list_height)
            NavBar(nav: vm.nav)
            ShortcutBar(mode: vm.mode, shortcuts: vm.shortcuts)
            DetailModal(detail: vm.detail)
        }
    }
}
