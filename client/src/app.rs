use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use dossier_shared::{AchievementInfo, GameMetadata, ItemCatalog, index_items};
use gloo_storage::Storage;

use crate::api;
use crate::player::PlayerPage;
use crate::start::StartPage;

const RECENT_PROFILES_KEY: &str = "dossier_recent_profiles";
pub const MAX_RECENT_PROFILES: usize = 8;

/// Client-side route, parsed from the location pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Start,
    /// Account id or nickname, exactly as it appeared in the path.
    Player(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next()) {
            (Some("player"), Some(ident)) => Route::Player(ident.to_string()),
            _ => Route::Start,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Start => "/".to_string(),
            Route::Player(ident) => {
                let encoded = js_sys::encode_uri_component(ident)
                    .as_string()
                    .unwrap_or_default();
                format!("/player/{encoded}")
            }
        }
    }
}

/// Newtype context wrappers so same-shaped signals don't overwrite each
/// other in the Leptos context.
#[derive(Clone, Copy)]
pub struct CurrentRoute(pub RwSignal<Route>);
#[derive(Clone, Copy)]
pub struct Items(pub RwSignal<ItemCatalog>);
#[derive(Clone, Copy)]
pub struct Metadata(pub RwSignal<GameMetadata>);
#[derive(Clone, Copy)]
pub struct Achievements(pub RwSignal<Vec<AchievementInfo>>);
#[derive(Clone, Copy)]
pub struct RecentProfiles(pub RwSignal<Vec<RecentProfile>>);

/// A dossier the viewer opened recently; persisted across sessions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecentProfile {
    pub aid: u64,
    pub nickname: String,
}

/// Move `entry` to the front of the recents list, dropping any older entry
/// for the same account and clamping to the display cap.
pub fn push_recent(list: &mut Vec<RecentProfile>, entry: RecentProfile) {
    list.retain(|existing| existing.aid != entry.aid);
    list.insert(0, entry);
    list.truncate(MAX_RECENT_PROFILES);
}

/// Push a route into browser history and the route signal.
pub fn navigate(route_signal: RwSignal<Route>, route: Route) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ =
            history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.to_path()));
    }
    route_signal.set(route);
}

struct PopStateBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn(web_sys::PopStateEvent)>,
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopStateBinding>> = const { RefCell::new(None) };
}

/// Keep the route signal in sync with browser back/forward navigation.
fn bind_popstate(route: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(path) = window.location().pathname() {
            route.set(Route::from_path(&path));
        }
    });
    if window
        .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    POPSTATE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old
                .window
                .remove_event_listener_with_callback("popstate", old.handler.as_ref().unchecked_ref());
        }
        *slot.borrow_mut() = Some(PopStateBinding { window, handler });
    });
}

/// Root application component. Provides global reactive signals via context
/// and kicks off the one-shot reference-data loads.
#[component]
pub fn App() -> impl IntoView {
    let initial_route = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Start);
    let route = RwSignal::new(initial_route);
    let items: RwSignal<ItemCatalog> = RwSignal::new(Default::default());
    let metadata: RwSignal<GameMetadata> = RwSignal::new(Default::default());
    let achievements: RwSignal<Vec<AchievementInfo>> = RwSignal::new(Vec::new());
    let saved_recent: Vec<RecentProfile> =
        gloo_storage::LocalStorage::get(RECENT_PROFILES_KEY).unwrap_or_default();
    let recent = RwSignal::new(saved_recent);

    provide_context(CurrentRoute(route));
    provide_context(Items(items));
    provide_context(Metadata(metadata));
    provide_context(Achievements(achievements));
    provide_context(RecentProfiles(recent));

    Effect::new(move || {
        let list = recent.get();
        let _ = gloo_storage::LocalStorage::set(RECENT_PROFILES_KEY, &list);
    });

    // Reference catalogs are fetched once; a failure leaves the catalog
    // empty and every consumer degrades to skipped lookups.
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_items().await {
            Ok(list) => items.set(index_items(list)),
            Err(e) => {
                web_sys::console::warn_1(&format!("Item catalog fetch failed: {e}").into());
            }
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_metadata().await {
            Ok(meta) => metadata.set(meta),
            Err(e) => {
                web_sys::console::warn_1(&format!("Metadata fetch failed: {e}").into());
            }
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_achievements().await {
            Ok(list) => achievements.set(list),
            Err(e) => {
                web_sys::console::warn_1(&format!("Achievement catalog fetch failed: {e}").into());
            }
        }
    });

    bind_popstate(route);

    view! {
        <div class="page-wrapper">
            {move || match route.get() {
                Route::Start => view! { <StartPage /> }.into_any(),
                Route::Player(ident) => view! { <PlayerPage ident=ident /> }.into_any(),
            }}
        </div>
    }
}
