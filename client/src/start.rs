use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use dossier_shared::{ItemCatalog, ItemRecord};

use crate::app::{CurrentRoute, Items, RecentProfiles, Route, navigate};
use crate::data::{DISCORD_BOT_INVITE, ITEM_CATEGORIES, MAPS, NavLink, TOOLS, TRADERS};

/// How many item rows are shown per "Load More" step.
const ITEM_PAGE_SIZE: usize = 20;
/// Typing pause before the item filter re-applies.
const FILTER_DEBOUNCE_MS: u32 = 150;

fn initial_search_query() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let Ok(search) = window.location().search() else {
        return String::new();
    };
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get("search"))
        .unwrap_or_default()
}

/// Name filter over the item catalog: case-insensitive substring match,
/// alphabetical order, capped for display.
fn filter_items(catalog: &ItemCatalog, filter: &str, cap: usize) -> Vec<ItemRecord> {
    let needle = filter.to_lowercase();
    let mut list: Vec<ItemRecord> = catalog
        .values()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    list.truncate(cap);
    list
}

/// Landing page: player search, item search, and navigation sections.
#[component]
pub fn StartPage() -> impl IntoView {
    let CurrentRoute(route) = expect_context();
    let Items(items) = expect_context();
    let RecentProfiles(recent) = expect_context();

    let player_query: RwSignal<String> = RwSignal::new(String::new());
    let name_filter: RwSignal<String> = RwSignal::new(initial_search_query());
    let filter_nonce: RwSignal<u64> = RwSignal::new(0);
    let item_cap: RwSignal<usize> = RwSignal::new(ITEM_PAGE_SIZE);

    let open_player = move || {
        let query = player_query.get_untracked().trim().to_string();
        if !query.is_empty() {
            navigate(route, Route::Player(query));
        }
    };

    // Let the keystroke land in the input before the table refilters.
    let on_filter_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let value = input.value();
        let nonce = filter_nonce.get_untracked().wrapping_add(1);
        filter_nonce.set(nonce);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(FILTER_DEBOUNCE_MS).await;
            if filter_nonce.get_untracked() == nonce {
                item_cap.set(ITEM_PAGE_SIZE);
                name_filter.set(value);
            }
        });
    };

    let filtered_items =
        Memo::new(move |_| filter_items(&items.get(), &name_filter.get(), item_cap.get()));

    view! {
        <div class="start-wrapper">
            <div class="start-section item-section">
                <div class="player-search">
                    <input
                        type="text"
                        placeholder="Player name or account id"
                        prop:value=move || player_query.get()
                        on:input=move |e: leptos::ev::Event| {
                            let Some(target) = e.target() else {
                                return;
                            };
                            let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                                return;
                            };
                            player_query.set(input.value());
                        }
                        on:keydown=move |e: leptos::ev::KeyboardEvent| {
                            if e.key() == "Enter" {
                                open_player();
                            }
                        }
                    />
                    <button on:click=move |_| open_player()>"View dossier"</button>
                </div>
                {move || {
                    let list = recent.get();
                    (!list.is_empty())
                        .then(|| {
                            view! {
                                <h3>"Recent profiles"</h3>
                                <ul class="recent-profiles">
                                    {list
                                        .into_iter()
                                        .map(|entry| {
                                            let aid = entry.aid;
                                            view! {
                                                <li>
                                                    <a
                                                        href=format!("/player/{aid}")
                                                        on:click=move |e: leptos::ev::MouseEvent| {
                                                            e.prevent_default();
                                                            navigate(route, Route::Player(aid.to_string()));
                                                        }
                                                    >
                                                        {entry.nickname}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                        })
                }}
                <input
                    class="item-filter"
                    type="search"
                    placeholder="Search items"
                    value=name_filter.get_untracked()
                    on:input=on_filter_input
                />
                {move || {
                    let list = filtered_items.get();
                    if list.is_empty() {
                        view! { <p>"No matching items"</p> }.into_any()
                    } else {
                        view! {
                            <table class="item-table">
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|item| {
                                            let href = format!("/item/{}", item.id);
                                            view! {
                                                <tr>
                                                    <td>
                                                        <img
                                                            class="item-icon"
                                                            src=item.icon_link
                                                            alt=item.name.clone()
                                                            loading="lazy"
                                                        />
                                                    </td>
                                                    <td>
                                                        <a href=href>{item.name}</a>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
                <button
                    class="load-more"
                    on:click=move |_| item_cap.update(|cap| *cap += ITEM_PAGE_SIZE)
                >
                    "Load More"
                </button>
            </div>
            <div class="start-section">
                {nav_section("Tools", &TOOLS)}
                <ul class="nav-list">
                    <li>
                        <a href=DISCORD_BOT_INVITE>
                            <img class="icon-with-text" src="/icons/discord.svg" alt="" />
                            "Discord bot"
                        </a>
                    </li>
                </ul>
                {nav_section("Maps", &MAPS)}
                {nav_section("Items", &ITEM_CATEGORIES)}
                <h3>
                    <a href="/traders">"Traders"</a>
                </h3>
                <ul class="traders-list">
                    {TRADERS
                        .iter()
                        .map(|(key, name)| {
                            view! {
                                <li>
                                    <a href=format!("/traders/{key}")>
                                        <img
                                            class="trader-icon"
                                            src=format!("/images/{key}-icon.jpg")
                                            alt=format!("{name} icon")
                                            loading="lazy"
                                        />
                                        {*name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="info-text">
                <h1 class="main-headers">
                    "An open source player dossier and toolkit for Escape from Tarkov."
                </h1>
                <h2 class="main-headers">
                    "Designed and maintained by the community to help you track raid \
                    performance, achievements, and loadouts. The profile API is freely \
                    available for building your own tools."
                </h2>
            </div>
        </div>
    }
}

fn nav_section(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <h3>{title}</h3>
        <ul class="nav-list">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.href>
                                <img class="icon-with-text" src=link.icon alt="" />
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
