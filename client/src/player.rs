use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use dossier_shared::{
    CompletedAchievement, LoadoutNode, PlayerProfile, RaidStatRow, aggregate_raid_stats,
    build_loadout_tree, merge_achievements, resolve_level,
};

use crate::api::{self, FetchError};
use crate::app::{Achievements, Items, Metadata, RecentProfile, RecentProfiles, push_recent};
use crate::time_format::{format_kd, format_play_time, format_unix};

enum ProfileOutcome {
    Loaded(Box<PlayerProfile>),
    /// Nickname resolved to a numeric id; the caller re-enters with it.
    Resolved(u64),
    /// Name search came back without an exact match.
    NoMatch,
}

async fn load_profile(ident: &str) -> Result<ProfileOutcome, FetchError> {
    match ident.parse::<u64>() {
        Ok(account_id) => api::fetch_profile(account_id)
            .await
            .map(|profile| ProfileOutcome::Loaded(Box::new(profile))),
        Err(_) => Ok(match api::resolve_account_id(ident).await? {
            Some(aid) => ProfileOutcome::Resolved(aid),
            None => ProfileOutcome::NoMatch,
        }),
    }
}

/// Player dossier: headline, account info lines, raid stats, achievements,
/// and the equipment loadout tree.
#[component]
pub fn PlayerPage(ident: String) -> impl IntoView {
    let Items(items) = expect_context();
    let Metadata(metadata) = expect_context();
    let Achievements(achievements) = expect_context();
    let RecentProfiles(recent) = expect_context();

    let profile: RwSignal<PlayerProfile> = RwSignal::new(PlayerProfile::default());
    let profile_error: RwSignal<Option<String>> = RwSignal::new(None);
    let request_nonce: RwSignal<u64> = RwSignal::new(0);
    // The identifier starts as the route segment and is swapped for the
    // numeric id once a nickname resolves, restarting the fetch below.
    let identifier = RwSignal::new(ident);

    Effect::new(move || {
        let ident = identifier.get();
        let nonce = request_nonce.get_untracked().wrapping_add(1);
        request_nonce.set(nonce);
        spawn_local(async move {
            let outcome = load_profile(&ident).await;
            if request_nonce.get_untracked() != nonce {
                return;
            }
            match outcome {
                Ok(ProfileOutcome::Loaded(loaded)) => {
                    profile_error.set(None);
                    recent.update(|list| {
                        push_recent(
                            list,
                            RecentProfile {
                                aid: loaded.aid,
                                nickname: loaded.info.nickname.clone(),
                            },
                        );
                    });
                    profile.set(*loaded);
                }
                Ok(ProfileOutcome::Resolved(aid)) => identifier.set(aid.to_string()),
                Ok(ProfileOutcome::NoMatch) => {}
                Err(FetchError::Api(message)) => profile_error.set(Some(message)),
                Err(FetchError::Transport(message)) => {
                    web_sys::console::warn_1(
                        &format!("Error retrieving player profile: {message}").into(),
                    );
                }
            }
        });
    });

    let player_level = Memo::new(move |_| {
        resolve_level(
            profile.get().info.experience,
            &metadata.get().player_levels,
        )
    });

    let page_title = Memo::new(move |_| {
        let current = profile.get();
        if current.aid == 0 {
            return "Loading...".to_string();
        }
        format!(
            "{} - level {} {}",
            current.info.nickname,
            player_level.get(),
            current.info.side
        )
    });

    let raid_rows = Memo::new(move |_| aggregate_raid_stats(&profile.get()));
    let achievement_rows =
        Memo::new(move |_| merge_achievements(&achievements.get(), &profile.get().achievements));
    let loadout = Memo::new(move |_| build_loadout_tree(&profile.get().equipment, &items.get()));
    let total_play_secs = Memo::new(move |_| {
        profile
            .get()
            .pmc_stats
            .eft
            .as_ref()
            .map(|eft| eft.total_in_game_time)
            .unwrap_or(0)
    });

    view! {
        <div class="player-page">
            <div class="player-headline">
                <img class="icon-with-text" src="/icons/profile.svg" alt="" />
                <h1>{move || page_title.get()}</h1>
            </div>
            {move || {
                profile_error
                    .get()
                    .map(|message| view! { <p class="profile-error">{message}</p> })
            }}
            {move || {
                let registered = profile.get().info.registration_date;
                (registered > 0)
                    .then(|| {
                        view! {
                            <p>{format!("Started current wipe: {}", format_unix(registered))}</p>
                        }
                    })
            }}
            {move || profile.get().info.banned_state.then(|| view! { <p>"Banned"</p> })}
            {move || {
                let secs = total_play_secs.get();
                (secs > 0)
                    .then(|| {
                        view! {
                            <p>
                                {format!(
                                    "Total account time in game: {}",
                                    format_play_time(secs),
                                )}
                            </p>
                        }
                    })
            }}
            <h2>"Raid Stats"</h2>
            {move || {
                let rows = raid_rows.get();
                if rows.is_empty() {
                    view! { <p>"None"</p> }.into_any()
                } else {
                    raid_table(rows).into_any()
                }
            }}
            <h2>"Achievements"</h2>
            {move || {
                let rows = achievement_rows.get();
                if rows.is_empty() {
                    view! { <p>"None"</p> }.into_any()
                } else {
                    achievement_table(rows).into_any()
                }
            }}
            <h2>"Loadout"</h2>
            {move || {
                match loadout.get() {
                    Some(root) => {
                        view! {
                            <ul class="loadout-tree">
                                {root.children.into_iter().map(loadout_branch).collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    None => view! { <p>"None"</p> }.into_any(),
                }
            }}
        </div>
    }
}

fn raid_table(rows: Vec<RaidStatRow>) -> impl IntoView {
    view! {
        <table class="raid-stats">
            <thead>
                <tr>
                    <th>"Side"</th>
                    <th>"Raids"</th>
                    <th>"Survived"</th>
                    <th>"Runthrough"</th>
                    <th>"MIA"</th>
                    <th>"KIA"</th>
                    <th>"Kills"</th>
                    <th>"K:D"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.side.label()}</td>
                                <td>{row.raids.to_string()}</td>
                                <td>{row.survived.to_string()}</td>
                                <td>{row.runthrough.to_string()}</td>
                                <td>{row.mia.to_string()}</td>
                                <td>{row.kia.to_string()}</td>
                                <td>{row.kills.to_string()}</td>
                                <td>{format_kd(row.kd_ratio())}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn achievement_table(rows: Vec<CompletedAchievement>) -> impl IntoView {
    view! {
        <table class="achievements">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Description"</th>
                    <th>"Player %"</th>
                    <th>"Completed"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.info.name}</td>
                                <td>{row.info.description}</td>
                                <td>{format!("{}%", row.info.players_completed_percent)}</td>
                                <td>{format_unix(row.completion_date)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Render one loadout node; containers with contents get a native
/// collapsible wrapper, leaves render flat.
fn loadout_branch(node: LoadoutNode) -> AnyView {
    let LoadoutNode {
        name,
        icon_link,
        stack_label,
        children,
        ..
    } = node;
    let label = view! {
        <img class="loadout-icon" src=icon_link alt=name.clone() loading="lazy" />
        <span class="loadout-name">{name}</span>
        {stack_label.map(|stack| view! { <span class="stack-label">{stack}</span> })}
    };
    if children.is_empty() {
        view! { <li class="loadout-node">{label}</li> }.into_any()
    } else {
        view! {
            <li class="loadout-node">
                <details open=true>
                    <summary>{label}</summary>
                    <ul class="loadout-children">
                        {children.into_iter().map(loadout_branch).collect_view()}
                    </ul>
                </details>
            </li>
        }
        .into_any()
    }
}
