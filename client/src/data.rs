/// Static navigation tables for the start page. These mirror the wider
/// site's section structure; the SPA itself only serves `/` and `/player`.
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const DISCORD_BOT_INVITE: &str =
    "https://discord.com/api/oauth2/authorize?client_id=955521336904667227&permissions=309237664832&scope=bot%20applications.commands";

pub const TOOLS: [NavLink; 6] = [
    NavLink {
        label: "Ammo Chart",
        href: "/ammo/",
        icon: "/icons/ammo.svg",
    },
    NavLink {
        label: "Loot tiers",
        href: "/loot-tier/",
        icon: "/icons/finance.svg",
    },
    NavLink {
        label: "Barter trades",
        href: "/barters/",
        icon: "/icons/barter.svg",
    },
    NavLink {
        label: "Hideout crafts",
        href: "/hideout-profit/",
        icon: "/icons/craft.svg",
    },
    NavLink {
        label: "Hideout build costs",
        href: "/hideout",
        icon: "/icons/home.svg",
    },
    NavLink {
        label: "Wipe length",
        href: "/wipe-length",
        icon: "/icons/calendar.svg",
    },
];

pub const MAPS: [NavLink; 10] = [
    NavLink {
        label: "Customs",
        href: "/map/customs",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Factory",
        href: "/map/factory",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Ground Zero",
        href: "/map/ground-zero",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Interchange",
        href: "/map/interchange",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Lighthouse",
        href: "/map/lighthouse",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Reserve",
        href: "/map/reserve",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Shoreline",
        href: "/map/shoreline",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Streets of Tarkov",
        href: "/map/streets-of-tarkov",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "The Lab",
        href: "/map/the-lab",
        icon: "/icons/map.svg",
    },
    NavLink {
        label: "Woods",
        href: "/map/woods",
        icon: "/icons/map.svg",
    },
];

pub const ITEM_CATEGORIES: [NavLink; 8] = [
    NavLink {
        label: "Backpacks",
        href: "/items/backpacks",
        icon: "/icons/backpack.svg",
    },
    NavLink {
        label: "Barter Items",
        href: "/items/barter-items",
        icon: "/icons/barter-item.svg",
    },
    NavLink {
        label: "Containers",
        href: "/items/containers",
        icon: "/icons/container.svg",
    },
    NavLink {
        label: "Guns",
        href: "/items/guns",
        icon: "/icons/gun.svg",
    },
    NavLink {
        label: "Helmets",
        href: "/items/helmets",
        icon: "/icons/helmet.svg",
    },
    NavLink {
        label: "Keys",
        href: "/items/keys",
        icon: "/icons/key.svg",
    },
    NavLink {
        label: "Provisions",
        href: "/items/provisions",
        icon: "/icons/provisions.svg",
    },
    NavLink {
        label: "Rigs",
        href: "/items/rigs",
        icon: "/icons/rig.svg",
    },
];

/// Trader icons live under `/images/{key}-icon.jpg`, keyed like the urls.
pub const TRADERS: [(&str, &str); 8] = [
    ("prapor", "Prapor"),
    ("therapist", "Therapist"),
    ("skier", "Skier"),
    ("peacekeeper", "Peacekeeper"),
    ("mechanic", "Mechanic"),
    ("ragman", "Ragman"),
    ("jaeger", "Jaeger"),
    ("fence", "Fence"),
];
