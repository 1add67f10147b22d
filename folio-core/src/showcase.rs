//! The compiled-in portfolio showcase, used when no config file provides items.
//!
//! Released games link to their catalog pages (and get live visit counts).
//! Unreleased work links to recorded gameplay videos.

use crate::model::{Item, Media, ProjectStatus};

struct Released {
    title: &'static str,
    description: &'static str,
    role: &'static str,
    status: ProjectStatus,
    tags: &'static [&'static str],
    image: &'static str,
    link: &'static str,
}

struct Unreleased {
    title: &'static str,
    description: &'static str,
    role: &'static str,
    tags: &'static [&'static str],
    video: &'static str,
}

const RELEASED: &[Released] = &[
    Released {
        title: "Steal A Streamer [Demo Game]",
        description: "Game fully scripted by me.",
        role: "Full Development",
        status: ProjectStatus::Released,
        tags: &["Full Stack", "Monetization", "Game Systems"],
        image: "https://tr.rbxcdn.com/180DAY-473399814d57d63f73e44d7ba2d3bf46/768/432/Image/Webp/noFilter",
        link: "https://www.roblox.com/games/78545085335980/Steal-a-Streamer",
    },
    Released {
        title: "Miami 1986",
        description: "Currently a scripter for the game.",
        role: "Core Scripter",
        status: ProjectStatus::ActiveDevelopment,
        tags: &["Systems"],
        image: "https://tr.rbxcdn.com/180DAY-d3f26b91f5e7d83300fdcf44b4193da7/768/432/Image/Webp/noFilter",
        link: "https://www.roblox.com/games/4780772099/Miami-1986",
    },
    Released {
        title: "Oak Wood Equestrian",
        description: "Past scripter for the game.",
        role: "Scripter",
        status: ProjectStatus::Released,
        tags: &["Systems"],
        image: "https://tr.rbxcdn.com/180DAY-ba2f4a9fad1e3251400c6e238a97ffe9/768/432/Image/Webp/noFilter",
        link: "https://www.roblox.com/games/13716884245/Oak-Wood-Equestrian-Version-1-OG",
    },
];

const UNRELEASED: &[Unreleased] = &[
    Unreleased {
        title: "Upcoming Brainrot Game",
        description: "Everything seen is scripted by me",
        role: "Full Development",
        tags: &["Brainrot", "Systems", "Monetization"],
        video: "https://youtu.be/JkuypVC5okQ",
    },
    Unreleased {
        title: "Obscured",
        description: "Fully scripted by me.",
        role: "Full Development",
        tags: &["Complete System", "Advanced Mechanics"],
        video: "https://youtu.be/X2kgIgzRH2s",
    },
    Unreleased {
        title: "Smash Legends",
        description: "Fully scripted by me.",
        role: "Full Development",
        tags: &["Combat", "Character Systems"],
        video: "https://youtu.be/IXgdFqOi28Y",
    },
    Unreleased {
        title: "Don't Touch it!",
        description: "Core systems development",
        role: "Systems Developer",
        tags: &["Game Logic"],
        video: "https://youtu.be/R6QtlJj3h4U",
    },
    Unreleased {
        title: "Acid Escape",
        description: "Advanced mechanics implementation",
        role: "Mechanics Developer",
        tags: &["Physics", "Player Systems"],
        video: "https://youtu.be/lYoSqpGbvfg",
    },
];

/// Released games first, then unreleased ones, in display order.
pub fn default_items() -> Vec<Item> {
    let released = RELEASED.iter().map(|g| {
        Item::trusted(g.title, g.description)
            .with_role(g.role)
            .with_status(g.status)
            .with_tags(g.tags.iter().copied())
            .with_media(Media::image(g.image))
            .with_link(g.link)
    });

    let unreleased = UNRELEASED.iter().map(|g| {
        let item = Item::trusted(g.title, g.description)
            .with_role(g.role)
            .with_status(ProjectStatus::Unreleased)
            .with_tags(g.tags.iter().copied())
            .with_link(g.video);
        match Media::video_from_url(g.video) {
            Some(media) => item.with_media(media),
            None => item,
        }
    });

    released.chain(unreleased).collect()
}
