use regex::Regex;
use std::sync::OnceLock;

static PLACE_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// Pull the numeric place id out of a catalog game link
/// (`https://www.roblox.com/games/<id>/<slug>`).
///
/// Any host is accepted; only the `/games/<digits>` path segment matters.
pub fn place_id(link: &str) -> Option<u64> {
    let re = PLACE_ID_REGEX.get_or_init(|| {
        Regex::new(r"/games/(\d+)(?:[/?#]|$)").expect("Invalid Place ID Regex")
    });
    re.captures(link)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
