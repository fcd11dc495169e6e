use once_cell::sync::Lazy;
use regex::Regex;

static HOURS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)H").unwrap());
static MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)M").unwrap());
static SECONDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)S").unwrap());

/// Hour/minute/second decomposition of an ISO-8601 duration token such as
/// `PT1H2M3S`. Components are taken literally from the matched groups and are
/// never carried or renormalised, so `PT90S` keeps 90 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationSpec {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Extract the components of a duration token. Each component is matched
/// independently; anything that does not match counts as zero, so malformed
/// tokens parse to all zeros rather than an error.
pub fn parse(token: &str) -> DurationSpec {
    DurationSpec {
        hours: component(&HOURS, token),
        minutes: component(&MINUTES, token),
        seconds: component(&SECONDS, token),
    }
}

fn component(re: &Regex, token: &str) -> u64 {
    re.captures(token)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Render a duration token for the menu: `H:MM:SS` when hours are present,
/// `M:SS` otherwise.
pub fn format_token(token: &str) -> String {
    let d = parse(token);
    if d.hours > 0 {
        format!("{}:{:02}:{:02}", d.hours, d.minutes, d.seconds)
    } else {
        format!("{}:{:02}", d.minutes, d.seconds)
    }
}
