/// Domain key extraction for Tab Sorter
use url::Url;

/// Extract the key used to group and sort a tab by its address
///
/// Algorithm:
/// 1. Parse the address as a URL
/// 2. Take the host and lowercase it
/// 3. Strip a single leading "www." label
///
/// Anything that fails to parse, or parses without a host (e.g. `about:blank`),
/// maps to the empty string so it sorts ahead of real domains.
///
/// Examples:
/// - https://www.google.com/search → google.com
/// - http://A.com/z → a.com
/// - https://www.www.example.org → www.example.org
/// - not a url → ""
pub fn sortable_domain(url: &str) -> String {
    match exact_host(url) {
        Some(host) => match host.strip_prefix("www.") {
            Some(rest) => rest.to_string(),
            None => host,
        },
        None => String::new(),
    }
}

/// Lowercased host of a URL, without any "www." stripping
pub fn exact_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Build a match pattern selecting every http(s) page on exactly `host`
pub fn host_match_pattern(host: &str) -> String {
    format!("*://{}/*", host)
}
