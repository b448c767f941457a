//! Static catalogs of values each tool accepts
//!
//! These mirror the selections the lookup tools understand on their own
//! command lines. Every selection catalog includes `all`.

/// Output extensions understood by every tool
pub const EXTENSIONS: &[&str] = &["csv", "xls", "xlsx", "json", "gml"];

/// Wildcard accepted by every selection catalog
pub const ALL: &str = "all";

/// Platforms checked by usufy
pub const USUFY_PLATFORMS: &[&str] = &[
    "all",
    "behance",
    "disqus",
    "dribbble",
    "ebay",
    "etsy",
    "facebook",
    "flickr",
    "foursquare",
    "github",
    "gitlab",
    "goodreads",
    "imgur",
    "instagram",
    "keybase",
    "medium",
    "myspace",
    "pinterest",
    "reddit",
    "slideshare",
    "soundcloud",
    "spotify",
    "steam",
    "tumblr",
    "twitch",
    "twitter",
    "vimeo",
    "vk",
    "youtube",
];

/// E-mail providers checked by mailfy
pub const EMAIL_DOMAINS: &[&str] = &[
    "all",
    "126.com",
    "163.com",
    "aol.com",
    "gmail.com",
    "gmx.com",
    "gmx.de",
    "hotmail.com",
    "hushmail.com",
    "icloud.com",
    "libero.it",
    "live.com",
    "mail.ru",
    "me.com",
    "outlook.com",
    "protonmail.ch",
    "protonmail.com",
    "qq.com",
    "rediffmail.com",
    "seznam.cz",
    "tutanota.com",
    "web.de",
    "yahoo.com",
    "yandex.com",
    "zoho.com",
];

/// Platforms checked by phonefy
pub const PHONEFY_PLATFORMS: &[&str] = &[
    "all",
    "infobel",
    "listaspam",
    "ntsearch",
    "telefonospam",
    "tellows",
    "whocallsme",
];

/// Platforms queried by searchfy
pub const SEARCHFY_PLATFORMS: &[&str] = &[
    "all",
    "facebook",
    "github",
    "google",
    "instagram",
    "keyserverubuntu",
    "skype",
    "twitter",
    "youtube",
];

/// TLD groups checked by domainfy
pub const TLD_GROUPS: &[&str] = &[
    "all",
    "brand",
    "cc",
    "generic",
    "geographic",
    "global",
    "other",
];

/// Regular expressions known to entify
pub const REGEXPS: &[&str] = &[
    "all",
    "bitcoinaddress",
    "dni",
    "dogecoinaddress",
    "email",
    "ipv4",
    "litecoinaddress",
    "md5",
    "namecoinaddress",
    "peercoinaddress",
    "phone",
    "sha1",
    "sha256",
    "uri",
    "url",
];

/// Number of concrete entries in a catalog (the `all` wildcard excluded)
pub fn count(catalog: &[&str]) -> usize {
    catalog.iter().filter(|v| **v != ALL).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_catalogs_include_all() {
        for catalog in [
            USUFY_PLATFORMS,
            EMAIL_DOMAINS,
            PHONEFY_PLATFORMS,
            SEARCHFY_PLATFORMS,
            TLD_GROUPS,
            REGEXPS,
        ] {
            assert!(catalog.contains(&ALL));
        }
    }

    #[test]
    fn test_count_excludes_wildcard() {
        assert_eq!(count(TLD_GROUPS), TLD_GROUPS.len() - 1);
        assert_eq!(count(EXTENSIONS), 5);
    }

    #[test]
    fn test_catalog_values_are_lowercase() {
        for value in USUFY_PLATFORMS.iter().chain(EMAIL_DOMAINS).chain(REGEXPS) {
            assert_eq!(value.to_lowercase(), *value);
        }
    }
}
