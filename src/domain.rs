use url::Url;

// Second-level labels treated as part of a compound suffix, so that
// foo.co.uk and bar.com.au keep three segments instead of two. Not the
// full public suffix list: anything else (e.g. example.org.uk) collapses
// to two segments.
const COMPOUND_SECOND_LEVELS: [&str; 2] = ["com", "co"];

pub fn registrable_domain(link: &str) -> Option<String> {
    // scheme-relative hrefs ("//cdn.example.com/x") still carry a host
    let parsed = if link.starts_with("//") {
        Url::parse(&format!("http:{}", link)).ok()?
    } else {
        Url::parse(link).ok()?
    };

    // drop scheme, path, and port; keep only the host
    let host = parsed.host_str().unwrap_or("");
    let host = host.strip_prefix("www.").unwrap_or(host);

    let segments: Vec<&str> = host.split('.').collect();
    if segments.len() < 2 {
        return None;
    }

    let keep = if segments.len() >= 3
        && COMPOUND_SECOND_LEVELS.contains(&segments[segments.len() - 2])
    {
        3
    } else {
        2
    };

    let domain = segments[segments.len() - keep..].join(".");
    if domain.is_empty() {
        return None;
    }

    Some(domain)
}

pub fn root_name(link: &str) -> Option<String> {
    let domain = registrable_domain(link)?;
    domain.split('.').next().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_www_scheme_and_path() {
        assert_eq!(
            registrable_domain("https://www.example.com/path").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn keeps_three_segments_for_compound_suffixes() {
        assert_eq!(
            registrable_domain("http://example.co.uk").as_deref(),
            Some("example.co.uk")
        );
        assert_eq!(
            registrable_domain("https://shop.example.com.au/cart").as_deref(),
            Some("example.com.au")
        );
    }

    #[test]
    fn other_compound_suffixes_collapse_to_two_segments() {
        // org is not in the compound-suffix table
        assert_eq!(
            registrable_domain("http://example.org.uk").as_deref(),
            Some("org.uk")
        );
    }

    #[test]
    fn subdomains_collapse_to_registrable_domain() {
        assert_eq!(
            registrable_domain("https://a.b.c.example.com/x").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn discards_ports() {
        assert_eq!(
            registrable_domain("http://example.com:8080/x").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn scheme_relative_links_carry_a_host() {
        assert_eq!(
            registrable_domain("//cdn.example.com/lib.js").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn non_urls_have_no_domain() {
        assert_eq!(registrable_domain("not a url"), None);
        assert_eq!(registrable_domain(""), None);
        assert_eq!(registrable_domain("#anchor"), None);
        assert_eq!(registrable_domain("/relative/path"), None);
        assert_eq!(registrable_domain("javascript:void(0)"), None);
        assert_eq!(registrable_domain("mailto:someone@example.com"), None);
    }

    #[test]
    fn single_label_hosts_have_no_domain() {
        assert_eq!(registrable_domain("http://localhost/admin"), None);
    }

    #[test]
    fn renormalizing_own_output_is_stable() {
        for link in [
            "https://www.example.com/path",
            "http://example.co.uk",
            "https://a.b.com",
        ] {
            let domain = registrable_domain(link).unwrap();
            assert_eq!(
                registrable_domain(&format!("https://{}", domain)),
                Some(domain)
            );
        }
    }

    #[test]
    fn root_name_takes_first_label() {
        assert_eq!(root_name("http://a.b.com").as_deref(), Some("b"));
        assert_eq!(
            root_name("https://www.example.co.uk/x").as_deref(),
            Some("example")
        );
        assert_eq!(root_name("not a url"), None);
    }
}
