use axum::http::{header, HeaderMap};

use crate::shared::constants::{CLIENT_IP_HEADERS, FORWARDED_FOR_HEADER};

/// Metadata the server observes about an inbound request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl RequestMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = header_str(headers, header::USER_AGENT.as_str())
            .filter(|ua| !ua.is_empty())
            .map(str::to_string);

        Self {
            user_agent,
            ip: client_ip(headers),
        }
    }
}

/// Best-effort client IP from proxy headers.
///
/// The first entry of `X-Forwarded-For` wins; otherwise the first non-blank
/// single-value header in [`CLIENT_IP_HEADERS`] order. `None` when nothing
/// usable is present.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = header_str(headers, FORWARDED_FOR_HEADER)
        .and_then(|xff| xff.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty());

    if let Some(first) = forwarded {
        return Some(first.to_string());
    }

    CLIENT_IP_HEADERS.iter().find_map(|name| {
        header_str(headers, name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let map = headers(&[("x-forwarded-for", " 1.2.3.4 , 5.6.7.8")]);
        assert_eq!(client_ip(&map), Some("1.2.3.4".to_string()));
    }

    #[test]
    fn test_forwarded_for_wins_over_other_headers() {
        let map = headers(&[
            ("x-real-ip", "9.9.9.9"),
            ("x-forwarded-for", "1.2.3.4, 5.6.7.8"),
        ]);
        assert_eq!(client_ip(&map), Some("1.2.3.4".to_string()));
    }

    #[test]
    fn test_fallback_headers_in_order() {
        let map = headers(&[
            ("x-vercel-forwarded-for", "4.4.4.4"),
            ("fly-client-ip", "3.3.3.3"),
            ("cf-connecting-ip", "  "),
        ]);
        assert_eq!(client_ip(&map), Some("3.3.3.3".to_string()));

        let map = headers(&[("x-forwarded-for", " ,5.6.7.8"), ("x-real-ip", "2.2.2.2")]);
        assert_eq!(client_ip(&map), Some("2.2.2.2".to_string()));
    }

    #[test]
    fn test_no_headers_means_no_ip() {
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }

    #[test]
    fn test_request_meta_skips_empty_user_agent() {
        let meta = RequestMeta::from_headers(&headers(&[("user-agent", "")]));
        assert_eq!(meta, RequestMeta::default());

        let meta = RequestMeta::from_headers(&headers(&[
            ("user-agent", "Mozilla/5.0"),
            ("cf-connecting-ip", "7.7.7.7"),
        ]));
        assert_eq!(meta.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(meta.ip.as_deref(), Some("7.7.7.7"));
    }
}
