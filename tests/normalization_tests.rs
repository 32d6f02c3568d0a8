#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Normalized rendering and the equality contract
use ruri::Uri;

fn assert_components_eq(a: &Uri, b: &Uri) {
    assert_eq!(a.scheme(), b.scheme());
    assert_eq!(a.userinfo(), b.userinfo());
    assert_eq!(a.host(), b.host());
    assert_eq!(a.port(), b.port());
    assert_eq!(a.path().segments(), b.path().segments());
    assert_eq!(a.query(), b.query());
    assert_eq!(a.fragment(), b.fragment());
}

#[test]
fn test_dot_segment_removal() {
    let uri = Uri::from_parts(None, None, "/a/b/c/./../../g", None, None).unwrap();
    assert_eq!(uri.to_string(), "/a/b/c/./../../g");
    assert_eq!(uri.normalized(), "/a/g");

    let uri = Uri::from_parts(None, None, "mid/content=5/../6", None, None).unwrap();
    assert_eq!(uri.to_string(), "mid/content=5/../6");
    assert_eq!(uri.normalized(), "mid/6");
}

#[test]
fn test_leading_dot_dot_does_not_underflow() {
    let uri = Uri::from_parts(None, None, "../../g", None, None).unwrap();
    assert_eq!(uri.normalized(), "g");

    let uri = Uri::from_parts(None, None, "/..", None, None).unwrap();
    assert_eq!(uri.normalized(), "");
}

#[test]
fn test_scheme_and_host_lowercased() {
    let uri = Uri::parse("HTTP://WWW.EXAMPLE.COM/Path").unwrap();
    assert_eq!(uri.to_string(), "HTTP://WWW.EXAMPLE.COM/Path");
    // Path case is preserved; only scheme and host fold
    assert_eq!(uri.normalized(), "http://www.example.com/Path");
}

#[test]
fn test_escape_triplets_uppercased() {
    let uri = Uri::parse("ftP://herp%2fballoon").unwrap();
    assert_eq!(uri.to_string(), "ftP://herp%2Fballoon");
    assert_eq!(uri.normalized(), "ftp://herp%2Fballoon/");
}

#[test]
fn test_empty_path_defaults_to_slash_with_authority() {
    let uri = Uri::parse("http://example.com").unwrap();
    assert_eq!(uri.normalized(), "http://example.com/");

    // Without an authority the path stays empty
    let uri = Uri::parse("mailto:").unwrap();
    assert_eq!(uri.normalized(), "mailto:");
}

#[test]
fn test_ip_literal_folds_with_host() {
    let raw = "http://[FEDC:BA98:7654:3210:FEDC:BA98:7654:3210]:80/index.html";
    let uri = Uri::parse(raw).unwrap();
    assert_eq!(uri.to_string(), raw);
    assert_eq!(
        uri.normalized(),
        "http://[fedc:ba98:7654:3210:fedc:ba98:7654:3210]:80/index.html"
    );
}

#[test]
fn test_uri_equality_is_normalized() {
    let a = Uri::parse("http://example.com/a/../b").unwrap();
    let b = Uri::parse("HTTP://EXAMPLE.COM/b").unwrap();
    assert_eq!(a, b);

    let c = Uri::parse("http://example.com/a/b").unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_string_equality_is_lowercased_literal() {
    let uri = Uri::parse("ftP://herp%2fballoon").unwrap();
    // Literal rendering, lowercased: dot segments and trailing slash are
    // NOT applied on this side of the contract
    assert_eq!(uri, "ftp://herp%2fballoon");
    assert!(uri != "ftP://herp%2Fballoon");
    assert!(uri != "ftp://herp%2Fballoon/");

    let uri = Uri::parse("http://example.com/a/../b").unwrap();
    assert_eq!(uri, "http://example.com/a/../b");
    assert!(uri != "http://example.com/b");
}

#[test]
fn test_reparse_of_literal_rendering_is_identity() {
    let samples = [
        "ftp://ftp.is.co.za/rfc/rfc1808.txt",
        "ldap://[2001:db8::7]/c=GB?objectClass?one",
        "news:comp.infosystems.www.servers.unix",
        "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
        "telnet://192.0.2.16:80/",
        "foo://herp@example.com:8042/over/there?name=ferret#nose",
        "ftP://herp%2fballoon",
        "file:///etc/hosts",
        "mid/content=5/../6",
        "http://example.com/a%20b?note=two%20words#sec%20one",
    ];
    for raw in samples {
        let first = Uri::parse(raw).unwrap();
        let second = Uri::parse(&first.to_string()).unwrap();
        assert_components_eq(&first, &second);
    }
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in ["ftP://herp%2fballoon", "HTTP://EXAMPLE.COM/a/./b/../c"] {
        let uri = Uri::parse(raw).unwrap();
        let renormalized = Uri::parse(&uri.normalized()).unwrap().normalized();
        assert_eq!(uri.normalized(), renormalized);
    }
}
