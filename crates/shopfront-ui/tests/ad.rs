//! Parses rendered ads back with `quick-xml` and checks that the anchor's
//! href and text content are exactly the props that went in.

use quick_xml::events::Event;
use quick_xml::Reader;

use shopfront_ui::{render_ad, Ad, AdProps};

/// The anchor as seen by a parser: `(href, rel, text)`.
fn parse_anchor(html: &str) -> (String, String, String) {
    let mut reader = Reader::from_str(html);
    let mut in_anchor = false;
    let mut href = None;
    let mut rel = None;
    let mut text = String::new();

    loop {
        match reader.read_event().expect("rendered ad should be well-formed") {
            Event::Start(e) if e.name().as_ref() == b"a" => {
                in_anchor = true;
                for attr in e.attributes() {
                    let attr = attr.expect("valid attribute");
                    let value = attr.unescape_value().expect("valid escape").into_owned();
                    match attr.key.as_ref() {
                        b"href" => href = Some(value),
                        b"rel" => rel = Some(value),
                        _ => {}
                    }
                }
            }
            Event::End(e) if e.name().as_ref() == b"a" => in_anchor = false,
            Event::Text(t) if in_anchor => {
                text.push_str(&t.unescape().expect("valid escape"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    (
        href.expect("anchor should have an href"),
        rel.expect("anchor should have a rel"),
        text,
    )
}

#[test]
fn anchor_href_and_text_match_props() {
    let cases = [
        ("/product/2ZYFJ3GM2N", "Hairdryer for sale. 50% off."),
        ("https://example.com/?a=1&b=2", "Tom & Jerry's \"deal\""),
        ("javascript:void(0)", "<script>alert(1)</script>"),
        ("", "text only"),
        ("/href-only", ""),
    ];

    for (redirect_url, text) in cases {
        let html = render_ad(&AdProps::new(redirect_url, text));
        let (href, rel, parsed_text) = parse_anchor(&html);
        assert_eq!(href, redirect_url, "href mismatch in {html}");
        assert_eq!(parsed_text, text, "text mismatch in {html}");
        assert_eq!(rel, "nofollow");
    }
}

#[test]
fn missing_props_parse_as_empty_anchor() {
    let html = Ad::new(&AdProps::default()).to_string();
    let (href, rel, text) = parse_anchor(&html);
    assert_eq!(href, "");
    assert_eq!(rel, "nofollow");
    assert_eq!(text, "");
}

#[test]
fn ad_is_wrapped_in_alert_with_label() {
    let html = render_ad(&AdProps::new("/x", "y"));
    let mut reader = Reader::from_str(&html);
    let mut saw_alert = false;
    let mut labels = Vec::new();
    let mut in_strong = false;

    loop {
        match reader.read_event().expect("rendered ad should be well-formed") {
            Event::Start(e) if e.name().as_ref() == b"div" => {
                let role = e
                    .try_get_attribute("role")
                    .expect("valid attribute")
                    .map(|a| a.unescape_value().expect("valid escape").into_owned());
                saw_alert |= role.as_deref() == Some("alert");
            }
            Event::Start(e) if e.name().as_ref() == b"strong" => in_strong = true,
            Event::End(e) if e.name().as_ref() == b"strong" => in_strong = false,
            Event::Text(t) if in_strong => {
                labels.push(t.unescape().expect("valid escape").into_owned());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(saw_alert, "no role=alert container in {html}");
    assert_eq!(labels, ["Ad"]);
}

#[test]
fn props_lift_out_of_home_page_payload() {
    let page = serde_json::json!({
        "products": [],
        "ad": { "redirect_url": "/product/66VCHSJNUP", "text": "Tank top for sale. 20% off." }
    });
    let props: AdProps = serde_json::from_value(page["ad"].clone()).unwrap();
    let (href, _, text) = parse_anchor(&render_ad(&props));
    assert_eq!(href, "/product/66VCHSJNUP");
    assert_eq!(text, "Tank top for sale. 20% off.");
}
