//! Advertisement banner shown on product pages.

use std::fmt;

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

/// Inputs for [`Ad`]. Both fields may be missing; a missing field renders as
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdProps {
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl AdProps {
    #[must_use]
    pub fn new(redirect_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            redirect_url: Some(redirect_url.into()),
            text: Some(text.into()),
        }
    }
}

/// Alert block holding a single `rel="nofollow"` link.
///
/// Rendering goes through [`fmt::Display`]; the href and link text are
/// HTML-escaped.
#[derive(Debug, Clone, Copy)]
pub struct Ad<'a> {
    props: &'a AdProps,
}

impl<'a> Ad<'a> {
    #[must_use]
    pub fn new(props: &'a AdProps) -> Self {
        Self { props }
    }
}

impl fmt::Display for Ad<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let href = escape(self.props.redirect_url.as_deref().unwrap_or_default());
        let text = escape(self.props.text.as_deref().unwrap_or_default());
        write!(
            f,
            r#"<div class="container py-3 px-lg-5 py-lg-5"><div role="alert"><strong>Ad</strong><a href="{href}" rel="nofollow">{text}</a></div></div>"#
        )
    }
}

/// Renders `props` to an HTML string.
#[must_use]
pub fn render_ad(props: &AdProps) -> String {
    Ad::new(props).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_link_inside_alert() {
        let html = render_ad(&AdProps::new("/product/2ZYFJ3GM2N", "Hairdryer for sale"));
        assert_eq!(
            html,
            r#"<div class="container py-3 px-lg-5 py-lg-5"><div role="alert"><strong>Ad</strong><a href="/product/2ZYFJ3GM2N" rel="nofollow">Hairdryer for sale</a></div></div>"#
        );
    }

    #[test]
    fn missing_props_render_empty() {
        let html = render_ad(&AdProps::default());
        assert!(html.contains(r#"<a href="" rel="nofollow"></a>"#), "{html}");
    }

    #[test]
    fn escapes_markup_in_text_and_href() {
        let html = render_ad(&AdProps::new(
            r#"/search?q="x"&page=2"#,
            "<b>50% off</b> & more",
        ));
        assert!(html.contains(r#"href="/search?q=&quot;x&quot;&amp;page=2""#), "{html}");
        assert!(html.contains("&lt;b&gt;50% off&lt;/b&gt; &amp; more"), "{html}");
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn props_deserialize_with_missing_fields() {
        let props: AdProps = serde_json::from_str(r#"{"text":"Sale"}"#).unwrap();
        assert_eq!(props.redirect_url, None);
        assert_eq!(props.text.as_deref(), Some("Sale"));
    }
}
