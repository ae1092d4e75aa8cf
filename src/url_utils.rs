//! URL Utility Functions
//!
//! Post identity parsing and resolution of the embedded post frame address.

use url::Url;

use crate::patterns::POST_PATH;
use crate::result::PostId;

/// Parse an absolute `http(s)` URL with a host.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }
    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Resolve a frame `src` against `base`.
///
/// Absolute sources are returned as-is. Protocol-relative and relative
/// sources are joined onto `base`. Returns `None` for blank sources or an
/// unusable base.
///
/// # Examples
/// ```
/// use se_extract::url_utils::resolve_frame_url;
///
/// assert_eq!(
///     resolve_frame_url("/PostView.naver?blogId=a&logNo=1", "https://blog.naver.com").as_deref(),
///     Some("https://blog.naver.com/PostView.naver?blogId=a&logNo=1")
/// );
/// ```
#[must_use]
pub fn resolve_frame_url(src: &str, base: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }

    if parse_absolute(src).is_some() {
        return Some(src.to_string());
    }

    let base = parse_absolute(base)?;
    base.join(src).ok().map(|url| url.to_string())
}

/// Extract the blog id and post number from a post URL.
///
/// Accepts both the path form (`blog.naver.com/<id>/<no>`) and the frame
/// form (`PostView.naver?blogId=<id>&logNo=<no>`).
///
/// # Examples
/// ```
/// use se_extract::url_utils::parse_post_id;
///
/// let post = parse_post_id("https://blog.naver.com/hot9676/223749658381");
/// assert_eq!(post.map(|p| p.log_no).as_deref(), Some("223749658381"));
/// ```
#[must_use]
pub fn parse_post_id(url_str: &str) -> Option<PostId> {
    if let Some(caps) = POST_PATH.captures(url_str) {
        return Some(PostId {
            blog_id: caps[1].to_string(),
            log_no: caps[2].to_string(),
        });
    }

    let url = parse_absolute(url_str)?;
    let mut blog_id = None;
    let mut log_no = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "blogId" if !value.is_empty() => blog_id = Some(value.into_owned()),
            "logNo" if value.chars().all(|c| c.is_ascii_digit()) && !value.is_empty() => {
                log_no = Some(value.into_owned());
            }
            _ => {}
        }
    }

    Some(PostId {
        blog_id: blog_id?,
        log_no: log_no?,
    })
}
