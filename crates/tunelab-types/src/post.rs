//! Post metadata for the hosting site's article listing.
//!
//! The widgets are embedded in articles; the site supplies an ordered list
//! of post records which a client-side category filter narrows. This is
//! pure filtering and display logic with no I/O.

use serde::{Deserialize, Serialize};

/// Fixed category set the filter matches against
pub const CATEGORIES: &[&str] = &["control", "signals", "simulation"];

/// One article in the site listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Pre-formatted publication date
    pub date: String,
    /// Reading-time estimate in minutes
    pub reading_minutes: u32,
    pub category: Option<String>,
}

/// Result of filtering a post listing
#[derive(Debug, Clone, PartialEq)]
pub struct PostListing<'a> {
    /// First matching post when featured mode is on
    pub featured: Option<&'a PostMeta>,
    /// Remaining matches in input order
    pub rest: Vec<&'a PostMeta>,
}

/// Narrow `posts` to those matching `category` exactly, preserving order.
///
/// `None` keeps every post. Unknown categories simply match nothing; the
/// caller's UI only offers entries from [`CATEGORIES`].
pub fn filter_posts<'a>(posts: &'a [PostMeta], category: Option<&str>) -> Vec<&'a PostMeta> {
    posts
        .iter()
        .filter(|p| match category {
            None => true,
            Some(c) => p.category.as_deref() == Some(c),
        })
        .collect()
}

/// Filter and optionally pin the first match as featured.
pub fn list_posts<'a>(
    posts: &'a [PostMeta],
    category: Option<&str>,
    pin_featured: bool,
) -> PostListing<'a> {
    let mut matches = filter_posts(posts, category);
    let featured = if pin_featured && !matches.is_empty() {
        Some(matches.remove(0))
    } else {
        None
    };
    PostListing {
        featured,
        rest: matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<PostMeta> {
        let mk = |slug: &str, category: Option<&str>| PostMeta {
            slug: slug.into(),
            title: slug.to_uppercase(),
            description: String::new(),
            date: "2024-01-01".into(),
            reading_minutes: 5,
            category: category.map(String::from),
        };
        vec![
            mk("pid-intro", Some("control")),
            mk("fir-basics", Some("signals")),
            mk("oven-tuning", Some("control")),
            mk("untagged", None),
        ]
    }

    #[test]
    fn test_filter_exact_match() {
        let posts = sample_posts();
        let control = filter_posts(&posts, Some("control"));
        assert_eq!(control.len(), 2);
        assert_eq!(control[0].slug, "pid-intro");
        assert_eq!(control[1].slug, "oven-tuning");
    }

    #[test]
    fn test_filter_none_keeps_all() {
        let posts = sample_posts();
        assert_eq!(filter_posts(&posts, None).len(), 4);
    }

    #[test]
    fn test_featured_pinning() {
        let posts = sample_posts();
        let listing = list_posts(&posts, Some("control"), true);
        assert_eq!(listing.featured.unwrap().slug, "pid-intro");
        assert_eq!(listing.rest.len(), 1);
        assert_eq!(listing.rest[0].slug, "oven-tuning");
    }

    #[test]
    fn test_featured_off() {
        let posts = sample_posts();
        let listing = list_posts(&posts, Some("signals"), false);
        assert!(listing.featured.is_none());
        assert_eq!(listing.rest.len(), 1);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let posts = sample_posts();
        let listing = list_posts(&posts, Some("cooking"), true);
        assert!(listing.featured.is_none());
        assert!(listing.rest.is_empty());
    }
}
