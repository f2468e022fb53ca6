// src/domain/slug.rs
use chrono::Utc;

pub const MAX_SLUG_LEN: usize = 255;
/// Room kept free after the base for a `-N` collision suffix.
const MAX_BASE_LEN: usize = 240;

/// Cuts `base` to at most [`MAX_BASE_LEN`] bytes on a char boundary and drops
/// the hyphens left dangling by the cut.
fn clip_base(base: &str) -> &str {
    if base.len() <= MAX_BASE_LEN {
        return base;
    }
    let mut end = MAX_BASE_LEN;
    while !base.is_char_boundary(end) {
        end -= 1;
    }
    base[..end].trim_end_matches('-')
}

/// Yields `base`, `base-1`, `base-2`, ... for collision resolution.
pub fn slug_candidates(base: &str, fallback_prefix: &str) -> impl Iterator<Item = String> {
    let base = clip_base(base);
    let base = if base.is_empty() {
        format!("{fallback_prefix}-{}", Utc::now().timestamp())
    } else {
        base.to_owned()
    };

    std::iter::once(base.clone()).chain((1u64..).map(move |n| format!("{base}-{n}")))
}

/// Lowercase ASCII letters, digits and single inner hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_append_counter() {
        let got: Vec<_> = slug_candidates("pancakes", "recipe").take(3).collect();
        assert_eq!(got, vec!["pancakes", "pancakes-1", "pancakes-2"]);
    }

    #[test]
    fn empty_base_falls_back_to_prefix() {
        let first = slug_candidates("", "recipe").next().unwrap();
        assert!(first.starts_with("recipe-"));
    }

    #[test]
    fn long_bases_leave_room_for_the_counter() {
        let base = "zhong-".repeat(100);
        let base = base.trim_end_matches('-');
        let mut candidates = slug_candidates(base, "recipe");

        let first = candidates.next().unwrap();
        assert!(first.len() <= MAX_BASE_LEN);
        assert!(!first.ends_with('-'));
        assert!(is_valid_slug(&first));
        assert!(is_valid_slug(&candidates.nth(998).unwrap()));
    }

    #[test]
    fn clipping_respects_char_boundaries() {
        let base = "é".repeat(200);
        assert!(clip_base(&base).len() <= MAX_BASE_LEN);
        assert!(clip_base(&base).chars().all(|c| c == 'é'));
    }

    #[test]
    fn slug_shape_is_checked() {
        assert!(is_valid_slug("apple-pie-2"));
        assert!(!is_valid_slug("Apple"));
        assert!(!is_valid_slug("-apple"));
        assert!(!is_valid_slug("apple--pie"));
        assert!(!is_valid_slug(""));
    }
}
