//! Category taxonomy normalization.
//!
//! The backend tags games with an open-ended set of raw category strings.
//! A small closed set of tags (`ball`, `virtual`, `fun`) is collapsed into
//! the single synthetic display category `other`; every remaining tag is an
//! ordinary category emitted verbatim. Membership tests are
//! case-insensitive, but ordinary categories keep the case they arrived in.

use std::collections::BTreeSet;

use crate::api::Game;

/// Raw tags collapsed into the synthetic `other` category
const GROUPED_TAGS: &[&str] = &["ball", "virtual", "fun"];

/// Name of the synthetic display category
pub const OTHER_CATEGORY: &str = "other";

/// Selected-category sentinel meaning "no filter applied"
pub const ALL_CATEGORIES: &str = "all";

/// True iff the tag belongs to the fixed grouped set
pub fn is_grouped_tag(tag: &str) -> bool {
    GROUPED_TAGS.iter().any(|g| tag.eq_ignore_ascii_case(g))
}

/// Display category for a raw tag: `other` if grouped, else the tag unchanged
pub fn display_name_for(tag: &str) -> &str {
    if is_grouped_tag(tag) {
        OTHER_CATEGORY
    } else {
        tag
    }
}

/// Whether a game belongs to a display category.
///
/// `other` matches any game carrying a grouped tag. Every ordinary category
/// matches by exact verbatim containment in the game's raw tag set; no
/// grouping or case folding is applied. A game with no tags matches nothing.
pub fn game_matches_category(game: &Game, category: &str) -> bool {
    if category == OTHER_CATEGORY {
        game.categories.iter().any(|tag| is_grouped_tag(tag))
    } else {
        game.categories.iter().any(|tag| tag == category)
    }
}

/// Derive the ordered display taxonomy for a game list.
///
/// The result is the set of ordinary categories present in the list, plus
/// `other` iff at least one game carries a grouped tag. Sorted lexically
/// with `other` forced last.
pub fn display_categories(games: &[Game]) -> Vec<String> {
    let mut categories: BTreeSet<String> = BTreeSet::new();

    for game in games {
        for tag in &game.categories {
            categories.insert(display_name_for(tag).to_string());
        }
    }

    let has_other = categories.remove(OTHER_CATEGORY);
    let mut ordered: Vec<String> = categories.into_iter().collect();
    if has_other {
        ordered.push(OTHER_CATEGORY.to_string());
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, categories: &[&str]) -> Game {
        Game {
            id: id.to_string(),
            name: id.to_string(),
            image: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn grouped_membership_is_case_insensitive() {
        assert!(is_grouped_tag("ball"));
        assert!(is_grouped_tag("Ball"));
        assert!(is_grouped_tag("VIRTUAL"));
        assert!(is_grouped_tag("fun"));
        assert!(!is_grouped_tag("slots"));
        assert!(!is_grouped_tag(""));
    }

    #[test]
    fn display_name_preserves_ordinary_case() {
        assert_eq!(display_name_for("Slots"), "Slots");
        assert_eq!(display_name_for("fun"), OTHER_CATEGORY);
        assert_eq!(display_name_for("FUN"), OTHER_CATEGORY);
    }

    #[test]
    fn other_matches_any_grouped_tag() {
        let g = game("g1", &["slots", "Virtual"]);
        assert!(game_matches_category(&g, OTHER_CATEGORY));

        let g = game("g2", &["slots"]);
        assert!(!game_matches_category(&g, OTHER_CATEGORY));
    }

    #[test]
    fn ordinary_match_is_verbatim() {
        let g = game("g1", &["Slots"]);
        assert!(game_matches_category(&g, "Slots"));
        // No case folding for ordinary categories
        assert!(!game_matches_category(&g, "slots"));
    }

    #[test]
    fn untagged_game_matches_nothing() {
        let g = game("g1", &[]);
        assert!(!game_matches_category(&g, OTHER_CATEGORY));
        assert!(!game_matches_category(&g, "slots"));
    }

    #[test]
    fn taxonomy_sorts_lexically_with_other_last() {
        let games = vec![
            game("g1", &["slot"]),
            game("g2", &["ball"]),
            game("g3", &["virtual"]),
            game("g4", &["fun"]),
        ];
        assert_eq!(display_categories(&games), vec!["slot", "other"]);

        let games = vec![
            game("g1", &["roulette", "fun"]),
            game("g2", &["blackjack"]),
            game("g3", &["poker", "ball"]),
        ];
        assert_eq!(
            display_categories(&games),
            vec!["blackjack", "poker", "roulette", "other"]
        );
    }

    #[test]
    fn taxonomy_omits_other_without_grouped_tags() {
        let games = vec![game("g1", &["slots"]), game("g2", &["new", "slots"])];
        assert_eq!(display_categories(&games), vec!["new", "slots"]);
    }

    #[test]
    fn taxonomy_of_empty_list_is_empty() {
        assert!(display_categories(&[]).is_empty());
    }
}
