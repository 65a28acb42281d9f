//! Client-side search over the static content.
//!
//! Filtering is case-insensitive substring containment applied to each group
//! independently. An empty query is not a filter: it switches the display to
//! the category-tile grid.

use crate::content::{self, Project};
use crate::router::ViewState;

/// A "Browse All" tile shown for an empty query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTile {
    pub title: &'static str,
    pub view: ViewState,
}

pub const CATEGORY_TILES: &[CategoryTile] = &[
    CategoryTile {
        title: "Discography",
        view: ViewState::Projects,
    },
    CategoryTile {
        title: "Tech Stack",
        view: ViewState::Stack,
    },
    CategoryTile {
        title: "Awards",
        view: ViewState::Certificates,
    },
    CategoryTile {
        title: "About Rham",
        view: ViewState::About,
    },
    CategoryTile {
        title: "Contact",
        view: ViewState::Contact,
    },
    CategoryTile {
        title: "CV",
        view: ViewState::Cv,
    },
];

pub const PROJECTS_SECTION: &str = "Songs (Projects)";
pub const SKILLS_SECTION: &str = "Skills";
pub const ACHIEVEMENTS_SECTION: &str = "Achievements";

/// What the search view should display for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// Empty query: show the category tiles.
    Browse,
    /// Filtered groups. Any of them may be empty.
    Results {
        projects: Vec<&'static Project>,
        skills: Vec<&'static str>,
        achievements: Vec<&'static str>,
    },
}

impl SearchView {
    /// Returns true when every result group is empty.
    ///
    /// Always false for `Browse`.
    pub fn is_empty_results(&self) -> bool {
        match self {
            SearchView::Browse => false,
            SearchView::Results {
                projects,
                skills,
                achievements,
            } => projects.is_empty() && skills.is_empty() && achievements.is_empty(),
        }
    }
}

/// Runs a query against the compiled-in content.
pub fn search(query: &str) -> SearchView {
    if query.is_empty() {
        return SearchView::Browse;
    }

    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let projects = content::PROJECTS
        .iter()
        .filter(|p| contains(p.title) || p.tags.iter().any(|t| contains(t)))
        .collect();
    let skills = content::all_skills().filter(|s| contains(s)).collect();
    let achievements = content::PROFILE
        .achievements
        .iter()
        .copied()
        .filter(|a| contains(a))
        .collect();

    SearchView::Results {
        projects,
        skills,
        achievements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(view: &SearchView) -> Vec<&'static str> {
        match view {
            SearchView::Results { projects, .. } => projects.iter().map(|p| p.title).collect(),
            SearchView::Browse => Vec::new(),
        }
    }

    #[test]
    fn test_empty_query_shows_browse_grid() {
        assert_eq!(search(""), SearchView::Browse);
    }

    #[test]
    fn test_java_matches_chat_app_by_tag() {
        let view = search("java");
        let titles = titles(&view);
        assert!(titles.contains(&"Simple Chat App"));
        assert!(!titles.contains(&"Design Space"));
        assert!(!titles.contains(&"Smart Voting"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(titles(&search("JAVA")), titles(&search("java")));

        let SearchView::Results { skills, .. } = search("JAVA") else {
            panic!("expected results");
        };
        // Java and JavaScript both contain the needle.
        assert_eq!(skills, vec!["Java", "JavaScript"]);
    }

    #[test]
    fn test_groups_filter_independently() {
        let SearchView::Results {
            projects,
            skills,
            achievements,
        } = search("gemini")
        else {
            panic!("expected results");
        };
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Smart Voting");
        assert_eq!(skills, vec!["Gemini API"]);
        assert!(achievements.is_empty());
    }

    #[test]
    fn test_achievements_are_searched() {
        let SearchView::Results { achievements, .. } = search("techfest") else {
            panic!("expected results");
        };
        assert_eq!(
            achievements,
            vec!["Champion: TechFest 2025 (Productivity App Category)"]
        );
    }

    #[test]
    fn test_no_match_yields_empty_results_not_browse() {
        let view = search("zzzz-nothing");
        assert!(matches!(view, SearchView::Results { .. }));
        assert!(view.is_empty_results());
    }

    #[test]
    fn test_tiles_cover_six_views() {
        let views: Vec<_> = CATEGORY_TILES.iter().map(|t| t.view).collect();
        assert_eq!(
            views,
            vec![
                ViewState::Projects,
                ViewState::Stack,
                ViewState::Certificates,
                ViewState::About,
                ViewState::Contact,
                ViewState::Cv,
            ]
        );
    }
}
