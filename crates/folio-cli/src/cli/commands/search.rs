//! Search from the command line.

use folio_core::search::{
    ACHIEVEMENTS_SECTION, CATEGORY_TILES, PROJECTS_SECTION, SKILLS_SECTION, SearchView, search,
};

pub fn run(query: &str) {
    match search(query) {
        SearchView::Browse => {
            println!("Browse All");
            for tile in CATEGORY_TILES {
                println!("  {:<14} folio --view {}", tile.title, tile.view);
            }
        }
        view @ SearchView::Results { .. } if view.is_empty_results() => {
            println!("No results found for \"{query}\"");
        }
        SearchView::Results {
            projects,
            skills,
            achievements,
        } => {
            if !projects.is_empty() {
                println!("{PROJECTS_SECTION}");
                for project in projects {
                    println!("  {} ({})", project.title, project.role);
                }
            }
            if !skills.is_empty() {
                println!("{SKILLS_SECTION}");
                println!("  {}", skills.join(", "));
            }
            if !achievements.is_empty() {
                println!("{ACHIEVEMENTS_SECTION}");
                for achievement in achievements {
                    println!("  {achievement}");
                }
            }
        }
    }
}
