//! Plain-text rendition of the whole portfolio ("Print Portfolio").

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::content;

/// Renders every section of the portfolio as plain text.
pub fn render_text() -> String {
    let mut out = String::new();
    let profile = &content::PROFILE;

    heading(&mut out, profile.name);
    let _ = writeln!(out, "{}", profile.role);
    let _ = writeln!(out, "{}", profile.school);
    let _ = writeln!(out, "{}", profile.leadership);
    let _ = writeln!(out, "{}", content::EMAIL);

    heading(&mut out, "About");
    let _ = writeln!(out, "{}\n", content::BIOGRAPHY_HEADLINE);
    for paragraph in content::BIOGRAPHY {
        let _ = writeln!(out, "{paragraph}\n");
    }
    for album in content::JOURNEY_ALBUMS {
        let _ = writeln!(out, "* {} ({})", album.title, album.year);
        let _ = writeln!(out, "  {}", album.story);
    }

    heading(&mut out, "Tech Stack");
    for category in content::SKILLS {
        let _ = writeln!(out, "{}: {}", category.name, category.skills.join(", "));
    }

    heading(&mut out, "Discography");
    for project in content::PROJECTS {
        let _ = writeln!(out, "* {} ({})", project.title, project.role);
        let _ = writeln!(out, "  {}", project.description);
        let _ = writeln!(out, "  Tags: {}", project.tags.join(", "));
        if let Some(link) = project.link {
            let _ = writeln!(out, "  {link}");
        }
    }

    heading(&mut out, "Awards");
    for achievement in profile.achievements {
        let _ = writeln!(out, "* {achievement}");
    }

    heading(&mut out, "On Tour");
    for date in content::ON_TOUR {
        let _ = writeln!(out, "* {} {} {}", date.date, date.title, date.note);
    }

    heading(&mut out, "Contact");
    for link in content::SOCIAL_LINKS {
        let _ = writeln!(out, "{}: {}", link.label, link.url);
    }

    out
}

fn heading(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

/// Writes [`render_text`] to `path`, creating parent directories.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_to(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create export dir {}", parent.display()))?;
    }
    fs::write(path, render_text()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "portfolio exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_covers_every_section() {
        let text = render_text();
        assert!(text.starts_with("Rham S. Consigna\n================\n"));
        for section in [
            "About",
            "Tech Stack",
            "Discography",
            "Awards",
            "On Tour",
            "Contact",
        ] {
            assert!(text.contains(&format!("\n{section}\n")), "missing {section}");
        }
        for project in content::PROJECTS {
            assert!(text.contains(project.title));
        }
    }

    #[test]
    fn test_write_to_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("portfolio.txt");
        write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_text());
    }
}
