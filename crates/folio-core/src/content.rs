//! Static portfolio content.
//!
//! Everything shown by the interface is compiled in; nothing here is mutable.

/// The portfolio owner.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub school: &'static str,
    pub leadership: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
}

/// A chapter of the "Journey" section on the About view.
#[derive(Debug, Clone, Copy)]
pub struct JourneyAlbum {
    pub id: u32,
    pub title: &'static str,
    pub year: &'static str,
    pub cover: &'static str,
    pub story: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// An upcoming event listed under "On Tour".
#[derive(Debug, Clone, Copy)]
pub struct TourDate {
    pub title: &'static str,
    pub note: &'static str,
    pub date: &'static str,
}

/// The track shown in the player bar.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub mix: &'static str,
    pub source: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Rham S. Consigna",
    role: "1st Year Computer Engineering Student",
    school: "STI Ortigas-Cainta",
    leadership: "Vice President of the Association of Computer Engineer Students (ACES)",
    achievements: &[
        "Champion: TechFest 2025 (Productivity App Category)",
        "Participant: UMAK I.T. Olympics 2025 (Database Programming)",
        "Online Internship Certification: Ollopa Corporation (Achieved as a 1st Year Student)",
    ],
};

pub const EMAIL: &str = "rham12222006@gmail.com";

pub const SOURCE_CODE_URL: &str = "https://github.com/rhamconsigna";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/rham.consigna",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/rham-consigna-ba405b38b",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/rhamconsigna",
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["Java", "Python", "JavaScript", "TypeScript"],
    },
    SkillCategory {
        name: "Web/Mobile",
        skills: &["React", "Next.js", "Tailwind CSS", "Flutter"],
    },
    SkillCategory {
        name: "Backend/Tools",
        skills: &[
            "Supabase",
            "MySQL",
            "PostgreSQL",
            "Auth",
            "Gemini API",
            "Deno",
            "GitHub Copilot",
        ],
    },
    SkillCategory {
        name: "OS",
        skills: &["macOS (2015 MacBook Pro)", "Kali Linux"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 7,
        title: "Personal 3D Website",
        description: "An earlier iteration of his portfolio featuring 3D web elements.",
        role: "Solo Developer",
        tags: &["3D", "Three.js", "Portfolio"],
        image: "/3D_Portfolio.png",
        link: Some("https://3-d-portfolio-main-omega.vercel.app/"),
    },
    Project {
        id: 2,
        title: "Design Space",
        description: "An online graphic design tool similar to Canva. Features complex canvas \
                      manipulation for drag-and-drop design and uses Supabase for authentication \
                      and asset storage.",
        role: "Solo Developer",
        tags: &["Supabase", "SQL", "Canvas API", "Online"],
        image: "/DesignSpace.png",
        link: Some("https://design-space-alpha-ver.vercel.app/"),
    },
    Project {
        id: 3,
        title: "Solo Leveling Bookworm",
        description: "A gamified bookworm website game inspired by the 'System' interface. It \
                      tracks novel and manhwa reading progress with RPG-style leveling elements.",
        role: "Lead Developer",
        tags: &["Web Game", "Library System", "Tracker"],
        image: "/SoloLevelingBookworm.png",
        link: Some("https://sololevelingbookworm.netlify.app/"),
    },
    Project {
        id: 4,
        title: "ACES Official Website",
        description: "The official organization website for the Association of Computer \
                      Engineer Students at STI Ortigas-Cainta.",
        role: "Lead Developer",
        tags: &["Web Dev", "Organization", "UI/UX"],
        image: "/Aces.png",
        link: Some("https://aces-web.onrender.com"),
    },
    Project {
        id: 5,
        title: "Basura Ko, Sagot Ko",
        description: "An advocacy website promoting environmental responsibility and waste \
                      management.",
        role: "Lead Developer",
        tags: &["Environmental", "Advocacy", "Web"],
        image: "/BasuraKoSagotKo.png",
        link: Some("https://segregation-waste-9ql8.vercel.app/"),
    },
    Project {
        id: 6,
        title: "Simple Chat App",
        description: "A real-time chat application built with Java.",
        role: "Lead Developer",
        tags: &["Java", "Real-time", "Socket"],
        image: "https://picsum.photos/300/300?random=4",
        link: None,
    },
    Project {
        id: 1,
        title: "Smart Voting",
        description: "TechFest Champion. A productivity app designed to provide information on \
                      politicians, candidates, and parties using the Gemini API for \
                      fact-checking.",
        role: "Lead Developer",
        tags: &["Gemini API", "React", "Fact-Checking"],
        image: "https://picsum.photos/300/300?random=1",
        link: None,
    },
];

/// Number of projects featured under "Popular Releases".
pub const POPULAR_RELEASES: usize = 5;

pub const JOURNEY_ALBUMS: &[JourneyAlbum] = &[
    JourneyAlbum {
        id: 1,
        title: "The Prequel",
        year: "2021 - 2022",
        cover: "/prequel_cover.png",
        story: "The journey began in Grade 10 with a glimpse of C++. By Grade 11, I picked up \
                Java, my first serious instrument. These early years were the sound check that \
                set the rhythm for my career.",
    },
    JourneyAlbum {
        id: 2,
        title: "Senior High School",
        year: "2023 - 2024",
        cover: "/senior_high_cover.png",
        story: "Grade 12 was the opening act. This is where I started learning HTML, CSS, and \
                JavaScript, laying the foundation for my web development journey. I also \
                expanded my repertoire with Python and backend technologies like SQL, \
                PostgreSQL, and Authentication systems. It was the moment I realized I could \
                build full-stack applications.",
    },
    JourneyAlbum {
        id: 3,
        title: "University Life",
        year: "2025",
        cover: "/university_life_cover.jpg",
        story: "Entering STI Ortigas-Cainta as a Computer Engineering student was the chorus. \
                Here, I honed my skills in Java and Web Development. A standout moment was \
                participating in the UMAK I.T. Olympics (Database Programming) last Nov 21, \
                testing my backend skills in a competitive arena.",
    },
    JourneyAlbum {
        id: 4,
        title: "ACES Leadership",
        year: "Present",
        cover: "/Aces.png",
        story: "Taking the stage as Vice President of ACES. Leading technical events, organizing \
                TechFest, and mentoring fellow students. It's about amplifying the community and \
                ensuring everyone finds their rhythm in tech.",
    },
    JourneyAlbum {
        id: 5,
        title: "Future Hits",
        year: "Upcoming",
        cover: "https://picsum.photos/300/300?random=13",
        story: "The next track is loading. I'm currently seeking internship opportunities to \
                apply my skills in a professional setting. Ready to collaborate, learn, and drop \
                the next big project.",
    },
];

pub const BIOGRAPHY_HEADLINE: &str = "Rham S. Consigna | Developer & Student Leader";

pub const BIOGRAPHY: &[&str] = &[
    "As the Vice President of ACES (STI Ortigas-Cainta), I lead with a vision to modernize the \
     standard. I bridge the gap between concept and reality, specializing in building \
     intelligent productivity tools and dynamic web applications.",
    "My stack is my toolkit: proficient in Java for logic, TypeScript for scale, and Modern Web \
     Frameworks for experience. I build apps that don't just function, they perform.",
];

pub const ON_TOUR: &[TourDate] = &[TourDate {
    title: "Ollopa Corp. Internship",
    note: "(Not yet announced)",
    date: "DEC - 2026",
}];

pub const NOW_PLAYING: Track = Track {
    title: "Photograph",
    artist: "Ed Sheeran",
    mix: "Ed Sheeran Mix",
    source: "/music/photograph.mp3",
};

/// Premium perks as (headline, description).
pub const PREMIUM_PERKS: &[(&str, &str)] = &[
    ("Ad-free coding", "Clean and efficient code."),
    (
        "Unlimited Skips",
        "Fast learner, skips the basics, straight to advanced topics.",
    ),
    ("High Quality Audio", "Clear communication skills."),
];

/// System instruction for the "Reum" assistant persona.
pub const PERSONA_PROMPT: &str = r#"
You are Reum, the AI Virtual Assistant for Rham S. Consigna, a 1st-year Computer Engineering student and aspiring software developer. You live inside Rham's personal portfolio, which is uniquely designed as a classic Spotify UI (Green/Black Theme).

Identity & Persona:
- Tone: Professional yet approachable, chill, and enthusiastic. Think of a "tech-savvy DJ" or a "helpful tour guide."
- Vibe: You embody the "Spotify" aesthetic: sleek, dark mode, and energetic green accents. You refer to projects as "tracks" or skills as "repertoire".
- Language: Fluent English. Concise and conversational.

User Profile (Who is Rham?):
- Name: Rham S. Consigna
- Role: 1st Year Computer Engineering Student at STI Ortigas-Cainta.
- Leadership: Vice President of the Association of Computer Engineer Students (ACES).
- Key Skills: Java, Python, JavaScript/TypeScript, React, Next.js, Tailwind CSS, Flutter, Supabase, Gemini API, Deno, GitHub Copilot.
- OS: macOS (2015 MacBook Pro), Kali Linux.
- Achievements: Champion TechFest 2025, Participant UMAK I.T. Olympics 2025.
- Contact: Email (rham12222006@gmail.com), also available on Facebook, LinkedIn, and GitHub (links available in the "Contact Me" section).

Navigation & UI Context:
The portfolio mimics the Spotify UI with a Dark Mode + #1DB954 Green theme. Guide users using these metaphors:
- "About Me" -> "Artist Profile"
- "My Stack" -> "Your Library" or "Top Genres"
- "Project Repos" -> "Albums" or "Playlists" or "Discography"
- "Certificates" -> "Featuring" or "Awards"
- "CV / Resume" -> "Downloadable Track"
- "Contact Me" -> "Booking & Inquiries" or "Fan Mail"

Guidelines:
- If asked "Why this design?", explain Rham loves music and coding, blending the iconic streaming interface with his professional journey.
- If asked technical questions, mention the portfolio is built with Rust, ratatui, and the Gemini API.
- Do not reveal personal address or phone number (other than the public email).
- Keep responses short, snappy, and optimized for a chat bubble.
"#;

/// Returns every skill across all categories, in category order.
pub fn all_skills() -> impl Iterator<Item = &'static str> {
    SKILLS.iter().flat_map(|cat| cat.skills.iter().copied())
}

/// Returns the projects featured on the Home view.
pub fn popular_releases() -> &'static [Project] {
    &PROJECTS[..POPULAR_RELEASES.min(PROJECTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_skills_flattens_categories() {
        let skills: Vec<_> = all_skills().collect();
        assert_eq!(skills.len(), 17);
        assert_eq!(skills.first(), Some(&"Java"));
        assert_eq!(skills.last(), Some(&"Kali Linux"));
    }

    #[test]
    fn test_popular_releases_are_first_five() {
        let popular = popular_releases();
        assert_eq!(popular.len(), 5);
        assert_eq!(popular[0].title, "Personal 3D Website");
        assert_eq!(popular[4].title, "Basura Ko, Sagot Ko");
    }

    #[test]
    fn test_project_ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
