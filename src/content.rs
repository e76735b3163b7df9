//! Static page content. Rendered by the section components and reused for
//! page metadata.

use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::{json, Value};

pub const SITE_URL: &str = "https://www.vmulinge.dev";
pub const OWNER_NAME: &str = "Victor Mulinge";
pub const OWNER_TITLE: &str = "Full Stack Developer";
pub const OWNER_EMAIL: &str = "munyaomulinge@protonmail.com";
pub const OWNER_PHONE: &str = "+254722253660";
pub const OWNER_SUMMARY: &str = "Full Stack Developer crafting responsive mobile & web apps with Flutter, Angular, React & modern JS.";
pub const SITE_DESCRIPTION: &str = "Full Stack Developer with 4+ years crafting responsive mobile & web apps with Flutter, Angular, React & modern JS. Expert in cross-platform development, UI/UX optimization, and RESTful APIs.";
pub const SITE_KEYWORDS: &str = "Full Stack Developer, Flutter, Angular, React, Dart, TypeScript, Mobile Development, Web Development, Kenya, Cross-platform";
pub const TWITTER_HANDLE: &str = "@MunYeahOh";
pub const OG_IMAGE: &str = "/og-image.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BlogTeaser {
    pub title: &'static str,
    pub summary: &'static str,
    /// `None` until the post is published.
    pub date: Option<&'static str>,
    pub link: Option<&'static str>,
}

impl BlogTeaser {
    /// `2024-05-12` -> `May 12, 2024`; unparseable dates are shown as written.
    pub fn display_date(&self) -> String {
        let Some(date) = self.date else {
            return "Coming soon".to_string();
        };
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| date.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub show_in_nav: bool,
}

impl SocialLink {
    /// Opens in a new tab. `mailto:` links hand off to the mail client instead.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Anchors shown in the navbar and footer, in page order.
pub const NAV_SECTIONS: &[Section] = &[
    Section { id: "skills", label: "Skills" },
    Section { id: "experience", label: "Experience" },
    Section { id: "projects", label: "Projects" },
    Section { id: "contact", label: "Contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/MunyaoMulinge",
        icon: "devicon-github-plain",
        show_in_nav: true,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/victormulinge",
        icon: "devicon-linkedin-plain",
        show_in_nav: true,
    },
    SocialLink {
        label: "X (Twitter)",
        href: "https://twitter.com/MunYeahOh",
        icon: "devicon-twitter-original",
        show_in_nav: false,
    },
    SocialLink {
        label: "Email",
        href: "mailto:munyaomulinge@protonmail.com",
        icon: "extra-email",
        show_in_nav: true,
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Spring Boot", level: SkillLevel::Advanced },
    Skill { name: "Angular", level: SkillLevel::Advanced },
    Skill { name: "React", level: SkillLevel::Advanced },
    Skill { name: "PHP", level: SkillLevel::Advanced },
    Skill { name: "Flutter", level: SkillLevel::Intermediate },
    Skill { name: "MySQL", level: SkillLevel::Advanced },
    Skill { name: "TypeScript", level: SkillLevel::Advanced },
    Skill { name: "Tailwind CSS", level: SkillLevel::Intermediate },
];

pub const EXPERIENCE: &[Job] = &[
    Job {
        title: "Full Stack Developer",
        company: "Tangazoletu Limited",
        period: "2023 - Present",
        description: "Developed and maintained web applications using Spring Boot, Angular, and MySQL. Implemented new features and improved application performance.",
        tech: &["Spring Boot", "Angular", "MySQL", "TypeScript"],
    },
    Job {
        title: "Software Developer",
        company: "Freelance",
        period: "2022 - 2023",
        description: "Built responsive web applications using React and PHP. Collaborated with the design team to implement user-friendly interfaces.",
        tech: &["React", "PHP", "MySQL", "JavaScript"],
    },
];

pub const EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Science in Computer Science",
    school: "Multimedia University of Kenya",
    period: "2018 - 2022",
    description: "Focused on software engineering, database management, and web development.",
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        description: "A full-stack e-commerce platform with user authentication, product management, and payment integration.",
        tech: &["React", "Spring Boot", "MySQL"],
        link: "https://github.com/MunyaoMulinge",
    },
    Project {
        title: "Task Management App",
        description: "A mobile application for task management and team collaboration built with Flutter.",
        tech: &["Flutter", "Firebase"],
        link: "https://github.com/MunyaoMulinge",
    },
    Project {
        title: "Portfolio Website",
        description: "This site: server-rendered and hydrated with Leptos, featuring dark mode and a relayed contact form.",
        tech: &["Rust", "Leptos", "Tailwind"],
        link: "https://github.com/MunyaoMulinge",
    },
];

/// Placeholder entries until real quotes are collected.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Testimonial coming soon.",
        author: "Client Name",
        role: "Position, Company",
    },
    Testimonial {
        quote: "Testimonial coming soon.",
        author: "Client Name",
        role: "Position, Company",
    },
];

pub const BLOG_TEASERS: &[BlogTeaser] = &[
    BlogTeaser {
        title: "Blog post coming soon",
        summary: "Articles on web and mobile development are on the way.",
        date: None,
        link: None,
    },
    BlogTeaser {
        title: "Blog post coming soon",
        summary: "Articles on web and mobile development are on the way.",
        date: None,
        link: None,
    },
];

/// Year the site was built, shown in the footer copyright line.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .expect("build script writes an RFC 3339 timestamp")
        .year()
}

/// schema.org `Person` document embedded in the page head.
pub fn person_json_ld() -> Value {
    let same_as = SOCIAL_LINKS
        .iter()
        .filter(|l| l.href.starts_with("https://"))
        .map(|l| l.href)
        .collect::<Vec<_>>();
    let knows_about = SKILLS.iter().map(|s| s.name).collect::<Vec<_>>();
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": OWNER_NAME,
        "jobTitle": OWNER_TITLE,
        "description": OWNER_SUMMARY,
        "url": SITE_URL,
        "email": OWNER_EMAIL,
        "telephone": OWNER_PHONE,
        "sameAs": same_as,
        "knowsAbout": knows_about,
        "alumniOf": {
            "@type": "CollegeOrUniversity",
            "name": EDUCATION[0].school,
        },
        "worksFor": {
            "@type": "Organization",
            "name": EXPERIENCE[0].company,
        },
    })
}
