//! Site Content
//!
//! Static copy for the Home, About, Skills and Contact pages.

use serde::Serialize;

/// Owner profile shown across the site
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub about: &'static [&'static str],
}

/// A titled group of skills on the Skills page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// A way to get in touch
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Your Name",
    headline: "Full-Stack Developer",
    intro: "I build web applications end to end, from typed front-ends to the services behind them.",
    about: &[
        "I enjoy turning rough product ideas into small, dependable tools that people actually use.",
        "Most of my recent work pairs Vue and TypeScript on the client with Node.js services and document databases.",
        "Outside of client work I build side projects around wellbeing and everyday logistics.",
    ],
};

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        skills: &["Vue", "TypeScript", "Tailwind", "HTML", "CSS"],
    },
    SkillGroup {
        title: "Backend",
        skills: &["Node.js", "Express", "REST APIs"],
    },
    SkillGroup {
        title: "Data",
        skills: &["MongoDB", "PostgreSQL"],
    },
    SkillGroup {
        title: "Tooling",
        skills: &["Git", "Docker", "Vite"],
    },
];

pub static CONTACT: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:you@example.com",
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/yourusername",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/yourusername",
    },
];
