//! Hard-coded display data rendered by the page sections.
//!
//! DESIGN
//! ======
//! Every list here is a fixed-size array so section counts are part of the
//! type. Components iterate these directly; nothing mutates them.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Icons drawn by `components::icon::IconSvg`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Moon,
    Sun,
    Menu,
    Close,
    Github,
    Linkedin,
    Mail,
    MapPin,
    Send,
    Code,
    Palette,
    Smartphone,
}

/// Named page regions reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// Navigation order, top to bottom.
    pub const ALL: [Section; 4] = [Section::About, Section::Education, Section::Projects, Section::Contact];

    /// DOM `id` of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "À propos",
            Section::Education => "Formation",
            Section::Projects => "Projets",
            Section::Contact => "Contact",
        }
    }

    /// Look up a section by its anchor id. Exact match only.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Skill pill shown next to the role title in the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// Modifier suffix for the `skill-badge--*` gradient class.
    pub gradient: &'static str,
}

pub const SKILLS: [Skill; 3] = [
    Skill { name: "Frontend", icon: Icon::Code, gradient: "purple-pink" },
    Skill { name: "UI/UX", icon: Icon::Palette, gradient: "blue-purple" },
    Skill { name: "Mobile", icon: Icon::Smartphone, gradient: "green-blue" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub school: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

const IIM_DESCRIPTION: &str = "Poursuite de mon cursus en développement web avec un approfondissement des \
compétences techniques. Cette année marque une étape clé vers l'intégration d'un Master Développeur \
Fullstack en 2025, dans le but de me spécialiser dans la conception d'applications web complètes et \
performantes.";

/// Education timeline, most recent first.
pub const EDUCATION: [EducationEntry; 4] = [
    EducationEntry {
        period: "2025 - 2027",
        title: "Master Développement Fullstack",
        school: "IIM Digital School Paris",
        description: IIM_DESCRIPTION,
        image: "/iim.png",
    },
    EducationEntry {
        period: "2024 - 2025",
        title: "Bachelor Développement Web",
        school: "IIM Digital School Paris",
        description: IIM_DESCRIPTION,
        image: "/iim.png",
    },
    EducationEntry {
        period: "2022 - 2024",
        title: "Bachelor Développement Web",
        school: "Supdeweb",
        description: "Formation pluridisciplinaire axée sur les bases du développement web (front-end & \
back-end), les fondamentaux DevOps et la sécurité informatique. J'y ai également participé à plusieurs \
hackathons en équipe, mêlant développement, marketing et communication, pour créer des projets complets \
(sites web, applications). Expérience pratique renforcée par l'utilisation de WordPress pour un projet \
concret pour un vrai client.",
        image: "/sdw.png",
    },
    EducationEntry {
        period: "2018 - 2022",
        title: "Licence LLCER Coréen",
        school: "Institut National des Langues et Civilisations Orientales (INALCO)",
        description: "L'apprentissage de la langue, de la culture et de l'histoire coréennes m'a permis \
de développer une forte rigueur syntaxique et une capacité d'analyse fine, des atouts précieux que je \
mobilise aujourd'hui dans l'apprentissage de nouveaux langages de programmation.",
        image: "/inalco.png",
    },
];

pub const PROJECT_COUNT: usize = 6;
pub const PROJECT_DESCRIPTION: &str = "Application web moderne développée avec les dernières technologies. \
Interface intuitive et expérience utilisateur optimisée.";
pub const PROJECT_TECH: [&str; 3] = ["React", "TypeScript", "Tailwind"];

/// Placeholder project card. Only the 1-based index varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub index: usize,
}

impl ProjectCard {
    pub fn title(self) -> String {
        format!("Projet Innovant {}", self.index)
    }

    /// Large monogram drawn over the card banner.
    pub fn badge(self) -> String {
        format!("P{}", self.index)
    }

    pub fn description(self) -> &'static str {
        PROJECT_DESCRIPTION
    }

    pub fn tech(self) -> &'static [&'static str] {
        &PROJECT_TECH
    }
}

/// The six placeholder cards, indexed 1 through 6.
pub fn projects() -> [ProjectCard; PROJECT_COUNT] {
    std::array::from_fn(|i| ProjectCard { index: i + 1 })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
    /// Modifier suffix for the `social-link--*` hover class.
    pub hover: &'static str,
}

pub const EMAIL: &str = "mahalia.pires@gmail.com";
pub const LOCATION: &str = "Paris, France";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mahalia-pires-330593223/";
pub const GITHUB_URL: &str = "https://github.com/mahanunu";

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "LinkedIn", icon: Icon::Linkedin, href: LINKEDIN_URL, hover: "blue" },
    SocialLink { label: "GitHub", icon: Icon::Github, href: GITHUB_URL, hover: "gray" },
    SocialLink { label: "Email", icon: Icon::Mail, href: "mailto:mahalia.pires@gmail.com", hover: "purple" },
];

impl SocialLink {
    /// External profiles open in a new tab; `mailto:` stays in place.
    pub fn is_external(self) -> bool {
        self.href.starts_with("http")
    }
}
