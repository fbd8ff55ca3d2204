//! Page content
//!
//! Everything the portfolio shows, as static data. The UI crate renders these
//! values verbatim; nothing here is computed at runtime except the footer year.

/// Which inline icon a link or contact row uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Mail,
    LinkedIn,
    GitHub,
    Globe,
    Phone,
    Location,
}

/// Identity block shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub picture_url: &'static str,
    pub picture_alt: &'static str,
}

/// A round icon link in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Extra class for per-network styling
    pub class: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
    pub tooltip: &'static str,
}

impl SocialLink {
    /// Web links open in a new tab; `mailto:` and friends stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// In-page navigation anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub employer: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

impl Role {
    /// Employer, location and period on one line.
    pub fn summary_line(&self) -> String {
        format!("{} \u{2014} {} ({})", self.employer, self.location, self.period)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// One row of the contact grid. `href` is set when the value is a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: Option<&'static str>,
}

/// Section header data: anchor, kicker, title and reveal stagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMeta {
    pub id: &'static str,
    pub kicker: &'static str,
    pub title: &'static str,
    /// Stagger step for the reveal transition; 0 means no delay
    pub delay: u8,
}

pub const EMAIL: &str = "osamyelmasry@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/omarsamiiii";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/omar-el-masry-375083158";

pub const PROFILE: Profile = Profile {
    name: "Omar Samy Abdel-Salam Hafez El-Masry",
    short_name: "Omar El-Masry",
    tagline: "Senior Software Developer \u{2014} EDA performance, coverage DB optimization, and distributed regression automation",
    picture_url: "https://media.licdn.com/dms/image/v2/D4D03AQFLaFtfbFrn0Q/profile-displayphoto-shrink_800_800/profile-displayphoto-shrink_800_800/0/1723449862949?e=1761177600&v=beta&t=55tHtWOnwdP0s1zYGGsiTTc2YJWhej6zZiDEMjOwZjU",
    picture_alt: "Omar Samy",
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        class: "mail",
        href: "mailto:osamyelmasry@gmail.com",
        icon: IconKind::Mail,
        tooltip: EMAIL,
    },
    SocialLink {
        class: "linkedin",
        href: LINKEDIN_URL,
        icon: IconKind::LinkedIn,
        tooltip: "LinkedIn",
    },
    SocialLink {
        class: "github",
        href: GITHUB_URL,
        icon: IconKind::GitHub,
        tooltip: "GitHub",
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: "about", label: "About" },
    NavLink { anchor: "experience", label: "Experience" },
    NavLink { anchor: "projects", label: "Projects" },
    NavLink { anchor: "contact", label: "Contact" },
];

pub const ABOUT: SectionMeta = SectionMeta {
    id: "about",
    kicker: "About",
    title: "Performance-minded engineering for EDA workflows",
    delay: 1,
};

pub const ABOUT_TEXT: &str = "I build fast, reliable infrastructure for chip verification: optimizing functional coverage databases (memory & latency) and orchestrating large-scale regression jobs across compute grids. I enjoy C++ performance work, pragmatic Python tooling, and clean automation.";

pub const SKILLS: &[&str] = &["C++", "Python", "Linux", "Profiling", "EDA", "CI/CD"];

pub const EXPERIENCE: SectionMeta = SectionMeta {
    id: "experience",
    kicker: "Experience",
    title: "Recent roles",
    delay: 2,
};

const SIEMENS: &str = "Siemens Digital Industries Software";
const CAIRO: &str = "Cairo, Egypt";

pub const ROLES: &[Role] = &[
    Role {
        title: "Senior Software Development Engineer",
        employer: SIEMENS,
        location: CAIRO,
        period: "May 2025 \u{2014} Present",
        highlights: &[
            "Improved coverage DB runtime & memory on multi-GB datasets.",
            "Built a regression jobs launcher with dependency handling & retries.",
        ],
    },
    Role {
        title: "Software Development Engineer",
        employer: SIEMENS,
        location: CAIRO,
        period: "Mar 2022 \u{2014} May 2025",
        highlights: &[
            "Caching, indexing, on-demand processing \u{2192} from ~100GB \u{2192} <10GB.",
            "Python/OOP tooling for setup migration between verification tools.",
        ],
    },
    Role {
        title: "Software Testing Engineer (Automation)",
        employer: SIEMENS,
        location: CAIRO,
        period: "Jun 2020 \u{2014} Feb 2022",
        highlights: &["Automated regression suites; integrated with Jenkins/Git for fast feedback."],
    },
];

pub const PROJECTS: SectionMeta = SectionMeta {
    id: "projects",
    kicker: "Projects",
    title: "Selected work",
    delay: 3,
};

pub const PROJECT_LIST: &[Project] = &[
    Project {
        title: "Coverage DB Optimizer",
        blurb: "Compaction & index redesign; faster queries, lower peak memory.",
    },
    Project {
        title: "Grid Regression Launcher",
        blurb: "DAG orchestration, retry/backoff, metrics, resource caps.",
    },
    Project {
        title: "Top Verilog File Creator",
        blurb: "GUI (C++/Qt) generates configurable top files across block configs.",
    },
];

pub const CONTACT: SectionMeta = SectionMeta {
    id: "contact",
    kicker: "Contact",
    title: "Get in touch",
    delay: 1,
};

pub const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem {
        icon: IconKind::Mail,
        label: EMAIL,
        href: Some("mailto:osamyelmasry@gmail.com"),
    },
    ContactItem {
        icon: IconKind::Phone,
        label: "+20 120 597 8882",
        href: None,
    },
    ContactItem {
        icon: IconKind::Location,
        label: CAIRO,
        href: None,
    },
];

/// Footer line before the GitHub link, e.g. "© 2026 Omar El-Masry • Built with ♥ • ".
pub fn footer_prefix(year: i32) -> String {
    format!(
        "\u{00A9} {} {} \u{2022} Built with \u{2665} \u{2022} ",
        year, PROFILE.short_name
    )
}
