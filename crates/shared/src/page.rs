//! Static copy for the explainer page: header, hero, tabs and their cards.
//! Nothing here carries behavior; views lay it out however they like.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Context,
    Templates,
    Guide,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Context, Tab::Templates, Tab::Guide];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Context => "Context",
            Tab::Templates => "Templates",
            Tab::Guide => "Guide",
        }
    }

    /// Case-insensitive. `quickstart` is accepted for the guide tab.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overview" => Some(Tab::Overview),
            "context" => Some(Tab::Context),
            "templates" => Some(Tab::Templates),
            "guide" | "quickstart" => Some(Tab::Guide),
            _ => None,
        }
    }
}

pub struct Header {
    pub title: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
}

pub const HEADER: Header = Header {
    title: "init.md",
    tagline: "Boot AI agents with precision",
    version: "v1.0.0",
};

pub struct Hero {
    pub headline: &'static str,
    pub blurb: &'static str,
    pub badges: &'static [&'static str],
    pub inspiration: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "From cold start to ready state",
    blurb: "Define how your AI agents wake up, validate their environment, and generate essential project files. \
Battle-tested initialization protocols eliminate guesswork, establish operational context, and ensure \
consistent agent behavior through comprehensive documentation generation.",
    badges: &[
        "Context engineering",
        "Memory priming",
        "Auto documentation",
        "Production ready",
    ],
    inspiration: "Inspired by Unix init, Python __init__.py, and modern agent architecture patterns",
};

pub const FOOTER: &str = "Licensed under MIT. Adapt to your environment and policies.";

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
    pub points: &'static [&'static str],
}

const OVERVIEW_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "What is \"init\"?",
        body: "Traditionally, \"init\" is the Unix process that initializes the system during boot. \
For agents, \"init\" defines the procedural scope and instruction sets to transition from cold start to ready state.",
        points: &[],
    },
    InfoCard {
        title: "Implementation Principles",
        body: "",
        points: &[
            "Safe system probes with minimal side effects",
            "Structured execution steps and clear policies",
            "Automated file tree and context generation",
            "Project documentation suite generation",
        ],
    },
    InfoCard {
        title: "Why it matters",
        body: "",
        points: &[
            "Runbooks stay fixed while prompts can vary, enabling repeatable results across sessions.",
            "Early environment validation mirrors real production boot sequences and avoids surprises.",
            "Documented outputs make it easy for humans to audit, resume, or hand off work.",
        ],
    },
    InfoCard {
        title: "The Evolution of Initialization",
        body: "",
        points: &[
            "Unix systemd",
            "Kubernetes init containers",
            "Python __init__.py",
            "JavaScript init helpers",
        ],
    },
];

const CONTEXT_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "Agent Architecture & Memory Systems",
        body: "init.md sits between the tools, memory and orchestration layers, priming each before work begins.",
        points: &["Tools Layer", "Memory Layer", "Orchestration Layer"],
    },
    InfoCard {
        title: "Complementary systems & briefings",
        body: "",
        points: &[
            "AGENTS.md (project briefing)",
            "Config-driven kits",
            "Orchestration platforms",
        ],
    },
    InfoCard {
        title: "Startup Sequence & Context Loading",
        body: "",
        points: &["System Probe", "Context Load", "Memory Prime", "Generate Docs"],
    },
    InfoCard {
        title: "Production Readiness",
        body: "",
        points: &["Validation & Rollback", "Operational Documentation"],
    },
];

const GUIDE_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "Implementation Guide",
        body: "How to define your project scope, systems, and execution parameters",
        points: &[
            "Define Project Scope",
            "Map Your System Architecture",
            "Customize Template Parameters",
            "Execute and Validate",
        ],
    },
    InfoCard {
        title: "Template Selection Guide",
        body: "Choose the right initialization approach for your environment",
        points: &[
            "Minimal: personal projects, prototypes, development environments",
            "Server: production systems, team projects, complex infrastructure",
            "Dry-Run: testing, validation, security-conscious environments",
        ],
    },
    InfoCard {
        title: "Common Implementation Patterns",
        body: "",
        points: &[
            "For Web Applications",
            "For Infrastructure Projects",
            "For Data Projects",
        ],
    },
];

/// Cards for the informational tabs. The templates tab is interactive and has none.
pub fn cards_for(tab: Tab) -> &'static [InfoCard] {
    match tab {
        Tab::Overview => OVERVIEW_CARDS,
        Tab::Context => CONTEXT_CARDS,
        Tab::Templates => &[],
        Tab::Guide => GUIDE_CARDS,
    }
}
