mod arcade;
mod cinematic;
mod cyberpunk;
mod idea;
mod lumina;
mod minimalist;
mod neostack;
mod nexus;
mod standard;
mod terminal;

use leptos::prelude::*;

use crate::profile::PortfolioData;

/// The ten portfolio renderings. Same profile in, different page out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateId {
    Standard,
    Terminal,
    Neostack,
    Minimalist,
    Cyberpunk,
    Nexus,
    Arcade,
    Cinematic,
    Lumina,
    Idea,
}

impl TemplateId {
    pub const ALL: [TemplateId; 10] = [
        TemplateId::Standard,
        TemplateId::Terminal,
        TemplateId::Neostack,
        TemplateId::Minimalist,
        TemplateId::Cyberpunk,
        TemplateId::Nexus,
        TemplateId::Arcade,
        TemplateId::Cinematic,
        TemplateId::Lumina,
        TemplateId::Idea,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            TemplateId::Standard => "standard",
            TemplateId::Terminal => "terminal",
            TemplateId::Neostack => "neostack",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Cyberpunk => "cyberpunk",
            TemplateId::Nexus => "nexus",
            TemplateId::Arcade => "arcade",
            TemplateId::Cinematic => "cinematic",
            TemplateId::Lumina => "lumina",
            TemplateId::Idea => "idea",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    pub fn render(self, data: PortfolioData) -> AnyView {
        match self {
            TemplateId::Standard => view! { <standard::StandardTemplate data=data /> }.into_any(),
            TemplateId::Terminal => view! { <terminal::TerminalTemplate data=data /> }.into_any(),
            TemplateId::Neostack => view! { <neostack::NeostackTemplate data=data /> }.into_any(),
            TemplateId::Minimalist => {
                view! { <minimalist::MinimalistTemplate data=data /> }.into_any()
            }
            TemplateId::Cyberpunk => {
                view! { <cyberpunk::CyberpunkTemplate data=data /> }.into_any()
            }
            TemplateId::Nexus => view! { <nexus::NexusTemplate data=data /> }.into_any(),
            TemplateId::Arcade => view! { <arcade::ArcadeTemplate data=data /> }.into_any(),
            TemplateId::Cinematic => {
                view! { <cinematic::CinematicTemplate data=data /> }.into_any()
            }
            TemplateId::Lumina => view! { <lumina::LuminaTemplate data=data /> }.into_any(),
            TemplateId::Idea => view! { <idea::IdeaTemplate data=data /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::from_slug(id.slug()), Some(id));
        }
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        assert_eq!(TemplateId::from_slug("brutalist"), None);
        assert_eq!(TemplateId::from_slug(""), None);
        assert_eq!(TemplateId::from_slug("Standard"), None);
    }
}
