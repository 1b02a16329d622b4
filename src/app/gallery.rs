use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::templates::TemplateId;
use crate::profile::SAMPLE_PROFILE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pricing {
    Free,
    PerDay(f64),
}

impl Pricing {
    pub fn is_free(self) -> bool {
        matches!(self, Pricing::Free)
    }

    pub fn badge(self) -> String {
        match self {
            Pricing::Free => "LIFETIME FREE".to_string(),
            Pricing::PerDay(rate) => format!("${rate:.0} / DAY"),
        }
    }

    /// Big number on the card. Free stays the word, paid is the rental total
    /// for the chosen duration.
    pub fn total_label(self, days: u32) -> String {
        match self {
            Pricing::Free => "Free".to_string(),
            Pricing::PerDay(rate) => format!("{:.2}", rate * f64::from(days)),
        }
    }
}

pub struct TemplateCard {
    pub id: TemplateId,
    pub name: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub accent: &'static str,
    pub pricing: Pricing,
    pub featured: bool,
}

pub static CATALOG: [TemplateCard; 10] = [
    TemplateCard {
        id: TemplateId::Standard,
        name: "Standard Aesthetic",
        tag: "Professional",
        description: "Clean, professional design with a smooth rainbow gradient effect.",
        features: ["Responsive Layout", "Rainbow Theme", "Skill Visualization"],
        accent: "from-blue-400 to-cyan-400",
        pricing: Pricing::Free,
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Terminal,
        name: "Developer Terminal",
        tag: "Classic",
        description: "A retro-style interactive terminal experience for developers.",
        features: ["Retro Vibe", "Interactive Commands", "CLI Experience"],
        accent: "from-green-400 to-emerald-500",
        pricing: Pricing::Free,
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Neostack,
        name: "Modern NeoStack",
        tag: "Premium",
        description: "Cutting-edge premium design with modern glassmorphism and animations.",
        features: ["Premium Animations", "Glassmorphism", "Tech-first Look"],
        accent: "from-purple-500 to-pink-500",
        pricing: Pricing::Free,
        featured: true,
    },
    TemplateCard {
        id: TemplateId::Minimalist,
        name: "Minimalist Executive",
        tag: "Clean",
        description: "Sophisticated whitespace and serif typography for a premium feel.",
        features: ["Executive Style", "Mobile Optimized", "High Contrast"],
        accent: "from-slate-700 to-slate-900",
        pricing: Pricing::Free,
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Cyberpunk,
        name: "Retro Cyberpunk",
        tag: "Sci-Fi",
        description: "High-tech Sci-Fi aesthetic with neon accents and glitch effects.",
        features: ["Glitch Effects", "Neon Highlights", "Animated HUD"],
        accent: "from-cyan-500 to-pink-500",
        pricing: Pricing::Free,
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Nexus,
        name: "Nexus 3D",
        tag: "Next-Gen",
        description: "Ultra-modern 3D portfolio with a holographic AI avatar and interactive OS UI.",
        features: ["3D Hologram", "OS Interface", "Particle Effects"],
        accent: "from-purple-600 to-indigo-600",
        pricing: Pricing::Free,
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Arcade,
        name: "Arcade Rush",
        tag: "Fun",
        description: "Vibrant cartoon/game theme with interactive score system and bouncy animations.",
        features: ["Game UI", "Interactive Score", "Cartoon Aesthetic"],
        accent: "from-yellow-400 to-pink-500",
        pricing: Pricing::PerDay(3.0),
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Cinematic,
        name: "Cinematic Noir",
        tag: "Elite",
        description: "Minimalist, high-end studio aesthetic with elegant typography and atmospheric scrolling.",
        features: ["Studio Aesthetic", "Atmospheric Transitions", "Premium Serif"],
        accent: "from-white to-slate-400",
        pricing: Pricing::PerDay(5.0),
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Lumina,
        name: "Lumina Dream",
        tag: "Aesthetic",
        description: "Soft pastel gradients and organic mesh backgrounds for a dreamy aesthetic.",
        features: ["Mesh Gradients", "Dreamy Aesthetic", "Floating UI"],
        accent: "from-blue-200 to-purple-200",
        pricing: Pricing::PerDay(4.0),
        featured: false,
    },
    TemplateCard {
        id: TemplateId::Idea,
        name: "Idea Spark",
        tag: "Innovative",
        description: "Industrial-minimalist theme with a dynamic descending and flickering light bulb.",
        features: ["Dynamic Lighting", "Flicker Effect", "Industrial Aesthetic"],
        accent: "from-zinc-800 to-yellow-600",
        pricing: Pricing::PerDay(6.0),
        featured: false,
    },
];

/// Gallery of every template with rental pricing and an in-place preview
/// driven by the showcase profile.
#[component]
pub fn TemplateGallery() -> impl IntoView {
    let (days, set_days) = signal(7_u32);
    let preview = RwSignal::new(None::<TemplateId>);

    let choose = move |id: TemplateId| {
        use_navigate()(&format!("/paid/{}", id.slug()), Default::default());
    };

    view! {
        <Title text="Templates" />
        <div class="min-h-screen bg-slate-900 py-20 px-4">
            {move || {
                preview
                    .get()
                    .map(|id| {
                        view! {
                            <div class="fixed inset-0 z-[100] bg-slate-900 flex flex-col">
                                <div class="bg-slate-800/80 backdrop-blur-md p-4 flex justify-between items-center border-b border-slate-700">
                                    <div class="flex items-center gap-4">
                                        <h3 class="text-white font-bold text-xl uppercase tracking-wider">
                                            {format!("{} Preview", id.slug())}
                                        </h3>
                                        <span class="px-3 py-1 bg-purple-500/20 text-purple-400 text-xs font-bold rounded-full border border-purple-500/30">
                                            "STATIC DATA MODE"
                                        </span>
                                    </div>
                                    <button
                                        on:click=move |_| preview.set(None)
                                        class="p-2 hover:bg-slate-700 rounded-full transition-colors text-slate-400 hover:text-white text-2xl leading-none"
                                    >
                                        "✕"
                                    </button>
                                </div>
                                <div class="flex-1 overflow-auto bg-slate-900">
                                    {id.render(SAMPLE_PROFILE.clone())}
                                </div>
                            </div>
                        }
                    })
            }}
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                        "Choose Your " <span class="text-purple-400">"Portfolio Style"</span>
                    </h2>
                    <p class="text-slate-400 text-lg max-w-2xl mx-auto">
                        "Uploaded! Now select a template to showcase your professional profile."
                    </p>
                </div>

                <div class="flex flex-col items-center gap-6 mb-12 bg-slate-800/50 p-8 rounded-3xl border border-slate-700">
                    <h3 class="text-xl font-bold text-white flex items-center gap-2">
                        <span class="text-purple-400">"◷"</span>
                        " DEPLOYMENT DURATION"
                    </h3>
                    <div class="w-full max-w-xl">
                        <div class="flex justify-between mb-4 text-sm font-bold text-slate-400">
                            <span>"1 DAY"</span>
                            <span class="text-purple-400 text-lg uppercase">
                                {move || format!("{} DAYS SELECTED", days())}
                            </span>
                            <span>"365 DAYS"</span>
                        </div>
                        <input
                            type="range"
                            min="1"
                            max="365"
                            prop:value=move || days().to_string()
                            on:input=move |ev| {
                                let parsed = event_target_value(&ev).parse::<u32>().unwrap_or(7);
                                set_days(parsed.clamp(1, 365));
                            }
                            class="w-full h-2 bg-slate-700 rounded-lg appearance-none cursor-pointer accent-purple-500"
                        />
                        <div class="mt-4 text-center text-xs text-slate-500 font-medium">
                            {move || {
                                format!(
                                    "Portfolio will be automatically removed after {} days unless renewed.",
                                    days(),
                                )
                            }}
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-3 gap-8">
                    {CATALOG
                        .iter()
                        .map(|card| {
                            let id = card.id;
                            view! {
                                <div class=format!(
                                    "relative bg-slate-800/30 backdrop-blur-xl border {} rounded-3xl p-8 flex flex-col h-full transition-all duration-300 hover:-translate-y-2 group/card cursor-default",
                                    if card.featured {
                                        "border-purple-500 shadow-2xl shadow-purple-500/20"
                                    } else {
                                        "border-slate-700"
                                    },
                                )>
                                    {card
                                        .featured
                                        .then(|| {
                                            view! {
                                                <div class="absolute -top-4 left-1/2 -translate-x-1/2 bg-gradient-to-r from-purple-500 to-pink-500 text-white text-xs font-bold px-4 py-1.5 rounded-full uppercase tracking-wider flex items-center gap-1.5">
                                                    <span>"★"</span>
                                                    "Most Popular"
                                                </div>
                                            }
                                        })}

                                    <div class="relative aspect-video mb-6 rounded-2xl overflow-hidden group">
                                        <div class=format!(
                                            "w-full h-full bg-gradient-to-br {} flex items-center justify-center transition-transform duration-500 group-hover:scale-110",
                                            card.accent,
                                        )>
                                            <span class="text-slate-900/60 font-black uppercase tracking-widest text-sm">
                                                {card.name}
                                            </span>
                                        </div>
                                        <div class="absolute inset-0 bg-slate-900/40 group-hover:bg-slate-900/20 transition-colors"></div>
                                        <button
                                            on:click=move |_| preview.set(Some(id))
                                            class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 bg-white/10 backdrop-blur-md border border-white/20 text-white px-6 py-2 rounded-full font-bold opacity-0 group-hover:opacity-100 transition-opacity hover:bg-white/20"
                                        >
                                            "Show Preview"
                                        </button>
                                    </div>

                                    <div class="flex justify-between items-start mb-4">
                                        <div>
                                            <h3 class="text-2xl font-bold text-white mb-1">{card.name}</h3>
                                            <span class="text-xs font-semibold uppercase tracking-widest text-slate-500">
                                                {card.tag}
                                            </span>
                                        </div>
                                        <div class="text-right">
                                            <div class="bg-purple-500/10 text-purple-400 px-3 py-1 rounded-full text-[9px] font-black uppercase tracking-[0.2em] mb-3 inline-block border border-purple-500/20">
                                                {card.pricing.badge()}
                                            </div>
                                            <div class="flex flex-col items-end">
                                                <div class="flex items-start gap-1">
                                                    {(!card.pricing.is_free())
                                                        .then(|| {
                                                            view! {
                                                                <span class="text-xl font-bold text-white mt-1">"$"</span>
                                                            }
                                                        })}
                                                    <span class="text-5xl font-black text-white tracking-tighter">
                                                        {move || card.pricing.total_label(days())}
                                                    </span>
                                                </div>
                                                {(!card.pricing.is_free())
                                                    .then(|| {
                                                        view! {
                                                            <div class="text-[10px] font-black text-slate-500 uppercase tracking-widest mt-2 flex items-center gap-2">
                                                                <span class="text-emerald-500">"◎"</span>
                                                                {move || format!("TOTAL_RENTAL_{}_DAYS", days())}
                                                            </div>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    </div>

                                    <p class="text-slate-400 mb-6 leading-relaxed text-sm">
                                        {card.description}
                                    </p>

                                    <div class="space-y-3 mb-8 flex-1">
                                        {card
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <div class="flex items-center gap-3 text-slate-300">
                                                        <div class="flex-shrink-0 w-4 h-4 rounded-full bg-slate-700/50 flex items-center justify-center">
                                                            <span class="text-[10px] text-emerald-400">"✓"</span>
                                                        </div>
                                                        <span class="text-xs font-medium">{*feature}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>

                                    <button
                                        on:click=move |_| choose(id)
                                        class=if card.featured {
                                            "w-full py-5 rounded-2xl font-black uppercase tracking-widest transition-all duration-300 bg-gradient-to-r from-purple-500 to-pink-500 text-white hover:opacity-90 shadow-lg shadow-purple-500/25"
                                        } else {
                                            "w-full py-5 rounded-2xl font-black uppercase tracking-widest transition-all duration-300 bg-white text-slate-900 hover:bg-slate-200"
                                        }
                                    >
                                        "Launch Protocol"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_pricing_labels() {
        assert_eq!(Pricing::Free.badge(), "LIFETIME FREE");
        assert_eq!(Pricing::Free.total_label(200), "Free");
        assert!(Pricing::Free.is_free());
    }

    #[test]
    fn test_daily_rate_scales_with_days() {
        let pricing = Pricing::PerDay(3.0);
        assert_eq!(pricing.badge(), "$3 / DAY");
        assert_eq!(pricing.total_label(1), "3.00");
        assert_eq!(pricing.total_label(7), "21.00");
        assert_eq!(pricing.total_label(365), "1095.00");
    }

    #[test]
    fn test_catalog_covers_every_template() {
        assert_eq!(CATALOG.len(), TemplateId::ALL.len());
        for id in TemplateId::ALL {
            assert!(CATALOG.iter().any(|card| card.id == id));
        }
    }

    #[test]
    fn test_only_the_neostack_card_is_featured() {
        let featured: Vec<_> = CATALOG.iter().filter(|card| card.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, TemplateId::Neostack);
    }
}
