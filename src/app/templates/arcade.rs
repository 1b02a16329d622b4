use std::time::Duration;

use leptos::{either::EitherOf6, prelude::*};

use crate::profile::{
    AwardEntry, EducationEntry, ExperienceEntry, PortfolioData, ProjectEntry, SkillGroup,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Profile,
    Skills,
    Experience,
    Projects,
    Education,
    Awards,
}

impl Tab {
    const ALL: [Self; 6] = [
        Self::Profile,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Awards,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Profile => "Player",
            Self::Skills => "Arsenal",
            Self::Experience => "Quests",
            Self::Projects => "Bosses",
            Self::Education => "Level_Up",
            Self::Awards => "Loot",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Profile => "☺",
            Self::Skills => "⚡",
            Self::Experience => "▣",
            Self::Projects => "◎",
            Self::Education => "★",
            Self::Awards => "✪",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Chip {
    text: String,
    x: f64,
}

/// One game-loop step: chips scroll left and fall off past the edge.
fn advance(chips: &mut Vec<Chip>) {
    for chip in chips.iter_mut() {
        chip.x -= 2.0;
    }
    chips.retain(|chip| chip.x > -20.0);
}

fn xp_label(experience_label: &str) -> String {
    experience_label
        .split_whitespace()
        .next()
        .map(|years| format!("XP: {years}YRS"))
        .unwrap_or_else(|| "XP: LVL_99".to_string())
}

/// Retro arcade cabinet: a skill-collecting mini racer feeds the score
/// counter in the header, and the profile reads as game menus.
#[component]
pub fn ArcadeTemplate(data: PortfolioData) -> impl IntoView {
    let (tab, set_tab) = signal(Tab::default());
    let score = RwSignal::new(0_u32);
    let jumping = RwSignal::new(false);
    let chips = RwSignal::new(Vec::<Chip>::new());

    let badge = data.name.chars().next().unwrap_or('A');
    let name = data.name.clone();
    let position = data.position.clone();
    let xp = xp_label(&data.experience_label);
    let profile = StoredValue::new(data);

    let jump_keys = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.code() == "Space" || ev.code() == "ArrowUp" {
            jumping.set(true);
            set_timeout(move || jumping.set(false), Duration::from_millis(500));
        }
    });
    on_cleanup(move || jump_keys.remove());

    #[cfg(feature = "hydrate")]
    {
        let pool: Vec<String> = profile.with_value(|data| {
            data.skills
                .iter()
                .flat_map(|group| group.items.iter().cloned())
                .collect()
        });
        let tick = move || {
            score.update(|s| *s += 1);
            if !pool.is_empty() && js_sys::Math::random() > 0.95 {
                let pick = (js_sys::Math::random() * pool.len() as f64) as usize % pool.len();
                let text = pool[pick].clone();
                chips.update(|chips| chips.push(Chip { text, x: 100.0 }));
            }
            chips.update(advance);
        };
        if let Ok(handle) = set_interval_with_handle(tick, Duration::from_millis(50)) {
            on_cleanup(move || handle.clear());
        }
    }

    view! {
        <div class="min-h-screen bg-[#0a0a0a] font-mono text-[#e0e0e0] overflow-x-hidden selection:bg-pink-500/30">
            <div class="fixed inset-0 bg-[linear-gradient(rgba(168,85,247,0.05)_1px,transparent_1px),linear-gradient(90deg,rgba(168,85,247,0.05)_1px,transparent_1px)] bg-[size:40px_40px] [mask-image:radial-gradient(ellipse_60%_50%_at_50%_0%,#000_70%,transparent_100%)] pointer-events-none"></div>

            <div class="relative max-w-5xl mx-auto px-6 py-12">
                <header class="flex flex-col md:flex-row justify-between items-center mb-8 bg-[#1a1a1a] border-[4px] border-[#333] p-6 rounded-[2rem] shadow-[0_20px_50px_rgba(0,0,0,0.5)]">
                    <div class="flex items-center gap-6 mb-6 md:mb-0">
                        <div class="w-20 h-20 bg-gradient-to-tr from-pink-500 to-purple-600 rounded-3xl flex items-center justify-center text-5xl font-black shadow-[0_0_30px_rgba(236,72,153,0.3)] text-white transition-transform duration-700 hover:rotate-[360deg] hover:scale-110">
                            {badge}
                        </div>
                        <div>
                            <h1 class="text-4xl font-black uppercase tracking-tighter text-white drop-shadow-md">
                                {name}
                            </h1>
                            <div class="flex items-center gap-2 mt-1">
                                <span class="bg-pink-500/20 text-pink-400 px-2 py-0.5 rounded text-[10px] font-black uppercase tracking-widest border border-pink-500/30">
                                    {position}
                                </span>
                                <span class="text-slate-500 font-bold text-[10px]">{xp}</span>
                            </div>
                        </div>
                    </div>
                    <div class="flex flex-col items-center md:items-end">
                        <div class="bg-[#222] border-2 border-[#333] px-6 py-2 rounded-2xl flex flex-col items-center">
                            <span class="text-[10px] font-black text-slate-500 uppercase tracking-[0.3em]">
                                "Neural_Currency"
                            </span>
                            <span class="text-2xl font-black text-yellow-400 italic font-mono">
                                {move || format!("$ {:06}", score.get())}
                            </span>
                        </div>
                    </div>
                </header>

                <section class="mb-12">
                    <AuraRacer score=score chips=chips jumping=jumping />
                </section>

                <nav class="flex flex-wrap justify-between gap-3 mb-12">
                    {Tab::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <button
                                    on:click=move |_| set_tab(entry)
                                    class=move || {
                                        if tab() == entry {
                                            "flex-1 min-w-[120px] flex flex-col items-center gap-2 p-4 rounded-3xl font-black uppercase text-xs transition-all border-[3px] bg-white text-black border-white shadow-[0_0_20px_rgba(255,255,255,0.3)] hover:scale-105"
                                        } else {
                                            "flex-1 min-w-[120px] flex flex-col items-center gap-2 p-4 rounded-3xl font-black uppercase text-xs transition-all border-[3px] bg-[#1a1a1a] text-slate-400 border-[#333] hover:scale-105"
                                        }
                                    }
                                >
                                    <span class=move || {
                                        if tab() == entry {
                                            "text-2xl text-pink-500"
                                        } else {
                                            "text-2xl text-slate-500"
                                        }
                                    }>{entry.glyph()}</span>
                                    {entry.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <main class="bg-[#111] border-[4px] border-[#222] rounded-[3rem] p-8 md:p-12 shadow-[0_30px_60px_rgba(0,0,0,0.8)] min-h-[500px] relative overflow-hidden">
                    <div class="absolute inset-0 bg-[linear-gradient(transparent_50%,rgba(0,0,0,0.05)_50%)] bg-[size:100%_4px] pointer-events-none"></div>

                    {move || {
                        let data = profile.get_value();
                        match tab() {
                            Tab::Profile => EitherOf6::A(profile_panel(data)),
                            Tab::Skills => EitherOf6::B(arsenal_panel(data.skills)),
                            Tab::Experience => EitherOf6::C(quests_panel(data.experience)),
                            Tab::Projects => EitherOf6::D(bosses_panel(data.projects)),
                            Tab::Education => EitherOf6::E(levelup_panel(data.education)),
                            Tab::Awards => EitherOf6::F(loot_panel(data.awards)),
                        }
                    }}
                </main>

                <footer class="mt-16 flex flex-col items-center gap-6">
                    <div class="flex gap-8">
                        <span class="text-2xl text-yellow-400 animate-pulse">"★"</span>
                        <span class="text-2xl text-yellow-400 animate-pulse delay-75">"★"</span>
                        <span class="text-2xl text-yellow-400 animate-pulse delay-150">"★"</span>
                    </div>
                    <div class="bg-[#1a1a1a] border border-[#333] px-8 py-3 rounded-full text-[10px] font-black tracking-[0.4em] text-slate-500 uppercase">
                        "SYSTEM_STABLE // GEN_Z_PROTOCOL_ENGAGED // 2026"
                    </div>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn AuraRacer(
    score: RwSignal<u32>,
    chips: RwSignal<Vec<Chip>>,
    jumping: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="relative h-64 bg-[#1a1a1a] border-[6px] border-[#4D4D4D] rounded-[2rem] overflow-hidden shadow-[inset_0_0_50px_rgba(0,0,0,0.5)]">
            <div class="absolute top-4 left-6 flex items-center gap-4 z-10">
                <div class="bg-[#FFD93D] text-[#4D4D4D] px-4 py-1 rounded-full font-black italic text-sm">
                    "AURA_RACER_V1.0"
                </div>
                <div class="text-white font-black text-xl italic tracking-tighter">
                    {move || format!("SCORE: {:06}", score.get())}
                </div>
            </div>

            <div class="absolute bottom-10 left-0 right-0 h-1 bg-[#333] flex gap-8 overflow-hidden">
                {(0..20)
                    .map(|_| {
                        view! {
                            <div class="w-12 h-full bg-yellow-500/50 animate-[road-dash_1s_linear_infinite]"></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=move || {
                if jumping.get() {
                    "absolute bottom-12 left-20 z-20 transition-transform duration-300 ease-out -translate-y-24"
                } else {
                    "absolute bottom-12 left-20 z-20 transition-transform duration-300 ease-in"
                }
            }>
                <div class="relative">
                    <span class="text-5xl drop-shadow-[0_0_15px_rgba(236,72,153,0.5)]">"🏎"</span>
                    <div class="absolute -bottom-2 -left-2 w-20 h-4 bg-black/40 blur-md rounded-full -z-10"></div>
                    <div class="absolute -left-6 bottom-4 w-6 h-3 bg-orange-500 rounded-full blur-sm animate-pulse"></div>
                </div>
            </div>

            {move || {
                chips
                    .get()
                    .into_iter()
                    .map(|chip| {
                        view! {
                            <div
                                class="absolute bottom-14 flex flex-col items-center"
                                style=format!("left: {}%", chip.x)
                            >
                                <div class="bg-blue-400 text-white px-3 py-1 rounded-full text-[10px] font-black border-2 border-[#4D4D4D] shadow-[2px_2px_0px_#4D4D4D] whitespace-nowrap">
                                    {chip.text}
                                </div>
                                <span class="text-yellow-400 text-xs mt-1 animate-bounce">"⚡"</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <div class="absolute bottom-2 left-6 text-[10px] text-white/30 font-bold">
                "[SPACE] TO JUMP // COLLECT SKILLS FOR XP"
            </div>
        </div>
    }
}

fn profile_panel(data: PortfolioData) -> impl IntoView {
    let summary = format!("\"{}\"", data.summary);
    let github = if data.github.is_empty() {
        "#".to_string()
    } else {
        data.github.clone()
    };
    let linkedin = if data.linkedin.is_empty() {
        "#".to_string()
    } else {
        data.linkedin.clone()
    };

    view! {
        <div class="space-y-12">
            <div class="flex flex-col items-center text-center max-w-3xl mx-auto">
                <div class="bg-pink-500 text-white font-black px-6 py-2 rounded-full mb-8 text-sm uppercase tracking-widest shadow-[0_0_20px_rgba(236,72,153,0.4)]">
                    "MISSION_BRIEFING"
                </div>
                <p class="text-2xl font-bold leading-relaxed text-slate-300 italic">{summary}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="bg-[#222] p-8 rounded-[2rem] border-2 border-slate-700/50 hover:border-blue-500/50 transition-colors group">
                    <div class="flex items-center gap-4 mb-6">
                        <div class="p-3 bg-blue-500/20 rounded-xl group-hover:scale-110 transition-transform">
                            <span class="text-blue-400 text-xl">"✉"</span>
                        </div>
                        <h3 class="font-black text-lg uppercase tracking-wider text-white">
                            "COMM_CHANNEL"
                        </h3>
                    </div>
                    <div class="space-y-2 font-mono">
                        <p class="text-blue-400 font-black">{data.email.clone()}</p>
                        <p class="font-bold text-slate-400">{data.phone.clone()}</p>
                        <p class="text-xs text-slate-500 uppercase mt-4">{data.location.clone()}</p>
                    </div>
                </div>
                <div class="bg-[#222] p-8 rounded-[2rem] border-2 border-slate-700/50 hover:border-pink-500/50 transition-colors group">
                    <div class="flex items-center gap-4 mb-6">
                        <div class="p-3 bg-pink-500/20 rounded-xl group-hover:scale-110 transition-transform">
                            <span class="text-pink-400 text-xl">"⚡"</span>
                        </div>
                        <h3 class="font-black text-lg uppercase tracking-wider text-white">
                            "NETWORK_STATUS"
                        </h3>
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=github
                            target="_blank"
                            rel="noreferrer"
                            class="flex-1 bg-[#1a1a1a] p-4 rounded-2xl flex flex-col items-center gap-2 border-2 border-[#333] hover:border-pink-400 transition-all cursor-pointer"
                        >
                            <span class="text-2xl font-black text-white">"gh"</span>
                            <span class="text-[10px] font-black uppercase text-slate-500">
                                "GITHUB"
                            </span>
                        </a>
                        <a
                            href=linkedin
                            target="_blank"
                            rel="noreferrer"
                            class="flex-1 bg-[#1a1a1a] p-4 rounded-2xl flex flex-col items-center gap-2 border-2 border-[#333] hover:border-blue-400 transition-all cursor-pointer"
                        >
                            <span class="text-2xl font-black text-white">"in"</span>
                            <span class="text-[10px] font-black uppercase text-slate-500">
                                "LINKEDIN"
                            </span>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn arsenal_panel(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {groups
                .into_iter()
                .filter(|group| !group.items.is_empty())
                .map(|group| {
                    view! {
                        <div class="bg-[#1a1a1a] p-8 rounded-[2.5rem] border-2 border-[#222] shadow-xl">
                            <h3 class="text-xl font-black mb-8 text-white flex items-center justify-between">
                                <span class="bg-[#333] px-4 py-1 rounded-lg text-xs tracking-widest">
                                    {group.category.to_uppercase()}
                                </span>
                                <span class="text-yellow-400">"⚡"</span>
                            </h3>
                            <div class="flex flex-wrap gap-4">
                                {group.items
                                    .into_iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="bg-[#222] px-4 py-2 border border-slate-700/50 rounded-xl text-blue-400 font-bold text-sm shadow-lg hover:bg-blue-500/10 hover:scale-110 transition-all">
                                                {skill}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn quests_panel(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <div class="space-y-10">
            {entries
                .into_iter()
                .map(|job| {
                    view! {
                        <div class="relative pl-12 border-l-4 border-dashed border-slate-800 pb-10 last:pb-0">
                            <div class="absolute top-0 left-[-12px] w-5 h-5 bg-pink-500 rounded-full shadow-[0_0_15px_rgba(236,72,153,0.5)]"></div>
                            <div class="bg-[#1a1a1a] p-8 rounded-[2.5rem] border-2 border-[#222] shadow-2xl">
                                <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6 gap-4">
                                    <div>
                                        <h4 class="text-2xl font-black text-white italic">
                                            {job.title}
                                        </h4>
                                        <p class="text-pink-500 font-black text-sm uppercase tracking-widest">
                                            "@ " {job.company}
                                        </p>
                                    </div>
                                    <div class="bg-[#222] px-4 py-2 rounded-xl text-xs font-black text-slate-400 border border-[#333]">
                                        {job.period}
                                    </div>
                                </div>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    {job.highlights
                                        .into_iter()
                                        .map(|point| {
                                            view! {
                                                <div class="flex gap-4 items-start bg-[#222]/50 p-4 rounded-2xl border border-slate-800/50">
                                                    <span class="text-pink-500 flex-shrink-0 mt-1">"›"</span>
                                                    <p class="text-sm font-bold text-slate-400 leading-relaxed">
                                                        {point}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn bosses_panel(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {entries
                .into_iter()
                .map(|project| {
                    let chips: Vec<String> = project
                        .tech
                        .split(',')
                        .map(|t| format!("# {}", t.trim()))
                        .collect();
                    view! {
                        <div class="flex flex-col bg-[#1a1a1a] border-[4px] border-[#222] rounded-[3rem] p-10 relative overflow-hidden group shadow-2xl hover:-translate-y-2 transition-transform">
                            <div class="absolute top-0 right-0 w-32 h-32 bg-purple-600/10 blur-[50px] group-hover:bg-purple-600/20 transition-all"></div>
                            <div class="w-16 h-16 bg-purple-500/20 rounded-2xl mb-8 flex items-center justify-center border-2 border-purple-500/30">
                                <span class="text-3xl">"🎮"</span>
                            </div>
                            <h4 class="text-3xl font-black uppercase mb-4 text-white leading-tight underline decoration-purple-500/30 decoration-[8px] underline-offset-[10px]">
                                {project.title}
                            </h4>
                            <p class="text-sm font-bold text-slate-500 mb-8 flex-1 leading-relaxed">
                                {project.description}
                            </p>
                            <div class="flex flex-wrap gap-2 mb-8">
                                {chips
                                    .into_iter()
                                    .map(|chip| {
                                        view! {
                                            <span class="bg-[#222] text-[10px] font-black text-slate-400 px-3 py-1 rounded-lg border border-[#333]">
                                                {chip}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <button class="w-full bg-white text-black py-4 rounded-2xl font-black uppercase tracking-widest text-xs hover:bg-pink-500 hover:text-white transition-all transform hover:scale-105 active:scale-95 shadow-xl">
                                "LAUNCH_PROJECT"
                            </button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn levelup_panel(entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {entries
                .into_iter()
                .map(|school| {
                    let grade = school.grade.clone();
                    view! {
                        <div class="bg-[#1a1a1a] p-8 rounded-[2.5rem] border-2 border-[#222] shadow-xl relative overflow-hidden group">
                            <div class="absolute -right-4 -top-4 w-24 h-24 bg-green-500/5 rounded-full group-hover:bg-green-500/10 transition-colors"></div>
                            <div class="w-12 h-12 bg-green-500/20 rounded-xl mb-6 flex items-center justify-center border border-green-500/30">
                                <span class="text-green-400 text-xl">"★"</span>
                            </div>
                            <h4 class="text-2xl font-black text-white mb-2 italic underline decoration-green-500/30 decoration-[6px] underline-offset-4">
                                {school.degree.clone()}
                            </h4>
                            <p class="text-green-500 font-black text-sm uppercase mb-4 tracking-tighter">
                                "@ " {school.institution.clone()}
                            </p>
                            <div class="flex justify-between items-center text-[10px] font-black text-slate-500 bg-[#222] px-4 py-2 rounded-lg border border-[#333]">
                                <span>{format!("CLASS_OF_{}", school.end_year)}</span>
                                {(!grade.is_empty())
                                    .then(|| view! { <span>{format!("GPA_{grade}")}</span> })}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn loot_panel(entries: Vec<AwardEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {entries
                .into_iter()
                .map(|award| {
                    view! {
                        <div class="bg-[#1a1a1a] p-10 rounded-[3rem] border-2 border-[#222] border-dashed flex flex-col items-center text-center group hover:bg-[#1a1a1a]/80 transition-all">
                            <div class="w-20 h-20 bg-orange-500/20 rounded-full mb-8 flex items-center justify-center border-4 border-orange-500/30 group-hover:scale-110 transition-transform shadow-[0_0_30px_rgba(249,115,22,0.2)]">
                                <span class="text-4xl">"🏆"</span>
                            </div>
                            <h4 class="text-xl font-black text-white mb-2 uppercase tracking-tight">
                                {award.title}
                            </h4>
                            <p class="text-xs font-bold text-slate-500 uppercase tracking-widest">
                                {award.issuer}
                            </p>
                            <div class="mt-6 px-4 py-1 bg-[#222] rounded-full text-[10px] font-black text-orange-400 border border-orange-500/20">
                                {format!("EARNED_{}", award.date)}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chips_scroll_left_and_expire() {
        let mut chips = vec![
            Chip {
                text: "Rust".to_string(),
                x: 100.0,
            },
            Chip {
                text: "SQL".to_string(),
                x: -19.0,
            },
        ];
        advance(&mut chips);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].text, "Rust");
        assert_eq!(chips[0].x, 98.0);
    }

    #[test]
    fn test_xp_label_uses_the_years_figure() {
        assert_eq!(xp_label("4 Years Experience"), "XP: 4YRS");
    }

    #[test]
    fn test_xp_label_defaults_when_unknown() {
        assert_eq!(xp_label(""), "XP: LVL_99");
    }
}
