use leptos::prelude::*;

use crate::profile::PortfolioData;

const NODE_STATUS: [(&str, &str); 3] = [
    ("CPU_LOAD", "84%"),
    ("NEURAL_LINK", "STABLE"),
    ("ENCRYPTION", "AES-2048"),
];

/// Neon sci-fi rendering: scanline HUD, glitching headline, status modules.
#[component]
pub fn CyberpunkTemplate(data: PortfolioData) -> impl IntoView {
    let glitch = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        // flicker for 200ms every four seconds
        if let Ok(pulse) = set_interval_with_handle(
            move || {
                glitch.set(true);
                set_timeout(move || glitch.set(false), Duration::from_millis(200));
            },
            Duration::from_secs(4),
        ) {
            on_cleanup(move || pulse.clear());
        }
    }

    let name = data.name.clone();
    let footer_name = data.name.clone();
    let position = data.position.clone();
    let email = data.email.clone();
    let location = data.location.clone();
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();
    let experience = data.experience.clone();
    let awards = data.awards.clone();
    let projects = data.projects.clone();
    let skills = data.skills;

    view! {
        <div class="min-h-screen bg-black text-cyan-400 font-mono selection:bg-pink-500 selection:text-white overflow-x-hidden">
            <div class="fixed top-0 left-0 w-full h-1 bg-cyan-500/20 z-50">
                <div class="h-full bg-cyan-500 animate-[hud-scan_2s_linear_infinite]"></div>
            </div>

            <div class="relative z-10 container mx-auto px-6 py-12">
                <header class="mb-20">
                    <div class="flex flex-col lg:flex-row justify-between items-start gap-12">
                        <div class=move || {
                            if glitch.get() {
                                "relative animate-pulse scale-105 skew-x-2"
                            } else {
                                "relative"
                            }
                        }>
                            <div class="absolute -inset-4 bg-cyan-500/20 blur-xl rounded-full animate-pulse"></div>
                            <h1 class="text-7xl md:text-9xl font-black tracking-tighter text-white mb-4 bg-gradient-to-br from-white via-cyan-400 to-pink-500 bg-clip-text text-transparent">
                                {name}
                            </h1>
                            <div class="flex items-center gap-4 text-pink-500 font-black tracking-widest uppercase">
                                <div class="h-0.5 w-12 bg-pink-500"></div>
                                {position}
                            </div>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 w-full lg:w-auto">
                            <div class="bg-slate-900/50 p-6 border border-cyan-500/30 rounded-xl backdrop-blur-md">
                                <p class="text-[10px] text-cyan-500/50 uppercase mb-2">
                                    "// CONTACT_PROTOCOL"
                                </p>
                                <p class="text-white font-bold">{email}</p>
                                <p class="text-cyan-500/70 text-sm mt-1">{location}</p>
                            </div>
                            <div class="bg-slate-900/50 p-6 border border-pink-500/30 rounded-xl backdrop-blur-md">
                                <p class="text-[10px] text-pink-500/50 uppercase mb-2">
                                    "// UPLINK_STATUS"
                                </p>
                                <div class="flex gap-4 text-lg">
                                    {(!github.is_empty())
                                        .then(|| {
                                            view! {
                                                <a
                                                    href=github
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="hover:text-white transition-colors font-black"
                                                >
                                                    "gh"
                                                </a>
                                            }
                                        })}
                                    {(!linkedin.is_empty())
                                        .then(|| {
                                            view! {
                                                <a
                                                    href=linkedin
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="hover:text-white transition-colors font-black"
                                                >
                                                    "in"
                                                </a>
                                            }
                                        })}
                                    <span class="hover:text-white cursor-pointer transition-colors">
                                        "⛊"
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>
                </header>

                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12">
                    <main class="lg:col-span-8 space-y-24">
                        <section>
                            <h2 class="text-4xl font-black italic mb-12 flex items-center gap-4">
                                <div class="h-8 w-1 bg-pink-500"></div>
                                "EXP_HISTORY"
                            </h2>
                            <div class="space-y-12">
                                {experience
                                    .into_iter()
                                    .map(|job| {
                                        view! {
                                            <div class="group relative">
                                                <div class="absolute -left-12 top-2 w-8 h-px bg-cyan-500/50 group-hover:w-12 group-hover:bg-cyan-500 transition-all"></div>
                                                <div class="flex justify-between items-baseline mb-4">
                                                    <h3 class="text-2xl font-bold text-white group-hover:text-cyan-400 transition-colors">
                                                        {job.title}
                                                    </h3>
                                                    <span class="text-xs font-black text-pink-500 tracking-[0.2em]">
                                                        {job.period}
                                                    </span>
                                                </div>
                                                <p class="text-cyan-500/70 uppercase text-xs mb-4 font-black">
                                                    {job.company}
                                                </p>
                                                <div class="text-slate-400 leading-relaxed max-w-2xl bg-slate-900/20 p-4 border-l border-cyan-500/20 space-y-2">
                                                    {job.highlights
                                                        .into_iter()
                                                        .map(|point| {
                                                            view! { <p class="text-sm">"• " {point}</p> }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>

                        {(!awards.is_empty())
                            .then(|| {
                                view! {
                                    <section>
                                        <h2 class="text-4xl font-black italic mb-12 flex items-center gap-4">
                                            <div class="h-8 w-1 bg-yellow-500"></div>
                                            "RECOGNITION_DATA"
                                        </h2>
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                            {awards
                                                .into_iter()
                                                .map(|award| {
                                                    view! {
                                                        <div class="bg-slate-900/40 p-6 border border-yellow-500/20 hover:border-yellow-500/50 transition-all border-dashed">
                                                            <span class="text-[10px] text-yellow-500/50 block mb-2 font-black tracking-widest uppercase">
                                                                {format!("ID: AWARD_{}", award.date)}
                                                            </span>
                                                            <h3 class="text-xl font-bold text-white mb-2">
                                                                {award.title}
                                                            </h3>
                                                            <p class="text-xs text-slate-500 uppercase tracking-tighter">
                                                                "Issued by " {award.issuer}
                                                            </p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </section>
                                }
                            })}

                        <section>
                            <h2 class="text-4xl font-black italic mb-12 flex items-center gap-4">
                                <div class="h-8 w-1 bg-cyan-500"></div>
                                "PROJECT_STACK"
                            </h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                                {projects
                                    .into_iter()
                                    .map(|project| {
                                        view! {
                                            <div class="bg-slate-900/40 p-1 border border-cyan-500/20 hover:border-cyan-500/50 transition-all hover:translate-y-[-4px] group">
                                                <div class="bg-slate-900 p-6">
                                                    <h3 class="text-xl font-bold text-white mb-2">
                                                        {project.title}
                                                    </h3>
                                                    <p class="text-[10px] text-pink-500 font-black mb-4 uppercase tracking-widest">
                                                        {project.tech}
                                                    </p>
                                                    <p class="text-slate-400 text-sm mb-6">
                                                        {project.description}
                                                    </p>
                                                    <div class="flex justify-between items-center opacity-0 group-hover:opacity-100 transition-opacity">
                                                        <span class="text-[10px] font-black underline cursor-pointer">
                                                            "ACCESS_SOURCE"
                                                        </span>
                                                        <span class="text-sm">"→"</span>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    </main>

                    <aside class="lg:col-span-4 space-y-12">
                        <div class="bg-slate-900/50 border border-cyan-500/20 p-8 rounded-2xl relative overflow-hidden group">
                            <div class="absolute top-0 right-0 w-24 h-24 bg-cyan-500/5 rotate-45 translate-x-12 -translate-y-12 group-hover:bg-cyan-500/10 transition-colors"></div>
                            <h3 class="text-2xl font-black italic mb-8 border-b border-cyan-500/20 pb-4">
                                "SKILLS_MATRIX"
                            </h3>
                            <div class="space-y-8">
                                {skills
                                    .into_iter()
                                    .map(|group| {
                                        view! {
                                            <div>
                                                <p class="text-[10px] text-cyan-500/50 mb-3 font-black tracking-[0.2em]">
                                                    {group.category}
                                                </p>
                                                <div class="flex flex-wrap gap-2">
                                                    {group.items
                                                        .into_iter()
                                                        .map(|skill| {
                                                            view! {
                                                                <span class="text-xs bg-slate-800 text-cyan-400 px-3 py-1 border border-cyan-500/10 hover:border-cyan-500 transition-colors">
                                                                    {skill}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="bg-pink-500/5 border border-pink-500/20 p-8 rounded-2xl">
                            <h3 class="text-2xl font-black italic mb-8 border-b border-pink-500/20 pb-4">
                                "NODE_STATUS"
                            </h3>
                            <div class="space-y-4">
                                {NODE_STATUS
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="flex justify-between items-center">
                                                <span class="text-[10px] font-black">{label}</span>
                                                <span class="text-xs text-pink-500 font-bold">{value}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </aside>
                </div>

                <footer class="mt-32 pt-12 border-t border-cyan-500/10 flex flex-col md:flex-row justify-between items-center gap-6 text-[10px] font-black tracking-[0.3em] uppercase opacity-40">
                    <div class="flex items-center gap-4">
                        <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                        "SYSTEM_ONLINE_V2.089"
                    </div>
                    <div>{format!("© 2077 GENESIS_VOID.NET // {footer_name}")}</div>
                    <div class="flex gap-8">
                        <span class="cursor-pointer hover:text-cyan-400">"DEBUG_LOGS"</span>
                        <span class="cursor-pointer hover:text-cyan-400">"PROTOCOL_X"</span>
                    </div>
                </footer>
            </div>
        </div>
    }
}
