use leptos::prelude::*;

use crate::profile::{ExperienceEntry, PortfolioData, ProjectEntry};

fn floating_shape(class: &'static str, delay_s: u32) -> impl IntoView {
    view! {
        <div
            class=format!(
                "absolute rounded-full blur-[80px] opacity-40 animate-[float_10s_ease-in-out_infinite] {class}",
            )
            style=format!("animation-delay: {delay_s}s")
        ></div>
    }
}

/// Pastel dreamscape: floating blurred shapes behind frosted-glass cards,
/// soft gradients everywhere.
#[component]
pub fn LuminaTemplate(data: PortfolioData) -> impl IntoView {
    let name = data.name.clone();
    let first = data.first_name().to_string();
    let quote = format!("\"{}\"", data.summary);
    let visionary = format!(
        "Crafting interfaces that feel like a dream. Based in {}.",
        data.location
    );
    let email = data.email.clone();
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();

    // three picks per category keeps the toolkit cloud airy
    let toolkit: Vec<String> = data
        .skills
        .iter()
        .flat_map(|group| group.items.iter().take(3).cloned())
        .collect();

    let journey = journey_section(data.experience.clone());
    let academic = (!data.education.is_empty()).then(|| {
        let entries = data.education.clone();
        view! {
            <div class="bg-white/40 backdrop-blur-xl border border-white/80 p-10 rounded-[3rem] shadow-xl">
                <div class="w-12 h-12 bg-pink-100 rounded-2xl mb-8 flex items-center justify-center">
                    <span class="text-pink-500 text-xl">"★"</span>
                </div>
                <h2 class="text-3xl font-black mb-8 tracking-tight">"Academic Base"</h2>
                <div class="space-y-6">
                    {entries
                        .into_iter()
                        .map(|school| {
                            let span = if school.grade.is_empty() {
                                format!("{} - {}", school.start_year, school.end_year)
                            } else {
                                format!(
                                    "{} - {} // CGPA: {}",
                                    school.start_year,
                                    school.end_year,
                                    school.grade,
                                )
                            };
                            view! {
                                <div class="border-l-2 border-pink-100 pl-4 py-1">
                                    <h4 class="font-black text-lg">{school.degree.clone()}</h4>
                                    <p class="text-sm font-bold opacity-60">
                                        {school.institution.clone()}
                                    </p>
                                    <p class="text-xs font-medium opacity-40">{span}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });
    let accolades = (!data.awards.is_empty()).then(|| {
        let entries = data.awards.clone();
        view! {
            <div class="bg-white/40 backdrop-blur-xl border border-white/80 p-10 rounded-[3rem] shadow-xl">
                <div class="w-12 h-12 bg-yellow-100 rounded-2xl mb-8 flex items-center justify-center">
                    <span class="text-yellow-500 text-xl">"✪"</span>
                </div>
                <h2 class="text-3xl font-black mb-8 tracking-tight">"Accolades"</h2>
                <div class="space-y-6">
                    {entries
                        .into_iter()
                        .map(|award| {
                            view! {
                                <div class="border-l-2 border-yellow-100 pl-4 py-1">
                                    <h4 class="font-black text-lg">{award.title}</h4>
                                    <p class="text-sm font-bold opacity-60">{award.issuer}</p>
                                    <p class="text-xs font-medium opacity-40">{award.date}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });
    let projects = projects_section(data.projects);

    view! {
        <div class="min-h-screen bg-[#fafafa] text-[#2d3436] font-sans overflow-x-hidden relative">
            <div class="fixed inset-0 z-0 bg-[#f9f9f9]">
                {floating_shape("w-[500px] h-[500px] bg-purple-200 -top-20 -left-20", 0)}
                {floating_shape("w-[600px] h-[600px] bg-blue-100 top-1/2 -right-40", 2)}
                {floating_shape("w-[400px] h-[400px] bg-pink-100 bottom-0 left-1/4", 5)}
            </div>

            <div class="relative z-10 max-w-5xl mx-auto px-10 py-20">
                <header class="flex justify-between items-center mb-32 backdrop-blur-md bg-white/30 border border-white/50 p-6 rounded-[2.5rem] shadow-xl shadow-purple-500/5">
                    <div class="flex items-center gap-4">
                        <div class="w-14 h-14 bg-gradient-to-tr from-purple-400 to-blue-300 rounded-full flex items-center justify-center text-white shadow-lg">
                            <span class="text-xl">"✦"</span>
                        </div>
                        <span class="font-bold tracking-tight text-xl">{name}</span>
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=format!("mailto:{}", email)
                            class="bg-white/80 p-3 rounded-full hover:bg-white transition-all shadow-sm"
                        >
                            <span class="text-purple-400 text-lg">"✉"</span>
                        </a>
                    </div>
                </header>

                <section class="text-center mb-40">
                    <h1 class="text-7xl md:text-8xl font-black mb-10 tracking-tighter bg-gradient-to-r from-purple-600 to-blue-500 bg-clip-text text-transparent">
                        "Hello, I'm" <br /> {format!("{first}.")}
                    </h1>
                    <p class="text-2xl md:text-3xl font-medium opacity-60 max-w-2xl mx-auto leading-relaxed italic">
                        {quote}
                    </p>
                </section>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                    <div class="bg-white/40 backdrop-blur-xl border border-white/80 p-10 rounded-[3rem] shadow-2xl shadow-purple-500/5 col-span-full md:col-span-1 hover:-translate-y-2 transition-transform">
                        <div class="w-12 h-12 bg-purple-100 rounded-2xl mb-8 flex items-center justify-center">
                            <span class="text-purple-500 text-xl">"☺"</span>
                        </div>
                        <h2 class="text-4xl font-black mb-6 tracking-tight">"The Visionary"</h2>
                        <p class="font-medium opacity-60 leading-relaxed text-lg">{visionary}</p>
                    </div>

                    <div class="bg-white/40 backdrop-blur-xl border border-white/80 p-10 rounded-[3rem] shadow-2xl shadow-purple-500/5 col-span-full md:col-span-1 hover:-translate-y-2 transition-transform">
                        <div class="w-12 h-12 bg-blue-100 rounded-2xl mb-8 flex items-center justify-center">
                            <span class="text-blue-500 text-xl">"⚡"</span>
                        </div>
                        <h2 class="text-4xl font-black mb-8 tracking-tight">"The Toolkit"</h2>
                        <div class="flex flex-wrap gap-2">
                            {toolkit
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <span class="px-4 py-1.5 bg-white rounded-full font-bold text-xs shadow-sm border border-purple-50">
                                            {skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {journey}

                    <section class="col-span-full grid grid-cols-1 md:grid-cols-2 gap-10 pt-20">
                        {academic}
                        {accolades}
                    </section>

                    {projects}
                </div>

                <footer class="mt-40 text-center">
                    <div class="inline-flex items-center gap-6 p-8 bg-white border border-white rounded-[3rem] shadow-2xl shadow-purple-500/10">
                        <div class="flex -space-x-4">
                            {(!github.is_empty())
                                .then(|| {
                                    view! {
                                        <a
                                            href=github
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-12 h-12 bg-white rounded-full border border-purple-100 flex items-center justify-center shadow-sm hover:z-10 hover:border-purple-300 transition-all"
                                        >
                                            <span class="font-bold opacity-60 text-sm">"gh"</span>
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
                                            class="w-12 h-12 bg-white rounded-full border border-purple-100 flex items-center justify-center shadow-sm hover:z-10 hover:border-purple-300 transition-all"
                                        >
                                            <span class="font-bold opacity-60 text-sm">"in"</span>
                                        </a>
                                    }
                                })}
                            <a
                                href=format!("mailto:{}", email)
                                class="w-12 h-12 bg-white rounded-full border border-purple-100 flex items-center justify-center shadow-sm hover:z-10 hover:border-purple-300 transition-all"
                            >
                                <span class="opacity-60">"✉"</span>
                            </a>
                        </div>
                        <div class="h-10 w-[1px] bg-purple-100"></div>
                        <p class="font-black opacity-30 uppercase tracking-[0.2em] text-xs">
                            "AURA_SYNCED_2026"
                        </p>
                    </div>
                    <div class="mt-10 opacity-20 font-light flex items-center justify-center gap-2 italic">
                        "Lumina Aesthetic Template" <span class="text-xs">"♥"</span>
                        "Studio Folio"
                    </div>
                </footer>
            </div>
        </div>
    }
}

fn journey_section(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section class="col-span-full pt-20">
            <h2 class="text-5xl font-black mb-16 tracking-tighter text-center">"My Journey."</h2>
            <div class="space-y-10">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, job)| {
                        view! {
                            <div class="group bg-white/60 p-10 rounded-[3rem] border border-white flex flex-col md:flex-row gap-8 items-center shadow-lg hover:shadow-2xl transition-all">
                                <div class="w-20 h-20 bg-gradient-to-tr from-purple-100 to-pink-100 rounded-full flex-shrink-0 flex items-center justify-center font-bold text-2xl text-purple-400 group-hover:scale-110 transition-transform">
                                    {i + 1}
                                </div>
                                <div class="flex-1 text-center md:text-left">
                                    <h3 class="text-2xl font-black">{job.title}</h3>
                                    <p class="font-bold opacity-40 uppercase tracking-widest text-xs mb-4">
                                        {format!("{} // {}", job.company, job.period)}
                                    </p>
                                    <div class="space-y-2">
                                        {job.highlights
                                            .into_iter()
                                            .map(|point| {
                                                view! {
                                                    <p class="font-medium opacity-60 leading-relaxed text-sm">
                                                        {format!("• {point}")}
                                                    </p>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="bg-white p-4 rounded-full shadow-sm">
                                    <span class="text-blue-300 text-xl inline-block animate-[spin-slow_12s_linear_infinite]">
                                        "⟳"
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn projects_section(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <section class="col-span-full pt-20">
            <h2 class="text-5xl font-black mb-16 tracking-tighter text-center">
                "Dream Projects."
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                {entries
                    .into_iter()
                    .map(|project| {
                        let chips: Vec<String> = project
                            .tech
                            .split(',')
                            .map(|t| format!("#{}", t.trim()))
                            .collect();
                        view! {
                            <div class="bg-gradient-to-b from-white to-purple-50/30 border border-white p-12 rounded-[4rem] shadow-xl hover:scale-[1.02] transition-transform">
                                <div class="w-14 h-14 bg-white rounded-2xl mb-10 flex items-center justify-center shadow-md">
                                    <span class="text-purple-400 text-2xl">"🚀"</span>
                                </div>
                                <h3 class="text-4xl font-black mb-6 tracking-tight leading-none">
                                    {project.title}
                                </h3>
                                <p class="font-medium opacity-60 mb-10 text-lg leading-relaxed">
                                    {project.description}
                                </p>
                                <div class="flex flex-wrap gap-2 mb-8">
                                    {chips
                                        .into_iter()
                                        .map(|chip| {
                                            view! {
                                                <span class="bg-purple-50 text-[10px] font-black text-purple-400 px-3 py-1 rounded-lg border border-purple-100">
                                                    {chip}
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
        </section>
    }
}
