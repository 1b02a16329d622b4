use leptos::prelude::*;

use crate::profile::{
    AwardEntry, EducationEntry, ExperienceEntry, PortfolioData, ProjectEntry, SkillGroup,
};

/// Editorial film-studio treatment: serif black-and-white spreads, a scene
/// reel for projects and a full-screen contact card at the end.
#[component]
pub fn CinematicTemplate(data: PortfolioData) -> impl IntoView {
    let (lead, tail) = match data.name.split_once(' ') {
        Some((lead, tail)) => (lead.to_string(), tail.to_string()),
        None => (data.name.clone(), String::new()),
    };
    let strapline = format!("{} — Based in {}", data.position, data.location);
    let summary = data.summary.clone();
    let email = data.email.clone();
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();

    let works = works_section(data.projects.clone());
    let arsenal = arsenal_section(data.skills.clone());
    let timeline = timeline_section(data.experience.clone());
    let foundation =
        (!data.education.is_empty()).then(|| foundation_section(data.education.clone()));
    let recognition = (!data.awards.is_empty()).then(|| recognition_section(data.awards));

    view! {
        <div class="min-h-screen bg-[#050505] text-[#f0f0f0] font-serif selection:bg-white selection:text-black scroll-smooth">
            <div class="fixed inset-0 z-0 bg-[radial-gradient(circle_at_50%_10%,rgba(255,255,255,0.05)_0%,transparent_50%)] opacity-20"></div>

            <section class="relative h-screen flex flex-col items-center justify-center p-10 z-10">
                <div class="max-w-4xl text-center">
                    <span class="text-xs font-sans tracking-[0.5em] uppercase opacity-40 mb-6 block fade-slide-in">
                        "Directing Digital Experiences"
                    </span>
                    <h1 class="text-7xl md:text-9xl font-black tracking-tighter mb-8 leading-[0.8]">
                        <div class="overflow-hidden fade-slide-in">{lead}</div>
                        <div class="overflow-hidden fade-slide-in">
                            <span class="italic opacity-30">{tail}</span>
                        </div>
                    </h1>
                    <p class="text-lg md:text-2xl font-sans font-light tracking-wide opacity-60 italic">
                        {strapline}
                    </p>
                </div>

                <div class="absolute bottom-20 left-1/2 -translate-x-1/2 opacity-20 animate-[float_2s_ease-in-out_infinite]">
                    <div class="w-[1px] h-20 bg-white"></div>
                </div>
            </section>

            <section class="relative py-40 px-10 z-10 bg-white text-black">
                <div class="max-w-5xl mx-auto flex flex-col md:flex-row gap-20">
                    <div class="w-full md:w-1/3">
                        <h2 class="text-xs font-sans font-bold tracking-widest uppercase mb-10 opacity-30 underline decoration-black underline-offset-8">
                            "The Narrative"
                        </h2>
                    </div>
                    <div class="w-full md:w-2/3">
                        <p class="text-3xl md:text-5xl font-medium leading-[1.1] tracking-tight">
                            {summary}
                        </p>
                    </div>
                </div>
            </section>

            {works}
            {arsenal}
            {timeline}
            {foundation}
            {recognition}

            <footer class="relative h-screen flex flex-col items-center justify-center bg-white text-black p-10 z-10">
                <div class="text-center">
                    <h2 class="text-6xl md:text-9xl font-black tracking-tighter mb-10 leading-[0.8]">
                        "LET'S"
                        <br />
                        <span class="italic">"CONNECT"</span>
                    </h2>
                    <a
                        href=format!("mailto:{}", email)
                        class="text-2xl md:text-4xl font-black underline underline-offset-[16px] decoration-4 hover:text-pink-600 transition-colors"
                    >
                        {email.clone()}
                    </a>
                </div>

                <div class="absolute bottom-10 left-10 right-10 flex justify-between items-center text-[10px] font-sans font-black tracking-[0.5em] opacity-30 uppercase">
                    <span>"AiFolio // Studio Edition"</span>
                    <div class="flex gap-10">
                        {(!linkedin.is_empty())
                            .then(|| {
                                view! {
                                    <a href=linkedin class="hover:opacity-100 transition-opacity">
                                        "LinkedIn"
                                    </a>
                                }
                            })}
                        {(!github.is_empty())
                            .then(|| {
                                view! {
                                    <a href=github class="hover:opacity-100 transition-opacity">
                                        "GitHub"
                                    </a>
                                }
                            })}
                    </div>
                    <span>"© 2026 Credits"</span>
                </div>
            </footer>
        </div>
    }
}

fn works_section(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <section class="relative py-40 px-10 z-10 bg-[#050505]">
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-between items-end mb-20">
                    <h2 class="text-6xl md:text-8xl font-black tracking-tighter">
                        "WORKS"
                        <span class="text-xs font-sans tracking-[0.3em] font-bold block opacity-30 mt-4">
                            "SELECTED REELS"
                        </span>
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-px bg-[#111] border border-[#111]">
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div class="group bg-[#050505] p-20 flex flex-col justify-end min-h-[600px] border border-[#111] relative overflow-hidden transition-all duration-700 hover:bg-[#111]">
                                    <div class="absolute top-10 right-10 opacity-0 group-hover:opacity-100 transition-opacity">
                                        <span class="text-2xl">"↗"</span>
                                    </div>
                                    <span class="text-xs font-sans font-bold opacity-30 mb-4 block">
                                        {format!("SCENE_0{}", i + 1)}
                                    </span>
                                    <h3 class="text-4xl md:text-5xl font-black tracking-tighter mb-6 group-hover:italic transition-all uppercase">
                                        {project.title}
                                    </h3>
                                    <p class="text-lg opacity-40 font-sans font-light max-w-sm mb-10 group-hover:opacity-100 transition-opacity">
                                        {project.description}
                                    </p>
                                    <div class="flex items-center gap-4">
                                        <div class="w-12 h-12 rounded-full border border-white/20 flex items-center justify-center group-hover:bg-white group-hover:text-black transition-all">
                                            <span class="ml-1">"▶"</span>
                                        </div>
                                        <span class="text-xs font-sans font-bold tracking-[0.3em] uppercase opacity-20">
                                            "Case Study"
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn arsenal_section(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section class="relative py-40 px-10 z-10 bg-white text-black">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-xs font-sans font-bold tracking-widest uppercase mb-20 text-center opacity-30">
                    "The Digital Arsenal"
                </h2>
                <div class="columns-1 md:columns-2 gap-20">
                    {groups
                        .into_iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <div class="mb-20 break-inside-avoid">
                                    <h3 class="text-2xl font-black italic mb-8 border-b-2 border-black/10 pb-4 flex justify-between items-center">
                                        {group.category}
                                        <span class="text-[10px] font-sans font-bold opacity-40">
                                            {format!("0{}", i + 1)}
                                        </span>
                                    </h3>
                                    <ul class="space-y-4">
                                        {group.items
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="text-3xl md:text-4xl font-light hover:italic transition-all cursor-crosshair">
                                                        {skill}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn timeline_section(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section class="relative py-40 px-10 z-10 bg-[#050505]">
            <div class="max-w-6xl mx-auto">
                <div class="space-y-0">
                    {entries
                        .into_iter()
                        .map(|job| {
                            view! {
                                <div class="group border-t border-white/10 py-20 flex flex-col md:flex-row gap-10 hover:bg-white/5 transition-colors px-10">
                                    <div class="w-full md:w-1/4">
                                        <span class="text-xs font-sans font-bold opacity-30 block mb-2">
                                            {job.period}
                                        </span>
                                        <span class="text-xl font-black italic opacity-60 group-hover:opacity-100 transition-opacity uppercase tracking-widest">
                                            {job.company}
                                        </span>
                                    </div>
                                    <div class="w-full md:w-3/4">
                                        <h4 class="text-4xl md:text-6xl font-black tracking-tighter mb-8 group-hover:italic transition-all">
                                            {job.title}
                                        </h4>
                                        <div class="space-y-6 opacity-40 group-hover:opacity-80 transition-opacity">
                                            {job.highlights
                                                .into_iter()
                                                .map(|point| {
                                                    view! {
                                                        <p class="text-xl leading-relaxed font-sans">{point}</p>
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
            </div>
        </section>
    }
}

fn foundation_section(entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <section class="relative py-40 px-10 z-10 bg-white text-black">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-xs font-sans font-bold tracking-widest uppercase mb-20 text-center opacity-30">
                    "The Foundation"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-20">
                    {entries
                        .into_iter()
                        .map(|school| {
                            let grade = school.grade.clone();
                            view! {
                                <div class="group border-l border-black/10 pl-10 py-6">
                                    <span class="text-[10px] font-sans font-bold opacity-30 block mb-2">
                                        {format!("{} — {}", school.start_year, school.end_year)}
                                    </span>
                                    <h3 class="text-3xl font-black mb-2 uppercase tracking-tight group-hover:italic transition-all">
                                        {school.degree.clone()}
                                    </h3>
                                    <p class="text-lg opacity-60 uppercase font-bold tracking-widest text-xs">
                                        {school.institution.clone()}
                                    </p>
                                    {(!grade.is_empty())
                                        .then(|| {
                                            view! {
                                                <p class="mt-4 text-[10px] font-black opacity-30">
                                                    {format!("GRADE_METER: {grade}")}
                                                </p>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn recognition_section(entries: Vec<AwardEntry>) -> impl IntoView {
    view! {
        <section class="relative py-40 px-10 z-10 bg-[#050505]">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-xs font-sans font-bold tracking-widest uppercase mb-20 text-center opacity-30">
                    "The Recognition"
                </h2>
                <div class="space-y-12">
                    {entries
                        .into_iter()
                        .map(|award| {
                            view! {
                                <div class="flex flex-col md:flex-row items-center justify-between border-b border-white/5 py-12 group hover:bg-white/5 px-10 transition-colors">
                                    <div class="flex flex-col items-center md:items-start mb-6 md:mb-0">
                                        <span class="text-[10px] font-sans font-bold opacity-30 mb-2">
                                            {award.date}
                                        </span>
                                        <h3 class="text-4xl font-black italic group-hover:not-italic transition-all uppercase tracking-tighter">
                                            {award.title}
                                        </h3>
                                    </div>
                                    <div class="text-right">
                                        <span class="text-sm font-sans font-bold tracking-[0.4em] opacity-40 uppercase">
                                            {award.issuer}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
