use chrono::{Datelike, Utc};
use leptos::{either::EitherOf5, prelude::*};

use crate::profile::{
    AwardEntry, EducationEntry, ExperienceEntry, PortfolioData, ProjectEntry, SkillGroup,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Experience,
    Projects,
    Skills,
    Education,
    Awards,
}

impl Section {
    const ALL: [Self; 5] = [
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Awards,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Awards => "awards",
        }
    }
}

/// Executive one-pager: serif headings on washed-out slate, one section on
/// screen at a time.
#[component]
pub fn MinimalistTemplate(data: PortfolioData) -> impl IntoView {
    let (section, set_section) = signal(Section::default());

    let name = data.name.clone();
    let footer_name = data.name.clone();
    let position = data.position.clone();
    let email = data.email.clone();
    let location = data.location.clone();
    let linkedin = data.linkedin.clone();
    let profile = StoredValue::new(data);
    let year = Utc::now().year();

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-900 font-serif selection:bg-slate-200">
            <div class="max-w-5xl mx-auto px-8 py-20">
                <header class="border-b border-slate-200 pb-12 mb-16">
                    <div class="flex flex-col md:flex-row justify-between items-baseline gap-4 mb-8">
                        <h1 class="text-5xl font-light tracking-tight text-slate-900 uppercase">
                            {name}
                        </h1>
                        <span class="text-xl text-slate-500 font-sans tracking-widest uppercase">
                            {position}
                        </span>
                    </div>

                    <div class="flex flex-wrap gap-x-8 gap-y-2 text-sm font-sans tracking-wider text-slate-400 uppercase">
                        <a
                            href=format!("mailto:{}", email)
                            class="hover:text-slate-900 transition flex items-center gap-2"
                        >
                            "✉ "
                            {email}
                        </a>
                        <span class="flex items-center gap-2">"⌖ " {location}</span>
                        {(!linkedin.is_empty())
                            .then(|| {
                                view! {
                                    <a
                                        href=linkedin
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="hover:text-slate-900 transition flex items-center gap-2"
                                    >
                                        "in LinkedIn"
                                    </a>
                                }
                            })}
                    </div>
                </header>

                <div class="grid grid-cols-1 md:grid-cols-12 gap-16">
                    <aside class="md:col-span-3">
                        <nav class="flex flex-col gap-6 font-sans text-xs font-bold tracking-[0.2em] uppercase text-slate-400">
                            {Section::ALL
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <button
                                            class=move || {
                                                let active = if section() == tab {
                                                    " text-slate-900 translate-x-2"
                                                } else {
                                                    ""
                                                };
                                                format!(
                                                    "relative text-left transition-all duration-300 hover:text-slate-900{active}",
                                                )
                                            }
                                            on:click=move |_| set_section(tab)
                                        >
                                            {move || {
                                                (section() == tab)
                                                    .then(|| {
                                                        view! { <span class="absolute -left-4">"/"</span> }
                                                    })
                                            }}
                                            {tab.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </aside>

                    <main class="md:col-span-9">
                        {move || {
                            let data = profile.get_value();
                            match section() {
                                Section::Experience => {
                                    EitherOf5::A(experience_section(data.experience))
                                }
                                Section::Projects => EitherOf5::B(projects_section(data.projects)),
                                Section::Skills => EitherOf5::C(skills_section(data.skills)),
                                Section::Education => {
                                    EitherOf5::D(education_section(data.education))
                                }
                                Section::Awards => EitherOf5::E(awards_section(data.awards)),
                            }
                        }}
                    </main>
                </div>

                <footer class="mt-32 pt-16 border-t border-slate-100 flex flex-col md:flex-row justify-between items-center gap-8 font-sans text-[10px] font-bold tracking-[0.4em] uppercase text-slate-300">
                    <span>{format!("© {year} {footer_name} — All Rights Reserved")}</span>
                    <div class="flex gap-8">
                        <a href="#" class="hover:text-slate-900 transition">
                            "Design System"
                        </a>
                        <a href="#" class="hover:text-slate-900 transition">
                            "Contact Executive"
                        </a>
                    </div>
                </footer>
            </div>
        </div>
    }
}

fn experience_section(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section class="space-y-12 fade-slide-in">
            {entries
                .into_iter()
                .map(|job| {
                    view! {
                        <div class="group">
                            <div class="flex justify-between items-baseline mb-4">
                                <h3 class="text-2xl font-light text-slate-900">{job.title}</h3>
                                <span class="font-sans text-xs text-slate-400 font-bold uppercase tracking-widest">
                                    {job.period}
                                </span>
                            </div>
                            <p class="text-slate-500 font-sans font-medium uppercase tracking-wider mb-4">
                                {job.company}
                            </p>
                            <div class="text-slate-600 leading-loose text-lg border-l border-slate-200 pl-8 ml-1 space-y-2">
                                {job.highlights
                                    .into_iter()
                                    .map(|point| view! { <p class="text-sm">"• " {point}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn projects_section(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <section class="grid grid-cols-1 gap-16 fade-slide-in">
            {entries
                .into_iter()
                .map(|project| {
                    view! {
                        <div class="group cursor-pointer">
                            <h3 class="text-3xl font-light text-slate-900 mb-6 group-hover:italic transition-all">
                                {project.title}
                            </h3>
                            <div class="aspect-[16/9] bg-slate-100 overflow-hidden mb-8 border border-slate-200">
                                <div class="w-full h-full bg-gradient-to-br from-slate-200 to-slate-100 flex items-center justify-center text-slate-300 uppercase tracking-widest text-xs font-sans">
                                    "/ Illustration /"
                                </div>
                            </div>
                            <p class="font-sans text-xs text-slate-400 font-bold uppercase tracking-widest mb-4">
                                {project.tech}
                            </p>
                            <p class="text-slate-600 leading-loose max-w-2xl text-sm">
                                {project.description}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn skills_section(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section class="space-y-12 fade-slide-in">
            {groups
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="border-b border-slate-100 pb-8 last:border-0">
                            <h3 class="font-sans text-xs text-slate-400 font-bold uppercase tracking-[0.3em] mb-8">
                                {group.category}
                            </h3>
                            <div class="flex flex-wrap gap-x-12 gap-y-4">
                                {group.items
                                    .into_iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="text-xl font-light text-slate-900">{skill}</span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn education_section(entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <section class="space-y-12 fade-slide-in">
            {entries
                .into_iter()
                .map(|school| {
                    let grade = school.grade.clone();
                    view! {
                        <div>
                            <div class="flex justify-between items-baseline mb-4">
                                <h3 class="text-2xl font-light text-slate-900">
                                    {school.degree_line()}
                                </h3>
                                <span class="font-sans text-xs text-slate-400 font-bold uppercase tracking-widest">
                                    {school.span()}
                                </span>
                            </div>
                            <p class="text-slate-500 font-sans font-medium uppercase tracking-wider">
                                {school.institution.clone()}
                            </p>
                            {(!grade.is_empty())
                                .then(|| {
                                    view! {
                                        <p class="mt-2 text-sm text-slate-400 font-sans italic">
                                            "Academic Standing: " {grade}
                                        </p>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn awards_section(entries: Vec<AwardEntry>) -> impl IntoView {
    view! {
        <section class="space-y-12 fade-slide-in">
            {entries
                .into_iter()
                .map(|award| {
                    view! {
                        <div class="group">
                            <div class="flex justify-between items-baseline mb-4">
                                <h3 class="text-2xl font-light text-slate-900">{award.title}</h3>
                                <span class="font-sans text-xs text-slate-400 font-bold uppercase tracking-widest">
                                    {award.date}
                                </span>
                            </div>
                            <p class="text-slate-500 font-sans font-medium uppercase tracking-wider">
                                {award.issuer}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
