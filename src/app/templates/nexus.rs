use leptos::{either::EitherOf6, html, prelude::*};

use crate::profile::{
    AwardEntry, EducationEntry, ExperienceEntry, PortfolioData, ProjectEntry, SkillGroup,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Pane {
    #[default]
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Awards,
}

impl Pane {
    const ALL: [Self; 6] = [
        Self::Summary,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Awards,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Awards => "awards",
        }
    }
}

/// Sci-fi HUD over a starfield, with a holographic centerpiece where the
/// original mounted a remote 3D avatar. A speech-synthesis greeting plays
/// shortly after the page settles.
#[component]
pub fn NexusTemplate(data: PortfolioData) -> impl IntoView {
    let (pane, set_pane) = signal(Pane::default());
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::{
            cell::{Cell, RefCell},
            rc::Rc,
        };
        use wasm_bindgen::JsCast;

        const STAR_COUNT: usize = 260;

        #[derive(Clone, Copy)]
        struct Star {
            x: f64,
            y: f64,
            depth: f64,
        }

        fn fit(canvas: &web_sys::HtmlCanvasElement) {
            let win = window();
            if let Some(w) = win.inner_width().ok().and_then(|v| v.as_f64()) {
                canvas.set_width(w as u32);
            }
            if let Some(h) = win.inner_height().ok().and_then(|v| v.as_f64()) {
                canvas.set_height(h as u32);
            }
        }

        fn raf_loop(tick: Rc<dyn Fn() -> bool>) {
            let next = Rc::clone(&tick);
            request_animation_frame(move || {
                if next() {
                    raf_loop(next);
                }
            });
        }

        let stars = Rc::new(RefCell::new(Vec::<Star>::new()));
        let alive = Rc::new(Cell::new(true));
        {
            let alive = Rc::clone(&alive);
            on_cleanup(move || alive.set(false));
        }

        Effect::new(move |_| {
            if let Some(canvas) = canvas_ref.get() {
                fit(&canvas);
            }
        });
        let resize_handle = {
            let stars = Rc::clone(&stars);
            window_event_listener(leptos::ev::resize, move |_| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    fit(&canvas);
                    // respawn on resize so stars always cover the viewport
                    stars.borrow_mut().clear();
                }
            })
        };
        on_cleanup(move || resize_handle.remove());

        let draw = {
            let alive = Rc::clone(&alive);
            move || -> bool {
                if !alive.get() {
                    return false;
                }
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return true;
                };
                let ctx = match canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|obj| obj.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
                {
                    Some(ctx) => ctx,
                    None => return true,
                };
                let width = f64::from(canvas.width());
                let height = f64::from(canvas.height());
                if width <= 0.0 || height <= 0.0 {
                    return true;
                }
                let mut stars = stars.borrow_mut();
                if stars.is_empty() {
                    for _ in 0..STAR_COUNT {
                        stars.push(Star {
                            x: js_sys::Math::random() * width,
                            y: js_sys::Math::random() * height,
                            depth: js_sys::Math::random() * 0.8 + 0.2,
                        });
                    }
                }
                ctx.set_fill_style_str("#020617");
                ctx.fill_rect(0.0, 0.0, width, height);
                for (i, star) in stars.iter_mut().enumerate() {
                    star.y += star.depth * 0.7;
                    if star.y > height {
                        star.y = 0.0;
                        star.x = js_sys::Math::random() * width;
                    }
                    let alpha = (star.depth * 255.0) as u8;
                    let color = if i % 9 == 0 {
                        format!("#a855f7{alpha:02x}")
                    } else if i % 13 == 0 {
                        format!("#ec4899{alpha:02x}")
                    } else {
                        format!("#e2e8f0{alpha:02x}")
                    };
                    ctx.begin_path();
                    let _ = ctx.arc(star.x, star.y, star.depth * 1.5, 0.0, std::f64::consts::TAU);
                    ctx.set_fill_style_str(&color);
                    ctx.fill();
                }
                true
            }
        };
        raf_loop(Rc::new(draw));
    }

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        let greeting = format!(
            "Welcome to {}'s digital experience. Synchronization complete.",
            data.name
        );
        let speak = move || {
            let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(&greeting) else {
                return;
            };
            utterance.set_rate(0.9);
            utterance.set_pitch(0.8);
            if let Ok(synth) = window().speech_synthesis() {
                synth.speak(&utterance);
            }
        };
        if let Ok(handle) = set_timeout_with_handle(speak, Duration::from_millis(1500)) {
            on_cleanup(move || handle.clear());
        }
    }

    let name = data.name.clone();
    let footer_line = format!("Nexus_OS // {}_Interface // ID_8829-X", data.first_name());
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();
    let email = data.email.clone();
    let profile = StoredValue::new(data);

    view! {
        <div class="h-screen w-screen bg-[#020617] text-white overflow-hidden relative">
            <canvas node_ref=canvas_ref class="absolute inset-0"></canvas>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_50%,rgba(168,85,247,0.1),transparent)] pointer-events-none"></div>

            <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                <div class="relative w-72 h-72 animate-[float_6s_ease-in-out_infinite]">
                    <div class="absolute inset-0 rounded-full border border-pink-500/20 animate-[spin-slow_12s_linear_infinite]"></div>
                    <div class="absolute inset-8 rounded-full border border-purple-500/20 animate-[spin-slow_18s_linear_infinite_reverse]"></div>
                    <div class="absolute inset-16 rounded-full border border-blue-500/20 animate-[spin-slow_9s_linear_infinite]"></div>
                    <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-24 h-24 rounded-full bg-purple-600/50 blur-sm shadow-[0_0_60px_rgba(168,85,247,0.8)] animate-pulse"></div>
                    <div class="absolute left-1/2 top-full -translate-x-1/2 w-px h-28 bg-gradient-to-b from-blue-500/60 to-transparent"></div>
                    <div class="absolute left-1/2 top-[calc(100%+7.5rem)] -translate-x-1/2 text-pink-500 text-[10px] font-mono tracking-[0.3em] whitespace-nowrap">
                        "NEURAL_LINK // SYNC_COMPLETE"
                    </div>
                </div>
            </div>

            <div class="absolute inset-0 z-10 flex flex-col pointer-events-none">
                <header class="p-10 flex justify-between items-center pointer-events-auto">
                    <div class="flex items-center gap-4">
                        <div class="w-12 h-12 bg-purple-600 rounded-full flex items-center justify-center border border-white/20 shadow-[0_0_20px_rgba(168,85,247,0.5)]">
                            <span class="text-white text-xl">"◎"</span>
                        </div>
                        <div>
                            <h1 class="text-2xl font-black tracking-tighter uppercase">{name}</h1>
                            <div class="text-[10px] text-purple-400 font-bold tracking-[0.3em] uppercase">
                                "Nexus V4 Integrated System"
                            </div>
                        </div>
                    </div>
                    <a
                        href="/"
                        class="backdrop-blur-xl bg-white/5 p-3 rounded-xl border border-white/10 hover:bg-white/5 transition-colors"
                    >
                        <span class="text-xl">"←"</span>
                    </a>
                </header>

                <div class="flex-1 flex items-end justify-between p-10 gap-10">
                    <div class="max-w-md backdrop-blur-xl bg-white/5 p-8 rounded-[2rem] border border-white/10 pointer-events-auto shadow-[0_30px_60px_rgba(0,0,0,0.5)]">
                        <div class="flex gap-2 mb-8 overflow-x-auto">
                            {Pane::ALL
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <button
                                            on:click=move |_| set_pane(tab)
                                            class=move || {
                                                if pane() == tab {
                                                    "text-[9px] font-black px-4 py-2.5 rounded-lg uppercase tracking-widest transition-all whitespace-nowrap bg-purple-600 text-white shadow-[0_0_15px_rgba(168,85,247,0.5)]"
                                                } else {
                                                    "text-[9px] font-black px-4 py-2.5 rounded-lg uppercase tracking-widest transition-all whitespace-nowrap text-slate-500 hover:text-white"
                                                }
                                            }
                                        >
                                            {tab.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="min-h-[220px]">
                            {move || {
                                let data = profile.get_value();
                                match pane() {
                                    Pane::Summary => EitherOf6::A(summary_pane(data.summary)),
                                    Pane::Skills => EitherOf6::B(skills_pane(data.skills)),
                                    Pane::Experience => {
                                        EitherOf6::C(experience_pane(data.experience))
                                    }
                                    Pane::Projects => EitherOf6::D(projects_pane(data.projects)),
                                    Pane::Education => EitherOf6::E(education_pane(data.education)),
                                    Pane::Awards => EitherOf6::F(awards_pane(data.awards)),
                                }
                            }}
                        </div>
                    </div>

                    <div class="flex flex-col gap-4 pointer-events-auto">
                        {(!linkedin.is_empty())
                            .then(|| hud_link(linkedin.clone(), "in", "LinkedIn", "hover:text-blue-400"))}
                        {(!github.is_empty())
                            .then(|| hud_link(github.clone(), "gh", "Github", "hover:text-white"))}
                        {hud_link(format!("mailto:{email}"), "✉", "Email", "hover:text-red-400")}
                    </div>
                </div>

                <footer class="p-10 flex justify-between items-center">
                    <div class="text-[10px] font-black text-slate-600 tracking-[0.5em] uppercase">
                        {footer_line}
                    </div>
                    <div class="flex gap-2 items-center">
                        <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                        <span class="text-[9px] font-black text-slate-500 uppercase tracking-widest">
                            "System_Nominal"
                        </span>
                    </div>
                </footer>
            </div>
        </div>
    }
}

fn hud_link(
    href: String,
    glyph: &'static str,
    label: &'static str,
    hover: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=format!(
                "backdrop-blur-xl bg-white/5 h-16 w-16 rounded-2xl border border-white/10 flex items-center justify-center group transition-all relative hover:-translate-x-2 hover:scale-110 {hover}",
            )
        >
            <span class="text-xl font-black text-slate-500 group-hover:scale-110 transition-transform">
                {glyph}
            </span>
            <div class="absolute right-20 bg-black/80 text-[8px] font-black px-3 py-1.5 rounded-lg opacity-0 group-hover:opacity-100 transition-opacity uppercase tracking-widest whitespace-nowrap border border-white/10">
                {format!("Open {label}")}
            </div>
        </a>
    }
}

fn summary_pane(summary: String) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-bold flex items-center gap-2">
                <span class="text-purple-400">"❯"</span>
                "Strategic Output"
            </h2>
            <p class="text-slate-400 text-sm leading-relaxed font-medium">{summary}</p>
        </div>
    }
}

fn skills_pane(groups: Vec<SkillGroup>) -> impl IntoView {
    // two picks per category keeps the module compact
    let chips: Vec<String> = groups
        .into_iter()
        .flat_map(|group| group.items.into_iter().take(2))
        .collect();

    view! {
        <div class="grid grid-cols-2 gap-2">
            {chips
                .into_iter()
                .map(|skill| {
                    view! {
                        <div class="bg-white/5 border border-white/5 p-3 rounded-xl text-[9px] font-bold uppercase tracking-widest text-slate-300 flex items-center gap-2 hover:bg-white/10 transition-colors">
                            <div class="w-1.5 h-1.5 bg-purple-500 rounded-full"></div>
                            {skill}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn experience_pane(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {entries
                .into_iter()
                .take(2)
                .map(|job| {
                    let lead = job.highlights.first().cloned().unwrap_or_default();
                    view! {
                        <div class="relative pl-6 border-l border-purple-500/30">
                            <div class="absolute left-[-5px] top-0 w-2.5 h-2.5 bg-purple-500 rounded-full"></div>
                            <div class="text-sm font-black text-white">{job.title}</div>
                            <div class="text-[10px] text-purple-400 uppercase font-bold mb-2">
                                {format!("{} // {}", job.company, job.period)}
                            </div>
                            <p class="text-slate-500 text-[11px] line-clamp-2">{lead}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn projects_pane(entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {entries
                .into_iter()
                .take(2)
                .map(|project| {
                    view! {
                        <div class="bg-white/5 p-4 rounded-2xl border border-white/5">
                            <div class="text-xs font-black text-white mb-2">{project.title}</div>
                            <div class="text-[9px] text-slate-500 uppercase tracking-widest mb-2 italic">
                                "Tech: " {project.tech}
                            </div>
                            <p class="text-slate-400 text-[11px] leading-relaxed">
                                {project.description}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn education_pane(entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {entries
                .into_iter()
                .map(|school| {
                    view! {
                        <div class="bg-white/5 p-4 rounded-2xl border border-white/5 group hover:border-purple-500/50 transition-colors">
                            <div class="text-xs font-black text-white mb-1 uppercase tracking-tight">
                                {school.degree.clone()}
                            </div>
                            <div class="text-[9px] text-purple-400 font-bold uppercase mb-2">
                                {school.institution.clone()}
                            </div>
                            <div class="text-[8px] text-slate-500 font-mono">
                                {format!("STATUS: GRADUATED_{}", school.end_year)}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn awards_pane(entries: Vec<AwardEntry>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {entries
                .into_iter()
                .map(|award| {
                    view! {
                        <div class="bg-purple-900/10 p-4 rounded-2xl border border-purple-500/10 flex items-center gap-4">
                            <span class="text-yellow-400 text-xl">"★"</span>
                            <div>
                                <div class="text-[11px] font-black text-white">{award.title}</div>
                                <div class="text-[8px] text-slate-500 uppercase font-bold">
                                    "Issued by " {award.issuer}
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
