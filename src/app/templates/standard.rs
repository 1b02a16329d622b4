use leptos::{either::EitherOf3, html, prelude::*};

use crate::profile::{AwardEntry, EducationEntry, ExperienceEntry, PortfolioData, ProjectEntry, SkillGroup};

/// Accent palettes for the scroll-reactive theme picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    None,
    #[default]
    Rainbow,
    Ocean,
    Sunset,
    Forest,
    Purple,
    Fire,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::None,
        Theme::Rainbow,
        Theme::Ocean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Purple,
        Theme::Fire,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::None => "No Theme",
            Theme::Rainbow => "Rainbow",
            Theme::Ocean => "Ocean",
            Theme::Sunset => "Sunset",
            Theme::Forest => "Forest",
            Theme::Purple => "Purple Dream",
            Theme::Fire => "Fire",
        }
    }

    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Theme::None => &["#6B7280"],
            Theme::Rainbow => {
                &["#8B5CF6", "#3B82F6", "#06B6D4", "#10B981", "#F59E0B", "#EF4444"]
            }
            Theme::Ocean => &["#0EA5E9", "#06B6D4", "#3B82F6", "#6366F1"],
            Theme::Sunset => &["#F97316", "#EF4444", "#EC4899", "#8B5CF6"],
            Theme::Forest => &["#10B981", "#059669", "#14B8A6", "#06B6D4"],
            Theme::Purple => &["#8B5CF6", "#A855F7", "#C026D3", "#E879F9"],
            Theme::Fire => &["#DC2626", "#EA580C", "#F59E0B", "#FBBF24"],
        }
    }

    /// Accent for the current scroll depth, as a percentage. Rainbow sweeps
    /// the hue wheel, the fixed palettes step through their swatches.
    pub fn accent(self, progress: f64) -> String {
        match self {
            Theme::None => "#6B7280".to_string(),
            Theme::Rainbow => {
                let hue = (progress * 3.6) % 360.0;
                format!("hsl({hue:.1}, 70%, 50%)")
            }
            _ => {
                let colors = self.colors();
                let index =
                    ((progress / 100.0) * colors.len() as f64).floor() as usize % colors.len();
                colors[index].to_string()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Section {
    #[default]
    About,
    Resume,
    Portfolio,
}

impl Section {
    const ALL: [Section; 3] = [Section::About, Section::Resume, Section::Portfolio];

    fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Resume => "Resume",
            Section::Portfolio => "Portfolio",
        }
    }
}

#[component]
pub fn StandardTemplate(data: PortfolioData) -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());
    let (section, set_section) = signal(Section::default());
    let (show_picker, set_show_picker) = signal(false);
    let (progress, set_progress) = signal(0.0_f64);
    let canvas_ref = NodeRef::<html::Canvas>::new();

    let accent = move || theme().accent(progress());

    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(root) = document().document_element() {
            let span = f64::from(root.scroll_height() - root.client_height());
            if span > 0.0 {
                set_progress((f64::from(root.scroll_top()) / span * 100.0).clamp(0.0, 100.0));
            }
        }
    });
    on_cleanup(move || scroll_handle.remove());

    // cursor trail: a short-lived burst of accent particles per mouse move
    #[cfg(feature = "hydrate")]
    {
        use std::{
            cell::{Cell, RefCell},
            rc::Rc,
        };
        use wasm_bindgen::JsCast;

        #[derive(Clone, Copy)]
        struct Particle {
            x: f64,
            y: f64,
            vx: f64,
            vy: f64,
            life: f64,
            size: f64,
            color: &'static str,
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

        let particles = Rc::new(RefCell::new(Vec::<Particle>::new()));
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
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                fit(&canvas);
            }
        });
        on_cleanup(move || resize_handle.remove());

        let spawn_handle = window_event_listener(leptos::ev::mousemove, {
            let particles = Rc::clone(&particles);
            move |ev| {
                let theme = theme.get_untracked();
                if theme == Theme::None {
                    return;
                }
                let colors = theme.colors();
                for _ in 0..3 {
                    let pick =
                        (js_sys::Math::random() * colors.len() as f64) as usize % colors.len();
                    particles.borrow_mut().push(Particle {
                        x: f64::from(ev.client_x()),
                        y: f64::from(ev.client_y()),
                        vx: (js_sys::Math::random() - 0.5) * 2.0,
                        vy: (js_sys::Math::random() - 0.5) * 2.0,
                        life: 1.0,
                        size: js_sys::Math::random() * 8.0 + 4.0,
                        color: colors[pick],
                    });
                }
            }
        });
        on_cleanup(move || spawn_handle.remove());

        let draw = {
            let particles = Rc::clone(&particles);
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
                ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
                particles.borrow_mut().retain_mut(|p| {
                    p.x += p.vx;
                    p.y += p.vy;
                    p.life -= 0.01;
                    p.size *= 0.98;
                    p.vy += 0.1;
                    if p.life <= 0.0 {
                        return false;
                    }
                    ctx.begin_path();
                    let _ = ctx.arc(p.x, p.y, p.size.max(0.0), 0.0, std::f64::consts::TAU);
                    let alpha = (p.life * 255.0) as u8;
                    ctx.set_fill_style_str(&format!("{}{alpha:02x}", p.color));
                    ctx.fill();
                    ctx.set_shadow_blur(15.0);
                    ctx.set_shadow_color(p.color);
                    ctx.fill();
                    ctx.set_shadow_blur(0.0);
                    true
                });
                true
            }
        };
        raf_loop(Rc::new(draw));
    }

    let initials = data.initials();
    let name = data.name.clone();
    let position = data.position.clone();
    let experience_label = data.experience_label.clone();
    let email = data.email.clone();
    let phone = data.phone.clone();
    let location = data.location.clone();
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();
    let cv = data.cv.clone();
    let profile = StoredValue::new(data);

    let download = cv.and_then(|meta| {
        meta.download_link.map(|link| {
            (
                link,
                meta.original_name.unwrap_or_else(|| "resume.pdf".to_string()),
            )
        })
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-gray-900 to-gray-800 text-gray-100 relative">
            <canvas
                node_ref=canvas_ref
                class="fixed inset-0 pointer-events-none z-50"
                style="mix-blend-mode: screen"
            ></canvas>

            <button
                on:click=move |_| set_show_picker(!show_picker.get_untracked())
                class="fixed bottom-8 right-8 z-40 w-14 h-14 rounded-full shadow-2xl flex items-center justify-center transition-all hover:scale-110"
                style=move || {
                    format!("background: linear-gradient(135deg, {0}, {0}cc)", accent())
                }
            >
                <span class="text-xl text-white">"◈"</span>
            </button>

            {move || {
                show_picker()
                    .then(|| {
                        view! {
                            <div class="fixed bottom-24 right-8 z-40 bg-gray-800/95 backdrop-blur-xl border border-gray-700 rounded-2xl p-6 shadow-2xl animate-slideUp">
                                <h3 class="text-lg font-bold mb-4" style:color=accent>
                                    "Choose Theme"
                                </h3>
                                <div class="space-y-2">
                                    {Theme::ALL
                                        .iter()
                                        .map(|&option| {
                                            view! {
                                                <button
                                                    on:click=move |_| {
                                                        set_theme(option);
                                                        set_show_picker(false);
                                                    }
                                                    class=move || {
                                                        if theme() == option {
                                                            "w-full px-4 py-3 rounded-xl text-left transition-all bg-gray-700"
                                                        } else {
                                                            "w-full px-4 py-3 rounded-xl text-left transition-all bg-gray-700/30 hover:bg-gray-700/50"
                                                        }
                                                    }
                                                >
                                                    <div class="flex items-center gap-3">
                                                        <div class="flex gap-1">
                                                            {option
                                                                .colors()
                                                                .iter()
                                                                .take(4)
                                                                .map(|color| {
                                                                    view! {
                                                                        <div
                                                                            class="w-4 h-4 rounded-full"
                                                                            style:background-color=*color
                                                                        ></div>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </div>
                                                        <span class="font-medium">{option.name()}</span>
                                                    </div>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="fixed top-0 left-0 w-full h-1 z-50 bg-gray-800">
                <div
                    class="h-full transition-all duration-300"
                    style=move || {
                        format!(
                            "width: {:.1}%; background: linear-gradient(90deg, {1}, {1}cc)",
                            progress(),
                            accent(),
                        )
                    }
                ></div>
            </div>

            <div class="flex">
                <aside class="w-80 bg-gray-800/50 backdrop-blur-sm border-r border-gray-700/50 p-8 flex flex-col sticky top-0 h-screen">
                    <div class="flex flex-col items-center mb-8">
                        <div class="relative mb-6">
                            <div
                                class="w-40 h-40 rounded-3xl overflow-hidden flex items-center justify-center shadow-2xl transition-all duration-500"
                                style=move || {
                                    format!(
                                        "background: linear-gradient(135deg, {0}, {0}50); box-shadow: 0 0 60px {0}50",
                                        accent(),
                                    )
                                }
                            >
                                <span class="text-5xl font-bold text-white">{initials}</span>
                            </div>
                            <div
                                class="absolute bottom-2 right-2 w-6 h-6 rounded-full border-4 border-gray-800 animate-pulse"
                                style:background-color=accent
                            ></div>
                        </div>
                        <h1 class="text-2xl font-bold text-center mb-2">{name}</h1>
                        <p class="text-gray-400 text-center mb-4">{position}</p>
                        {(!experience_label.is_empty())
                            .then(|| {
                                view! {
                                    <div
                                        class="flex items-center gap-2 px-4 py-2 rounded-full backdrop-blur-sm"
                                        style=move || {
                                            format!(
                                                "background: linear-gradient(135deg, {0}20, {0}10); border: 1px solid {0}30",
                                                accent(),
                                            )
                                        }
                                    >
                                        <div
                                            class="w-2 h-2 rounded-full animate-pulse"
                                            style:background-color=accent
                                        ></div>
                                        <span class="text-sm font-semibold text-white">
                                            {experience_label}
                                        </span>
                                    </div>
                                }
                            })}
                        {download
                            .map(|(link, file_name)| {
                                view! {
                                    <a
                                        href=link
                                        download=file_name
                                        class="w-full mt-6 flex items-center justify-center gap-3 px-6 py-4 rounded-xl font-semibold transition-all hover:scale-105 hover:shadow-2xl text-white tracking-wide"
                                        style=move || {
                                            format!(
                                                "background: linear-gradient(135deg, {0}, {0}cc); box-shadow: 0 8px 32px {0}40",
                                                accent(),
                                            )
                                        }
                                    >
                                        "Download Resume"
                                    </a>
                                }
                            })}
                    </div>

                    <div class="space-y-4 mb-8">
                        <div class="flex items-start gap-3 p-3 bg-gray-700/30 rounded-lg hover:bg-gray-700/50 transition-all hover:scale-105">
                            <span class="flex-shrink-0 mt-0.5" style:color=accent>
                                "✉"
                            </span>
                            <div class="overflow-hidden">
                                <p class="text-xs text-gray-400 mb-1">"EMAIL"</p>
                                <p class="text-sm break-all">{email}</p>
                            </div>
                        </div>
                        <div class="flex items-start gap-3 p-3 bg-gray-700/30 rounded-lg hover:bg-gray-700/50 transition-all hover:scale-105">
                            <span class="flex-shrink-0 mt-0.5" style:color=accent>
                                "✆"
                            </span>
                            <div>
                                <p class="text-xs text-gray-400 mb-1">"PHONE"</p>
                                <p class="text-sm">{phone}</p>
                            </div>
                        </div>
                        <div class="flex items-start gap-3 p-3 bg-gray-700/30 rounded-lg hover:bg-gray-700/50 transition-all hover:scale-105">
                            <span class="flex-shrink-0 mt-0.5" style:color=accent>
                                "⌖"
                            </span>
                            <div>
                                <p class="text-xs text-gray-400 mb-1">"LOCATION"</p>
                                <p class="text-sm">{location}</p>
                            </div>
                        </div>
                    </div>

                    <div class="flex gap-4 justify-center mt-auto">
                        {(!linkedin.is_empty())
                            .then(|| {
                                view! {
                                    <a
                                        href=linkedin.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="w-10 h-10 bg-gray-700/50 rounded-lg flex items-center justify-center hover:scale-110 transition-transform font-bold"
                                    >
                                        "in"
                                    </a>
                                }
                            })}
                        {(!github.is_empty())
                            .then(|| {
                                view! {
                                    <a
                                        href=github.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="w-10 h-10 bg-gray-700/50 rounded-lg flex items-center justify-center hover:scale-110 transition-transform font-bold"
                                    >
                                        "gh"
                                    </a>
                                }
                            })}
                    </div>
                </aside>

                <main class="flex-1">
                    <nav class="bg-gray-800/30 backdrop-blur-md border-b border-gray-700/50 sticky top-0 z-40">
                        <div class="max-w-7xl mx-auto px-12 h-20 flex items-center justify-between">
                            <div class="text-2xl font-bold tracking-wider" style:color=accent>
                                {move || section().label()}
                            </div>
                            <ul class="flex items-center gap-2">
                                {Section::ALL
                                    .iter()
                                    .map(|&tab| {
                                        view! {
                                            <li>
                                                <button
                                                    on:click=move |_| set_section(tab)
                                                    class=move || {
                                                        if section() == tab {
                                                            "px-6 py-2 rounded-lg font-medium transition-all duration-300 text-white shadow-lg"
                                                        } else {
                                                            "px-6 py-2 rounded-lg font-medium transition-all duration-300 text-gray-400 hover:text-white hover:bg-gray-700/30"
                                                        }
                                                    }
                                                    style=move || {
                                                        if section() == tab {
                                                            let a = accent();
                                                            format!(
                                                                "background-color: {a}30; color: {a}; border-bottom: 2px solid {a}"
                                                            )
                                                        } else {
                                                            String::new()
                                                        }
                                                    }
                                                >
                                                    {tab.label()}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </nav>

                    <div class="max-w-7xl mx-auto px-12 py-16">
                        {move || {
                            let data = profile.get_value();
                            match section() {
                                Section::About => {
                                    EitherOf3::A(
                                        about_section(data.summary, data.skills, data.awards, accent),
                                    )
                                }
                                Section::Resume => {
                                    EitherOf3::B(
                                        resume_section(data.education, data.experience, accent),
                                    )
                                }
                                Section::Portfolio => {
                                    EitherOf3::C(portfolio_section(data.projects, accent))
                                }
                            }
                        }}
                    </div>
                </main>
            </div>
        </div>
    }
}

fn section_bar(accent: impl Fn() -> String + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div
            class="w-20 h-1.5 rounded-full mb-8 shadow-lg"
            style=move || format!("background-color: {0}; box-shadow: 0 0 20px {0}", accent())
        ></div>
    }
}

fn about_section(
    summary: String,
    skills: Vec<SkillGroup>,
    awards: Vec<AwardEntry>,
    accent: impl Fn() -> String + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="space-y-12 animate-fadeIn">
            <div>
                <h2 class="text-5xl font-bold mb-4">"About Me"</h2>
                {section_bar(accent)}
                <p class="text-gray-300 text-lg leading-relaxed max-w-4xl">{summary}</p>
            </div>

            <div>
                <h3 class="text-3xl font-bold mb-8 flex items-center gap-3">
                    <span class="text-2xl" style:color=accent>
                        "</>"
                    </span>
                    "Technical Skills"
                </h3>
                <div class="grid grid-cols-2 gap-6">
                    {skills
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="bg-gray-800/40 backdrop-blur-sm p-6 rounded-2xl border border-gray-700/50 hover:border-gray-600 transition-all hover:scale-105">
                                    <h4 class="font-semibold mb-4 text-lg" style:color=accent>
                                        {group.category}
                                    </h4>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1.5 bg-gray-700/50 rounded-full text-sm hover:bg-gray-700 transition">
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

            {(!awards.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h3 class="text-3xl font-bold mb-8 flex items-center gap-3">
                                <span class="text-2xl" style:color=accent>
                                    "✪"
                                </span>
                                "Awards & Recognition"
                            </h3>
                            <div class="grid grid-cols-2 gap-6">
                                {awards
                                    .into_iter()
                                    .map(|award| {
                                        view! {
                                            <div
                                                class="p-6 rounded-2xl border transition-all hover:scale-105"
                                                style=move || {
                                                    format!(
                                                        "background: linear-gradient(135deg, {0}20, transparent); border-color: {0}30; box-shadow: 0 0 30px {0}10",
                                                        accent(),
                                                    )
                                                }
                                            >
                                                <h4 class="font-semibold mb-2 text-lg">{award.title}</h4>
                                                <p class="text-gray-400">{award.issuer}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
        </div>
    }
}

fn resume_section(
    education: Vec<EducationEntry>,
    experience: Vec<ExperienceEntry>,
    accent: impl Fn() -> String + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="space-y-12 animate-fadeIn">
            <div>
                <h2 class="text-5xl font-bold mb-4">"Resume"</h2>
                {section_bar(accent)}
            </div>

            {(!education.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h3 class="text-3xl font-bold mb-8 flex items-center gap-3">
                                <span class="text-2xl" style:color=accent>
                                    "◈"
                                </span>
                                "Education"
                            </h3>
                            <div class="space-y-6">
                                {education
                                    .into_iter()
                                    .map(|entry| {
                                        let timeline = if entry.grade.is_empty() {
                                            entry.span()
                                        } else {
                                            format!("{} • CGPA: {}", entry.span(), entry.grade)
                                        };
                                        view! {
                                            <div class="bg-gray-800/40 backdrop-blur-sm p-8 rounded-2xl border border-gray-700/50">
                                                <h4 class="text-2xl font-semibold mb-2">{entry.degree}</h4>
                                                <p class="text-lg mb-2" style:color=accent>
                                                    {entry.field}
                                                </p>
                                                <p class="text-gray-400 mb-1">{entry.institution}</p>
                                                <p class="text-gray-400">{timeline}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            <div>
                <h3 class="text-3xl font-bold mb-8 flex items-center gap-3">
                    <span class="text-2xl" style:color=accent>
                        "▣"
                    </span>
                    "Professional Experience"
                </h3>
                <div class="space-y-6">
                    {experience
                        .into_iter()
                        .map(|job| {
                            view! {
                                <div class="bg-gray-800/40 backdrop-blur-sm p-8 rounded-2xl border border-gray-700/50 hover:border-gray-600 transition-all hover:scale-105">
                                    <div class="flex justify-between items-start mb-6">
                                        <div>
                                            <h4 class="text-2xl font-semibold mb-2">{job.title}</h4>
                                            <p class="text-lg" style:color=accent>
                                                {job.company}
                                            </p>
                                        </div>
                                        <span class="text-gray-400 bg-gray-700/50 px-4 py-2 rounded-lg">
                                            {job.period}
                                        </span>
                                    </div>
                                    <ul class="space-y-3">
                                        {job
                                            .highlights
                                            .into_iter()
                                            .map(|highlight| {
                                                view! {
                                                    <li class="flex items-start gap-3 text-gray-300">
                                                        <span class="flex-shrink-0 mt-1" style:color=accent>
                                                            "›"
                                                        </span>
                                                        <span>{highlight}</span>
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
        </div>
    }
}

fn portfolio_section(
    projects: Vec<ProjectEntry>,
    accent: impl Fn() -> String + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="space-y-12 animate-fadeIn">
            <div>
                <h2 class="text-5xl font-bold mb-4">"Portfolio"</h2>
                {section_bar(accent)}
                <p class="text-gray-400 text-lg mb-8">
                    "Showcasing key projects demonstrating expertise in backend development, microservices."
                </p>
            </div>

            <div class="grid grid-cols-2 gap-8">
                {projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="bg-gray-800/40 backdrop-blur-sm rounded-2xl border border-gray-700/50 overflow-hidden hover:border-gray-600 transition-all hover:scale-105 group">
                                <div class="h-56 bg-gradient-to-br from-purple-600 to-blue-600 p-8 flex items-center justify-center relative overflow-hidden">
                                    <div class="absolute inset-0 bg-black/20 group-hover:bg-black/10 transition"></div>
                                    <h3 class="text-4xl font-bold text-white z-10">{project.title}</h3>
                                </div>
                                <div class="p-8">
                                    <p class="text-sm mb-4 font-mono" style:color=accent>
                                        {project.tech}
                                    </p>
                                    <p class="text-gray-300 leading-relaxed">{project.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_accent_sweeps_the_hue_wheel() {
        assert_eq!(Theme::Rainbow.accent(0.0), "hsl(0.0, 70%, 50%)");
        assert_eq!(Theme::Rainbow.accent(50.0), "hsl(180.0, 70%, 50%)");
        assert_eq!(Theme::Rainbow.accent(100.0), "hsl(0.0, 70%, 50%)");
    }

    #[test]
    fn test_palette_accent_steps_through_swatches() {
        assert_eq!(Theme::Ocean.accent(0.0), "#0EA5E9");
        assert_eq!(Theme::Ocean.accent(30.0), "#06B6D4");
        assert_eq!(Theme::Ocean.accent(99.0), "#6366F1");
        assert_eq!(Theme::Ocean.accent(100.0), "#0EA5E9");
    }

    #[test]
    fn test_no_theme_is_a_fixed_grey() {
        assert_eq!(Theme::None.accent(0.0), "#6B7280");
        assert_eq!(Theme::None.accent(87.5), "#6B7280");
    }

    #[test]
    fn test_every_theme_names_its_swatches() {
        for theme in Theme::ALL {
            assert!(!theme.name().is_empty());
            assert!(!theme.colors().is_empty());
        }
        assert_eq!(Theme::Purple.name(), "Purple Dream");
        assert_eq!(Theme::default(), Theme::Rainbow);
    }
}
