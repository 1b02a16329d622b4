use chrono::{Datelike, Utc};
use leptos::{either::Either, prelude::*};

use crate::profile::{EducationEntry, ExperienceEntry, PortfolioData, ProjectEntry, SkillGroup};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Flux,
    Solar,
}

impl Mode {
    fn accent(self) -> &'static str {
        match self {
            Self::Solar => "text-amber-600",
            Self::Flux => "text-cyan-400",
        }
    }

    fn core_color(self) -> &'static str {
        match self {
            Self::Solar => "#fbbf24",
            Self::Flux => "#22d3ee",
        }
    }

    fn glow(self) -> &'static str {
        match self {
            Self::Solar => "rgba(251, 191, 36, 0.08)",
            Self::Flux => "rgba(34, 211, 238, 0.12)",
        }
    }

    fn flare_bright(self) -> &'static str {
        match self {
            Self::Solar => "rgba(251, 191, 36, 1)",
            Self::Flux => "rgba(34, 211, 238, 1)",
        }
    }

    fn flare_soft(self) -> &'static str {
        match self {
            Self::Solar => "rgba(251, 191, 36, 0.1)",
            Self::Flux => "rgba(34, 211, 238, 0.1)",
        }
    }

    fn dust(self) -> &'static str {
        match self {
            Self::Solar => "rgba(251, 191, 36, 0.2)",
            Self::Flux => "rgba(255, 255, 255, 0.15)",
        }
    }
}

fn exp_cycles(experience_label: &str) -> String {
    experience_label
        .split_whitespace()
        .next()
        .map(|years| format!("{years}Y"))
        .unwrap_or_else(|| "10Y".to_string())
}

fn deployed_systems(count: usize) -> String {
    if count == 0 {
        "12".to_string()
    } else {
        count.to_string()
    }
}

/// Celestial-mood page with two lighting modes. A grabbable "stellar core"
/// with a face hovers over giant display type; everything recolors when the
/// visitor flips between FLUX (night) and SOLAR (day).
#[component]
pub fn IdeaTemplate(data: PortfolioData) -> impl IntoView {
    let mode = RwSignal::new(Mode::default());
    let core_offset = RwSignal::new((0.0_f64, 0.0_f64));
    let drag_from = RwSignal::new(None::<(f64, f64)>);
    let profile = StoredValue::new(data);

    let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        if let Some((from_x, from_y)) = drag_from.get_untracked() {
            core_offset.set((
                f64::from(ev.client_x()) - from_x,
                f64::from(ev.client_y()) - from_y,
            ));
        }
    });
    on_cleanup(move || move_handle.remove());
    let up_handle = window_event_listener(leptos::ev::mouseup, move |_| {
        drag_from.set(None);
    });
    on_cleanup(move || up_handle.remove());

    move || page(mode.get(), mode, profile, core_offset, drag_from)
}

fn page(
    current: Mode,
    mode: RwSignal<Mode>,
    profile: StoredValue<PortfolioData>,
    core_offset: RwSignal<(f64, f64)>,
    drag_from: RwSignal<Option<(f64, f64)>>,
) -> impl IntoView {
    let data = profile.get_value();
    let is_solar = current == Mode::Solar;

    let name = data.name.clone();
    let position = data.position.clone();
    let quote = format!("\"{}\"", data.summary);
    let cycles = exp_cycles(&data.experience_label);
    let deployed = deployed_systems(data.projects.len());
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();
    let year = Utc::now().year();

    let stack = stack_section(current, is_solar, data.skills.clone());
    let chronology = chronology_section(current, is_solar, data.experience.clone());
    let baseline = baseline_section(current, is_solar, data.education.clone());
    let clusters = clusters_section(current, is_solar, data.projects);

    let root_class = if is_solar {
        "min-h-screen transition-colors duration-1000 font-sans selection:bg-cyan-500/30 overflow-x-hidden relative bg-[#fcfaf7] text-slate-900"
    } else {
        "min-h-screen transition-colors duration-1000 font-sans selection:bg-cyan-500/30 overflow-x-hidden relative bg-[#01060a] text-cyan-50"
    };

    view! {
        <div class=root_class>
            {toggle(is_solar, mode)}

            <div class="fixed inset-0 pointer-events-none">
                <div
                    class="absolute inset-0 z-[5]"
                    style=format!(
                        "background: radial-gradient(circle 1400px at 50% 150px, {} 0%, transparent 100%)",
                        current.glow(),
                    )
                ></div>

                <div class="absolute top-0 left-0 w-full h-full z-[150]">
                    <div
                        class="absolute h-[1px] blur-[3px] w-full opacity-60 animate-pulse"
                        style=format!(
                            "top: 150px; background: linear-gradient(90deg, transparent, {}, transparent)",
                            current.flare_bright(),
                        )
                    ></div>
                    <div
                        class="absolute h-32 blur-[80px] w-full opacity-25"
                        style=format!(
                            "top: 150px; background: linear-gradient(90deg, transparent, {}, transparent)",
                            current.flare_soft(),
                        )
                    ></div>

                    <div class="absolute top-0 left-1/2 -translate-x-1/2 h-full flex flex-col items-center">
                        <div
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                let (x, y) = core_offset.get_untracked();
                                drag_from
                                    .set(
                                        Some((
                                            f64::from(ev.client_x()) - x,
                                            f64::from(ev.client_y()) - y,
                                        )),
                                    );
                            }
                            style=move || {
                                let (x, y) = core_offset.get();
                                format!("transform: translate({x}px, {y}px)")
                            }
                            class="relative flex flex-col items-center pointer-events-auto cursor-grab active:cursor-grabbing mt-32"
                        >
                            <div class="relative w-32 h-32 flex items-center justify-center animate-[float_3s_ease-in-out_infinite]">
                                <div
                                    class="absolute inset-0 rounded-full blur-[70px] opacity-25"
                                    style=format!("background: {}", current.core_color())
                                ></div>
                                <div class="absolute inset-6 bg-white rounded-full blur-[20px] opacity-60"></div>
                                <div class="relative w-14 h-14 bg-white rounded-full shadow-[0_0_50px_#fff] flex items-center justify-center overflow-hidden">
                                    <svg viewBox="0 0 40 40" class="w-10 h-10">
                                        {if is_solar {
                                            Either::Left(
                                                view! {
                                                    <circle cx="14" cy="18" r="1.5" fill="#444"></circle>
                                                    <circle cx="26" cy="18" r="1.5" fill="#444"></circle>
                                                    <path
                                                        d="M 12 25 Q 20 32 28 25"
                                                        stroke="#444"
                                                        stroke-width="2"
                                                        fill="none"
                                                        stroke-linecap="round"
                                                    ></path>
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <circle cx="14" cy="18" r="1.5" fill="#06b6d4"></circle>
                                                    <circle cx="26" cy="18" r="1.5" fill="#06b6d4"></circle>
                                                    <path
                                                        d="M 13 26 Q 20 31 27 26"
                                                        stroke="#06b6d4"
                                                        stroke-width="2"
                                                        fill="none"
                                                        stroke-linecap="round"
                                                    ></path>
                                                },
                                            )
                                        }}
                                    </svg>
                                </div>
                                <div
                                    class="absolute inset-0 border rounded-full opacity-20 animate-[spin-slow_20s_linear_infinite]"
                                    style=format!("border-color: {}", current.core_color())
                                ></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <header class="relative z-[100] text-center pt-96 mb-64 pointer-events-none px-6">
                <h1 class=if is_solar {
                    "text-[8rem] md:text-[16rem] font-black uppercase tracking-tighter mb-4 leading-[0.8] transition-all duration-1000 text-slate-900 opacity-90"
                } else {
                    "text-[8rem] md:text-[16rem] font-black uppercase tracking-tighter mb-4 leading-[0.8] transition-all duration-1000 text-white mix-blend-overlay opacity-80"
                }>{name}</h1>
                <p class=if is_solar {
                    "text-[10px] md:text-sm font-black tracking-[1.5em] uppercase mt-24 px-12 py-3 inline-block rounded-full border backdrop-blur-md transition-all duration-700 text-amber-700 bg-white/80 border-amber-200"
                } else {
                    "text-[10px] md:text-sm font-black tracking-[1.5em] uppercase mt-24 px-12 py-3 inline-block rounded-full border backdrop-blur-md transition-all duration-700 text-cyan-400 bg-cyan-950/20 border-cyan-400/20"
                }>{position}</p>
            </header>

            <div class="relative z-10 flex flex-col pt-32">
                {dust_field(current)}

                <div class="pb-96 px-6 md:px-12 max-w-7xl mx-auto w-full relative z-10">
                    <section class="grid grid-cols-1 lg:grid-cols-12 gap-16 md:gap-24 mb-64 md:mb-80 items-center">
                        <div class="lg:col-span-8 space-y-10 md:space-y-12">
                            <div class="flex items-center gap-6 md:gap-8">
                                <div class=if is_solar {
                                    "w-16 md:w-20 h-[1px] transition-colors duration-700 bg-amber-300"
                                } else {
                                    "w-16 md:w-20 h-[1px] transition-colors duration-700 bg-cyan-500/30"
                                }></div>
                                <span class=if is_solar {
                                    "text-[9px] md:text-[10px] font-black tracking-[0.8em] transition-colors duration-700 text-amber-500"
                                } else {
                                    "text-[9px] md:text-[10px] font-black tracking-[0.8em] transition-colors duration-700 text-cyan-800"
                                }>"CORE_MANIFEST_V5.0"</span>
                            </div>
                            <p class=if is_solar {
                                "text-4xl md:text-8xl font-thin leading-[0.9] italic tracking-tight transition-colors duration-700 text-slate-800"
                            } else {
                                "text-4xl md:text-8xl font-thin leading-[0.9] italic tracking-tight transition-colors duration-700 text-cyan-50"
                            }>{quote}</p>
                        </div>
                        <div class=if is_solar {
                            "lg:col-span-4 p-12 md:p-16 rounded-[3rem] md:rounded-[4rem] border backdrop-blur-3xl transition-all duration-700 bg-white/70 border-amber-100 shadow-xl shadow-amber-900/5 text-slate-900"
                        } else {
                            "lg:col-span-4 p-12 md:p-16 rounded-[3rem] md:rounded-[4rem] border backdrop-blur-3xl transition-all duration-700 bg-cyan-950/10 border-cyan-400/10 text-cyan-50"
                        }>
                            <div class="space-y-10 md:space-y-12">
                                <div class=if is_solar {
                                    "border-b pb-8 transition-colors duration-700 border-amber-50"
                                } else {
                                    "border-b pb-8 transition-colors duration-700 border-cyan-950/40"
                                }>
                                    <p class=format!(
                                        "text-[8px] md:text-[9px] font-black uppercase tracking-[0.4em] mb-4 {}",
                                        current.accent(),
                                    )>"EXP_CYCLES"</p>
                                    <p class="text-7xl md:text-8xl font-black leading-none">
                                        {cycles}
                                    </p>
                                </div>
                                <div>
                                    <p class=format!(
                                        "text-[8px] md:text-[9px] font-black uppercase tracking-[0.4em] mb-4 {}",
                                        current.accent(),
                                    )>"DEPLOYED_SYSTEMS"</p>
                                    <p class="text-7xl md:text-8xl font-black leading-none">
                                        {deployed}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </section>

                    {stack}
                    {chronology}
                    {baseline}
                    {clusters}

                    <footer class=if is_solar {
                        "pt-32 md:pt-40 border-t flex flex-col md:flex-row justify-between items-center gap-16 md:gap-24 transition-all duration-1000 px-6 pb-20 border-amber-100"
                    } else {
                        "pt-32 md:pt-40 border-t flex flex-col md:flex-row justify-between items-center gap-16 md:gap-24 transition-all duration-1000 px-6 pb-20 border-cyan-950 opacity-40 hover:opacity-100"
                    }>
                        <div class="flex gap-12 md:gap-16">
                            {(!github.is_empty())
                                .then(|| {
                                    view! {
                                        <a
                                            href=github
                                            target="_blank"
                                            rel="noreferrer"
                                            class=if is_solar {
                                                "p-6 border rounded-[2rem] transition-all bg-white border-amber-100 text-slate-400 hover:text-amber-600 shadow-sm"
                                            } else {
                                                "p-6 border rounded-[2rem] transition-all bg-cyan-950/20 border-cyan-900 text-cyan-400 hover:border-cyan-400"
                                            }
                                        >
                                            <span class="text-2xl font-black">"gh"</span>
                                        </a>
                                    }
                                })}
                            {(!linkedin.is_empty())
                                .then(|| {
                                    view! {
                                        <a
                                            href=linkedin
                                            target="_blank"
                                            rel="noreferrer"
                                            class=if is_solar {
                                                "p-6 border rounded-[2rem] transition-all bg-white border-amber-100 text-slate-400 hover:text-amber-600 shadow-sm"
                                            } else {
                                                "p-6 border rounded-[2rem] transition-all bg-cyan-950/20 border-cyan-900 text-cyan-400 hover:border-cyan-400"
                                            }
                                        >
                                            <span class="text-2xl font-black">"in"</span>
                                        </a>
                                    }
                                })}
                        </div>
                        <div class=if is_solar {
                            "text-[10px] font-black uppercase tracking-[1em] text-center md:text-right transition-colors text-amber-200"
                        } else {
                            "text-[10px] font-black uppercase tracking-[1em] text-center md:text-right transition-colors text-cyan-950"
                        }>{format!("STELLAR_FLUX_PROTOCOL // {year}")}</div>
                    </footer>
                </div>
            </div>
        </div>
    }
}

fn toggle(is_solar: bool, mode: RwSignal<Mode>) -> impl IntoView {
    view! {
        <div class="fixed bottom-12 left-1/2 -translate-x-1/2 z-[2000]">
            <div class=if is_solar {
                "flex items-center p-1 rounded-full border transition-all duration-1000 backdrop-blur-3xl bg-white/80 border-amber-200 shadow-xl shadow-amber-900/5"
            } else {
                "flex items-center p-1 rounded-full border transition-all duration-1000 backdrop-blur-3xl bg-black/60 border-zinc-800 shadow-2xl shadow-black/80"
            }>
                <button
                    on:click=move |_| mode.set(Mode::Flux)
                    class=if is_solar {
                        "relative flex items-center gap-3 px-6 py-3 rounded-full transition-all duration-500 text-slate-400 border border-transparent"
                    } else {
                        "relative flex items-center gap-3 px-6 py-3 rounded-full transition-all duration-500 text-cyan-400 bg-cyan-950/40 border border-cyan-500/20"
                    }
                >
                    <span class="text-sm">"☾"</span>
                    <span class="text-[9px] font-black uppercase tracking-[0.4em]">"FLUX"</span>
                </button>
                <button
                    on:click=move |_| mode.set(Mode::Solar)
                    class=if is_solar {
                        "relative flex items-center gap-3 px-6 py-3 rounded-full transition-all duration-500 text-amber-600 bg-amber-50 border border-amber-200"
                    } else {
                        "relative flex items-center gap-3 px-6 py-3 rounded-full transition-all duration-500 text-slate-600 border border-transparent"
                    }
                >
                    <span class="text-sm">"☀"</span>
                    <span class="text-[9px] font-black uppercase tracking-[0.4em]">"SOLAR"</span>
                </button>
            </div>
        </div>
    }
}

fn dust_field(current: Mode) -> impl IntoView {
    // deterministic spread so server and client render the same specks
    view! {
        <div class="fixed inset-0 pointer-events-none z-0">
            {(0..40_usize)
                .map(|i| {
                    let size = 0.5 + (i % 4) as f64 * 0.4;
                    let left = (i * 37) % 100;
                    let top = (i * 53) % 100;
                    let duration = 30 + (i * 7) % 40;
                    let delay = (i * 11) % 30;
                    view! {
                        <div
                            class="absolute rounded-full"
                            style=format!(
                                "width: {size}px; height: {size}px; left: {left}%; top: {top}%; background: {}; animation: dust {duration}s linear -{delay}s infinite",
                                current.dust(),
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn stack_section(current: Mode, is_solar: bool, groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section class="mb-64 md:mb-80">
            <div class="flex justify-between items-end mb-24 md:mb-40">
                <h2 class=if is_solar {
                    "text-6xl md:text-[14rem] font-black uppercase tracking-tighter leading-none transition-colors duration-700 text-amber-100/50"
                } else {
                    "text-6xl md:text-[14rem] font-black uppercase tracking-tighter leading-none transition-colors duration-700 text-cyan-950/30"
                }>"Stack_Flux"</h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 md:gap-6">
                {groups
                    .into_iter()
                    .filter(|group| !group.items.is_empty())
                    .map(|group| {
                        view! {
                            <div class=if is_solar {
                                "p-10 md:p-12 rounded-[2.5rem] md:rounded-[3.5rem] border transition-all group overflow-hidden bg-white border-amber-100 hover:border-amber-400 shadow-sm"
                            } else {
                                "p-10 md:p-12 rounded-[2.5rem] md:rounded-[3.5rem] border transition-all group overflow-hidden bg-black/40 border-cyan-950/20 hover:border-cyan-400/40"
                            }>
                                <h3 class=format!(
                                    "text-[9px] md:text-[10px] font-black uppercase tracking-[0.4em] mb-8 transition-colors {}",
                                    current.accent(),
                                )>{group.category}</h3>
                                <div class="flex flex-wrap gap-3 md:gap-4">
                                    {group.items
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <span class=if is_solar {
                                                    "text-xl md:text-2xl font-black uppercase tracking-tighter transition-all text-slate-400 group-hover:text-amber-700"
                                                } else {
                                                    "text-xl md:text-2xl font-black uppercase tracking-tighter transition-all text-zinc-700 group-hover:text-white"
                                                }>{skill}</span>
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

fn chronology_section(current: Mode, is_solar: bool, entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section class="mb-64 md:mb-80">
            <h2 class=if is_solar {
                "text-6xl md:text-[12rem] font-black uppercase tracking-tighter mb-32 md:mb-48 text-center leading-none transition-colors duration-700 text-amber-50"
            } else {
                "text-6xl md:text-[12rem] font-black uppercase tracking-tighter mb-32 md:mb-48 text-center leading-none transition-colors duration-700 text-cyan-950/10"
            }>"Chronology"</h2>
            <div class="space-y-8 md:space-y-12">
                {entries
                    .into_iter()
                    .map(|job| {
                        view! {
                            <div class=if is_solar {
                                "group relative p-10 md:p-16 rounded-[3rem] md:rounded-[5rem] transition-all duration-1000 border hover:bg-white border-transparent hover:border-amber-100"
                            } else {
                                "group relative p-10 md:p-16 rounded-[3rem] md:rounded-[5rem] transition-all duration-1000 border hover:bg-cyan-950/10 border-transparent hover:border-cyan-900/40"
                            }>
                                <div class="grid grid-cols-1 lg:grid-cols-12 gap-8 md:gap-16 items-start">
                                    <div class=if is_solar {
                                        "lg:col-span-2 font-black text-[10px] tracking-[0.8em] pt-4 transition-colors text-amber-200"
                                    } else {
                                        "lg:col-span-2 font-black text-[10px] tracking-[0.8em] pt-4 transition-colors text-cyan-950"
                                    }>{job.period}</div>
                                    <div class="lg:col-span-6">
                                        <h3 class=if is_solar {
                                            "text-5xl md:text-7xl font-black transition-colors mb-4 md:mb-6 uppercase tracking-tighter leading-[0.9] text-slate-900 group-hover:text-amber-600"
                                        } else {
                                            "text-5xl md:text-7xl font-black transition-colors mb-4 md:mb-6 uppercase tracking-tighter leading-[0.9] text-zinc-100 group-hover:text-cyan-400"
                                        }>{job.title}</h3>
                                        <p class=format!(
                                            "text-[9px] font-black uppercase tracking-[0.4em] transition-colors {}",
                                            current.accent(),
                                        )>{job.company}</p>
                                    </div>
                                    <div class="lg:col-span-4 space-y-6 md:space-y-8 pt-4">
                                        {job.highlights
                                            .into_iter()
                                            .map(|point| {
                                                view! {
                                                    <p class=if is_solar {
                                                        "text-xl md:text-2xl font-extralight leading-tight transition-colors text-slate-500 group-hover:text-amber-900"
                                                    } else {
                                                        "text-xl md:text-2xl font-extralight leading-tight transition-colors text-zinc-500 group-hover:text-zinc-300"
                                                    }>{point}</p>
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
        </section>
    }
}

fn baseline_section(current: Mode, is_solar: bool, entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <section class="mb-64 md:mb-80">
            <h2 class=if is_solar {
                "text-6xl md:text-[15rem] font-black uppercase tracking-tighter mb-32 md:mb-40 text-center transition-colors duration-700 text-amber-50/50"
            } else {
                "text-6xl md:text-[15rem] font-black uppercase tracking-tighter mb-32 md:mb-40 text-center transition-colors duration-700 opacity-[0.05]"
            }>"Baseline"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-12">
                {entries
                    .into_iter()
                    .map(|school| {
                        view! {
                            <div class=if is_solar {
                                "p-16 md:p-20 rounded-[3rem] md:rounded-[4rem] border group relative overflow-hidden transition-all bg-white border-amber-100 hover:border-amber-400"
                            } else {
                                "p-16 md:p-20 rounded-[3rem] md:rounded-[4rem] border group relative overflow-hidden transition-all bg-cyan-950/5 border-cyan-900/10 hover:bg-cyan-950/20"
                            }>
                                <div class="flex flex-col gap-8 md:gap-12 relative z-10">
                                    <div class="flex items-center gap-8 md:gap-10">
                                        <span class=format!(
                                            "text-4xl transition-colors {}",
                                            current.accent(),
                                        )>"◈"</span>
                                        <div>
                                            <h4 class=if is_solar {
                                                "text-4xl md:text-5xl font-black uppercase tracking-tighter leading-none mb-3 transition-colors text-slate-800"
                                            } else {
                                                "text-4xl md:text-5xl font-black uppercase tracking-tighter leading-none mb-3 transition-colors text-zinc-200"
                                            }>{school.degree.clone()}</h4>
                                            <p class=if is_solar {
                                                "text-[9px] font-black uppercase tracking-[0.4em] transition-colors text-slate-400 group-hover:text-amber-600"
                                            } else {
                                                "text-[9px] font-black uppercase tracking-[0.4em] transition-colors text-cyan-950 group-hover:text-cyan-800"
                                            }>{school.institution.clone()}</p>
                                        </div>
                                    </div>
                                    <div class=if is_solar {
                                        "text-[10px] font-black tracking-[0.6em] text-right transition-colors text-amber-200"
                                    } else {
                                        "text-[10px] font-black tracking-[0.6em] text-right transition-colors text-cyan-900"
                                    }>
                                        {format!("{} // {}", school.start_year, school.end_year)}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn clusters_section(current: Mode, is_solar: bool, entries: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <section class="mb-64 md:mb-80">
            <div class="flex items-center gap-8 md:gap-12 mb-32 md:mb-48">
                <span class=format!(
                    "text-4xl animate-pulse transition-colors {}",
                    current.accent(),
                )>"◉"</span>
                <h2 class=if is_solar {
                    "text-5xl md:text-9xl font-black uppercase tracking-tighter transition-colors duration-700 text-slate-900"
                } else {
                    "text-5xl md:text-9xl font-black uppercase tracking-tighter transition-colors duration-700 text-white"
                }>"Project_Clusters"</h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-10">
                {entries
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class=if is_solar {
                                "p-12 md:p-16 rounded-[3.5rem] md:rounded-[4.5rem] border flex flex-col group min-h-[500px] md:h-[600px] relative overflow-hidden transition-all duration-700 bg-white border-amber-100 hover:border-amber-400"
                            } else {
                                "p-12 md:p-16 rounded-[3.5rem] md:rounded-[4.5rem] border flex flex-col group min-h-[500px] md:h-[600px] relative overflow-hidden transition-all duration-700 bg-black/60 border-cyan-950/20 hover:border-cyan-400/20"
                            }>
                                <div class="flex-1 space-y-12 md:space-y-16 relative z-10">
                                    <div class="flex items-center justify-between">
                                        <span class=format!(
                                            "text-3xl transition-colors {}",
                                            current.accent(),
                                        )>"★"</span>
                                        <span class=if is_solar {
                                            "text-[10px] font-black tracking-[0.6em] transition-colors text-amber-200"
                                        } else {
                                            "text-[10px] font-black tracking-[0.6em] transition-colors text-cyan-950"
                                        }>{project.tech}</span>
                                    </div>
                                    <h3 class=if is_solar {
                                        "text-4xl md:text-6xl font-black uppercase leading-[0.9] tracking-tighter transition-colors text-slate-900 group-hover:text-amber-600"
                                    } else {
                                        "text-4xl md:text-6xl font-black uppercase leading-[0.9] tracking-tighter transition-colors text-zinc-200 group-hover:text-white"
                                    }>{project.title}</h3>
                                    <p class=if is_solar {
                                        "text-xl md:text-2xl font-extralight leading-tight transition-colors text-slate-500 group-hover:text-amber-900"
                                    } else {
                                        "text-xl md:text-2xl font-extralight leading-tight transition-colors text-zinc-600 group-hover:text-zinc-400"
                                    }>{project.description}</p>
                                </div>
                                <button class=format!(
                                    "mt-12 flex items-center gap-6 text-[10px] font-black uppercase tracking-[0.6em] transition-all hover:translate-x-3 {}",
                                    current.accent(),
                                )>"CONNECT_SIGNAL" <span class="text-lg">"›"</span></button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_cycles_reads_the_years_figure() {
        assert_eq!(exp_cycles("7 Years Experience"), "7Y");
    }

    #[test]
    fn test_exp_cycles_defaults_without_a_label() {
        assert_eq!(exp_cycles(""), "10Y");
    }

    #[test]
    fn test_deployed_systems_never_shows_zero() {
        assert_eq!(deployed_systems(0), "12");
        assert_eq!(deployed_systems(3), "3");
    }
}
