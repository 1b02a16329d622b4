use leptos::{
    either::Either,
    ev::{DragEvent, Event, SubmitEvent},
    prelude::*,
};
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use super::upload::post_cv;
use super::upload::{UploadController, UploadPhase};
#[cfg(feature = "hydrate")]
use super::ProfileStore;

const FEATURES: [(&str, &str, &str); 3] = [
    ("✦", "AI Analysis", "Deep learning algorithms review every detail"),
    ("⚡", "Instant Results", "Get comprehensive feedback in seconds"),
    ("✓", "Secure & Private", "Your data is encrypted and protected"),
];

// deterministic scatter so server and client render the same particle field
fn particle_style(i: usize) -> String {
    let frac = |x: f64| x - x.floor();
    let n = i as f64 + 1.0;
    let size = 2.0 + frac(n * 0.618_034) * 6.0;
    let left = frac(n * 0.754_878) * 100.0;
    let top = frac(n * 0.569_840) * 100.0;
    let duration = 10.0 + frac(n * 0.318_310) * 10.0;
    let delay = frac(n * 0.414_214) * 5.0;
    format!(
        "width: {size:.1}px; height: {size:.1}px; left: {left:.1}%; top: {top:.1}%; \
         animation: float {duration:.1}s linear infinite; animation-delay: {delay:.1}s;"
    )
}

/// Upload screen. A successful analysis publishes the profile and moves on
/// to the rendered portfolio.
#[component]
pub fn LandingPage() -> impl IntoView {
    let controller = UploadController::new();
    let picked = RwSignal::new_local(None::<web_sys::File>);
    let (is_dragging, set_is_dragging) = signal(false);
    let (glow, set_glow) = signal((50.0_f64, 50.0_f64));

    #[cfg(feature = "hydrate")]
    let aborter = StoredValue::new_local(None::<web_sys::AbortController>);
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(ctrl) = aborter.get_value() {
            ctrl.abort();
        }
    });

    let glow_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        let win = window();
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        set_glow((
            ev.client_x() as f64 / w.max(1.0) * 100.0,
            ev.client_y() as f64 / h.max(1.0) * 100.0,
        ));
    });
    on_cleanup(move || glow_handle.remove());

    let on_pick = move |ev: Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|list| list.get(0)) {
            picked.set(Some(file));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|list| list.get(0))
        {
            picked.set(Some(file));
        }
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(file) = picked.get_untracked() else {
            return;
        };
        // one upload at a time
        if !controller.try_begin() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let store = expect_context::<ProfileStore>();
            let navigate = use_navigate();
            let abort = web_sys::AbortController::new().ok();
            aborter.set_value(abort.clone());
            leptos::task::spawn_local(async move {
                let signal = abort.as_ref().map(|ctrl| ctrl.signal());
                match post_cv(&file, signal.as_ref()).await {
                    Ok(response) => {
                        store.publish(&response);
                        controller.finish_ok();
                        navigate("/portfolio", Default::default());
                    }
                    Err(err) => {
                        log::warn!("cv upload failed: {err}");
                        controller.finish_err(err);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = file;
    };

    view! {
        <Title text="Upload Your CV" />
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 relative overflow-hidden">
            <div
                class="absolute inset-0 opacity-30"
                style=move || {
                    let (x, y) = glow();
                    format!(
                        "background: radial-gradient(circle at {x:.1}% {y:.1}%, rgba(139, 92, 246, 0.3), transparent 50%)"
                    )
                }
            ></div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                {(0..20)
                    .map(|i| {
                        view! {
                            <div
                                class="absolute rounded-full bg-purple-400 opacity-20"
                                style=particle_style(i)
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 container mx-auto px-4 py-12">
                <div class="text-center mb-16 pt-8">
                    <div class="inline-flex items-center gap-2 bg-purple-500/20 backdrop-blur-sm border border-purple-400/30 rounded-full px-6 py-2 mb-6">
                        <span class="text-purple-300">"✦"</span>
                        <span class="text-purple-200 text-sm font-medium">"AI-Powered Analysis"</span>
                    </div>

                    <h1 class="text-6xl md:text-7xl font-bold text-white mb-6 tracking-tight">
                        "Transform Your"
                        <span class="block bg-gradient-to-r from-purple-400 via-pink-400 to-purple-400 bg-clip-text text-transparent">
                            "Career Journey"
                        </span>
                    </h1>

                    <p class="text-xl text-purple-200 max-w-2xl mx-auto leading-relaxed">
                        "Upload your CV and let our advanced AI analyze, optimize, and unlock your professional potential in seconds"
                    </p>
                </div>

                <div class="max-w-4xl mx-auto">
                    <div class="bg-white/10 backdrop-blur-xl rounded-3xl p-8 md:p-12 border border-white/20 shadow-2xl">
                        <form on:submit=submit>
                            <div
                                on:dragover=move |ev: DragEvent| {
                                    ev.prevent_default();
                                    set_is_dragging(true);
                                }
                                on:dragleave=move |ev: DragEvent| {
                                    ev.prevent_default();
                                    set_is_dragging(false);
                                }
                                on:drop=on_drop
                                class=move || {
                                    let drag = if is_dragging() {
                                        "border-purple-400 bg-purple-500/20 scale-105"
                                    } else {
                                        "border-purple-300/50 bg-white/5 hover:bg-white/10"
                                    };
                                    let done = if matches!(controller.phase(), UploadPhase::Succeeded) {
                                        " pulse-glow border-green-400"
                                    } else {
                                        ""
                                    };
                                    format!(
                                        "relative border-2 border-dashed rounded-2xl p-12 transition-all duration-300 {drag}{done}"
                                    )
                                }
                            >
                                <input
                                    type="file"
                                    name="cv"
                                    accept=".pdf,.doc,.docx"
                                    on:change=on_pick
                                    class="hidden"
                                    id="cv-upload"
                                />

                                <label for="cv-upload" class="cursor-pointer block text-center">
                                    <div class="flex justify-center mb-6">
                                        {move || {
                                            if matches!(controller.phase(), UploadPhase::Succeeded) {
                                                Either::Left(
                                                    view! {
                                                        <div class="w-20 h-20 rounded-full bg-green-500/20 flex items-center justify-center">
                                                            <span class="text-3xl text-green-400">"✓"</span>
                                                        </div>
                                                    },
                                                )
                                            } else {
                                                Either::Right(
                                                    view! {
                                                        <div class="w-20 h-20 rounded-full bg-purple-500/20 flex items-center justify-center transition-transform hover:scale-110">
                                                            <span class="text-3xl text-purple-400">"↑"</span>
                                                        </div>
                                                    },
                                                )
                                            }
                                        }}
                                    </div>

                                    {move || match picked.get() {
                                        Some(file) => {
                                            Either::Left(
                                                view! {
                                                    <div class="mb-4">
                                                        <div class="inline-flex items-center gap-3 bg-purple-500/20 rounded-xl px-6 py-3 border border-purple-400/30">
                                                            <span class="text-purple-400">"▤"</span>
                                                            <span class="text-white font-medium">{file.name()}</span>
                                                        </div>
                                                    </div>
                                                },
                                            )
                                        }
                                        None => {
                                            Either::Right(
                                                view! {
                                                    <p class="text-2xl font-semibold text-white mb-2">
                                                        "Drop your CV here"
                                                    </p>
                                                    <p class="text-purple-200 mb-4">
                                                        "or click to browse from your device"
                                                    </p>
                                                },
                                            )
                                        }
                                    }}

                                    <p class="text-sm text-purple-300">
                                        "Supports PDF, DOC, DOCX • Max 10MB"
                                    </p>
                                </label>
                            </div>

                            {move || {
                                picked
                                    .with(|file| file.is_some())
                                    .then(|| {
                                        view! {
                                            <button
                                                type="submit"
                                                disabled=move || controller.is_submitting()
                                                class="w-full mt-8 bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600 text-white font-bold py-5 px-8 rounded-xl transition-all duration-300 transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-3 text-lg shadow-lg shadow-purple-500/50"
                                            >
                                                {move || {
                                                    if controller.is_submitting() {
                                                        Either::Left(
                                                            view! {
                                                                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                                                                "Analyzing..."
                                                            },
                                                        )
                                                    } else {
                                                        Either::Right(
                                                            view! {
                                                                <span>"⚡"</span>
                                                                "Analyze My CV"
                                                                <span>"→"</span>
                                                            },
                                                        )
                                                    }
                                                }}
                                            </button>
                                        }
                                    })
                            }}

                            {move || match controller.phase() {
                                UploadPhase::Failed(err) => {
                                    Either::Left(
                                        view! {
                                            <div class="mt-6 bg-red-500/20 border border-red-400/40 rounded-xl p-4 text-center">
                                                <p class="text-red-200 mb-3">{err.to_string()}</p>
                                                <button
                                                    type="button"
                                                    class="bg-red-500/30 hover:bg-red-500/50 text-white font-semibold py-2 px-6 rounded-lg transition-colors"
                                                    on:click=move |_| controller.reset()
                                                >
                                                    "Try Again"
                                                </button>
                                            </div>
                                        },
                                    )
                                }
                                _ => Either::Right(()),
                            }}
                        </form>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6 mt-12">
                        {FEATURES
                            .into_iter()
                            .map(|(icon, title, desc)| {
                                view! {
                                    <div class="bg-white/5 backdrop-blur-sm rounded-2xl p-6 border border-white/10 hover:bg-white/10 transition-all duration-300 group">
                                        <div class="text-2xl text-purple-400 mb-4 group-hover:scale-110 transition-transform">
                                            {icon}
                                        </div>
                                        <h3 class="text-white font-semibold text-lg mb-2">{title}</h3>
                                        <p class="text-purple-200 text-sm">{desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
