use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::auth::{AuthClient, Provider};
#[cfg(feature = "hydrate")]
use crate::auth::{session_from_fragment, Session, SESSION_STORAGE_KEY};

/// Sign-in screen for the admin area. Sign-in is optional: without an auth
/// backend configured the button explains itself instead of doing nothing.
#[component]
pub fn LoginScreen() -> impl IntoView {
    let client = AuthClient::from_env();
    let configured = client.is_some();

    // a returning OAuth redirect carries the session in the URL fragment;
    // an already-stored session skips the screen entirely
    #[cfg(feature = "hydrate")]
    {
        let (stored, set_session, _) =
            use_local_storage::<Session, JsonSerdeWasmCodec>(SESSION_STORAGE_KEY);
        Effect::new(move |_| {
            if stored.get_untracked().is_signed_in() {
                use_navigate()("/admin", Default::default());
                return;
            }
            let location = window().location();
            let Ok(hash) = location.hash() else {
                return;
            };
            let Some(session) = session_from_fragment(&hash) else {
                return;
            };
            set_session.set(session);
            let _ = location.set_hash("");
            use_navigate()("/admin", Default::default());
        });
    }

    let begin = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(client) = client.as_ref() {
            let origin = window().location().origin().unwrap_or_default();
            client.sign_in(Provider::Google, &format!("{origin}/login"));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &client;
    };

    view! {
        <Title text="Sign In" />
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 flex items-center justify-center p-4">
            <div class="max-w-md w-full">
                <div class="bg-white/10 backdrop-blur-2xl rounded-3xl p-8 md:p-12 border border-white/20 shadow-2xl text-center">
                    <div class="flex flex-col items-center mb-8">
                        <div class="inline-flex items-center justify-center w-20 h-20 rounded-3xl bg-gradient-to-br from-purple-500 to-pink-500 shadow-lg shadow-purple-500/20 transform rotate-3 mb-4">
                            <span class="text-4xl text-white">"⚡"</span>
                        </div>
                        <span class="text-2xl font-black text-white tracking-tight uppercase">
                            "AiFolio"
                        </span>
                    </div>

                    <h1 class="text-3xl font-bold text-white mb-4">
                        "Unlock the "
                        <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "Power of AI"
                        </span>
                    </h1>

                    <p class="text-purple-200 mb-10 leading-relaxed">
                        "Please sign in to continue with your CV analysis and generate your professional portfolio."
                    </p>

                    <button
                        on:click=begin
                        disabled=!configured
                        class="w-full bg-white hover:bg-purple-50 text-slate-900 font-bold py-4 px-8 rounded-2xl transition-all duration-300 transform hover:scale-[1.02] flex items-center justify-center gap-3 shadow-xl disabled:opacity-60 disabled:cursor-not-allowed"
                    >
                        <span class="w-6 h-6 rounded-full bg-gradient-to-br from-blue-500 via-red-500 to-yellow-400 flex items-center justify-center text-xs font-black text-white">
                            "G"
                        </span>
                        {format!("Continue with {}", Provider::Google.label())}
                    </button>

                    {move || {
                        if configured {
                            Either::Left(())
                        } else {
                            Either::Right(
                                view! {
                                    <p class="mt-4 text-xs text-purple-300">
                                        "Sign-in is not configured for this deployment."
                                    </p>
                                },
                            )
                        }
                    }}

                    <div class="mt-12 grid grid-cols-2 gap-4">
                        <div class="bg-white/5 rounded-2xl p-4 border border-white/10">
                            <div class="text-purple-400 mb-2">"✦"</div>
                            <p class="text-xs text-purple-200 font-medium whitespace-nowrap">
                                "AI Optimized"
                            </p>
                        </div>
                        <div class="bg-white/5 rounded-2xl p-4 border border-white/10">
                            <div class="text-pink-400 mb-2">"⚡"</div>
                            <p class="text-xs text-purple-200 font-medium whitespace-nowrap">
                                "Instant Result"
                            </p>
                        </div>
                    </div>

                    <p class="mt-10 text-xs text-purple-300/60">
                        "By continuing, you agree to our Terms of Service and Privacy Policy."
                    </p>
                </div>
            </div>
        </div>
    }
}
