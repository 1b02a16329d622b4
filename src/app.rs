mod admin;
mod gallery;
mod landing;
mod login;
mod templates;
mod upload;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_params_map, path};

use crate::profile::{self, PortfolioData, UploadResponse, SAMPLE_PROFILE};
use admin::AdminPanel;
use gallery::TemplateGallery;
use landing::LandingPage;
use login::LoginScreen;
use templates::TemplateId;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/aifolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Profile state shared by every page. Set at most twice: once from the
/// bootstrap payload handed to [`App`], then again when an upload succeeds.
#[derive(Clone, Copy)]
pub struct ProfileStore {
    data: RwSignal<Option<PortfolioData>>,
}

impl ProfileStore {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
        }
    }

    pub fn get(&self) -> Option<PortfolioData> {
        self.data.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.with(|data| data.is_some())
    }

    pub fn publish(&self, response: &UploadResponse) {
        self.data.set(Some(profile::from_response(Some(response))));
    }
}

#[component]
pub fn App(#[prop(optional)] bootstrap: Option<UploadResponse>) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let store = ProfileStore::new();
    provide_context(store);

    // applied after hydration so the server-rendered page and the first
    // client paint agree, then the home route swaps to the portfolio
    if let Some(response) = bootstrap {
        Effect::new(move |_| store.publish(&response));
    }

    view! {
        // sets the document title
        <Title formatter=|title| format!("AiFolio - {title}") />

        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/portfolio") view=PortfolioPage />
                <Route path=path!("/templates") view=TemplateGallery />
                <Route path=path!("/paid/:template") view=PaidTemplatePage />
                <Route path=path!("/login") view=LoginScreen />
                <Route path=path!("/admin") view=AdminPanel />
            </Routes>
        </Router>
    }
}

/// Upload flow until a profile exists, then the standard rendering in place.
#[component]
fn HomePage() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    move || match store.get() {
        Some(data) => Either::Left(TemplateId::Standard.render(data)),
        None => Either::Right(view! { <LandingPage /> }),
    }
}

/// The default rendering of whatever profile is currently loaded.
#[component]
fn PortfolioPage() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    view! {
        <Title text="Portfolio" />
        {move || match store.get() {
            Some(data) => Either::Left(TemplateId::Standard.render(data)),
            None => Either::Right(view! { <Redirect path="/" /> }),
        }}
    }
}

/// Renders the template named in the path, falling back to the showcase
/// profile when nothing has been uploaded yet.
#[component]
fn PaidTemplatePage() -> impl IntoView {
    let params = use_params_map();
    let store = expect_context::<ProfileStore>();

    view! {
        <Title text="Portfolio" />
        {move || {
            let slug = params.read().get("template").unwrap_or_default();
            match TemplateId::from_slug(&slug) {
                Some(id) => {
                    let data = store.get().unwrap_or_else(|| SAMPLE_PROFILE.clone());
                    Either::Left(id.render(data))
                }
                None => Either::Right(view! { <Redirect path="/templates" /> }),
            }
        }}
    }
}
