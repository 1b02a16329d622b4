use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::auth::{AuthClient, Session, SESSION_STORAGE_KEY};

#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    pub id: u32,
    pub user: String,
    pub template: String,
    pub days_left: i32,
    pub revenue: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStatus {
    Active,
    Warning,
    Expired,
}

impl LifecycleStatus {
    pub fn label(self) -> &'static str {
        match self {
            LifecycleStatus::Active => "Active",
            LifecycleStatus::Warning => "Warning",
            LifecycleStatus::Expired => "Expired",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            LifecycleStatus::Active => {
                "w-2 h-2 rounded-full bg-green-500 shadow-[0_0_10px_rgba(34,197,94,0.5)]"
            }
            LifecycleStatus::Warning => "w-2 h-2 rounded-full bg-yellow-500 animate-pulse",
            LifecycleStatus::Expired => "w-2 h-2 rounded-full bg-red-500",
        }
    }
}

impl Deployment {
    /// Status falls out of the remaining days, so renewals and countdowns can
    /// never disagree with the badge next to them.
    pub fn status(&self) -> LifecycleStatus {
        if self.days_left <= 0 {
            LifecycleStatus::Expired
        } else if self.days_left <= 3 {
            LifecycleStatus::Warning
        } else {
            LifecycleStatus::Active
        }
    }

    pub fn renew(&mut self) {
        self.days_left += 30;
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.revenue)
    }
}

pub fn matches_query(deployment: &Deployment, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || deployment.user.to_lowercase().contains(&query)
        || deployment.template.to_lowercase().contains(&query)
}

fn seed() -> Vec<Deployment> {
    vec![
        Deployment {
            id: 1,
            user: "Alex Chen".to_string(),
            template: "Nexu 3D".to_string(),
            days_left: 12,
            revenue: 36.0,
        },
        Deployment {
            id: 2,
            user: "Sarah Miller".to_string(),
            template: "Arcade Rush".to_string(),
            days_left: 2,
            revenue: 21.0,
        },
        Deployment {
            id: 3,
            user: "James Wilson".to_string(),
            template: "Terminal".to_string(),
            days_left: 0,
            revenue: 0.0,
        },
    ]
}

/// Mock operations console for rented deployments. Destructive actions
/// confirm inline in the row instead of popping a browser dialog.
#[component]
pub fn AdminPanel() -> impl IntoView {
    let rows = RwSignal::new(seed());
    let (query, set_query) = signal(String::new());
    let pending_delete = RwSignal::new(None::<u32>);

    // when an auth backend is configured the console is members-only
    #[cfg(feature = "hydrate")]
    {
        let (session, _, _) =
            use_local_storage::<Session, JsonSerdeWasmCodec>(SESSION_STORAGE_KEY);
        Effect::new(move |_| {
            if AuthClient::from_env().is_some() && !session.get().is_signed_in() {
                use_navigate()("/login", Default::default());
            }
        });
    }

    let renew = move |id: u32| {
        rows.update(|rows| {
            if let Some(deployment) = rows.iter_mut().find(|d| d.id == id) {
                deployment.renew();
            }
        });
        pending_delete.set(None);
    };

    let remove = move |id: u32| {
        rows.update(|rows| rows.retain(|d| d.id != id));
        pending_delete.set(None);
    };

    let active_count = move || {
        rows.with(|rows| {
            rows.iter()
                .filter(|d| d.status() == LifecycleStatus::Active)
                .count()
        })
    };
    let total_revenue =
        move || rows.with(|rows| rows.iter().map(|d| d.revenue).sum::<f64>());

    view! {
        <Title text="Admin" />
        <div class="min-h-screen bg-slate-900 text-white p-8 font-sans">
            <div class="max-w-7xl mx-auto">
                <header class="flex justify-between items-center mb-12">
                    <div>
                        <h1 class="text-4xl font-black tracking-tighter flex items-center gap-3">
                            <span class="text-purple-500">"⛊"</span>
                            "SYSTEM_ADMIN "
                            <span class="text-slate-500 font-normal">"v1.2"</span>
                        </h1>
                        <p class="text-slate-400 mt-2 font-medium">
                            "Managing deployment cycles and license rotations."
                        </p>
                    </div>
                    <div class="flex gap-4">
                        <div class="bg-slate-800 p-4 rounded-2xl border border-slate-700 flex items-center gap-6">
                            <div class="text-center">
                                <p class="text-xs font-bold text-slate-500 uppercase">"Active"</p>
                                <p class="text-2xl font-black">{active_count}</p>
                            </div>
                            <div class="w-px h-8 bg-slate-700"></div>
                            <div class="text-center">
                                <p class="text-xs font-bold text-slate-500 uppercase">"Revenue"</p>
                                <p class="text-2xl font-black text-purple-500">
                                    {move || format!("${:.2}", total_revenue())}
                                </p>
                            </div>
                        </div>
                    </div>
                </header>

                <div class="flex gap-4 mb-8">
                    <div class="flex-1 relative">
                        <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-500">
                            "⌕"
                        </span>
                        <input
                            type="text"
                            placeholder="Search by user or template..."
                            prop:value=query
                            on:input=move |ev| set_query(event_target_value(&ev))
                            class="w-full bg-slate-800 border-2 border-slate-700 rounded-xl py-4 pl-12 pr-4 focus:border-purple-500 outline-none transition-all font-bold"
                        />
                    </div>
                </div>

                <div class="bg-slate-800/50 rounded-[2.5rem] border border-slate-700 overflow-hidden backdrop-blur-xl">
                    <table class="w-full text-left border-collapse">
                        <thead>
                            <tr class="border-b border-slate-700 bg-slate-800/50">
                                <th class="p-6 text-xs font-black text-slate-500 uppercase">
                                    "Deployment Target"
                                </th>
                                <th class="p-6 text-xs font-black text-slate-500 uppercase">
                                    "Template"
                                </th>
                                <th class="p-6 text-xs font-black text-slate-500 uppercase">
                                    "Lifecycle Status"
                                </th>
                                <th class="p-6 text-xs font-black text-slate-500 uppercase">
                                    "Revenue"
                                </th>
                                <th class="p-6 text-xs font-black text-slate-500 uppercase">
                                    "Action Protocol"
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let q = query();
                                rows.with(|rows| {
                                        rows.iter()
                                            .filter(|d| matches_query(d, &q))
                                            .cloned()
                                            .collect::<Vec<_>>()
                                    })
                                    .into_iter()
                                    .map(|deployment| {
                                        let id = deployment.id;
                                        let status = deployment.status();
                                        view! {
                                            <tr class="border-b border-slate-700/50 hover:bg-white/5 transition-colors">
                                                <td class="p-6 font-black text-xl">{deployment.user.clone()}</td>
                                                <td class="p-6">
                                                    <span class="bg-slate-700 px-3 py-1 rounded-lg text-xs font-black text-slate-300 uppercase tracking-widest">
                                                        {deployment.template.clone()}
                                                    </span>
                                                </td>
                                                <td class="p-6">
                                                    <div class="flex items-center gap-3">
                                                        <div class=status.dot_class()></div>
                                                        <div>
                                                            <p class="font-black text-sm uppercase">{status.label()}</p>
                                                            <p class="text-xs font-bold text-slate-500 italic">
                                                                {format!("{} days remaining", deployment.days_left)}
                                                            </p>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td class="p-6 font-black text-slate-400">
                                                    {deployment.price_label()}
                                                </td>
                                                <td class="p-6">
                                                    {move || {
                                                        if pending_delete.get() == Some(id) {
                                                            Either::Left(
                                                                view! {
                                                                    <div class="flex items-center gap-3">
                                                                        <span class="text-xs font-black text-red-400 uppercase">
                                                                            "Remove this portfolio?"
                                                                        </span>
                                                                        <button
                                                                            on:click=move |_| remove(id)
                                                                            class="bg-red-600 text-white px-4 py-2 rounded-xl text-xs font-black uppercase hover:bg-red-500 transition-colors"
                                                                        >
                                                                            "Confirm"
                                                                        </button>
                                                                        <button
                                                                            on:click=move |_| pending_delete.set(None)
                                                                            class="bg-slate-700 text-slate-300 px-4 py-2 rounded-xl text-xs font-black uppercase hover:bg-slate-600 transition-colors"
                                                                        >
                                                                            "Cancel"
                                                                        </button>
                                                                    </div>
                                                                },
                                                            )
                                                        } else {
                                                            Either::Right(
                                                                view! {
                                                                    <div class="flex gap-3">
                                                                        <button
                                                                            on:click=move |_| renew(id)
                                                                            title="Renew Deployment"
                                                                            class="bg-purple-600/20 text-purple-400 p-3 rounded-xl border border-purple-500/20 hover:bg-purple-600 hover:text-white transition-all group"
                                                                        >
                                                                            <span class="inline-block group-hover:rotate-180 transition-transform duration-500">
                                                                                "⟳"
                                                                            </span>
                                                                        </button>
                                                                        <button
                                                                            on:click=move |_| pending_delete.set(Some(id))
                                                                            title="Terminate Link"
                                                                            class="bg-red-600/20 text-red-400 p-3 rounded-xl border border-red-500/20 hover:bg-red-600 hover:text-white transition-all"
                                                                        >
                                                                            "✖"
                                                                        </button>
                                                                    </div>
                                                                },
                                                            )
                                                        }
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="mt-8 flex items-center gap-4 bg-red-500/10 border border-red-500/20 p-6 rounded-3xl">
                    <span class="text-red-500 text-2xl flex-shrink-0">"⚠"</span>
                    <p class="text-xs font-bold text-red-200 uppercase leading-relaxed">
                        "CRITICAL_NOTICE: PORTFOLIOS WITH 0 DAYS REMAINING ARE AUTOMATICALLY DISCONNECTED FROM THE GLOBAL NETWORK. RENEWAL MUST BE AUTHORIZED MANUALLY VIA THE ACTION PROTOCOLS ABOVE."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(days_left: i32) -> Deployment {
        Deployment {
            id: 9,
            user: "Test User".to_string(),
            template: "Terminal".to_string(),
            days_left,
            revenue: 12.0,
        }
    }

    #[test]
    fn test_status_follows_days_left() {
        assert_eq!(deployment(-2).status(), LifecycleStatus::Expired);
        assert_eq!(deployment(0).status(), LifecycleStatus::Expired);
        assert_eq!(deployment(1).status(), LifecycleStatus::Warning);
        assert_eq!(deployment(3).status(), LifecycleStatus::Warning);
        assert_eq!(deployment(4).status(), LifecycleStatus::Active);
        assert_eq!(deployment(30).status(), LifecycleStatus::Active);
    }

    #[test]
    fn test_renew_extends_by_thirty_days() {
        let mut d = deployment(2);
        assert_eq!(d.status(), LifecycleStatus::Warning);
        d.renew();
        assert_eq!(d.days_left, 32);
        assert_eq!(d.status(), LifecycleStatus::Active);
    }

    #[test]
    fn test_search_is_case_insensitive_over_user_and_template() {
        let rows = seed();
        let hits = |q: &str| rows.iter().filter(|d| matches_query(d, q)).count();
        assert_eq!(hits(""), 3);
        assert_eq!(hits("sarah"), 1);
        assert_eq!(hits("ARCADE"), 1);
        assert_eq!(hits("  terminal "), 1);
        assert_eq!(hits("zzz"), 0);
    }

    #[test]
    fn test_seed_covers_each_lifecycle() {
        let statuses: Vec<_> = seed().iter().map(Deployment::status).collect();
        assert_eq!(
            statuses,
            vec![
                LifecycleStatus::Active,
                LifecycleStatus::Warning,
                LifecycleStatus::Expired,
            ]
        );
    }

    #[test]
    fn test_price_label_formats_cents() {
        assert_eq!(deployment(1).price_label(), "$12.00");
    }
}
