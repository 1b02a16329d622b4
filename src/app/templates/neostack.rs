use chrono::{Datelike, Utc};
use leptos::{
    either::{Either, EitherOf5},
    ev::KeyboardEvent,
    html,
    prelude::*,
};

use crate::profile::PortfolioData;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Section {
    #[default]
    About,
    Experience,
    Projects,
    Skills,
    Education,
}

impl Section {
    const ALL: [Self; 5] = [
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Education => "education",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    System,
    Command,
    Output,
    Error,
}

impl EntryKind {
    fn class(self) -> &'static str {
        match self {
            Self::System => "text-blue-400",
            Self::Command => "text-yellow-400",
            Self::Output => "",
            Self::Error => "text-red-400",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    kind: EntryKind,
    text: String,
}

impl Entry {
    fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

enum Reply {
    Lines(Vec<Entry>),
    Clear,
    Exit,
}

/// Answers one terminal-mode command from the profile. `clear` and `exit`
/// come back as actions since they touch component state, not the log.
fn respond(data: &PortfolioData, raw: &str) -> Reply {
    let command = raw.trim().to_lowercase();
    match command.as_str() {
        "clear" => return Reply::Clear,
        "exit" => return Reply::Exit,
        _ => {}
    }

    let mut lines = vec![Entry::new(EntryKind::Command, format!("> {raw}"))];
    match command.as_str() {
        "help" => {
            for text in [
                "Available commands:",
                "  about    - Show personal information",
                "  skills   - List technical skills",
                "  work     - Display work experience",
                "  projects - Show project portfolio",
                "  contact  - Show contact information",
                "  clear    - Clear terminal",
                "  exit     - Return to GUI mode",
            ] {
                lines.push(Entry::new(EntryKind::Output, text));
            }
        }
        "about" => {
            lines.push(Entry::new(
                EntryKind::Output,
                format!("Name: {}", data.name.to_uppercase()),
            ));
            lines.push(Entry::new(
                EntryKind::Output,
                format!("Role: {}", data.position),
            ));
            lines.push(Entry::new(
                EntryKind::Output,
                format!("Location: {}", data.location),
            ));
        }
        "skills" => {
            for group in &data.skills {
                lines.push(Entry::new(
                    EntryKind::Output,
                    format!("{}: {}", group.category, group.items.join(", ")),
                ));
            }
        }
        "work" => {
            for job in &data.experience {
                lines.push(Entry::new(
                    EntryKind::Output,
                    format!("{} @ {} ({})", job.title, job.company, job.period),
                ));
            }
        }
        "projects" => {
            for project in &data.projects {
                lines.push(Entry::new(
                    EntryKind::Output,
                    format!("{} - {}", project.title, project.tech),
                ));
            }
        }
        "contact" => {
            lines.push(Entry::new(
                EntryKind::Output,
                format!("Email: {}", data.email),
            ));
            lines.push(Entry::new(
                EntryKind::Output,
                format!("Phone: {}", data.phone),
            ));
            lines.push(Entry::new(
                EntryKind::Output,
                format!("GitHub: {}", data.github),
            ));
        }
        _ => {
            lines.push(Entry::new(
                EntryKind::Error,
                format!("Command not found: {raw}"),
            ));
            lines.push(Entry::new(
                EntryKind::Output,
                "Type \"help\" for available commands",
            ));
        }
    }
    Reply::Lines(lines)
}

/// Glassmorphism card layout over an animated gradient, with a hidden
/// terminal mode for keyboard people. The terminal log survives leaving and
/// re-entering the mode.
#[component]
pub fn NeostackTemplate(data: PortfolioData) -> impl IntoView {
    let profile = StoredValue::new(data);
    let (section, set_section) = signal(Section::default());
    let terminal_mode = RwSignal::new(false);
    let output = RwSignal::new(vec![
        Entry::new(EntryKind::System, "Welcome to Portfolio Terminal v1.0"),
        Entry::new(EntryKind::System, "Type \"help\" for available commands"),
    ]);

    move || {
        if terminal_mode.get() {
            Either::Left(terminal_screen(profile, output, terminal_mode))
        } else {
            Either::Right(gui_screen(profile, section, set_section, terminal_mode))
        }
    }
}

fn terminal_screen(
    profile: StoredValue<PortfolioData>,
    output: RwSignal<Vec<Entry>>,
    mode: RwSignal<bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    let run_command = move |raw: String| {
        let data = profile.get_value();
        match respond(&data, &raw) {
            Reply::Clear => output.update(|lines| lines.clear()),
            Reply::Exit => mode.set(false),
            Reply::Lines(mut fresh) => output.update(|lines| lines.append(&mut fresh)),
        }
    };

    let keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let Some(el) = input_ref.get_untracked() else {
            return;
        };
        let raw = el.value();
        if raw.trim().is_empty() {
            return;
        }
        run_command(raw);
        el.set_value("");
    };

    view! {
        <div class="min-h-screen bg-black text-green-400 font-mono p-4">
            <div class="max-w-4xl mx-auto">
                <div class="mb-4 flex justify-between items-center">
                    <div class="flex items-center gap-2">
                        <span class="text-sm">"❯ portfolio@terminal:~$"</span>
                    </div>
                    <button
                        on:click=move |_| mode.set(false)
                        class="text-xs bg-green-900/30 px-3 py-1 rounded hover:bg-green-900/50"
                    >
                        "Exit Terminal"
                    </button>
                </div>

                <div class="space-y-1 mb-4 max-h-[70vh] overflow-y-auto">
                    {move || {
                        output
                            .get()
                            .into_iter()
                            .map(|entry| view! { <div class=entry.kind.class()>{entry.text}</div> })
                            .collect_view()
                    }}
                </div>

                <div class="flex items-center gap-2">
                    <span class="text-green-500">"$"</span>
                    <input
                        node_ref=input_ref
                        on:keydown=keydown
                        type="text"
                        class="flex-1 bg-transparent outline-none text-green-400"
                        placeholder="Type a command..."
                        autofocus=true
                    />
                </div>
            </div>
        </div>
    }
}

fn gui_screen(
    profile: StoredValue<PortfolioData>,
    section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
    mode: RwSignal<bool>,
) -> impl IntoView {
    let data = profile.get_value();
    let display_name = data.name.to_uppercase();
    let footer_name = display_name.clone();
    let initials = data.initials();
    let position = data.position.clone();
    let location = data.location.clone();
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();
    let email = data.email.clone();
    let phone = data.phone.clone();
    let resume = data
        .cv
        .as_ref()
        .and_then(|cv| cv.download_link.clone())
        .map(|link| {
            let filename = data
                .cv
                .as_ref()
                .and_then(|cv| cv.original_name.clone())
                .unwrap_or_else(|| "resume.pdf".to_string());
            (link, filename)
        });
    let year = Utc::now().year();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900">
            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl animate-pulse delay-1000"></div>
            </div>

            <div class="relative z-10 max-w-6xl mx-auto p-6">
                <header class="backdrop-blur-lg bg-white/10 rounded-2xl p-8 mb-6 border border-white/20 shadow-2xl">
                    <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-6">
                        <div class="flex items-start gap-6">
                            <div class="w-24 h-24 bg-gradient-to-br from-purple-500 to-pink-500 rounded-2xl flex items-center justify-center text-white text-3xl font-bold shadow-xl">
                                {initials}
                            </div>
                            <div>
                                <h1 class="text-4xl font-bold text-white mb-2">{display_name}</h1>
                                <p class="text-xl text-purple-300 mb-3">{position}</p>
                                <div class="flex flex-wrap gap-4 text-sm text-gray-300">
                                    <span class="flex items-center gap-2">"⌖ " {location}</span>
                                    {(!github.is_empty())
                                        .then(|| {
                                            view! {
                                                <a
                                                    href=github
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="flex items-center gap-2 hover:text-white transition"
                                                >
                                                    "gh GitHub"
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
                                                    class="flex items-center gap-2 hover:text-white transition"
                                                >
                                                    "in LinkedIn"
                                                </a>
                                            }
                                        })}
                                    <a
                                        href=format!("mailto:{}", email)
                                        class="flex items-center gap-2 hover:text-white transition"
                                    >
                                        "✉ "
                                        {email}
                                    </a>
                                    <span class="flex items-center gap-2">"✆ " {phone}</span>
                                </div>
                            </div>
                        </div>
                        <div class="flex gap-3">
                            <button
                                on:click=move |_| mode.set(true)
                                class="bg-gradient-to-r from-green-500 to-emerald-600 text-white px-4 py-2 rounded-lg hover:shadow-lg hover:scale-105 transition flex items-center gap-2"
                            >
                                "❯ Terminal"
                            </button>
                            {resume
                                .map(|(link, filename)| {
                                    view! {
                                        <a
                                            href=link
                                            download=filename
                                            target="_blank"
                                            class="bg-gradient-to-r from-purple-500 to-pink-600 text-white px-6 py-2 rounded-lg hover:shadow-lg hover:scale-105 transition flex items-center gap-2"
                                        >
                                            "⤓ Resume"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </header>

                <nav class="backdrop-blur-lg bg-white/10 rounded-2xl p-2 mb-6 border border-white/20 flex flex-wrap gap-2">
                    {Section::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    on:click=move |_| set_section(tab)
                                    class=move || {
                                        if section() == tab {
                                            "px-6 py-3 rounded-xl transition capitalize font-medium bg-gradient-to-r from-purple-500 to-pink-600 text-white shadow-lg"
                                        } else {
                                            "px-6 py-3 rounded-xl transition capitalize font-medium text-gray-300 hover:bg-white/10"
                                        }
                                    }
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <main class="backdrop-blur-lg bg-white/10 rounded-2xl p-8 border border-white/20 shadow-2xl">
                    {move || {
                        let data = profile.get_value();
                        match section() {
                            Section::About => EitherOf5::A(about_section(data)),
                            Section::Experience => {
                                EitherOf5::B(experience_section(data.experience))
                            }
                            Section::Projects => EitherOf5::C(projects_section(data.projects)),
                            Section::Skills => EitherOf5::D(skills_section(data.skills)),
                            Section::Education => EitherOf5::E(education_section(data.education)),
                        }
                    }}
                </main>

                <footer class="text-center text-gray-400 mt-8 pb-4">
                    <p>{format!("© {year} {footer_name}. Built with Leptos & Tailwind CSS")}</p>
                </footer>
            </div>
        </div>
    }
}

fn about_section(data: PortfolioData) -> impl IntoView {
    let github = data.github.clone();
    let linkedin = data.linkedin.clone();
    let email = data.email.clone();

    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-white mb-4 flex items-center gap-3">
                <span class="text-purple-400 text-2xl font-mono">"</>"</span>
                "About Me"
            </h2>
            <p class="text-gray-300 text-lg leading-relaxed">{data.summary}</p>
            <div class="flex gap-4 mt-6 text-2xl font-bold">
                {(!github.is_empty())
                    .then(|| {
                        view! {
                            <a
                                href=github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-purple-400 hover:text-purple-300 transition"
                            >
                                "gh"
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
                                class="text-purple-400 hover:text-purple-300 transition"
                            >
                                "in"
                            </a>
                        }
                    })}
                <a
                    href=format!("mailto:{}", email)
                    class="text-purple-400 hover:text-purple-300 transition"
                >
                    "✉"
                </a>
            </div>
        </div>
    }
}

fn experience_section(entries: Vec<crate::profile::ExperienceEntry>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-white mb-6 flex items-center gap-3">
                <span class="text-purple-400 text-2xl">"▣"</span>
                "Work Experience"
            </h2>
            {entries
                .into_iter()
                .map(|job| {
                    view! {
                        <div class="bg-white/5 rounded-xl p-6 border border-white/10 hover:bg-white/10 transition">
                            <div class="flex justify-between items-start mb-3">
                                <div>
                                    <h3 class="text-xl font-bold text-white">{job.title}</h3>
                                    <p class="text-purple-300">{job.company}</p>
                                </div>
                                <span class="text-sm text-gray-400 bg-purple-900/30 px-3 py-1 rounded-full">
                                    {job.period}
                                </span>
                            </div>
                            {(!job.highlights.is_empty())
                                .then(|| {
                                    view! {
                                        <ul class="space-y-2">
                                            {job.highlights
                                                .into_iter()
                                                .map(|point| {
                                                    view! {
                                                        <li class="text-sm text-gray-400 flex items-start gap-2">
                                                            <span class="text-purple-400 flex-shrink-0">"›"</span>
                                                            {point}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn projects_section(entries: Vec<crate::profile::ProjectEntry>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-white mb-6 flex items-center gap-3">
                <span class="text-purple-400 text-2xl font-mono">"</>"</span>
                "Featured Projects"
            </h2>
            <div class="grid md:grid-cols-2 gap-6">
                {entries
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="bg-gradient-to-br from-purple-900/20 to-pink-900/20 rounded-xl p-6 border border-white/10 hover:border-purple-500/50 transition group">
                                <h3 class="text-xl font-bold text-white mb-2 group-hover:text-purple-300 transition">
                                    {project.title}
                                </h3>
                                <p class="text-sm text-purple-300 mb-3">{project.tech}</p>
                                <p class="text-gray-300 mb-4">{project.description}</p>
                                <a
                                    href="#"
                                    class="inline-flex items-center gap-2 text-purple-400 hover:text-purple-300 transition"
                                >
                                    "View Project ↗"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn skills_section(groups: Vec<crate::profile::SkillGroup>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-white mb-6 flex items-center gap-3">
                <span class="text-purple-400 text-2xl">"✪"</span>
                "Technical Skills"
            </h2>
            <div class="space-y-6">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div>
                                <h3 class="text-xl font-semibold text-purple-300 mb-3">
                                    {group.category}
                                </h3>
                                <div class="flex flex-wrap gap-3 mb-4">
                                    {group.items
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <span class="bg-gradient-to-r from-purple-500/20 to-pink-500/20 border border-purple-500/30 text-white px-4 py-2 rounded-lg">
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
    }
}

fn education_section(entries: Vec<crate::profile::EducationEntry>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold text-white mb-6 flex items-center gap-3">
                <span class="text-purple-400 text-2xl">"◈"</span>
                "Education"
            </h2>
            {entries
                .into_iter()
                .map(|school| {
                    let grade = school.grade.clone();
                    view! {
                        <div class="bg-white/5 rounded-xl p-6 border border-white/10">
                            <h3 class="text-xl font-bold text-white mb-2">{school.degree.clone()}</h3>
                            <p class="text-purple-300 mb-2">{school.field.clone()}</p>
                            <div class="flex justify-between text-sm text-gray-400">
                                <span>{school.span()}</span>
                                {(!grade.is_empty())
                                    .then(|| view! { <span>"GPA: " {grade}</span> })}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{self, ExperienceEntry};

    fn sample() -> PortfolioData {
        let mut data = profile::normalize(None);
        data.name = "Grace Hopper".to_string();
        data.experience = vec![ExperienceEntry {
            company: "US Navy".to_string(),
            title: "Rear Admiral".to_string(),
            period: "1943 - 1986".to_string(),
            highlights: vec!["Wrote the first compiler".to_string()],
        }];
        data
    }

    #[test]
    fn test_every_command_echoes_the_input_first() {
        let Reply::Lines(lines) = respond(&sample(), " work ") else {
            panic!("work should produce output");
        };
        assert_eq!(lines[0].kind, EntryKind::Command);
        assert_eq!(lines[0].text, ">  work ");
    }

    #[test]
    fn test_work_formats_one_row_per_job() {
        let Reply::Lines(lines) = respond(&sample(), "work") else {
            panic!("work should produce output");
        };
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "Rear Admiral @ US Navy (1943 - 1986)");
    }

    #[test]
    fn test_help_lists_every_command() {
        let Reply::Lines(lines) = respond(&sample(), "help") else {
            panic!("help should produce output");
        };
        // echo + heading + seven command rows
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().any(|l| l.text.contains("exit")));
    }

    #[test]
    fn test_unknown_command_reports_an_error() {
        let Reply::Lines(lines) = respond(&sample(), "reboot") else {
            panic!("unknown input should still produce output");
        };
        assert_eq!(lines[1].kind, EntryKind::Error);
        assert_eq!(lines[1].text, "Command not found: reboot");
    }

    #[test]
    fn test_clear_and_exit_map_to_actions() {
        assert!(matches!(respond(&sample(), "  CLEAR "), Reply::Clear));
        assert!(matches!(respond(&sample(), "exit"), Reply::Exit));
    }
}
