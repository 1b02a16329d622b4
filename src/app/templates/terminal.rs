use std::sync::{Arc, Mutex};

use chrono::DateTime;
use leptos::{ev::KeyboardEvent, html, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::profile::PortfolioData;

static HISTORY_SIZE: usize = 1000;

const PROMPT: &str = "visitor@portfolio:~$";
const FRAME_WIDTH: usize = 56;
const WELCOME_WIDTH: usize = 59;
const WRAP_WIDTH: usize = 60;

const BANNER_ART: &str = r#"
    ___     ____ ______ ____   __     ____ ____
   /   |   /  _// ____// __ \ / /    /  _// __ \
  / /| |   / / / /_   / / / // /     / / / / / /
 / ___ | _/ / / __/  / /_/ // /___ _/ / / /_/ /
/_/  |_|/___//_/     \____//_____//___/ \____/
"#;

/// Color coding for a scrollback line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
    Success,
    Info,
    Command,
    System,
    Ascii,
    Loading,
}

impl LineKind {
    fn class(self) -> &'static str {
        match self {
            Self::Input => "text-cyan-400 font-semibold",
            Self::Output => "text-gray-300",
            Self::Error => "text-red-400",
            Self::Success => "text-green-400",
            Self::Info => "text-blue-400",
            Self::Command => "text-yellow-300",
            Self::System => "text-cyan-300 font-semibold",
            Self::Ascii => "text-green-500 text-xs leading-tight",
            Self::Loading => "text-yellow-400",
        }
    }
}

/// One row of terminal scrollback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellCmd {
    Help,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Awards,
    Contact,
    Resume,
    Social,
    Clear,
    Banner,
}

impl ShellCmd {
    pub const ALL: [Self; 12] = [
        Self::Help,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Awards,
        Self::Contact,
        Self::Resume,
        Self::Social,
        Self::Clear,
        Self::Banner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Awards => "awards",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Social => "social",
            Self::Clear => "clear",
            Self::Banner => "banner",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::Help => "Show this message",
            Self::About => "Display personal information",
            Self::Skills => "List technical skills",
            Self::Experience => "Show work experience",
            Self::Projects => "View portfolio projects",
            Self::Education => "Display educational background",
            Self::Awards => "Show achievements & awards",
            Self::Contact => "Get contact information",
            Self::Resume => "Download resume file",
            Self::Social => "Display social media links",
            Self::Clear => "Clear terminal screen",
            Self::Banner => "Show welcome banner",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == input)
    }
}

/// Command interpreter behind the terminal rendering. Owns the scrollback and
/// the command history; every command is answered from the loaded profile, no
/// request leaves the page.
pub struct Shell {
    profile: PortfolioData,
    lines: Vec<Line>,
    history: Vec<String>,
}

impl Shell {
    pub fn new(profile: PortfolioData) -> Self {
        let mut shell = Self {
            profile,
            lines: Vec::new(),
            history: Vec::new(),
        };
        shell.boot();
        shell
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[cfg(feature = "hydrate")]
    pub fn set_history(&mut self, history: Vec<String>) {
        self.history = history;
    }

    /// Echoes the prompt line and runs whatever was typed. Whitespace-only
    /// input is echoed but neither recorded nor looked up.
    pub fn run(&mut self, input: &str) {
        self.push(LineKind::Input, format!("{PROMPT} {input}"));
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        self.history.push(trimmed.to_string());
        if self.history.len() > HISTORY_SIZE {
            self.history.remove(0);
        }

        let lookup = trimmed.to_lowercase();
        match ShellCmd::parse(&lookup) {
            // clear wipes the echoed prompt line too
            Some(ShellCmd::Clear) => self.lines.clear(),
            Some(cmd) => self.execute(cmd),
            None => {
                self.push(LineKind::Error, format!("Command not found: {lookup}"));
                self.push(LineKind::Info, "Type \"help\" to see available commands");
            }
        }
    }

    fn execute(&mut self, cmd: ShellCmd) {
        match cmd {
            ShellCmd::Help => self.help(),
            ShellCmd::About => self.about(),
            ShellCmd::Skills => self.skills(),
            ShellCmd::Experience => self.experience(),
            ShellCmd::Projects => self.projects(),
            ShellCmd::Education => self.education(),
            ShellCmd::Awards => self.awards(),
            ShellCmd::Contact => self.contact(),
            ShellCmd::Resume => self.resume(),
            ShellCmd::Social => self.social(),
            ShellCmd::Banner => self.banner(),
            ShellCmd::Clear => {}
        }
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(Line {
            kind,
            text: text.into(),
        });
    }

    fn frame(&mut self, title: &str) {
        self.push(LineKind::Success, format!("╔{}╗", "═".repeat(FRAME_WIDTH)));
        self.push(
            LineKind::Success,
            format!("║{title:^width$}║", width = FRAME_WIDTH),
        );
        self.push(LineKind::Success, format!("╚{}╝", "═".repeat(FRAME_WIDTH)));
    }

    fn boot(&mut self) {
        self.banner();
        self.push(LineKind::Success, "");
        self.push(LineKind::Info, "⚡ System initialized successfully");
        self.push(
            LineKind::Info,
            format!(
                "🚀 Portfolio v{} ({}) loaded",
                env!("CARGO_PKG_VERSION"),
                build_date()
            ),
        );
        self.push(LineKind::Success, "");
        self.push(
            LineKind::Output,
            "Type \"help\" to see available commands or \"about\" to start.",
        );
        self.push(LineKind::Output, "");
    }

    fn banner(&mut self) {
        self.push(LineKind::Ascii, BANNER_ART.trim_matches('\n'));
        self.push(
            LineKind::System,
            format!("╔{}╗", "═".repeat(WELCOME_WIDTH)),
        );
        // fixed-width frame; the name is not re-centered
        self.push(
            LineKind::System,
            format!(
                "║  Welcome to {}'s Interactive Terminal Portfolio  ║",
                self.profile.name
            ),
        );
        self.push(
            LineKind::System,
            format!("╚{}╝", "═".repeat(WELCOME_WIDTH)),
        );
    }

    fn help(&mut self) {
        self.push(
            LineKind::System,
            format!(
                "╭{dashes} AVAILABLE COMMANDS {dashes}╮",
                dashes = "─".repeat(16)
            ),
        );
        self.push(LineKind::Output, "");
        for cmd in ShellCmd::ALL.into_iter().filter(|c| *c != ShellCmd::Help) {
            self.push(
                LineKind::Command,
                format!("  {:<11}→  {}", cmd.name(), cmd.blurb()),
            );
        }
        self.push(LineKind::Output, "");
        self.push(LineKind::System, format!("╰{}╯", "─".repeat(52)));
        self.push(LineKind::Output, "");
        self.push(
            LineKind::Info,
            "💡 Tip: Use ↑/↓ arrows to navigate command history",
        );
    }

    fn about(&mut self) {
        self.frame("ABOUT ME");
        self.push(LineKind::Output, "");
        let summary = self.profile.summary.clone();
        for row in wrap(&summary, WRAP_WIDTH) {
            self.push(LineKind::Output, format!("   {row}"));
        }
        self.push(LineKind::Output, "");
        self.push(LineKind::Success, "✨ Always learning, always building!");
    }

    fn skills(&mut self) {
        self.frame("TECHNICAL SKILLS");
        self.push(LineKind::Output, "");
        let groups = self.profile.skills.clone();
        if groups.is_empty() {
            self.push(LineKind::Output, "   No skills data available.");
        }
        for group in groups {
            self.push(LineKind::Command, format!("▸ {}:", group.category));
            self.push(LineKind::Output, format!("   {}", group.items.join(", ")));
            self.push(LineKind::Output, "");
        }
    }

    fn experience(&mut self) {
        self.frame("WORK EXPERIENCE");
        self.push(LineKind::Output, "");
        let entries = self.profile.experience.clone();
        if entries.is_empty() {
            self.push(LineKind::Output, "   No experience data available.");
        }
        for job in entries {
            self.push(LineKind::Command, format!("🏢 {}", job.title));
            self.push(LineKind::Output, format!("   📍 {}", job.company));
            self.push(LineKind::Output, format!("   📅 {}", or_na(&job.period)));
            for point in &job.highlights {
                self.push(LineKind::Output, format!("   • {point}"));
            }
            self.push(LineKind::Output, "");
        }
    }

    fn projects(&mut self) {
        self.frame("PROJECTS");
        self.push(LineKind::Output, "");
        let entries = self.profile.projects.clone();
        if entries.is_empty() {
            self.push(LineKind::Output, "   No projects data available.");
        }
        for project in entries {
            self.push(LineKind::Command, format!("🚀 {}", project.title));
            self.push(LineKind::Output, format!("   Tech: {}", project.tech));
            self.push(LineKind::Output, format!("   Desc: {}", project.description));
            self.push(LineKind::Output, "");
        }
    }

    fn education(&mut self) {
        self.frame("EDUCATION");
        self.push(LineKind::Output, "");
        let entries = self.profile.education.clone();
        if entries.is_empty() {
            self.push(LineKind::Output, "   No education data available.");
        }
        for school in entries {
            self.push(
                LineKind::Command,
                format!("🎓 {}", or_na(&school.degree_line())),
            );
            self.push(
                LineKind::Output,
                format!("   🏫 {}", or_na(&school.institution)),
            );
            self.push(LineKind::Output, format!("   📅 {}", or_na(&school.span())));
            self.push(
                LineKind::Output,
                format!("   📊 GPA/CGPA: {}", or_na(&school.grade)),
            );
            self.push(LineKind::Output, "");
        }
    }

    fn awards(&mut self) {
        self.frame("AWARDS & ACHIEVEMENTS");
        self.push(LineKind::Output, "");
        let entries = self.profile.awards.clone();
        if entries.is_empty() {
            self.push(LineKind::Output, "   No awards data available.");
        }
        for award in entries {
            self.push(LineKind::Command, format!("🏆 {}", award.title));
            self.push(LineKind::Output, format!("   🏢 {}", or_na(&award.issuer)));
            self.push(LineKind::Output, format!("   📅 {}", or_na(&award.date)));
            self.push(LineKind::Output, "");
        }
    }

    fn contact(&mut self) {
        self.frame("CONTACT INFO");
        self.push(LineKind::Output, "");
        self.push(
            LineKind::Output,
            format!("📧 Email:    {}", self.profile.email),
        );
        self.push(
            LineKind::Output,
            format!("📱 Phone:    {}", self.profile.phone),
        );
        self.push(
            LineKind::Output,
            format!("📍 Location: {}", self.profile.location),
        );
        self.push(LineKind::Output, "");
        self.push(
            LineKind::Success,
            "💌 Feel free to reach out for collaborations or opportunities!",
        );
    }

    fn social(&mut self) {
        self.frame("SOCIAL LINKS");
        self.push(LineKind::Output, "");
        self.push(
            LineKind::Output,
            format!("🔗 GitHub:   {}", or_na(&self.profile.github)),
        );
        self.push(
            LineKind::Output,
            format!("🔗 LinkedIn: {}", or_na(&self.profile.linkedin)),
        );
        self.push(LineKind::Output, "");
        self.push(LineKind::Success, "👋 Connect with me on any platform!");
    }

    fn resume(&mut self) {
        self.push(LineKind::Info, "📄 Preparing resume download...");
        self.push(LineKind::Loading, "[████████████████████] 100%");
        self.push(LineKind::Success, "✅ Resume download link ready!");
        match self
            .profile
            .cv
            .as_ref()
            .and_then(|cv| cv.download_link.clone())
        {
            Some(link) => self.push(LineKind::Output, format!("📥 {link}")),
            None => self.push(
                LineKind::Output,
                "📥 Contact the owner for the direct file access.",
            ),
        }
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Greedy word wrap; a word longer than the width keeps its own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Build timestamp reduced to its date for the boot banner.
fn build_date() -> String {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| "dev".to_string())
}

/// Retro terminal over the extracted profile. Visitors type commands at a
/// prompt; output, tab completion, and history recall all run locally.
#[component]
pub fn TerminalTemplate(data: PortfolioData) -> impl IntoView {
    let booted = Shell::new(data);
    let (lines, set_lines) = signal(booted.lines().to_vec());
    let shell = StoredValue::new(Arc::new(Mutex::new(booted)));

    let input_ref = NodeRef::<html::Input>::new();
    let output_ref = NodeRef::<html::Div>::new();
    let (hist_index, set_hist_index) = signal(None::<usize>);
    let time = RwSignal::new(String::from("--:--:--"));

    #[cfg(feature = "hydrate")]
    let (stored_history, set_stored_history, _) =
        use_local_storage::<Vec<String>, JsonSerdeWasmCodec>("portfolio_cmd_history");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let history = stored_history.get_untracked();
            shell.with_value(|s| {
                s.lock()
                    .expect("should be able to unlock shell")
                    .set_history(history);
            });
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        use chrono::Local;

        let tick = move || time.set(Local::now().format("%-I:%M:%S %p").to_string());
        Effect::new(move |_| tick());
        if let Ok(handle) = set_interval_with_handle(tick, Duration::from_secs(1)) {
            on_cleanup(move || handle.clear());
        }
    }

    let run_input = move |raw: String| {
        shell.with_value(|s| {
            let mut sh = s.lock().expect("should be able to unlock shell");
            sh.run(&raw);
            set_lines(sh.lines().to_vec());
        });

        #[cfg(feature = "hydrate")]
        shell.with_value(|s| {
            set_stored_history.set(
                s.lock()
                    .expect("should be able to unlock shell")
                    .history()
                    .to_vec(),
            );
        });
    };

    let keydown_handler = move |ev: KeyboardEvent| {
        let el = if let Some(el) = input_ref.get_untracked() {
            el
        } else {
            return;
        };

        match ev.key().as_ref() {
            "Enter" => {
                ev.prevent_default();
                run_input(el.value());
                el.set_value("");
                set_hist_index(None);
            }
            "ArrowUp" => {
                ev.prevent_default();
                let recalled = shell.with_value(|s| {
                    s.lock()
                        .expect("should be able to unlock shell")
                        .history()
                        .to_vec()
                });
                if recalled.is_empty() {
                    return;
                }
                // a fresh press starts from the newest entry; the oldest stops the walk
                let index = match hist_index.get_untracked() {
                    None => recalled.len() - 1,
                    Some(i) => i.saturating_sub(1),
                };
                el.set_value(&recalled[index]);
                set_hist_index(Some(index));
            }
            "ArrowDown" => {
                let Some(i) = hist_index.get_untracked() else {
                    return;
                };
                ev.prevent_default();
                let recalled = shell.with_value(|s| {
                    s.lock()
                        .expect("should be able to unlock shell")
                        .history()
                        .to_vec()
                });
                let index = i + 1;
                if index >= recalled.len() {
                    // walked past the newest entry, back to a blank prompt
                    el.set_value("");
                    set_hist_index(None);
                } else {
                    el.set_value(&recalled[index]);
                    set_hist_index(Some(index));
                }
            }
            "Tab" => {
                ev.prevent_default();
                let typed = el.value().trim().to_lowercase();
                if typed.is_empty() {
                    return;
                }
                let mut names = ShellCmd::ALL
                    .into_iter()
                    .map(ShellCmd::name)
                    .filter(|name| name.starts_with(typed.as_str()));
                // complete only an unambiguous prefix
                if let (Some(only), None) = (names.next(), names.next()) {
                    el.set_value(only);
                }
            }
            _ => {}
        }
    };

    // keep the newest line in view
    Effect::new(move |_| {
        lines.track();
        if let Some(el) = output_ref.get_untracked() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div class="min-h-screen bg-black flex items-center justify-center p-4 font-mono">
            <div
                class="w-full max-w-4xl bg-[#0c0c0c] rounded-lg shadow-2xl border border-gray-800 overflow-hidden relative"
                on:click=move |_| {
                    if let Some(el) = input_ref.get_untracked() {
                        let _ = el.focus();
                    }
                }
            >
                <div class="bg-[#1a1a1a] px-4 py-2 flex items-center justify-between border-b border-gray-800">
                    <div class="flex items-center gap-2">
                        <span class="w-3 h-3 rounded-full bg-red-500"></span>
                        <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                        <span class="w-3 h-3 rounded-full bg-green-500"></span>
                    </div>
                    <span class="text-gray-400 text-xs">"portfolio@terminal"</span>
                    <div class="flex items-center gap-3 text-xs text-gray-500">
                        <span>"⌁ Connected"</span>
                        <span>"▮ 100%"</span>
                        <span>{move || format!("◷ {}", time.get())}</span>
                    </div>
                </div>

                <div node_ref=output_ref class="h-[60vh] overflow-y-auto p-4 text-sm">
                    {move || {
                        lines
                            .get()
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <div class=format!(
                                        "whitespace-pre-wrap {}",
                                        line.kind.class(),
                                    )>{line.text}</div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="border-t border-gray-800 p-3 flex items-center gap-2 text-sm">
                    <span class="text-cyan-400">{PROMPT}</span>
                    <input
                        node_ref=input_ref
                        on:keydown=keydown_handler
                        type="text"
                        class="flex-1 bg-transparent text-green-400 outline-none caret-green-400"
                        placeholder="Type a command..."
                        autofocus=true
                        autocapitalize="none"
                        spellcheck="false"
                    />
                    <span class="hidden sm:block text-gray-600 text-xs">
                        "Press Tab for autocomplete"
                    </span>
                </div>

                <div class="absolute inset-0 pointer-events-none bg-gradient-to-b from-transparent via-green-500/5 to-transparent animate-scan"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{self, CvUploadMeta, SkillGroup};

    fn shell() -> Shell {
        let mut data = profile::normalize(None);
        data.name = "Ada Lovelace".to_string();
        data.skills = vec![SkillGroup {
            category: "Languages".to_string(),
            items: vec!["Rust".to_string(), "Ada".to_string()],
        }];
        Shell::new(data)
    }

    #[test]
    fn test_boot_ends_with_the_help_hint() {
        let sh = shell();
        let texts: Vec<&str> = sh.lines().iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"⚡ System initialized successfully"));
        assert_eq!(
            texts[texts.len() - 2],
            "Type \"help\" to see available commands or \"about\" to start."
        );
        assert_eq!(texts[texts.len() - 1], "");
    }

    #[test]
    fn test_run_echoes_the_prompt_line() {
        let mut sh = shell();
        sh.run("about");
        assert!(sh
            .lines()
            .iter()
            .any(|l| l.kind == LineKind::Input && l.text == "visitor@portfolio:~$ about"));
    }

    #[test]
    fn test_commands_are_trimmed_and_case_insensitive() {
        let mut sh = shell();
        sh.run("  HELP  ");
        assert!(sh.lines().iter().any(|l| l.text.contains("AVAILABLE COMMANDS")));
        assert_eq!(sh.history().len(), 1);
        assert_eq!(sh.history()[0], "HELP");
    }

    #[test]
    fn test_blank_input_echoes_but_is_not_recorded() {
        let mut sh = shell();
        let before = sh.lines().len();
        sh.run("   ");
        assert_eq!(sh.lines().len(), before + 1);
        assert!(sh.history().is_empty());
    }

    #[test]
    fn test_clear_wipes_the_screen_completely() {
        let mut sh = shell();
        sh.run("help");
        sh.run("clear");
        assert!(sh.lines().is_empty());
        assert_eq!(sh.history().len(), 2);
    }

    #[test]
    fn test_unknown_command_suggests_help() {
        let mut sh = shell();
        sh.run("matrix");
        let tail: Vec<&Line> = sh.lines().iter().rev().take(2).collect();
        assert_eq!(tail[1].kind, LineKind::Error);
        assert_eq!(tail[1].text, "Command not found: matrix");
        assert_eq!(tail[0].kind, LineKind::Info);
    }

    #[test]
    fn test_help_lists_every_command_except_itself() {
        let mut sh = shell();
        sh.run("clear");
        sh.run("help");
        let rows: Vec<&Line> = sh
            .lines()
            .iter()
            .filter(|l| l.kind == LineKind::Command)
            .collect();
        assert_eq!(rows.len(), ShellCmd::ALL.len() - 1);
        assert!(rows
            .iter()
            .any(|l| l.text == "  clear      →  Clear terminal screen"));
        assert!(rows.iter().all(|l| !l.text.starts_with("  help")));
    }

    #[test]
    fn test_empty_sections_fall_back_to_placeholders() {
        let mut sh = Shell::new(profile::normalize(None));
        sh.run("experience");
        sh.run("projects");
        let texts: Vec<&str> = sh.lines().iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"   No experience data available."));
        assert!(texts.contains(&"   No projects data available."));
    }

    #[test]
    fn test_contact_uses_the_normalized_placeholders() {
        let mut sh = Shell::new(profile::normalize(None));
        sh.run("contact");
        let expected = format!("📧 Email:    {}", profile::NO_EMAIL);
        assert!(sh.lines().iter().any(|l| l.text == expected));
    }

    #[test]
    fn test_resume_prints_the_stored_download_link() {
        let mut data = profile::normalize(None);
        data.cv = Some(CvUploadMeta {
            original_name: Some("cv.pdf".to_string()),
            download_link: Some("https://files.example/cv.pdf".to_string()),
        });
        let mut sh = Shell::new(data);
        sh.run("resume");
        assert!(sh
            .lines()
            .iter()
            .any(|l| l.text == "📥 https://files.example/cv.pdf"));
    }

    #[test]
    fn test_resume_without_upload_points_at_the_owner() {
        let mut sh = shell();
        sh.run("resume");
        assert!(sh
            .lines()
            .iter()
            .any(|l| l.text == "📥 Contact the owner for the direct file access."));
    }

    #[test]
    fn test_banner_replays_the_welcome_frame() {
        let mut sh = shell();
        sh.run("clear");
        sh.run("banner");
        assert!(sh.lines().iter().any(|l| l.kind == LineKind::Ascii));
        assert!(sh.lines().iter().any(|l| {
            l.text == "║  Welcome to Ada Lovelace's Interactive Terminal Portfolio  ║"
        }));
    }

    #[test]
    fn test_history_is_capped() {
        let mut sh = shell();
        for i in 0..1100 {
            sh.run(&format!("cmd{i}"));
        }
        assert_eq!(sh.history().len(), HISTORY_SIZE);
        assert_eq!(sh.history()[0], "cmd100");
    }

    #[test]
    fn test_wrap_keeps_rows_inside_the_width() {
        let rows = wrap("one two three four five six seven eight nine ten", 15);
        assert!(rows.iter().all(|row| row.len() <= 15));
        assert_eq!(rows.join(" "), "one two three four five six seven eight nine ten");
    }

    #[test]
    fn test_wrap_gives_a_long_word_its_own_row() {
        let rows = wrap("hi supercalifragilisticexpialidocious yo", 10);
        assert_eq!(
            rows,
            vec!["hi", "supercalifragilisticexpialidocious", "yo"]
        );
    }

    #[test]
    fn test_parse_rejects_prefixes_and_unknowns() {
        assert_eq!(ShellCmd::parse("experience"), Some(ShellCmd::Experience));
        assert_eq!(ShellCmd::parse("exp"), None);
        assert_eq!(ShellCmd::parse("ls"), None);
    }
}
