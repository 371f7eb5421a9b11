//! Terminal rendering of the application view models.

use colored::Colorize;
use mindwell_application::view::{
    CommunityView, HomeView, JournalRow, ListView, MeditationView, MoodRow, MoodSelectorView,
    Notice, NoticeKind, PageContent, PageView, ProfileView, ThemeView,
};
use mindwell_core::auth::Session;
use mindwell_core::error::MindwellError;

pub fn notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Info => println!("{}", notice.text.bright_blue()),
        NoticeKind::Success => println!("{}", notice.text.green()),
        NoticeKind::Error => println!("{}", notice.text.red()),
    }
}

/// Renders an operation failure the way the page does: a transient inline
/// message built from the error's own text.
pub fn error(err: &MindwellError) {
    notice(&Notice::error(err.to_string()));
}

pub fn auth_view() {
    println!();
    println!("{}", "Welcome to Mindwell".bright_magenta().bold());
    println!(
        "{}",
        "Sign in with /login <email> <password> or create an account with /signup <name> <email> <password>."
            .bright_black()
    );
}

pub fn main_shell(session: &Session) {
    println!();
    println!(
        "{}",
        format!("Signed in as {} <{}>", session.display_label(), session.email).green()
    );
    println!(
        "{}",
        "Pages: /home /mood /journal /meditation /community /profile - /help for everything else."
            .bright_black()
    );
}

pub fn page(view: &PageView) {
    println!();
    println!("{}", format!("== {} ==", view.title).bold());
    match &view.content {
        PageContent::Home(home) => home_page(home),
        PageContent::Mood { selector, history } => {
            mood_selector(selector);
            mood_history(history);
        }
        PageContent::Journal(entries) => journal_list(entries),
        PageContent::Meditation(catalog) => meditation(catalog),
        PageContent::Community(community) => community_chips(community),
        PageContent::Profile(profile_view) => match profile_view {
            Some(view) => profile(view),
            None => println!("{}", "Not signed in.".bright_black()),
        },
    }
}

fn home_page(view: &HomeView) {
    println!("{}", view.greeting.bright_blue().bold());
    println!("{}", view.date_line.bright_black());
    mood_selector(&view.selector);
}

pub fn mood_selector(view: &MoodSelectorView) {
    let line: Vec<String> = view
        .options
        .iter()
        .map(|option| {
            let label = format!("{} {}", option.emoji, option.label);
            if option.active {
                format!("[{}]", label.bright_yellow().bold())
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    println!("How are you feeling?  {}", line.join(" "));
}

pub fn mood_history(view: &ListView<MoodRow>) {
    match view {
        ListView::Empty => println!("{}", "No mood entries yet.".bright_black()),
        ListView::Error => println!("{}", "Error loading mood history".red()),
        ListView::Rows(rows) => {
            for row in rows {
                println!(
                    "{} {}  {}",
                    row.emoji,
                    row.title.bold(),
                    row.timestamp.bright_black()
                );
                println!("   {}", row.note.bright_black());
            }
        }
    }
}

pub fn journal_list(view: &ListView<JournalRow>) {
    match view {
        ListView::Empty => println!("{}", "No journal entries yet.".bright_black()),
        ListView::Error => println!("{}", "Error loading journal entries".red()),
        ListView::Rows(rows) => {
            for row in rows {
                println!("{}  {}", row.title.bold(), row.timestamp.bright_black());
                println!("   {}", row.content);
            }
        }
    }
}

pub fn meditation(view: &MeditationView) {
    println!("{}", view.title.bright_blue());
    for session in &view.sessions {
        println!(
            "  {} - {}  {}",
            session.name.bold(),
            session.description,
            format!("[{}]", session.action_label).bright_cyan()
        );
    }
}

pub fn community_chips(view: &CommunityView) {
    let chips: Vec<String> = view
        .chips
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label.bright_yellow())
            } else {
                format!(" {} ", chip.label)
            }
        })
        .collect();
    println!("Topics: {}", chips.join(" "));
    println!(
        "{}",
        "Share something with /post <text>.".bright_black()
    );
}

pub fn profile(view: &ProfileView) {
    println!(
        "{}  {} {}",
        format!("({})", view.avatar_initial).bright_magenta().bold(),
        view.name.bold(),
        format!("<{}>", view.email).bright_black()
    );
    if let Some(counters) = &view.counters {
        println!(
            "Moods: {}  Journals: {}  Meditations: {}",
            counters.mood_entries.to_string().bright_blue(),
            counters.journal_entries.to_string().bright_blue(),
            counters.meditation_sessions.to_string().bright_blue()
        );
    }
}

pub fn theme(view: &ThemeView) {
    let mode = if view.dark_mode { "dark" } else { "light" };
    println!(
        "Theme: {} {}",
        mode.bold(),
        format!("(icon: {}, toggle: {})", view.icon, if view.checkbox_checked { "on" } else { "off" })
            .bright_black()
    );
}

pub fn help() {
    println!("{}", "Help & support coming soon!".bright_blue());
    println!();
    println!("{}", "Commands:".bold());
    println!("  /login <email> <password>          sign in");
    println!("  /signup <name> <email> <password>  create an account");
    println!("  /logout                            sign out");
    println!("  /home /mood /journal /meditation /community /profile");
    println!("  /pick <mood>                       choose a mood");
    println!("  /save [note]                       save a mood entry");
    println!("  /write <text>                      save a journal entry");
    println!("  /sessions <category>               browse meditation sessions");
    println!("  /start <session name>              start (record) a session");
    println!("  /feed <category>                   switch community topic");
    println!("  /post <text>                       share a community post");
    println!("  /theme                             toggle dark mode");
    println!("  quit                               exit");
}
