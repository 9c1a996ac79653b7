use chrono::{NaiveDate, Utc};
use colored::Colorize;
use showcase::api::{
    CategoryEntry, CmdMessage, CmdResult, DisplayItem, FilterSummary, MessageLevel, ProfileView,
};
use showcase::config::ShowcaseConfig;
use showcase::model::{ActivityKind, ViewKind};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DETAIL_WIDTH: usize = 24;
const LIKE_MARKER: &str = "♥";

/// Prints every part a command filled in, messages last.
pub(super) fn print_result(result: &CmdResult) {
    if let Some(summary) = &result.summary {
        print_summary(summary, result.cart_items);
    }
    print_items(&result.listed_items);
    print_categories(&result.categories);
    if let Some(profile) = &result.profile {
        print_profile(profile);
    }
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_summary(summary: &FilterSummary, cart_items: Option<u32>) {
    let mut header = format!(
        "{} · {} · {}/{} shown",
        summary.view.to_string().bold(),
        summary.category,
        summary.shown,
        summary.total
    );
    if !summary.query.is_empty() {
        header.push_str(&format!(" · search \"{}\"", summary.query));
    }
    if summary.liked > 0 {
        header.push_str(&format!(" · {} {}", LIKE_MARKER, summary.liked));
    }
    if let Some(count) = cart_items {
        header.push_str(&format!(" · cart ({})", count));
    }
    println!("{}", header);
}

fn print_items(items: &[DisplayItem]) {
    for di in items {
        let idx_str = format!("{:>3}. ", di.item.id);
        let marker = if di.liked {
            format!("{} ", LIKE_MARKER).red()
        } else {
            "  ".normal()
        };

        let details = format_details(di);
        let details = truncate_to_width(&details, DETAIL_WIDTH);
        let details = format!(
            "{}{}",
            " ".repeat(DETAIL_WIDTH.saturating_sub(details.width())),
            details
        );
        let fixed_width = idx_str.width() + 2 + DETAIL_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&di.item.title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}{}",
            idx_str.yellow(),
            marker,
            title_display.bold(),
            " ".repeat(padding),
            details.dimmed()
        );

        let description = truncate_to_width(&di.item.description, LINE_WIDTH - 8);
        println!("        {}", description);
        if !di.item.tags.is_empty() {
            let tags: Vec<String> = di.item.tags.iter().map(|t| format!("[{}]", t)).collect();
            println!("        {}", tags.join(" ").cyan());
        }
    }
}

fn format_details(di: &DisplayItem) -> String {
    let d = &di.item.details;
    let mut parts = Vec::new();
    for key in ["price", "rating", "stars", "duration", "tracks", "downloads"] {
        if let Some(value) = d.get(key) {
            let part = match key {
                "rating" | "stars" => format!("★ {}", value),
                "tracks" => format!("{} tracks", value),
                "downloads" => format!("↓ {}", value),
                _ => value.clone(),
            };
            parts.push(part);
        }
    }
    parts.join("  ")
}

fn print_categories(entries: &[CategoryEntry]) {
    for entry in entries {
        let marker = if entry.selected { "●" } else { "○" };
        let line = format!("{} {} ({})", marker, entry.name, entry.items);
        if entry.selected {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}

fn print_profile(view: &ProfileView) {
    let p = &view.profile;
    println!("{}", "Profile Information".bold());
    println!("  Full Name      {}", p.name);
    println!("  Email Address  {}", p.email);
    println!("  Plan           {}", p.plan.yellow());
    println!("  Member since   {}", p.join_date.format("%B %-d, %Y"));
    println!("  Last login     {}", format_days_ago(p.last_login));

    if let Some(draft) = &view.draft {
        println!();
        println!("{}", "Editing (unsaved)".yellow().bold());
        println!("  Full Name      {}", draft.name);
        println!("  Email Address  {}", draft.email);
    }

    if !p.recent_activity.is_empty() {
        println!();
        println!("{}", "Recent Activity".bold());
        for activity in &p.recent_activity {
            let dot = match activity.kind {
                ActivityKind::Update => "●".blue(),
                ActivityKind::Security => "●".green(),
                ActivityKind::Login => "●".yellow(),
                ActivityKind::Billing => "●".magenta(),
            };
            println!("  {} {:<28}{}", dot, activity.action, activity.when.dimmed());
        }
    }
}

fn print_config(config: &ShowcaseConfig) {
    println!("default-view = {}", config.default_view);
    println!("trim-query = {}", config.trim_query);
    println!(
        "catalog-dir = {}",
        config
            .catalog_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );
}

pub(super) fn print_views(current: ViewKind) {
    for view in ViewKind::all() {
        let kind = if view.is_catalog() { "catalog" } else { "profile" };
        let line = format!("{:<10} {}", view.as_str(), kind);
        if *view == current {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_days_ago(date: NaiveDate) -> String {
    let today = Utc::now().date_naive();
    let duration = today.signed_duration_since(date);
    let formatter = Formatter::new();
    format!(
        "{} ({})",
        date.format("%B %-d, %Y"),
        formatter.convert(duration.to_std().unwrap_or_default())
    )
}
