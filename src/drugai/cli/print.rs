use chrono::NaiveDate;
use colored::Colorize;
use drugai::api::{CmdMessage, MessageLevel};
use drugai::config::{DrugaiConfig, KEYS};
use drugai::model::ModelRecord;
use drugai::pipeline::PageResult;
use drugai::pricing::Plan;
use drugai::service::inference::InferenceResponse;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 24;
const CITATIONS_WIDTH: usize = 10;
const LIKES_WIDTH: usize = 8;
const DATE_WIDTH: usize = 11;
const AGE_WIDTH: usize = 15;

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

pub(super) fn print_page(page: &PageResult, today: NaiveDate) {
    if page.items.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "{} models, sorted by {}",
            page.total_matches,
            page.sort.label().to_lowercase()
        )
        .dimmed()
    );
    println!();

    for (offset, record) in page.items.iter().enumerate() {
        print_record(page.first_position() + offset, record, today);
    }

    println!();
    println!("{}", footer_text(page).dimmed());
}

fn print_record(position: usize, record: &ModelRecord, today: NaiveDate) {
    let tags_width = LINE_WIDTH.saturating_sub(
        INDEX_WIDTH + TITLE_WIDTH + CITATIONS_WIDTH + LIKES_WIDTH + DATE_WIDTH + AGE_WIDTH,
    );

    let idx = format!("{:>3}. ", position);
    let title = pad_to_width(&truncate_to_width(&record.title, TITLE_WIDTH), TITLE_WIDTH);
    let tags = pad_to_width(
        &truncate_to_width(&record.tags.join(", "), tags_width),
        tags_width,
    );
    let citations = format!("{:>6} cit", record.citations);
    let likes = format!("{:>6} ♥", record.likes);
    let date = format!(" {}", record.publication_date.format("%Y-%m-%d"));
    let age = format_age(record.publication_date, today);

    println!(
        "{}{}{}{:>cw$}{:>lw$}{}{}",
        idx.yellow(),
        title.bold(),
        tags.cyan(),
        citations,
        likes,
        date,
        age.dimmed(),
        cw = CITATIONS_WIDTH,
        lw = LIKES_WIDTH,
    );
}

fn footer_text(page: &PageResult) -> String {
    let mut footer = format!("Page {} of {}", page.current_page, page.total_pages);
    if page.has_previous() {
        footer.push_str(&format!("  ‹ --page {}", page.current_page - 1));
    }
    if page.has_next() {
        footer.push_str(&format!("  --page {} ›", page.current_page + 1));
    }
    footer
}

pub(super) fn print_tags(tags: &[String]) {
    for tag in tags {
        println!("{}", tag);
    }
}

pub(super) fn print_plans(plans: &[Plan]) {
    for (i, plan) in plans.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let price = format!("${}/mo", plan.monthly_price_usd);
        if plan.highlighted {
            println!(
                "{}  {}  {}",
                plan.name.bold(),
                price.green(),
                "[Most popular]".yellow()
            );
        } else {
            println!("{}  {}", plan.name.bold(), price.green());
        }
        println!("  {}", plan.tagline.dimmed());
        for feature in plan_features(plan) {
            println!("  • {}", feature);
        }
    }
}

fn plan_features(plan: &Plan) -> Vec<String> {
    let jobs = if plan.concurrent_jobs == 1 {
        "1 job at a time".to_string()
    } else {
        format!("Up to {} concurrent jobs", plan.concurrent_jobs)
    };
    vec![
        format!(
            "{} predictions per month",
            group_thousands(plan.predictions_per_month)
        ),
        jobs,
        plan.support.to_string(),
    ]
}

pub(super) fn print_inference(response: &InferenceResponse) {
    println!("{}", response);
}

pub(super) fn print_config(config: &DrugaiConfig) {
    for key in KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_age(date: NaiveDate, today: NaiveDate) -> String {
    let elapsed = today.signed_duration_since(date);
    let formatter = Formatter::new();
    let age = formatter.convert(elapsed.to_std().unwrap_or_default());
    format!("{:>width$}", age, width = AGE_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
