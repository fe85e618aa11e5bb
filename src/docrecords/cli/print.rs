use chrono::{DateTime, Utc};
use colored::Colorize;
use docrecords::api::{CmdMessage, MessageLevel, PageInfo};
use docrecords::config::RecordsConfig;
use docrecords::model::{FileKind, Record};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const TYPE_WIDTH: usize = 7;

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

pub(super) fn print_records(records: &[Record], page: Option<&PageInfo>) {
    if records.is_empty() {
        println!("No records found.");
    }

    let offset = page.map_or(0, |p| (p.page - 1) * p.page_size);
    for (i, record) in records.iter().enumerate() {
        println!("{}", format_record_line(offset + i + 1, record, Utc::now()));
    }

    if let Some(p) = page {
        println!(
            "{}",
            format!(
                "page {}/{} ({} records)",
                p.page,
                p.total_pages.max(1),
                p.total_records
            )
            .dimmed()
        );
    }
}

pub(super) fn print_config(config: &RecordsConfig, key: Option<&str>) {
    let keys: Vec<&str> = match key {
        Some(k) => vec![k],
        None => RecordsConfig::keys().to_vec(),
    };
    for k in keys {
        if let Some(value) = config.get(k) {
            println!("{} = {}", k, value);
        }
    }
}

fn format_record_line(position: usize, record: &Record, now: DateTime<Utc>) -> String {
    let idx_str = format!("{:>4}. ", position);
    let type_tag = format!("{:<width$}", record.file_type.to_uppercase(), width = TYPE_WIDTH);
    let type_colored = match record.kind() {
        FileKind::Spreadsheet => type_tag.green(),
        FileKind::Document => type_tag.blue(),
        FileKind::Json => type_tag.yellow(),
        FileKind::Other => type_tag.normal(),
    };

    let title = if record.original_title.is_empty() || record.original_title == record.file_name {
        record.file_name.clone()
    } else {
        format!("{} ({})", record.original_title, record.file_name)
    };

    let fixed_width = idx_str.width() + TYPE_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&title, available);
    let padding = available.saturating_sub(title_display.width());

    format!(
        "{}{}{}{}{}",
        idx_str,
        type_colored,
        title_display,
        " ".repeat(padding),
        format_time_ago(record.created_at, now).dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
