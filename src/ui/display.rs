use std::cell::RefCell;

use comfy_table::{Cell, ContentArrangement, Table, presets};
use crossterm::style::{self, SetForegroundColor, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::{core::utils::CursorGuard, ui::models::{ChangeRow, SpinnerInfo, TokenEntry}};

pub struct AppUI {
    spinner: RefCell<Option<SpinnerInfo>>,
    _cursor_guard: CursorGuard,
}


impl AppUI {
    pub fn new() -> Self {
        AppUI {
            spinner: RefCell::new(None),
            _cursor_guard: CursorGuard::new(),
        }
    }

    /// Prints an info line
    pub fn info(&self, msg: &str) {
        self.print_safe(format!("{} {}", "[INFO]".blue().bold(), msg));
    }

    /// Prints a warning
    pub fn warn(&self, msg: &str) {
        let style_prefix = format!("{}", SetForegroundColor(style::Color::Yellow));
        let reset_all = format!("{}", style::Attribute::Reset);
        let reset_fg = format!("{}", SetForegroundColor(style::Color::Reset));
        let restore_patch = format!("{}{}", reset_all, style_prefix);
        let fixed_msg = msg.replace(&reset_all, &restore_patch).replace(&reset_fg, &restore_patch);

        self.print_safe(format!("{} {}{}{}", "[WARN]".dark_yellow().bold(), style_prefix, fixed_msg, reset_all));
    }

    /// Prints a success line and stops the spinner
    pub fn success(&self, msg: &str) {
        self.finish_step();
        self.print_safe(format!("{} {}", "[ OK ]".green().bold(), msg));
    }

    /// Prints an error and stops the spinner
    pub fn error(&self, msg: &str) {
        self.finish_step();

        let style_prefix = format!("{}", SetForegroundColor(style::Color::Red));
        let reset_all = format!("{}", style::Attribute::Reset);
        let reset_fg = format!("{}", SetForegroundColor(style::Color::Reset));
        let restore_patch = format!("{}{}", reset_all, style_prefix);
        let fixed_msg = msg.replace(&reset_all, &restore_patch).replace(&reset_fg, &restore_patch);

        self.print_safe(format!("{} {}{}{}", "[ERR!]".red().bold(), style_prefix, fixed_msg, reset_all));
    }

    /// Updates the spinner message, starting one if needed
    pub fn update_step(&self, msg: &str) {
        if let Some(pb_info) = self.spinner.borrow().as_ref() {
            pb_info.pb.set_message(msg.to_string());
            return;
        }
        self.start_step(msg);
    }

    /// Local changes list
    pub fn show_local_changes(&self, rows: Vec<ChangeRow>) {
        self.finish_step();
        if rows.is_empty() {
            self.info("No pending changes");
            return;
        }

        let mut table = self.create_clean_table();

        let header = ["  PATH", "STATUS", "CHANGE", "OWNER", "DATE", "SERVER ITEM"]
            .map(|h| Cell::new(h).fg(comfy_table::Color::DarkGrey).add_attribute(comfy_table::Attribute::Bold));
        table.set_header(header);

        for column in table.column_iter_mut() {
            column.set_padding((0, 3));
        }

        let max_path = rows.iter().map(|r| r.path.width()).max().unwrap_or(4) + 4;
        if let Some(column) = table.column_mut(0) {
            column.set_constraint(comfy_table::ColumnConstraint::LowerBoundary(comfy_table::Width::Fixed(max_path.min(u16::MAX as usize) as u16)));
        }

        for row in rows {
            let c_path = if row.is_directory {
                Cell::new(format!("  {}/", row.path)).add_attribute(comfy_table::Attribute::Bold)
            } else {
                Cell::new(format!("  {}", row.path))
            };

            let c_status = if row.resolved {
                Cell::new(row.status).fg(status_color(row.status))
            } else {
                Cell::new(row.status).fg(comfy_table::Color::DarkRed).add_attribute(comfy_table::Attribute::Italic)
            };

            let c_change = Cell::new(row.change_types).fg(comfy_table::Color::DarkGrey);
            let c_owner = Cell::new(row.owner);
            let c_date = Cell::new(row.date).fg(comfy_table::Color::DarkGrey);
            let c_server = Cell::new(row.server_item).fg(comfy_table::Color::DarkGrey);

            table.add_row([c_path, c_status, c_change, c_owner, c_date, c_server]);
        }

        self.print_safe(format!("{}", table));
    }

    /// Tokens parsed from a raw change-type string
    pub fn show_tokens(&self, entries: Vec<TokenEntry>) {
        if entries.is_empty() {
            self.warn("No change types in input");
            return;
        }

        let mut table = self.create_clean_table();
        table.set_header([
            Cell::new("  SEGMENT").fg(comfy_table::Color::DarkGrey),
            Cell::new("CHANGE TYPE").fg(comfy_table::Color::DarkGrey),
        ]);
        for column in table.column_iter_mut() {
            column.set_padding((0, 3));
        }

        for entry in entries {
            let c_type = if entry.recognized {
                Cell::new(entry.change_type).fg(comfy_table::Color::Green)
            } else {
                Cell::new(entry.change_type).fg(comfy_table::Color::DarkRed).add_attribute(comfy_table::Attribute::Italic)
            };
            table.add_row([Cell::new(format!("  {}", entry.segment)), c_type]);
        }

        self.print_safe(format!("{}", table));
    }

    /// Starts a spinner
    fn start_step(&self, msg: &str) {
        let has_spinner = self.spinner.borrow().is_some();
        if has_spinner { self.finish_step(); }

        let spinner_info = SpinnerInfo::new();
        spinner_info.pb.set_message(msg.to_string());
        *self.spinner.borrow_mut() = Some(spinner_info);
    }

    /// Stops the spinner
    fn finish_step(&self) {
        if let Some(pb_info) = self.spinner.borrow_mut().take() {
            tracing::debug!("step finished after {:?}", pb_info.elapsed());
            pb_info.pb.finish_and_clear();
        }
    }

    fn print_safe(&self, msg: String) {
        if let Some(pb_info) = &self.spinner.borrow().as_ref() {
            pb_info.pb.suspend(|| println!("{}", msg));
        } else {
            println!("{}", msg);
        }
    }

    /// Borderless table with dynamic width
    fn create_clean_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

fn status_color(status: &str) -> comfy_table::Color {
    match status {
        "Added" | "Undeleted" => comfy_table::Color::Green,
        "Deleted" => comfy_table::Color::Red,
        "Edited" => comfy_table::Color::Yellow,
        "Renamed" | "Renamed, Edited" => comfy_table::Color::Cyan,
        "Locked" => comfy_table::Color::Magenta,
        _ => comfy_table::Color::DarkGrey,
    }
}
