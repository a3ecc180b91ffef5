//! `students` subcommands: the marks dashboard.

use super::{confirm, Store};
use crate::args::StudentsCommand;
use listdeck_core::view::{sort_label, student_rows, summary_view, StudentRow};
use listdeck_core::{AppConfig, SortKey, StudentBook, StudentFilter, UuidIdGenerator};
use std::process::ExitCode;

type Book = StudentBook<Store, UuidIdGenerator>;

/// Parameters of one dashboard render.
#[derive(Debug, Clone, Copy)]
struct View {
    filter: StudentFilter,
    key: SortKey,
    descending: bool,
}

impl Default for View {
    /// Everyone, highest marks first.
    fn default() -> Self {
        Self {
            filter: StudentFilter::All,
            key: SortKey::Marks,
            descending: true,
        }
    }
}

pub fn run(command: StudentsCommand, store: Store, config: &AppConfig) -> ExitCode {
    let pass_mark = config.dashboard.pass_mark;
    let mut book = StudentBook::load(store, UuidIdGenerator);

    match command {
        StudentsCommand::Add { name, marks } => {
            if book.add(&name, &marks).is_none() {
                eprintln!("Ignored: a student needs a name and numeric marks.");
            }
            render(&book, View::default(), pass_mark);
        }
        StudentsCommand::List { sort, asc, filter } => {
            let view = View {
                filter: filter.into(),
                key: sort.into(),
                descending: !asc,
            };
            render(&book, view, pass_mark);
        }
        StudentsCommand::Delete { id } => {
            if book.delete(&id).is_none() {
                eprintln!("No student with id `{id}`.");
            }
            render(&book, View::default(), pass_mark);
        }
        StudentsCommand::Clear { yes } => {
            let removed = book.clear_all(|_| {
                yes || confirm("This will remove all students from the dashboard. Continue?")
            });
            println!("Removed {removed} student(s).");
            render(&book, View::default(), pass_mark);
        }
        StudentsCommand::Summary => print_summary(&book, pass_mark),
    }
    ExitCode::SUCCESS
}

fn render(book: &Book, view: View, pass_mark: f64) {
    print_summary(book, pass_mark);
    println!();

    if view.key == SortKey::Marks {
        print!("{}", sort_label(view.descending));
    } else {
        print!("Sort by Name");
    }
    println!(" · showing: {}", view.filter.as_str());

    let shown = book.view(view.filter, view.key, view.descending, pass_mark);
    print!("{}", format_table(&student_rows(shown, pass_mark)));
}

fn print_summary(book: &Book, pass_mark: f64) {
    let view = summary_view(&book.summary(pass_mark), pass_mark);
    println!("Students:  {}", view.count);
    println!("Average:   {}", view.average);
    println!("Topper:    {} {}", view.topper, view.topper_marks);
    println!("All pass:  {} {}", view.pass_status, view.pass_note);
}

fn format_table(rows: &[StudentRow]) -> String {
    if rows.is_empty() {
        return "No students yet.\n".to_string();
    }

    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!(
        "{:>3}  {:<name_width$}  {:>6}  {:<6}  Id\n",
        "#", "Name", "Marks", "Status"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>6}  {:<6}  {}\n",
            row.position,
            row.name,
            row.marks,
            row.status.as_str(),
            row.id
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_table;
    use listdeck_core::view::student_rows;
    use listdeck_core::Student;

    #[test]
    fn empty_table_has_placeholder_line() {
        assert_eq!(format_table(&[]), "No students yet.\n");
    }

    #[test]
    fn table_lists_rows_in_given_order() {
        let students = vec![
            Student {
                id: "s-1".to_string(),
                name: "Ann".to_string(),
                marks: 87.5,
            },
            Student {
                id: "s-2".to_string(),
                name: "Bartholomew".to_string(),
                marks: 12.0,
            },
        ];
        let table = format_table(&student_rows(&students, 40.0));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Ann") && lines[1].contains("87.5") && lines[1].contains("Pass"));
        assert!(lines[2].contains("Bartholomew") && lines[2].contains("Fail"));
        assert!(lines[2].ends_with("s-2"));
    }
}
