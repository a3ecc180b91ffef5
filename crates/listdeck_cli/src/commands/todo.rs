//! `todo` subcommands.

use super::{confirm, Store};
use crate::args::TodoCommand;
use listdeck_core::view::{items_left_label, todo_rows, TodoRow};
use listdeck_core::{TodoFilter, TodoList, TodoUpdate, TodoUpdateOutcome, UuidIdGenerator};
use std::process::ExitCode;

type Todos = TodoList<Store, UuidIdGenerator>;

pub fn run(command: TodoCommand, store: Store) -> ExitCode {
    let mut todos = TodoList::load(store, UuidIdGenerator);
    let mut filter = TodoFilter::All;

    match command {
        TodoCommand::Add { text } => {
            if todos.create(&text).is_none() {
                eprintln!("Ignored: a todo needs some text.");
            }
        }
        TodoCommand::List { filter: requested } => filter = requested.into(),
        TodoCommand::Toggle { id } => {
            if todos.toggle(&id).is_none() {
                eprintln!("No todo with id `{id}`.");
            }
        }
        TodoCommand::Edit { id, text } => match todos.update(&id, TodoUpdate::text(text)) {
            TodoUpdateOutcome::Updated(_) => {}
            TodoUpdateOutcome::Deleted(item) => println!("Deleted \"{}\" (blank text).", item.text),
            TodoUpdateOutcome::NotFound => eprintln!("No todo with id `{id}`."),
        },
        TodoCommand::Delete { id } => {
            if todos.delete(&id).is_none() {
                eprintln!("No todo with id `{id}`.");
            }
        }
        TodoCommand::ClearCompleted => {
            let removed = todos.clear_completed();
            println!("Removed {removed} completed item(s).");
        }
        TodoCommand::Clear { yes } => {
            let removed = todos.clear_all(|count| {
                yes || confirm(&format!("This will remove all {count} todos. Continue?"))
            });
            println!("Removed {removed} item(s).");
        }
    }

    render(&todos, filter);
    ExitCode::SUCCESS
}

fn render(todos: &Todos, filter: TodoFilter) {
    print!("{}", format_list(&todo_rows(todos.visible(filter))));
    println!(
        "{} · filter: {}",
        items_left_label(todos.items_left()),
        filter.as_str()
    );
}

fn format_list(rows: &[TodoRow]) -> String {
    if rows.is_empty() {
        return "Nothing to do.\n".to_string();
    }
    rows.iter()
        .map(|row| {
            let mark = if row.completed { 'x' } else { ' ' };
            format!("[{mark}] {}  ({})\n", row.text, row.id)
        })
        .collect()
}
