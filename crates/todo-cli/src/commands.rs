//! Command dispatch: each verb is one load → mutate → save pass, or one
//! load → render pass for the read-only listing.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Result;
use todo_core::TaskList;

use crate::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::List {
            uncompleted,
            verbose,
        } => list(&args.file, uncompleted, verbose),
        Command::Add { description } => add(&args.file, &description),
        Command::Complete { position } => complete(&args.file, position),
        Command::Delete { position } => delete(&args.file, position),
    }
}

fn list(file: &Path, uncompleted: bool, verbose: bool) -> Result<()> {
    let list = TaskList::load(file)?;
    print!("{}", render(&list, uncompleted, verbose));
    Ok(())
}

/// Rendering decisions for the `list` verb.
///
/// The uncompleted view is a freshly built list, so its positions restart at
/// 1; `complete`/`delete` positions always address the unfiltered list.
fn render(list: &TaskList, uncompleted: bool, verbose: bool) -> String {
    let filtered;
    let list = if uncompleted {
        filtered = list
            .iter()
            .filter(|task| !task.done)
            .cloned()
            .collect::<TaskList>();
        &filtered
    } else {
        list
    };

    if verbose {
        list.verbose().to_string()
    } else {
        list.to_string()
    }
}

fn add(file: &Path, description: &[String]) -> Result<()> {
    let tasks = if description.is_empty() {
        read_tasks(io::stdin().lock())?
    } else {
        vec![description.join(" ")]
    };

    let mut list = TaskList::load(file)?;
    for task in tasks {
        list.add(task);
    }
    list.save(file)?;
    Ok(())
}

fn complete(file: &Path, position: usize) -> Result<()> {
    let mut list = TaskList::load(file)?;
    list.complete(position)?;
    list.save(file)?;
    Ok(())
}

fn delete(file: &Path, position: usize) -> Result<()> {
    let mut list = TaskList::load(file)?;
    list.delete(position)?;
    list.save(file)?;
    Ok(())
}

/// Interactive entry: one task per line until EOF. Blank lines are skipped
/// with a warning instead of becoming empty tasks.
fn read_tasks(input: impl BufRead) -> Result<Vec<String>> {
    println!("each task is separated by line");
    println!("press CTRL+D when finish adding task/s");
    println!("please input a new task/s:");

    let mut tasks = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            println!("task cannot be blank!");
            continue;
        }
        tasks.push(line);
    }
    println!("todo list updated...");
    Ok(tasks)
}
