//! Terminal front end for the pet management workflow.

use std::io::{self, BufRead, Write};

use pet_app::{pet_list_view, PetApp, PetForm, UreqTransport};
use pet_core::Pet;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pet_app=info".into()))
        .init();

    let base_url =
        std::env::var("PET_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:8081".to_string());
    tracing::info!("using pet service at {base_url}");

    let mut app = PetApp::new(&base_url, UreqTransport::new());
    let mut form = PetForm::new();

    app.refresh();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&app);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            Some("list") | Some("refresh") => app.refresh(),
            Some("add") => {
                form.set_editing(None);
                fill_form(&mut form, None, &mut lines)?;
                match form.submit() {
                    Some(submission) => app.submit(submission),
                    None => println!("age must be a non-negative integer"),
                }
            }
            Some("edit") => match parse_id(words.next()) {
                Some(id) => match app.pets().iter().find(|pet| pet.id == id).cloned() {
                    Some(pet) => {
                        app.request_edit(pet);
                        form.set_editing(app.editing_pet());
                        fill_form(&mut form, app.editing_pet(), &mut lines)?;
                        match form.submit() {
                            Some(submission) => {
                                app.submit(submission);
                                form.set_editing(app.editing_pet());
                            }
                            None => println!("age must be a non-negative integer"),
                        }
                    }
                    None => println!("no pet with id {id}"),
                },
                None => println!("usage: edit <id>"),
            },
            Some("cancel") => {
                app.cancel_edit();
                form.set_editing(None);
            }
            Some("delete") => match parse_id(words.next()) {
                Some(id) => {
                    let lines = &mut lines;
                    app.request_delete(id, move || {
                        confirm("Are you sure you want to delete this pet?", lines)
                    });
                }
                None => println!("usage: delete <id>"),
            },
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

fn render(app: &PetApp<UreqTransport>) {
    println!();
    println!("🐾 Pet Management");

    if let Some(error) = app.error() {
        println!("[error] {error}");
    }

    let view = pet_list_view(app.pets(), app.is_busy());
    if view.loading {
        println!("Loading...");
    }
    if let Some(message) = view.empty_message {
        println!("{message}");
    }
    for card in &view.cards {
        println!(
            "  {} — Species: {}, Age: {} ({})",
            card.name, card.species, card.age_label, card.id_label
        );
    }
    println!("commands: list | add | edit <id> | delete <id> | cancel | quit");
}

/// Prompt for the three draft fields. While editing, an empty answer keeps
/// the value initialized from the record.
fn fill_form(
    form: &mut PetForm,
    editing: Option<&Pet>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<()> {
    let heading = if editing.is_some() { "Edit Pet" } else { "Add New Pet" };
    println!("{heading}");

    if let Some(value) = prompt("Name", lines)? {
        form.set_name(value);
    }
    if let Some(value) = prompt("Species", lines)? {
        form.set_species(value);
    }
    if let Some(value) = prompt("Age", lines)? {
        form.set_age(value);
    }
    Ok(())
}

/// Read one answer; `None` means the user left it blank.
fn prompt(
    label: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        None => Ok(None),
    }
}

fn confirm(question: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    match lines.next() {
        Some(Ok(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn parse_id(word: Option<&str>) -> Option<u64> {
    word.and_then(|w| w.parse().ok())
}
