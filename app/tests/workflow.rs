//! Full workflow test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the controller,
//! form, and list components through the add/edit/delete workflow over real
//! HTTP, checking the rendered view models at each step.

use pet_app::{pet_list_view, PetApp, PetForm, UreqTransport};

/// Start the mock server on an ephemeral port and return its address.
fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn add_edit_delete_workflow() {
    let addr = spawn_server();
    let mut app = PetApp::new(&format!("http://{addr}"), UreqTransport::new());
    let mut form = PetForm::new();

    // startup fetch — empty collection, empty-state message.
    app.refresh();
    assert!(app.error().is_none());
    let view = pet_list_view(app.pets(), app.is_busy());
    assert_eq!(view.empty_message, Some("No pets found. Add one above!"));

    // add a pet through the form.
    form.set_name("Fluffy");
    form.set_species("Cat");
    form.set_age("3");
    let submission = form.submit().unwrap();
    app.submit(submission);

    assert!(app.error().is_none());
    assert!(app.editing_pet().is_none());
    let view = pet_list_view(app.pets(), app.is_busy());
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].name, "Fluffy");
    assert_eq!(view.cards[0].age_label, "3 years");
    assert_eq!(view.cards[0].id_label, "ID: 1");
    assert!(view.empty_message.is_none());

    // edit it: the form draft is initialized from the record.
    let fluffy = app.pets()[0].clone();
    app.request_edit(fluffy);
    form.set_editing(app.editing_pet());
    assert_eq!(form.view(app.is_busy()).age, "3");

    form.set_age("4");
    let submission = form.submit().unwrap();
    app.submit(submission);
    form.set_editing(app.editing_pet());

    assert!(app.error().is_none());
    assert!(app.editing_pet().is_none());
    assert_eq!(app.pets()[0].age, 4);
    assert_eq!(app.pets()[0].name, "Fluffy");

    // declined delete leaves everything as is.
    let id = app.pets()[0].id;
    app.request_delete(id, || false);
    assert_eq!(app.pets().len(), 1);
    assert!(app.error().is_none());

    // confirmed delete empties the collection.
    app.request_delete(id, || true);
    assert!(app.error().is_none());
    let view = pet_list_view(app.pets(), app.is_busy());
    assert!(view.cards.is_empty());
    assert_eq!(view.empty_message, Some("No pets found. Add one above!"));
}

#[test]
fn delete_of_missing_pet_surfaces_error_but_keeps_snapshot() {
    let addr = spawn_server();
    let mut app = PetApp::new(&format!("http://{addr}"), UreqTransport::new());
    let mut form = PetForm::new();

    form.set_name("Buddy");
    form.set_species("Dog");
    form.set_age("4");
    app.submit(form.submit().unwrap());
    assert_eq!(app.pets().len(), 1);

    app.request_delete(999, || true);
    assert_eq!(app.error(), Some("Failed to delete pet with id 999"));
    assert_eq!(app.pets().len(), 1, "snapshot retained after failure");

    // retrying with the real id recovers.
    let id = app.pets()[0].id;
    app.request_delete(id, || true);
    assert!(app.error().is_none());
    assert!(app.pets().is_empty());
}
