use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub age: u32,
}

#[derive(Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// Update body. The path id is authoritative; an `id` field in the body
/// (clients send the full intent) is ignored by serde's default behavior.
#[derive(Deserialize)]
pub struct UpdatePet {
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// In-memory store with server-assigned sequential ids starting at 1.
#[derive(Debug)]
pub struct AppState {
    pets: RwLock<HashMap<u64, Pet>>,
    next_id: AtomicU64,
}

pub type Db = Arc<AppState>;

pub fn app() -> Router {
    let db: Db = Arc::new(AppState {
        pets: RwLock::new(HashMap::new()),
        next_id: AtomicU64::new(1),
    });
    Router::new()
        .route("/health", get(health))
        .route("/api/pets", get(list_pets).post(create_pet))
        .route(
            "/api/pets/{id}",
            get(get_pet).put(update_pet).delete(delete_pet),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn list_pets(State(db): State<Db>) -> Json<Vec<Pet>> {
    let pets = db.pets.read().await;
    let mut all: Vec<Pet> = pets.values().cloned().collect();
    all.sort_by_key(|pet| pet.id);
    Json(all)
}

async fn create_pet(State(db): State<Db>, Json(input): Json<CreatePet>) -> (StatusCode, Json<Pet>) {
    let pet = Pet {
        id: db.next_id.fetch_add(1, Ordering::SeqCst),
        name: input.name,
        species: input.species,
        age: input.age,
    };
    db.pets.write().await.insert(pet.id, pet.clone());
    (StatusCode::CREATED, Json(pet))
}

async fn get_pet(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Pet>, StatusCode> {
    let pets = db.pets.read().await;
    pets.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_pet(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdatePet>,
) -> Result<Json<Pet>, StatusCode> {
    let mut pets = db.pets.write().await;
    let pet = pets.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    pet.name = input.name;
    pet.species = input.species;
    pet.age = input.age;
    Ok(Json(pet.clone()))
}

async fn delete_pet(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut pets = db.pets.write().await;
    pets.remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
