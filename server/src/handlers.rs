use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use jotfile_core::Note;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::SharedState;

/// Context for the note list view
#[derive(Serialize)]
pub struct ListPage {
    pub notes: Vec<Note>,
    pub query: String,
}

/// Context for the note form view; `note` is null for the blank create form
#[derive(Serialize)]
pub struct FormPage {
    pub note: Option<Note>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Form fields are optional at the extractor level so a missing title or
/// body surfaces as the domain 400 rather than an extractor rejection.
#[derive(Deserialize)]
pub struct NoteForm {
    pub title: Option<String>,
    pub body: Option<String>,
    pub color: Option<String>,
}

pub async fn list_notes(State(state): State<SharedState>) -> Result<Json<ListPage>, ApiError> {
    let notes = state.repo().await.list()?;
    Ok(Json(ListPage {
        notes,
        query: String::new(),
    }))
}

pub async fn search_notes(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ListPage>, ApiError> {
    let notes = state.repo().await.search(&params.query)?;
    Ok(Json(ListPage {
        notes,
        query: params.query,
    }))
}

pub async fn new_note_form() -> Json<FormPage> {
    Json(FormPage { note: None })
}

pub async fn create_note(
    State(state): State<SharedState>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, ApiError> {
    let note = state.repo().await.create(
        form.title.as_deref().unwrap_or(""),
        form.body.as_deref().unwrap_or(""),
        form.color,
    )?;
    info!(id = note.id, "created note");
    Ok(Redirect::to("/"))
}

pub async fn edit_note_form(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<FormPage>, ApiError> {
    let note = state.repo().await.get(id)?;
    Ok(Json(FormPage { note: Some(note) }))
}

pub async fn update_note(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, ApiError> {
    state.repo().await.update(
        id,
        form.title.as_deref().unwrap_or(""),
        form.body.as_deref().unwrap_or(""),
        form.color,
    )?;
    info!(id, "updated note");
    Ok(Redirect::to("/"))
}

pub async fn delete_note(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Redirect, ApiError> {
    state.repo().await.delete(id)?;
    info!(id, "deleted note");
    Ok(Redirect::to("/"))
}

pub async fn star_note(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Redirect, ApiError> {
    let note = state.repo().await.toggle_star(id)?;
    info!(id, starred = note.starred, "toggled star");
    Ok(Redirect::to("/"))
}
