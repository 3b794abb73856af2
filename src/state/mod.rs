/// State management module
///
/// This module handles all application state, including:
/// - The photo entity and its frozen orientation decision (photo.rs)
/// - Per-photo edit parameters (edit.rs)
/// - Pages and the pagination engine (page.rs, layout.rs)
/// - The ordered photo collection and its derived layout (project.rs)
/// - Drag-handle geometry for interactive editing (transform.rs)

pub mod edit;
pub mod layout;
pub mod page;
pub mod photo;
pub mod project;
pub mod transform;
