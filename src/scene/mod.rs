//! In-memory host model: windows, frames and measured elements.

pub mod host;
pub mod model;

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
