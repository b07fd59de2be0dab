//! Repository methods, one module per entity, all `impl StoreService`.

pub mod experiment;
pub mod member;
pub mod note;
pub mod project;
pub mod variant;

#[cfg(test)]
mod tests;
