//! Asset import
//!
//! Importers map source material formats onto [`Pbr`](crate::Pbr)
//! descriptions.

pub mod materials;
