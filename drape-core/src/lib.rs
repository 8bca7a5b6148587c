//! Core value types for describing ground overlays, images draped over a
//! map surface at a geographic position. The rendering host owns the
//! overlay collection; this crate only models the overlays themselves and
//! their wire-transferable JSON snapshots.
pub mod model;
