//! Shared model of the Cosmic rental admin: records, registries and the
//! list/filter/stats rules every page is built on.

pub mod enums;
pub mod shared;

pub mod dashboards;
pub mod domain;
