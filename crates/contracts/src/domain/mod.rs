//! Record types of the admin panel, one module per managed resource.
//! Every module owns its closed sets, tab/filter predicates and seed registry.

pub mod a001_booking;
pub mod a002_rental_unit;
pub mod a003_room;
pub mod a004_console;
pub mod a005_controller;
pub mod a006_tv;
pub mod a007_food;
pub mod a008_user;
