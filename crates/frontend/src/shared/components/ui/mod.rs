pub mod badge;

pub use badge::{Avatar, Badge, TypeDot};
