//! UI module - contains UI rendering components
//!
//! `components` holds the input and result views, `root` composes them with
//! the backend button.

pub mod components;
pub mod root;
