//! Interactive terminal storybook: one tab per autocomplete scenario with
//! a live log of the callbacks each one fires.

pub mod app;
pub mod components;
pub mod config;
pub mod event_loop;
pub mod state;
pub mod stories;
pub mod story;
pub mod story_manager;
pub mod terminal;
pub mod tracing;
pub mod transition;
