//! ABM Articulos Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod manager;
mod models;
mod notify;
mod presentation;
mod state;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    logging::init();
    mount_to_body(App);
}
