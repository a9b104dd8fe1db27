//! Structure timer board client.
//!
//! A Dioxus web application that renders the timer board of an EVE Online timer server: the
//! current and past timer tables with a live countdown, the timer details modal, and the timer
//! form with its search-as-you-type selects. All data comes from the server over HTTP GET + JSON.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
