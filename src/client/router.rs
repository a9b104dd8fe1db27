use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{CreateTimer, NotFound, TimerBoard},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    TimerBoard {},

    #[route("/create")]
    CreateTimer {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
