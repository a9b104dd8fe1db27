#![allow(non_snake_case)]

use timerboard::client;

fn main() {
    dioxus::launch(client::App);
}
