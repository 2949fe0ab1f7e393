//! Entry Point

use leptos::prelude::*;
use tasklist_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
