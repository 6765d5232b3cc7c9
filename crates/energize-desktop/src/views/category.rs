use dioxus::prelude::*;

use crate::components::Placeholder;
use crate::router::category_menu;
use crate::views::NotFound;

/// Landing page of a primary category without its own screen.
#[component]
pub fn Category(category: String) -> Element {
    match category_menu(&category) {
        Some(menu) => rsx! {
            Placeholder { title: menu.title().to_string() }
        },
        None => rsx! {
            NotFound { segments: vec![category] }
        },
    }
}
