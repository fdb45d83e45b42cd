use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "relative flex flex-col h-screen max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
        {children}
        Footer {}
      }
    }
}
