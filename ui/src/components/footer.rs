use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
      footer { class: "py-4 text-center border-t border-white/5",
        div { class: "flex justify-center gap-6 text-[10px] font-mono uppercase tracking-widest text-gray-500",
          a {
            class: "hover:text-white transition-colors",
            href: "https://github.com/stanford-crfm/helm",
            target: "_blank",
            "[ Github ]"
          }
          a {
            class: "hover:text-white transition-colors",
            href: "https://crfm.stanford.edu",
            target: "_blank",
            "[ CRFM ]"
          }
          span { "© {year}" }
        }
      }
    }
}
