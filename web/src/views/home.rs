use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    rsx! {
      div { class: "flex flex-col items-center justify-center flex-grow text-center gap-4",
        h1 { class: "text-3xl font-bold tracking-tight",
          "Holistic Evaluation of Language Models"
        }
        p { class: "text-gray-400 max-w-xl",
          "A living benchmark that aims to improve the transparency of language models:
           broad coverage, multi-metric measurement, standardized conditions."
        }
      }
    }
}
