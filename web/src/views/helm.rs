use dioxus::prelude::*;

#[component]
pub fn HelmPage() -> Element {
    rsx! {
      div { class: "flex flex-col gap-4 max-w-2xl",
        h1 { class: "text-2xl font-bold", "HELM" }
        p { class: "text-gray-300",
          "Scenarios, metrics and model results for the HELM benchmark suite.
           Each release evaluates the same set of models under standardized
           conditions so results stay comparable across time."
        }
        a {
          class: "text-sm text-gray-400 hover:text-white transition-colors underline",
          href: "https://crfm.stanford.edu/helm/latest/",
          target: "_blank",
          "Browse the latest release"
        }
      }
    }
}
