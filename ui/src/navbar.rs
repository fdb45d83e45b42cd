use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "flex justify-between items-center py-6 border-b border-white/5",
            {children}
        }
    }
}
