use dioxus::prelude::*;

use ui::{Layout, NavDropdown, Navbar};
use views::{HelmPage, HomePage};

mod nav;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppNavbar)]
        #[route("/")]
        HomePage {},
        #[route("/helm")]
        HelmPage {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Holistic Evaluation of Language Models (HELM)" }

        Router::<Route> {}
    }
}

#[component]
fn AppNavbar() -> Element {
    rsx! {
        Layout {
            Navbar {
                div { class: "flex items-center gap-2",
                    Link { to: Route::HomePage {},
                        img { class: "h-8 w-auto", src: nav::LOGO_URL, alt: "HELM" }
                    }
                    NavDropdown {
                        for entry in nav::MENU {
                            li { MenuLink { entry } }
                        }
                    }
                }
            }

            main { class: "flex-grow flex flex-col relative overflow-y-auto w-full py-8",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn MenuLink(entry: nav::MenuEntry) -> Element {
    let nav::MenuEntry { name, blurb, target: dest } = entry;

    match dest {
        nav::MenuTarget::Route(route) => rsx! {
            Link {
                class: "block px-4 py-2 text-sm text-gray-200 hover:bg-white/5 transition-colors",
                to: route,
                strong { "{name}: " }
                "{blurb}"
            }
        },
        nav::MenuTarget::External(url) => rsx! {
            a {
                class: "block px-4 py-2 text-sm text-gray-200 hover:bg-white/5 transition-colors",
                href: url,
                target: "_blank",
                strong { "{name}: " }
                "{blurb}"
            }
        },
    }
}
