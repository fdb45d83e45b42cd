use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// Visibility of the dropdown's menu panel. Starts closed; each activation
/// of the trigger flips it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Chevron button plus the menu panel it controls. The caller supplies the
/// menu entries as `li` children; the panel only renders while open. The
/// open flag is private to the component instance and resets on remount.
#[component]
pub fn NavDropdown(children: Element) -> Element {
    let mut state = use_signal(MenuState::default);

    rsx! {
        div { class: "relative",
            button {
                class: "p-1 rounded hover:bg-white/5 transition-colors focus:outline-none cursor-pointer",
                onclick: move |_| {
                    let next = state().toggled();
                    info!("Nav menu {}", if next.is_open() { "opened" } else { "closed" });
                    state.set(next);
                },
                svg {
                    class: "w-4 h-4 text-gray-400",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M19 9l-7 7-7-7",
                    }
                }
            }

            if state().is_open() {
                ul { class: "absolute left-0 mt-2 w-80 z-20 py-2 bg-gray-800 border border-white/10 rounded-lg shadow-xl",
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_opens_a_closed_menu() {
        assert!(MenuState::default().toggled().is_open());
    }

    #[test]
    fn toggle_closes_an_open_menu() {
        let open = MenuState::default().toggled();
        assert!(!open.toggled().is_open());
    }

    #[test]
    fn double_toggle_is_identity() {
        let initial = MenuState::default();
        assert_eq!(initial.toggled().toggled(), initial);
    }
}
