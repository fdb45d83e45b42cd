use crate::Route;

/// Where a menu entry leads when activated.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuTarget {
    /// A path the router resolves inside the app.
    Route(Route),
    /// An absolute URL outside the app, opened as-is.
    External(&'static str),
}

/// One navigation entry: a short bold name plus a one-line description.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub name: &'static str,
    pub blurb: &'static str,
    pub target: MenuTarget,
}

pub const LOGO_URL: &str = "https://crfm.stanford.edu/helm/images/helm-logo-simple.png";

/// Entries are fixed at build time and render in this order.
pub const MENU: [MenuEntry; 2] = [
    MenuEntry {
        name: "HELM",
        blurb: "Holistic Evaluation of Language Models",
        target: MenuTarget::Route(Route::HelmPage {}),
    },
    MenuEntry {
        name: "HEIM",
        blurb: "Holistic evaluation of text-to-image models",
        target: MenuTarget::External("https://crfm.stanford.edu/heim/latest/"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_entries_in_fixed_order() {
        let names: Vec<_> = MENU.iter().map(|e| e.name).collect();
        assert_eq!(names, ["HELM", "HEIM"]);
    }

    #[test]
    fn entry_text_never_changes() {
        assert_eq!(MENU[0].blurb, "Holistic Evaluation of Language Models");
        assert_eq!(MENU[1].blurb, "Holistic evaluation of text-to-image models");
    }

    #[test]
    fn helm_entry_resolves_inside_the_app() {
        assert_eq!(MENU[0].target, MenuTarget::Route(Route::HelmPage {}));
        assert_eq!(Route::HelmPage {}.to_string(), "/helm");
    }

    #[test]
    fn heim_entry_is_external() {
        match &MENU[1].target {
            MenuTarget::External(url) => {
                assert_eq!(*url, "https://crfm.stanford.edu/heim/latest/");
            }
            MenuTarget::Route(route) => panic!("HEIM entry must leave the app, got {route:?}"),
        }
    }
}
