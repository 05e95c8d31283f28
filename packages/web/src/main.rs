use dioxus::prelude::*;

use ui::SessionProvider;
use views::{GovHome, Home, Login, SignupAdmin, SignupAuthority, SignupCitizen, SignupFieldWorker};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    SignupCitizen {},
    #[route("/signup/fieldworker")]
    SignupFieldWorker {},
    #[route("/signup/authority")]
    SignupAuthority {},
    #[route("/signup/admin")]
    SignupAdmin {},
    #[route("/govhome")]
    GovHome {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
