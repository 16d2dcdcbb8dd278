use dioxus::prelude::*;

use ui::{AuthProvider, ConfigProvider, TaskProvider, ThemeProvider};
use views::{AddTask, Dashboard, Landing, Login, NotFound, Protected, Register, TaskDetail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/add-task")]
        AddTask {},
        #[route("/task/:id")]
        TaskDetail { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConfigProvider {
            AuthProvider {
                TaskProvider {
                    ThemeProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
