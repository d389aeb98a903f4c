use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx!(div {
        class: "footer",
        span {
            "Copyright © 2022-present Prism. All rights reserved."
        }
        span {
            Link { to: Route::Privacy {}, "Privacy Policy" }
            " • "
            Link { to: Route::Terms {}, "Terms of Service" }
        }
    })
}
