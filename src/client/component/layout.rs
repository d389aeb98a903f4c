use dioxus::prelude::*;

use crate::client::{
    component::{Footer, Header},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "app",
        Header {}
        Outlet::<Route> {}
        Footer {}
    })
}
