use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(|| Signal::new(AuthState::Initializing));

    // Resolve the credential chain once on first load; every page reads
    // the result through context.
    #[cfg(feature = "web")]
    {
        let session = crate::client::session::web::provide_session();
        let mut auth = auth;
        let future = use_resource(move || {
            let session = session.clone();
            async move {
                match session.ensure_access_token().await {
                    Ok(Some(_)) => match session.ensure_user_data().await {
                        Ok(user) => AuthState::Authenticated(user),
                        Err(err) => AuthState::Error(err),
                    },
                    Ok(None) => AuthState::NotLoggedIn,
                    Err(err) => {
                        tracing::error!("Failed to resolve credentials: {}", err);
                        AuthState::Error(err)
                    }
                }
            }
        });
        if let Some(state) = &*future.read_unchecked() {
            if *auth.read() != *state {
                auth.set(state.clone());
            }
        }
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "A multipurpose, next-generation Discord bot"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
