use std::rc::Rc;

use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::login_modal::LoginModal;
use crate::components::navbar::Navbar;
use crate::content::LandingContent;
use crate::state::modal::{ModalAction, ModalState};

fn load_content() -> Rc<LandingContent> {
    match LandingContent::embedded() {
        Ok(content) => Rc::new(content),
        Err(e) => {
            log::error!("Rendering landing page without copy: {}", e);
            Rc::new(LandingContent::default())
        }
    }
}

/// What the navbar's login signal asks of the modal.
pub fn login_requested() -> ModalAction {
    ModalAction::Open
}

/// Page container. Owns the login modal; sections own their own state.
#[function_component(App)]
pub fn app() -> Html {
    let content = use_state(load_content);
    let modal = use_reducer_eq(ModalState::default);

    let on_modal_action = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action: ModalAction| {
            log::debug!("Login modal action: {:?}", action);
            dispatcher.dispatch(action);
        })
    };
    let on_login = on_modal_action.reform(|_: ()| login_requested());

    html! {
        <div class="app">
            <Navbar on_login={on_login} />
            <Hero />
            <Features features={content.features.clone()} />
            <Faq entries={content.faq.clone()} />
            <Footer />
            <LoginModal visible={modal.is_open()} on_action={on_modal_action} />
            <style>
                {r#"
                .app {
                    width: 100%;
                    overflow-x: hidden;
                    background: var(--light);
                }
                "#}
            </style>
        </div>
    }
}
