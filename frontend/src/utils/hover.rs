use web_sys::MouseEvent;
use yew::prelude::*;

/// Class applied to an element while the pointer is over it.
pub const HOVERED_CLASS: &str = "is-hovered";

pub fn hover_class(hovered: bool) -> Option<&'static str> {
    hovered.then_some(HOVERED_CLASS)
}

#[derive(Clone, PartialEq)]
pub struct HoverHandle {
    pub hovered: bool,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

impl HoverHandle {
    pub fn class(&self) -> Option<&'static str> {
        hover_class(self.hovered)
    }
}

/// Component-local hover flag. Styles react to the class, never to direct
/// element mutation.
#[hook]
pub fn use_hover() -> HoverHandle {
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    HoverHandle {
        hovered: *hovered,
        onmouseenter,
        onmouseleave,
    }
}
