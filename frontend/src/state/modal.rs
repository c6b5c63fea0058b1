use std::rc::Rc;

use yew::functional::Reducible;

/// Transitions requested from outside the modal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    /// Emitted by the navbar's Login button.
    Open,
    Close,
}

/// Visibility of the login dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }

    pub fn open(self) -> Self {
        ModalState::Open
    }

    pub fn close(self) -> Self {
        ModalState::Closed
    }

    pub fn apply(self, action: ModalAction) -> Self {
        match action {
            ModalAction::Open => self.open(),
            ModalAction::Close => self.close(),
        }
    }

    /// Applies a press on `region`, bubbling outwards the way the DOM does.
    pub fn press(self, region: ModalRegion) -> Self {
        let mut state = self;
        for &current in region.bubble_path() {
            if let Some(action) = current.action() {
                state = state.apply(action);
            }
            if current.contains_press() {
                break;
            }
        }
        state
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: ModalAction) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

/// Nested areas of the dialog, innermost last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalRegion {
    /// Full-viewport backdrop.
    Overlay,
    /// The dialog box itself.
    Content,
    /// The × button inside the dialog.
    CloseControl,
}

impl ModalRegion {
    pub fn dismisses(self) -> bool {
        matches!(self, ModalRegion::Overlay | ModalRegion::CloseControl)
    }

    /// What a press handled by this region requests, if anything.
    pub fn action(self) -> Option<ModalAction> {
        self.dismisses().then_some(ModalAction::Close)
    }

    /// Presses inside the content never reach the overlay.
    pub fn contains_press(self) -> bool {
        self == ModalRegion::Content
    }

    /// Regions a press on `self` passes through, from the target outwards.
    pub fn bubble_path(self) -> &'static [ModalRegion] {
        match self {
            ModalRegion::CloseControl => &[
                ModalRegion::CloseControl,
                ModalRegion::Content,
                ModalRegion::Overlay,
            ],
            ModalRegion::Content => &[ModalRegion::Content, ModalRegion::Overlay],
            ModalRegion::Overlay => &[ModalRegion::Overlay],
        }
    }
}
