use std::cell::Cell;
use std::rc::Rc;

use yew::functional::Reducible;

use frontend::config::DEFAULT_SCROLL_THRESHOLD;
use frontend::content::LandingContent;
use frontend::pages::landing::login_requested;
use frontend::state::accordion::{AccordionAction, AccordionState};
use frontend::state::modal::{ModalRegion, ModalState};
use frontend::state::scroll::{self, ScrollMode};
use frontend::utils::scroll_source::{ManualScrollSource, ScrollSubscription};

struct Page {
    source: ManualScrollSource,
    mode: Rc<Cell<ScrollMode>>,
    content: LandingContent,
    accordion: AccordionState,
    modal: ModalState,
}

impl Page {
    fn load() -> (Self, ScrollSubscription) {
        let source = ManualScrollSource::new();
        let mode = Rc::new(Cell::new(ScrollMode::default()));
        let subscription = {
            let mode = Rc::clone(&mode);
            scroll::track(&source, DEFAULT_SCROLL_THRESHOLD, move |next| mode.set(next))
                .expect("track manual source")
        };
        let page = Self {
            source,
            mode,
            content: LandingContent::embedded().expect("embedded content"),
            accordion: AccordionState::default(),
            modal: ModalState::default(),
        };
        (page, subscription)
    }

    fn click_faq(&mut self, id: usize) {
        self.accordion = self
            .accordion
            .toggle_within(&self.content.faq, id)
            .expect("known FAQ id");
    }

    /// Same action the page container dispatches for the navbar's Login button.
    fn click_login(&mut self) {
        self.modal = *Rc::new(self.modal).reduce(login_requested());
    }

    fn shown_answers(&self) -> Vec<&str> {
        self.content
            .faq
            .iter()
            .filter(|entry| self.accordion.is_expanded(entry.id))
            .map(|entry| entry.answer.as_str())
            .collect()
    }
}

#[test]
fn visitor_scrolls_reads_faq_and_dismisses_login() {
    let (mut page, _subscription) = Page::load();

    assert_eq!(page.mode.get(), ScrollMode::Expanded);
    assert_eq!(page.accordion.expanded(), None);
    assert!(!page.modal.is_open());

    page.source.scroll_to(45.0);
    assert_eq!(page.mode.get(), ScrollMode::Compact);

    page.click_faq(1);
    assert_eq!(page.accordion.expanded(), Some(1));

    page.click_faq(2);
    assert_eq!(page.accordion.expanded(), Some(2));
    assert_eq!(page.shown_answers(), vec![page.content.faq[2].answer.as_str()]);

    page.click_login();
    assert!(page.modal.is_open());

    page.modal = page.modal.press(ModalRegion::Overlay);

    assert_eq!(page.mode.get(), ScrollMode::Compact);
    assert_eq!(page.accordion.expanded(), Some(2));
    assert!(!page.modal.is_open());
}

#[test]
fn pressing_inside_the_dialog_keeps_it_open() {
    let (mut page, _subscription) = Page::load();

    page.click_login();
    page.click_login();
    page.modal = page.modal.press(ModalRegion::Content);
    assert!(page.modal.is_open());

    page.modal = page.modal.press(ModalRegion::CloseControl);
    assert!(!page.modal.is_open());
}

#[test]
fn collapsing_an_entry_hides_every_answer() {
    let (mut page, _subscription) = Page::load();

    page.click_faq(0);
    page.click_faq(0);

    assert_eq!(page.accordion.expanded(), None);
    assert!(page.shown_answers().is_empty());
}

#[test]
fn scrolling_back_to_the_threshold_restores_expanded_mode() {
    let (page, _subscription) = Page::load();

    page.source.scroll_to(21.0);
    assert_eq!(page.mode.get(), ScrollMode::Compact);
    page.source.scroll_to(20.0);
    assert_eq!(page.mode.get(), ScrollMode::Expanded);
}

#[test]
fn unmounting_the_navbar_releases_its_listener() {
    let source = ManualScrollSource::new();
    for _ in 0..5 {
        let subscription =
            scroll::track(&source, DEFAULT_SCROLL_THRESHOLD, |_| {}).expect("track manual source");
        assert_eq!(source.listener_count(), 1);
        drop(subscription);
    }
    assert_eq!(source.listener_count(), 0);
}

#[test]
fn toggles_queued_before_a_render_apply_in_order() {
    let state = Rc::new(AccordionState::default());
    let after_first = Rc::clone(&state).reduce(AccordionAction::Toggle(1));
    let after_second = after_first.reduce(AccordionAction::Toggle(1));

    assert_eq!(after_second.expanded(), None);
    assert_eq!(state.expanded(), None);
}
