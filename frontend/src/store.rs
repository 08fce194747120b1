use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::config;
use crate::dom::resize::WindowResize;

/// Page-wide UI flags. Only changed through [`UiAction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub popup_open: bool,
    pub is_mobile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenPopup,
    ClosePopup,
    SetMobile(bool),
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            UiAction::OpenPopup => UiState { popup_open: true, ..(*self).clone() },
            UiAction::ClosePopup => UiState { popup_open: false, ..(*self).clone() },
            UiAction::SetMobile(is_mobile) => UiState { is_mobile, ..(*self).clone() },
        };
        if next == *self {
            self
        } else {
            debug!("ui state {:?} -> {:?}", *self, next);
            Rc::new(next)
        }
    }
}

/// Handle components use to read and change the UI flags.
#[derive(Clone, PartialEq)]
pub struct UiStore {
    state: UseReducerHandle<UiState>,
}

impl UiStore {
    pub fn popup_open(&self) -> bool {
        self.state.popup_open
    }

    pub fn is_mobile(&self) -> bool {
        self.state.is_mobile
    }

    pub fn open_popup(&self) {
        self.state.dispatch(UiAction::OpenPopup);
    }

    pub fn close_popup(&self) {
        self.state.dispatch(UiAction::ClosePopup);
    }

    pub fn set_mobile(&self, is_mobile: bool) {
        self.state.dispatch(UiAction::SetMobile(is_mobile));
    }

    pub fn open_popup_callback<E>(&self) -> Callback<E> {
        let store = self.clone();
        Callback::from(move |_| store.open_popup())
    }

    pub fn close_popup_callback<E>(&self) -> Callback<E> {
        let store = self.clone();
        Callback::from(move |_| store.close_popup())
    }
}

#[derive(Properties, PartialEq)]
pub struct UiStoreProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the store and keeps `is_mobile` in step with the window width.
#[function_component(UiStoreProvider)]
pub fn ui_store_provider(props: &UiStoreProviderProps) -> Html {
    let state = use_reducer(UiState::default);
    let store = UiStore { state };

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                let breakpoints = config::site().breakpoints;
                let resize = WindowResize::attach();
                let subscription = resize.as_ref().map(|resize| {
                    resize
                        .bridge()
                        .observe(move |viewport| store.set_mobile(breakpoints.is_mobile(viewport)))
                });
                info!("ui store ready");
                move || {
                    drop(subscription);
                    drop(resize);
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<UiStore> context={store}>
            { for props.children.iter() }
        </ContextProvider<UiStore>>
    }
}

#[hook]
pub fn use_ui_store() -> UiStore {
    use_context::<UiStore>().expect("use_ui_store called outside UiStoreProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: UiState, action: UiAction) -> Rc<UiState> {
        Rc::new(state).reduce(action)
    }

    #[test]
    fn popup_actions_toggle_flag() {
        let opened = reduce(UiState::default(), UiAction::OpenPopup);
        assert!(opened.popup_open);
        let closed = opened.reduce(UiAction::ClosePopup);
        assert!(!closed.popup_open);
    }

    #[test]
    fn set_mobile_keeps_popup_state() {
        let state = reduce(UiState { popup_open: true, is_mobile: false }, UiAction::SetMobile(true));
        assert_eq!(*state, UiState { popup_open: true, is_mobile: true });
    }

    #[test]
    fn unchanged_state_is_returned_as_is() {
        let state = Rc::new(UiState { popup_open: true, is_mobile: false });
        let next = state.clone().reduce(UiAction::OpenPopup);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn last_writer_wins() {
        let state = [UiAction::SetMobile(true), UiAction::OpenPopup, UiAction::SetMobile(false)]
            .into_iter()
            .fold(Rc::new(UiState::default()), |state, action| state.reduce(action));
        assert_eq!(*state, UiState { popup_open: true, is_mobile: false });
    }
}
