use crate::{
    auth::{AuthStatus, StoredAuth},
    console::Console,
    guard::Guard,
};
use std::rc::Rc;
use yew::prelude::*;

/// The navigation guard shared by all views.
#[derive(Clone)]
pub struct GuardContext(pub Rc<Guard<Rc<dyn AuthStatus>>>);

impl GuardContext {
    pub fn new(auth: Rc<dyn AuthStatus>) -> Self {
        Self(Rc::new(Guard::new(auth)))
    }
}

impl Default for GuardContext {
    fn default() -> Self {
        Self::new(Rc::new(StoredAuth::local()))
    }
}

impl PartialEq for GuardContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[function_component(Application)]
pub fn app() -> Html {
    let guard = use_memo(|()| GuardContext::default(), ());

    html!(
        <ContextProvider<GuardContext> context={(*guard).clone()}>
            <Console />
        </ContextProvider<GuardContext>>
    )
}
