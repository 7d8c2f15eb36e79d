use crate::{
    app::GuardContext,
    guard::Navigation,
    pages::{self, AppRoute},
    utils::{current_location, replace_location},
};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::{Switch as RouterSwitch, *};

#[function_component(Console)]
pub fn console() -> Html {
    let logo = html!(
        <span class="pf-u-font-size-xl">{ "TMS" }</span>
    );

    let sidebar = html_nested!(
        <PageSidebar>
            <Nav>
                <NavList>
                    <NavRouterItem<AppRoute> to={AppRoute::Home}>{ "Home" }</NavRouterItem<AppRoute>>
                    <NavRouterItem<AppRoute> to={AppRoute::Dashboard}>{ "Dashboard" }</NavRouterItem<AppRoute>>
                    <NavExpandable title="Account">
                        <NavRouterItem<AppRoute> to={AppRoute::Signin}>{ "Sign in" }</NavRouterItem<AppRoute>>
                        <NavRouterItem<AppRoute> to={AppRoute::Signup}>{ "Sign up" }</NavRouterItem<AppRoute>>
                    </NavExpandable>
                </NavList>
            </Nav>
        </PageSidebar>
    );

    html!(
        <Router<AppRoute>>
            <Page {logo} {sidebar}>
                <RouterSwitch<AppRoute> {render}/>
            </Page>
        </Router<AppRoute>>
    )
}

fn render(route: AppRoute) -> Html {
    log::info!("Route: {}", route.name());
    html!(<Guarded {route}/>)
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct GuardedProps {
    pub route: AppRoute,
}

/// Renders a view only if the navigation guard allows it, otherwise performs the redirect.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let guard = use_context::<GuardContext>().unwrap_or_default();

    let decision = guard.0.check(&current_location(props.route.clone()));

    use_effect_with_deps(
        move |decision| {
            if let Some(url) = decision.replacement() {
                log::info!("Redirect: {url}");
                replace_location(&url);
            }
            || ()
        },
        decision.clone(),
    );

    match decision {
        Navigation::Allow => view(&props.route),
        Navigation::Redirect(_) => html!(),
    }
}

fn view(route: &AppRoute) -> Html {
    match route {
        AppRoute::Home => html!(<pages::Home/>),
        AppRoute::Signin => html!(<pages::Signin/>),
        AppRoute::Signup => html!(<pages::Signup/>),
        AppRoute::Dashboard => html!(<pages::Dashboard/>),
    }
}
