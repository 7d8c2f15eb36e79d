use crate::pages::AppRoute;
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::use_router;

#[function_component(Home)]
pub fn home() -> Html {
    let router = use_router::<AppRoute>();

    let go_to = |target: AppRoute| {
        let router = router.clone();
        Callback::from(move |_| {
            if let Some(router) = &router {
                router.push(target.clone());
            }
        })
    };

    html!(
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Bullseye>
                <Content>
                    <Title size={Size::XXXXLarge}>{ "Welcome" }</Title>
                    <p>{ "Sign in to get to your dashboard, or create a new account." }</p>
                    <Toolbar>
                        <ToolbarItem>
                            <Button label="Sign in" variant={ButtonVariant::Primary} onclick={go_to(AppRoute::Signin)}/>
                        </ToolbarItem>
                        <ToolbarItem>
                            <Button label="Sign up" variant={ButtonVariant::Secondary} onclick={go_to(AppRoute::Signup)}/>
                        </ToolbarItem>
                    </Toolbar>
                </Content>
            </Bullseye>
        </PageSection>
    )
}
