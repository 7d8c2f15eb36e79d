use crate::{auth::Session, pages::AppRoute};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::use_router;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let router = use_router::<AppRoute>();

    let onclick = Callback::from(move |_| {
        if let Err(err) = Session::local().sign_out() {
            log::warn!("Failed to sign out: {err}");
        }
        if let Some(router) = &router {
            router.push(AppRoute::Home);
        }
    });

    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Flex>
                    <FlexItem modifiers={[FlexModifier::Grow]}>
                        <Content>
                            <Title size={Size::XXXXLarge}>{ "Dashboard" }</Title>
                        </Content>
                    </FlexItem>
                    <FlexItem modifiers={[FlexModifier::Align(Alignment::End)]}>
                        <Button label="Sign out" variant={ButtonVariant::Secondary} {onclick}/>
                    </FlexItem>
                </Flex>
            </PageSection>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Content>
                    <p>{ "You are signed in." }</p>
                </Content>
            </PageSection>
        </>
    )
}
