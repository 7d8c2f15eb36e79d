use crate::{
    auth::Session,
    guard::post_login_target,
    pages::AppRoute,
    utils::{current_location, navigate},
};
use patternfly_yew::{next::TextInput, prelude::*};
use yew::prelude::*;
use yew_nested_router::prelude::use_router;

#[function_component(Signin)]
pub fn signin() -> Html {
    let router = use_router::<AppRoute>();
    let username = use_state_eq(String::new);
    let error = use_state_eq(|| None::<String>);

    let on_username = use_callback(|text: String, username| username.set(text), username.clone());

    let onclick = {
        let username = username.clone();
        let error = error.clone();
        Callback::from(move |_| {
            if username.trim().is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }

            if let Err(err) = Session::local().sign_in() {
                log::warn!("Failed to sign in: {err}");
                error.set(Some(format!("Unable to sign in: {err}")));
                return;
            }
            error.set(None);

            let target = post_login_target(&current_location(AppRoute::Signin));
            match &router {
                Some(router) => navigate(router, &target),
                None => log::warn!("No router to continue to {}", target.full_path()),
            }
        })
    };

    html!(
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Bullseye>
                <Content>
                    <Title size={Size::XXXXLarge}>{ "Sign in" }</Title>
                    <p>{ "Credentials are not verified: any username signs you in on this device." }</p>
                    <Form>
                        <FormGroup label="Username" required=true>
                            <TextInput onchange={on_username} value={(*username).clone()} required=true/>
                        </FormGroup>
                        <FormGroup label="Password" required=true>
                            <TextInput r#type={TextInputType::Password}/>
                        </FormGroup>
                    </Form>
                    if let Some(error) = &*error {
                        <p class="pf-u-danger-color-100">{ error.clone() }</p>
                    }
                    <Button label="Sign in" variant={ButtonVariant::Primary} {onclick}/>
                </Content>
            </Bullseye>
        </PageSection>
    )
}
