use crate::pages::AppRoute;
use patternfly_yew::{next::TextInput, prelude::*};
use yew::prelude::*;
use yew_nested_router::prelude::use_router;

/// Check the sign-up form, returning the message to show for the first problem found.
pub fn validate_signup(username: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Please choose a username");
    }
    if password.is_empty() {
        return Err("Please choose a password");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let router = use_router::<AppRoute>();
    let username = use_state_eq(String::new);
    let password = use_state_eq(String::new);
    let confirm = use_state_eq(String::new);
    let error = use_state_eq(|| None::<&'static str>);

    let on_username = use_callback(|text: String, username| username.set(text), username.clone());
    let on_password = use_callback(|text: String, password| password.set(text), password.clone());
    let on_confirm = use_callback(|text: String, confirm| confirm.set(text), confirm.clone());

    let onclick = {
        let username = username.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        Callback::from(move |_| {
            match validate_signup(&username, &password, &confirm) {
                Ok(()) => {
                    error.set(None);
                    log::info!("Account requested for '{}'", *username);
                    if let Some(router) = &router {
                        router.push(AppRoute::Signin);
                    }
                }
                Err(message) => error.set(Some(message)),
            }
        })
    };

    html!(
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Bullseye>
                <Content>
                    <Title size={Size::XXXXLarge}>{ "Sign up" }</Title>
                    <Form>
                        <FormGroup label="Username" required=true>
                            <TextInput onchange={on_username} value={(*username).clone()} required=true/>
                        </FormGroup>
                        <FormGroup label="Password" required=true>
                            <TextInput onchange={on_password} value={(*password).clone()} r#type={TextInputType::Password} required=true/>
                        </FormGroup>
                        <FormGroup label="Confirm password" required=true>
                            <TextInput onchange={on_confirm} value={(*confirm).clone()} r#type={TextInputType::Password} required=true/>
                        </FormGroup>
                    </Form>
                    if let Some(error) = *error {
                        <p class="pf-u-danger-color-100">{ error }</p>
                    }
                    <Button label="Sign up" variant={ButtonVariant::Primary} {onclick}/>
                </Content>
            </Bullseye>
        </PageSection>
    )
}

#[cfg(test)]
mod test {
    use super::validate_signup;

    #[test]
    fn valid_signup() {
        assert_eq!(validate_signup("alice", "secret", "secret"), Ok(()));
    }

    #[test]
    fn blank_username() {
        assert_eq!(
            validate_signup("  ", "secret", "secret"),
            Err("Please choose a username")
        );
    }

    #[test]
    fn empty_password() {
        assert_eq!(
            validate_signup("alice", "", ""),
            Err("Please choose a password")
        );
    }

    #[test]
    fn mismatched_confirmation() {
        assert_eq!(
            validate_signup("alice", "secret", "secert"),
            Err("Passwords do not match")
        );
    }
}
