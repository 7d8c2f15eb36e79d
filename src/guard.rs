use crate::{
    auth::AuthStatus,
    config::REDIRECT_QUERY,
    location::Location,
    pages::AppRoute,
};

/// Decision of the guard for a single navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(Location),
}

impl Navigation {
    /// The address replacing the current history entry, if any.
    ///
    /// A redirect supersedes the blocked navigation, so it takes over its history entry. Going
    /// back then skips the blocked location instead of being redirected again.
    pub fn replacement(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Redirect(to) => Some(to.full_path()),
        }
    }
}

/// Checks every navigation before the target view gets rendered.
///
/// * A route requiring authentication redirects an anonymous user to the sign-in view, passing
///   the requested location in the `redirect` query parameter.
/// * The sign-in view redirects an authenticated user to the dashboard.
/// * Everything else is allowed.
#[derive(Clone, Debug)]
pub struct Guard<A> {
    auth: A,
}

impl<A: AuthStatus> Guard<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }

    pub fn check(&self, to: &Location) -> Navigation {
        if to.target.meta().requires_auth && !self.is_authenticated() {
            return Navigation::Redirect(
                Location::new(AppRoute::Signin).with_query(REDIRECT_QUERY, to.full_path()),
            );
        }

        if to.target == AppRoute::Signin && self.is_authenticated() {
            return Navigation::Redirect(Location::new(AppRoute::Dashboard));
        }

        Navigation::Allow
    }

    fn is_authenticated(&self) -> bool {
        self.auth.status().is_authenticated()
    }
}

/// Where to go after a successful sign-in.
///
/// Honors the `redirect` query of the sign-in location, as long as it names a known route other
/// than the sign-in view itself. Falls back to the dashboard.
pub fn post_login_target(signin: &Location) -> Location {
    signin
        .query(REDIRECT_QUERY)
        .and_then(Location::parse)
        .filter(|location| location.target != AppRoute::Signin)
        .unwrap_or_else(|| Location::new(AppRoute::Dashboard))
}
