use yew_nested_router::Target;

mod dashboard;
mod home;
mod signin;
mod signup;

pub use dashboard::*;
pub use home::*;
pub use signin::*;
pub use signup::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Target)]
pub enum AppRoute {
    #[default]
    #[target(index)]
    Home,
    Signin,
    Signup,
    Dashboard,
}

/// Per-route metadata consulted by the navigation guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

/// One entry of the static route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub target: AppRoute,
    pub meta: RouteMeta,
}

const HOME: RouteRecord = RouteRecord {
    path: "/",
    name: "home",
    target: AppRoute::Home,
    meta: RouteMeta {
        requires_auth: false,
    },
};

const SIGNIN: RouteRecord = RouteRecord {
    path: "/signin",
    name: "signin",
    target: AppRoute::Signin,
    meta: RouteMeta {
        requires_auth: false,
    },
};

const SIGNUP: RouteRecord = RouteRecord {
    path: "/signup",
    name: "signup",
    target: AppRoute::Signup,
    meta: RouteMeta {
        requires_auth: false,
    },
};

const DASHBOARD: RouteRecord = RouteRecord {
    path: "/dashboard",
    name: "dashboard",
    target: AppRoute::Dashboard,
    meta: RouteMeta {
        requires_auth: true,
    },
};

/// All routes, in declaration order. Fixed for the lifetime of the application.
pub const ROUTES: &[RouteRecord] = &[HOME, SIGNIN, SIGNUP, DASHBOARD];

impl AppRoute {
    pub fn record(&self) -> &'static RouteRecord {
        match self {
            Self::Home => &HOME,
            Self::Signin => &SIGNIN,
            Self::Signup => &SIGNUP,
            Self::Dashboard => &DASHBOARD,
        }
    }

    pub fn path(&self) -> &'static str {
        self.record().path
    }

    pub fn name(&self) -> &'static str {
        self.record().name
    }

    pub fn meta(&self) -> RouteMeta {
        self.record().meta
    }

    /// Match a location path against the route table.
    ///
    /// A single trailing slash is ignored, so `/dashboard/` resolves like `/dashboard`.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        ROUTES
            .iter()
            .find(|record| record.path == path)
            .map(|record| record.target.clone())
    }
}
