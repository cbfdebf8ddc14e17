//! Screens and the seam controllers use to move between them.

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Entry point; resolves to dashboard or sign-in
    #[default]
    Home,
    SignIn {
        /// Arrived here straight after a successful sign-up
        registered: bool,
    },
    SignUp,
    Dashboard,
}

impl Route {
    pub fn sign_in() -> Self {
        Route::SignIn { registered: false }
    }

    /// Where the entry point leads for the given auth status
    pub fn resolve_home(authenticated: bool) -> Self {
        if authenticated {
            Route::Dashboard
        } else {
            Route::sign_in()
        }
    }
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_resolution() {
        assert_eq!(Route::resolve_home(true), Route::Dashboard);
        assert_eq!(Route::resolve_home(false), Route::SignIn { registered: false });
    }
}
