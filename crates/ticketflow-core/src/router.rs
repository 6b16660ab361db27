//! Navigation state machine.
//!
//! Navigation is explicit: screens ask the router to move, and the router
//! applies the auth guard instead of each screen checking for itself.

/// The five top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard,
    Tickets,
}

impl Page {
    /// Pages behind the auth guard.
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard | Self::Tickets)
    }
}

/// Current page plus the authentication flag the guard consults.
///
/// The flag is owned here, not read from storage on every hop: the session
/// store updates it through [`Router::login_succeeded`] and
/// [`Router::logged_out`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    page: Page,
    authenticated: bool,
}

impl Router {
    /// Startup rule: an existing session lands on the dashboard, otherwise
    /// the landing page.
    pub const fn new(authenticated: bool) -> Self {
        Self {
            page: if authenticated {
                Page::Dashboard
            } else {
                Page::Landing
            },
            authenticated,
        }
    }

    pub const fn page(self) -> Page {
        self.page
    }

    pub const fn is_authenticated(self) -> bool {
        self.authenticated
    }

    /// Move to `target`, redirecting guarded pages to Login when not
    /// authenticated. Every other transition is unconditional.
    pub fn navigate(&mut self, target: Page) -> Page {
        self.page = if target.requires_auth() && !self.authenticated {
            tracing::debug!(?target, "guarded page redirected to login");
            Page::Login
        } else {
            target
        };
        self.page
    }

    /// Successful login or signup: authenticated, on the dashboard.
    pub fn login_succeeded(&mut self) {
        self.authenticated = true;
        self.page = Page::Dashboard;
    }

    /// Confirmed logout: unauthenticated, back on the landing page.
    pub fn logged_out(&mut self) {
        self.authenticated = false;
        self.page = Page::Landing;
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, Router};

    #[test]
    fn startup_page_depends_on_session() {
        assert_eq!(Router::new(true).page(), Page::Dashboard);
        assert_eq!(Router::new(false).page(), Page::Landing);
    }

    #[test]
    fn guard_covers_exactly_the_authenticated_pages() {
        assert!(Page::Dashboard.requires_auth());
        assert!(Page::Tickets.requires_auth());
        assert!(!Page::Landing.requires_auth());
        assert!(!Page::Login.requires_auth());
        assert!(!Page::Signup.requires_auth());
    }

    #[test]
    fn unauthenticated_guarded_navigation_redirects_to_login() {
        let mut router = Router::new(false);
        assert_eq!(router.navigate(Page::Dashboard), Page::Login);
        assert_eq!(router.navigate(Page::Tickets), Page::Login);
        assert_eq!(router.navigate(Page::Signup), Page::Signup);
    }

    #[test]
    fn authenticated_navigation_is_unrestricted() {
        let mut router = Router::new(true);
        assert_eq!(router.navigate(Page::Tickets), Page::Tickets);
        assert_eq!(router.navigate(Page::Landing), Page::Landing);
        assert_eq!(router.navigate(Page::Dashboard), Page::Dashboard);
    }

    #[test]
    fn login_success_lands_on_dashboard() {
        let mut router = Router::new(false);
        router.navigate(Page::Login);
        router.login_succeeded();
        assert!(router.is_authenticated());
        assert_eq!(router.page(), Page::Dashboard);
    }

    #[test]
    fn logout_returns_to_landing_and_restores_guard() {
        let mut router = Router::new(true);
        router.logged_out();
        assert_eq!(router.page(), Page::Landing);
        assert_eq!(router.navigate(Page::Tickets), Page::Login);
    }
}
