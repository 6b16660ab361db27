//! Top-level TUI state: router, stores, toasts, and per-screen dispatch.

use super::confirm::ConfirmDialog;
use super::login::{LoginAction, LoginScreen};
use super::signup::{SignupAction, SignupScreen};
use super::tickets::{TicketAction, TicketsScreen};
use super::toast::Toast;
use super::{dashboard, landing};
use crate::output::{
    CONFIRM_LOGOUT, MSG_ACCOUNT_CREATED, MSG_TICKET_CREATED, MSG_TICKET_DELETED,
    MSG_TICKET_UPDATED,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use std::time::{Duration, Instant};
use ticketflow_core::config::UiConfig;
use ticketflow_core::router::{Page, Router};
use ticketflow_core::stats::TicketStats;
use ticketflow_core::store::{KvBackend, SessionStore, TicketStore};

pub struct App<B> {
    session: SessionStore<B>,
    tickets: TicketStore<B>,
    router: Router,
    login: LoginScreen,
    signup: SignupScreen,
    tickets_screen: TicketsScreen,
    toast: Option<Toast>,
    toast_ttl: Duration,
    signup_delay: Duration,
    /// Set when the signup form validated; the session write and dashboard
    /// transition happen once the delay elapses, so quitting mid-delay
    /// leaves no session behind.
    signup_done_at: Option<Instant>,
    logout_confirm: bool,
    pub should_quit: bool,
}

impl<B: KvBackend + Clone> App<B> {
    pub fn new(backend: B, ui: &UiConfig) -> Self {
        let session = SessionStore::new(backend.clone());
        let router = Router::new(session.is_authenticated());
        Self {
            session,
            tickets: TicketStore::new(backend),
            router,
            login: LoginScreen::default(),
            signup: SignupScreen::default(),
            tickets_screen: TicketsScreen::default(),
            toast: None,
            toast_ttl: Duration::from_millis(ui.toast_ms),
            signup_delay: Duration::from_millis(ui.signup_delay_ms),
            signup_done_at: None,
            logout_confirm: false,
            should_quit: false,
        }
    }

    pub const fn page(&self) -> Page {
        self.router.page()
    }

    /// Navigate and reset whatever form the target page carries.
    fn goto(&mut self, page: Page) {
        match self.router.navigate(page) {
            Page::Login => self.login.reset(),
            Page::Signup => self.signup.reset(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        if self.logout_confirm {
            if let Some(accepted) = ConfirmDialog::new(CONFIRM_LOGOUT).handle_key(key) {
                self.logout_confirm = false;
                if accepted {
                    self.session.logout()?;
                    self.router.logged_out();
                }
            }
            return Ok(());
        }

        match self.router.page() {
            Page::Landing => match key.code {
                KeyCode::Char('l') => self.goto(Page::Login),
                KeyCode::Char('s') => self.goto(Page::Signup),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Page::Login => match self.login.handle_key(key) {
                Some(LoginAction::Submit(form)) => {
                    match self.session.login(&form.email, &form.password) {
                        Ok(_) => self.router.login_succeeded(),
                        Err(err) => self.toast = Some(Toast::error(err.to_string())),
                    }
                }
                Some(LoginAction::Back) => self.goto(Page::Landing),
                None => {}
            },
            Page::Signup => match self.signup.handle_key(key) {
                Some(SignupAction::Submit) => {
                    self.toast = Some(Toast::success(MSG_ACCOUNT_CREATED));
                    self.signup_done_at = Some(Instant::now());
                }
                Some(SignupAction::Back) => self.goto(Page::Landing),
                None => {}
            },
            Page::Dashboard => match key.code {
                KeyCode::Char('t') => {
                    self.router.navigate(Page::Tickets);
                }
                KeyCode::Char('L') => self.logout_confirm = true,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Page::Tickets => {
                let modal_open = self.tickets_screen.editor.is_some()
                    || self.tickets_screen.pending_delete.is_some();
                if key.code == KeyCode::Char('L') && !modal_open {
                    self.logout_confirm = true;
                    return Ok(());
                }

                let tickets = self.tickets.load();
                match self.tickets_screen.handle_key(key, &tickets) {
                    Some(TicketAction::Create(draft)) => {
                        self.tickets.create(draft)?;
                        self.toast = Some(Toast::success(MSG_TICKET_CREATED));
                    }
                    Some(TicketAction::Update(id, draft)) => {
                        self.tickets.update(id, draft)?;
                        self.toast = Some(Toast::success(MSG_TICKET_UPDATED));
                    }
                    Some(TicketAction::Delete(id)) => {
                        self.tickets.delete(id)?;
                        self.toast = Some(Toast::success(MSG_TICKET_DELETED));
                    }
                    Some(TicketAction::Back) => {
                        self.router.navigate(Page::Dashboard);
                    }
                    None => {}
                }
            }
        }
        Ok(())
    }

    /// Advance time-driven state: toast expiry and the post-signup
    /// transition. The session is only written here, once the delay has
    /// run its course.
    pub fn tick(&mut self) -> anyhow::Result<()> {
        if let Some(toast) = &self.toast {
            if toast.expired(self.toast_ttl) {
                self.toast = None;
            }
        }

        if let Some(done_at) = self.signup_done_at {
            if done_at.elapsed() >= self.signup_delay {
                self.signup_done_at = None;
                self.session.signup()?;
                self.router.login_succeeded();
            }
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self.router.page() {
            Page::Landing => landing::render(frame, area),
            Page::Login => self.login.render(frame, area),
            Page::Signup => self.signup.render(frame, area),
            Page::Dashboard => {
                let stats = TicketStats::count(&self.tickets.load());
                dashboard::render(frame, area, &stats);
            }
            Page::Tickets => {
                let tickets = self.tickets.load();
                self.tickets_screen.render(frame, area, &tickets);
            }
        }

        if self.logout_confirm {
            ConfirmDialog::new(CONFIRM_LOGOUT).render(frame, area);
        }
        if let Some(toast) = &self.toast {
            toast.render(frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::tui::toast::ToastKind;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::sync::Arc;
    use ticketflow_core::config::UiConfig;
    use ticketflow_core::router::Page;
    use ticketflow_core::store::{KvBackend, MemoryBackend, SESSION_KEY, TicketStore};

    fn app_with(kv: Arc<MemoryBackend>) -> App<Arc<MemoryBackend>> {
        let ui = UiConfig {
            toast_ms: 3000,
            signup_delay_ms: 0,
        };
        App::new(kv, &ui)
    }

    fn press(app: &mut App<Arc<MemoryBackend>>, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).unwrap();
    }

    fn type_str(app: &mut App<Arc<MemoryBackend>>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn login(app: &mut App<Arc<MemoryBackend>>) {
        press(app, KeyCode::Char('l'));
        type_str(app, "demo@test.com");
        press(app, KeyCode::Tab);
        type_str(app, "password123");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_on_landing_without_session() {
        let app = app_with(MemoryBackend::shared());
        assert_eq!(app.page(), Page::Landing);
    }

    #[test]
    fn starts_on_dashboard_with_existing_session() {
        let kv = MemoryBackend::shared();
        kv.put(SESSION_KEY, "{\"user\":\"demo\",\"timestamp\":1}")
            .unwrap();
        let app = app_with(kv);
        assert_eq!(app.page(), Page::Dashboard);
    }

    #[test]
    fn demo_credentials_reach_the_dashboard() {
        let kv = MemoryBackend::shared();
        let mut app = app_with(kv.clone());
        login(&mut app);

        assert_eq!(app.page(), Page::Dashboard);
        assert!(kv.get(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn wrong_password_stays_on_login_with_error_toast() {
        let kv = MemoryBackend::shared();
        let mut app = app_with(kv.clone());
        press(&mut app, KeyCode::Char('l'));
        type_str(&mut app, "demo@test.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "letmein");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.page(), Page::Login);
        assert!(kv.get(SESSION_KEY).unwrap().is_none());
        let toast = app.toast.as_ref().expect("error toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(
            toast.message,
            "Invalid credentials. Try demo@test.com / password123"
        );
    }

    fn submit_signup(app: &mut App<Arc<MemoryBackend>>) {
        press(app, KeyCode::Char('s'));
        type_str(app, "Demo");
        press(app, KeyCode::Tab);
        type_str(app, "new@user.org");
        press(app, KeyCode::Tab);
        type_str(app, "hunter22");
        press(app, KeyCode::Tab);
        type_str(app, "hunter22");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn signup_shows_toast_then_transitions_after_delay() {
        let kv = MemoryBackend::shared();
        let mut app = app_with(kv.clone());
        submit_signup(&mut app);

        // Still on the signup page, session not yet written, until the
        // delay elapses.
        assert_eq!(app.page(), Page::Signup);
        assert!(kv.get(SESSION_KEY).unwrap().is_none());
        let toast = app.toast.as_ref().expect("success toast");
        assert_eq!(toast.message, "Account created successfully!");

        app.tick().unwrap();
        assert_eq!(app.page(), Page::Dashboard);
        assert!(kv.get(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn quitting_mid_signup_delay_leaves_no_session() {
        let kv = MemoryBackend::shared();
        let mut app = App::new(
            kv.clone(),
            &UiConfig {
                toast_ms: 3000,
                signup_delay_ms: 60_000,
            },
        );
        submit_signup(&mut app);
        app.tick().unwrap();

        assert_eq!(app.page(), Page::Signup);
        assert!(kv.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn create_then_delete_round_trip() {
        let kv = MemoryBackend::shared();
        let mut app = app_with(kv.clone());
        login(&mut app);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.page(), Page::Tickets);

        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Printer jam");
        press(&mut app, KeyCode::Enter);

        let store = TicketStore::new(kv.clone());
        let tickets = store.load();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].title, "Printer jam");

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(store.load().is_empty());
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Ticket deleted successfully!")
        );
    }

    #[test]
    fn logout_needs_confirmation() {
        let mut app = app_with(MemoryBackend::shared());
        login(&mut app);

        press(&mut app, KeyCode::Char('L'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.page(), Page::Dashboard);

        press(&mut app, KeyCode::Char('L'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.page(), Page::Landing);
    }

    #[test]
    fn toast_expires_on_tick() {
        let kv = MemoryBackend::shared();
        let mut app = App::new(
            kv,
            &UiConfig {
                toast_ms: 0,
                signup_delay_ms: 0,
            },
        );
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter); // validation errors, no toast
        type_str(&mut app, "demo@test.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "wrongpw");
        press(&mut app, KeyCode::Enter);
        assert!(app.toast.is_some());

        app.tick().unwrap();
        assert!(app.toast.is_none());
    }

    #[test]
    fn quit_from_landing() {
        let mut app = app_with(MemoryBackend::shared());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
