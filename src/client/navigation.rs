//! Navigation Shell
//!
//! Which screens exist is a function of the session status. Crossing the
//! authenticated boundary replaces the whole stack, so nothing from the
//! other side can be reached with "back".

use crate::client::session::AuthStatus;

/// Parameters of the product detail screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRoute {
    /// `None` opens an empty form for a new product
    pub id: Option<String>,
    pub name: Option<String>,
}

impl ProductRoute {
    pub fn new_product() -> Self {
        Self::default()
    }

    pub fn existing(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Login,
    Register,
    Products,
    Product(ProductRoute),
    /// Diagnostic view of the raw session
    Protected,
}

impl Screen {
    /// Whether the screen belongs to the stack shown for `status`
    pub fn is_available(&self, status: AuthStatus) -> bool {
        match self {
            Screen::Loading => status == AuthStatus::Checking,
            Screen::Login | Screen::Register => status == AuthStatus::NotAuthenticated,
            Screen::Products | Screen::Product(_) | Screen::Protected => {
                status == AuthStatus::Authenticated
            }
        }
    }

    pub fn root_for(status: AuthStatus) -> Screen {
        match status {
            AuthStatus::Checking => Screen::Loading,
            AuthStatus::NotAuthenticated => Screen::Login,
            AuthStatus::Authenticated => Screen::Products,
        }
    }
}

/// Header title of the product detail screen
pub fn product_title(name: &str) -> &str {
    if name.is_empty() {
        "Product name missing"
    } else {
        name
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    status: AuthStatus,
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            status: AuthStatus::Checking,
            stack: vec![Screen::Loading],
        }
    }

    /// Follow a session status change; a new status resets the stack
    pub fn sync(&mut self, status: AuthStatus) {
        if self.status != status {
            tracing::debug!("Navigation reset: {:?} -> {:?}", self.status, status);
            self.status = status;
            self.stack = vec![Screen::root_for(status)];
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn current(&self) -> &Screen {
        // The stack is never emptied: pop stops at the root.
        self.stack.last().unwrap_or(&Screen::Loading)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Open `screen` on top of the current one
    pub fn push(&mut self, screen: Screen) -> bool {
        if !screen.is_available(self.status) {
            tracing::warn!("Refusing to open {:?} while {:?}", screen, self.status);
            return false;
        }
        self.stack.push(screen);
        true
    }

    /// Swap the current screen without growing the stack
    pub fn replace(&mut self, screen: Screen) -> bool {
        if !screen.is_available(self.status) {
            tracing::warn!("Refusing to show {:?} while {:?}", screen, self.status);
            return false;
        }
        if let Some(top) = self.stack.last_mut() {
            *top = screen;
        }
        true
    }

    pub fn pop(&mut self) -> bool {
        if self.can_go_back() {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checking_shows_loading_only() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), &Screen::Loading);
        assert!(!nav.push(Screen::Login));
        assert!(!nav.push(Screen::Products));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_unauthenticated_login_register_swap() {
        let mut nav = Navigator::new();
        nav.sync(AuthStatus::NotAuthenticated);
        assert_eq!(nav.current(), &Screen::Login);

        assert!(nav.replace(Screen::Register));
        assert_eq!(nav.current(), &Screen::Register);
        assert!(!nav.can_go_back());
        assert!(!nav.push(Screen::Protected));
    }

    #[test]
    fn test_authenticated_stack() {
        let mut nav = Navigator::new();
        nav.sync(AuthStatus::Authenticated);
        assert_eq!(nav.current(), &Screen::Products);

        assert!(nav.push(Screen::Product(ProductRoute::existing("p1", "LATTE"))));
        assert!(nav.can_go_back());
        assert!(nav.pop());
        assert_eq!(nav.current(), &Screen::Products);
        assert!(!nav.pop());
    }

    #[test]
    fn test_logout_drops_back_stack() {
        let mut nav = Navigator::new();
        nav.sync(AuthStatus::Authenticated);
        nav.push(Screen::Product(ProductRoute::new_product()));
        nav.sync(AuthStatus::NotAuthenticated);

        assert_eq!(nav.current(), &Screen::Login);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_same_status_keeps_stack() {
        let mut nav = Navigator::new();
        nav.sync(AuthStatus::Authenticated);
        nav.push(Screen::Protected);
        nav.sync(AuthStatus::Authenticated);
        assert_eq!(nav.current(), &Screen::Protected);
    }

    #[test]
    fn test_product_title() {
        assert_eq!(product_title(""), "Product name missing");
        assert_eq!(product_title("LATTE"), "LATTE");
    }
}
