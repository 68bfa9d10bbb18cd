//! Session state - app mode and the login form

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Login,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    OfficerId,
    Password,
}

/// Mock officer login; any non-empty credentials are accepted
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub officer_id: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::OfficerId => LoginField::Password,
            LoginField::Password => LoginField::OfficerId,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::OfficerId => &mut self.officer_id,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn input(&mut self, c: char) {
        self.error = None;
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Check the form, returning the officer id on success
    ///
    /// On failure the inline error is set and focus moves to the empty field.
    pub fn submit(&mut self) -> Option<String> {
        let id = self.officer_id.trim();
        if id.is_empty() {
            self.error = Some("Officer ID is required".to_string());
            self.focus = LoginField::OfficerId;
            return None;
        }
        if self.password.is_empty() {
            self.error = Some("Password is required".to_string());
            self.focus = LoginField::Password;
            return None;
        }
        self.error = None;
        Some(id.to_string())
    }

    pub fn reset(&mut self) {
        *self = LoginForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut LoginForm, s: &str) {
        for c in s.chars() {
            form.input(c);
        }
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = LoginForm::new();
        assert_eq!(form.submit(), None);
        assert_eq!(form.error.as_deref(), Some("Officer ID is required"));

        type_str(&mut form, "OFF-1029");
        assert_eq!(form.submit(), None);
        assert_eq!(form.focus, LoginField::Password);
        assert_eq!(form.error.as_deref(), Some("Password is required"));

        type_str(&mut form, "secret");
        assert_eq!(form.submit(), Some("OFF-1029".to_string()));
        assert!(form.error.is_none());
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut form = LoginForm::new();
        type_str(&mut form, "ab");
        form.toggle_focus();
        type_str(&mut form, "cd");
        form.backspace();
        assert_eq!(form.officer_id, "ab");
        assert_eq!(form.password, "c");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = LoginForm::new();
        type_str(&mut form, "x");
        form.toggle_focus();
        form.reset();
        assert!(form.officer_id.is_empty());
        assert_eq!(form.focus, LoginField::OfficerId);
    }
}
