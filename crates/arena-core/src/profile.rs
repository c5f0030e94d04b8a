//! Profile page form state and validation.

use thiserror::Error;

use crate::model::Notice;

/// Accepted age range for a player account.
pub const MIN_AGE: u32 = 12;
pub const MAX_AGE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Profile,
    Settings,
    ConnectedAccounts,
    Billing,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Profile,
        ProfileTab::Settings,
        ProfileTab::ConnectedAccounts,
        ProfileTab::Billing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Profile => "Profile",
            ProfileTab::Settings => "Settings",
            ProfileTab::ConnectedAccounts => "Connected Accounts",
            ProfileTab::Billing => "Billings",
        }
    }
}

/// Reasons a profile save is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Age must be a number between 12 and 60")]
    InvalidAge,
    #[error("Enter your current password to change it")]
    MissingCurrentPassword,
    #[error("New password and confirmation do not match")]
    PasswordMismatch,
}

/// Account info fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub username: String,
    pub email: String,
    pub age: String,
    pub current_password: String,
}

impl AccountForm {
    /// The account shown before the profile service exists.
    pub fn sample() -> Self {
        Self {
            username: "johndoe".to_string(),
            email: "john.doe@example.com".to_string(),
            age: "25".to_string(),
            current_password: String::new(),
        }
    }
}

/// Change-password fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

/// State behind the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    pub active_tab: ProfileTab,
    pub account: AccountForm,
    pub password: PasswordForm,
    pub notice: Option<Notice>,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::new(AccountForm::sample())
    }
}

impl ProfileEditor {
    pub fn new(account: AccountForm) -> Self {
        Self {
            active_tab: ProfileTab::Profile,
            account,
            password: PasswordForm::default(),
            notice: None,
        }
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }

    /// Update a field by its form name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "username" => self.account.username = value,
            "email" => self.account.email = value,
            "age" => self.account.age = value,
            "currentPassword" => self.account.current_password = value,
            "newPassword" => self.password.new_password = value,
            "confirmPassword" => self.password.confirm_password = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let account = &self.account;
        if account.username.trim().is_empty() {
            return Err(ProfileError::EmptyUsername);
        }
        if !is_plausible_email(account.email.trim()) {
            return Err(ProfileError::InvalidEmail);
        }
        let age = account.age.trim();
        if !age.is_empty() {
            match age.parse::<u32>() {
                Ok(n) if (MIN_AGE..=MAX_AGE).contains(&n) => {}
                _ => return Err(ProfileError::InvalidAge),
            }
        }
        let password = &self.password;
        if !password.new_password.is_empty() || !password.confirm_password.is_empty() {
            if account.current_password.is_empty() {
                return Err(ProfileError::MissingCurrentPassword);
            }
            if password.new_password != password.confirm_password {
                return Err(ProfileError::PasswordMismatch);
            }
        }
        Ok(())
    }

    /// Validate and "save". Password fields are cleared on success.
    pub fn save(&mut self) -> Result<(), ProfileError> {
        match self.validate() {
            Ok(()) => {
                self.account.current_password.clear();
                self.password = PasswordForm::default();
                self.notice = Some(Notice::success("Profile updated successfully!"));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoticeKind;

    #[test]
    fn sample_profile_is_valid() {
        let mut editor = ProfileEditor::default();
        assert_eq!(editor.save(), Ok(()));
        assert_eq!(editor.notice.unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn field_updates_by_name() {
        let mut editor = ProfileEditor::default();
        editor.set_field("username", "neo");
        editor.set_field("newPassword", "hunter2");
        editor.set_field("nickname", "ignored");
        assert_eq!(editor.account.username, "neo");
        assert_eq!(editor.password.new_password, "hunter2");
    }

    #[test]
    fn validation_errors_in_field_order() {
        let mut editor = ProfileEditor::default();
        editor.set_field("username", "  ");
        editor.set_field("email", "nope");
        assert_eq!(editor.validate(), Err(ProfileError::EmptyUsername));

        editor.set_field("username", "neo");
        assert_eq!(editor.validate(), Err(ProfileError::InvalidEmail));

        editor.set_field("email", "neo@matrix.io");
        editor.set_field("age", "11");
        assert_eq!(editor.validate(), Err(ProfileError::InvalidAge));
        editor.set_field("age", "sixty");
        assert_eq!(editor.validate(), Err(ProfileError::InvalidAge));
        editor.set_field("age", "");
        assert_eq!(editor.validate(), Ok(()));
    }

    #[test]
    fn password_change_needs_current_and_matching_confirmation() {
        let mut editor = ProfileEditor::default();
        editor.set_field("newPassword", "s3cret");
        assert_eq!(editor.validate(), Err(ProfileError::MissingCurrentPassword));

        editor.set_field("currentPassword", "old");
        editor.set_field("confirmPassword", "s3cre7");
        assert_eq!(editor.save(), Err(ProfileError::PasswordMismatch));
        assert_eq!(editor.notice.as_ref().unwrap().kind, NoticeKind::Error);

        editor.set_field("confirmPassword", "s3cret");
        assert_eq!(editor.save(), Ok(()));
        assert!(editor.account.current_password.is_empty());
        assert_eq!(editor.password, PasswordForm::default());
    }

    #[test]
    fn failed_save_reports_error_and_keeps_passwords() {
        let mut editor = ProfileEditor::default();
        editor.set_field("email", "nope");
        editor.set_field("newPassword", "hunter2");
        assert_eq!(editor.save(), Err(ProfileError::InvalidEmail));
        let notice = editor.notice.clone().unwrap();
        assert_eq!(notice.message, ProfileError::InvalidEmail.to_string());
        assert_eq!(editor.password.new_password, "hunter2");
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("john.doe@example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("john@localhost"));
        assert!(!is_plausible_email("john@.com"));
    }
}
