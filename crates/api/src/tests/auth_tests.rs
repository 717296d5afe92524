// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gesttransport_domain::{FormMode, User, UserDraft};
use gesttransport_persistence::Persistence;

use crate::tests::helpers::create_test_persistence;
use crate::{ApiError, AuthenticationService, CrudModule, Form, Session};

#[test]
fn test_seeded_admin_authenticates_with_admin_role() {
    let mut persistence: Persistence = create_test_persistence();

    let session: Session = AuthenticationService::authenticate(&mut persistence, "admin", "admin123")
        .unwrap()
        .expect("seeded admin should authenticate");

    assert_eq!(session.login, "admin");
    assert_eq!(session.role.as_deref(), Some("Admin"));
    assert_eq!(session.display_name(), "Admin Super");
    assert_eq!(session.company.as_deref(), Some("Ma Société"));
}

#[test]
fn test_wrong_password_returns_no_user() {
    let mut persistence: Persistence = create_test_persistence();

    let session: Option<Session> =
        AuthenticationService::authenticate(&mut persistence, "admin", "wrong").unwrap();

    assert!(session.is_none());
}

#[test]
fn test_login_failure_does_not_reveal_which_field_was_wrong() {
    let mut persistence: Persistence = create_test_persistence();

    let unknown_login = AuthenticationService::login(&mut persistence, "nobody", "admin123");
    let wrong_password = AuthenticationService::login(&mut persistence, "admin", "admin");

    assert_eq!(unknown_login, Err(ApiError::AuthenticationFailed));
    assert_eq!(wrong_password, Err(ApiError::AuthenticationFailed));
    assert_eq!(
        ApiError::AuthenticationFailed.to_string(),
        "Incorrect login or password."
    );
}

#[test]
fn test_password_is_not_trimmed() {
    let mut persistence: Persistence = create_test_persistence();

    let session: Option<Session> =
        AuthenticationService::authenticate(&mut persistence, "admin", " admin123").unwrap();

    assert!(session.is_none());
}

#[test]
fn test_created_user_can_log_in_and_blank_edit_keeps_password() {
    let mut persistence: Persistence = create_test_persistence();
    let mut users: CrudModule<User> = CrudModule::new();

    let mut form: Form<User> = Form::create();
    form.draft = UserDraft {
        last_name: String::from("Ndiaye"),
        first_name: String::from("Fatou"),
        login: String::from("fatou"),
        password: String::from("s3cret"),
        role_id: Some(2),
        ..UserDraft::default()
    };
    let user_id: i64 = users.save(&mut persistence, &form).unwrap();

    let session: Session = AuthenticationService::login(&mut persistence, "fatou", "s3cret").unwrap();
    assert_eq!(session.user_id, user_id);
    assert_eq!(session.role.as_deref(), Some("Agent"));

    let mut edit: Form<User> = CrudModule::<User>::open_form(&mut persistence, Some(user_id)).unwrap();
    assert_eq!(edit.mode(), FormMode::Edit(user_id));
    assert!(edit.draft.password.is_empty());
    edit.draft.phone = String::from("70 000 00 00");
    users.save(&mut persistence, &edit).unwrap();

    assert!(AuthenticationService::login(&mut persistence, "fatou", "s3cret").is_ok());
}
