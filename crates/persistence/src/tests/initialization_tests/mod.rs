// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Connection setup, migrations and first-run seeding.

use super::{create_test_client, create_test_persistence};
use crate::{
    DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_PASSWORD, Persistence, PersistenceError, SeedReport,
    UserProfile, hash_password,
};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = create_test_persistence();
    let mut db2: Persistence = create_test_persistence();

    create_test_client(&mut db1, "Diallo", "Awa");

    assert_eq!(db1.list_clients("").unwrap().len(), 1);
    assert!(db2.list_clients("").unwrap().is_empty());
}

#[test]
fn test_fresh_database_is_seeded() {
    let mut persistence: Persistence = create_test_persistence();

    assert_eq!(
        persistence.seed_report(),
        SeedReport {
            roles: true,
            company: true,
            admin: true,
        }
    );

    let roles: Vec<String> = persistence
        .list_roles()
        .unwrap()
        .into_iter()
        .map(|role| role.name)
        .collect();
    assert_eq!(roles, vec!["Admin", "Agent"]);

    let companies = persistence.list_companies("").unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Ma Société");
    assert_eq!(companies[0].description.as_deref(), Some("Société principale"));

    let users = persistence.list_users("").unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].login, "admin");
    assert_eq!(users[0].last_name, "Admin");
    assert_eq!(users[0].first_name, "Super");
    assert_eq!(users[0].role_name.as_deref(), Some("Admin"));
}

#[test]
fn test_admin_password_is_stored_as_sha256_hex() {
    let mut persistence: Persistence = create_test_persistence();
    let hash: String = persistence.get_password_hash(1).unwrap().unwrap();

    assert_eq!(
        hash,
        "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
    );
    assert_eq!(hash, hash_password(DEFAULT_ADMIN_PASSWORD));
}

#[test]
fn test_default_credentials_resolve_profile() {
    let mut persistence: Persistence = create_test_persistence();

    let profile: UserProfile = persistence
        .find_user_by_credentials(DEFAULT_ADMIN_LOGIN, DEFAULT_ADMIN_PASSWORD)
        .unwrap()
        .unwrap();
    assert_eq!(profile.user_id, 1);
    assert_eq!(profile.role_name.as_deref(), Some("Admin"));
    assert_eq!(profile.company_name.as_deref(), Some("Ma Société"));

    assert!(
        persistence
            .find_user_by_credentials("admin", "wrong")
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .find_user_by_credentials("nobody", DEFAULT_ADMIN_PASSWORD)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_foreign_keys_are_not_enforced() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(!persistence.foreign_key_enforcement_enabled().unwrap());
}

#[test]
fn test_reopening_file_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agency.db");

    {
        let mut first: Persistence = Persistence::new_with_file(&path).unwrap();
        assert!(first.seed_report().admin);
        create_test_client(&mut first, "Diallo", "Awa");
    }

    let mut second: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(second.seed_report(), SeedReport::default());
    assert_eq!(second.list_roles().unwrap().len(), 2);
    assert_eq!(second.list_companies("").unwrap().len(), 1);
    assert_eq!(second.list_users("").unwrap().len(), 1);
    assert_eq!(second.list_clients("").unwrap().len(), 1);
}

#[test]
fn test_seeding_skips_only_populated_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agency.db");

    {
        let mut first: Persistence = Persistence::new_with_file(&path).unwrap();
        first.delete_company(1).unwrap();
    }

    let mut second: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(
        second.seed_report(),
        SeedReport {
            roles: false,
            company: true,
            admin: false,
        }
    );
    assert_eq!(second.list_users("").unwrap().len(), 1);
}
