// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity storage seam used by the generic list/form workflow.

use gesttransport_domain::{
    Client, ClientDraft, ClientRow, Company, CompanyDraft, Driver, DriverDraft, DriverRow, Entity,
    Route, RouteDraft, RouteRow, User, UserDraft, UserRow, Vehicle, VehicleDraft, VehicleRow,
};
use gesttransport_persistence::{Persistence, PersistenceError};

/// Storage operations for one entity kind.
///
/// `Persistence` implements this for every entity with a list/form module.
pub trait Repository<E: Entity> {
    /// Lists rows matching a free-text filter (blank matches everything).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn list(&mut self, filter: &str) -> Result<Vec<E::Row>, PersistenceError>;

    /// Retrieves a record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn find(&mut self, id: i64) -> Result<Option<E>, PersistenceError>;

    /// Inserts a validated draft and returns the new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert(&mut self, draft: &E::Draft) -> Result<i64, PersistenceError>;

    /// Updates the record with `id` from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or the update fails.
    fn update(&mut self, id: i64, draft: &E::Draft) -> Result<(), PersistenceError>;

    /// Deletes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or the delete fails.
    fn delete(&mut self, id: i64) -> Result<(), PersistenceError>;
}

macro_rules! persistence_repository {
    ($entity:ty, $row:ty, $draft:ty, $list:ident, $get:ident, $create:ident, $update:ident, $delete:ident) => {
        impl Repository<$entity> for Persistence {
            fn list(&mut self, filter: &str) -> Result<Vec<$row>, PersistenceError> {
                self.$list(filter)
            }

            fn find(&mut self, id: i64) -> Result<Option<$entity>, PersistenceError> {
                self.$get(id)
            }

            fn insert(&mut self, draft: &$draft) -> Result<i64, PersistenceError> {
                self.$create(draft)
            }

            fn update(&mut self, id: i64, draft: &$draft) -> Result<(), PersistenceError> {
                self.$update(id, draft)
            }

            fn delete(&mut self, id: i64) -> Result<(), PersistenceError> {
                self.$delete(id)
            }
        }
    };
}

persistence_repository!(
    Company,
    Company,
    CompanyDraft,
    list_companies,
    get_company,
    create_company,
    update_company,
    delete_company
);
persistence_repository!(
    Vehicle,
    VehicleRow,
    VehicleDraft,
    list_vehicles,
    get_vehicle,
    create_vehicle,
    update_vehicle,
    delete_vehicle
);
persistence_repository!(
    Driver,
    DriverRow,
    DriverDraft,
    list_drivers,
    get_driver,
    create_driver,
    update_driver,
    delete_driver
);
persistence_repository!(
    Client,
    ClientRow,
    ClientDraft,
    list_clients,
    get_client,
    create_client,
    update_client,
    delete_client
);
persistence_repository!(
    User,
    UserRow,
    UserDraft,
    list_users,
    get_user,
    create_user,
    update_user,
    delete_user
);
persistence_repository!(
    Route,
    RouteRow,
    RouteDraft,
    list_routes,
    get_route,
    create_route,
    update_route,
    delete_route
);
