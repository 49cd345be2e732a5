use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::user::entities::User;

/// Optional equality/membership criteria for the user listing. Absent fields
/// impose no constraint; supplied fields combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role_name: Option<String>,
    pub role_id: Option<i32>,
}

impl UserFilter {
    /// True when the user satisfies every supplied criterion. Name and email
    /// are exact, case-sensitive matches; role criteria match if any attached
    /// role has the given id or name.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(id) = self.id {
            if user.id != id {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if user.name != *name {
                return false;
            }
        }
        if let Some(age) = self.age {
            if user.age != age {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if user.email != *email {
                return false;
            }
        }
        if let Some(role_name) = &self.role_name {
            if !user.roles.iter().any(|role| role.name == *role_name) {
                return false;
            }
        }
        if let Some(role_id) = self.role_id {
            if !user.roles.iter().any(|role| role.id == role_id) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Age,
    Email,
    RoleName,
    RoleId,
}

impl SortKey {
    /// Maps a raw sort parameter to a key, case-insensitively. Unrecognized
    /// or absent values fall back to id ordering.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(|value| value.to_ascii_lowercase()).as_deref() {
            Some("name") => SortKey::Name,
            Some("age") => SortKey::Age,
            Some("email") => SortKey::Email,
            Some("rolename") => SortKey::RoleName,
            Some("roleid") => SortKey::RoleId,
            _ => SortKey::Id,
        }
    }

    /// Total order over users for this key. Id is applied as an implicit
    /// secondary key so equal primary keys compare deterministically.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let primary = match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::RoleName => first_role_name(a).cmp(&first_role_name(b)),
            SortKey::RoleId => lowest_role_id(a).cmp(&lowest_role_id(b)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Alphabetically first attached role name. Users without roles order before
/// users with roles.
fn first_role_name(user: &User) -> Option<&str> {
    user.roles.iter().map(|role| role.name.as_str()).min()
}

/// Numerically lowest attached role id. Users without roles order first.
fn lowest_role_id(user: &User) -> Option<i32> {
    user.roles.iter().map(|role| role.id).min()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(CoreError::Validation(
                "sortDir must be either asc or desc".to_string(),
            )),
        }
    }
}

/// Raw listing parameters as received from the HTTP layer. Sort and page
/// values are validated by the service before any data is fetched.
#[derive(Debug, Clone, Default)]
pub struct GetUsersFilter {
    pub filter: UserFilter,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    pub name: String,
    pub age: i32,
    pub email: String,
    /// Submitted role ids, unresolved. Unknown ids are dropped silently.
    pub role_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserInput {
    pub user_id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub role_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserRoleInput {
    pub user_id: i32,
    pub role_id: i32,
    pub role_name: String,
}

/// Repository-level create request. Role ids are already resolved against the
/// reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub role_ids: Vec<i32>,
}

/// Repository-level update request, replacing fields and role set wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub user_id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub role_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::entities::Role;

    fn user(id: i32, name: &str, age: i32, email: &str, roles: &[(i32, &str)]) -> User {
        User {
            id,
            name: name.to_string(),
            age,
            email: email.to_string(),
            roles: roles
                .iter()
                .map(|(role_id, role_name)| Role {
                    id: *role_id,
                    name: role_name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let alice = user(1, "Alice", 30, "alice@example.com", &[(2, "Admin")]);
        assert!(UserFilter::default().matches(&alice));
    }

    #[test]
    fn filter_criteria_combine_conjunctively() {
        let alice = user(1, "Alice", 30, "alice@example.com", &[(2, "Admin")]);

        let filter = UserFilter {
            name: Some("Alice".to_string()),
            age: Some(30),
            ..Default::default()
        };
        assert!(filter.matches(&alice));

        let filter = UserFilter {
            name: Some("Alice".to_string()),
            age: Some(31),
            ..Default::default()
        };
        assert!(!filter.matches(&alice));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let alice = user(1, "Alice", 30, "alice@example.com", &[]);
        let filter = UserFilter {
            name: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&alice));
    }

    #[test]
    fn role_criteria_match_any_attached_role() {
        let alice = user(
            1,
            "Alice",
            30,
            "alice@example.com",
            &[(1, "User"), (2, "Admin")],
        );

        let by_name = UserFilter {
            role_name: Some("Admin".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&alice));

        let by_id = UserFilter {
            role_id: Some(4),
            ..Default::default()
        };
        assert!(!by_id.matches(&alice));
    }

    #[test]
    fn sort_key_resolution_is_case_insensitive_with_id_fallback() {
        assert_eq!(SortKey::resolve(Some("AGE")), SortKey::Age);
        assert_eq!(SortKey::resolve(Some("RoleName")), SortKey::RoleName);
        assert_eq!(SortKey::resolve(Some("roleid")), SortKey::RoleId);
        assert_eq!(SortKey::resolve(Some("height")), SortKey::Id);
        assert_eq!(SortKey::resolve(None), SortKey::Id);
    }

    #[test]
    fn sort_direction_rejects_unknown_values() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!(matches!(
            "sideways".parse::<SortDirection>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn role_name_key_orders_roleless_users_first() {
        let no_roles = user(1, "A", 20, "a@example.com", &[]);
        let admin = user(2, "B", 20, "b@example.com", &[(2, "Admin")]);
        assert_eq!(SortKey::RoleName.compare(&no_roles, &admin), Ordering::Less);
    }

    #[test]
    fn equal_primary_keys_break_ties_by_id() {
        let a = user(3, "Same", 20, "x@example.com", &[]);
        let b = user(1, "Same", 20, "y@example.com", &[]);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Greater);
    }
}
