use crate::domain::role::entities::Role;
use crate::domain::user::entities::User;
use crate::entity::roles::Model as RoleModel;
use crate::entity::users::Model as UserModel;

impl From<(UserModel, Vec<RoleModel>)> for User {
    fn from((user, mut roles): (UserModel, Vec<RoleModel>)) -> Self {
        // Stable role order regardless of how the join returned them.
        roles.sort_by_key(|role| role.id);
        User {
            id: user.id,
            name: user.name,
            age: user.age,
            email: user.email,
            roles: roles.into_iter().map(Role::from).collect(),
        }
    }
}
