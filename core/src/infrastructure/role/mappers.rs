use crate::domain::role::entities::Role;
use crate::entity::roles::Model as RoleModel;

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            name: model.name,
        }
    }
}
