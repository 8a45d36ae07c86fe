use crate::model::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub department: String,
}

impl User {
    /// Display label attached to busy timeline cells.
    pub fn display_label(&self) -> String {
        format!("{} / {}", self.name, self.department)
    }
}
