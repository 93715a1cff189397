mod user;
mod forms;
mod project;
mod role;
mod session;

pub use user::{User, UserSummary, MAX_USERNAME_LEN};
pub use forms::{LoginForm, SignupForm, ChangeRoleForm, DeleteUserForm};
pub use project::Project;
pub use role::{Role, Permission};
pub use session::SessionData;
