mod app_context;
mod project_root;
mod session;

pub use app_context::AppContext;
pub use project_root::{find_project_root, resolve_explicit};
pub use session::{Action, Role, Session};
