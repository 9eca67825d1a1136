use crate::cli::RoleArg;

/// Dashboard a caller acts through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Student,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Student => Self::Student,
            RoleArg::Admin => Self::Admin,
        }
    }
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    /// Whether this role's dashboard offers `action`.
    #[must_use]
    pub const fn permits(self, action: Action) -> bool {
        match self {
            Self::Student => matches!(action, Action::Report | Action::List | Action::Search),
            Self::Admin => matches!(
                action,
                Action::List | Action::Search | Action::Stats | Action::Chart
            ),
        }
    }
}

/// Registry operations gated by role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Report,
    List,
    Search,
    Stats,
    Chart,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::List => "list",
            Self::Search => "search",
            Self::Stats => "stats",
            Self::Chart => "chart",
        }
    }
}

/// Who is running the current command.
#[derive(Clone, Debug)]
pub struct Session {
    pub role: Role,
    pub user: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(role: Role, user: Option<String>) -> Self {
        Self {
            role,
            user: user.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Fail unless this session's role may run `action`.
    pub fn authorize(&self, action: Action) -> anyhow::Result<()> {
        if self.role.permits(action) {
            return Ok(());
        }
        anyhow::bail!(
            "'{}' is not available to the {} dashboard; try --role {}",
            action.as_str(),
            self.role.as_str(),
            match self.role {
                Role::Student => Role::Admin.as_str(),
                Role::Admin => Role::Student.as_str(),
            }
        )
    }
}
