use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    UsersGet,
    UsersPost,
    UsersDelete,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsersGet => "usersGet",
            Self::UsersPost => "usersPost",
            Self::UsersDelete => "usersDelete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
