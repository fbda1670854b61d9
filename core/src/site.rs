use serde::{Deserialize, Serialize};

/// State of a single grid site. The only transition is `Blocked -> Open`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Site {
    #[default]
    Blocked,
    Open,
}

impl Site {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
